//! Builds the two-message instruction payload for an order summary.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::ai::prompts::{
    delivery_date_rule, FINAL_MESSAGE_LABEL, SUMMARY_DIRECTIVE, SUMMARY_FORMAT_RULES,
    SUMMARY_VALUE_RULES, TRANSCRIPT_INTRO,
};
use crate::catalog::Catalog;
use crate::guide::{build_menu_item_guide, build_style_guide};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    #[default]
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Conversation handed over when the customer confirms an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmRequest {
    pub history: Vec<ChatMessage>,
    #[serde(default)]
    pub final_message: Option<String>,
}

/// Render the transcript as `ROLE: content` lines.
pub fn render_transcript(history: &[ChatMessage]) -> String {
    history
        .iter()
        .map(|msg| format!("{}: {}", msg.role.as_str().to_uppercase(), msg.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the `[system, user]` messages asking for an order summary.
///
/// The output depends only on the arguments, so the same catalog and
/// conversation always produce the same prompt.
#[instrument(level = "trace", skip(catalog, history))]
pub fn build_summary_prompt(
    catalog: &Catalog,
    history: &[ChatMessage],
    final_message: &str,
    assumed_date: &str,
) -> [ChatMessage; 2] {
    let mut system_lines: Vec<String> = SUMMARY_FORMAT_RULES.iter().map(|l| l.to_string()).collect();
    system_lines.push(delivery_date_rule(assumed_date));
    system_lines.extend(SUMMARY_VALUE_RULES.iter().map(|l| l.to_string()));
    system_lines.push(String::new());
    system_lines.extend(build_menu_item_guide(catalog));
    system_lines.push(String::new());
    system_lines.extend(build_style_guide(catalog));

    let user_lines = [
        TRANSCRIPT_INTRO.to_string(),
        String::new(),
        render_transcript(history),
        String::new(),
        FINAL_MESSAGE_LABEL.to_string(),
        final_message.to_string(),
        String::new(),
        SUMMARY_DIRECTIVE.to_string(),
    ];

    debug!(
        history_len = history.len(),
        system_lines = system_lines.len(),
        "Built summary prompt"
    );

    [
        ChatMessage::new(Role::System, system_lines.join("\n")),
        ChatMessage::new(Role::User, user_lines.join("\n")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_rejects_unknown_values() {
        let err = serde_json::from_str::<ChatMessage>(r#"{"role": "tool", "content": "x"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn role_defaults_to_user() {
        let msg: ChatMessage = serde_json::from_str(r#"{"content": "안녕하세요"}"#).unwrap();
        assert_eq!(msg.role, Role::User);
    }

    #[test]
    fn transcript_uppercases_roles() {
        let history = vec![
            ChatMessage::new(Role::Assistant, "무엇을 드릴까요?"),
            ChatMessage::new(Role::User, "발렌타인 디너 2개요"),
        ];
        assert_eq!(
            render_transcript(&history),
            "ASSISTANT: 무엇을 드릴까요?\nUSER: 발렌타인 디너 2개요"
        );
    }

    #[test]
    fn confirm_request_uses_camel_case() {
        let req: OrderConfirmRequest = serde_json::from_str(
            r#"{"history": [{"role": "user", "content": "hi"}], "finalMessage": "bye"}"#,
        )
        .unwrap();
        assert_eq!(req.final_message.as_deref(), Some("bye"));
        assert_eq!(req.history.len(), 1);
    }
}
