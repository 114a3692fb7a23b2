use std::env;

#[derive(Clone, Debug)]
pub struct AiConfig {
    pub api_key: String,
    pub summary_model: String,
    pub openai_chat_url: Option<String>,
}

impl AiConfig {
    pub fn from_env() -> Option<Self> {
        let api_key = match env::var("OPENAI_API_KEY") {
            Ok(k) => k,
            Err(_) => return None,
        };
        Some(Self {
            api_key,
            summary_model: env::var("OPENAI_SUMMARY_MODEL")
                .unwrap_or_else(|_| "gpt-4.1".to_string()),
            openai_chat_url: env::var("OPENAI_CHAT_URL").ok(),
        })
    }
}
