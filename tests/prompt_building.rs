use order_summary::{build_summary_prompt, Catalog, ChatMessage, Role};

const CATALOG: &str = r#"{
    "menus": [
        {"menu_id": "VALENTINE", "name": "발렌타인 디너"},
        {"menu_id": "FRENCH", "name": "프렌치 디너"}
    ],
    "menu_items": [
        {"menu_id": "valentine", "item_name": "스테이크", "unit_price": 30000},
        {"menu_id": "VALENTINE", "item_name": "하트 장식"},
        {"menu_id": "French", "item_name": "커피", "unit_price": 5000},
        {"menu_id": "FRENCH", "item_name": "샐러드", "unit_price": 7000}
    ],
    "styles": [
        {"name": "심플 스타일", "description": "플라스틱 접시"},
        {"name": "그랜드 스타일"}
    ]
}"#;

fn history() -> Vec<ChatMessage> {
    vec![
        ChatMessage::new(Role::Assistant, "안녕하세요, 무엇을 주문하시겠어요?"),
        ChatMessage::new(Role::User, "프렌치 디너 2개 심플 스타일로 주세요"),
    ]
}

#[test]
fn prompt_is_system_then_user() {
    let catalog = Catalog::from_json_str(CATALOG).unwrap();
    let [system, user] = build_summary_prompt(&catalog, &history(), "주문 확인했습니다.", "2025-12-08");
    assert_eq!(system.role, Role::System);
    assert_eq!(user.role, Role::User);
}

#[test]
fn system_message_embeds_guides_and_date() {
    let catalog = Catalog::from_json_str(CATALOG).unwrap();
    let [system, _] = build_summary_prompt(&catalog, &history(), "", "2025-12-08");
    assert!(system.content.contains("Assume today is 2025-12-08"));
    assert!(system.content.contains("- 발렌타인 디너: 스테이크\n"));
    assert!(system.content.contains("- 프렌치 디너: 커피, 샐러드\n"));
    assert!(!system.content.contains("하트 장식"));
    assert!(system.content.contains("- 심플 스타일: 플라스틱 접시"));
    assert!(system.content.contains("- 그랜드 스타일: 설명 없음"));
    assert!(system.content.contains("orderItems = ["));
}

#[test]
fn user_message_renders_transcript_and_final_message() {
    let catalog = Catalog::default();
    let [_, user] = build_summary_prompt(&catalog, &history(), "주문 확인했습니다.", "2025-12-08");
    let lines: Vec<&str> = user.content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "다음은 고객과의 최종 주문 대화 내용입니다.",
            "",
            "ASSISTANT: 안녕하세요, 무엇을 주문하시겠어요?",
            "USER: 프렌치 디너 2개 심플 스타일로 주세요",
            "",
            "최종 안내 메시지:",
            "주문 확인했습니다.",
            "",
            "위 내용을 기준으로 주문 요약을 출력하세요.",
        ]
    );
}

#[test]
fn prompt_is_deterministic() {
    let catalog = Catalog::from_json_str(CATALOG).unwrap();
    let first = build_summary_prompt(&catalog, &history(), "x", "2025-12-08");
    let second = build_summary_prompt(&catalog, &history(), "x", "2025-12-08");
    assert_eq!(first, second);
}
