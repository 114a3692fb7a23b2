//! Fixed wording used when asking the model for an order summary.
//!
//! The guide builders and the prompt composer only interpolate catalog data
//! and the conversation into these strings.

/// First line of the menu component guide.
pub const MENU_ITEM_GUIDE_HEADER: &str = "For the menuItems line, describe final quantities per component using comma-separated `항목=수량` pairs. Reflect any changes the customer requested. Use these component sets:";

/// Closing lines of the menu component guide.
pub const MENU_ITEM_GUIDE_FOOTER: [&str; 3] = [
    "If multiple 세트가 함께 주문되면 각 세트에 맞는 항목을 모두 포함하고, 언급되지 않은 항목은 `항목=미확인`으로 남기세요.",
    "",
    "IMPORTANT: When multiple menus are ordered, you must list each menu separately in the orderItems section below.",
];

/// First line of the style guide.
pub const STYLE_GUIDE_HEADER: &str = "Use one of these 서빙 스타일 이름(또는 null) for menuStyle:";

/// Shown for a style whose description is blank.
pub const STYLE_DESCRIPTION_PLACEHOLDER: &str = "설명 없음";

/// System instructions placed before the date rules.
pub const SUMMARY_FORMAT_RULES: &[&str] = &[
    "You are an expert maître d' that produces structured order snapshots for Mr. Daebak Dinner.",
    "Return plain text with the following structure:",
    "",
    "First, output these common fields (one per line):",
    "customerName = <customer's name mentioned in conversation or greeting (e.g., '홍길동', '김철수') or null if not mentioned>",
    "customerAddress = <value or null>",
    "deliveryTime = <ISO 8601 datetime or null>",
    "couponCode = <coupon code or coupon name mentioned by customer or null>",
    "useCoupon = <true or false or null>",
    "",
    "Then, for the menu information:",
    "- If only ONE menu is ordered, output these lines:",
    "  menuName = <menu name>",
    "  menuStyle = <style name or null>",
    "  menuItems = <comma separated list of item=quantity>",
    "  quantity = <integer number or null>",
    "",
    "- If MULTIPLE menus are ordered, output orderItems array instead:",
    "  orderItems = [",
    "    {menuName: '<menu name 1>', menuStyle: '<style or null>', menuItems: '<item=quantity pairs>', quantity: <number>},",
    "    {menuName: '<menu name 2>', menuStyle: '<style or null>', menuItems: '<item=quantity pairs>', quantity: <number>}",
    "  ]",
    "",
    "For orderItems: each menu must have its own entry with menuName, menuStyle (can be null), menuItems (can be null), and quantity.",
    "When multiple menus are ordered, DO NOT use the single menuName/menuStyle/menuItems/quantity fields. Use orderItems array instead.",
    "",
];

/// System instructions placed after the date rule.
pub const SUMMARY_VALUE_RULES: &[&str] = &[
    "For quantity: extract the number of menu sets ordered for EACH menu separately (e.g., '발렌타인 디너 2개' means quantity = 2 for that menu). If not mentioned, use 1.",
    "For couponCode: extract the coupon code or name if the customer mentioned using a coupon (e.g., 'REGULAR10000', '단골 쿠폰', '쿠폰 사용'). If no coupon mentioned, use null.",
    "For useCoupon: set to true if customer mentioned using a coupon, false if they explicitly said not to use one, null if not mentioned.",
    "For deliveryTime: if customer mentioned a specific future date/time for delivery, set it here. If they want immediate delivery or didn't specify, use null.",
    "Do not add extra lines or commentary. Use \"null\" (without quotes) for missing information. Use \"true\" or \"false\" (lowercase, without quotes) for boolean values.",
    "When the conversation was in Korean, keep the values in Korean; otherwise mirror the customer language.",
];

/// Date rule with the assumed "today" interpolated.
pub fn delivery_date_rule(assumed_date: &str) -> String {
    format!(
        "Use ISO 8601 format (YYYY-MM-DDTHH:mm:ss) for deliveryTime. Assume today is {assumed_date} and normalize any inferred delivery date to that day unless the customer explicitly requested another date."
    )
}

/// Opening line of the user message.
pub const TRANSCRIPT_INTRO: &str = "다음은 고객과의 최종 주문 대화 내용입니다.";

/// Label placed before the final message.
pub const FINAL_MESSAGE_LABEL: &str = "최종 안내 메시지:";

/// Closing directive of the user message.
pub const SUMMARY_DIRECTIVE: &str = "위 내용을 기준으로 주문 요약을 출력하세요.";
