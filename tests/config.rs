use order_summary::ai::config::AiConfig;
use order_summary::Config;
use serial_test::serial;

#[test]
#[serial]
fn ai_config_from_env_missing_key() {
    std::env::remove_var("OPENAI_API_KEY");
    assert!(AiConfig::from_env().is_none());
}

#[test]
#[serial]
fn ai_config_from_env_defaults() {
    std::env::set_var("OPENAI_API_KEY", "k");
    std::env::remove_var("OPENAI_SUMMARY_MODEL");
    std::env::remove_var("OPENAI_CHAT_URL");
    let cfg = AiConfig::from_env().unwrap();
    assert_eq!(cfg.api_key, "k");
    assert_eq!(cfg.summary_model, "gpt-4.1");
    assert_eq!(cfg.openai_chat_url, None);
}

#[test]
#[serial]
fn ai_config_from_env_custom_model() {
    std::env::set_var("OPENAI_API_KEY", "k");
    std::env::set_var("OPENAI_SUMMARY_MODEL", "m");
    std::env::set_var("OPENAI_CHAT_URL", "http://localhost:1/v1/chat/completions");
    let cfg = AiConfig::from_env().unwrap();
    assert_eq!(cfg.summary_model, "m");
    assert_eq!(
        cfg.openai_chat_url.as_deref(),
        Some("http://localhost:1/v1/chat/completions")
    );
    std::env::remove_var("OPENAI_SUMMARY_MODEL");
    std::env::remove_var("OPENAI_CHAT_URL");
}

#[test]
#[serial]
fn config_from_env_reads_paths_and_date() {
    std::env::set_var("CATALOG_PATH", "menu.json");
    std::env::set_var("ORDER_ASSUMED_DATE", "2025-12-08");
    std::env::remove_var("OPENAI_API_KEY");
    let cfg = Config::from_env();
    assert_eq!(cfg.catalog_path, std::path::PathBuf::from("menu.json"));
    assert_eq!(cfg.assumed_date, "2025-12-08");
    assert!(cfg.ai.is_none());
}

#[test]
#[serial]
fn config_defaults_to_today() {
    std::env::remove_var("CATALOG_PATH");
    std::env::remove_var("ORDER_ASSUMED_DATE");
    let cfg = Config::from_env();
    assert_eq!(cfg.catalog_path, std::path::PathBuf::from("catalog.json"));
    assert_eq!(
        cfg.assumed_date,
        chrono::Local::now().format("%Y-%m-%d").to_string()
    );
}
