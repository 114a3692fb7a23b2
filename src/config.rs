use std::env;
use std::path::PathBuf;

use crate::ai::config::AiConfig;

#[derive(Clone, Debug)]
pub struct Config {
    pub catalog_path: PathBuf,
    /// Date the model treats as "today", `YYYY-MM-DD`.
    pub assumed_date: String,
    pub ai: Option<AiConfig>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let catalog_path = env::var("CATALOG_PATH").unwrap_or_else(|_| "catalog.json".to_string());
        let assumed_date = env::var("ORDER_ASSUMED_DATE")
            .unwrap_or_else(|_| chrono::Local::now().format("%Y-%m-%d").to_string());
        let ai = AiConfig::from_env();
        Self {
            catalog_path: PathBuf::from(catalog_path),
            assumed_date,
            ai,
        }
    }
}
