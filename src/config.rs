use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub fetch: FetchConfig,
    pub extraction: ExtractionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    /// Candidates with fewer digits than this are treated as noise.
    pub min_phone_digits: usize,
    /// Longest title (in tokens) still considered a possible person name.
    pub max_title_tokens: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch: FetchConfig {
                timeout_seconds: 15,
                user_agent: "contact-crawler/1.0 (+https://example)".to_string(),
                delay_ms: 500,
            },
            extraction: ExtractionConfig {
                min_phone_digits: 7,
                max_title_tokens: 4,
            },
            output: OutputConfig { pretty_json: true },
        }
    }
}

pub async fn load_config(path: &str) -> crate::Result<Config> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}
