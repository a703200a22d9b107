mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let mut config = load_from_path(&config_path).await?;
    apply_api_key_override(&mut config, env::var("GEMINI_API_KEY").ok());

    Ok(config)
}

/// Reads a config file; a missing file is not an error since every field
/// has a default (the API key stays empty until overridden).
pub async fn load_from_path(path: &str) -> Result<Config> {
    match tokio::fs::read_to_string(path).await {
        Ok(config_str) => Ok(serde_yaml::from_str(&config_str)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(e.into()),
    }
}

/// GEMINI_API_KEY wins over the file value whenever it is set and non-empty.
fn apply_api_key_override(config: &mut Config, env_key: Option<String>) {
    if let Some(key) = env_key {
        if !key.is_empty() {
            config.llm.api_key = key;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: Config = serde_yaml::from_str("llm:\n  api_key: file-key\n").unwrap();

        assert_eq!(config.llm.api_key, "file-key");
        assert_eq!(config.llm.model, "gemini-2.0-flash");
        assert_eq!(
            config.llm.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(config.llm.temperature, 0.7);
        assert_eq!(config.llm.max_output_tokens, 8192);
        assert_eq!(config.llm.timeout_secs, 120);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.logs.level, "info");
    }

    #[test]
    fn explicit_values_survive_parsing() {
        let yaml = "\
server:
  host: \"127.0.0.1\"
  port: 9090
  logs:
    level: \"debug\"
llm:
  api_key: \"abc\"
  model: \"gemini-2.5-pro\"
  temperature: 0.2
  max_output_tokens: 2048
  timeout_secs: 30
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.logs.level, "debug");
        assert_eq!(config.llm.model, "gemini-2.5-pro");
        assert_eq!(config.llm.temperature, 0.2);
        assert_eq!(config.llm.max_output_tokens, 2048);
        assert_eq!(config.llm.timeout_secs, 30);
    }

    #[test]
    fn env_key_overrides_file_key() {
        let mut config = Config::default();
        config.llm.api_key = "file-key".to_string();

        apply_api_key_override(&mut config, Some("env-key".to_string()));
        assert_eq!(config.llm.api_key, "env-key");
    }

    #[test]
    fn empty_or_absent_env_key_keeps_file_key() {
        let mut config = Config::default();
        config.llm.api_key = "file-key".to_string();

        apply_api_key_override(&mut config, Some(String::new()));
        assert_eq!(config.llm.api_key, "file-key");

        apply_api_key_override(&mut config, None);
        assert_eq!(config.llm.api_key, "file-key");
    }

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let config = load_from_path("/nonexistent/config.yaml").await.unwrap();
        assert_eq!(config.llm.api_key, "");
        assert_eq!(config.server.port, 8080);
    }

    #[tokio::test]
    async fn reads_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "llm:\n  api_key: from-file\n  model: gemini-2.0-pro").unwrap();

        let config = load_from_path(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(config.llm.api_key, "from-file");
        assert_eq!(config.llm.model, "gemini-2.0-pro");
    }

    #[tokio::test]
    async fn malformed_yaml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "llm: [not, a, mapping").unwrap();

        let result = load_from_path(file.path().to_str().unwrap()).await;
        assert!(result.is_err());
    }
}
