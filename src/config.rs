use std::env;
use std::path::PathBuf;

const DEFAULT_LOCATIONS_PATH: &str = "data/state_cities.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> anyhow::Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("unknown LOG_FORMAT '{}'", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub public_base_url: String,
    pub locations_path: PathBuf,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let public_base_url = env::var("PUBLIC_BASE_URL")?;

        let locations_path = env::var("LOCATIONS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOCATIONS_PATH));

        let log_format = match env::var("LOG_FORMAT") {
            Ok(v) => LogFormat::parse(&v)?,
            Err(_) => LogFormat::default(),
        };

        Ok(Self::new(public_base_url, locations_path, log_format))
    }

    pub fn new(
        public_base_url: impl Into<String>,
        locations_path: impl Into<PathBuf>,
        log_format: LogFormat,
    ) -> Self {
        let public_base_url = public_base_url.into();
        Self {
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            locations_path: locations_path.into(),
            log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let cfg = Config::new("https://api.example.tn/", "x.json", LogFormat::Json);
        assert_eq!(cfg.public_base_url, "https://api.example.tn");
    }

    #[test]
    fn log_format_parsing() {
        assert_eq!(LogFormat::parse("JSON").unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::parse(" pretty ").unwrap(), LogFormat::Pretty);
        assert!(LogFormat::parse("xml").is_err());
    }
}
