use std::env;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: Option<String>,
    pub currency_symbol: String,
    pub log_level: String,
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            log_level: "info".to_string(),
            environment: "development".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let config = Config {
            catalog_path: env::var("CATALOG_PATH").ok().filter(|p| !p.trim().is_empty()),
            currency_symbol: env::var("CURRENCY_SYMBOL")
                .unwrap_or(DEFAULT_CURRENCY_SYMBOL.to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or("info".to_string()),
            environment: env::var("APP_ENV").unwrap_or("development".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Command-line `--catalog` wins over `CATALOG_PATH`
    pub fn with_catalog_override(mut self, catalog: Option<String>) -> anyhow::Result<Self> {
        if catalog.is_some() {
            self.catalog_path = catalog;
            self.validate()?;
        }
        Ok(self)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.currency_symbol.trim().is_empty() {
            return Err(anyhow::anyhow!("CURRENCY_SYMBOL must not be empty"));
        }

        if let Some(path) = &self.catalog_path {
            if !path.ends_with(".json") {
                return Err(anyhow::anyhow!(
                    "CATALOG_PATH must point to a .json file, got '{}'",
                    path
                ));
            }
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.currency_symbol, "₹");
        assert!(!config.is_production());
    }

    #[test]
    fn test_catalog_override() {
        let config = Config::default()
            .with_catalog_override(Some("products.json".to_string()))
            .unwrap();
        assert_eq!(config.catalog_path.as_deref(), Some("products.json"));

        let unchanged = Config::default().with_catalog_override(None).unwrap();
        assert_eq!(unchanged.catalog_path, None);

        assert!(Config::default()
            .with_catalog_override(Some("products.csv".to_string()))
            .is_err());
    }

    #[test]
    fn test_blank_currency_symbol_is_rejected() {
        let config = Config {
            currency_symbol: " ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
