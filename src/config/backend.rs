use super::traits::ConfigSection;
use crate::error::RvarError;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub trait_variations_path: String,
    pub grid_path: String,
    pub upload_path: String,
    pub genotype_path: String,
    pub detail_path: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/".to_string(),
            timeout_secs: 10,
            trait_variations_path: "/health/variations".to_string(),
            grid_path: "data/variations".to_string(),
            upload_path: "/personal/upload".to_string(),
            genotype_path: "/personal/genotype".to_string(),
            detail_path: "/varview".to_string(),
        }
    }
}

impl BackendConfig {
    pub fn base(&self) -> Result<Url, RvarError> {
        Url::parse(&self.base_url).map_err(|e| {
            RvarError::Configuration(format!("Invalid base url '{}': {}", self.base_url, e))
        })
    }

    /// Resolve an endpoint path against the base url
    pub fn endpoint(&self, path: &str) -> Result<Url, RvarError> {
        self.base()?.join(path).map_err(|e| {
            RvarError::Configuration(format!("Invalid endpoint path '{}': {}", path, e))
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ConfigSection for BackendConfig {
    fn section_name() -> &'static str {
        "backend"
    }

    fn validate(&self) -> Result<(), RvarError> {
        let base = self.base()?;
        if base.cannot_be_a_base() {
            return Err(RvarError::Configuration(format!(
                "Base url '{}' cannot be a base",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(RvarError::Configuration(
                "Timeout must be at least 1 second".to_string()
            ));
        }
        for path in [
            &self.trait_variations_path,
            &self.grid_path,
            &self.upload_path,
            &self.genotype_path,
            &self.detail_path,
        ] {
            self.endpoint(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_resolution() {
        let config = BackendConfig {
            base_url: "http://rvar.example.org/app/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.endpoint(&config.trait_variations_path).unwrap().as_str(),
            "http://rvar.example.org/health/variations"
        );
        assert_eq!(
            config.endpoint(&config.grid_path).unwrap().as_str(),
            "http://rvar.example.org/app/data/variations"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = BackendConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(RvarError::Configuration(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = BackendConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
