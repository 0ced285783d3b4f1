use super::traits::ConfigSection;
use crate::error::RvarError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Page size for the trait variation list
    pub default_limit: usize,
    /// Rows per page in the variation grid
    pub grid_rows: usize,
    /// Health areas offered in the phenotype selector
    pub phenotypes: Vec<String>,
    pub links: Vec<ExternalLink>,
}

/// Link out of a variation, `{vrn}` is replaced by the variant id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub label: String,
    pub url_template: String,
}

impl ExternalLink {
    pub fn new(label: &str, url_template: &str) -> Self {
        Self {
            label: label.to_string(),
            url_template: url_template.to_string(),
        }
    }

    pub fn resolve(&self, vrn: &str) -> String {
        self.url_template.replace("{vrn}", vrn)
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            grid_rows: 20,
            phenotypes: vec![
                "Alzheimer's disease".to_string(),
                "Breast cancer".to_string(),
                "Coronary heart disease".to_string(),
                "Diabetes".to_string(),
                "Obesity".to_string(),
            ],
            links: vec![
                ExternalLink::new("dbSNP", "https://www.ncbi.nlm.nih.gov/snp/{vrn}"),
                ExternalLink::new("SNPedia", "https://www.snpedia.com/index.php/{vrn}"),
            ],
        }
    }
}

impl ConfigSection for BrowserConfig {
    fn section_name() -> &'static str {
        "browser"
    }

    fn validate(&self) -> Result<(), RvarError> {
        if self.default_limit == 0 {
            return Err(RvarError::Configuration(
                "Page size must be greater than 0".to_string()
            ));
        }
        if self.grid_rows == 0 {
            return Err(RvarError::Configuration(
                "Grid rows must be greater than 0".to_string()
            ));
        }
        if let Some(link) = self.links.iter().find(|l| !l.url_template.contains("{vrn}")) {
            return Err(RvarError::Configuration(format!(
                "Link '{}' has no {{vrn}} placeholder",
                link.label
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_resolution() {
        let link = ExternalLink::new("dbSNP", "https://www.ncbi.nlm.nih.gov/snp/{vrn}");
        assert_eq!(link.resolve("rs123"), "https://www.ncbi.nlm.nih.gov/snp/rs123");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = BrowserConfig {
            default_limit: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_link_without_placeholder_rejected() {
        let config = BrowserConfig {
            links: vec![ExternalLink::new("Broken", "https://example.org/")],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
