use super::traits::ConfigSection;
use crate::error::RvarError;
use serde::{Deserialize, Serialize};

/// Identity used for the personal page. Without a user the page asks to log in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalConfig {
    pub user: Option<String>,
}

impl PersonalConfig {
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref().filter(|u| !u.trim().is_empty())
    }
}

impl ConfigSection for PersonalConfig {
    fn section_name() -> &'static str {
        "personal"
    }

    fn validate(&self) -> Result<(), RvarError> {
        Ok(())
    }
}
