pub mod traits;
pub mod backend;
pub mod browser;
pub mod personal;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use backend::BackendConfig;
pub use browser::{BrowserConfig, ExternalLink};
pub use personal::PersonalConfig;
pub use traits::ConfigSection;
