pub mod countdown;
pub mod find_dups;
pub mod manager;
pub mod traits;

pub use countdown::CountdownConfig;
pub use find_dups::FindDupsConfig;
pub use manager::{config_path_from_env, AppConfig, ConfigManager, CONFIG_PATH_ENV, ENV_PREFIX};
pub use traits::{ConfigManifest, ConfigSection, FieldManifest};
