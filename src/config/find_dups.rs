use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::CodesError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindDupsConfig {
    /// Placed between elements when the set is rendered as `[a, b]`.
    pub separator: String,
}

impl Default for FindDupsConfig {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
        }
    }
}

impl ConfigSection for FindDupsConfig {
    fn section_name() -> &'static str {
        "find_dups"
    }

    fn validate(&self) -> Result<(), CodesError> {
        if self.separator.contains('\n') || self.separator.contains('\r') {
            return Err(CodesError::Configuration(
                "Separator must not contain a line break".to_string(),
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Find Dups".to_string(),
            fields: vec![FieldManifest {
                name: "separator".to_string(),
                field_type: "string".to_string(),
                default: serde_json::json!(Self::default().separator),
                value: serde_json::json!(self.separator),
                min: None,
                max: None,
                description: "Separator used when printing the distinct set".to_string(),
            }],
        }
    }
}
