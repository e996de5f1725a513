use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::field::selector::Variant;
use crate::markup::node::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStage {
    VariantSelected,
    RoleInjected,
    ErrorsOmitted,
    RegistrationMissing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderEvent {
    pub timestamp_ms: u128,
    pub field: String,
    pub stage: RenderStage,

    pub variant: Option<String>,
    pub role: Option<String>,
}

impl RenderEvent {
    pub fn now(field: &str, stage: RenderStage) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            field: field.to_string(),
            stage,
            variant: None,
            role: None,
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = Some(format!("{:?}", variant));
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(format!("{:?}", role));
        self
    }
}
