use crate::classify::{UnsupportedBlockDescriptor, describe_unsupported_block};
use serde::{Deserialize, Serialize};

/// Structural class names of a rendered notice, one per sub-part, so host
/// styles and tests can target each part independently.
pub mod classes {
    pub const ROOT: &str = "notion-unsupported-block";
    pub const CONTENT: &str = "notion-unsupported-block-content";
    pub const ICON: &str = "notion-unsupported-block-icon";
    pub const TEXT: &str = "notion-unsupported-block-text";
    pub const TITLE: &str = "notion-unsupported-block-title";
    pub const MESSAGE: &str = "notion-unsupported-block-message";
    pub const SUGGESTION: &str = "notion-unsupported-block-suggestion";
    pub const ID: &str = "notion-unsupported-block-id";
}

pub const WARNING_ICON: &str = "⚠️";
pub const WARNING_LABEL: &str = "Warning";

/// Everything needed to display one unsupported block.
///
/// Holds no counters or timestamps: building it twice from the same inputs
/// yields equal values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsupportedNotice {
    pub block_type: String,
    pub block_id: Option<String>,
    pub class_name: Option<String>,
    pub descriptor: UnsupportedBlockDescriptor,
}

impl UnsupportedNotice {
    pub fn new(block_type: &str, block_id: Option<&str>, class_name: Option<&str>) -> Self {
        Self {
            block_type: block_type.to_string(),
            block_id: block_id.map(str::to_string),
            class_name: class_name.map(str::to_string),
            descriptor: describe_unsupported_block(block_type),
        }
    }

    pub fn title(&self) -> &str {
        &self.descriptor.title
    }

    pub fn message(&self) -> &str {
        &self.descriptor.message
    }

    pub fn suggestion(&self) -> &str {
        &self.descriptor.suggestion
    }

    /// `Block ID: <id>`, only when the block id is known and non-empty
    pub fn id_line(&self) -> Option<String> {
        self.block_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| format!("Block ID: {id}"))
    }

    /// Root class followed by the host's extra class, if any
    pub fn root_class(&self) -> String {
        match self.class_name.as_deref().map(str::trim) {
            Some(extra) if !extra.is_empty() => format!("{} {extra}", classes::ROOT),
            _ => classes::ROOT.to_string(),
        }
    }
}
