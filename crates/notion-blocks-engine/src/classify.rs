//! Describes why a block type cannot be rendered and what the reader can do
//! about it.
//!
//! A handful of Notion types are known to be unsupported and get tailored
//! wording. Anything else falls through to a generic description naming the
//! literal type, so new upstream types degrade without a code change.

use serde::{Deserialize, Serialize};

/// Title, message and suggestion shown in place of an unsupported block.
/// All three are always non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsupportedBlockDescriptor {
    pub title: String,
    pub message: String,
    pub suggestion: String,
}

/// Known-unsupported block families, plus a catch-all for everything else
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedKind {
    /// `collection_view`, `collection_view_page`, `database`
    Database,
    /// `checkbox`, `to_do_list`
    Checkbox,
    /// `table_of_contents`, `toc`
    TableOfContents,
    SyncedBlock,
    Equation,
    /// Any type without tailored wording; keeps the literal type name
    Unknown(String),
}

impl UnsupportedKind {
    pub fn from_block_type(block_type: &str) -> Self {
        match block_type {
            "collection_view" | "collection_view_page" | "database" => Self::Database,
            "checkbox" | "to_do_list" => Self::Checkbox,
            "table_of_contents" | "toc" => Self::TableOfContents,
            "synced_block" => Self::SyncedBlock,
            "equation" => Self::Equation,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn descriptor(&self) -> UnsupportedBlockDescriptor {
        let (title, message, suggestion) = match self {
            Self::Database => (
                "Database Not Supported",
                "This Notion document includes a Database which cannot be imported.".to_string(),
                "Please remove the Database to render this page, or consider using react-notion-x for full database support.",
            ),
            Self::Checkbox => (
                "Checkbox Not Supported",
                "This Notion document includes Checkboxes which cannot be imported.".to_string(),
                "Please remove the Checkboxes to render this page, or consider using react-notion-x for checkbox support.",
            ),
            Self::TableOfContents => (
                "Table of Contents Not Supported",
                "This Notion document includes a Table of Contents which cannot be imported."
                    .to_string(),
                "Please remove the Table of Contents to render this page, or consider using react-notion-x for full support.",
            ),
            Self::SyncedBlock => (
                "Synced Block Not Supported",
                "This Notion document includes a Synced Block which cannot be imported."
                    .to_string(),
                "Please remove the Synced Block to render this page, or consider using react-notion-x for full support.",
            ),
            Self::Equation => (
                "Equation Block Not Supported",
                "This Notion document includes an Equation which cannot be imported.".to_string(),
                "Please remove the Equation to render this page, or consider using react-notion-x for equation support.",
            ),
            Self::Unknown(block_type) => (
                "Unsupported Block Type",
                format!(
                    "This Notion document includes a '{block_type}' block which cannot be imported."
                ),
                "Please remove this block to render this page, or consider using react-notion-x for extended block support.",
            ),
        };

        UnsupportedBlockDescriptor {
            title: title.to_string(),
            message,
            suggestion: suggestion.to_string(),
        }
    }
}

/// Describe an unsupported block of the given type. Pure; never fails.
pub fn describe_unsupported_block(block_type: &str) -> UnsupportedBlockDescriptor {
    UnsupportedKind::from_block_type(block_type).descriptor()
}
