use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Notion rich text: an array of `[text, decorations?]` segments.
///
/// Decorations (bold, links, mentions...) are kept as raw JSON since no
/// part of the fallback path interprets them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(pub Vec<Value>);

impl RichText {
    /// Build rich text holding a single undecorated segment
    pub fn plain(text: &str) -> Self {
        Self(vec![Value::Array(vec![Value::String(text.to_string())])])
    }

    /// Concatenate the text element of every segment, ignoring decorations.
    ///
    /// Segments that are not `[string, ...]` contribute nothing.
    pub fn plain_text(&self) -> String {
        self.0
            .iter()
            .filter_map(|segment| segment.as_array()?.first()?.as_str())
            .collect()
    }
}

/// A single content unit of a Notion document.
///
/// `block_type` is an open set: the document source can introduce new types
/// at any time, so it is kept as a string rather than an enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(default)]
    pub version: u64,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub parent_id: String,
    #[serde(default)]
    pub parent_table: String,
    #[serde(default = "alive_by_default")]
    pub alive: bool,
    #[serde(default)]
    pub created_time: i64,
    #[serde(default)]
    pub last_edited_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_table: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_by_table: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_by_id: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, RichText>,
    /// Ordered child ids, when the source lists them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<String>>,
}

fn alive_by_default() -> bool {
    true
}

impl Block {
    /// Create a live block with no properties, parented under `parent_id`
    pub fn new(id: &str, block_type: &str, parent_id: &str) -> Self {
        Self {
            id: id.to_string(),
            version: 1,
            block_type: block_type.to_string(),
            parent_id: parent_id.to_string(),
            parent_table: "block".to_string(),
            alive: true,
            created_time: 0,
            last_edited_time: 0,
            created_by_table: None,
            created_by_id: None,
            last_edited_by_table: None,
            last_edited_by_id: None,
            properties: BTreeMap::new(),
            content: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.properties
            .insert("title".to_string(), RichText::plain(title));
        self
    }

    pub fn with_content(mut self, children: &[&str]) -> Self {
        self.content = Some(children.iter().map(|c| c.to_string()).collect());
        self
    }

    /// Plain text of the `title` property
    pub fn title(&self) -> Option<String> {
        self.properties.get("title").map(RichText::plain_text)
    }
}
