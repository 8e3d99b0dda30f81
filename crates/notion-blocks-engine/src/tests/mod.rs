//! Shared fixtures for unit tests

use crate::models::{Block, BlockMap};

/// Three root blocks of unsupported types: a database, a checkbox and a
/// table of contents
pub fn demo_block_map_json() -> String {
    include_str!("../../tests/fixtures/unsupported_blocks.json").to_string()
}

/// A page mixing supported and unsupported children
pub fn mixed_page() -> BlockMap {
    BlockMap::from_blocks([
        Block::new("page", "page", "space")
            .with_title("Mixed")
            .with_content(&["intro", "db", "eq", "outro"]),
        Block::new("intro", "text", "page").with_title("Hello"),
        Block::new("db", "collection_view", "page").with_content(&["db-row"]),
        Block::new("db-row", "checkbox", "db"),
        Block::new("eq", "equation", "page"),
        Block::new("outro", "text", "page").with_title("Bye"),
    ])
}
