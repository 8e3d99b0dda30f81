pub mod block;
pub mod block_children;
pub mod code;
pub mod heading;
pub mod list_item;
pub mod notion_renderer;
pub mod page;
pub mod render_tree;
pub mod text_block;
pub mod unsupported_block_error;

pub use notion_renderer::NotionRenderer;

