pub mod block;
pub mod block_map;

pub use block::{Block, RichText};
pub use block_map::{BlockMap, BlockMapError, BlockRecord};
