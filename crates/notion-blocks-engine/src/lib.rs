pub mod classify;
pub mod dispatch;
pub mod io;
pub mod models;
pub mod notice;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use classify::{UnsupportedBlockDescriptor, UnsupportedKind, describe_unsupported_block};
pub use dispatch::{
    BlockRenderers, RenderNode, RenderOptions, RendererRegistry, UnsupportedBlock,
    UnsupportedBlockCallback, dispatch,
};
pub use models::{Block, BlockMap, BlockMapError, BlockRecord, RichText};
pub use notice::UnsupportedNotice;
