//! Decides, block by block, whether the host can render a block or whether
//! it falls back to an [`UnsupportedNotice`].
//!
//! ## Policy
//!
//! - Blocks are visited in [`BlockMap::walk`] order.
//! - A block whose type has a renderer becomes [`RenderNode::Block`] and its
//!   children are dispatched in turn.
//! - A block without a renderer:
//!   - becomes [`RenderNode::Unsupported`] when
//!     [`RenderOptions::show_unsupported_block_errors`] is set, and produces
//!     nothing otherwise;
//!   - fires the `on_unsupported` callback exactly once whenever one was
//!     supplied. The flag only controls the visual notice.
//!   - does not have its children visited, since nothing is there to host
//!     them.
//!
//! The walk keeps its own stack of open blocks, so deeply nested documents
//! do not grow the call stack.

use crate::models::{Block, BlockMap};
use crate::notice::UnsupportedNotice;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Answers whether a renderer exists for a block type
pub trait BlockRenderers {
    fn supports(&self, block_type: &str) -> bool;
}

/// Set of block types the host registered renderers for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RendererRegistry {
    types: BTreeSet<String>,
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
        }
    }

    pub fn register(&mut self, block_type: impl Into<String>) {
        self.types.insert(block_type.into());
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }
}

impl BlockRenderers for RendererRegistry {
    fn supports(&self, block_type: &str) -> bool {
        self.types.contains(block_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Render a notice in place of unsupported blocks. When off, they are
    /// skipped silently.
    pub show_unsupported_block_errors: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_unsupported_block_errors: true,
        }
    }
}

/// Owned form of an unsupported-block notification, for hosts that forward
/// it through their own event types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedBlock {
    pub block_type: String,
    pub block_id: Option<String>,
}

impl UnsupportedBlock {
    pub fn new(block_type: &str, block_id: Option<&str>) -> Self {
        Self {
            block_type: block_type.to_string(),
            block_id: block_id.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    Block {
        block: Block,
        children: Vec<RenderNode>,
    },
    Unsupported(UnsupportedNotice),
}

impl RenderNode {
    /// Every notice in `nodes`, depth-first
    pub fn notices(nodes: &[RenderNode]) -> Vec<&UnsupportedNotice> {
        let mut found = Vec::new();
        let mut stack: Vec<&RenderNode> = nodes.iter().rev().collect();
        while let Some(node) = stack.pop() {
            match node {
                RenderNode::Block { children, .. } => stack.extend(children.iter().rev()),
                RenderNode::Unsupported(notice) => found.push(notice),
            }
        }
        found
    }
}

/// Callback invoked with `(block_type, block_id)` for every unsupported block
pub type UnsupportedBlockCallback<'a> = &'a mut dyn FnMut(&str, Option<&str>);

struct Dispatcher<'r, 'c> {
    renderers: &'r dyn BlockRenderers,
    options: RenderOptions,
    on_unsupported: Option<UnsupportedBlockCallback<'c>>,
}

/// A supported block whose children are still being dispatched
struct OpenBlock<'a> {
    block: &'a Block,
    children: Vec<RenderNode>,
    pending: std::vec::IntoIter<&'a Block>,
}

enum Visit<'a> {
    Done(Option<RenderNode>),
    Open(OpenBlock<'a>),
}

impl Dispatcher<'_, '_> {
    fn visit<'a>(
        &mut self,
        block_map: &'a BlockMap,
        block: &'a Block,
        visited: &mut HashSet<&'a str>,
    ) -> Visit<'a> {
        if !visited.insert(block.id.as_str()) {
            return Visit::Done(None);
        }

        if self.renderers.supports(&block.block_type) {
            return Visit::Open(OpenBlock {
                block,
                children: Vec::new(),
                pending: block_map.children(block).into_iter(),
            });
        }

        Visit::Done(self.fallback(block))
    }

    fn dispatch_tree<'a>(
        &mut self,
        block_map: &'a BlockMap,
        root: &'a Block,
        visited: &mut HashSet<&'a str>,
    ) -> Option<RenderNode> {
        let mut stack = match self.visit(block_map, root, visited) {
            Visit::Done(node) => return node,
            Visit::Open(open) => vec![open],
        };

        loop {
            let top = stack.last_mut()?;
            match top.pending.next() {
                Some(child) => match self.visit(block_map, child, visited) {
                    Visit::Done(Some(node)) => top.children.push(node),
                    Visit::Done(None) => {}
                    Visit::Open(open) => stack.push(open),
                },
                None => {
                    let finished = stack.pop()?;
                    let node = RenderNode::Block {
                        block: finished.block.clone(),
                        children: finished.children,
                    };
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => return Some(node),
                    }
                }
            }
        }
    }

    fn fallback(&mut self, block: &Block) -> Option<RenderNode> {
        log::debug!(
            "No renderer for block {} of type '{}'",
            block.id,
            block.block_type
        );

        if let Some(callback) = self.on_unsupported.as_mut() {
            callback(block.block_type.as_str(), Some(block.id.as_str()));
        }

        if !self.options.show_unsupported_block_errors {
            log::trace!("Unsupported block notices disabled, skipping {}", block.id);
            return None;
        }

        Some(RenderNode::Unsupported(UnsupportedNotice::new(
            &block.block_type,
            Some(block.id.as_str()),
            None,
        )))
    }
}

/// Walk `block_map` and decide how each block renders.
///
/// `on_unsupported` runs synchronously, inline with the walk.
pub fn dispatch(
    block_map: &BlockMap,
    renderers: &dyn BlockRenderers,
    options: RenderOptions,
    on_unsupported: Option<UnsupportedBlockCallback<'_>>,
) -> Vec<RenderNode> {
    let mut dispatcher = Dispatcher {
        renderers,
        options,
        on_unsupported,
    };
    let mut visited = HashSet::new();

    let nodes = block_map
        .roots()
        .into_iter()
        .filter_map(|root| dispatcher.dispatch_tree(block_map, root, &mut visited))
        .collect();

    for block in block_map.unreachable() {
        log::warn!(
            "Block {} of type '{}' is not reachable from any root and was not rendered",
            block.id,
            block.block_type
        );
    }

    nodes
}
