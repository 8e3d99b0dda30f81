use crate::ui::components::block::Block;
use crate::ui::components::unsupported_block_error::UnsupportedBlockError;
use dioxus::prelude::*;
use notion_blocks_engine::RenderNode;

/// Renders one dispatched node: a supported block, or the notice standing in
/// for an unsupported one
#[component]
pub fn RenderTree(node: RenderNode) -> Element {
    match node {
        RenderNode::Block { block, children } => rsx! {
            Block { block, nodes: children }
        },
        RenderNode::Unsupported(notice) => rsx! {
            UnsupportedBlockError {
                block_type: notice.block_type,
                block_id: notice.block_id,
                class_name: notice.class_name
            }
        },
    }
}
