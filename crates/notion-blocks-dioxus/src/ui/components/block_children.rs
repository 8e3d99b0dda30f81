use crate::ui::components::render_tree::RenderTree;
use dioxus::prelude::*;
use notion_blocks_engine::RenderNode;

#[component]
pub fn BlockChildren(nodes: Vec<RenderNode>) -> Element {
    if nodes.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "notion-block-children",
            for (index, node) in nodes.into_iter().enumerate() {
                RenderTree { key: "{index}", node }
            }
        }
    }
}
