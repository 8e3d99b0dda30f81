use crate::ui::components::block_children::BlockChildren;
use dioxus::prelude::*;
use notion_blocks_engine::RenderNode;

#[component]
pub fn Page(title: String, nodes: Vec<RenderNode>) -> Element {
    rsx! {
        div {
            class: "notion-page",
            if !title.is_empty() {
                h1 { class: "notion-title", "{title}" }
            }
            BlockChildren { nodes }
        }
    }
}
