use crate::ui::components::block_children::BlockChildren;
use dioxus::prelude::*;
use notion_blocks_engine::RenderNode;

/// A single bulleted or numbered entry. Notion stores each list entry as its
/// own block, so every item gets its own list wrapper.
#[component]
pub fn ListItem(numbered: bool, text: String, nodes: Vec<RenderNode>) -> Element {
    let item = rsx! {
        li {
            "{text}"
            BlockChildren { nodes }
        }
    };

    if numbered {
        rsx! { ol { class: "notion-list notion-list-numbered", {item} } }
    } else {
        rsx! { ul { class: "notion-list notion-list-disc", {item} } }
    }
}
