use crate::ui::components::block_children::BlockChildren;
use dioxus::prelude::*;
use notion_blocks_engine::RenderNode;

/// Plain text, quotes and callouts: a line of text followed by any children
#[component]
pub fn TextBlock(kind: String, text: String, nodes: Vec<RenderNode>) -> Element {
    match kind.as_str() {
        "quote" => rsx! {
            blockquote {
                class: "notion-quote",
                "{text}"
                BlockChildren { nodes }
            }
        },
        "callout" => rsx! {
            div {
                class: "notion-callout",
                div { class: "notion-callout-text", "{text}" }
                BlockChildren { nodes }
            }
        },
        _ => rsx! {
            // Empty text blocks are spacers in Notion
            if text.is_empty() {
                div { class: "notion-blank" }
            } else {
                p { class: "notion-text", "{text}" }
            }
            BlockChildren { nodes }
        },
    }
}
