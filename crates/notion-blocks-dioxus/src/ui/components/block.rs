use crate::ui::components::{
    block_children::BlockChildren, code::Code, heading::Heading, list_item::ListItem, page::Page,
    text_block::TextBlock,
};
use dioxus::prelude::*;
use notion_blocks_engine::{Block as NotionBlock, RenderNode, RendererRegistry};

/// Block types the [`Block`] component knows how to draw. Everything else
/// goes through the unsupported-block fallback.
pub const RENDERED_BLOCK_TYPES: &[&str] = &[
    "page",
    "text",
    "header",
    "sub_header",
    "sub_sub_header",
    "divider",
    "quote",
    "callout",
    "code",
    "bulleted_list",
    "numbered_list",
];

pub fn registry() -> RendererRegistry {
    RendererRegistry::with_types(RENDERED_BLOCK_TYPES.iter().copied())
}

/// Draws one supported block. `nodes` are its already dispatched children and
/// are rendered after the block's own content whatever its type.
#[component]
pub fn Block(block: NotionBlock, nodes: Vec<RenderNode>) -> Element {
    let title = block.title().unwrap_or_default();

    match block.block_type.as_str() {
        "page" => rsx! {
            Page { title, nodes }
        },
        "text" | "quote" | "callout" => rsx! {
            TextBlock {
                kind: block.block_type.clone(),
                text: title,
                nodes
            }
        },
        "header" => rsx! {
            Heading { level: 1, text: title }
            BlockChildren { nodes }
        },
        "sub_header" => rsx! {
            Heading { level: 2, text: title }
            BlockChildren { nodes }
        },
        "sub_sub_header" => rsx! {
            Heading { level: 3, text: title }
            BlockChildren { nodes }
        },
        "divider" => rsx! {
            hr { class: "notion-hr" }
            BlockChildren { nodes }
        },
        "code" => {
            let language = block
                .properties
                .get("language")
                .map(|language| language.plain_text());
            rsx! {
                Code { code: title, language }
                BlockChildren { nodes }
            }
        }
        "bulleted_list" | "numbered_list" => rsx! {
            ListItem {
                numbered: block.block_type == "numbered_list",
                text: title,
                nodes
            }
        },
        other => {
            // Only registered types are dispatched here
            log::error!("Block {} of type '{other}' reached the block renderer", block.id);
            rsx! {
                BlockChildren { nodes }
            }
        }
    }
}
