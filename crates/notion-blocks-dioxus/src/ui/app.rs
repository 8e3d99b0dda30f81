use crate::ui::components::NotionRenderer;
use dioxus::prelude::*;
use notion_blocks_engine::{BlockMap, RenderOptions, UnsupportedBlock};

const NOTION_CSS: &str = include_str!("../assets/notion.css");

/// Everything the viewer needs, handed over from `main` through the launch
/// context
#[derive(Debug, Clone)]
pub struct ViewerState {
    pub source: String,
    pub block_map: BlockMap,
    pub options: RenderOptions,
    pub log_unsupported_blocks: bool,
}

#[component]
pub fn App() -> Element {
    let state = use_context::<ViewerState>();

    let log_unsupported = use_callback(|block: UnsupportedBlock| {
        log::warn!(
            "Unsupported block detected: {} (ID: {})",
            block.block_type,
            block.block_id.as_deref().unwrap_or("unknown")
        );
    });
    let on_unsupported_block = state.log_unsupported_blocks.then_some(log_unsupported);

    rsx! {
        style { {NOTION_CSS} }
        div {
            class: "app-container",
            div {
                class: "viewer-header",
                span { class: "viewer-source", "{state.source}" }
            }
            div {
                class: "notion-app",
                NotionRenderer {
                    block_map: state.block_map.clone(),
                    show_unsupported_block_errors: state.options.show_unsupported_block_errors,
                    on_unsupported_block
                }
            }
        }
    }
}
