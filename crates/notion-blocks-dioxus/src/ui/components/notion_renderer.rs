use crate::ui::components::{block::registry, render_tree::RenderTree};
use dioxus::prelude::*;
use notion_blocks_engine::{BlockMap, RenderOptions, UnsupportedBlock, dispatch};

/// Renders a whole block map.
///
/// Blocks without a renderer show an unsupported-block notice, or nothing
/// when `show_unsupported_block_errors` is off. `on_unsupported_block` fires
/// once per such block during the render pass either way.
#[component]
pub fn NotionRenderer(
    block_map: BlockMap,
    #[props(default = true)] show_unsupported_block_errors: bool,
    on_unsupported_block: Option<Callback<UnsupportedBlock>>,
) -> Element {
    let options = RenderOptions {
        show_unsupported_block_errors,
    };
    let mut notify = |block_type: &str, block_id: Option<&str>| {
        if let Some(callback) = on_unsupported_block {
            callback.call(UnsupportedBlock::new(block_type, block_id));
        }
    };
    let nodes = dispatch(&block_map, &registry(), options, Some(&mut notify));

    rsx! {
        div {
            class: "notion",
            for (index, node) in nodes.into_iter().enumerate() {
                RenderTree { key: "{index}", node }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use notion_blocks_engine::Block;
    use notion_blocks_engine::notice::classes;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    thread_local! {
        static RECORDED: RefCell<Vec<UnsupportedBlock>> = const { RefCell::new(Vec::new()) };
    }

    fn demo_block_map() -> BlockMap {
        BlockMap::from_json(include_str!(
            "../../../../notion-blocks-engine/tests/fixtures/unsupported_blocks.json"
        ))
        .unwrap()
    }

    #[component]
    fn RecordingHarness(block_map: BlockMap, show_unsupported_block_errors: bool) -> Element {
        let on_unsupported_block = use_callback(|block: UnsupportedBlock| {
            RECORDED.with(|recorded| recorded.borrow_mut().push(block));
        });

        rsx! {
            NotionRenderer {
                block_map,
                show_unsupported_block_errors,
                on_unsupported_block
            }
        }
    }

    fn render_recording(block_map: BlockMap, show: bool) -> (String, Vec<UnsupportedBlock>) {
        RECORDED.with(|recorded| recorded.borrow_mut().clear());
        let mut dom = VirtualDom::new_with_props(
            RecordingHarness,
            RecordingHarnessProps {
                block_map,
                show_unsupported_block_errors: show,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);
        let recorded = RECORDED.with(|recorded| recorded.borrow().clone());
        (html, recorded)
    }

    fn expected_notifications() -> Vec<UnsupportedBlock> {
        vec![
            UnsupportedBlock::new("collection_view", Some("test-1")),
            UnsupportedBlock::new("checkbox", Some("test-2")),
            UnsupportedBlock::new("table_of_contents", Some("test-3")),
        ]
    }

    #[test]
    fn test_enabled_renders_notice_per_block_and_notifies() {
        let (html, recorded) = render_recording(demo_block_map(), true);

        assert_eq!(html.matches(classes::TITLE).count(), 3);
        assert!(html.contains("Database Not Supported"));
        assert!(html.contains("Checkbox Not Supported"));
        assert!(html.contains("Table of Contents Not Supported"));
        assert_eq!(recorded, expected_notifications());
    }

    #[test]
    fn test_disabled_renders_no_notice_but_still_notifies() {
        let (html, recorded) = render_recording(demo_block_map(), false);

        assert!(!html.contains(classes::ROOT));
        assert_eq!(recorded, expected_notifications());
    }

    #[component]
    fn DefaultFlagHarness(block_map: BlockMap) -> Element {
        rsx! {
            NotionRenderer { block_map }
        }
    }

    #[test]
    fn test_flag_defaults_to_enabled_without_callback() {
        let mut dom = VirtualDom::new_with_props(
            DefaultFlagHarness,
            DefaultFlagHarnessProps {
                block_map: demo_block_map(),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert_eq!(html.matches(classes::TITLE).count(), 3);
        assert_eq!(html.matches(classes::ID).count(), 3);
        assert!(html.contains("Block ID: test-2"));
    }

    #[test]
    fn test_notices_nested_under_headings_are_rendered() {
        let block_map = BlockMap::from_blocks([
            Block::new("page", "page", "space").with_content(&["heading", "rule"]),
            Block::new("heading", "header", "page")
                .with_title("Tasks")
                .with_content(&["cb"]),
            Block::new("cb", "checkbox", "heading"),
            Block::new("rule", "divider", "page").with_content(&["eq"]),
            Block::new("eq", "equation", "rule"),
        ]);

        let (html, recorded) = render_recording(block_map, true);

        assert!(html.contains("Tasks"));
        assert!(html.contains("Checkbox Not Supported"));
        assert!(html.contains("Equation Block Not Supported"));
        assert_eq!(html.matches(classes::TITLE).count(), recorded.len());
        assert_eq!(
            recorded,
            vec![
                UnsupportedBlock::new("checkbox", Some("cb")),
                UnsupportedBlock::new("equation", Some("eq")),
            ]
        );
    }

    #[test]
    fn test_supported_blocks_render_around_notices() {
        let block_map = BlockMap::from_blocks([
            Block::new("page", "page", "space")
                .with_title("Release notes")
                .with_content(&["intro", "toc", "outro"]),
            Block::new("intro", "text", "page").with_title("Welcome"),
            Block::new("toc", "table_of_contents", "page"),
            Block::new("outro", "text", "page").with_title("Goodbye"),
        ]);

        let (html, recorded) = render_recording(block_map, true);

        let welcome = html.find("Welcome").unwrap();
        let notice = html.find("Table of Contents Not Supported").unwrap();
        let goodbye = html.find("Goodbye").unwrap();
        assert!(welcome < notice && notice < goodbye);
        assert!(html.contains("Release notes"));
        assert_eq!(
            recorded,
            vec![UnsupportedBlock::new("table_of_contents", Some("toc"))]
        );
    }
}
