use dioxus::prelude::*;
use notion_blocks_engine::UnsupportedNotice;
use notion_blocks_engine::notice::{WARNING_ICON, WARNING_LABEL, classes};

/// Notice shown in place of a block type we cannot render.
///
/// Never fails: unknown types get a generic description naming the type.
/// The "Block ID" line only appears when `block_id` is given.
#[component]
pub fn UnsupportedBlockError(
    block_type: String,
    block_id: Option<String>,
    class_name: Option<String>,
) -> Element {
    let notice = UnsupportedNotice::new(&block_type, block_id.as_deref(), class_name.as_deref());

    rsx! {
        UnsupportedNoticeView { notice }
    }
}

#[component]
pub fn UnsupportedNoticeView(notice: UnsupportedNotice) -> Element {
    let root_class = notice.root_class();
    let title = notice.title();
    let message = notice.message();
    let suggestion = notice.suggestion();

    rsx! {
        div {
            class: "{root_class}",
            div {
                class: classes::CONTENT,
                div {
                    class: classes::ICON,
                    span {
                        role: "img",
                        aria_label: WARNING_LABEL,
                        "{WARNING_ICON}"
                    }
                }
                div {
                    class: classes::TEXT,
                    div { class: classes::TITLE, "{title}" }
                    div { class: classes::MESSAGE, "{message}" }
                    div { class: classes::SUGGESTION, "{suggestion}" }
                    if let Some(id_line) = notice.id_line() {
                        div { class: classes::ID, "{id_line}" }
                    }
                }
            }
        }
    }
}
