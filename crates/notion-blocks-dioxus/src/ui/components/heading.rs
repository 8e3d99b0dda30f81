use dioxus::prelude::*;

#[component]
pub fn Heading(level: u8, text: String) -> Element {
    let class_name = format!("notion-h notion-h{level}");

    match level {
        1 => rsx! { h1 { class: "{class_name}", "{text}" } },
        2 => rsx! { h2 { class: "{class_name}", "{text}" } },
        _ => rsx! { h3 { class: "{class_name}", "{text}" } },
    }
}
