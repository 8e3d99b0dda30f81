use dioxus::prelude::*;

#[component]
pub fn Code(code: String, language: Option<String>) -> Element {
    let code_class = language
        .as_ref()
        .map(|l| format!("language-{}", l.to_lowercase()))
        .unwrap_or_else(|| "language-text".to_string());

    rsx! {
        pre {
            class: "notion-code",
            code {
                class: "{code_class}",
                "{code}"
            }
        }
    }
}
