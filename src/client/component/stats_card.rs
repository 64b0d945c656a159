use dioxus::prelude::*;

/// Dashboard counter card. The icon is passed as children.
#[component]
pub fn StatsCard(
    title: &'static str,
    value: String,
    subtitle: &'static str,
    tone: &'static str,
    children: Element,
) -> Element {
    rsx!(
        div {
            class: "card bg-base-100 shadow-md border-l-4 {tone}",
            div {
                class: "card-body flex-row items-center justify-between",
                div {
                    p { class: "text-sm opacity-70", "{title}" }
                    p { class: "text-3xl font-bold", "{value}" }
                    p { class: "text-xs opacity-60", "{subtitle}" }
                }
                div { class: "opacity-80", {children} }
            }
        }
    )
}
