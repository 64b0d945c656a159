use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-36 p-4 {class}",
            {children}
        }
    )
}

/// Spinner shown while a section's data is in flight.
#[component]
pub fn LoadingPage(class: Option<&'static str>) -> Element {
    let class: &str = class.unwrap_or("h-96");

    rsx!(
        div {
            class: "flex items-center justify-center w-full {class}",
            span { class: "loading loading-spinner loading-lg text-primary" }
        }
    )
}

/// Inline notice for a section whose fetch failed.
#[component]
pub fn ErrorPage(status: u64, message: String, on_retry: Option<EventHandler<()>>) -> Element {
    rsx!(
        div {
            role: "alert",
            class: "alert alert-error alert-soft flex flex-wrap justify-between",
            div {
                p { class: "font-semibold", "Could not load data" }
                p { class: "text-sm opacity-80", "{message} (HTTP {status})" }
            }
            if let Some(on_retry) = on_retry {
                button {
                    class: "btn btn-sm",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    )
}
