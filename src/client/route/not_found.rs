use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not Found | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center justify-center gap-4 text-center",
            h1 { class: "text-5xl font-bold", "404" }
            p { class: "opacity-70", "No page exists at /{path}" }
            Link {
                to: Route::Dashboard {},
                class: "btn btn-primary",
                "Back to Dashboard"
            }
        }
    )
}
