pub mod confirmation_modal;

use dioxus::prelude::*;

pub use confirmation_modal::ConfirmationModal;

/// Dialog shell. Visibility is owned by the caller; `on_close` fires on the
/// close button, the backdrop and Escape unless `prevent_close` is set.
#[component]
pub fn Modal(
    open: bool,
    title: String,
    prevent_close: bool,
    on_close: EventHandler<()>,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let class: &str = class.unwrap_or_default();
    // Focus modal when it opens
    #[cfg(feature = "web")]
    use_effect(use_reactive!(|open| {
        if open {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    }));

    rsx!(
        div {
            class: if open { "modal modal-open" } else { "modal" },
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape && !prevent_close {
                    on_close.call(());
                }
            },
            div {
                class: "modal-box {class} border border-base-300 w-11/12 max-w-lg",
                // Header with title and close button
                div {
                    class: "flex justify-between items-center mb-4",
                    h3 {
                        class: "font-bold text-lg",
                        "{title}"
                    }
                    if !prevent_close {
                        button {
                            class: "btn btn-sm btn-circle btn-ghost",
                            onclick: move |_| on_close.call(()),
                            "✕"
                        }
                    }
                }
                // Content
                div {
                    {children}
                }
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| {
                    if !prevent_close {
                        on_close.call(());
                    }
                },
            }
        }
    )
}
