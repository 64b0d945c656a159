use dioxus::prelude::*;

use crate::client::view_model::{recommendation::ParameterRow, ScoreBand};

#[component]
pub fn ParameterBar(row: ParameterRow) -> Element {
    let bar_class = ScoreBand::of(row.score).bar_class();
    let width = row.score.clamp(0.0, 100.0);

    rsx!(
        div {
            class: "space-y-1",
            div {
                class: "flex items-center justify-between text-sm",
                span { class: "opacity-80", "{row.name}" }
                div {
                    class: "flex items-center gap-2",
                    span { class: "opacity-60", "({row.weight_percent()}%)" }
                    span { class: "font-bold", "{row.score:.1}" }
                }
            }
            div {
                class: "w-full h-2 bg-base-300 rounded-full overflow-hidden",
                div {
                    class: "h-full {bar_class} transition-all duration-300",
                    style: "width: {width}%",
                }
            }
        }
    )
}
