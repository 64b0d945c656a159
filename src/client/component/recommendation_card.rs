use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaAward, FaCheck, FaLocationDot, FaStar},
    Icon,
};

use crate::client::{component::ParameterBar, view_model::RecommendationView};

/// Circumference of the score ring (r = 40).
const RING_CIRCUMFERENCE: f64 = 251.2;

#[component]
pub fn RecommendationCard(
    recommendation: RecommendationView,
    on_assign: EventHandler<RecommendationView>,
) -> Element {
    let filled = recommendation.score_fraction() * RING_CIRCUMFERENCE;
    let show_issues = cfg!(debug_assertions) && !recommendation.issues.is_empty();
    let candidate = recommendation.clone();

    rsx!(
        div {
            class: "card bg-base-100 shadow-lg border-l-4 border-primary",
            div {
                class: "card-body",

                // Candidate header and composite score
                div {
                    class: "flex items-start justify-between gap-4",
                    div {
                        class: "flex items-center gap-4",
                        div {
                            class: "w-16 h-16 rounded-full bg-primary text-primary-content flex items-center justify-center text-2xl font-bold",
                            "#{recommendation.rank}"
                        }
                        div {
                            h3 { class: "text-xl font-bold", "{recommendation.name}" }
                            p { class: "opacity-70", "{recommendation.designation}" }
                            div {
                                class: "flex items-center gap-4 mt-1 text-sm opacity-70",
                                span {
                                    class: "flex items-center gap-1",
                                    Icon { width: 14, height: 14, icon: FaLocationDot }
                                    "{recommendation.base_location}"
                                }
                                span {
                                    class: "flex items-center gap-1",
                                    span {
                                        class: "text-warning",
                                        Icon { width: 14, height: 14, icon: FaStar }
                                    }
                                    "{recommendation.rating():.1}/5"
                                }
                            }
                        }
                    }
                    div {
                        class: "text-right",
                        p { class: "text-sm opacity-70", "Composite Score" }
                        div {
                            class: "relative w-24 h-24",
                            svg {
                                class: "w-full h-full -rotate-90",
                                view_box: "0 0 96 96",
                                circle {
                                    cx: "48",
                                    cy: "48",
                                    r: "40",
                                    stroke: "#e5e7eb",
                                    stroke_width: "8",
                                    fill: "none",
                                }
                                circle {
                                    cx: "48",
                                    cy: "48",
                                    r: "40",
                                    stroke: "#2563eb",
                                    stroke_width: "8",
                                    fill: "none",
                                    stroke_dasharray: "{filled} {RING_CIRCUMFERENCE}",
                                    class: "transition-all duration-1000",
                                }
                            }
                            div {
                                class: "absolute inset-0 flex items-center justify-center",
                                span {
                                    class: "text-2xl font-bold text-primary",
                                    "{recommendation.composite_score:.1}"
                                }
                            }
                        }
                    }
                }

                if show_issues {
                    div {
                        role: "alert",
                        class: "alert alert-warning alert-soft text-sm",
                        div {
                            p { class: "font-semibold", "Malformed scoring payload" }
                            ul {
                                class: "list-disc ml-4",
                                for issue in recommendation.issues.iter() {
                                    li { "{issue}" }
                                }
                            }
                        }
                    }
                }

                // Parameter breakdown
                div {
                    class: "border-t border-base-300 pt-4",
                    h4 {
                        class: "font-semibold mb-3 flex items-center gap-2",
                        span {
                            class: "text-primary",
                            Icon { width: 18, height: 18, icon: FaAward }
                        }
                        "17 Parameter Breakdown"
                    }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                        for row in recommendation.parameters.iter().cloned() {
                            ParameterBar { key: "{row.parameter:?}", row }
                        }
                    }
                }

                // Key strengths, verbatim from the payload
                div {
                    class: "border-t border-base-300 pt-4",
                    h4 {
                        class: "font-semibold mb-2",
                        "Key Strengths (Score ≥ 85)"
                    }
                    if recommendation.key_strengths.is_empty() {
                        p { class: "text-sm opacity-60", "None above threshold" }
                    } else {
                        div {
                            class: "flex flex-wrap gap-2",
                            for (idx, strength) in recommendation.key_strengths.iter().enumerate() {
                                span {
                                    key: "{idx}",
                                    class: "badge badge-success badge-outline gap-1",
                                    Icon { width: 10, height: 10, icon: FaCheck }
                                    "{strength}"
                                }
                            }
                        }
                    }
                }

                div {
                    class: "card-actions pt-2",
                    button {
                        class: "btn btn-primary w-full gap-2",
                        onclick: move |_| on_assign.call(candidate.clone()),
                        Icon { width: 16, height: 16, icon: FaCheck }
                        "Assign to Flight"
                    }
                }
            }
        }
    )
}
