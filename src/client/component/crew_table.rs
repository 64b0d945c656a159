use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaEye, Icon};

use crate::{
    client::view_model::crew::{
        availability_badge_class, format_number, format_rating, format_thousands, hours_summary,
        initials,
    },
    model::crew::CrewMemberDto,
};

#[component]
pub fn CrewTable(crew: Vec<CrewMemberDto>, on_details: EventHandler<String>) -> Element {
    rsx!(
        div {
            class: "card bg-base-100 shadow-md overflow-x-auto",
            table {
                class: "table w-full",
                thead {
                    tr {
                        th { "Name" }
                        th { "Role" }
                        th { "Base" }
                        th { "Hours (7d/30d)" }
                        th { "Performance" }
                        th { "Reliability" }
                        th { "Experience" }
                        th { "Status" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for member in crew {
                        {
                            let emp_id = member.emp_id.clone();
                            let performance = member.performance_score.clamp(0.0, 100.0);

                            rsx! {
                                tr {
                                    key: "{member.emp_id}",
                                    class: "hover",
                                    td {
                                        div {
                                            class: "flex items-center gap-3",
                                            div {
                                                class: "avatar avatar-placeholder",
                                                div {
                                                    class: "bg-primary/10 text-primary w-10 rounded-full",
                                                    span { class: "font-semibold", {initials(&member.name)} }
                                                }
                                            }
                                            div {
                                                p { class: "font-semibold", "{member.name}" }
                                                p { class: "text-sm opacity-60", "{member.emp_id}" }
                                            }
                                        }
                                    }
                                    td { "{member.designation}" }
                                    td { class: "font-semibold", "{member.base_location}" }
                                    td { {hours_summary(&member)} }
                                    td {
                                        div {
                                            class: "flex items-center gap-2",
                                            progress {
                                                class: "progress progress-success w-24",
                                                value: "{performance}",
                                                max: "100",
                                            }
                                            span {
                                                class: "font-semibold",
                                                "{format_rating(member.performance_score)}/5"
                                            }
                                        }
                                    }
                                    td {
                                        class: "text-success font-semibold",
                                        "{format_number(member.reliability_score)}%"
                                    }
                                    td {
                                        p { class: "font-semibold", "{format_number(member.years_experience)} yrs" }
                                        p { class: "text-sm opacity-60", "{format_thousands(member.total_flight_hours)}h" }
                                    }
                                    td {
                                        span {
                                            class: "badge {availability_badge_class(&member.availability)}",
                                            "{member.availability}"
                                        }
                                    }
                                    td {
                                        button {
                                            class: "btn btn-ghost btn-sm text-primary gap-1",
                                            onclick: move |_| on_details.call(emp_id.clone()),
                                            Icon { width: 14, height: 14, icon: FaEye }
                                            "Details"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
