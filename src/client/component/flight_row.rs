use dioxus::prelude::*;

use crate::{
    client::view_model::flight::{crew_count_label, priority_badge_class, status_badge_class},
    model::flight::FlightDto,
};

#[component]
pub fn FlightRow(flight: FlightDto, on_select: EventHandler<String>) -> Element {
    let status = flight.effective_status();
    let status_class = status_badge_class(&status);
    let priority_class = priority_badge_class(&flight.priority);
    let crew_count = crew_count_label(&flight);
    let flight_number = flight.flight_number.clone();

    rsx!(
        tr {
            class: "hover cursor-pointer",
            onclick: move |_| on_select.call(flight_number.clone()),
            td { class: "font-semibold text-primary", "{flight.flight_number}" }
            td { "{flight.route}" }
            td { "{flight.aircraft}" }
            td { class: "font-mono", "{flight.departure}" }
            td {
                span { class: "badge {status_class}", "{status}" }
            }
            td {
                span { class: "badge {priority_class}", "{flight.priority}" }
            }
            td {
                class: "text-center font-semibold",
                "{crew_count}"
            }
        }
    )
}
