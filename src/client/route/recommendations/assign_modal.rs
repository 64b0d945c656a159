use dioxus::prelude::*;

use crate::{
    client::{
        component::{crew_detail_modal::use_crew_member, ConfirmationModal},
        model::{assignment::PendingAssignment, cache::Cache, error::ApiError},
        view_model::crew::{format_number, format_rating, hours_summary, initials},
    },
    model::flight::FlightDto,
};

/// Confirmation dialog for assigning a recommended candidate to a flight.
#[component]
pub fn AssignmentModal(
    pending: Option<PendingAssignment>,
    flight: Option<FlightDto>,
    is_processing: bool,
    error: Option<ApiError>,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let open = pending.is_some();
    let member = use_crew_member(pending.as_ref().map(|p| p.request.emp_id.clone()));

    let message = match pending {
        Some(pending) => {
            let flight_number = pending.request.flight_number.clone();
            rsx!(
                div {
                    class: "space-y-4 py-2",
                    div {
                        class: "bg-base-200 rounded-box p-3",
                        p { class: "text-sm opacity-70", "Flight" }
                        p { class: "font-bold text-lg", "{flight_number}" }
                        if let Some(flight) = flight.filter(|f| f.flight_number == flight_number) {
                            p { class: "text-sm", "{flight.route} • {flight.aircraft} • {flight.departure}" }
                        }
                    }
                    div {
                        class: "flex items-center gap-3",
                        div {
                            class: "avatar avatar-placeholder",
                            div {
                                class: "bg-primary text-primary-content w-12 rounded-full",
                                span { class: "font-bold", {initials(&pending.candidate_name)} }
                            }
                        }
                        div {
                            p { class: "font-bold", "{pending.candidate_name}" }
                            p { class: "text-sm opacity-70", "{pending.designation} • {pending.base_location}" }
                        }
                        div {
                            class: "ml-auto text-right",
                            p { class: "text-2xl font-bold text-primary", "{pending.composite_score:.1}" }
                            p { class: "text-sm opacity-70", "{format_rating(pending.composite_score)}/5" }
                        }
                    }
                    match &*member.read() {
                        Cache::Fetched(crew) => rsx!(
                            div {
                                class: "grid grid-cols-2 gap-2 text-sm",
                                p { "Experience: {format_number(crew.years_experience)} yrs" }
                                p { "Hours (7d/30d): {hours_summary(crew)}" }
                            }
                        ),
                        Cache::Loading => rsx!(span { class: "loading loading-dots loading-sm" }),
                        Cache::Error(_) | Cache::NotFetched => rsx!(),
                    }
                    if let Some(error) = error {
                        div {
                            role: "alert",
                            class: "alert alert-error alert-soft text-sm",
                            "Assignment failed: {error}"
                        }
                    }
                    p {
                        class: "text-sm opacity-70",
                        "The assignment is recorded once confirmed."
                    }
                }
            )
        }
        None => rsx!(),
    };

    rsx!(ConfirmationModal {
        open,
        title: "Confirm Assignment",
        message,
        confirm_text: "Confirm Assignment",
        confirm_class: "btn-primary",
        is_processing,
        processing_text: "Assigning...",
        on_confirm,
        on_cancel,
    })
}
