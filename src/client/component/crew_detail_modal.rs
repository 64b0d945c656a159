use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Modal},
        model::cache::{Cache, RequestSequence},
        view_model::crew::{
            availability_badge_class, format_number, format_rating, format_thousands,
            hours_summary, initials,
        },
    },
    model::crew::CrewMemberDto,
};

#[cfg(feature = "web")]
use crate::client::api::crew::get_crew_member;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

/// Loads one crew member whenever `emp_id` changes.
///
/// A response for an id that has since been replaced is dropped.
pub fn use_crew_member(emp_id: Option<String>) -> Signal<Cache<CrewMemberDto>> {
    let mut member = use_signal(|| Cache::<CrewMemberDto>::NotFetched);
    let mut sequence = use_signal(RequestSequence::default);

    use_effect(use_reactive!(|emp_id| {
        let token = sequence.write().issue();

        let Some(emp_id) = emp_id else {
            member.set(Cache::NotFetched);
            return;
        };
        member.set(Cache::Loading);

        #[cfg(feature = "web")]
        spawn(async move {
            let result = get_crew_member(&emp_id).await;
            if !sequence.peek().is_current(token) {
                return;
            }
            if let Err(err) = &result {
                tracing::error!("Failed to fetch crew member {}: {}", emp_id, err);
            }
            member.set(Cache::from_result(result));
        });

        #[cfg(not(feature = "web"))]
        let _ = (emp_id, token);
    }));

    member
}

#[component]
pub fn CrewDetailModal(emp_id: Option<String>, on_close: EventHandler<()>) -> Element {
    let open = emp_id.is_some();
    let member = use_crew_member(emp_id);

    rsx!(
        Modal {
            open,
            title: "Crew Member Details",
            prevent_close: false,
            on_close,
            match &*member.read() {
                Cache::Fetched(crew) => rsx!(CrewDetails { crew: crew.clone() }),
                Cache::Error(err) => rsx!(ErrorPage { status: err.status, message: err.message.clone() }),
                Cache::Loading | Cache::NotFetched => rsx!(LoadingPage { class: "h-48" }),
            }
        }
    )
}

#[component]
fn CrewDetails(crew: CrewMemberDto) -> Element {
    let badge_class = availability_badge_class(&crew.availability);

    rsx!(
        div {
            class: "space-y-4",
            div {
                class: "flex items-center gap-3",
                div {
                    class: "avatar avatar-placeholder",
                    div {
                        class: "bg-primary text-primary-content w-12 rounded-full",
                        span { class: "text-xl font-bold", {initials(&crew.name)} }
                    }
                }
                div {
                    p { class: "font-bold text-lg", "{crew.name}" }
                    p { class: "opacity-70", "{crew.designation} • {crew.base_location}" }
                }
                span { class: "badge ml-auto {badge_class}", "{crew.availability}" }
            }
            div {
                class: "grid grid-cols-3 gap-2 text-center",
                DetailStat { label: "Rating", value: format!("{}/5", format_rating(crew.performance_score)) }
                DetailStat { label: "Reliability", value: format!("{}%", format_number(crew.reliability_score)) }
                DetailStat { label: "Hours (7d/30d)", value: hours_summary(&crew) }
                DetailStat { label: "Experience", value: format!("{} yrs", format_number(crew.years_experience)) }
                DetailStat { label: "Flight Hours", value: format_thousands(crew.total_flight_hours) }
                DetailStat { label: "Employee ID", value: crew.emp_id.clone() }
            }
            div {
                p { class: "font-semibold mb-2", "Certifications" }
                if crew.certifications.is_empty() {
                    p { class: "text-sm opacity-60", "No certifications on record" }
                } else {
                    div {
                        class: "flex flex-wrap gap-2",
                        for certification in crew.certifications.iter() {
                            span { class: "badge badge-outline", "{certification}" }
                        }
                    }
                }
            }
        }
    )
}

#[component]
pub fn DetailStat(label: &'static str, value: String) -> Element {
    rsx!(
        div {
            class: "bg-base-200 p-2 rounded-box",
            p { class: "text-sm opacity-70", "{label}" }
            p { class: "font-bold", "{value}" }
        }
    )
}
