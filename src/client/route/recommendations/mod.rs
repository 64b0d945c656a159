mod assign_modal;

pub use assign_modal::AssignmentModal;

use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCircleCheck, FaCircleInfo, FaPlaneDeparture},
    Icon,
};
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page, RecommendationCard},
        constant::SITE_NAME,
        model::{
            assignment::{AssignmentFlow, PendingAssignment},
            cache::{Cache, KeyedCache},
            error::ApiError,
            recommendations::{FetchTicket, RecommendationsState},
        },
        router::Route,
        view_model::{
            build_recommendation_views,
            flight::{crew_count_label, picker_label, status_badge_class},
            RecommendationView,
        },
    },
    model::{assignment::AssignReceipt, flight::FlightDto},
};

#[cfg(feature = "web")]
use crate::client::api::{
    assignment::submit_assignment,
    flight::{get_all_flights, get_flight},
    recommendation::get_recommendations,
};

/// Runs the fetch described by `ticket` and hands the result back to the page state.
fn fetch_recommendations(mut state: Signal<RecommendationsState>, ticket: FetchTicket) {
    #[cfg(feature = "web")]
    spawn(async move {
        let result = get_recommendations(&ticket.flight_number).await;
        state.write().resolve(ticket, result);
    });

    #[cfg(not(feature = "web"))]
    let _ = (&mut state, ticket);
}

#[component]
pub fn Recommendations(flight: String) -> Element {
    let nav = navigator();

    let mut flights = use_signal(|| Cache::<Vec<FlightDto>>::Loading);
    let mut state = use_signal(RecommendationsState::default);
    let mut selected_details = use_signal(KeyedCache::<String, FlightDto>::default);
    let mut flow = use_signal(AssignmentFlow::default);
    let mut processing = use_signal(|| false);
    let mut assign_error = use_signal(|| None::<ApiError>);
    let mut receipt = use_signal(|| None::<AssignReceipt>);

    #[cfg(feature = "web")]
    let mut flights_future = use_resource(get_all_flights);

    #[cfg(feature = "web")]
    {
        use_effect(move || {
            if let Some(result) = &*flights_future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch flights: {}", err);
                }
                flights.set(Cache::from_result(result.clone()));
            }
        });

        let details_future = use_resource(use_reactive!(|flight| async move {
            let flight_number = flight.trim().to_string();
            if flight_number.is_empty() {
                return None;
            }
            let result = get_flight(&flight_number).await;
            Some((flight_number, result))
        }));

        use_effect(move || match &*details_future.read_unchecked() {
            Some(Some((key, Ok(data)))) => selected_details.set(KeyedCache::Fetched {
                key: key.clone(),
                data: data.clone(),
            }),
            Some(Some((key, Err(error)))) => {
                tracing::warn!("Failed to fetch flight {}: {}", key, error);
                selected_details.set(KeyedCache::Error {
                    key: key.clone(),
                    error: error.clone(),
                });
            }
            Some(None) | None => selected_details.set(KeyedCache::NotFetched),
        });
    }

    // The `?flight=` query parameter is the source of the selection
    use_effect(use_reactive!(|flight| {
        if let Some(discarded) = flow.write().abandon() {
            tracing::info!(
                "Discarded pending assignment of {} to {}",
                discarded.request.emp_id,
                discarded.request.flight_number
            );
        }
        receipt.set(None);
        assign_error.set(None);
        let ticket = state.write().select(&flight);
        if let Some(ticket) = ticket {
            fetch_recommendations(state, ticket);
        }
    }));

    let retry_flights = move |_: ()| {
        flights.set(Cache::Loading);
        #[cfg(feature = "web")]
        flights_future.restart();
    };

    let retry_recommendations = move |_: ()| {
        let selected = state.peek().selected_flight().map(str::to_string);
        let Some(selected) = selected else {
            return;
        };
        let ticket = state.write().select(&selected);
        if let Some(ticket) = ticket {
            fetch_recommendations(state, ticket);
        }
    };

    let views = use_memo(move || {
        state
            .read()
            .recommendations()
            .data()
            .map(Vec::as_slice)
            .map(build_recommendation_views)
            .unwrap_or_default()
    });

    let on_assign = move |candidate: RecommendationView| {
        if processing() {
            return;
        }
        let Some(flight_number) = state.peek().selected_flight().map(str::to_string) else {
            return;
        };
        assign_error.set(None);
        receipt.set(None);
        if let Err(err) = flow
            .write()
            .begin(PendingAssignment::new(&flight_number, &candidate))
        {
            tracing::warn!("Ignoring assign request: {}", err);
        }
    };

    let on_confirm = move |_: ()| {
        let Some(request) = flow
            .peek()
            .pending()
            .filter(|_| flow.peek().is_confirming())
            .map(|pending| pending.request.clone())
        else {
            return;
        };
        processing.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match submit_assignment(request.clone()).await {
                Ok(confirmed) => match flow.write().confirm(&request) {
                    Ok(()) => receipt.set(Some(confirmed)),
                    Err(err) => tracing::warn!("Dropping assignment receipt: {}", err),
                },
                Err(err) => {
                    tracing::error!("Failed to submit assignment: {}", err);
                    if flow.peek().awaits(&request) {
                        assign_error.set(Some(err));
                    }
                }
            }
            processing.set(false);
        });

        #[cfg(not(feature = "web"))]
        let _ = request;
    };

    let on_cancel = move |_: ()| {
        if processing() {
            return;
        }
        assign_error.set(None);
        if let Err(err) = flow.write().cancel() {
            tracing::warn!("Nothing to cancel: {}", err);
        }
    };

    let selected = state.read().selected_flight().map(str::to_string);
    let pending = flow.read().pending().cloned().filter(|_| flow.read().is_confirming());
    let details = selected_details.read().data().cloned();
    let recommendations = state.read().recommendations().clone();
    let confirmed_at = receipt
        .read()
        .as_ref()
        .map(|receipt| receipt.confirmed_at.format("%H:%M:%S UTC").to_string());

    rsx!(
        Title { "Recommendations | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6 max-w-7xl mx-auto",
            h1 { class: "text-2xl font-bold", "AI Crew Recommendations" }

            // Flight picker
            div {
                class: "card bg-base-100 shadow-md",
                div {
                    class: "card-body gap-4",
                    label {
                        class: "font-semibold",
                        r#for: "flight-picker",
                        "Select Flight"
                    }
                    match flights() {
                        Cache::Fetched(flight_list) => rsx!(
                            select {
                                id: "flight-picker",
                                class: "select select-bordered w-full",
                                onchange: move |evt| {
                                    nav.replace(Route::Recommendations { flight: evt.value() });
                                },
                                option {
                                    value: "",
                                    selected: selected.is_none(),
                                    "Choose a flight..."
                                }
                                for item in flight_list {
                                    option {
                                        key: "{item.flight_number}",
                                        value: "{item.flight_number}",
                                        selected: selected.as_deref() == Some(item.flight_number.as_str()),
                                        {picker_label(&item)}
                                    }
                                }
                            }
                        ),
                        Cache::Error(err) => rsx!(ErrorPage {
                            status: err.status,
                            message: err.message,
                            on_retry: retry_flights,
                        }),
                        Cache::Loading | Cache::NotFetched => rsx!(
                            select {
                                id: "flight-picker",
                                class: "select select-bordered w-full",
                                disabled: true,
                                option { "Loading flights..." }
                            }
                        ),
                    }
                    if let Some(flight) = details.filter(|f| selected.as_deref() == Some(f.flight_number.as_str())) {
                        SelectedFlight { flight }
                    }
                }
            }

            // Assignment outcome
            match flow() {
                AssignmentFlow::Confirmed(done) => rsx!(
                    div {
                        role: "alert",
                        class: "alert alert-success",
                        Icon { width: 20, height: 20, icon: FaCircleCheck }
                        span {
                            "{done.candidate_name} assigned to {done.request.flight_number}"
                            if let Some(confirmed_at) = confirmed_at.clone() {
                                " at {confirmed_at}"
                            }
                        }
                        button {
                            class: "btn btn-sm btn-ghost",
                            onclick: move |_| flow.write().dismiss(),
                            "Dismiss"
                        }
                    }
                ),
                AssignmentFlow::Cancelled(cancelled) => rsx!(
                    div {
                        role: "alert",
                        class: "alert alert-info alert-soft",
                        Icon { width: 20, height: 20, icon: FaCircleInfo }
                        span { "Assignment of {cancelled.candidate_name} cancelled" }
                        button {
                            class: "btn btn-sm btn-ghost",
                            onclick: move |_| flow.write().dismiss(),
                            "Dismiss"
                        }
                    }
                ),
                AssignmentFlow::Discarded(discarded) => rsx!(
                    div {
                        role: "alert",
                        class: "alert alert-warning alert-soft",
                        Icon { width: 20, height: 20, icon: FaCircleInfo }
                        span {
                            "Assignment of {discarded.candidate_name} to {discarded.request.flight_number} was discarded because the selected flight changed"
                        }
                        button {
                            class: "btn btn-sm btn-ghost",
                            onclick: move |_| flow.write().dismiss(),
                            "Dismiss"
                        }
                    }
                ),
                AssignmentFlow::Idle | AssignmentFlow::Confirming(_) => rsx!(),
            }

            // Ranked candidates
            match recommendations {
                KeyedCache::NotFetched => rsx!(
                    div {
                        class: "text-center py-12 opacity-60",
                        Icon { width: 48, height: 48, icon: FaPlaneDeparture }
                        p { class: "mt-4", "Select a flight to view ranked crew recommendations." }
                    }
                ),
                KeyedCache::Loading { .. } => rsx!(LoadingPage {}),
                KeyedCache::Error { key, error } if error.is_not_found() => rsx!(
                    div {
                        role: "alert",
                        class: "alert alert-warning alert-soft",
                        "Flight {key} was not found."
                    }
                ),
                KeyedCache::Error { error, .. } => rsx!(ErrorPage {
                    status: error.status,
                    message: error.message,
                    on_retry: retry_recommendations,
                }),
                KeyedCache::Fetched { data, .. } if data.is_empty() => rsx!(
                    div {
                        class: "alert alert-info alert-soft",
                        "No recommendations available for this flight."
                    }
                ),
                KeyedCache::Fetched { key, .. } => rsx!(
                    div {
                        class: "flex flex-col gap-4",
                        h2 {
                            class: "text-xl font-bold",
                            "Top {views.read().len()} Recommendations for {key}"
                        }
                        for recommendation in views() {
                            RecommendationCard {
                                key: "{recommendation.rank}-{recommendation.emp_id}",
                                recommendation,
                                on_assign,
                            }
                        }
                    }
                ),
            }
        }
        AssignmentModal {
            pending,
            flight: selected_details.read().data().cloned(),
            is_processing: processing(),
            error: assign_error(),
            on_confirm,
            on_cancel,
        }
    )
}

#[component]
fn SelectedFlight(flight: FlightDto) -> Element {
    let status = flight.effective_status();
    let status_class = status_badge_class(&status);

    rsx!(
        div {
            class: "grid grid-cols-2 md:grid-cols-5 gap-3 bg-base-200 rounded-box p-4 text-sm",
            div {
                p { class: "opacity-70", "Route" }
                p { class: "font-semibold", "{flight.route}" }
            }
            div {
                p { class: "opacity-70", "Aircraft" }
                p { class: "font-semibold", "{flight.aircraft}" }
            }
            div {
                p { class: "opacity-70", "Departure" }
                p { class: "font-semibold font-mono", "{flight.departure}" }
            }
            div {
                p { class: "opacity-70", "Crew" }
                p { class: "font-semibold", "{crew_count_label(&flight)}" }
            }
            div {
                p { class: "opacity-70", "Status" }
                span { class: "badge {status_class}", "{status}" }
            }
        }
    )
}
