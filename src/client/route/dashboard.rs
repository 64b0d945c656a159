use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaChartLine, FaPlane, FaTriangleExclamation, FaUsers},
    Icon,
};

use crate::{
    client::{
        component::{ErrorPage, FlightRow, LoadingPage, Page, StatsCard},
        constant::SITE_NAME,
        model::cache::Cache,
        router::Route,
    },
    model::{dashboard::DashboardStatsDto, flight::FlightDto},
};

#[cfg(feature = "web")]
use crate::client::api::{dashboard::get_dashboard_stats, flight::get_all_flights};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn Dashboard() -> Element {
    let mut stats = use_signal(|| Cache::<DashboardStatsDto>::Loading);
    let mut flights = use_signal(|| Cache::<Vec<FlightDto>>::Loading);

    // Both slices are fetched concurrently and settle independently
    #[cfg(feature = "web")]
    let mut stats_future = use_resource(get_dashboard_stats);
    #[cfg(feature = "web")]
    let mut flights_future = use_resource(get_all_flights);

    #[cfg(feature = "web")]
    {
        use_effect(move || {
            if let Some(result) = &*stats_future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch dashboard stats: {}", err);
                }
                stats.set(Cache::from_result(result.clone()));
            }
        });

        use_effect(move || {
            if let Some(result) = &*flights_future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch flights: {}", err);
                }
                flights.set(Cache::from_result(result.clone()));
            }
        });
    }

    let retry_stats = move |_: ()| {
        stats.set(Cache::Loading);
        #[cfg(feature = "web")]
        stats_future.restart();
    };
    let retry_flights = move |_: ()| {
        flights.set(Cache::Loading);
        #[cfg(feature = "web")]
        flights_future.restart();
    };

    rsx!(
        Title { "Dashboard | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6 max-w-7xl mx-auto",
            h1 { class: "text-2xl font-bold", "Flight Operations Dashboard" }
            StatsSection { stats: stats(), on_retry: retry_stats }
            FlightsSection { flights: flights(), on_retry: retry_flights }
        }
    )
}

#[component]
fn StatsSection(stats: Cache<DashboardStatsDto>, on_retry: EventHandler<()>) -> Element {
    match stats {
        Cache::Fetched(stats) => rsx!(
            div {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4",
                StatsCard {
                    title: "Total Flights",
                    value: stats.total_flights.to_string(),
                    subtitle: "Scheduled",
                    tone: "border-primary",
                    span { class: "text-primary", Icon { width: 36, height: 36, icon: FaPlane } }
                }
                StatsCard {
                    title: "Available Crew",
                    value: stats.available_crew.to_string(),
                    subtitle: "Ready for assignment",
                    tone: "border-success",
                    span { class: "text-success", Icon { width: 36, height: 36, icon: FaUsers } }
                }
                StatsCard {
                    title: "Needs Assignment",
                    value: stats.needs_assignment.to_string(),
                    subtitle: "Flights awaiting crew",
                    tone: "border-error",
                    span { class: "text-error", Icon { width: 36, height: 36, icon: FaTriangleExclamation } }
                }
                StatsCard {
                    title: "Avg Performance",
                    value: format!("{:.1}", stats.avg_performance),
                    subtitle: "Crew average score",
                    tone: "border-secondary",
                    span { class: "text-secondary", Icon { width: 36, height: 36, icon: FaChartLine } }
                }
            }
        ),
        Cache::Error(err) => rsx!(ErrorPage {
            status: err.status,
            message: err.message,
            on_retry,
        }),
        Cache::Loading | Cache::NotFetched => rsx!(LoadingPage { class: "h-32" }),
    }
}

#[component]
fn FlightsSection(flights: Cache<Vec<FlightDto>>, on_retry: EventHandler<()>) -> Element {
    let nav = navigator();

    rsx!(
        div {
            class: "card bg-base-100 shadow-md",
            div {
                class: "card-body",
                h2 { class: "card-title", "Upcoming Flights" }
                match flights {
                    Cache::Fetched(flights) if flights.is_empty() => rsx!(
                        p { class: "text-center py-8 opacity-60", "No flights scheduled." }
                    ),
                    Cache::Fetched(flights) => rsx!(
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "table table-zebra",
                                thead {
                                    tr {
                                        th { "Flight" }
                                        th { "Route" }
                                        th { "Aircraft" }
                                        th { "Departure" }
                                        th { "Status" }
                                        th { "Priority" }
                                        th { class: "text-center", "Crew" }
                                    }
                                }
                                tbody {
                                    for flight in flights {
                                        FlightRow {
                                            key: "{flight.flight_number}",
                                            flight: flight.clone(),
                                            on_select: move |flight: String| {
                                                nav.push(Route::Recommendations { flight });
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    ),
                    Cache::Error(err) => rsx!(ErrorPage {
                        status: err.status,
                        message: err.message,
                        on_retry,
                    }),
                    Cache::Loading | Cache::NotFetched => rsx!(LoadingPage { class: "h-48" }),
                }
            }
        }
    )
}
