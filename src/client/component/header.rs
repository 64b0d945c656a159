use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaPlane, FaStar, FaTableColumns, FaUsers},
    Icon,
};

use crate::client::{
    constant::{SITE_NAME, SITE_TAGLINE},
    model::cache::Cache,
    router::Route,
};
use crate::model::dashboard::HealthDto;

#[cfg(feature = "web")]
use crate::client::api::dashboard::health_check;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn Header() -> Element {
    let mut health = use_signal(|| Cache::<HealthDto>::Loading);

    #[cfg(feature = "web")]
    {
        let future = use_resource(health_check);

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::warn!("Crew backend health check failed: {}", err);
                }
                health.set(Cache::from_result(result.clone()));
            }
        });
    }

    let (dot_class, dot_title) = match &*health.read() {
        Cache::Fetched(report) if report.is_running() => (
            "status-success",
            format!(
                "Backend running: {} crew, {} flights",
                report.crew_count, report.flights_count
            ),
        ),
        Cache::Fetched(report) => ("status-warning", format!("Backend status: {}", report.status)),
        Cache::Error(err) => ("status-error", format!("Backend unreachable: {}", err)),
        Cache::NotFetched | Cache::Loading => ("status-neutral", "Checking backend".to_string()),
    };

    rsx!(div {
        class: "fixed flex flex-col gap-3 w-full py-3 px-4 bg-primary text-primary-content shadow-lg z-20",
        div {
            class: "flex items-center justify-between gap-4",
            Link {
                to: Route::Dashboard {},
                div {
                    class: "flex items-center gap-3",
                    div {
                        class: "bg-base-100 text-primary p-2 rounded-box",
                        Icon { width: 28, height: 28, icon: FaPlane }
                    }
                    div {
                        p { class: "md:text-2xl text-xl font-bold", {SITE_NAME} }
                        p { class: "text-sm opacity-80", {SITE_TAGLINE} }
                    }
                }
            }
            div {
                class: "flex items-center gap-2 text-sm",
                title: "{dot_title}",
                div { class: "status {dot_class}" }
                span { class: "hidden md:inline", "Backend" }
            }
        }
        nav {
            class: "flex gap-2",
            NavItem { to: Route::Dashboard {}, label: "Dashboard", icon: NavIcon::Dashboard }
            NavItem { to: Route::CrewManagement {}, label: "Crew Management", icon: NavIcon::Crew }
            NavItem {
                to: Route::Recommendations { flight: String::new() },
                label: "Recommendations",
                icon: NavIcon::Recommendations,
            }
        }
    })
}

#[derive(Clone, Copy, PartialEq)]
enum NavIcon {
    Dashboard,
    Crew,
    Recommendations,
}

#[component]
fn NavItem(to: Route, label: &'static str, icon: NavIcon) -> Element {
    rsx!(
        Link {
            to,
            class: "btn btn-ghost btn-sm gap-2",
            active_class: "btn-active",
            match icon {
                NavIcon::Dashboard => rsx!(Icon { width: 16, height: 16, icon: FaTableColumns }),
                NavIcon::Crew => rsx!(Icon { width: 16, height: 16, icon: FaUsers }),
                NavIcon::Recommendations => rsx!(Icon { width: 16, height: 16, icon: FaStar }),
            }
            "{label}"
        }
    )
}
