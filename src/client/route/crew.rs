use dioxus::prelude::*;

use crate::{
    client::{
        component::{CrewDetailModal, CrewTable, ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::cache::Cache,
    },
    model::crew::CrewMemberDto,
};

#[cfg(feature = "web")]
use crate::client::api::crew::get_all_crew;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn CrewManagement() -> Element {
    let mut crew = use_signal(|| Cache::<Vec<CrewMemberDto>>::Loading);
    let mut detail_emp_id = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let mut crew_future = use_resource(get_all_crew);

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = &*crew_future.read_unchecked() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch crew: {}", err);
            }
            crew.set(Cache::from_result(result.clone()));
        }
    });

    let retry = move |_: ()| {
        crew.set(Cache::Loading);
        #[cfg(feature = "web")]
        crew_future.restart();
    };

    rsx!(
        Title { "Crew Management | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6 max-w-7xl mx-auto",
            div {
                class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold", "Crew Management" }
                if let Some(members) = crew.read().data() {
                    span { class: "badge badge-lg badge-primary", "{members.len()} members" }
                }
            }
            match crew() {
                Cache::Fetched(members) if members.is_empty() => rsx!(
                    p { class: "text-center py-8 opacity-60", "No crew members on record." }
                ),
                Cache::Fetched(members) => rsx!(CrewTable {
                    crew: members,
                    on_details: move |emp_id: String| detail_emp_id.set(Some(emp_id)),
                }),
                Cache::Error(err) => rsx!(ErrorPage {
                    status: err.status,
                    message: err.message,
                    on_retry: retry,
                }),
                Cache::Loading | Cache::NotFetched => rsx!(LoadingPage {}),
            }
        }
        CrewDetailModal {
            emp_id: detail_emp_id(),
            on_close: move |_| detail_emp_id.set(None),
        }
    )
}
