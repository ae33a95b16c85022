use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ResultItemVm, ResultsVm, map_results};

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let service = ctx.workspace_service();
    let error = use_signal(|| None::<ViewError>);

    let resource = {
        let service = service.clone();
        use_resource(move || {
            let service = service.clone();
            async move {
                let results = service.results().await.map_err(|err| {
                    tracing::warn!(error = %err, "failed to load results");
                    ViewError::Unknown
                })?;
                Ok::<_, ViewError>(map_results(&results))
            }
        })
    };
    let state = view_state_from_resource(&resource);

    let on_start_over = use_callback(move |()| {
        let service = service.clone();
        let mut error = error;
        spawn(async move {
            match service.reset().await {
                Ok(()) => {
                    let _ = navigator.push(Route::Home {});
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to reset workspace");
                    error.set(Some(ViewError::Unknown));
                }
            }
        });
    });

    rsx! {
        div { class: "page results",
            h2 { "Results" }
            if let Some(err) = *error.read() {
                p { class: "error", "{err.message()}" }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    ResultsDetails { results: data }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
            button {
                class: "control",
                id: "results-start-over",
                r#type: "button",
                onclick: move |_| on_start_over.call(()),
                "Start over"
            }
        }
    }
}

#[component]
fn ResultsDetails(results: ResultsVm) -> Element {
    rsx! {
        p { class: "results__headline", "{results.headline}" }
        if let Some(finished) = results.finished_at_str.as_deref() {
            p { class: "results__finished", "Last answer: {finished}" }
        }
        if results.items.is_empty() {
            p { "No questions answered yet." }
        } else {
            ol { class: "results__list",
                for item in results.items.iter().cloned() {
                    ResultItem { item }
                }
            }
        }
    }
}

#[component]
fn ResultItem(item: ResultItemVm) -> Element {
    rsx! {
        li { class: "results__item",
            div { class: "interview__title", "{item.category}" }
            p { class: "interview__question", "{item.question}" }
            for (index, paragraph) in item.answer_paragraphs.iter().enumerate() {
                p { key: "{index}", class: "interview__answer-chunk", "{paragraph}" }
            }
            if let Some(my_answer) = item.my_answer.as_deref() {
                p { class: "interview__my-answer", "My answer: {my_answer}" }
            }
            p { class: "results__time", "{item.answered_at_str}" }
        }
    }
}
