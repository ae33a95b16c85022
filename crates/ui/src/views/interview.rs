use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    InterviewControls, InterviewIntent, InterviewScreen, InterviewVm, LoadedInterviewVm,
    start_interview,
};

#[component]
pub fn InterviewView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let service = ctx.workspace_service();

    let vm = use_signal(|| None::<InterviewVm>);
    let error = use_signal(|| None::<ViewError>);

    let resource = use_resource(move || {
        let service = service.clone();
        let mut vm = vm;
        async move {
            let (started, navigation) = start_interview(&service).await?;
            vm.set(Some(started));
            if let Some(navigation) = navigation {
                let _ = navigator.replace(Route::from(navigation));
            }
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let dispatch_intent = use_callback(move |intent: InterviewIntent| {
        let mut vm = vm;
        let mut error = error;

        if intent.is_local() {
            if let Some(current) = vm.write().as_mut() {
                current.apply_local(&intent);
            }
            return;
        }

        spawn(async move {
            let taken = vm.write().take();
            let Some(mut current) = taken else {
                error.set(Some(ViewError::Unknown));
                return;
            };

            let result = current.apply(intent).await;

            // Put the session back even on failure so the page stays usable.
            vm.set(Some(current));

            match result {
                Ok(Some(navigation)) => {
                    error.set(None);
                    let _ = navigator.push(Route::from(navigation));
                }
                Ok(None) => error.set(None),
                Err(err) => error.set(Some(err)),
            }
        });
    });

    let screen = match (vm.read().as_ref(), &state) {
        (Some(current), _) => current.screen(),
        (None, ViewState::Loading) => InterviewScreen::Loading,
        (None, _) => InterviewScreen::NotLoaded,
    };

    rsx! {
        div { class: "page interview",
            match state {
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                    button {
                        class: "control",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                _ => rsx! {
                    if let Some(err) = *error.read() {
                        p { class: "error", "{err.message()}" }
                    }
                    match screen {
                        InterviewScreen::Loaded(loaded) => rsx! {
                            LoadedInterview { vm: loaded, on_intent: dispatch_intent }
                        },
                        InterviewScreen::Loading => rsx! {
                            div { "Loading..." }
                        },
                        InterviewScreen::NotLoaded => rsx! {
                            div { "Not loaded" }
                        },
                    }
                },
            }
        }
    }
}

#[component]
fn LoadedInterview(vm: LoadedInterviewVm, on_intent: EventHandler<InterviewIntent>) -> Element {
    let next_label = vm.controls.next_label();
    let spoiler = vm.spoiler.map(|spoiler| {
        if spoiler.open {
            (spoiler.label(), "spoiler spoiler--open", "spoiler__arrow spoiler__arrow--down")
        } else {
            (spoiler.label(), "spoiler", "spoiler__arrow")
        }
    });

    rsx! {
        div { class: "interview__title", "{vm.category}" }
        p { class: "interview__question", "{vm.question}" }

        if vm.show_my_answer_field {
            textarea {
                class: "interview__my-answer-field",
                id: "interview-my-answer",
                value: "{vm.my_answer}",
                oninput: move |evt: FormEvent| {
                    on_intent.call(InterviewIntent::UpdateMyAnswer(evt.value()));
                },
            }
        }

        for (index, paragraph) in vm.answer_paragraphs.iter().enumerate() {
            p { key: "{index}", class: "interview__answer-chunk", "{paragraph}" }
        }

        div { class: "interview__controls",
            match vm.controls {
                InterviewControls::Prompt => rsx! {
                    button {
                        class: "control",
                        id: "interview-check",
                        r#type: "button",
                        onclick: move |_| on_intent.call(InterviewIntent::CheckAnswer),
                        "Check the answer"
                    }
                    button {
                        class: "control",
                        id: "interview-next",
                        r#type: "button",
                        onclick: move |_| on_intent.call(InterviewIntent::Next),
                        "{next_label}"
                    }
                },
                InterviewControls::SelfGrade => rsx! {
                    button {
                        class: "control",
                        id: "interview-knew",
                        r#type: "button",
                        onclick: move |_| on_intent.call(InterviewIntent::KnewIt),
                        "I knew that 😎"
                    }
                    button {
                        class: "control",
                        id: "interview-study",
                        r#type: "button",
                        onclick: move |_| on_intent.call(InterviewIntent::Next),
                        "I need to study more ☕️"
                    }
                },
                InterviewControls::Advance { .. } => rsx! {
                    button {
                        class: "control",
                        id: "interview-next",
                        r#type: "button",
                        onclick: move |_| on_intent.call(InterviewIntent::Next),
                        "{next_label}"
                    }
                },
            }
        }

        if let Some((label, class, arrow_class)) = spoiler {
            button {
                class: "{class}",
                id: "interview-spoiler",
                r#type: "button",
                onclick: move |_| on_intent.call(InterviewIntent::ToggleMyAnswer),
                span { class: "{arrow_class}", ">" }
                " {label}"
            }
        }

        if vm.my_answer_visible {
            p { class: "interview__my-answer", "{vm.my_answer}" }
        }
    }
}
