use dioxus::prelude::*;
use dioxus_router::use_navigator;
use interview_core::model::CategoryName;
use services::WorkspaceServiceError;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{CategoryOptionVm, map_category_options};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let service = ctx.workspace_service();
    let options = service.category_options();

    let mut selected = use_signal(Vec::<CategoryName>::new);
    let error = use_signal(|| None::<ViewError>);

    use_effect(move || {
        if ctx.take_open_interview_on_launch() {
            let _ = navigator.replace(Route::Interview {});
        }
    });

    let toggle = use_callback(move |name: CategoryName| {
        let mut list = selected.write();
        if let Some(pos) = list.iter().position(|existing| *existing == name) {
            list.remove(pos);
        } else {
            list.push(name);
        }
    });

    let on_start = use_callback(move |()| {
        let service = service.clone();
        let names = selected.read().clone();
        let mut error = error;
        spawn(async move {
            match service.select(&names).await {
                Ok(_) => {
                    error.set(None);
                    let _ = navigator.push(Route::Interview {});
                }
                Err(WorkspaceServiceError::NothingSelected) => {
                    error.set(Some(ViewError::NothingSelected));
                }
                Err(err) => {
                    tracing::warn!(error = %err, "category selection failed");
                    error.set(Some(ViewError::Unknown));
                }
            }
        });
    });

    let vms = map_category_options(&options, &selected.read());
    let nothing_selected = selected.read().is_empty();

    rsx! {
        div { class: "page",
            h2 { "Pick categories" }
            if vms.is_empty() {
                p { "The question library is empty." }
            }
            ul { class: "category-list",
                for option in vms {
                    li { key: "{option.label}",
                        CategoryButton { option, on_toggle: toggle }
                    }
                }
            }
            if let Some(err) = *error.read() {
                p { class: "error", "{err.message()}" }
            }
            button {
                class: "control",
                id: "start-interview",
                r#type: "button",
                disabled: nothing_selected,
                onclick: move |_| on_start.call(()),
                "Start interview"
            }
        }
    }
}

#[component]
fn CategoryButton(option: CategoryOptionVm, on_toggle: EventHandler<CategoryName>) -> Element {
    let class = if option.selected {
        "category category--selected"
    } else {
        "category"
    };
    let name = option.name.clone();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            aria_pressed: "{option.selected}",
            onclick: move |_| on_toggle.call(name.clone()),
            strong { "{option.label}" }
            " "
            span { class: "category__count", "{option.count_label}" }
        }
    }
}
