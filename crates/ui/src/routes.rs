use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use services::Navigation;

use crate::views::{HomeView, InterviewView, ResultsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/interview", InterviewView)] Interview {},
        #[route("/results", ResultsView)] Results {},
}

impl From<Navigation> for Route {
    fn from(navigation: Navigation) -> Self {
        match navigation {
            Navigation::Start => Route::Home {},
            Navigation::Results => Route::Results {},
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { "Interview" }
                Link { to: Route::Home {}, "Categories" }
                Link { to: Route::Results {}, "Results" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_maps_to_matching_route_paths() {
        for navigation in [Navigation::Start, Navigation::Results] {
            assert_eq!(Route::from(navigation).to_string(), navigation.path());
        }
    }
}
