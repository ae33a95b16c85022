use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use interview_core::time::fixed_clock;
use services::WorkspaceService;
use storage::{InMemoryWorkspace, QuestionLibrary};

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, InterviewView, ResultsView};

#[derive(Clone)]
struct TestApp {
    workspace_service: Arc<WorkspaceService>,
}

impl UiApp for TestApp {
    fn workspace_service(&self) -> Arc<WorkspaceService> {
        Arc::clone(&self.workspace_service)
    }

    fn open_interview_on_launch(&self) -> bool {
        false
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Interview,
    Results,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Interview => rsx! { InterviewView {} },
        ViewKind::Results => rsx! { ResultsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub service: Arc<WorkspaceService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Service over the bundled sample library and a fresh in-memory workspace.
pub fn sample_service() -> Arc<WorkspaceService> {
    let library = QuestionLibrary::sample().expect("sample library");
    Arc::new(
        WorkspaceService::new(fixed_clock(), library, Arc::new(InMemoryWorkspace::new()))
            .with_seed(Some(1)),
    )
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_service(view, sample_service())
}

pub fn setup_view_harness_with_service(
    view: ViewKind,
    service: Arc<WorkspaceService>,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        workspace_service: Arc::clone(&service),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom, service }
}
