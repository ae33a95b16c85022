use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use services::WorkspaceService;

pub trait UiApp: Send + Sync {
    fn workspace_service(&self) -> Arc<WorkspaceService>;

    /// Categories were chosen before launch; skip the start screen once.
    fn open_interview_on_launch(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    open_interview_on_launch_once: Arc<AtomicBool>,
    workspace_service: Arc<WorkspaceService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            open_interview_on_launch_once: Arc::new(AtomicBool::new(
                app.open_interview_on_launch(),
            )),
            workspace_service: app.workspace_service(),
        }
    }

    /// Returns `true` the first time only.
    #[must_use]
    pub fn take_open_interview_on_launch(&self) -> bool {
        self.open_interview_on_launch_once
            .swap(false, Ordering::AcqRel)
    }

    #[must_use]
    pub fn workspace_service(&self) -> Arc<WorkspaceService> {
        Arc::clone(&self.workspace_service)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
