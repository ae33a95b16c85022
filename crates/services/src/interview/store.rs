use interview_core::{InterviewAction, InterviewState};

/// Owns the interview state of one session and applies intents to it.
#[derive(Debug, Clone, Default)]
pub struct InterviewStore {
    state: InterviewState,
}

impl InterviewStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &InterviewState {
        &self.state
    }

    /// Fold `action` into the current state.
    pub fn dispatch(&mut self, action: InterviewAction) -> &InterviewState {
        tracing::debug!(action = action.name(), "interview intent");
        self.state = std::mem::take(&mut self.state).reduce(action);
        &self.state
    }
}
