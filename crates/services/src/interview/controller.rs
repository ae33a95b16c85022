use std::fmt;
use std::sync::Arc;

use interview_core::model::AnsweredQuestion;
use interview_core::{Clock, InterviewAction, InterviewState};
use rand::SeedableRng;
use rand::rngs::StdRng;
use storage::WorkspaceStore;

use super::store::InterviewStore;
use crate::error::InterviewError;
use crate::selection::pick_question;

/// Where the surrounding app should go after an interview step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Nothing is selected; back to the category picker.
    Start,
    /// Every question was answered.
    Results,
}

impl Navigation {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Start => "/",
            Self::Results => "/results",
        }
    }
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Drives one interview session.
///
/// Reads the shared workspace, turns user actions into intents for its
/// `InterviewStore` and calls the workspace actions for answered questions.
/// Every step awaits the previous one, so intents are applied in call order.
pub struct InterviewController {
    workspace: Arc<dyn WorkspaceStore>,
    store: InterviewStore,
    rng: StdRng,
    clock: Clock,
}

impl InterviewController {
    #[must_use]
    pub fn new(workspace: Arc<dyn WorkspaceStore>, clock: Clock) -> Self {
        Self {
            workspace,
            store: InterviewStore::new(),
            rng: StdRng::from_os_rng(),
            clock,
        }
    }

    /// Use a deterministic question order.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn state(&self) -> &InterviewState {
        self.store.state()
    }

    /// Start the session: load the first question.
    ///
    /// Returns `Some(Navigation::Start)` without loading anything when no
    /// category is selected.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError::Storage` if the workspace cannot be read.
    pub async fn activate(&mut self) -> Result<Option<Navigation>, InterviewError> {
        let selected = self.workspace.selected_category_list().await?;
        if selected.is_empty() {
            tracing::info!("no categories selected, redirecting to start");
            return Ok(Some(Navigation::Start));
        }

        self.store.dispatch(InterviewAction::StartLoading);
        if !self.select_question().await? {
            tracing::warn!("selected categories have no questions left");
            return Ok(Some(Navigation::Start));
        }
        self.store.dispatch(InterviewAction::LoadingFinished);

        tracing::info!(categories = selected.len(), "interview started");
        Ok(None)
    }

    /// Load a random question from the selected categories.
    ///
    /// Returns `false` when every selected pool is empty.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError::Storage` if the workspace cannot be read.
    pub async fn select_question(&mut self) -> Result<bool, InterviewError> {
        let pool = self.workspace.selected_categories().await?;
        let list = self.workspace.selected_category_list().await?;

        let Some(pick) = pick_question(&pool, &list, &mut self.rng) else {
            return Ok(false);
        };

        tracing::debug!(category = %pick.category, index = pick.index, "question selected");
        self.store.dispatch(InterviewAction::GetQuestion {
            category: pick.category,
            index: pick.index,
            block: pick.block,
        });
        Ok(true)
    }

    /// "I knew that": record the current question as answered.
    ///
    /// Ignored when no question is loaded or it was already graded.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError::Storage` if a workspace action fails.
    pub async fn question_answered(&mut self) -> Result<(), InterviewError> {
        let state = self.store.state();
        if state.ready_to_go() {
            return Ok(());
        }
        let (Some(category), Some(block)) = (state.current_category(), state.block()) else {
            return Ok(());
        };

        let category = category.clone();
        let block_index = state.block_index();
        let question = AnsweredQuestion::new(
            category.clone(),
            block.clone(),
            state.my_answer(),
            self.clock.now(),
        );

        self.workspace
            .question_answered(question, block_index, &category)
            .await?;

        let remaining = self.workspace.remaining_questions().await?;
        self.workspace
            .update_remaining_questions(remaining.saturating_sub(1))
            .await?;

        self.store.dispatch(InterviewAction::FinishQuestion);

        self.check_remaining_questions().await
    }

    /// Drop every selected category whose pool ran dry and finish the
    /// interview once the counter hits zero.
    async fn check_remaining_questions(&mut self) -> Result<(), InterviewError> {
        let pool = self.workspace.selected_categories().await?;
        let list = self.workspace.selected_category_list().await?;

        for category in list.iter().filter(|name| pool.len_of(name) == 0) {
            if self.workspace.remove_category(category).await? {
                tracing::info!(%category, "category exhausted");
            }
        }

        if self.workspace.remaining_questions().await? == 0 {
            self.store.dispatch(InterviewAction::FinishInterview);
            tracing::info!("all questions answered");
        }
        Ok(())
    }

    /// "I need to study more" / "Go to the next question".
    ///
    /// Returns `Some(Navigation::Results)` once the interview is finished.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError::Storage` if the workspace cannot be read.
    pub async fn go_next(&mut self) -> Result<Option<Navigation>, InterviewError> {
        if self.store.state().all_questions_answered() {
            return Ok(Some(Navigation::Results));
        }

        self.store.dispatch(InterviewAction::Reset);
        if self.select_question().await? {
            Ok(None)
        } else {
            tracing::warn!("no question left to select, finishing interview");
            self.store.dispatch(InterviewAction::FinishInterview);
            Ok(Some(Navigation::Results))
        }
    }

    pub fn toggle_my_answer(&mut self) {
        let action = if self.store.state().my_answer_shown() {
            InterviewAction::HideMyAnswer
        } else {
            InterviewAction::ShowMyAnswer
        };
        self.store.dispatch(action);
    }

    pub fn update_my_answer(&mut self, text: impl Into<String>) {
        self.store
            .dispatch(InterviewAction::UpdateMyAnswer(text.into()));
    }

    pub fn check_answer(&mut self) {
        self.store.dispatch(InterviewAction::CheckAnswer);
    }
}

impl fmt::Debug for InterviewController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterviewController")
            .field("state", self.store.state())
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
