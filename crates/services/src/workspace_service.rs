use std::sync::Arc;

use chrono::{DateTime, Utc};
use interview_core::Clock;
use interview_core::model::{AnsweredQuestion, CategoryName};
use storage::{QuestionLibrary, WorkspaceStore};

use crate::error::WorkspaceServiceError;
use crate::interview::InterviewController;

/// A library category as offered on the start screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub name: CategoryName,
    pub question_count: usize,
}

/// What the results screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewResults {
    pub answered: Vec<AnsweredQuestion>,
    pub remaining: u32,
    pub finished_at: Option<DateTime<Utc>>,
}

impl InterviewResults {
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answered.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0 && !self.answered.is_empty()
    }
}

/// Category selection and results on top of the shared workspace.
#[derive(Clone)]
pub struct WorkspaceService {
    clock: Clock,
    library: Arc<QuestionLibrary>,
    workspace: Arc<dyn WorkspaceStore>,
    seed: Option<u64>,
}

impl WorkspaceService {
    #[must_use]
    pub fn new(clock: Clock, library: QuestionLibrary, workspace: Arc<dyn WorkspaceStore>) -> Self {
        Self {
            clock,
            library: Arc::new(library),
            workspace,
            seed: None,
        }
    }

    /// Seed every interview started from this service.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn workspace(&self) -> Arc<dyn WorkspaceStore> {
        Arc::clone(&self.workspace)
    }

    #[must_use]
    pub fn category_options(&self) -> Vec<CategoryOption> {
        self.library
            .categories()
            .iter()
            .map(|(name, blocks)| CategoryOption {
                name: name.clone(),
                question_count: blocks.len(),
            })
            .collect()
    }

    /// Copy the chosen library categories into the workspace.
    ///
    /// Returns the number of questions to answer.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceServiceError::NothingSelected` if no question would be
    /// selected, `WorkspaceServiceError::Library` for unknown categories and
    /// `WorkspaceServiceError::Storage` if the workspace write fails.
    pub async fn select(&self, names: &[CategoryName]) -> Result<u32, WorkspaceServiceError> {
        let pool = self.library.pool_for(names)?;
        if pool.is_empty() {
            return Err(WorkspaceServiceError::NothingSelected);
        }

        self.workspace.select_categories(pool).await?;
        let remaining = self.workspace.remaining_questions().await?;
        tracing::info!(categories = names.len(), remaining, "categories selected");
        Ok(remaining)
    }

    /// # Errors
    ///
    /// Returns `WorkspaceServiceError::Storage` if the workspace cannot be read.
    pub async fn selected(&self) -> Result<Vec<CategoryName>, WorkspaceServiceError> {
        Ok(self.workspace.selected_category_list().await?)
    }

    /// # Errors
    ///
    /// Returns `WorkspaceServiceError::Storage` if the workspace cannot be read.
    pub async fn results(&self) -> Result<InterviewResults, WorkspaceServiceError> {
        let answered = self.workspace.answered_questions().await?;
        let remaining = self.workspace.remaining_questions().await?;
        let finished_at = answered.iter().map(|question| question.answered_at).max();
        Ok(InterviewResults {
            answered,
            remaining,
            finished_at,
        })
    }

    /// Forget the current selection and answers.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceServiceError::Storage` if the workspace cannot be written.
    pub async fn reset(&self) -> Result<(), WorkspaceServiceError> {
        self.workspace.clear().await?;
        Ok(())
    }

    /// A fresh controller for a new interview session.
    #[must_use]
    pub fn start_interview(&self) -> InterviewController {
        let controller = InterviewController::new(self.workspace(), self.clock);
        match self.seed {
            Some(seed) => controller.with_seed(seed),
            None => controller,
        }
    }
}
