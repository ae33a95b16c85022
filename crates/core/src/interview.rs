//! Question-flow state for a single interview run.
//!
//! `InterviewState` only changes through [`InterviewState::reduce`], which folds
//! one [`InterviewAction`] into the next state without side effects.

use crate::model::{CategoryName, QuestionBlock};

/// Intents understood by the question-flow reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterviewAction {
    StartLoading,
    GetQuestion {
        category: CategoryName,
        index: usize,
        block: QuestionBlock,
    },
    LoadingFinished,
    UpdateMyAnswer(String),
    CheckAnswer,
    ShowMyAnswer,
    HideMyAnswer,
    FinishQuestion,
    Reset,
    FinishInterview,
}

impl InterviewAction {
    /// Short name used in logs; avoids dumping answer text.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::StartLoading => "start_loading",
            Self::GetQuestion { .. } => "get_question",
            Self::LoadingFinished => "loading_finished",
            Self::UpdateMyAnswer(_) => "update_my_answer",
            Self::CheckAnswer => "check_answer",
            Self::ShowMyAnswer => "show_my_answer",
            Self::HideMyAnswer => "hide_my_answer",
            Self::FinishQuestion => "finish_question",
            Self::Reset => "reset",
            Self::FinishInterview => "finish_interview",
        }
    }
}

/// Per-session interview state.
///
/// Invariants kept by the reducer:
/// - `answer_shown` implies a block is loaded.
/// - `my_answer_shown` implies `answer_shown`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct InterviewState {
    current_category: Option<CategoryName>,
    block_index: usize,
    block: Option<QuestionBlock>,
    my_answer: String,
    my_answer_shown: bool,
    answer_shown: bool,
    ready_to_go: bool,
    all_questions_answered: bool,
    loaded: bool,
    loading: bool,
}

impl InterviewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action and return the resulting state.
    #[must_use]
    pub fn reduce(mut self, action: InterviewAction) -> Self {
        match action {
            InterviewAction::StartLoading => {
                self.loading = true;
            }
            InterviewAction::GetQuestion {
                category,
                index,
                block,
            } => {
                self.current_category = Some(category);
                self.block_index = index;
                self.block = Some(block);
                self.clear_question_flags();
            }
            InterviewAction::LoadingFinished => {
                self.loading = false;
                self.loaded = true;
            }
            InterviewAction::UpdateMyAnswer(text) => {
                self.my_answer = text;
            }
            InterviewAction::CheckAnswer => {
                if self.block.is_some() {
                    self.answer_shown = true;
                }
            }
            InterviewAction::ShowMyAnswer => {
                if self.answer_shown {
                    self.my_answer_shown = true;
                }
            }
            InterviewAction::HideMyAnswer => {
                self.my_answer_shown = false;
            }
            InterviewAction::FinishQuestion => {
                self.ready_to_go = true;
            }
            InterviewAction::Reset => {
                self.clear_question_flags();
            }
            InterviewAction::FinishInterview => {
                self.all_questions_answered = true;
            }
        }
        self
    }

    fn clear_question_flags(&mut self) {
        self.my_answer.clear();
        self.my_answer_shown = false;
        self.answer_shown = false;
        self.ready_to_go = false;
    }

    #[must_use]
    pub fn current_category(&self) -> Option<&CategoryName> {
        self.current_category.as_ref()
    }

    #[must_use]
    pub fn block_index(&self) -> usize {
        self.block_index
    }

    #[must_use]
    pub fn block(&self) -> Option<&QuestionBlock> {
        self.block.as_ref()
    }

    #[must_use]
    pub fn my_answer(&self) -> &str {
        &self.my_answer
    }

    #[must_use]
    pub fn my_answer_shown(&self) -> bool {
        self.my_answer_shown
    }

    #[must_use]
    pub fn answer_shown(&self) -> bool {
        self.answer_shown
    }

    #[must_use]
    pub fn ready_to_go(&self) -> bool {
        self.ready_to_go
    }

    #[must_use]
    pub fn all_questions_answered(&self) -> bool {
        self.all_questions_answered
    }

    #[must_use]
    pub fn loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }
}
