use interview_core::InterviewState;
use services::{InterviewController, Navigation, WorkspaceService};

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InterviewIntent {
    UpdateMyAnswer(String),
    CheckAnswer,
    ToggleMyAnswer,
    /// "I knew that"
    KnewIt,
    /// "I need to study more", or moving on after grading.
    Next,
}

impl InterviewIntent {
    /// Intents that only touch local state and never wait on the workspace.
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::UpdateMyAnswer(_) | Self::CheckAnswer | Self::ToggleMyAnswer
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterviewControls {
    /// Answer hidden: check it, or skip to another question.
    Prompt,
    /// Answer shown, not graded yet.
    SelfGrade,
    /// Graded; move on.
    Advance { finished: bool },
}

impl InterviewControls {
    #[must_use]
    pub fn next_label(self) -> &'static str {
        match self {
            Self::Advance { finished: true } => "Go to the results",
            _ => "Go to the next question",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpoilerVm {
    pub open: bool,
}

impl SpoilerVm {
    #[must_use]
    pub fn label(self) -> &'static str {
        if self.open {
            "Hide my answer"
        } else {
            "Show my answer"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedInterviewVm {
    pub category: String,
    pub question: String,
    /// Empty until the answer is revealed.
    pub answer_paragraphs: Vec<String>,
    pub my_answer: String,
    pub show_my_answer_field: bool,
    pub controls: InterviewControls,
    pub spoiler: Option<SpoilerVm>,
    pub my_answer_visible: bool,
}

/// The three mutually exclusive renderings of the interview page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InterviewScreen {
    Loaded(LoadedInterviewVm),
    Loading,
    NotLoaded,
}

#[must_use]
pub fn map_interview_screen(state: &InterviewState) -> InterviewScreen {
    if !state.loaded() {
        return if state.loading() {
            InterviewScreen::Loading
        } else {
            InterviewScreen::NotLoaded
        };
    }
    let Some(block) = state.block() else {
        return InterviewScreen::NotLoaded;
    };

    let answer_shown = state.answer_shown();
    let controls = if !answer_shown {
        InterviewControls::Prompt
    } else if !state.ready_to_go() {
        InterviewControls::SelfGrade
    } else {
        InterviewControls::Advance {
            finished: state.all_questions_answered(),
        }
    };
    let spoiler = (answer_shown && !state.my_answer().is_empty()).then_some(SpoilerVm {
        open: state.my_answer_shown(),
    });

    InterviewScreen::Loaded(LoadedInterviewVm {
        category: state
            .current_category()
            .map(ToString::to_string)
            .unwrap_or_default(),
        question: block.question().to_string(),
        answer_paragraphs: if answer_shown {
            block.answer().to_vec()
        } else {
            Vec::new()
        },
        my_answer: state.my_answer().to_string(),
        show_my_answer_field: !answer_shown,
        controls,
        spoiler,
        my_answer_visible: state.my_answer_shown(),
    })
}

pub struct InterviewVm {
    controller: InterviewController,
}

impl InterviewVm {
    #[must_use]
    pub fn new(controller: InterviewController) -> Self {
        Self { controller }
    }

    #[must_use]
    pub fn screen(&self) -> InterviewScreen {
        map_interview_screen(self.controller.state())
    }

    #[must_use]
    pub fn state(&self) -> &InterviewState {
        self.controller.state()
    }

    /// Apply an intent that does not touch the workspace.
    ///
    /// Returns `false` for intents that need [`InterviewVm::apply`].
    pub fn apply_local(&mut self, intent: &InterviewIntent) -> bool {
        match intent {
            InterviewIntent::UpdateMyAnswer(text) => self.controller.update_my_answer(text.clone()),
            InterviewIntent::CheckAnswer => self.controller.check_answer(),
            InterviewIntent::ToggleMyAnswer => self.controller.toggle_my_answer(),
            InterviewIntent::KnewIt | InterviewIntent::Next => return false,
        }
        true
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` for service failures.
    pub async fn apply(&mut self, intent: InterviewIntent) -> Result<Option<Navigation>, ViewError> {
        if self.apply_local(&intent) {
            return Ok(None);
        }
        let result = match intent {
            InterviewIntent::KnewIt => self.controller.question_answered().await.map(|()| None),
            _ => self.controller.go_next().await,
        };
        result.map_err(|err| {
            tracing::warn!(error = %err, "interview step failed");
            ViewError::Unknown
        })
    }
}

/// Start a session and load its first question.
///
/// # Errors
///
/// Returns `ViewError::Unknown` for service failures.
pub async fn start_interview(
    service: &WorkspaceService,
) -> Result<(InterviewVm, Option<Navigation>), ViewError> {
    let mut controller = service.start_interview();
    let navigation = controller.activate().await.map_err(|err| {
        tracing::warn!(error = %err, "interview failed to start");
        ViewError::Unknown
    })?;
    Ok((InterviewVm::new(controller), navigation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_core::InterviewAction;
    use interview_core::model::{CategoryName, QuestionBlock};

    fn loaded_state() -> InterviewState {
        InterviewState::new()
            .reduce(InterviewAction::StartLoading)
            .reduce(InterviewAction::GetQuestion {
                category: CategoryName::new("JS").unwrap(),
                index: 0,
                block: QuestionBlock::new("What is hoisting?", ["Declarations move up.", "Only names."])
                    .unwrap(),
            })
            .reduce(InterviewAction::LoadingFinished)
    }

    fn loaded(state: &InterviewState) -> LoadedInterviewVm {
        match map_interview_screen(state) {
            InterviewScreen::Loaded(vm) => vm,
            other => panic!("expected loaded screen, got {other:?}"),
        }
    }

    #[test]
    fn flags_pick_the_screen_variant() {
        assert_eq!(
            map_interview_screen(&InterviewState::new()),
            InterviewScreen::NotLoaded
        );
        let loading = InterviewState::new().reduce(InterviewAction::StartLoading);
        assert_eq!(map_interview_screen(&loading), InterviewScreen::Loading);
        assert!(matches!(
            map_interview_screen(&loaded_state()),
            InterviewScreen::Loaded(_)
        ));
    }

    #[test]
    fn prompt_hides_answer_and_offers_check() {
        let vm = loaded(&loaded_state());
        assert_eq!(vm.category, "JS");
        assert_eq!(vm.question, "What is hoisting?");
        assert!(vm.answer_paragraphs.is_empty());
        assert!(vm.show_my_answer_field);
        assert_eq!(vm.controls, InterviewControls::Prompt);
        assert_eq!(vm.controls.next_label(), "Go to the next question");
        assert_eq!(vm.spoiler, None);
    }

    #[test]
    fn revealed_answer_offers_self_grading_and_spoiler() {
        let state = loaded_state()
            .reduce(InterviewAction::UpdateMyAnswer("They move up".into()))
            .reduce(InterviewAction::CheckAnswer);
        let vm = loaded(&state);
        assert_eq!(vm.answer_paragraphs, ["Declarations move up.", "Only names."]);
        assert!(!vm.show_my_answer_field);
        assert_eq!(vm.controls, InterviewControls::SelfGrade);
        assert_eq!(vm.spoiler.map(SpoilerVm::label), Some("Show my answer"));

        let vm = loaded(&state.reduce(InterviewAction::ShowMyAnswer));
        assert_eq!(vm.spoiler.map(SpoilerVm::label), Some("Hide my answer"));
        assert!(vm.my_answer_visible);
    }

    #[test]
    fn empty_answer_has_no_spoiler() {
        let vm = loaded(&loaded_state().reduce(InterviewAction::CheckAnswer));
        assert_eq!(vm.spoiler, None);
    }

    #[test]
    fn graded_question_offers_next_or_results() {
        let graded = loaded_state()
            .reduce(InterviewAction::CheckAnswer)
            .reduce(InterviewAction::FinishQuestion);
        let vm = loaded(&graded);
        assert_eq!(vm.controls, InterviewControls::Advance { finished: false });
        assert_eq!(vm.controls.next_label(), "Go to the next question");

        let vm = loaded(&graded.reduce(InterviewAction::FinishInterview));
        assert_eq!(vm.controls.next_label(), "Go to the results");
    }

    #[test]
    fn local_intents() {
        assert!(InterviewIntent::CheckAnswer.is_local());
        assert!(InterviewIntent::UpdateMyAnswer(String::new()).is_local());
        assert!(!InterviewIntent::KnewIt.is_local());
        assert!(!InterviewIntent::Next.is_local());
    }
}
