#![forbid(unsafe_code)]

pub mod error;
pub mod interview;
pub mod selection;
pub mod workspace_service;

pub use interview_core::Clock;

pub use error::{InterviewError, WorkspaceServiceError};
pub use interview::{InterviewController, InterviewStore, Navigation};
pub use selection::{QuestionPick, pick_question};
pub use workspace_service::{CategoryOption, InterviewResults, WorkspaceService};
