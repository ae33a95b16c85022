#![forbid(unsafe_code)]

pub mod error;
pub mod interview;
pub mod model;
pub mod time;

pub use error::Error;
pub use interview::{InterviewAction, InterviewState};
pub use time::Clock;
