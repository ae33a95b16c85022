mod controller;
mod store;

pub use controller::{InterviewController, Navigation};
pub use store::InterviewStore;
