mod category_vm;
mod interview_vm;
mod results_vm;
mod time_fmt;

pub use category_vm::{CategoryOptionVm, map_category_options};
pub use interview_vm::{
    InterviewControls, InterviewIntent, InterviewScreen, InterviewVm, LoadedInterviewVm,
    SpoilerVm, map_interview_screen, start_interview,
};
pub use results_vm::{ResultItemVm, ResultsVm, map_results};
