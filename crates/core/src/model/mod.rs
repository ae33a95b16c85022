mod answered;
mod block;
mod category;
mod pool;

pub use answered::AnsweredQuestion;
pub use block::{BlockError, QuestionBlock};
pub use category::{CategoryError, CategoryName};
pub use pool::{CategoryPool, PoolError};
