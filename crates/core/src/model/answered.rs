use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{CategoryName, QuestionBlock};

/// A block the user marked as known, together with what they typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub category: CategoryName,
    pub block: QuestionBlock,
    pub my_answer: String,
    pub answered_at: DateTime<Utc>,
}

impl AnsweredQuestion {
    #[must_use]
    pub fn new(
        category: CategoryName,
        block: QuestionBlock,
        my_answer: impl Into<String>,
        answered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            category,
            block,
            my_answer: my_answer.into(),
            answered_at,
        }
    }

    #[must_use]
    pub fn has_my_answer(&self) -> bool {
        !self.my_answer.trim().is_empty()
    }
}
