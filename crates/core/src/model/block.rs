use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BlockError {
    #[error("question text cannot be empty")]
    EmptyQuestion,
}

/// A single question together with its canonical answer.
///
/// The answer is kept as separate paragraphs so views can render each one on
/// its own. Blank paragraphs are dropped on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBlock")]
pub struct QuestionBlock {
    question: String,
    answer: Vec<String>,
}

impl QuestionBlock {
    /// Build a validated block.
    ///
    /// # Errors
    ///
    /// Returns `BlockError::EmptyQuestion` if the question is blank.
    pub fn new<I, S>(question: impl Into<String>, answer: I) -> Result<Self, BlockError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let question = question.into();
        let question = question.trim();
        if question.is_empty() {
            return Err(BlockError::EmptyQuestion);
        }

        let answer = answer
            .into_iter()
            .map(Into::into)
            .filter(|paragraph: &String| !paragraph.trim().is_empty())
            .collect();

        Ok(Self {
            question: question.to_string(),
            answer,
        })
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &[String] {
        &self.answer
    }
}

/// Wire shape accepted by the library loader; the answer may be a single string.
#[derive(Deserialize)]
struct RawBlock {
    question: String,
    #[serde(default)]
    answer: RawAnswer,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAnswer {
    Paragraphs(Vec<String>),
    Single(String),
}

impl Default for RawAnswer {
    fn default() -> Self {
        Self::Paragraphs(Vec::new())
    }
}

impl TryFrom<RawBlock> for QuestionBlock {
    type Error = BlockError;

    fn try_from(raw: RawBlock) -> Result<Self, Self::Error> {
        match raw.answer {
            RawAnswer::Paragraphs(paragraphs) => Self::new(raw.question, paragraphs),
            RawAnswer::Single(text) => Self::new(raw.question, [text]),
        }
    }
}
