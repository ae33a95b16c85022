use services::InterviewResults;

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultItemVm {
    pub category: String,
    pub question: String,
    pub answer_paragraphs: Vec<String>,
    pub my_answer: Option<String>,
    pub answered_at_str: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub headline: String,
    pub finished_at_str: Option<String>,
    pub items: Vec<ResultItemVm>,
}

#[must_use]
pub fn map_results(results: &InterviewResults) -> ResultsVm {
    let answered = results.answered_count();
    let remaining = usize::try_from(results.remaining).unwrap_or(usize::MAX);
    let total = answered.saturating_add(remaining);
    let headline = if results.is_complete() {
        format!("Answered {answered} of {total}. Well done!")
    } else {
        format!("Answered {answered} of {total}")
    };

    let items = results
        .answered
        .iter()
        .map(|question| ResultItemVm {
            category: question.category.to_string(),
            question: question.block.question().to_string(),
            answer_paragraphs: question.block.answer().to_vec(),
            my_answer: question
                .has_my_answer()
                .then(|| question.my_answer.clone()),
            answered_at_str: format_datetime(question.answered_at),
        })
        .collect();

    ResultsVm {
        headline,
        finished_at_str: results.finished_at.map(format_datetime),
        items,
    }
}
