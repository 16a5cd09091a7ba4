use crate::{
    errors::{AppError, AppResult},
    models::domain::Question,
};

/// Scores answers against questions position by position.
///
/// An answer counts only when it is byte-for-byte equal to the question's
/// answer. Mismatched lengths are rejected before anything is scored.
pub fn grade<S: AsRef<str>>(questions: &[Question], answers: &[S]) -> AppResult<usize> {
    if questions.len() != answers.len() {
        return Err(AppError::SubmissionShapeMismatch {
            questions: questions.len(),
            answers: answers.len(),
        });
    }

    Ok(questions
        .iter()
        .zip(answers)
        .filter(|&(question, answer)| question.answer == answer.as_ref())
        .count())
}
