#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{Difficulty, Question, QuizAttempt};

    /// Five well-formed binary search questions.
    pub fn binary_search_questions() -> Vec<Question> {
        vec![
            Question::new(
                "What is the time complexity of binary search?",
                &["O(n)", "O(log n)", "O(n log n)", "O(1)"],
                "O(log n)",
            ),
            Question::new(
                "What must be true of the input?",
                &["It is sorted", "It is a linked list", "It has no duplicates", "It is small"],
                "It is sorted",
            ),
            Question::new(
                "Which element is compared first?",
                &["The first", "The last", "The middle", "A random one"],
                "The middle",
            ),
            Question::new(
                "Binary search is an example of?",
                &["Greedy", "Divide and conquer", "Backtracking", "Brute force"],
                "Divide and conquer",
            ),
            Question::new(
                "How many comparisons for 1024 sorted elements, at most?",
                &["10", "11", "512", "1024"],
                "11",
            ),
        ]
    }

    pub fn correct_answers(questions: &[Question]) -> Vec<String> {
        questions.iter().map(|q| q.answer.clone()).collect()
    }

    pub fn test_attempt(user_id: &str, topic: &str) -> QuizAttempt {
        let questions = binary_search_questions();
        let answers = correct_answers(&questions);
        let score = answers.len();
        QuizAttempt::new(user_id, topic, Difficulty::Beginner, questions, answers, score)
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::*;
    use crate::{errors::AppError, services::grader};
    use actix_web::ResponseError;

    #[test]
    fn test_fixture_questions_are_well_formed() {
        let questions = binary_search_questions();
        assert_eq!(questions.len(), 5);
        assert!(questions.iter().all(|q| q.check().is_ok()));
    }

    #[test]
    fn test_fixture_attempt_has_perfect_score() {
        let attempt = test_attempt("user-1", "Binary Search");
        let score = grader::grade(&attempt.questions, attempt.user_answers.as_slice()).unwrap();
        assert_eq!(score as i32, attempt.score);
        assert_eq!(attempt.total_questions, 5);
    }

    #[test]
    fn test_status_helpers() {
        assert_error_status(AppError::NotFound("x".into()).status_code());
        assert_success_status(actix_web::http::StatusCode::OK);
    }
}
