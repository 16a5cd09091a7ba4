use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::{
    constants::quiz_prompt::QUIZ_QUESTION_COUNT,
    errors::AppError,
    models::domain::{Question, Quiz},
};

/// Field of the wrapping object that holds the question array.
pub const QUIZ_FIELD: &str = "quiz";

const FENCE: &str = "```";

static LEADING_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A```[ \t]*(?i:json)?[ \t]*").expect("LEADING_FENCE is a valid regex pattern")
});

/// Why a raw model response could not be turned into a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizFormatError {
    pub reason: String,
    /// Position of the offending question, when the failure is tied to one.
    pub index: Option<usize>,
}

impl QuizFormatError {
    fn document(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            index: None,
        }
    }

    fn at(index: usize, reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            index: Some(index),
        }
    }
}

impl From<QuizFormatError> for AppError {
    fn from(err: QuizFormatError) -> Self {
        AppError::MalformedQuizFormat {
            reason: err.reason,
            index: err.index,
        }
    }
}

/// Turns raw generator output into a validated quiz.
///
/// Superficial wrapping (surrounding whitespace, a code fence with an optional
/// `json` tag) is removed; everything else must match the expected shape
/// exactly. Nothing is guessed or partially recovered.
pub fn normalize(raw: &str) -> Result<Quiz, QuizFormatError> {
    let body = strip_fence(raw.trim());

    let document: Value = serde_json::from_str(body)
        .map_err(|e| QuizFormatError::document(format!("response is not valid JSON: {}", e)))?;

    let entries = question_entries(&document)?;
    if entries.is_empty() {
        return Err(QuizFormatError::document("quiz contains no questions"));
    }

    let questions = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_question(index, entry))
        .collect::<Result<Vec<_>, _>>()?;

    if questions.len() != QUIZ_QUESTION_COUNT {
        log::warn!(
            "Generated quiz has {} questions, expected {}",
            questions.len(),
            QUIZ_QUESTION_COUNT
        );
    }

    Ok(Quiz { questions })
}

/// Removes a leading and trailing code fence. Interior text is left untouched.
fn strip_fence(text: &str) -> &str {
    if !text.starts_with(FENCE) {
        return text;
    }

    let opening = LEADING_FENCE.find(text).map(|m| m.end()).unwrap_or(FENCE.len());
    let inner = &text[opening..];
    let inner = inner.strip_suffix(FENCE).unwrap_or(inner);
    inner.trim()
}

fn question_entries(document: &Value) -> Result<&Vec<Value>, QuizFormatError> {
    match document {
        Value::Array(entries) => Ok(entries),
        Value::Object(fields) => match fields.get(QUIZ_FIELD) {
            Some(Value::Array(entries)) => Ok(entries),
            Some(_) => Err(QuizFormatError::document(format!(
                "field '{}' is not an array",
                QUIZ_FIELD
            ))),
            None => Err(QuizFormatError::document(format!(
                "object has no '{}' field",
                QUIZ_FIELD
            ))),
        },
        _ => Err(QuizFormatError::document(
            "expected an object or an array of questions",
        )),
    }
}

fn parse_question(index: usize, entry: &Value) -> Result<Question, QuizFormatError> {
    let fields = entry
        .as_object()
        .ok_or_else(|| QuizFormatError::at(index, "entry is not an object"))?;

    let question = fields
        .get("question")
        .and_then(Value::as_str)
        .ok_or_else(|| QuizFormatError::at(index, "missing string field 'question'"))?;

    let options = fields
        .get("options")
        .and_then(Value::as_array)
        .ok_or_else(|| QuizFormatError::at(index, "missing array field 'options'"))?
        .iter()
        .map(|option| {
            option
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| QuizFormatError::at(index, "option is not a string"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let answer = fields
        .get("answer")
        .and_then(Value::as_str)
        .ok_or_else(|| QuizFormatError::at(index, "missing string field 'answer'"))?;

    let question = Question {
        question: question.to_string(),
        options,
        answer: answer.to_string(),
    };
    question
        .check()
        .map_err(|reason| QuizFormatError::at(index, reason))?;

    Ok(question)
}
