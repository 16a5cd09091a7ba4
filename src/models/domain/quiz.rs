use async_graphql::{InputObject, SimpleObject};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const MIN_OPTIONS: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject, InputObject)]
#[graphql(input_name = "QuestionInput")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String, // must equal exactly one entry of `options`
}

impl Question {
    pub fn new(question: &str, options: &[&str], answer: &str) -> Self {
        Question {
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer: answer.to_string(),
        }
    }

    /// Checks the invariants every usable question must hold.
    pub fn check(&self) -> Result<(), String> {
        if self.question.trim().is_empty() {
            return Err("question text is empty".to_string());
        }
        if self.options.len() < MIN_OPTIONS {
            return Err(format!(
                "expected at least {} options, found {}",
                MIN_OPTIONS,
                self.options.len()
            ));
        }
        let mut seen = HashSet::with_capacity(self.options.len());
        if let Some(dup) = self.options.iter().find(|o| !seen.insert(o.as_str())) {
            return Err(format!("duplicate option '{}'", dup));
        }
        if !self.options.iter().any(|o| *o == self.answer) {
            return Err(format!("answer '{}' is not one of the options", self.answer));
        }
        Ok(())
    }
}

/// An ordered set of questions generated together for one topic and difficulty.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct Quiz {
    #[serde(rename = "quiz")]
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The correct answer of every question, in order.
    pub fn answer_key(&self) -> Vec<String> {
        self.questions.iter().map(|q| q.answer.clone()).collect()
    }
}
