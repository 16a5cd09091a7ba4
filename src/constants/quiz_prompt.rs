/// Number of questions every generated quiz asks for.
pub const QUIZ_QUESTION_COUNT: usize = 5;

/// Options each generated question is expected to carry.
pub const QUIZ_OPTION_COUNT: usize = 4;

pub const QUIZ_GENERATION_PROMPT: &str = r#"Generate exactly {count} multiple-choice questions on the topic "{topic}" at "{difficulty}" level.
Return ONLY a JSON object with a "quiz" key containing an array of questions.
Format:
{
  "quiz": [
    {
      "question": "Question text here?",
      "options": ["Option A", "Option B", "Option C", "Option D"],
      "answer": "Correct option text (must match one of the options exactly)"
    }
  ]
}
Rules:
- Each question must have exactly {options} distinct options.
- The "answer" value must be copied character for character from the "options" array.
- Do not include any markdown formatting or code fences (no ```json). Return raw JSON only."#;
