//! Questions asked during a trial.
//!
//! A question is either multiple-choice (an ordered list of labelled
//! choices) or free-text (no choices). Both carry a set of acceptable
//! answers. Matching is case-insensitive and whitespace-trimmed:
//! multiple-choice questions match an acceptable answer exactly (a letter
//! or a keyword), free-text questions also accept any answer containing an
//! acceptable answer as a substring.

use serde::{Deserialize, Serialize};

/// A single question with its acceptable answers. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// The prompt shown to the player.
    pub prompt: String,
    /// Choice labels for multiple-choice questions; `None` for free text.
    pub choices: Option<Vec<String>>,
    /// Acceptable answers (letters and keywords), matched case-insensitively.
    pub answers: Vec<String>,
}

impl Question {
    /// Create a multiple-choice question.
    pub fn multiple_choice(
        prompt: impl Into<String>,
        choices: Vec<&str>,
        answers: Vec<&str>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            choices: Some(choices.into_iter().map(String::from).collect()),
            answers: answers.into_iter().map(String::from).collect(),
        }
    }

    /// Create a free-text question.
    pub fn open(prompt: impl Into<String>, answers: Vec<&str>) -> Self {
        Self {
            prompt: prompt.into(),
            choices: None,
            answers: answers.into_iter().map(String::from).collect(),
        }
    }

    /// Whether this question offers lettered choices.
    pub fn is_multiple_choice(&self) -> bool {
        self.choices.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Format the question for display, labelling choices A), B), C)...
    pub fn render(&self) -> String {
        let mut out = self.prompt.clone();
        if let Some(choices) = &self.choices {
            for (i, choice) in choices.iter().enumerate() {
                let letter = char::from(b'A' + u8::try_from(i).unwrap_or(b'Z' - b'A'));
                out.push_str(&format!("\n  {letter}) {choice}"));
            }
        }
        out
    }

    /// Check whether an answer is acceptable.
    pub fn check(&self, answer: &str) -> bool {
        let clean = answer.trim().to_lowercase();
        if clean.is_empty() {
            return false;
        }
        if self.is_multiple_choice() {
            self.answers.iter().any(|a| clean == a.to_lowercase())
        } else {
            self.answers.iter().any(|a| {
                let a = a.to_lowercase();
                clean == a || clean.contains(&a)
            })
        }
    }
}
