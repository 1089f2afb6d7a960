use std::fmt;

use crate::foundation::error::{VetorError, VetorResult};

pub const TITLE: &str = "Evaluation Questionnaire";
pub const THANK_YOU: &str = "Thank you for answering the questionnaire!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
}

pub const QUESTIONS: [Question; 4] = [
    Question {
        prompt: "1. How do you rate the clarity of the visual representation of the operations?",
        options: ["Very clear", "Clear", "Slightly clear", "Confusing"],
    },
    Question {
        prompt: "2. Does the step-by-step animation help you understand linear transformations?",
        options: ["Helps a lot", "Helps", "Helps a little", "Does not help"],
    },
    Question {
        prompt: "3. Are the text explanations useful for understanding the calculations?",
        options: ["Very useful", "Useful", "Slightly useful", "Useless"],
    },
    Question {
        prompt: "4. How useful is VetorLab for your learning overall?",
        options: ["Very useful", "Useful", "Slightly useful", "Useless"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl Choice {
    pub const ALL: [Choice; 4] = [Choice::A, Choice::B, Choice::C, Choice::D];

    pub fn letter(self) -> char {
        match self {
            Choice::A => 'a',
            Choice::B => 'b',
            Choice::C => 'c',
            Choice::D => 'd',
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::str::FromStr for Choice {
    type Err = VetorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches(')').to_ascii_lowercase().as_str() {
            "a" => Ok(Choice::A),
            "b" => Ok(Choice::B),
            "c" => Ok(Choice::C),
            "d" => Ok(Choice::D),
            other => Err(VetorError::validation(format!(
                "'{other}' is not an option, expected a, b, c or d"
            ))),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl Question {
    /// `a) Very clear`
    pub fn option_line(&self, choice: Choice) -> String {
        format!("{}) {}", choice.letter(), self.options[choice.index()])
    }
}

/// One open questionnaire dialog. Answers live only as long as the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionnaireSession {
    answers: [Option<Choice>; 4],
    closed: bool,
}

impl QuestionnaireSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn questions(&self) -> &'static [Question; 4] {
        &QUESTIONS
    }

    pub fn is_open(&self) -> bool {
        !self.closed
    }

    pub fn answer_for(&self, question: usize) -> Option<Choice> {
        self.answers.get(question).copied().flatten()
    }

    /// Select `choice` for `question` (0-based), replacing any earlier selection.
    pub fn answer(&mut self, question: usize, choice: Choice) -> VetorResult<()> {
        if self.closed {
            return Err(VetorError::validation("questionnaire is already closed"));
        }
        let slot = self.answers.get_mut(question).ok_or_else(|| {
            VetorError::validation(format!("there is no question {}", question + 1))
        })?;
        *slot = Some(choice);
        Ok(())
    }

    /// 1-based numbers of the questions still unanswered.
    pub fn unanswered(&self) -> Vec<usize> {
        self.answers
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_none())
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Closes the session and returns the acknowledgment once every question is answered.
    pub fn submit(&mut self) -> VetorResult<&'static str> {
        if self.closed {
            return Err(VetorError::validation("questionnaire is already closed"));
        }
        let missing = self.unanswered();
        if !missing.is_empty() {
            let list = missing
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(VetorError::validation(format!(
                "please answer all questions (missing: {list})"
            )));
        }
        self.closed = true;
        tracing::debug!(answers = ?self.answers, "questionnaire submitted");
        Ok(THANK_YOU)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/questionnaire.rs"]
mod tests;
