use profile::AnswerRecord;
use serde::{Deserialize, Serialize};

use crate::error::InputError;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Questionnaire {
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub id: u32,
    pub question: String,
    #[serde(default)]
    pub options: Vec<QuizOption>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuizOption {
    pub text: String,
    #[serde(default)]
    pub weights: Vec<f64>,
}

impl Questionnaire {
    /// Maps one option index per question, in order, to the selected answers.
    /// A shorter list answers only the first questions.
    pub fn answers_for(&self, choices: &[usize]) -> Result<Vec<AnswerRecord>, InputError> {
        if choices.len() > self.questions.len() {
            return Err(InputError::TooManyChoices {
                given: choices.len(),
                available: self.questions.len(),
            });
        }

        self.questions
            .iter()
            .zip(choices)
            .enumerate()
            .map(|(idx, (question, &choice))| {
                question
                    .options
                    .get(choice)
                    .map(|option| AnswerRecord::new(option.weights.clone()))
                    .ok_or(InputError::ChoiceOutOfRange {
                        question: idx + 1,
                        choice,
                        options: question.options.len(),
                    })
            })
            .collect()
    }
}
