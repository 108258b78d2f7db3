use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{given} choices given but the questionnaire has {available} questions")]
    TooManyChoices { given: usize, available: usize },

    #[error("question {question}: choice {choice} is out of range (0..{options})")]
    ChoiceOutOfRange {
        question: usize,
        choice: usize,
        options: usize,
    },

    #[error("no catalog item with id {0:?}")]
    UnknownItem(String),
}
