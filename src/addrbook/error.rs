use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDate,

    #[error("Birthday already exists for this contact")]
    BirthdayExists,

    #[error("Missing arguments. Usage: {usage}")]
    MissingArgument { usage: &'static str },

    #[error("Invalid number of arguments. Usage: {usage}")]
    WrongArgumentCount { usage: &'static str },

    #[error("Invalid command.")]
    UnknownCommand(String),

    #[error("Please enter a command.")]
    MalformedCommand,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BookError>;
