use thiserror::Error;

/// A rejected payload. The message is what clients see under `error`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    // Games
    #[error("You must enter a name")]
    MissingName,
    #[error("invalid name")]
    InvalidName,
    #[error("there must be a correct rating")]
    InvalidRating,
    #[error("timesPlayed must be positive")]
    NegativeTimesPlayed,
    #[error("must have a creator")]
    MissingCreator,
    #[error("there must be at least one question")]
    MissingQuestions,
    #[error("a question must have a text")]
    QuestionWithoutText,
    #[error("invalid difficulty")]
    InvalidDifficulty,
    #[error("a question must have between 2 and 6 answers")]
    InvalidAnswerCount,
    #[error("correctAnswer must point to an answer")]
    InvalidCorrectAnswer,
    #[error("ranking must have a user")]
    RankingWithoutUser,
    #[error("ranking must have a points")]
    RankingWithoutPoints,
    #[error("Cast to Date failed for value \"{0}\" at path \"creationDate\"")]
    InvalidCreationDate(String),
    #[error("The game does not exist")]
    UnknownGame,

    // Matches
    #[error("You must enter a url")]
    MissingUrl,
    #[error("Invalid url")]
    InvalidUrl,
    #[error("You must enter a type of match")]
    MissingMatchType,
    #[error("you must enter a state")]
    MissingState,
    #[error("Must have an owner")]
    MissingOwner,
    #[error("Result must have a user")]
    ResultWithoutUser,
    #[error("Result must have points")]
    ResultWithoutPoints,
    #[error("Invalid date")]
    InvalidEndingDate,
    #[error("There must be a game")]
    MissingGame,
    #[error("Error in the definition of the game")]
    MalformedGame,
    #[error("The url already exists")]
    UrlTaken,
    #[error("The match does not exist")]
    UnknownMatch,
}

#[derive(Error, Debug)]
pub enum QuizError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("duplicate key error collection: {collection} index: {index}_1 dup key: {{ {index}: \"{value}\" }}")]
    DuplicateKey {
        collection: &'static str,
        index: &'static str,
        value: String,
    },

    #[error("Document not found")]
    NotFound,

    #[error("Malformed request")]
    MalformedRequest,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl From<rusqlite::Error> for QuizError {
    fn from(err: rusqlite::Error) -> Self {
        QuizError::Storage(err.into())
    }
}

impl QuizError {
    /// Update paths report a missing target as a rejected payload.
    pub fn or_unknown(self, unknown: ValidationError) -> Self {
        match self {
            QuizError::NotFound => QuizError::Invalid(unknown),
            other => other,
        }
    }
}

pub type QuizResult<T> = Result<T, QuizError>;
