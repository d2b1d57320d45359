use thiserror::Error;

#[derive(Error, Debug)]
pub enum KanjiError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No kanji found for {0}")]
    NotFound(String),
}

impl From<std::io::Error> for KanjiError {
    fn from(error: std::io::Error) -> Self {
        KanjiError::Io(Box::new(error))
    }
}
