#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    MissingColumns {
        expected: Vec<String>,
        found: Vec<String>,
    },
    UnknownTopic(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::MissingColumns { expected, found } => {
                write!(
                    f,
                    "Missing required columns: expected [{}], found [{}]",
                    expected.join(", "),
                    found.join(", ")
                )
            }
            DomainError::UnknownTopic(topic) => {
                write!(f, "Unknown topic: {}", topic)
            }
        }
    }
}

impl std::error::Error for DomainError {}

pub type DomainResult<T> = Result<T, DomainError>;
