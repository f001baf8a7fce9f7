use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Todo not found: {0}")]
    NotFound(String),

    #[error("Invalid todo ID: {0}")]
    InvalidId(String),

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Failed to connect to database: {0}")]
    Connection(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TodoError {
    /// Machine-readable error code surfaced in GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            TodoError::NotFound(_) => "NOT_FOUND",
            TodoError::InvalidId(_) | TodoError::Validation(_) => "BAD_USER_INPUT",
            TodoError::Connection(_) => "CONNECTION_FAILED",
            TodoError::Config(_) | TodoError::Database(_) | TodoError::Io(_) => "INTERNAL",
        }
    }
}

impl ErrorExtensions for TodoError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", code);
            if let TodoError::Validation(violations) = self {
                e.set(
                    "violations",
                    async_graphql::Value::List(
                        violations
                            .iter()
                            .map(|v| async_graphql::Value::String(v.clone()))
                            .collect(),
                    ),
                );
            }
        })
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;
