use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("API key is not set. Export GEMINI_API_KEY or run `portfolio-ai config --set-api-key YOUR_KEY`")]
    MissingApiKey,

    #[error("Generation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Generation service returned HTTP {status}: {message}")]
    ApiStatus { status: u16, message: String },

    #[error("Generation service returned an unusable response: {0}")]
    ApiParse(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] portfolio_common::Error),
}

/// How the caller should present a failed generation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Not configured; show setup instructions, nothing was sent
    Configuration,
    /// Service unreachable or refused the request
    Transport,
    /// Service answered with something unusable
    Parse,
    Other,
}

impl PortfolioError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PortfolioError::Config(_) | PortfolioError::MissingApiKey => ErrorKind::Configuration,
            PortfolioError::Http(_) | PortfolioError::ApiStatus { .. } => ErrorKind::Transport,
            PortfolioError::ApiParse(_) => ErrorKind::Parse,
            PortfolioError::Common(portfolio_common::Error::Parse(_)) => ErrorKind::Parse,
            PortfolioError::JsonParse(_) | PortfolioError::Io(_) | PortfolioError::Common(_) => {
                ErrorKind::Other
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
