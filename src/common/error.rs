#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("failed to open session script: {0}")]
    OpenInput(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Why a form submission was turned down. Both checks share one message, the
/// way the entry form reports them.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("name is required and amount must be valid")]
    Invalid,
}
