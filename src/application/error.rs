use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Unauthorized: Admin token required")]
    Unauthorized,

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}
