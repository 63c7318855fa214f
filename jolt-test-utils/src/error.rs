use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Application-level error surfaced through `?` in a test; carries the
    /// rendered message since this crate cannot depend on the server crate.
    #[error("{0}")]
    AppError(String),
}
