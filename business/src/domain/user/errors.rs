#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.email_invalid")]
    EmailInvalid,
    #[error("user.display_name_empty")]
    DisplayNameEmpty,
    #[error("user.name_empty")]
    NameEmpty,
    #[error("user.goal_title_empty")]
    GoalTitleEmpty,
    #[error("user.goal_not_found")]
    GoalNotFound,
    #[error("user.uid_mismatch")]
    UidMismatch,
    #[error("user.already_exists")]
    AlreadyExists,
    #[error("user.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
