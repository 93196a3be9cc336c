use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_current::{GetCurrentUserParams, GetCurrentUserUseCase};

pub struct GetCurrentUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCurrentUserUseCase for GetCurrentUserUseCaseImpl {
    async fn execute(&self, params: GetCurrentUserParams) -> Result<User, UserError> {
        self.logger
            .debug(&format!("Fetching user: {}", params.user_id));

        self.repository
            .get(&params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })
    }
}
