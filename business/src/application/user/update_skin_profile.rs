use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::update_skin_profile::{
    UpdateSkinProfileParams, UpdateSkinProfileUseCase,
};

pub struct UpdateSkinProfileUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateSkinProfileUseCase for UpdateSkinProfileUseCaseImpl {
    async fn execute(&self, params: UpdateSkinProfileParams) -> Result<User, UserError> {
        let mut user = self
            .repository
            .get(&params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })?;

        user.update_skin_profile(params.profile);
        self.repository.save(&user).await?;

        self.logger
            .info(&format!("Updated skin profile for user: {}", user.user_id));
        Ok(user)
    }
}
