use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::update_goal_progress::{
    UpdateGoalProgressParams, UpdateGoalProgressUseCase,
};

pub struct UpdateGoalProgressUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateGoalProgressUseCase for UpdateGoalProgressUseCaseImpl {
    async fn execute(&self, params: UpdateGoalProgressParams) -> Result<User, UserError> {
        let mut user = self
            .repository
            .get(&params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })?;

        user.update_goal_progress(params.goal_id, params.progress)?;
        self.repository.save(&user).await?;

        self.logger.debug(&format!(
            "Goal {} progress set for user: {}",
            params.goal_id, user.user_id
        ));
        Ok(user)
    }
}
