use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::update::{UpdateUserParams, UpdateUserUseCase};

pub struct UpdateUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateUserUseCase for UpdateUserUseCaseImpl {
    async fn execute(&self, params: UpdateUserParams) -> Result<User, UserError> {
        self.logger
            .info(&format!("Updating user: {}", params.user_id));

        let mut user = self
            .repository
            .get(&params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })?;

        user.rename(params.display_name, params.name)?;
        if let Some(bio) = params.bio {
            user.bio = Some(bio);
        }
        if let Some(url) = params.profile_photo_url {
            user.profile_photo_url = Some(url);
        }
        if let Some(dob) = params.date_of_birth {
            user.date_of_birth = Some(dob);
        }
        if let Some(gender) = params.gender {
            user.gender = Some(gender);
        }
        if !params.skin_profile.is_empty() {
            user.update_skin_profile(params.skin_profile);
        }

        self.repository.save(&user).await?;

        self.logger.info(&format!("Updated user: {}", user.user_id));
        Ok(user)
    }
}
