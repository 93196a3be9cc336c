use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{NewUserProps, User};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::create::{CreateUserParams, CreateUserUseCase};

pub struct CreateUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateUserUseCase for CreateUserUseCaseImpl {
    async fn execute(&self, params: CreateUserParams) -> Result<User, UserError> {
        self.logger
            .info(&format!("Creating user: {}", params.auth_user_id));

        match self.repository.get(&params.auth_user_id).await {
            Ok(_) => return Err(UserError::AlreadyExists),
            Err(RepositoryError::NotFound) => {}
            Err(other) => return Err(UserError::Repository(other)),
        }

        if params.firebase_uid != params.auth_user_id.as_str() {
            self.logger.warn(&format!(
                "UID mismatch on user creation: token {} body {}",
                params.auth_user_id, params.firebase_uid
            ));
            return Err(UserError::UidMismatch);
        }

        let user = User::new(NewUserProps {
            user_id: params.auth_user_id,
            email: params.email,
            display_name: params.display_name,
            name: params.name,
            bio: params.bio,
            profile_photo_url: params.profile_photo_url,
            date_of_birth: params.date_of_birth,
            gender: params.gender,
        })?;

        self.repository.create(&user).await.map_err(|e| match e {
            RepositoryError::Duplicated => UserError::AlreadyExists,
            other => UserError::Repository(other),
        })?;

        self.logger
            .info(&format!("Created new user: {}", user.user_id));
        Ok(user)
    }
}
