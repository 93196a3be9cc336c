use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::update_onboarding::{
    UpdateOnboardingParams, UpdateOnboardingUseCase,
};

pub struct UpdateOnboardingUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateOnboardingUseCase for UpdateOnboardingUseCaseImpl {
    async fn execute(&self, params: UpdateOnboardingParams) -> Result<User, UserError> {
        let mut user = self
            .repository
            .get(&params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })?;

        user.complete_onboarding_step(params.onboarding_step);
        if let Some(captured) = params.face_image_captured {
            user.face_image_captured = captured;
        }
        if let Some(completed) = params.face_analysis_completed {
            user.face_analysis_completed = completed;
        }

        self.repository.save(&user).await?;

        self.logger.info(&format!(
            "Updated onboarding for user: {} (step: {})",
            user.user_id, user.onboarding_step
        ));
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::user::model::{NewUserProps, ONBOARDING_FINAL_STEP};
    use mockall::mock;

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn get(&self, user_id: &UserId) -> Result<User, RepositoryError>;
            async fn create(&self, user: &User) -> Result<(), RepositoryError>;
            async fn save(&self, user: &User) -> Result<(), RepositoryError>;
            async fn delete(&self, user_id: &UserId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn user_at_step(id: &UserId, step: u32) -> User {
        let mut user = User::new(NewUserProps {
            user_id: id.clone(),
            email: "ines@example.com".to_string(),
            display_name: "Ines".to_string(),
            name: "Ines Vidal".to_string(),
            bio: None,
            profile_photo_url: None,
            date_of_birth: None,
            gender: None,
        })
        .unwrap();
        user.complete_onboarding_step(step);
        user
    }

    #[tokio::test]
    async fn should_not_move_onboarding_backwards() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_get().returning(|id| Ok(user_at_step(id, 6)));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateOnboardingUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let user = use_case
            .execute(UpdateOnboardingParams {
                user_id: UserId::new("uid-1"),
                onboarding_step: 3,
                face_image_captured: Some(true),
                face_analysis_completed: None,
            })
            .await
            .unwrap();

        assert_eq!(user.onboarding_step, 6);
        assert!(user.face_image_captured);
        assert!(!user.face_analysis_completed);
    }

    #[tokio::test]
    async fn should_complete_onboarding_on_final_step() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_get().returning(|id| Ok(user_at_step(id, 10)));
        mock_repo
            .expect_save()
            .withf(|u| u.onboarding_completed)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateOnboardingUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let user = use_case
            .execute(UpdateOnboardingParams {
                user_id: UserId::new("uid-1"),
                onboarding_step: ONBOARDING_FINAL_STEP,
                face_image_captured: None,
                face_analysis_completed: Some(true),
            })
            .await
            .unwrap();

        assert!(user.onboarding_completed);
        assert!(user.face_analysis_completed);
    }
}
