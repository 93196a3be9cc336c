use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::skin_analysis::repository::SkinAnalysisRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::delete::{DeleteUserParams, DeleteUserUseCase};

/// Removes the user document together with every analysis record they own.
pub struct DeleteUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub analysis_repository: Arc<dyn SkinAnalysisRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteUserUseCase for DeleteUserUseCaseImpl {
    async fn execute(&self, params: DeleteUserParams) -> Result<(), UserError> {
        self.repository
            .get(&params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })?;

        let removed = self.analysis_repository.delete_by_user(&params.user_id).await?;
        self.repository.delete(&params.user_id).await?;

        self.logger.info(&format!(
            "Deleted user: {} ({} analyses removed)",
            params.user_id, removed
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::skin_analysis::model::SkinAnalysis;
    use crate::domain::user::model::{NewUserProps, User};
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
        pub AnalysisRepo {}

        #[async_trait]
        impl SkinAnalysisRepository for AnalysisRepo {
            async fn save(&self, analysis: &SkinAnalysis) -> Result<(), RepositoryError>;
            async fn get_by_image_id(&self, image_id: &str) -> Result<Option<SkinAnalysis>, RepositoryError>;
            async fn get_by_user(&self, user_id: &UserId, skip: u32, limit: u32) -> Result<Vec<SkinAnalysis>, RepositoryError>;
            async fn get_latest_completed(&self, user_id: &UserId) -> Result<SkinAnalysis, RepositoryError>;
            async fn find_subject_id(&self, user_id: &UserId) -> Result<Option<String>, RepositoryError>;
            async fn delete_by_user(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
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

    #[tokio::test]
    async fn should_delete_user_and_analyses() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_get().returning(|id| {
            Ok(User::new(NewUserProps {
                user_id: id.clone(),
                email: "clara@example.com".to_string(),
                display_name: "Clara".to_string(),
                name: "Clara Soto".to_string(),
                bio: None,
                profile_photo_url: None,
                date_of_birth: None,
                gender: None,
            })
            .unwrap())
        });
        mock_repo
            .expect_delete()
            .withf(|id| id.as_str() == "uid-1")
            .times(1)
            .returning(|_| Ok(()));

        let mut mock_analyses = MockAnalysisRepo::new();
        mock_analyses
            .expect_delete_by_user()
            .times(1)
            .returning(|_| Ok(3));

        let use_case = DeleteUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            analysis_repository: Arc::new(mock_analyses),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteUserParams {
                user_id: UserId::new("uid-1"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_not_touch_analyses_when_user_missing() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_get()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_delete().never();

        let mut mock_analyses = MockAnalysisRepo::new();
        mock_analyses.expect_delete_by_user().never();

        let use_case = DeleteUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            analysis_repository: Arc::new(mock_analyses),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteUserParams {
                user_id: UserId::new("ghost"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::NotFound));
    }
}
