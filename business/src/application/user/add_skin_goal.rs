use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{SkinGoal, User};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::add_skin_goal::{AddSkinGoalParams, AddSkinGoalUseCase};

pub struct AddSkinGoalUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddSkinGoalUseCase for AddSkinGoalUseCaseImpl {
    async fn execute(&self, params: AddSkinGoalParams) -> Result<User, UserError> {
        let goal = SkinGoal::new(params.title, params.color)?;

        let mut user = self
            .repository
            .get(&params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })?;

        let goal_id = goal.id;
        user.add_skin_goal(goal);
        self.repository.save(&user).await?;

        self.logger.info(&format!(
            "Added skin goal {} for user: {}",
            goal_id, user.user_id
        ));
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::user::model::NewUserProps;
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

    fn stored_user(id: &UserId) -> User {
        User::new(NewUserProps {
            user_id: id.clone(),
            email: "nora@example.com".to_string(),
            display_name: "Nora".to_string(),
            name: "Nora Gil".to_string(),
            bio: None,
            profile_photo_url: None,
            date_of_birth: None,
            gender: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_append_goal_with_zero_progress() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_get().returning(|id| Ok(stored_user(id)));
        mock_repo
            .expect_save()
            .withf(|u| u.skin_goals.len() == 1)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = AddSkinGoalUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let user = use_case
            .execute(AddSkinGoalParams {
                user_id: UserId::new("uid-1"),
                title: "Reduce redness".to_string(),
                color: "#FF8A80".to_string(),
            })
            .await
            .unwrap();

        let goal = &user.skin_goals[0];
        assert_eq!(goal.title, "Reduce redness");
        assert_eq!(goal.progress, 0.0);
    }

    #[tokio::test]
    async fn should_reject_blank_title_without_loading_user() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_get().never();
        mock_repo.expect_save().never();

        let use_case = AddSkinGoalUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddSkinGoalParams {
                user_id: UserId::new("uid-1"),
                title: "   ".to_string(),
                color: "#000000".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::GoalTitleEmpty));
    }
}
