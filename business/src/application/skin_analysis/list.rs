use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::skin_analysis::errors::SkinAnalysisError;
use crate::domain::skin_analysis::model::SkinAnalysis;
use crate::domain::skin_analysis::repository::SkinAnalysisRepository;
use crate::domain::skin_analysis::use_cases::list::{
    ListAnalysesParams, ListAnalysesUseCase, MAX_PAGE_SIZE,
};

pub struct ListAnalysesUseCaseImpl {
    pub repository: Arc<dyn SkinAnalysisRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListAnalysesUseCase for ListAnalysesUseCaseImpl {
    async fn execute(
        &self,
        params: ListAnalysesParams,
    ) -> Result<Vec<SkinAnalysis>, SkinAnalysisError> {
        let limit = params.limit.clamp(1, MAX_PAGE_SIZE);

        let analyses = self
            .repository
            .get_by_user(&params.user_id, params.skip, limit)
            .await?;

        self.logger.debug(&format!(
            "Listed {} analyses for user: {}",
            analyses.len(),
            params.user_id
        ));
        Ok(analyses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

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
    async fn should_clamp_oversized_limit() {
        let mut mock_repo = MockAnalysisRepo::new();
        mock_repo
            .expect_get_by_user()
            .withf(|_, skip, limit| *skip == 40 && *limit == MAX_PAGE_SIZE)
            .times(1)
            .returning(|_, _, _| Ok(vec![]));

        let use_case = ListAnalysesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let analyses = use_case
            .execute(ListAnalysesParams {
                user_id: UserId::new("uid-1"),
                skip: 40,
                limit: 5_000,
            })
            .await
            .unwrap();

        assert!(analyses.is_empty());
    }

    #[tokio::test]
    async fn should_raise_zero_limit_to_one() {
        let mut mock_repo = MockAnalysisRepo::new();
        mock_repo
            .expect_get_by_user()
            .withf(|_, _, limit| *limit == 1)
            .times(1)
            .returning(|_, _, _| Ok(vec![]));

        let use_case = ListAnalysesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListAnalysesParams {
                user_id: UserId::new("uid-1"),
                skip: 0,
                limit: 0,
            })
            .await;

        assert!(result.is_ok());
    }
}
