use std::sync::Arc;

use tracing::{info, warn};

use logger::TracingLogger;
use persistence::skin_analysis::repository::SkinAnalysisRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use hautai::client::HautAIClient;
use hautai::skin_analyzer::SkinAnalyzerHautAI;

use business::application::skin_analysis::get_latest::GetLatestAnalysisUseCaseImpl;
use business::application::skin_analysis::get_results::GetAnalysisResultsUseCaseImpl;
use business::application::skin_analysis::list::ListAnalysesUseCaseImpl;
use business::application::skin_analysis::upload::UploadAnalysisImageUseCaseImpl;
use business::application::user::add_skin_goal::AddSkinGoalUseCaseImpl;
use business::application::user::create::CreateUserUseCaseImpl;
use business::application::user::delete::DeleteUserUseCaseImpl;
use business::application::user::get_current::GetCurrentUserUseCaseImpl;
use business::application::user::update::UpdateUserUseCaseImpl;
use business::application::user::update_goal_progress::UpdateGoalProgressUseCaseImpl;
use business::application::user::update_onboarding::UpdateOnboardingUseCaseImpl;
use business::application::user::update_skin_profile::UpdateSkinProfileUseCaseImpl;

use crate::api::analysis::routes::AnalysisApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::security::FirebaseTokenVerifier;
use crate::api::user::routes::{UserApi, UserUseCases};
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub user_api: UserApi,
    pub analysis_api: AnalysisApi,
    pub token_verifier: Arc<FirebaseTokenVerifier>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig, pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let user_logger = Arc::new(TracingLogger::new("user"));
        let analysis_logger = Arc::new(TracingLogger::new("skin_analysis"));
        let health_api = HealthApi::new(config.info.clone(), config.firebase.storage_bucket.clone());

        info!(
            project_id = %config.firebase.project_id,
            credentials = config.firebase.credential_source(),
            "Firebase Authentication configured"
        );
        let token_verifier = Arc::new(FirebaseTokenVerifier::new(
            config.firebase.project_id.clone(),
        ));

        // Infrastructure adapters
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool.clone()));
        let analysis_repository = Arc::new(SkinAnalysisRepositoryPostgres::new(pool));

        let hautai = &config.hautai;
        if hautai.dataset_id.is_none() {
            warn!("HAUTAI_DATASET_ID is not set; analysis requests will fail");
        }
        let has_static_session = hautai.api_key.is_some() && hautai.company_id.is_some();
        let has_login = hautai.username.is_some() && hautai.password.is_some();
        if !has_static_session && !has_login {
            warn!("No Haut.ai credentials configured; analysis requests will fail");
        }
        let analyzer = Arc::new(SkinAnalyzerHautAI::new(HautAIClient::new(hautai.clone())));

        // User use cases
        let user_use_cases = UserUseCases {
            create: Arc::new(CreateUserUseCaseImpl {
                repository: user_repository.clone(),
                logger: user_logger.clone(),
            }),
            get_current: Arc::new(GetCurrentUserUseCaseImpl {
                repository: user_repository.clone(),
                logger: user_logger.clone(),
            }),
            update: Arc::new(UpdateUserUseCaseImpl {
                repository: user_repository.clone(),
                logger: user_logger.clone(),
            }),
            update_onboarding: Arc::new(UpdateOnboardingUseCaseImpl {
                repository: user_repository.clone(),
                logger: user_logger.clone(),
            }),
            update_skin_profile: Arc::new(UpdateSkinProfileUseCaseImpl {
                repository: user_repository.clone(),
                logger: user_logger.clone(),
            }),
            delete: Arc::new(DeleteUserUseCaseImpl {
                repository: user_repository.clone(),
                analysis_repository: analysis_repository.clone(),
                logger: user_logger.clone(),
            }),
            add_skin_goal: Arc::new(AddSkinGoalUseCaseImpl {
                repository: user_repository.clone(),
                logger: user_logger.clone(),
            }),
            update_goal_progress: Arc::new(UpdateGoalProgressUseCaseImpl {
                repository: user_repository,
                logger: user_logger.clone(),
            }),
        };

        // Skin analysis use cases
        let upload_use_case = Arc::new(UploadAnalysisImageUseCaseImpl {
            repository: analysis_repository.clone(),
            analyzer: analyzer.clone(),
            logger: analysis_logger.clone(),
        });
        let get_results_use_case = Arc::new(GetAnalysisResultsUseCaseImpl {
            repository: analysis_repository.clone(),
            analyzer,
            logger: analysis_logger.clone(),
        });
        let list_use_case = Arc::new(ListAnalysesUseCaseImpl {
            repository: analysis_repository.clone(),
            logger: analysis_logger.clone(),
        });
        let get_latest_use_case = Arc::new(GetLatestAnalysisUseCaseImpl {
            repository: analysis_repository,
            logger: analysis_logger,
        });

        Ok(Self {
            health_api,
            user_api: UserApi::new(user_use_cases),
            analysis_api: AnalysisApi::new(
                upload_use_case,
                get_results_use_case,
                list_use_case,
                get_latest_use_case,
            ),
            token_verifier,
        })
    }
}
