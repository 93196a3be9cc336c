use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;
use business::domain::user::repository::UserRepository;

use super::entity::{UserEntity, goal_records};

const USER_COLUMNS: &str = "firebase_uid, email, display_name, name, bio, profile_photo_url, date_of_birth, gender, account_state, onboarding_completed, onboarding_step, face_image_captured, face_analysis_completed, subscription_completed, skin_type, skin_care_experience, budget_preference, main_skin_concerns, skin_goals, created_at, updated_at";

pub struct UserRepositoryPostgres {
    pool: PgPool,
}

impl UserRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_write_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
        other => {
            tracing::error!(error = %other, "users write failed");
            RepositoryError::DatabaseError
        }
    }
}

fn step_column(user: &User) -> i32 {
    i32::try_from(user.onboarding_step).unwrap_or(i32::MAX)
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn get(&self, user_id: &UserId) -> Result<User, RepositoryError> {
        let entity = sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {} FROM users WHERE firebase_uid = $1",
            USER_COLUMNS
        ))
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn create(&self, user: &User) -> Result<(), RepositoryError> {
        sqlx::query(&format!(
            "INSERT INTO users ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21)",
            USER_COLUMNS
        ))
        .bind(user.user_id.as_str())
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(&user.name)
        .bind(&user.bio)
        .bind(&user.profile_photo_url)
        .bind(user.date_of_birth)
        .bind(user.gender.as_ref().map(|g| g.to_string()))
        .bind(user.account_state.to_string())
        .bind(user.onboarding_completed)
        .bind(step_column(user))
        .bind(user.face_image_captured)
        .bind(user.face_analysis_completed)
        .bind(user.subscription_completed)
        .bind(user.skin_type.as_ref().map(|s| s.to_string()))
        .bind(user.skin_care_experience.as_ref().map(|s| s.to_string()))
        .bind(user.budget_preference.as_ref().map(|s| s.to_string()))
        .bind(&user.main_skin_concerns)
        .bind(goal_records(user))
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    async fn save(&self, user: &User) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE users SET
                email = $2,
                display_name = $3,
                name = $4,
                bio = $5,
                profile_photo_url = $6,
                date_of_birth = $7,
                gender = $8,
                account_state = $9,
                onboarding_completed = $10,
                onboarding_step = $11,
                face_image_captured = $12,
                face_analysis_completed = $13,
                subscription_completed = $14,
                skin_type = $15,
                skin_care_experience = $16,
                budget_preference = $17,
                main_skin_concerns = $18,
                skin_goals = $19,
                updated_at = $20
            WHERE firebase_uid = $1"#,
        )
        .bind(user.user_id.as_str())
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(&user.name)
        .bind(&user.bio)
        .bind(&user.profile_photo_url)
        .bind(user.date_of_birth)
        .bind(user.gender.as_ref().map(|g| g.to_string()))
        .bind(user.account_state.to_string())
        .bind(user.onboarding_completed)
        .bind(step_column(user))
        .bind(user.face_image_captured)
        .bind(user.face_analysis_completed)
        .bind(user.subscription_completed)
        .bind(user.skin_type.as_ref().map(|s| s.to_string()))
        .bind(user.skin_care_experience.as_ref().map(|s| s.to_string()))
        .bind(user.budget_preference.as_ref().map(|s| s.to_string()))
        .bind(&user.main_skin_concerns)
        .bind(goal_records(user))
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE firebase_uid = $1")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
