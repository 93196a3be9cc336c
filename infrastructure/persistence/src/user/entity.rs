use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::{SkinGoal, User};
use business::domain::user::value_objects::AccountState;

/// JSONB shape of one element of `users.skin_goals`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkinGoalRecord {
    pub id: Uuid,
    pub title: String,
    pub color: String,
    pub progress: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&SkinGoal> for SkinGoalRecord {
    fn from(goal: &SkinGoal) -> Self {
        Self {
            id: goal.id,
            title: goal.title.clone(),
            color: goal.color.clone(),
            progress: goal.progress,
            created_at: goal.created_at,
            updated_at: goal.updated_at,
        }
    }
}

impl From<SkinGoalRecord> for SkinGoal {
    fn from(record: SkinGoalRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            color: record.color,
            progress: record.progress,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub firebase_uid: String,
    pub email: String,
    pub display_name: String,
    pub name: String,
    pub bio: Option<String>,
    pub profile_photo_url: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub gender: Option<String>,
    pub account_state: String,
    pub onboarding_completed: bool,
    pub onboarding_step: i32,
    pub face_image_captured: bool,
    pub face_analysis_completed: bool,
    pub subscription_completed: bool,
    pub skin_type: Option<String>,
    pub skin_care_experience: Option<String>,
    pub budget_preference: Option<String>,
    pub main_skin_concerns: Vec<String>,
    pub skin_goals: Json<Vec<SkinGoalRecord>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserEntity {
    pub fn into_domain(self) -> Result<User, RepositoryError> {
        let user_id = UserId::parse(self.firebase_uid).ok_or(RepositoryError::CorruptedRecord)?;

        Ok(User {
            user_id,
            email: self.email,
            display_name: self.display_name,
            name: self.name,
            bio: self.bio,
            profile_photo_url: self.profile_photo_url,
            date_of_birth: self.date_of_birth,
            gender: self.gender.and_then(|g| g.parse().ok()),
            account_state: self
                .account_state
                .parse::<AccountState>()
                .unwrap_or(AccountState::Free),
            onboarding_completed: self.onboarding_completed,
            onboarding_step: u32::try_from(self.onboarding_step).unwrap_or(0),
            face_image_captured: self.face_image_captured,
            face_analysis_completed: self.face_analysis_completed,
            subscription_completed: self.subscription_completed,
            skin_type: self.skin_type.and_then(|s| s.parse().ok()),
            skin_care_experience: self.skin_care_experience.and_then(|s| s.parse().ok()),
            budget_preference: self.budget_preference.and_then(|s| s.parse().ok()),
            main_skin_concerns: self.main_skin_concerns,
            skin_goals: self.skin_goals.0.into_iter().map(SkinGoal::from).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

pub fn goal_records(user: &User) -> Json<Vec<SkinGoalRecord>> {
    Json(user.skin_goals.iter().map(SkinGoalRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::user::value_objects::{Gender, SkinType};

    fn entity() -> UserEntity {
        let now = Utc::now();
        UserEntity {
            firebase_uid: "uid-1".to_string(),
            email: "irene@example.com".to_string(),
            display_name: "Irene".to_string(),
            name: "Irene Diaz".to_string(),
            bio: None,
            profile_photo_url: None,
            date_of_birth: None,
            gender: Some("Female".to_string()),
            account_state: "PREMIUM".to_string(),
            onboarding_completed: false,
            onboarding_step: 4,
            face_image_captured: true,
            face_analysis_completed: false,
            subscription_completed: false,
            skin_type: Some("Oily".to_string()),
            skin_care_experience: None,
            budget_preference: Some("not-a-budget".to_string()),
            main_skin_concerns: vec!["Acne".to_string()],
            skin_goals: Json(vec![SkinGoalRecord {
                id: Uuid::new_v4(),
                title: "Clear pores".to_string(),
                color: "#FFD180".to_string(),
                progress: 0.25,
                created_at: now,
                updated_at: now,
            }]),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn should_map_row_to_user() {
        let user = entity().into_domain().unwrap();

        assert!(user.is_premium());
        assert_eq!(user.onboarding_step, 4);
        assert_eq!(user.gender, Some(Gender::Female));
        assert_eq!(user.skin_type, Some(SkinType::Oily));
        assert_eq!(user.skin_goals[0].progress, 0.25);
    }

    #[test]
    fn should_drop_unknown_enum_values() {
        let user = entity().into_domain().unwrap();

        assert!(user.budget_preference.is_none());
    }

    #[test]
    fn should_reject_row_with_empty_uid() {
        let result = UserEntity {
            firebase_uid: String::new(),
            ..entity()
        }
        .into_domain();

        assert!(matches!(result, Err(RepositoryError::CorruptedRecord)));
    }

    #[test]
    fn should_serialize_goals_for_jsonb_column() {
        let user = entity().into_domain().unwrap();

        let records = goal_records(&user);

        assert_eq!(records.0.len(), 1);
        assert_eq!(records.0[0].title, "Clear pores");
    }
}
