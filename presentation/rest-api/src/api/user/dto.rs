use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::user::model::{SkinGoal, SkinProfileUpdate, User};
use business::domain::user::value_objects::{
    AccountState, BudgetPreference, Gender, SkinCareExperience, SkinType,
};

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum AccountStateDto {
    #[oai(rename = "FREE")]
    Free,
    #[oai(rename = "PREMIUM")]
    Premium,
    #[oai(rename = "TRIAL")]
    Trial,
}

impl From<AccountState> for AccountStateDto {
    fn from(state: AccountState) -> Self {
        match state {
            AccountState::Free => AccountStateDto::Free,
            AccountState::Premium => AccountStateDto::Premium,
            AccountState::Trial => AccountStateDto::Trial,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum SkinTypeDto {
    #[oai(rename = "Normal")]
    Normal,
    #[oai(rename = "Oily")]
    Oily,
    #[oai(rename = "Dry")]
    Dry,
    #[oai(rename = "Combination")]
    Combination,
    #[oai(rename = "Sensitive")]
    Sensitive,
}

impl From<SkinType> for SkinTypeDto {
    fn from(skin_type: SkinType) -> Self {
        match skin_type {
            SkinType::Normal => SkinTypeDto::Normal,
            SkinType::Oily => SkinTypeDto::Oily,
            SkinType::Dry => SkinTypeDto::Dry,
            SkinType::Combination => SkinTypeDto::Combination,
            SkinType::Sensitive => SkinTypeDto::Sensitive,
        }
    }
}

impl From<SkinTypeDto> for SkinType {
    fn from(dto: SkinTypeDto) -> Self {
        match dto {
            SkinTypeDto::Normal => SkinType::Normal,
            SkinTypeDto::Oily => SkinType::Oily,
            SkinTypeDto::Dry => SkinType::Dry,
            SkinTypeDto::Combination => SkinType::Combination,
            SkinTypeDto::Sensitive => SkinType::Sensitive,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum GenderDto {
    #[oai(rename = "Male")]
    Male,
    #[oai(rename = "Female")]
    Female,
    #[oai(rename = "Other")]
    Other,
    #[oai(rename = "PreferNotToSay")]
    PreferNotToSay,
}

impl From<Gender> for GenderDto {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => GenderDto::Male,
            Gender::Female => GenderDto::Female,
            Gender::Other => GenderDto::Other,
            Gender::PreferNotToSay => GenderDto::PreferNotToSay,
        }
    }
}

impl From<GenderDto> for Gender {
    fn from(dto: GenderDto) -> Self {
        match dto {
            GenderDto::Male => Gender::Male,
            GenderDto::Female => Gender::Female,
            GenderDto::Other => Gender::Other,
            GenderDto::PreferNotToSay => Gender::PreferNotToSay,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum SkinCareExperienceDto {
    #[oai(rename = "Beginner")]
    Beginner,
    #[oai(rename = "Intermediate")]
    Intermediate,
    #[oai(rename = "Advanced")]
    Advanced,
}

impl From<SkinCareExperience> for SkinCareExperienceDto {
    fn from(experience: SkinCareExperience) -> Self {
        match experience {
            SkinCareExperience::Beginner => SkinCareExperienceDto::Beginner,
            SkinCareExperience::Intermediate => SkinCareExperienceDto::Intermediate,
            SkinCareExperience::Advanced => SkinCareExperienceDto::Advanced,
        }
    }
}

impl From<SkinCareExperienceDto> for SkinCareExperience {
    fn from(dto: SkinCareExperienceDto) -> Self {
        match dto {
            SkinCareExperienceDto::Beginner => SkinCareExperience::Beginner,
            SkinCareExperienceDto::Intermediate => SkinCareExperience::Intermediate,
            SkinCareExperienceDto::Advanced => SkinCareExperience::Advanced,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum BudgetPreferenceDto {
    #[oai(rename = "Low")]
    Low,
    #[oai(rename = "Moderate")]
    Moderate,
    #[oai(rename = "High")]
    High,
    #[oai(rename = "Luxury")]
    Luxury,
}

impl From<BudgetPreference> for BudgetPreferenceDto {
    fn from(budget: BudgetPreference) -> Self {
        match budget {
            BudgetPreference::Low => BudgetPreferenceDto::Low,
            BudgetPreference::Moderate => BudgetPreferenceDto::Moderate,
            BudgetPreference::High => BudgetPreferenceDto::High,
            BudgetPreference::Luxury => BudgetPreferenceDto::Luxury,
        }
    }
}

impl From<BudgetPreferenceDto> for BudgetPreference {
    fn from(dto: BudgetPreferenceDto) -> Self {
        match dto {
            BudgetPreferenceDto::Low => BudgetPreference::Low,
            BudgetPreferenceDto::Moderate => BudgetPreference::Moderate,
            BudgetPreferenceDto::High => BudgetPreference::High,
            BudgetPreferenceDto::Luxury => BudgetPreference::Luxury,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SkinGoalResponse {
    pub id: Uuid,
    pub title: String,
    pub color: String,
    /// Between 0 and 1
    pub progress: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SkinGoal> for SkinGoalResponse {
    fn from(goal: SkinGoal) -> Self {
        Self {
            id: goal.id,
            title: goal.title,
            color: goal.color,
            progress: goal.progress,
            created_at: goal.created_at,
            updated_at: goal.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UserResponse {
    pub firebase_uid: String,
    pub email: String,
    pub display_name: String,
    pub name: String,
    pub bio: Option<String>,
    pub profile_photo_url: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub gender: Option<GenderDto>,
    pub account_state: AccountStateDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub onboarding_completed: bool,
    pub onboarding_step: u32,
    pub face_image_captured: bool,
    pub face_analysis_completed: bool,
    pub subscription_completed: bool,
    pub skin_type: Option<SkinTypeDto>,
    pub skin_care_experience: Option<SkinCareExperienceDto>,
    pub budget_preference: Option<BudgetPreferenceDto>,
    pub main_skin_concerns: Vec<String>,
    pub skin_goals: Vec<SkinGoalResponse>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            firebase_uid: user.user_id.as_str().to_string(),
            email: user.email,
            display_name: user.display_name,
            name: user.name,
            bio: user.bio,
            profile_photo_url: user.profile_photo_url,
            date_of_birth: user.date_of_birth,
            gender: user.gender.map(Into::into),
            account_state: user.account_state.into(),
            created_at: user.created_at,
            updated_at: user.updated_at,
            onboarding_completed: user.onboarding_completed,
            onboarding_step: user.onboarding_step,
            face_image_captured: user.face_image_captured,
            face_analysis_completed: user.face_analysis_completed,
            subscription_completed: user.subscription_completed,
            skin_type: user.skin_type.map(Into::into),
            skin_care_experience: user.skin_care_experience.map(Into::into),
            budget_preference: user.budget_preference.map(Into::into),
            main_skin_concerns: user.main_skin_concerns,
            skin_goals: user.skin_goals.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CreateUserRequest {
    /// Must equal the UID of the bearer token
    pub firebase_uid: String,
    pub email: String,
    pub display_name: String,
    pub name: String,
    pub bio: Option<String>,
    pub profile_photo_url: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub gender: Option<GenderDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UpdateUserRequest {
    pub display_name: Option<String>,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub profile_photo_url: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub gender: Option<GenderDto>,
    pub skin_type: Option<SkinTypeDto>,
    pub skin_care_experience: Option<SkinCareExperienceDto>,
    pub budget_preference: Option<BudgetPreferenceDto>,
    pub main_skin_concerns: Option<Vec<String>>,
}

impl UpdateUserRequest {
    pub fn skin_profile(&self) -> SkinProfileUpdate {
        SkinProfileUpdate {
            skin_type: self.skin_type.clone().map(Into::into),
            experience: self.skin_care_experience.clone().map(Into::into),
            budget: self.budget_preference.clone().map(Into::into),
            concerns: self.main_skin_concerns.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OnboardingUpdateRequest {
    pub onboarding_step: u32,
    pub face_image_captured: Option<bool>,
    pub face_analysis_completed: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SkinProfileUpdateRequest {
    pub skin_type: Option<SkinTypeDto>,
    pub skin_care_experience: Option<SkinCareExperienceDto>,
    pub budget_preference: Option<BudgetPreferenceDto>,
    pub main_skin_concerns: Option<Vec<String>>,
}

impl From<SkinProfileUpdateRequest> for SkinProfileUpdate {
    fn from(request: SkinProfileUpdateRequest) -> Self {
        Self {
            skin_type: request.skin_type.map(Into::into),
            experience: request.skin_care_experience.map(Into::into),
            budget: request.budget_preference.map(Into::into),
            concerns: request.main_skin_concerns,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CreateSkinGoalRequest {
    pub title: String,
    /// Hex colour used by the app, e.g. "#F4A7B9"
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UpdateGoalProgressRequest {
    /// Clamped to [0, 1]
    pub progress: f64,
}
