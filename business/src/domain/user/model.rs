use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use uuid::Uuid;

use super::errors::UserError;
use super::value_objects::{AccountState, BudgetPreference, Gender, SkinCareExperience, SkinType};
use crate::domain::shared::value_objects::UserId;

/// Onboarding is considered complete once this step has been reached.
pub const ONBOARDING_FINAL_STEP: u32 = 11;

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// A skincare goal with progress in the `[0, 1]` range.
#[derive(Debug, Clone, PartialEq)]
pub struct SkinGoal {
    pub id: Uuid,
    pub title: String,
    pub color: String,
    pub progress: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SkinGoal {
    pub fn new(title: String, color: String) -> Result<Self, UserError> {
        if title.trim().is_empty() {
            return Err(UserError::GoalTitleEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title: title.trim().to_string(),
            color,
            progress: 0.0,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn update_progress(&mut self, progress: f64) {
        self.progress = clamp_progress(progress);
        self.updated_at = Utc::now();
    }
}

fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

/// Skin profile fields; `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct SkinProfileUpdate {
    pub skin_type: Option<SkinType>,
    pub experience: Option<SkinCareExperience>,
    pub budget: Option<BudgetPreference>,
    pub concerns: Option<Vec<String>>,
}

impl SkinProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.skin_type.is_none()
            && self.experience.is_none()
            && self.budget.is_none()
            && self.concerns.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub email: String,
    pub display_name: String,
    pub name: String,
    pub bio: Option<String>,
    pub profile_photo_url: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub gender: Option<Gender>,
    pub account_state: AccountState,
    pub onboarding_completed: bool,
    pub onboarding_step: u32,
    pub face_image_captured: bool,
    pub face_analysis_completed: bool,
    pub subscription_completed: bool,
    pub skin_type: Option<SkinType>,
    pub skin_care_experience: Option<SkinCareExperience>,
    pub budget_preference: Option<BudgetPreference>,
    pub main_skin_concerns: Vec<String>,
    pub skin_goals: Vec<SkinGoal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewUserProps {
    pub user_id: UserId,
    pub email: String,
    pub display_name: String,
    pub name: String,
    pub bio: Option<String>,
    pub profile_photo_url: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub gender: Option<Gender>,
}

impl User {
    pub fn new(props: NewUserProps) -> Result<Self, UserError> {
        let email = props.email.trim().to_string();
        if !is_valid_email(&email) {
            return Err(UserError::EmailInvalid);
        }
        if props.display_name.trim().is_empty() {
            return Err(UserError::DisplayNameEmpty);
        }
        if props.name.trim().is_empty() {
            return Err(UserError::NameEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            user_id: props.user_id,
            email,
            display_name: props.display_name,
            name: props.name,
            bio: props.bio,
            profile_photo_url: props.profile_photo_url,
            date_of_birth: props.date_of_birth,
            gender: props.gender,
            account_state: AccountState::Free,
            onboarding_completed: false,
            onboarding_step: 0,
            face_image_captured: false,
            face_analysis_completed: false,
            subscription_completed: false,
            skin_type: None,
            skin_care_experience: None,
            budget_preference: None,
            main_skin_concerns: Vec::new(),
            skin_goals: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn is_premium(&self) -> bool {
        self.account_state == AccountState::Premium
    }

    pub fn rename(
        &mut self,
        display_name: Option<String>,
        name: Option<String>,
    ) -> Result<(), UserError> {
        if let Some(display_name) = display_name {
            if display_name.trim().is_empty() {
                return Err(UserError::DisplayNameEmpty);
            }
            self.display_name = display_name;
        }
        if let Some(name) = name {
            if name.trim().is_empty() {
                return Err(UserError::NameEmpty);
            }
            self.name = name;
        }
        self.touch();
        Ok(())
    }

    /// Records progress through onboarding. Steps never move backwards.
    pub fn complete_onboarding_step(&mut self, step: u32) {
        self.onboarding_step = self.onboarding_step.max(step);
        if self.onboarding_step >= ONBOARDING_FINAL_STEP {
            self.onboarding_completed = true;
        }
        self.touch();
    }

    pub fn update_skin_profile(&mut self, update: SkinProfileUpdate) {
        if let Some(skin_type) = update.skin_type {
            self.skin_type = Some(skin_type);
        }
        if let Some(experience) = update.experience {
            self.skin_care_experience = Some(experience);
        }
        if let Some(budget) = update.budget {
            self.budget_preference = Some(budget);
        }
        if let Some(concerns) = update.concerns {
            self.main_skin_concerns = concerns;
        }
        self.touch();
    }

    pub fn add_skin_goal(&mut self, goal: SkinGoal) {
        self.skin_goals.push(goal);
        self.touch();
    }

    pub fn update_goal_progress(&mut self, goal_id: Uuid, progress: f64) -> Result<(), UserError> {
        let goal = self
            .skin_goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or(UserError::GoalNotFound)?;
        goal.update_progress(progress);
        self.touch();
        Ok(())
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
