use serde::{Deserialize, Serialize};

/// Subscription tier of an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountState {
    Free,
    Premium,
    Trial,
}

impl std::fmt::Display for AccountState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountState::Free => write!(f, "FREE"),
            AccountState::Premium => write!(f, "PREMIUM"),
            AccountState::Trial => write!(f, "TRIAL"),
        }
    }
}

impl std::str::FromStr for AccountState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FREE" => Ok(AccountState::Free),
            "PREMIUM" => Ok(AccountState::Premium),
            "TRIAL" => Ok(AccountState::Trial),
            _ => Err(format!("Invalid account state: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SkinType {
    Normal,
    Oily,
    Dry,
    Combination,
    Sensitive,
}

impl std::fmt::Display for SkinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkinType::Normal => write!(f, "Normal"),
            SkinType::Oily => write!(f, "Oily"),
            SkinType::Dry => write!(f, "Dry"),
            SkinType::Combination => write!(f, "Combination"),
            SkinType::Sensitive => write!(f, "Sensitive"),
        }
    }
}

impl std::str::FromStr for SkinType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Normal" => Ok(SkinType::Normal),
            "Oily" => Ok(SkinType::Oily),
            "Dry" => Ok(SkinType::Dry),
            "Combination" => Ok(SkinType::Combination),
            "Sensitive" => Ok(SkinType::Sensitive),
            _ => Err(format!("Invalid skin type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Other => write!(f, "Other"),
            Gender::PreferNotToSay => write!(f, "PreferNotToSay"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Other" => Ok(Gender::Other),
            "PreferNotToSay" => Ok(Gender::PreferNotToSay),
            _ => Err(format!("Invalid gender: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SkinCareExperience {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for SkinCareExperience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkinCareExperience::Beginner => write!(f, "Beginner"),
            SkinCareExperience::Intermediate => write!(f, "Intermediate"),
            SkinCareExperience::Advanced => write!(f, "Advanced"),
        }
    }
}

impl std::str::FromStr for SkinCareExperience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(SkinCareExperience::Beginner),
            "Intermediate" => Ok(SkinCareExperience::Intermediate),
            "Advanced" => Ok(SkinCareExperience::Advanced),
            _ => Err(format!("Invalid skincare experience: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BudgetPreference {
    Low,
    Moderate,
    High,
    Luxury,
}

impl std::fmt::Display for BudgetPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetPreference::Low => write!(f, "Low"),
            BudgetPreference::Moderate => write!(f, "Moderate"),
            BudgetPreference::High => write!(f, "High"),
            BudgetPreference::Luxury => write!(f, "Luxury"),
        }
    }
}

impl std::str::FromStr for BudgetPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(BudgetPreference::Low),
            "Moderate" => Ok(BudgetPreference::Moderate),
            "High" => Ok(BudgetPreference::High),
            "Luxury" => Ok(BudgetPreference::Luxury),
            _ => Err(format!("Invalid budget preference: {}", s)),
        }
    }
}
