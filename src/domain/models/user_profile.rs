use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Placeholder used in prompts when the profile lists no conditions.
pub const NO_CONDITIONS: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            unknown => Err(DomainError::invalid_input(format!(
                "unknown gender '{}', expected one of Male, Female, Other",
                unknown
            ))),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The person requesting guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    /// Free-text condition names in the order they were entered.
    pub conditions: Vec<String>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, age: u32, gender: Gender) -> Self {
        Self {
            name: name.into(),
            age,
            gender,
            conditions: Vec::new(),
        }
    }

    pub fn with_conditions<I, S>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conditions = conditions.into_iter().map(Into::into).collect();
        self
    }

    /// Comma-joined condition list, or [`NO_CONDITIONS`] when there are none.
    pub fn conditions_summary(&self) -> String {
        if self.conditions.is_empty() {
            NO_CONDITIONS.to_string()
        } else {
            self.conditions.join(", ")
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new("Guest User", 45, Gender::Female)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = UserProfile::default();
        assert_eq!(profile.name, "Guest User");
        assert_eq!(profile.age, 45);
        assert_eq!(profile.gender, Gender::Female);
        assert!(profile.conditions.is_empty());
    }

    #[test]
    fn test_conditions_summary() {
        let profile = UserProfile::default();
        assert_eq!(profile.conditions_summary(), "None");

        let profile = profile.with_conditions(["Asthma", "High BP"]);
        assert_eq!(profile.conditions_summary(), "Asthma, High BP");
    }

    #[test]
    fn test_gender_from_str() {
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(" Male ".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("OTHER".parse::<Gender>().unwrap(), Gender::Other);
        assert!("unknown".parse::<Gender>().is_err());
    }

    #[test]
    fn test_profile_json_shape() {
        let profile = UserProfile::new("Jane Doe", 60, Gender::Male).with_conditions(["Diabetes"]);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jane Doe",
                "age": 60,
                "gender": "Male",
                "conditions": ["Diabetes"]
            })
        );
    }

    #[test]
    fn test_negative_age_is_rejected() {
        let raw = r#"{"name":"x","age":-1,"gender":"Female","conditions":[]}"#;
        assert!(serde_json::from_str::<UserProfile>(raw).is_err());
    }
}
