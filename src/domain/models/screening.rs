use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreeningCategory {
    Critical,
    Routine,
    Optional,
}

impl ScreeningCategory {
    pub const ALL: [ScreeningCategory; 3] = [
        ScreeningCategory::Critical,
        ScreeningCategory::Routine,
        ScreeningCategory::Optional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScreeningCategory::Critical => "Critical",
            ScreeningCategory::Routine => "Routine",
            ScreeningCategory::Optional => "Optional",
        }
    }
}

impl std::fmt::Display for ScreeningCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One recommended preventive test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screening {
    pub name: String,
    pub frequency: String,
    pub reason: String,
    pub category: ScreeningCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screening_deserializes_provider_shape() {
        let raw = r#"{"name":"Mammogram","frequency":"Every 2 years","reason":"Breast cancer screening","category":"Critical"}"#;
        let screening: Screening = serde_json::from_str(raw).unwrap();
        assert_eq!(screening.name, "Mammogram");
        assert_eq!(screening.category, ScreeningCategory::Critical);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let raw = r#"{"name":"x","frequency":"y","reason":"z","category":"Urgent"}"#;
        assert!(serde_json::from_str::<Screening>(raw).is_err());
    }
}
