use serde::{Deserialize, Serialize};

/// Shown alongside every triage result, independent of what the provider returns.
pub const EMERGENCY_NOTICE: &str = "If you are experiencing a life-threatening emergency \
(severe chest pain, difficulty breathing, major bleeding), call 911 immediately. \
This tool is AI-powered and for informational purposes only.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UrgencyLevel {
    Emergency,
    #[serde(rename = "Urgent Care")]
    UrgentCare,
    #[serde(rename = "Virtual Visit")]
    VirtualVisit,
    #[serde(rename = "Self-Care")]
    SelfCare,
}

impl UrgencyLevel {
    /// Most to least severe.
    pub const ALL: [UrgencyLevel; 4] = [
        UrgencyLevel::Emergency,
        UrgencyLevel::UrgentCare,
        UrgencyLevel::VirtualVisit,
        UrgencyLevel::SelfCare,
    ];

    /// The literal used on the wire and in prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Emergency => "Emergency",
            UrgencyLevel::UrgentCare => "Urgent Care",
            UrgencyLevel::VirtualVisit => "Virtual Visit",
            UrgencyLevel::SelfCare => "Self-Care",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UrgencyLevel::Emergency => "life threatening",
            UrgencyLevel::UrgentCare => "needs attention today",
            UrgencyLevel::VirtualVisit => "consultation needed",
            UrgencyLevel::SelfCare => "monitor at home",
        }
    }

    /// Next action to offer the user. Self-care has none.
    pub fn call_to_action(&self) -> Option<&'static str> {
        match self {
            UrgencyLevel::Emergency => Some("Call 911 Now"),
            UrgencyLevel::UrgentCare => Some("Find Urgent Care Near Me"),
            UrgencyLevel::VirtualVisit => Some("Book Telemedicine"),
            UrgencyLevel::SelfCare => None,
        }
    }
}

impl std::fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a symptom analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageResult {
    pub urgency_level: UrgencyLevel,
    pub summary: String,
    pub actionable_steps: Vec<String>,
    pub disclaimer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_literals_match_wire_format() {
        for level in UrgencyLevel::ALL {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
        }
    }

    #[test]
    fn test_call_to_action_per_level() {
        assert_eq!(UrgencyLevel::Emergency.call_to_action(), Some("Call 911 Now"));
        assert_eq!(
            UrgencyLevel::UrgentCare.call_to_action(),
            Some("Find Urgent Care Near Me")
        );
        assert_eq!(UrgencyLevel::VirtualVisit.call_to_action(), Some("Book Telemedicine"));
        assert_eq!(UrgencyLevel::SelfCare.call_to_action(), None);
    }

    #[test]
    fn test_triage_result_uses_camel_case() {
        let result = TriageResult {
            urgency_level: UrgencyLevel::SelfCare,
            summary: "Likely a mild cold".to_string(),
            actionable_steps: vec!["Rest".to_string()],
            disclaimer: "Not medical advice".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["urgencyLevel"], "Self-Care");
        assert_eq!(json["actionableSteps"][0], "Rest");
        assert!(json.get("urgency_level").is_none());
    }

    #[test]
    fn test_unknown_urgency_is_rejected() {
        let raw = r#"{"urgencyLevel":"Mild","summary":"s","actionableSteps":[],"disclaimer":"d"}"#;
        assert!(serde_json::from_str::<TriageResult>(raw).is_err());
    }
}
