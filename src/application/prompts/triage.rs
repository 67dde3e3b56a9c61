use crate::domain::{SchemaDescriptor, StructuredPrompt, UrgencyLevel, UserProfile};

/// Schema for a single triage result object.
pub fn triage_schema() -> SchemaDescriptor {
    let levels: Vec<&str> = UrgencyLevel::ALL.iter().map(|l| l.as_str()).collect();

    SchemaDescriptor::object()
        .with_property("urgencyLevel", SchemaDescriptor::enumeration(&levels))
        .with_property("summary", SchemaDescriptor::string())
        .with_property(
            "actionableSteps",
            SchemaDescriptor::array_of(SchemaDescriptor::string()),
        )
        .with_property("disclaimer", SchemaDescriptor::string())
}

pub fn build_triage_prompt(symptoms: &str, profile: &UserProfile) -> StructuredPrompt {
    let levels = UrgencyLevel::ALL
        .iter()
        .map(|l| format!("'{}' ({})", l, l.description()))
        .collect::<Vec<_>>()
        .join(", ");

    let prompt = format!(
        "Act as a medical triage assistant. The user is a {age} year old {gender} \
         with history of {conditions}.\n\
         Symptoms: \"{symptoms}\"\n\
         \n\
         Analyze the severity.\n\
         1. Determine urgency as exactly one of: {levels}.\n\
         2. Provide a brief summary of what might be happening (non-diagnostic).\n\
         3. List exactly 3 concrete actionable steps.\n\
         4. Include a mandatory disclaimer.\n\
         \n\
         Return JSON.",
        age = profile.age,
        gender = profile.gender,
        conditions = profile.conditions_summary(),
        symptoms = symptoms,
        levels = levels,
    );

    StructuredPrompt::new(prompt, triage_schema())
}
