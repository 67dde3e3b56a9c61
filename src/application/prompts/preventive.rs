use crate::domain::{SchemaDescriptor, ScreeningCategory, StructuredPrompt, UserProfile};

/// Schema for the preventive plan: an array of screening objects.
pub fn screening_list_schema() -> SchemaDescriptor {
    let categories: Vec<&str> = ScreeningCategory::ALL.iter().map(|c| c.as_str()).collect();

    SchemaDescriptor::array_of(
        SchemaDescriptor::object()
            .with_property("name", SchemaDescriptor::string())
            .with_property("frequency", SchemaDescriptor::string())
            .with_property("reason", SchemaDescriptor::string())
            .with_property("category", SchemaDescriptor::enumeration(&categories)),
    )
}

pub fn build_preventive_prompt(profile: &UserProfile) -> StructuredPrompt {
    let prompt = format!(
        "Generate a list of preventive health screenings for a user with the following profile:\n\
         Age: {age}\n\
         Gender: {gender}\n\
         Existing Conditions: {conditions}\n\
         \n\
         Based on standard medical guidelines (like USPSTF), recommend 5-8 screenings.\n\
         Categorize each one as {categories}.\n\
         Return a JSON array.",
        age = profile.age,
        gender = profile.gender,
        conditions = profile.conditions_summary(),
        categories = ScreeningCategory::ALL
            .iter()
            .map(|c| format!("'{}'", c))
            .collect::<Vec<_>>()
            .join(", "),
    );

    StructuredPrompt::new(prompt, screening_list_schema())
}
