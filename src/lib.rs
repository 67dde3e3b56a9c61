pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    build_preventive_prompt, build_resource_search_prompt, build_triage_prompt, parse_structured,
    CompletionClient, ManageProfileUseCase, PreventivePlanUseCase, ProfileRepository,
    ProfileUpdate, ResourceSearchUseCase, SymptomTriageUseCase,
};

pub use cli::{Commands, ProfileCommand};

pub use connector::{
    Container, ContainerConfig, GeminiClient, InMemoryProfileRepository,
    JsonFileProfileRepository, MockCompletionClient, Router,
};

pub use domain::{
    DomainError, Gender, HealthResource, SchemaDescriptor, Screening, ScreeningCategory,
    StructuredPrompt, TriageResult, UrgencyLevel, UserProfile, EMERGENCY_NOTICE, NO_CONDITIONS,
    PRESET_TOPICS,
};
