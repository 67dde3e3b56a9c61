use std::sync::Arc;

use tempfile::tempdir;
use vitalguide::{
    Container, ContainerConfig, Gender, JsonFileProfileRepository, ManageProfileUseCase,
    MockCompletionClient, ProfileRepository, UserProfile,
};

#[tokio::test]
async fn json_profile_repository_roundtrip_save_and_load() {
    let dir = tempdir().expect("tempdir");
    let repo = JsonFileProfileRepository::new(dir.path());

    assert!(repo.load().await.expect("load").is_none());

    let profile =
        UserProfile::new("Jane Doe", 58, Gender::Female).with_conditions(["Diabetes", "Asthma"]);
    repo.save(&profile).await.expect("save");

    assert!(dir.path().join("vitalguide_profile.json").exists());
    let loaded = repo.load().await.expect("load").expect("profile exists");
    assert_eq!(loaded, profile);
}

#[tokio::test]
async fn json_profile_repository_overwrites_previous_profile() {
    let dir = tempdir().expect("tempdir");
    let repo = JsonFileProfileRepository::new(dir.path());

    repo.save(&UserProfile::default()).await.expect("save default");
    let updated = UserProfile::new("Sam", 30, Gender::Other);
    repo.save(&updated).await.expect("save updated");

    assert_eq!(repo.load().await.expect("load"), Some(updated));
}

#[tokio::test]
async fn json_profile_repository_reports_corrupt_file() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(dir.path().join("vitalguide_profile.json"), "{not json").expect("write");

    let repo = JsonFileProfileRepository::new(dir.path());
    let err = repo.load().await.unwrap_err();
    assert!(err.to_string().contains("corrupt profile"));
}

#[tokio::test]
async fn manage_profile_falls_back_to_default_on_corrupt_file() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("vitalguide_profile.json"),
        r#"{"name":"x","age":-4,"gender":"Female","conditions":[]}"#,
    )
    .expect("write");

    let use_case = ManageProfileUseCase::new(Arc::new(JsonFileProfileRepository::new(dir.path())));
    assert_eq!(use_case.load().await, UserProfile::default());

    // The next save replaces the corrupt record.
    let profile = use_case.add_condition("High BP").await.expect("add");
    assert_eq!(profile.conditions, vec!["High BP"]);
    assert_eq!(use_case.load().await.conditions, vec!["High BP"]);
}

#[tokio::test]
async fn json_profile_repository_creates_missing_directory() {
    let dir = tempdir().expect("tempdir");
    let nested = dir.path().join("nested").join("data");
    let repo = JsonFileProfileRepository::new(&nested);

    repo.save(&UserProfile::default()).await.expect("save");
    assert!(nested.join("vitalguide_profile.json").exists());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_condition_edits_through_container_are_all_stored() {
    let dir = tempdir().expect("tempdir");
    let repo = Arc::new(JsonFileProfileRepository::new(dir.path()));
    let container = Arc::new(Container::with_services(
        ContainerConfig {
            data_dir: dir.path().to_string_lossy().to_string(),
            model: None,
            memory_storage: false,
        },
        Arc::new(MockCompletionClient::responding("[]")),
        repo.clone(),
    ));

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let container = container.clone();
            tokio::spawn(async move {
                container
                    .profile_use_case()
                    .add_condition(&format!("c{i}"))
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle.await.expect("join").expect("add");
    }

    let stored = repo.load().await.expect("load").expect("profile exists");
    assert_eq!(stored.conditions.len(), 20);
    for i in 0..20 {
        assert!(stored.conditions.contains(&format!("c{i}")));
    }
}
