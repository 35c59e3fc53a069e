mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use pt_app::{AppSession, LaunchOptions, SessionError};
use pt_core::drafts::{FamilyDraft, PetDraft, PetField};
use pt_core::model::{Photo, PLACEHOLDER_THOUGHT};
use pt_core::navigation::{NavEvent, Screen};
use pt_core::onboarding::ScreenGraph;
use pt_core::persistence::{decode_pets, StorageKey};
use pt_core::ports::{CaptureSource, CompleteOnboardingError, PersistenceGatewayPort};
use pt_infra::{FileKeyValueStore, InMemoryKeyValueStore};
use tempfile::TempDir;

use common::{init_test_tracing, launch, FlakyGateway};

fn family() -> FamilyDraft {
    FamilyDraft {
        owner_name: "Ann".to_string(),
        family_members: "Bob".to_string(),
    }
}

fn pet(name: &str, kind: &str) -> PetDraft {
    let mut draft = PetDraft::new_pet();
    draft.set_field(PetField::Name, name);
    draft.set_field(PetField::Type, kind);
    draft
}

async fn walk_onboarding(session: &mut AppSession) {
    session.navigate(NavEvent::Start).await.unwrap();
    session.save_family_profile(family()).await.unwrap();
    session.navigate(NavEvent::AddPet).await.unwrap();
    session.save_pet(pet("Rex", "Dog")).await.unwrap();
}

#[tokio::test]
async fn first_run_completes_and_next_launch_opens_main_graph() {
    let gateway = Arc::new(InMemoryKeyValueStore::new());

    let (mut session, outcome) = launch(gateway.clone()).await;
    assert!(!outcome.onboarding_complete);
    assert_eq!(session.nav().graph(), ScreenGraph::Onboarding);

    walk_onboarding(&mut session).await;
    assert!(session.can_finish_onboarding());
    session
        .navigate(NavEvent::PetManagementPrimary)
        .await
        .unwrap();

    assert!(session.onboarding_complete());
    assert_eq!(session.current_screen(), &Screen::Home);
    session.shutdown().await;

    let snapshot = gateway.snapshot().await;
    assert_eq!(snapshot.get(&StorageKey::HasLaunched).map(String::as_str), Some("true"));
    assert_eq!(snapshot.get(&StorageKey::StaleData).map(String::as_str), Some("false"));

    let (session, outcome) = launch(gateway.clone()).await;
    assert!(outcome.onboarding_complete);
    assert_eq!(outcome.pets_loaded, 1);
    assert_eq!(session.nav().graph(), ScreenGraph::Main);
    assert_eq!(session.store().user().map(|u| u.name.as_str()), Some("Ann"));
}

#[tokio::test]
async fn completion_failure_keeps_onboarding_graph_and_allows_retry() {
    let gateway = Arc::new(FlakyGateway::new(InMemoryKeyValueStore::new()));
    gateway.fail_has_launched.store(true, Ordering::SeqCst);
    let (mut session, _) = launch(gateway.clone()).await;
    walk_onboarding(&mut session).await;

    let result = session.navigate(NavEvent::PetManagementPrimary).await;

    assert!(matches!(
        result,
        Err(SessionError::Completion(
            CompleteOnboardingError::PersistHasLaunched(_)
        ))
    ));
    assert!(!session.onboarding_complete());
    assert_eq!(session.nav().graph(), ScreenGraph::Onboarding);
    assert_eq!(gateway.get(StorageKey::StaleData).await.unwrap(), None);

    gateway.fail_has_launched.store(false, Ordering::SeqCst);
    session
        .navigate(NavEvent::PetManagementPrimary)
        .await
        .unwrap();
    assert_eq!(session.nav().graph(), ScreenGraph::Main);
}

#[tokio::test]
async fn failing_reads_never_panic_and_select_onboarding() {
    let gateway = Arc::new(FlakyGateway::new(InMemoryKeyValueStore::with_entries([
        (StorageKey::HasLaunched, "true"),
        (StorageKey::Pets, "[]"),
    ])));
    gateway.fail_reads.store(true, Ordering::SeqCst);

    let (session, outcome) = launch(gateway).await;

    assert!(!outcome.onboarding_complete);
    assert_eq!(session.nav().graph(), ScreenGraph::Onboarding);
}

#[tokio::test]
async fn pet_edits_are_mirrored_to_storage() {
    let gateway = Arc::new(InMemoryKeyValueStore::new());
    let (mut session, _) = launch(gateway.clone()).await;
    walk_onboarding(&mut session).await;
    session.navigate(NavEvent::AddPet).await.unwrap();
    let tom = session.save_pet(pet("Tom", "Cat")).await.unwrap();

    session
        .navigate(NavEvent::EditPet {
            pet_id: tom.id.clone(),
        })
        .await
        .unwrap();
    session.delete_pet(tom.id.clone()).await.unwrap();
    session.flush().await;

    let blob = gateway.get(StorageKey::Pets).await.unwrap().unwrap();
    let stored = decode_pets(&blob).unwrap();
    assert_eq!(stored, session.state().pets);
    assert_eq!(stored.len(), 1);
    assert_eq!(
        session.current_screen(),
        &Screen::PetManagement {
            reached_from_onboarding: true
        }
    );
}

#[tokio::test]
async fn clear_stale_on_launch_forces_onboarding() {
    let gateway = Arc::new(InMemoryKeyValueStore::with_entries([
        (StorageKey::HasLaunched, "true"),
        (
            StorageKey::User,
            r#"{"id":"1","name":"Ann","familyMembers":[]}"#,
        ),
        (StorageKey::Pets, "[]"),
    ]));

    let (session, outcome) = AppSession::launch(
        common::deps(gateway.clone()),
        LaunchOptions {
            clear_stale_on_launch: true,
        },
    )
    .await;

    assert!(outcome.wiped_stale);
    assert_eq!(session.nav().graph(), ScreenGraph::Onboarding);
    assert!(session.store().user().is_none());
    for key in StorageKey::ONBOARDING_RECORDS {
        assert_eq!(gateway.get(key).await.unwrap(), None);
    }
}

#[tokio::test]
async fn capture_pipeline_sets_photo_and_placeholder_thought() {
    let gateway = Arc::new(InMemoryKeyValueStore::with_entries([
        (StorageKey::HasLaunched, "true"),
        (
            StorageKey::User,
            r#"{"id":"1","name":"Ann","familyMembers":[]}"#,
        ),
        (StorageKey::Pets, r#"[{"id":"p1","name":"Rex","type":"Dog"}]"#),
    ]));
    let (mut session, _) = launch(gateway.clone()).await;

    session.navigate(NavEvent::OpenCapture).await.unwrap();
    let photo = session
        .capture(CaptureSource::Camera)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        session.current_screen(),
        &Screen::PhotoPreview {
            photo: photo.clone()
        }
    );

    session.navigate(NavEvent::RevealThoughts).await.unwrap();

    assert_eq!(session.state().current_photo, Some(photo));
    assert_eq!(
        session.state().current_thought.as_deref(),
        Some(PLACEHOLDER_THOUGHT)
    );
    session.flush().await;
    let snapshot = gateway.snapshot().await;
    assert!(snapshot.values().all(|blob| !blob.contains("cat.jpg")));
    assert_eq!(
        session.current_screen(),
        &Screen::PhotoResult {
            photo: Photo::from_uri("file:///tmp/cat.jpg")
        }
    );
}

#[tokio::test]
async fn file_backed_session_survives_restart_with_latest_pet_list() {
    init_test_tracing();
    let dir = TempDir::new().unwrap();
    let gateway = Arc::new(FileKeyValueStore::new(dir.path().join("storage")));

    let (mut session, _) = launch(gateway.clone()).await;
    walk_onboarding(&mut session).await;
    session.navigate(NavEvent::AddPet).await.unwrap();
    session.save_pet(pet("Mia", "Cat")).await.unwrap();
    let rex = session.store().pets()[0].id.clone();
    session.delete_pet(rex).await.unwrap();
    session
        .navigate(NavEvent::PetManagementPrimary)
        .await
        .unwrap();
    session.shutdown().await;

    let reopened = Arc::new(FileKeyValueStore::new(dir.path().join("storage")));
    let (session, outcome) = launch(reopened).await;
    assert!(outcome.onboarding_complete);
    let names: Vec<_> = session.store().pets().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Mia"]);
    session.shutdown().await;
}

#[tokio::test]
async fn finishing_setup_without_pets_is_refused_until_one_is_added() {
    let gateway = Arc::new(InMemoryKeyValueStore::new());
    let (mut session, _) = launch(gateway.clone()).await;
    session.navigate(NavEvent::Start).await.unwrap();
    session.save_family_profile(family()).await.unwrap();
    assert!(!session.can_finish_onboarding());

    let result = session.navigate(NavEvent::PetManagementPrimary).await;

    assert!(matches!(result, Err(SessionError::NoCompanions)));
    assert!(!session.onboarding_complete());
    assert_eq!(session.nav().graph(), ScreenGraph::Onboarding);
    assert!(matches!(
        session.current_screen(),
        Screen::PetManagement {
            reached_from_onboarding: true
        }
    ));
    session.flush().await;
    assert_eq!(gateway.get(StorageKey::HasLaunched).await.unwrap(), None);

    session.navigate(NavEvent::AddPet).await.unwrap();
    session.save_pet(pet("Rex", "Dog")).await.unwrap();
    assert!(session.can_finish_onboarding());
    session
        .navigate(NavEvent::PetManagementPrimary)
        .await
        .unwrap();
    session.shutdown().await;

    let (session, outcome) = launch(gateway).await;
    assert!(outcome.onboarding_complete);
    assert_eq!(session.nav().graph(), ScreenGraph::Main);
    session.shutdown().await;
}
