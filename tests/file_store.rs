use nutrigene_tools::catalog::Catalog;
use nutrigene_tools::config::Config;
use nutrigene_tools::session::Session;
use nutrigene_tools::store::{JsonFileStore, SessionStore};
use nutrigene_tools::{ApiError, NutriService};
use std::fs;
use std::sync::Arc;

// Sessions persisted as JSON files survive a fresh service and are erased on delete.

const GENOME: &str = "# This data file generated by 23andMe\n\
    # rsid\tchromosome\tposition\tgenotype\n\
    rs4988235\t2\t136608646\tCC\n\
    rs762551\t15\t75041917\tAC\n";

fn service_at(dir: &std::path::Path) -> NutriService<JsonFileStore> {
    let store = JsonFileStore::open(dir).expect("open store");
    NutriService::new(Arc::new(Catalog::builtin()), store, Config::default())
}

#[test]
fn session_round_trips_through_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let id = service_at(dir.path())
        .upload("genome.txt", GENOME.as_bytes())
        .expect("upload")
        .session_id;

    let reopened = service_at(dir.path());
    let report = reopened.analysis(&id).expect("analysis reloads");
    assert_eq!(report.findings.len(), 2);
    assert_eq!(report.summary.high_risk, 1);
    assert_eq!(report.summary.moderate_risk, 1);

    let files: Vec<_> = fs::read_dir(dir.path())
        .expect("list store")
        .filter_map(|entry| entry.ok())
        .collect();
    assert_eq!(files.len(), 1, "temp files must not be left behind");
}

#[test]
fn delete_unlinks_the_session_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = service_at(dir.path());
    let id = service
        .upload("genome.txt", GENOME.as_bytes())
        .expect("upload")
        .session_id;
    assert!(dir.path().join(format!("{}.json", id)).exists());

    service.delete(&id).expect("delete");
    assert!(!dir.path().join(format!("{}.json", id)).exists());
    assert!(matches!(service.recommendations(&id), Err(ApiError::NotFound(_))));
}

#[test]
fn non_uuid_ids_never_touch_the_filesystem() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = JsonFileStore::open(dir.path()).expect("open store");
    assert!(matches!(store.load("../../etc/passwd"), Err(ApiError::NotFound(_))));
    assert!(matches!(store.delete("not-a-session"), Err(ApiError::NotFound(_))));
}

#[test]
fn update_after_delete_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = service_at(dir.path());
    let id = service
        .upload("genome.txt", GENOME.as_bytes())
        .expect("upload")
        .session_id;

    let store = service.store().clone();
    store.delete(&id).expect("delete");
    let result = store.update(&id, &mut |session: &mut Session| session.original_name.push_str(".edited"));
    assert!(matches!(result, Err(ApiError::NotFound(_))));
    assert_eq!(fs::read_dir(dir.path()).expect("list store").count(), 0);
}

#[test]
fn update_rewrites_the_stored_session() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = service_at(dir.path());
    let id = service
        .upload("genome.txt", GENOME.as_bytes())
        .expect("upload")
        .session_id;

    let updated = service
        .store()
        .update(&id, &mut |session: &mut Session| session.original_name = "renamed.txt".to_string())
        .expect("update");
    assert_eq!(updated.original_name, "renamed.txt");
    assert_eq!(service_at(dir.path()).status(&id).expect("status").original_name, "renamed.txt");
}
