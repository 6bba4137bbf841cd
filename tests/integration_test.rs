//! Integration Tests - Repository CRUD Behaviour End to End
//!
//! Drives `JsonRepository<Employee>` against real store files in
//! temporary directories and checks what lands on disk.

use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, SystemTime};

use jsonfile_datastore::{
    CrudProvider, DataStoreError, Employee, JsonRepository, StoreConfig, UNASSIGNED_ID,
};

// ---- Helpers ----

fn open(dir: &Path) -> JsonRepository<Employee> {
    JsonRepository::open("Employee", &StoreConfig::new(dir)).unwrap()
}

fn open_enforced(dir: &Path) -> JsonRepository<Employee> {
    let config = StoreConfig::new(dir).with_enforce_identity(true);
    JsonRepository::open("Employee", &config).unwrap()
}

fn modified(path: &Path) -> SystemTime {
    fs::metadata(path).unwrap().modified().unwrap()
}

/// Push the store file's mtime an hour into the past.
fn age_store(path: &Path) -> SystemTime {
    let past = SystemTime::now() - Duration::from_secs(3600);
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(past)
        .unwrap();
    modified(path)
}

// ---- Scenario ----

#[test]
fn test_create_update_create_delete_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open(dir.path());

    let a = repo.create(Employee::new("A")).unwrap();
    assert_eq!(a.id, 1);

    repo.update(Employee::with_id(1, "B")).unwrap();
    assert_eq!(repo.read(1).unwrap(), Some(&Employee::with_id(1, "B")));

    repo.create(Employee::with_id(10, "C")).unwrap();
    assert_eq!(repo.read(10).unwrap(), Some(&Employee::with_id(10, "C")));
    assert_eq!(repo.read_all().unwrap().len(), 2);

    let gone = repo.delete(Employee::with_id(1, "B")).unwrap();
    assert_eq!(gone.id, UNASSIGNED_ID);
    assert!(repo.read(1).unwrap().is_none());
    assert_eq!(repo.read_all().unwrap(), [Employee::with_id(10, "C")]);
}

// ---- Identity assignment ----

#[test]
fn test_sequential_ids_and_no_gap_reuse() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open(dir.path());

    assert_eq!(repo.create(Employee::new("first")).unwrap().id, 1);
    assert_eq!(repo.create(Employee::new("second")).unwrap().id, 2);

    repo.delete(Employee::with_id(1, "first")).unwrap();
    assert_eq!(repo.create(Employee::new("third")).unwrap().id, 3);
}

#[test]
fn test_assignment_follows_manual_max() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open(dir.path());

    repo.create(Employee::with_id(10, "Biggie Smalls")).unwrap();
    let next = repo.create(Employee::new("Colin Kaepernick")).unwrap();
    assert_eq!(next.id, 11);
}

#[test]
fn test_assignment_after_max_id_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open(dir.path());
    repo.create(Employee::with_id(i64::MAX, "top")).unwrap();

    let err = repo.create(Employee::new("next")).unwrap_err();

    assert!(matches!(err, DataStoreError::IdentityExhausted { max: i64::MAX }));
    assert!(!err.is_invalid_argument());
    assert_eq!(repo.read_all().unwrap(), [Employee::with_id(i64::MAX, "top")]);
    // explicit ids are still accepted
    repo.create(Employee::with_id(7, "manual")).unwrap();
    assert_eq!(repo.read_all().unwrap().len(), 2);
}

#[test]
fn test_enforcement_rejects_any_nonzero_id() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open_enforced(dir.path());
    repo.create(Employee::new("existing")).unwrap();

    for id in [1, 2, 42, -7] {
        let err = repo.create(Employee::with_id(id, "x")).unwrap_err();
        assert!(matches!(err, DataStoreError::IdentityEnforced { id: got } if got == id));
        assert!(err.is_invalid_argument());
    }
    assert_eq!(repo.read_all().unwrap().len(), 1);
}

#[test]
fn test_enforcement_still_assigns_transient_ids() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open_enforced(dir.path());
    assert_eq!(repo.create(Employee::new("ok")).unwrap().id, 1);
}

#[test]
fn test_permissive_create_allows_duplicate_ids() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open(dir.path());

    repo.create(Employee::with_id(4, "one")).unwrap();
    repo.create(Employee::with_id(4, "two")).unwrap();

    let all = repo.read_all().unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|e| e.id == 4));
    // lookup returns the first in stored order
    assert_eq!(repo.read(4).unwrap().unwrap().name, "one");
}

// ---- Update / delete on missing records ----

#[test]
fn test_update_of_missing_id_still_rewrites_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open(dir.path());
    repo.create(Employee::new("kept")).unwrap();
    let before_content = fs::read_to_string(repo.store_file()).unwrap();
    let before = age_store(repo.store_file());

    let ghost = Employee::with_id(99, "ghost");
    let returned = repo.update(ghost.clone()).unwrap();

    assert_eq!(returned, ghost);
    assert!(modified(repo.store_file()) > before);
    assert_eq!(fs::read_to_string(repo.store_file()).unwrap(), before_content);
    assert!(repo.read(99).unwrap().is_none());
}

#[test]
fn test_delete_of_missing_id_resets_id_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open(dir.path());
    repo.create(Employee::new("kept")).unwrap();
    let before = age_store(repo.store_file());

    let returned = repo.delete(Employee::with_id(77, "nobody")).unwrap();

    assert_eq!(returned, Employee::new("nobody"));
    assert_eq!(modified(repo.store_file()), before);
    assert_eq!(repo.read_all().unwrap().len(), 1);
}

// ---- Store file lifecycle ----

#[test]
fn test_records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut repo = open(dir.path());
        repo.create(Employee::new("Englebert Humperdink")).unwrap();
        repo.create(Employee::with_id(10, "Biggie Smalls")).unwrap();
    }

    let mut reopened = open(dir.path());
    let names: Vec<_> = reopened
        .read_all()
        .unwrap()
        .iter()
        .map(|e| e.name.clone())
        .collect();
    assert_eq!(names, ["Englebert Humperdink", "Biggie Smalls"]);
}

#[test]
fn test_store_file_holds_json_array_of_records() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open(dir.path());
    repo.create(Employee::new("A")).unwrap();

    let json = fs::read_to_string(dir.path().join("Employee.datastore.json")).unwrap();
    assert_eq!(json, r#"[{"ID":1,"Name":"A"}]"#);
}

#[test]
fn test_blank_store_file_is_initialized() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Employee.datastore.json");
    fs::write(&path, "").unwrap();

    let mut repo = open(dir.path());
    assert!(repo.read_all().unwrap().is_empty());
    assert_eq!(fs::read_to_string(path).unwrap(), "[]");
}

#[test]
fn test_corrupt_store_fails_open() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Employee.datastore.json"), "[{\"ID\": ").unwrap();

    let err = JsonRepository::<Employee>::open("Employee", &StoreConfig::new(dir.path()))
        .unwrap_err();
    assert!(matches!(err, DataStoreError::Decode { .. }));
}

#[test]
fn test_corruption_after_open_fails_next_read() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open(dir.path());
    fs::write(repo.store_file(), "not json").unwrap();

    assert!(matches!(repo.read_all(), Err(DataStoreError::Decode { .. })));
    assert!(matches!(repo.read(1), Err(DataStoreError::Decode { .. })));
}

#[test]
fn test_repositories_with_different_names_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path());
    let mut staff = JsonRepository::<Employee>::open("Employee", &config).unwrap();
    let mut contractors = JsonRepository::<Employee>::open("Contractor", &config).unwrap();

    staff.create(Employee::new("s")).unwrap();
    assert!(contractors.read_all().unwrap().is_empty());
    assert!(dir.path().join("Contractor.datastore.json").exists());
}

#[test]
fn test_two_instances_on_one_file_last_writer_wins() {
    let dir = tempfile::tempdir().unwrap();
    let mut first = open(dir.path());
    let mut second = open(dir.path());

    second.create(Employee::new("from second")).unwrap();
    // `first` still holds the collection it loaded at open
    let from_first = first.create(Employee::new("from first")).unwrap();

    assert_eq!(from_first.id, 1);
    assert_eq!(second.read_all().unwrap(), [Employee::with_id(1, "from first")]);
}

// ---- Save (insert-or-update) ----

#[test]
fn test_save_dispatches_on_identity() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open(dir.path());

    let mut emp = repo.save(Employee::new("Englebert Humperdink")).unwrap();
    assert_eq!(emp.id, 1);

    emp.name = "King Kong".to_string();
    repo.save(emp).unwrap();
    assert_eq!(repo.read(1).unwrap().unwrap().name, "King Kong");
    assert_eq!(repo.read_all().unwrap().len(), 1);

    repo.save(Employee::with_id(10, "Biggie Smalls")).unwrap();
    assert_eq!(repo.read_all().unwrap().len(), 2);
}

#[test]
fn test_save_of_unknown_id_fails_under_enforcement() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open_enforced(dir.path());
    let emp = repo.save(Employee::new("known")).unwrap();

    repo.save(Employee::with_id(emp.id, "renamed")).unwrap();
    assert_eq!(repo.read(emp.id).unwrap().unwrap().name, "renamed");

    let err = repo.save(Employee::with_id(10, "unknown")).unwrap_err();
    assert!(err.is_invalid_argument());
}
