use std::path::Path;

use chrono::{TimeZone, Utc};
use inoreader_cli::{
    Error,
    management::{CredentialStore, credential_path_for},
    types::CredentialRecord,
};
use tempfile::tempdir;

fn seeded_record() -> CredentialRecord {
    CredentialRecord {
        client_id: "1000001234".to_string(),
        client_secret: "s3cr3t \"quoted\" ünïcode".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_save_then_load_preserves_application_credentials() {
    let dir = tempdir().unwrap();
    let store = CredentialStore::new(dir.path().join("credentials.json"));

    let mut record = seeded_record();
    record.access_token = "AT1".to_string();
    record.refresh_token = "RT1".to_string();
    record.token_type = "Bearer".to_string();
    record.expiry = Some(Utc.with_ymd_and_hms(2030, 5, 1, 12, 0, 0).unwrap());

    store.save(&record).await.unwrap();
    let loaded = store.load().await.unwrap();
    assert_eq!(loaded, record);

    // A second round trip must not alter anything either
    store.save(&loaded).await.unwrap();
    let reloaded = store.load().await.unwrap();
    assert_eq!(reloaded.client_id, record.client_id);
    assert_eq!(reloaded.client_secret, record.client_secret);
    assert_eq!(reloaded, loaded);
}

#[tokio::test]
async fn test_first_run_record_has_empty_token_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("credentials.json");
    std::fs::write(&path, r#"{"client_id": "abc", "client_secret": "xyz"}"#).unwrap();

    let record = CredentialStore::new(&path).load().await.unwrap();

    assert_eq!(record.client_id, "abc");
    assert_eq!(record.client_secret, "xyz");
    assert!(record.access_token.is_empty());
    assert!(record.refresh_token.is_empty());
    assert!(record.token_type.is_empty());
    assert!(record.expiry.is_none());
}

#[tokio::test]
async fn test_load_lists_every_missing_field() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("credentials.json");
    std::fs::write(&path, r#"{"client_id": "", "access_token": "AT1"}"#).unwrap();

    let err = CredentialStore::new(&path).load().await.unwrap_err();

    match &err {
        Error::ConfigIncomplete { fields, .. } => {
            assert_eq!(fields, &vec!["client_id", "client_secret"]);
        }
        other => panic!("expected ConfigIncomplete, got {other:?}"),
    }

    let message = err.to_string();
    assert!(message.contains("- client_id"));
    assert!(message.contains("- client_secret"));
}

#[tokio::test]
async fn test_load_reports_only_the_missing_secret() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("credentials.json");
    std::fs::write(&path, r#"{"client_id": "abc", "client_secret": "   "}"#).unwrap();

    let err = CredentialStore::new(&path).load().await.unwrap_err();

    assert!(matches!(
        err,
        Error::ConfigIncomplete { ref fields, .. } if fields == &vec!["client_secret"]
    ));
}

#[tokio::test]
async fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let store = CredentialStore::new(dir.path().join("nope.json"));

    let err = store.load().await.unwrap_err();

    assert!(matches!(err, Error::ConfigMissing(_)));
    assert!(err.is_config());
}

#[tokio::test]
async fn test_load_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("credentials.json");
    std::fs::write(&path, "client_id = abc").unwrap();

    let err = CredentialStore::new(&path).load().await.unwrap_err();

    assert!(matches!(err, Error::ConfigMalformed { .. }));
}

#[tokio::test]
async fn test_load_unreadable_path() {
    let dir = tempdir().unwrap();

    // A directory exists but cannot be read as a file
    let err = CredentialStore::new(dir.path()).load().await.unwrap_err();

    assert!(matches!(err, Error::ConfigUnreadable { .. }));
}

#[tokio::test]
async fn test_load_accepts_legacy_key_names() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("credentials.json");
    std::fs::write(&path, r#"{"app_id": "abc", "app_key": "xyz"}"#).unwrap();

    let record = CredentialStore::new(&path).load().await.unwrap();
    assert_eq!(record.client_id, "abc");
    assert_eq!(record.client_secret, "xyz");

    // Saving writes the current key names
    CredentialStore::new(&path).save(&record).await.unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("\"client_id\""));
    assert!(!written.contains("app_id"));
}

#[tokio::test]
async fn test_save_writes_all_six_fields_pretty_printed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("credentials.json");

    CredentialStore::new(&path).save(&seeded_record()).await.unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains('\n'));

    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "access_token",
            "client_id",
            "client_secret",
            "expiry",
            "refresh_token",
            "token_type"
        ]
    );
}

#[tokio::test]
async fn test_save_creates_parent_directories_and_leaves_no_temp_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inoreader-cli").join("credentials.json");

    CredentialStore::new(&path).save(&seeded_record()).await.unwrap();

    assert!(path.is_file());
    let entries: Vec<_> = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("credentials.json")]);
}

#[tokio::test]
async fn test_save_replaces_longer_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("credentials.json");
    std::fs::write(&path, "x".repeat(4096)).unwrap();

    let store = CredentialStore::new(&path);
    store.save(&seeded_record()).await.unwrap();

    assert_eq!(store.load().await.unwrap(), seeded_record());
}

#[tokio::test]
async fn test_save_fails_when_parent_is_a_file() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    let err = CredentialStore::new(blocker.join("credentials.json"))
        .save(&seeded_record())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ConfigWriteError { .. }));
}

#[cfg(unix)]
#[tokio::test]
async fn test_save_ignores_mode_of_leftover_temp_file() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let path = dir.path().join("credentials.json");
    let leftover = dir.path().join("credentials.json.tmp");
    std::fs::write(&leftover, "partial").unwrap();
    std::fs::set_permissions(&leftover, std::fs::Permissions::from_mode(0o644)).unwrap();

    let store = CredentialStore::new(&path);
    store.save(&seeded_record()).await.unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
    assert!(!leftover.exists());
    assert_eq!(store.load().await.unwrap(), seeded_record());
}

#[cfg(unix)]
#[tokio::test]
async fn test_save_restricts_permissions_of_existing_file() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let path = dir.path().join("credentials.json");
    std::fs::write(&path, "{}").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    CredentialStore::new(&path).save(&seeded_record()).await.unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[cfg(unix)]
#[tokio::test]
async fn test_save_restricts_permissions_of_new_file() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let path = dir.path().join("credentials.json");

    CredentialStore::new(&path).save(&seeded_record()).await.unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o077, 0);
}

#[test]
fn test_credential_path_per_platform() {
    let home = Path::new("/home/reader");

    assert_eq!(
        credential_path_for("linux", home),
        home.join(".local/share/inoreader-cli/credentials.json")
    );
    assert_eq!(
        credential_path_for("macos", home),
        home.join("Library/Application Support/inoreader-cli/credentials.json")
    );
    assert_eq!(
        credential_path_for("windows", home),
        home.join("AppData")
            .join("Roaming")
            .join("inoreader-cli")
            .join("credentials.json")
    );

    // Other unix-likes share the Linux layout
    assert_eq!(
        credential_path_for("freebsd", home),
        credential_path_for("linux", home)
    );
}
