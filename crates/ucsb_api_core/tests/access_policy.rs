use std::io::Write;
use ucsb_api_core::{authorize, AccessDenied, Capability, CredentialError, CredentialStore, Role};

const CREDENTIALS: &str = r#"
admin_emails = ["admin@ucsb.edu"]

[[users]]
token = "admin-token"
email = "admin@ucsb.edu"

[[users]]
token = "user-token"
email = "student@ucsb.edu"
"#;

fn load_store() -> CredentialStore {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(CREDENTIALS.as_bytes()).expect("write credentials");
    CredentialStore::load(file.path()).expect("load credentials")
}

#[test]
fn unauthenticated_callers_are_denied_everything() {
    let store = load_store();
    for capability in [Capability::Read, Capability::Write] {
        let principal = store.resolve_authorization("Bearer unknown-token");
        assert_eq!(
            authorize(principal, capability),
            Err(AccessDenied::Unauthenticated)
        );
    }
}

#[test]
fn read_role_is_denied_writes() {
    let store = load_store();
    let user = store.resolve_authorization("Bearer user-token");

    authorize(user, Capability::Read).expect("user may read");
    let err = authorize(user, Capability::Write).expect_err("user may not write");
    assert!(matches!(err, AccessDenied::MissingCapability { ref email, .. } if email == "student@ucsb.edu"));
}

#[test]
fn write_role_implies_read() {
    let store = load_store();
    let admin = store.resolve_authorization("Bearer admin-token").expect("admin");

    assert!(admin.has_role(Role::User));
    assert!(admin.has_role(Role::Admin));
    for _ in 0..3 {
        authorize(Some(admin), Capability::Read).expect("admin may read");
        authorize(Some(admin), Capability::Write).expect("admin may write");
    }
}

#[test]
fn missing_credential_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = CredentialStore::load(dir.path().join("absent.toml")).expect_err("missing file");
    assert!(matches!(err, CredentialError::Io(_)));
}
