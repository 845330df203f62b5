use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::session::store::MemoryStore;

fn token(kind: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        serde_json::json!({ "sub": "s-1", "type": kind, "exp": 1_777_000_000u64 })
            .to_string()
            .as_bytes(),
    );
    format!("{header}.{payload}.signature")
}

#[test]
fn empty_store_redirects() {
    let store = MemoryStore::default();
    assert_eq!(admit(&store, HOSPITAL_VIEW), RouteVerdict::Redirected);
}

#[test]
fn wrong_subject_kind_redirects() {
    let store = MemoryStore::default();
    store.save(&token("patient"));
    assert_eq!(admit(&store, HOSPITAL_VIEW), RouteVerdict::Redirected);
}

#[test]
fn matching_subject_kind_is_admitted() {
    let store = MemoryStore::default();
    store.save(&token("hospital"));

    match admit(&store, HOSPITAL_VIEW) {
        RouteVerdict::Admitted(claims) => {
            assert_eq!(claims.kind, SubjectKind::Hospital);
            assert_eq!(claims.sub, "s-1");
        }
        RouteVerdict::Redirected => panic!("hospital credential should enter the hospital view"),
    }
}

#[test]
fn patient_view_admits_patients_only() {
    let store = MemoryStore::default();
    store.save(&token("patient"));
    assert!(matches!(admit(&store, PATIENT_VIEW), RouteVerdict::Admitted(_)));

    store.save(&token("hospital"));
    assert_eq!(admit(&store, PATIENT_VIEW), RouteVerdict::Redirected);
}

#[test]
fn malformed_credential_fails_closed() {
    let store = MemoryStore::default();
    store.save("not-a-token");
    assert_eq!(admit(&store, HOSPITAL_VIEW), RouteVerdict::Redirected);
}

#[test]
fn verdict_tracks_store_changes_between_navigations() {
    let store = MemoryStore::default();
    store.save(&token("hospital"));
    assert!(matches!(admit(&store, HOSPITAL_VIEW), RouteVerdict::Admitted(_)));

    store.clear();
    assert_eq!(admit(&store, HOSPITAL_VIEW), RouteVerdict::Redirected);
}
