//! Request and response bodies for the backend REST surface.
//!
//! Drafts carry the raw form strings they were validated from; responses
//! are fully typed. Server audit columns (`created_at`, `updated_at`) are
//! not consumed by any view and are left undeclared.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Successful `/token` response.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// A hospital in the directory.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Hospital {
    pub hospital_id: Uuid,
    pub name: String,
    pub license_number: String,
    pub address: Value,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

/// Body for `POST /hospitals/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewHospital {
    pub name: String,
    pub license_number: String,
    pub address: Value,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub password: String,
}

/// A patient record as the backend returns it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Patient {
    pub patient_id: Uuid,
    pub user_id: Uuid,
    pub unique_id: String,
    pub dob: NaiveDate,
    pub gender: Option<String>,
    pub contact_phone: Option<String>,
    pub emergency_contact: Option<Value>,
    pub created_by_hospital_id: Uuid,
}

/// Body for `POST /hospitals/patients/`.
///
/// Identifier fields stay the strings they were validated from; the backend
/// re-parses them authoritatively.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewPatient {
    pub user_id: String,
    pub unique_id: String,
    pub dob: String,
    pub gender: Option<String>,
    pub contact_phone: Option<String>,
    pub emergency_contact: Option<Value>,
    pub created_by_hospital_id: String,
}

/// Body for `PATCH /hospitals/patients/{id}`.
///
/// All three fields serialize even when `None`: an explicit null clears the
/// stored value, matching the edit form's semantics.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PatientUpdate {
    pub gender: Option<String>,
    pub contact_phone: Option<String>,
    pub emergency_contact: Option<Value>,
}

/// Body for `POST /hospitals/patients/{id}/test_results/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTestResult {
    pub test_type_id: String,
    pub result: String,
    pub test_date: String,
}

/// A recorded test result.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TestResult {
    pub test_result_id: Uuid,
    pub patient_id: Uuid,
    pub test_type_id: Uuid,
    pub result: String,
    pub test_date: NaiveDate,
    pub created_by_hospital_id: Uuid,
}
