//! Form buffers for the hospital dashboard.
//!
//! Each draft holds the raw strings bound to its inputs and converts to a
//! request body on submit. Conversion is where pre-dispatch validation
//! happens: a failing field yields the message shown next to the form and
//! the request is never built, so invalid input cannot reach the network
//! layer.

#[cfg(test)]
#[path = "hospital_test.rs"]
mod hospital_test;

use crate::net::types::{NewHospital, NewPatient, NewTestResult, Patient, PatientUpdate};
use crate::util::forms::{blank_to_none, json_or_absent};
use crate::util::validate::{is_valid_date, is_valid_json, is_valid_uuid};

/// Buffer behind the "Add New Patient" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatientDraft {
    pub user_id: String,
    pub unique_id: String,
    pub dob: String,
    pub gender: String,
    pub contact_phone: String,
    pub emergency_contact: String,
    pub created_by_hospital_id: String,
}

impl PatientDraft {
    /// Validate and convert into a `POST /hospitals/patients/` body.
    pub fn to_request(&self) -> Result<NewPatient, String> {
        if !is_valid_uuid(&self.user_id) {
            return Err("Invalid User ID format (must be UUID).".to_owned());
        }
        if !is_valid_uuid(&self.created_by_hospital_id) {
            return Err("Invalid Hospital ID format (must be UUID).".to_owned());
        }
        if self.unique_id.trim().is_empty() {
            return Err("Patient ID is required.".to_owned());
        }
        if !is_valid_date(&self.dob) {
            return Err("Invalid Date of Birth format (use YYYY-MM-DD).".to_owned());
        }
        if !self.emergency_contact.is_empty() && !is_valid_json(&self.emergency_contact) {
            return Err("Invalid Emergency Contact format (must be valid JSON).".to_owned());
        }

        Ok(NewPatient {
            user_id: self.user_id.clone(),
            unique_id: self.unique_id.trim().to_owned(),
            dob: self.dob.clone(),
            gender: blank_to_none(&self.gender),
            contact_phone: blank_to_none(&self.contact_phone),
            emergency_contact: json_or_absent(&self.emergency_contact),
            created_by_hospital_id: self.created_by_hospital_id.clone(),
        })
    }
}

/// Buffer behind the "Add Test Result" modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestResultDraft {
    pub test_type_id: String,
    pub result: String,
    pub test_date: String,
}

impl TestResultDraft {
    /// Validate and convert into a test-result body.
    pub fn to_request(&self) -> Result<NewTestResult, String> {
        if !is_valid_uuid(&self.test_type_id) {
            return Err("Invalid Test Type ID format (must be UUID).".to_owned());
        }
        if self.result.trim().is_empty() {
            return Err("Result cannot be empty.".to_owned());
        }
        if !is_valid_date(&self.test_date) {
            return Err("Invalid Test Date format (use YYYY-MM-DD).".to_owned());
        }

        Ok(NewTestResult {
            test_type_id: self.test_type_id.clone(),
            result: self.result.clone(),
            test_date: self.test_date.clone(),
        })
    }
}

/// Buffer behind the "Edit Details" modal, prefilled from the record being
/// edited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditDraft {
    pub gender: String,
    pub contact_phone: String,
    pub emergency_contact: String,
}

impl EditDraft {
    pub fn from_patient(patient: &Patient) -> Self {
        Self {
            gender: patient.gender.clone().unwrap_or_default(),
            contact_phone: patient.contact_phone.clone().unwrap_or_default(),
            emergency_contact: patient
                .emergency_contact
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }

    /// Validate and convert into a `PATCH` body. Blank fields become
    /// explicit nulls, which clear the stored values.
    pub fn to_request(&self) -> Result<PatientUpdate, String> {
        if !self.emergency_contact.is_empty() && !is_valid_json(&self.emergency_contact) {
            return Err("Invalid Emergency Contact format (must be valid JSON).".to_owned());
        }

        Ok(PatientUpdate {
            gender: blank_to_none(&self.gender),
            contact_phone: blank_to_none(&self.contact_phone),
            emergency_contact: json_or_absent(&self.emergency_contact),
        })
    }
}

/// Buffer behind the "Add Hospital" directory form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HospitalDraft {
    pub name: String,
    pub license_number: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub password: String,
}

impl HospitalDraft {
    /// Validate and convert into a `POST /hospitals/` body.
    pub fn to_request(&self) -> Result<NewHospital, String> {
        if self.name.trim().is_empty() {
            return Err("Hospital name is required.".to_owned());
        }
        if self.license_number.trim().is_empty() {
            return Err("License number is required.".to_owned());
        }
        if self.password.is_empty() {
            return Err("Password is required.".to_owned());
        }

        Ok(NewHospital {
            name: self.name.trim().to_owned(),
            license_number: self.license_number.trim().to_owned(),
            address: serde_json::json!({
                "street": self.street,
                "city": self.city,
                "state": self.state,
                "zip": self.zip,
            }),
            contact_email: blank_to_none(&self.contact_email),
            contact_phone: blank_to_none(&self.contact_phone),
            password: self.password.clone(),
        })
    }
}
