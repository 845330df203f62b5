//! Request gateway for the patient-record backend.
//!
//! The sole path through which the client talks to the server. Every method
//! attaches the stored credential as a bearer header before dispatch and
//! classifies failure as [`ApiError::Unauthorized`], [`ApiError::Rejected`],
//! or [`ApiError::Unreachable`]. The 401 handling — clear the store so the
//! views only have to redirect — lives here once instead of in every caller.
//!
//! Real HTTP goes through `gloo-net` under the `hydrate` feature; other
//! builds resolve every call to `Unreachable` so server rendering degrades
//! without faulting.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use uuid::Uuid;

use super::error::{ApiError, detail_message};
#[cfg(feature = "hydrate")]
use super::types::TokenResponse;
use super::types::{
    Hospital, NewHospital, NewPatient, NewTestResult, Patient, PatientUpdate, TestResult,
};
use crate::session::claims::SubjectKind;
use crate::session::store::SharedStore;

/// Typed client over the backend REST surface.
///
/// Cheap to clone; clones share the injected credential store.
#[derive(Clone)]
pub struct Gateway {
    store: SharedStore,
}

impl Gateway {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// The credential store this gateway reads and, on 401, clears.
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Form-encoded body for the `/token` request.
    fn login_form_body(kind: SubjectKind, username: &str, password: &str) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("grant_type", kind.as_grant())
            .append_pair("username", username)
            .append_pair("password", password)
            .finish()
    }

    /// Classify a failed resource response, clearing the store on 401.
    fn settle_failure(&self, status: u16, body: &str) -> ApiError {
        if status == 401 {
            leptos::logging::warn!("credential rejected with 401, clearing stored session");
            self.store.clear();
            return ApiError::Unauthorized;
        }
        ApiError::Rejected(
            detail_message(body).unwrap_or_else(|| format!("request failed with status {status}")),
        )
    }

    /// Classify a failed `/token` response. A 401 here means the submitted
    /// credentials were wrong, not that a session went stale, so login
    /// failures never clear the store and never yield `Unauthorized`.
    fn login_failure(body: &str) -> ApiError {
        ApiError::Rejected(
            detail_message(body)
                .unwrap_or_else(|| "Login failed. Please check your credentials.".to_owned()),
        )
    }
}

#[cfg(feature = "hydrate")]
impl Gateway {
    /// Exchange credentials for a bearer token via `POST /token`.
    ///
    /// The token is returned, not stored; persisting it is the login view's
    /// decision.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        kind: SubjectKind,
    ) -> Result<String, ApiError> {
        let body = Self::login_form_body(kind, username, password);
        let request = gloo_net::http::Request::post("/token")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::login_failure(&body));
        }
        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;
        Ok(token.access_token)
    }

    /// `GET /hospitals/` — the hospital directory.
    pub async fn hospitals(&self) -> Result<Vec<Hospital>, ApiError> {
        self.get_json("/hospitals/").await
    }

    /// `POST /hospitals/` — register a hospital.
    pub async fn create_hospital(&self, draft: &NewHospital) -> Result<Hospital, ApiError> {
        self.post_json("/hospitals/", draft).await
    }

    /// `GET /hospitals/patients/?unique_id=...` — look up patients by their
    /// human-facing id. An unknown id is an empty list, not an error.
    pub async fn find_patients(&self, unique_id: &str) -> Result<Vec<Patient>, ApiError> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("unique_id", unique_id)
            .finish();
        self.get_json(&format!("/hospitals/patients/?{query}")).await
    }

    /// `POST /hospitals/patients/` — register a patient under hospital
    /// authority.
    pub async fn create_patient(&self, draft: &NewPatient) -> Result<Patient, ApiError> {
        self.post_json("/hospitals/patients/", draft).await
    }

    /// `PATCH /hospitals/patients/{id}` — update editable patient fields.
    pub async fn update_patient(
        &self,
        patient_id: Uuid,
        update: &PatientUpdate,
    ) -> Result<Patient, ApiError> {
        self.patch_json(&format!("/hospitals/patients/{patient_id}"), update)
            .await
    }

    /// `POST /hospitals/patients/{id}/test_results/` — record a test result.
    pub async fn add_test_result(
        &self,
        patient_id: Uuid,
        draft: &NewTestResult,
    ) -> Result<TestResult, ApiError> {
        self.post_json(
            &format!("/hospitals/patients/{patient_id}/test_results/"),
            draft,
        )
        .await
    }

    /// `GET /patients/me/` — the logged-in patient's own record.
    pub async fn my_record(&self) -> Result<Patient, ApiError> {
        self.get_json("/patients/me/").await
    }

    /// `GET /patients/test_results/` — the logged-in patient's results.
    pub async fn my_test_results(&self) -> Result<Vec<TestResult>, ApiError> {
        self.get_json("/patients/test_results/").await
    }

    fn authorize(&self, request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.store.load() {
            Some(credential) => request.header("Authorization", &format!("Bearer {credential}")),
            // Dispatch unauthenticated and let the backend reject it.
            None => request,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorize(gloo_net::http::Request::get(path))
            .send()
            .await
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;
        self.read_json(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let request = self
            .authorize(gloo_net::http::Request::post(path))
            .json(body)
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;
        self.read_json(response).await
    }

    async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let request = self
            .authorize(gloo_net::http::Request::patch(path))
            .json(body)
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;
        self.read_json(response).await
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        &self,
        response: gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.settle_failure(response.status(), &body));
        }
        // A 2xx body that fails to parse is a broken transport contract,
        // not a caller-correctable rejection.
        response.json().await.map_err(|e| {
            leptos::logging::warn!("response body did not match the expected shape: {e}");
            ApiError::Unreachable(e.to_string())
        })
    }
}

#[cfg(not(feature = "hydrate"))]
impl Gateway {
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        kind: SubjectKind,
    ) -> Result<String, ApiError> {
        let _ = (username, password, kind);
        Err(ApiError::offline())
    }

    pub async fn hospitals(&self) -> Result<Vec<Hospital>, ApiError> {
        Err(ApiError::offline())
    }

    pub async fn create_hospital(&self, draft: &NewHospital) -> Result<Hospital, ApiError> {
        let _ = draft;
        Err(ApiError::offline())
    }

    pub async fn find_patients(&self, unique_id: &str) -> Result<Vec<Patient>, ApiError> {
        let _ = unique_id;
        Err(ApiError::offline())
    }

    pub async fn create_patient(&self, draft: &NewPatient) -> Result<Patient, ApiError> {
        let _ = draft;
        Err(ApiError::offline())
    }

    pub async fn update_patient(
        &self,
        patient_id: Uuid,
        update: &PatientUpdate,
    ) -> Result<Patient, ApiError> {
        let _ = (patient_id, update);
        Err(ApiError::offline())
    }

    pub async fn add_test_result(
        &self,
        patient_id: Uuid,
        draft: &NewTestResult,
    ) -> Result<TestResult, ApiError> {
        let _ = (patient_id, draft);
        Err(ApiError::offline())
    }

    pub async fn my_record(&self) -> Result<Patient, ApiError> {
        Err(ApiError::offline())
    }

    pub async fn my_test_results(&self) -> Result<Vec<TestResult>, ApiError> {
        Err(ApiError::offline())
    }
}
