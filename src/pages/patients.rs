//! Patient dashboard: the logged-in patient's own record and test results.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::patient_details::PatientDetails;
use crate::net::api::Gateway;
use crate::net::error::ApiError;
use crate::net::types::{Patient, TestResult};
use crate::session::guard::{self, RouteVerdict};
use crate::session::store::SharedStore;
use crate::state::auth::AuthState;

const SESSION_EXPIRED: &str = "Session expired. Please log in again.";

/// Patient dashboard page. Only `patient` credentials are admitted; on
/// admission it fetches the caller's record and test results.
#[component]
pub fn PatientsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SharedStore>();
    let gateway = expect_context::<Gateway>();
    let navigate = use_navigate();

    let patient = RwSignal::new(None::<Patient>);
    let results = RwSignal::new(Vec::<TestResult>::new());
    let error = RwSignal::new(None::<String>);

    // Guard, then fetch. Re-runs per navigation, not per render.
    {
        let store = store.clone();
        let navigate = navigate.clone();
        let gateway = gateway.clone();
        Effect::new(move || {
            match guard::admit(store.as_ref(), guard::PATIENT_VIEW) {
                RouteVerdict::Admitted(claims) => {
                    auth.update(|a| a.claims = Some(claims));
                    let gateway = gateway.clone();
                    let navigate = navigate.clone();
                    leptos::task::spawn_local(async move {
                        match gateway.my_record().await {
                            Ok(record) => patient.set(Some(record)),
                            Err(ApiError::Unauthorized) => {
                                error.set(Some(SESSION_EXPIRED.to_owned()));
                                navigate("/login", NavigateOptions::default());
                                return;
                            }
                            Err(err) => {
                                error.set(Some(format!("Failed to fetch patient data: {err}")));
                                return;
                            }
                        }
                        match gateway.my_test_results().await {
                            Ok(list) => results.set(list),
                            Err(ApiError::Unauthorized) => {
                                error.set(Some(SESSION_EXPIRED.to_owned()));
                                navigate("/login", NavigateOptions::default());
                            }
                            Err(err) => {
                                error.set(Some(format!("Failed to fetch patient data: {err}")));
                            }
                        }
                    });
                }
                RouteVerdict::Redirected => navigate("/login", NavigateOptions::default()),
            }
        });
    }

    let on_logout = {
        let store = store.clone();
        let navigate = navigate.clone();
        Callback::new(move |()| {
            store.clear();
            auth.update(|a| a.claims = None);
            navigate("/login", NavigateOptions::default());
        })
    };

    view! {
        <div class="patients-page">
            <h2 class="page-title">"Patient Dashboard"</h2>

            {move || error.get().map(|msg| view! { <div class="alert alert--danger">{msg}</div> })}

            {move || {
                if patient.get().is_none() && error.get().is_none() {
                    Some(view! { <p class="muted">"Loading..."</p> })
                } else {
                    None
                }
            }}

            {move || patient.get().map(|p| view! { <PatientDetails patient=p/> })}

            <h4 class="section-title">"Test Results"</h4>
            {move || {
                if results.get().is_empty() && error.get().is_none() {
                    Some(view! { <p class="muted">"No test results found."</p> })
                } else {
                    None
                }
            }}
            <table class="results-table">
                <thead>
                    <tr>
                        <th>"Test Type ID"</th>
                        <th>"Result"</th>
                        <th>"Test Date"</th>
                        <th>"Hospital ID"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        results
                            .get()
                            .into_iter()
                            .map(|r| {
                                view! {
                                    <tr>
                                        <td>{r.test_type_id.to_string()}</td>
                                        <td>{r.result}</td>
                                        <td>{r.test_date.to_string()}</td>
                                        <td>{r.created_by_hospital_id.to_string()}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>

            <button class="btn patients-page__logout" on:click=move |_| on_logout.run(())>
                "Logout"
            </button>
        </div>
    }
}
