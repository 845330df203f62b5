//! Hospital dashboard: patient lookup, registration, test results, and the
//! hospital directory.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::add_test_result_modal::AddTestResultModal;
use crate::components::edit_patient_modal::EditPatientModal;
use crate::components::hospital_form::HospitalForm;
use crate::components::hospital_list::HospitalList;
use crate::components::patient_details::PatientDetails;
use crate::components::patient_form::PatientForm;
use crate::net::api::Gateway;
use crate::net::error::ApiError;
use crate::net::types::{Hospital, Patient};
use crate::session::guard::{self, RouteVerdict};
use crate::session::store::SharedStore;
use crate::state::auth::AuthState;
use crate::state::hospital::{EditDraft, HospitalDraft, PatientDraft, TestResultDraft};

const SESSION_EXPIRED: &str = "Session expired. Please log in again.";

/// Hospital dashboard page. Only `hospital` credentials are admitted; the
/// guard re-runs on every navigation here and redirects everyone else to
/// the login page.
#[component]
pub fn HospitalsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SharedStore>();
    let gateway = expect_context::<Gateway>();
    let navigate = use_navigate();

    // Lookup card.
    let lookup_id = RwSignal::new(String::new());
    let lookup_error = RwSignal::new(None::<String>);
    let patient = RwSignal::new(None::<Patient>);

    // Add-patient form.
    let patient_draft = RwSignal::new(PatientDraft::default());
    let add_error = RwSignal::new(None::<String>);
    let add_success = RwSignal::new(None::<String>);

    // Test-result modal.
    let test_draft = RwSignal::new(TestResultDraft::default());
    let test_error = RwSignal::new(None::<String>);
    let test_success = RwSignal::new(None::<String>);
    let show_test_modal = RwSignal::new(false);

    // Edit modal, prefilled on lookup.
    let edit_draft = RwSignal::new(EditDraft::default());
    let edit_error = RwSignal::new(None::<String>);
    let edit_success = RwSignal::new(None::<String>);
    let show_edit_modal = RwSignal::new(false);

    // Hospital directory.
    let hospitals = RwSignal::new(Vec::<Hospital>::new());
    let hospital_draft = RwSignal::new(HospitalDraft::default());
    let directory_error = RwSignal::new(None::<String>);
    let hospital_error = RwSignal::new(None::<String>);
    let hospital_success = RwSignal::new(None::<String>);

    // Route guard: recomputed on every navigation to this view.
    {
        let store = store.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            match guard::admit(store.as_ref(), guard::HOSPITAL_VIEW) {
                RouteVerdict::Admitted(claims) => auth.update(|a| a.claims = Some(claims)),
                RouteVerdict::Redirected => navigate("/login", NavigateOptions::default()),
            }
        });
    }

    let load_directory = {
        let gateway = gateway.clone();
        let navigate = navigate.clone();
        Callback::new(move |()| {
            directory_error.set(None);
            let gateway = gateway.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match gateway.hospitals().await {
                    Ok(list) => hospitals.set(list),
                    Err(ApiError::Unauthorized) => {
                        directory_error.set(Some(SESSION_EXPIRED.to_owned()));
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        directory_error.set(Some(format!("Failed to fetch hospitals: {err}")));
                    }
                }
            });
        })
    };
    Effect::new(move || load_directory.run(()));

    let on_lookup = {
        let gateway = gateway.clone();
        let navigate = navigate.clone();
        Callback::new(move |()| {
            lookup_error.set(None);
            patient.set(None);
            let needle = lookup_id.get();
            let gateway = gateway.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match gateway.find_patients(needle.trim()).await {
                    Ok(found) => match found.into_iter().next() {
                        Some(first) => {
                            edit_draft.set(EditDraft::from_patient(&first));
                            patient.set(Some(first));
                        }
                        None => lookup_error.set(Some("Patient not found.".to_owned())),
                    },
                    Err(ApiError::Unauthorized) => {
                        lookup_error.set(Some(SESSION_EXPIRED.to_owned()));
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        lookup_error.set(Some(format!("Failed to fetch patient: {err}")));
                    }
                }
            });
        })
    };

    let on_add_patient = {
        let gateway = gateway.clone();
        let navigate = navigate.clone();
        Callback::new(move |()| {
            add_error.set(None);
            add_success.set(None);
            let body = match patient_draft.get().to_request() {
                Ok(body) => body,
                Err(msg) => {
                    add_error.set(Some(msg));
                    return;
                }
            };
            let gateway = gateway.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match gateway.create_patient(&body).await {
                    Ok(_) => {
                        add_success.set(Some("Patient added successfully!".to_owned()));
                        patient_draft.set(PatientDraft::default());
                    }
                    Err(ApiError::Unauthorized) => {
                        add_error.set(Some(SESSION_EXPIRED.to_owned()));
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => add_error.set(Some(format!("Failed to add patient: {err}"))),
                }
            });
        })
    };

    let on_add_test_result = {
        let gateway = gateway.clone();
        let navigate = navigate.clone();
        Callback::new(move |()| {
            test_error.set(None);
            test_success.set(None);
            let Some(selected) = patient.get() else {
                test_error.set(Some("No patient selected.".to_owned()));
                return;
            };
            let body = match test_draft.get().to_request() {
                Ok(body) => body,
                Err(msg) => {
                    test_error.set(Some(msg));
                    return;
                }
            };
            let gateway = gateway.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match gateway.add_test_result(selected.patient_id, &body).await {
                    Ok(_) => {
                        test_success.set(Some("Test result added successfully!".to_owned()));
                        test_draft.set(TestResultDraft::default());
                        show_test_modal.set(false);
                    }
                    Err(ApiError::Unauthorized) => {
                        test_error.set(Some(SESSION_EXPIRED.to_owned()));
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => test_error.set(Some(format!("Failed to add test result: {err}"))),
                }
            });
        })
    };

    let on_edit_patient = {
        let gateway = gateway.clone();
        let navigate = navigate.clone();
        Callback::new(move |()| {
            edit_error.set(None);
            edit_success.set(None);
            let Some(selected) = patient.get() else {
                edit_error.set(Some("No patient selected.".to_owned()));
                return;
            };
            let body = match edit_draft.get().to_request() {
                Ok(body) => body,
                Err(msg) => {
                    edit_error.set(Some(msg));
                    return;
                }
            };
            let gateway = gateway.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match gateway.update_patient(selected.patient_id, &body).await {
                    Ok(updated) => {
                        edit_success.set(Some("Patient details updated successfully!".to_owned()));
                        patient.set(Some(updated));
                        show_edit_modal.set(false);
                    }
                    Err(ApiError::Unauthorized) => {
                        edit_error.set(Some(SESSION_EXPIRED.to_owned()));
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        edit_error.set(Some(format!("Failed to update patient: {err}")));
                    }
                }
            });
        })
    };

    let on_create_hospital = {
        let gateway = gateway.clone();
        let navigate = navigate.clone();
        Callback::new(move |()| {
            hospital_error.set(None);
            hospital_success.set(None);
            let body = match hospital_draft.get().to_request() {
                Ok(body) => body,
                Err(msg) => {
                    hospital_error.set(Some(msg));
                    return;
                }
            };
            let gateway = gateway.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match gateway.create_hospital(&body).await {
                    Ok(_) => {
                        hospital_success.set(Some("Hospital created successfully!".to_owned()));
                        hospital_draft.set(HospitalDraft::default());
                        load_directory.run(());
                    }
                    Err(ApiError::Unauthorized) => {
                        hospital_error.set(Some(SESSION_EXPIRED.to_owned()));
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        hospital_error.set(Some(format!("Failed to create hospital: {err}")));
                    }
                }
            });
        })
    };

    let open_test_modal = Callback::new(move |()| {
        test_error.set(None);
        test_success.set(None);
        show_test_modal.set(true);
    });
    let close_test_modal = Callback::new(move |()| show_test_modal.set(false));

    let open_edit_modal = Callback::new(move |()| {
        edit_error.set(None);
        edit_success.set(None);
        show_edit_modal.set(true);
    });
    let close_edit_modal = Callback::new(move |()| show_edit_modal.set(false));

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
        <div class="hospitals-page">
            <h2 class="page-title">"Hospital Dashboard"</h2>

            <div class="card">
                <div class="card__title">"Find Patient"</div>
                <label class="form__label">
                    "Patient ID"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || lookup_id.get()
                        on:input=move |ev| lookup_id.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                on_lookup.run(());
                            }
                        }
                        placeholder="e.g., 2025-HOSP001-000001"
                    />
                </label>
                <button class="btn btn--primary" on:click=move |_| on_lookup.run(())>
                    "Search"
                </button>
            </div>

            {move || {
                lookup_error.get().map(|msg| view! { <div class="alert alert--danger">{msg}</div> })
            }}
            {move || {
                patient.get().map(|p| {
                    view! {
                        <PatientDetails
                            patient=p
                            on_add_test=open_test_modal
                            on_edit=open_edit_modal
                        />
                    }
                })
            }}

            <PatientForm
                draft=patient_draft
                error=add_error
                success=add_success
                on_submit=on_add_patient
            />

            {move || {
                directory_error
                    .get()
                    .map(|msg| view! { <div class="alert alert--danger">{msg}</div> })
            }}
            <HospitalList hospitals=hospitals/>
            <HospitalForm
                draft=hospital_draft
                error=hospital_error
                success=hospital_success
                on_create=on_create_hospital
            />

            <Show when=move || show_test_modal.get()>
                <AddTestResultModal
                    draft=test_draft
                    error=test_error
                    success=test_success
                    on_submit=on_add_test_result
                    on_close=close_test_modal
                />
            </Show>
            <Show when=move || show_edit_modal.get()>
                <EditPatientModal
                    draft=edit_draft
                    error=edit_error
                    success=edit_success
                    on_submit=on_edit_patient
                    on_close=close_edit_modal
                />
            </Show>

            <button class="btn hospitals-page__logout" on:click=move |_| on_logout.run(())>
                "Logout"
            </button>
        </div>
    }
}
