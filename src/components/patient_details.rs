//! Read-only card showing one patient record.

use leptos::prelude::*;

use crate::net::types::Patient;

/// Patient details card.
///
/// The hospital dashboard passes the two action callbacks to open its
/// modals; the patient dashboard omits them and gets a plain card.
#[component]
pub fn PatientDetails(
    patient: Patient,
    #[prop(optional, into)] on_add_test: Option<Callback<()>>,
    #[prop(optional, into)] on_edit: Option<Callback<()>>,
) -> impl IntoView {
    let dash = || "-".to_owned();
    let gender = patient.gender.clone().unwrap_or_else(dash);
    let phone = patient.contact_phone.clone().unwrap_or_else(dash);
    let emergency = patient
        .emergency_contact
        .as_ref()
        .map_or_else(dash, ToString::to_string);

    view! {
        <div class="card">
            <div class="card__title">"Patient Details"</div>
            <p><strong>"Patient ID: "</strong>{patient.unique_id.clone()}</p>
            <p><strong>"Date of Birth: "</strong>{patient.dob.to_string()}</p>
            <p><strong>"Gender: "</strong>{gender}</p>
            <p><strong>"Contact Phone: "</strong>{phone}</p>
            <p><strong>"Emergency Contact: "</strong>{emergency}</p>
            <p><strong>"Hospital ID: "</strong>{patient.created_by_hospital_id.to_string()}</p>
            {on_add_test.map(|cb| {
                view! {
                    <button class="btn btn--primary" on:click=move |_| cb.run(())>
                        "Add Test Result"
                    </button>
                }
            })}
            {on_edit.map(|cb| {
                view! {
                    <button class="btn btn--primary" on:click=move |_| cb.run(())>
                        "Edit Details"
                    </button>
                }
            })}
        </div>
    }
}
