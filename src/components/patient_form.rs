//! Hospital-side form for registering a new patient.

use leptos::prelude::*;

use crate::state::hospital::PatientDraft;

/// "Add New Patient" form. The page validates the draft on submit; this
/// component binds the fields and raises `on_submit`.
#[component]
pub fn PatientForm(
    draft: RwSignal<PatientDraft>,
    error: RwSignal<Option<String>>,
    success: RwSignal<Option<String>>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__title">"Add New Patient"</div>
            <label class="form__label">
                "User ID (UUID)"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || draft.get().user_id
                    on:input=move |ev| draft.update(|d| d.user_id = event_target_value(&ev))
                    placeholder="e.g., 550e8400-e29b-41d4-a716-446655440000"
                />
            </label>
            <label class="form__label">
                "Patient ID"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || draft.get().unique_id
                    on:input=move |ev| draft.update(|d| d.unique_id = event_target_value(&ev))
                    placeholder="e.g., 2025-HOSP001-000002"
                />
            </label>
            <label class="form__label">
                "Date of Birth (YYYY-MM-DD)"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || draft.get().dob
                    on:input=move |ev| draft.update(|d| d.dob = event_target_value(&ev))
                    placeholder="e.g., 1990-01-01"
                />
            </label>
            <label class="form__label">
                "Gender"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || draft.get().gender
                    on:input=move |ev| draft.update(|d| d.gender = event_target_value(&ev))
                    placeholder="e.g., Male"
                />
            </label>
            <label class="form__label">
                "Contact Phone"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || draft.get().contact_phone
                    on:input=move |ev| draft.update(|d| d.contact_phone = event_target_value(&ev))
                    placeholder="e.g., 555-123-4567"
                />
            </label>
            <label class="form__label">
                "Emergency Contact (JSON)"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || draft.get().emergency_contact
                    on:input=move |ev| {
                        draft.update(|d| d.emergency_contact = event_target_value(&ev));
                    }
                    placeholder=r#"e.g., {"name": "John Doe", "phone": "555-987-6543"}"#
                />
            </label>
            <label class="form__label">
                "Hospital ID (UUID)"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || draft.get().created_by_hospital_id
                    on:input=move |ev| {
                        draft.update(|d| d.created_by_hospital_id = event_target_value(&ev));
                    }
                    placeholder="e.g., 550e8400-e29b-41d4-a716-446655440000"
                />
            </label>
            {move || error.get().map(|msg| view! { <div class="alert alert--danger">{msg}</div> })}
            {move || success.get().map(|msg| view! { <div class="alert alert--success">{msg}</div> })}
            <button class="btn btn--primary" on:click=move |_| on_submit.run(())>
                "Add Patient"
            </button>
        </div>
    }
}
