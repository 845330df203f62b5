//! Directory form for registering a hospital.

use leptos::prelude::*;

use crate::state::hospital::HospitalDraft;

/// "Add Hospital" form. Validation and submission belong to the page; this
/// component only binds the draft fields and raises `on_create`.
#[component]
pub fn HospitalForm(
    draft: RwSignal<HospitalDraft>,
    error: RwSignal<Option<String>>,
    success: RwSignal<Option<String>>,
    on_create: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__title">"Add Hospital"</div>
            <label class="form__label">
                "Name"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || draft.get().name
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "License Number"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || draft.get().license_number
                    on:input=move |ev| draft.update(|d| d.license_number = event_target_value(&ev))
                    placeholder="e.g., HOSP001"
                />
            </label>
            <label class="form__label">
                "Street"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || draft.get().street
                    on:input=move |ev| draft.update(|d| d.street = event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "City"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || draft.get().city
                    on:input=move |ev| draft.update(|d| d.city = event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "State"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || draft.get().state
                    on:input=move |ev| draft.update(|d| d.state = event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Zip"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || draft.get().zip
                    on:input=move |ev| draft.update(|d| d.zip = event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Email"
                <input
                    class="form__input"
                    type="email"
                    prop:value=move || draft.get().contact_email
                    on:input=move |ev| draft.update(|d| d.contact_email = event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Phone"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || draft.get().contact_phone
                    on:input=move |ev| draft.update(|d| d.contact_phone = event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Password"
                <input
                    class="form__input"
                    type="password"
                    prop:value=move || draft.get().password
                    on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                />
            </label>
            {move || error.get().map(|msg| view! { <div class="alert alert--danger">{msg}</div> })}
            {move || success.get().map(|msg| view! { <div class="alert alert--success">{msg}</div> })}
            <button class="btn btn--primary" on:click=move |_| on_create.run(())>
                "Create Hospital"
            </button>
        </div>
    }
}
