//! Modal dialog for editing a patient's mutable fields.

use leptos::prelude::*;

use crate::state::hospital::EditDraft;

/// "Edit Details" dialog over the selected patient. Blank fields clear the
/// stored values on submit.
#[component]
pub fn EditPatientModal(
    draft: RwSignal<EditDraft>,
    error: RwSignal<Option<String>>,
    success: RwSignal<Option<String>>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>"Edit Patient Details"</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(())>
                        "\u{d7}"
                    </button>
                </div>
                <label class="dialog__label">
                    "Gender"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.get().gender
                        on:input=move |ev| draft.update(|d| d.gender = event_target_value(&ev))
                        placeholder="e.g., Male"
                    />
                </label>
                <label class="dialog__label">
                    "Contact Phone"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.get().contact_phone
                        on:input=move |ev| draft.update(|d| d.contact_phone = event_target_value(&ev))
                        placeholder="e.g., 555-123-4567"
                    />
                </label>
                <label class="dialog__label">
                    "Emergency Contact (JSON)"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.get().emergency_contact
                        on:input=move |ev| {
                            draft.update(|d| d.emergency_contact = event_target_value(&ev));
                        }
                        placeholder=r#"e.g., {"name": "John Doe", "phone": "555-987-6543"}"#
                    />
                </label>
                {move || error.get().map(|msg| view! { <div class="alert alert--danger">{msg}</div> })}
                {move || success.get().map(|msg| view! { <div class="alert alert--success">{msg}</div> })}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_submit.run(())>
                        "Save Changes"
                    </button>
                </div>
            </div>
        </div>
    }
}
