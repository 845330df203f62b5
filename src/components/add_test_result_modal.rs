//! Modal dialog for recording a test result.

use leptos::prelude::*;

use crate::state::hospital::TestResultDraft;

/// "Add Test Result" dialog. Clicking the backdrop or the close button
/// raises `on_close`; the submit button raises `on_submit` and the page
/// validates the draft.
#[component]
pub fn AddTestResultModal(
    draft: RwSignal<TestResultDraft>,
    error: RwSignal<Option<String>>,
    success: RwSignal<Option<String>>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>"Add Test Result"</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(())>
                        "\u{d7}"
                    </button>
                </div>
                <label class="dialog__label">
                    "Test Type ID (UUID)"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.get().test_type_id
                        on:input=move |ev| draft.update(|d| d.test_type_id = event_target_value(&ev))
                        placeholder="e.g., 550e8400-e29b-41d4-a716-446655440000"
                    />
                </label>
                <label class="dialog__label">
                    "Result"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.get().result
                        on:input=move |ev| draft.update(|d| d.result = event_target_value(&ev))
                        placeholder="e.g., Positive"
                    />
                </label>
                <label class="dialog__label">
                    "Test Date (YYYY-MM-DD)"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.get().test_date
                        on:input=move |ev| draft.update(|d| d.test_date = event_target_value(&ev))
                        placeholder="e.g., 2025-04-27"
                    />
                </label>
                {move || error.get().map(|msg| view! { <div class="alert alert--danger">{msg}</div> })}
                {move || success.get().map(|msg| view! { <div class="alert alert--success">{msg}</div> })}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_submit.run(())>
                        "Add Test Result"
                    </button>
                </div>
            </div>
        </div>
    }
}
