//! Login page for hospital staff and patients.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::Gateway;
use crate::session::claims::SubjectKind;
use crate::session::store::SharedStore;

/// Login page.
///
/// Exchanges credentials for a bearer token, persists it, and navigates to
/// the landing path of the granted subject kind. The gateway returns the
/// token without storing it; persisting is this page's decision.
#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SharedStore>();
    let gateway = expect_context::<Gateway>();
    let navigate = use_navigate();

    let login_type = RwSignal::new("hospital".to_owned());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if pending.get() {
            return;
        }
        error.set(None);

        let Some(kind) = SubjectKind::from_grant(&login_type.get()) else {
            error.set(Some("Choose a login type.".to_owned()));
            return;
        };
        let user = username.get();
        let pass = password.get();
        pending.set(true);

        let store = store.clone();
        let gateway = gateway.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match gateway.login(&user, &pass, kind).await {
                Ok(credential) => {
                    store.save(&credential);
                    navigate(kind.landing_path(), NavigateOptions::default());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            pending.set(false);
        });
    });

    let username_label = move || {
        if login_type.get() == "patient" {
            "Patient ID"
        } else {
            "License Number"
        }
    };
    let username_placeholder = move || {
        if login_type.get() == "patient" {
            "e.g., 2025-HOSP001-000001"
        } else {
            "e.g., HOSP001"
        }
    };

    view! {
        <div class="login-page">
            <div class="card login-page__card">
                <h2 class="card__title">"Patient Record System Login"</h2>
                <label class="form__label">
                    "Login Type"
                    <select
                        class="form__input"
                        prop:value=move || login_type.get()
                        on:change=move |ev| login_type.set(event_target_value(&ev))
                    >
                        <option value="hospital">"Hospital"</option>
                        <option value="patient">"Patient"</option>
                    </select>
                </label>
                <label class="form__label">
                    {username_label}
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                        placeholder=username_placeholder
                    />
                </label>
                <label class="form__label">
                    "Password"
                    <input
                        class="form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                        placeholder="Enter your password"
                    />
                </label>
                {move || error.get().map(|msg| view! { <div class="alert alert--danger">{msg}</div> })}
                <button
                    class="btn btn--primary login-page__submit"
                    prop:disabled=move || pending.get()
                    on:click=move |_| submit.run(())
                >
                    {move || if pending.get() { "Logging in..." } else { "Login" }}
                </button>
            </div>
        </div>
    }
}
