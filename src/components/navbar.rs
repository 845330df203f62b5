//! Top navigation bar with brand link and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::store::SharedStore;
use crate::state::auth::AuthState;

/// Navigation bar shown on every page.
///
/// The logout button clears the stored credential, drops the decoded
/// session, and returns to the login page. It only renders while a session
/// is held.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SharedStore>();
    let navigate = use_navigate();

    let on_logout = Callback::new(move |()| {
        store.clear();
        auth.update(|a| a.claims = None);
        navigate("/login", NavigateOptions::default());
    });

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Patient Record System"</a>
            <span class="navbar__spacer"></span>
            <Show when=move || auth.get().claims.is_some()>
                <button class="btn navbar__logout" on:click=move |_| on_logout.run(())>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
