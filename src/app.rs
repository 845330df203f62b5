//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::net::api::Gateway;
use crate::pages::{hospitals::HospitalsPage, login::LoginPage, patients::PatientsPage};
use crate::session::store::{BrowserStore, SharedStore};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Injects the credential store and the request gateway built over it, then
/// sets up client-side routing. A `user` credential's landing path
/// (`/users`) has no route on purpose; it falls through to the not-found
/// fallback.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store: SharedStore = Arc::new(BrowserStore);
    let auth = RwSignal::new(AuthState::default());

    provide_context(store.clone());
    provide_context(Gateway::new(store));
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/patient-records-ui.css"/>
        <Title text="Patient Record System"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("hospitals") view=HospitalsPage/>
                <Route path=StaticSegment("patients") view=PatientsPage/>
            </Routes>
        </Router>
    }
}
