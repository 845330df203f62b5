//! Hospital directory listing.

use leptos::prelude::*;

use crate::net::types::Hospital;

/// Renders the hospital directory, or a placeholder while it is empty.
#[component]
pub fn HospitalList(hospitals: RwSignal<Vec<Hospital>>) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__title">"Hospitals"</div>
            {move || {
                let list = hospitals.get();
                if list.is_empty() {
                    view! { <p class="muted">"No hospitals found."</p> }.into_any()
                } else {
                    view! {
                        <ul class="hospital-list">
                            {list
                                .into_iter()
                                .map(|h| {
                                    let license = format!(" (License: {})", h.license_number);
                                    let contacts = format!(
                                        "Email: {}, Phone: {}",
                                        h.contact_email.unwrap_or_else(|| "N/A".to_owned()),
                                        h.contact_phone.unwrap_or_else(|| "N/A".to_owned()),
                                    );
                                    let address = format!("Address: {}", h.address);
                                    view! {
                                        <li class="hospital-list__item">
                                            <strong>{h.name}</strong>
                                            {license}
                                            <br/>
                                            {contacts}
                                            <br/>
                                            {address}
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
