//! Top navigation bar for authenticated pages.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::format::initial;

/// Brand, role-aware navigation links, user identity, and logout.
/// Renders nothing while logged out.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let dashboard_path = move || {
        auth.get()
            .role()
            .map_or("/login", Role::dashboard_path)
            .to_owned()
    };

    let on_logout = move |_| {
        auth.update(AuthState::logout);
        crate::util::session::clear();
        #[cfg(feature = "hydrate")]
        {
            // Full navigation rather than a router push, for a clean slate.
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/login");
            }
        }
    };

    view! {
        <Show when=move || auth.get().is_authenticated()>
            <nav class="navbar">
                <a class="navbar__brand" href=dashboard_path>
                    "MediCare"
                </a>
                <div class="navbar__links">
                    <a class="navbar__link" href=dashboard_path>
                        "Dashboard"
                    </a>
                    <Show when=move || auth.get().role() == Some(Role::Patient)>
                        <a class="navbar__link" href="/patient/appointments">
                            "My Appointments"
                        </a>
                    </Show>
                </div>
                <span class="navbar__spacer"></span>
                {move || {
                    auth.get()
                        .user
                        .map(|user| {
                            let avatar = match user.photo_url.clone() {
                                Some(url) => view! {
                                    <img class="navbar__avatar" src=url alt=user.name.clone()/>
                                }
                                    .into_any(),
                                None => view! {
                                    <span class="navbar__avatar navbar__avatar--initial">
                                        {initial(&user.name)}
                                    </span>
                                }
                                    .into_any(),
                            };
                            view! {
                                <span class="navbar__user">
                                    {avatar}
                                    <span class="navbar__identity">
                                        <span class="navbar__name">{user.name}</span>
                                        <span class="navbar__role">{user.role.label()}</span>
                                    </span>
                                </span>
                            }
                        })
                }}
                <button class="btn navbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </nav>
        </Show>
    }
}
