//! Login page with role picker and email/password form.

use leptos::prelude::*;

use crate::forms::auth::{LoginErrors, LoginForm};
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};

use crate::components::toast_host::notify;

/// `/login` — public. A successful login persists the session and routes
/// to the dashboard matching the account's role.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Patient);
    let errors = RwSignal::new(LoginErrors::default());
    let show_password = RwSignal::new(false);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = Callback::new(move |()| {
        let form = LoginForm {
            email: email.get(),
            password: password.get(),
            role: role.get(),
        };
        let validation = form.validate();
        errors.set(validation.clone());
        if !validation.is_valid() || pending.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            let req = form.to_request();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&req).await {
                    Ok(payload) => {
                        crate::util::session::save(&payload.user, &payload.token);
                        let path = payload.user.role.dashboard_path();
                        auth.update(|a| a.login(payload.user, payload.token));
                        notify(toasts, ToastKind::Success, "Login successful!");
                        navigate(path, leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        pending.set(false);
                        notify(toasts, ToastKind::Error, err.user_message("Login failed"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
        }
    });

    let role_card = move |value: Role, label: &'static str| {
        view! {
            <button
                type="button"
                class=move || {
                    if role.get() == value {
                        "role-card role-card--selected"
                    } else {
                        "role-card"
                    }
                }
                on:click=move |_| role.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__header">
                <h1>"MediCare"</h1>
                <p>"Sign in to your account"</p>
            </div>

            <div class="auth-card">
                <h2>"Welcome Back"</h2>
                <form
                    class="auth-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <fieldset class="auth-form__roles">
                        <legend>"Login as"</legend>
                        {role_card(Role::Patient, "Patient")}
                        {role_card(Role::Doctor, "Doctor")}
                    </fieldset>

                    <label class="auth-form__field">
                        "Email"
                        <input
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    {move || {
                        errors
                            .get()
                            .email
                            .map(|msg| view! { <p class="auth-form__error">{msg}</p> })
                    }}

                    <label class="auth-form__field auth-form__field--password">
                        "Password"
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="auth-form__toggle"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </label>
                    {move || {
                        errors
                            .get()
                            .password
                            .map(|msg| view! { <p class="auth-form__error">{msg}</p> })
                    }}

                    <button
                        type="submit"
                        class="btn btn--primary auth-form__submit"
                        disabled=move || pending.get()
                    >
                        "Sign In"
                    </button>
                </form>

                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href="/register">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
