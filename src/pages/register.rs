//! Registration page with patient / doctor tabs.

use leptos::prelude::*;

use crate::forms::auth::{DoctorRegisterForm, PatientRegisterForm, RegisterErrors};
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};

use crate::components::toast_host::notify;

/// Which registration form is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Tab {
    #[default]
    Patient,
    Doctor,
}

/// `/register` — public. Registration behaves like login on success: the
/// session is persisted and the new account lands on its role dashboard.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let tab = RwSignal::new(Tab::Patient);
    let patient_form = RwSignal::new(PatientRegisterForm::default());
    let patient_errors = RwSignal::new(RegisterErrors::default());
    let doctor_form = RwSignal::new(DoctorRegisterForm::default());
    let doctor_errors = RwSignal::new(RegisterErrors::default());
    let show_password = RwSignal::new(false);
    let pending = RwSignal::new(false);

    // Doctor registration picks a specialization from the backend list.
    let specializations = LocalResource::new(|| async {
        crate::net::api::fetch_specializations().await.unwrap_or_default()
    });

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit_patient = Callback::new(move |()| {
        let form = patient_form.get();
        let validation = form.validate();
        patient_errors.set(validation.clone());
        if !validation.is_valid() || pending.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            let req = form.to_request();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register_patient(&req).await {
                    Ok(payload) => {
                        crate::util::session::save(&payload.user, &payload.token);
                        auth.update(|a| a.login(payload.user, payload.token));
                        notify(toasts, ToastKind::Success, "Registration successful!");
                        navigate("/patient/dashboard", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        pending.set(false);
                        notify(toasts, ToastKind::Error, err.user_message("Registration failed"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
        }
    });

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit_doctor = Callback::new(move |()| {
        let form = doctor_form.get();
        let validation = form.validate();
        doctor_errors.set(validation.clone());
        if !validation.is_valid() || pending.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            let req = form.to_request();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register_doctor(&req).await {
                    Ok(payload) => {
                        crate::util::session::save(&payload.user, &payload.token);
                        auth.update(|a| a.login(payload.user, payload.token));
                        notify(toasts, ToastKind::Success, "Registration successful!");
                        navigate("/doctor/dashboard", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        pending.set(false);
                        notify(toasts, ToastKind::Error, err.user_message("Registration failed"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
        }
    });

    let error_line = |msg: Option<&'static str>| {
        msg.map(|m| view! { <p class="auth-form__error">{m}</p> })
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__header">
                <h1>"MediCare"</h1>
                <p>"Create your account"</p>
            </div>

            <div class="auth-card">
                <h2>"Join MediCare"</h2>

                <div class="auth-card__tabs">
                    <button
                        type="button"
                        class=move || {
                            if tab.get() == Tab::Patient {
                                "auth-card__tab auth-card__tab--active"
                            } else {
                                "auth-card__tab"
                            }
                        }
                        on:click=move |_| tab.set(Tab::Patient)
                    >
                        "Register as Patient"
                    </button>
                    <button
                        type="button"
                        class=move || {
                            if tab.get() == Tab::Doctor {
                                "auth-card__tab auth-card__tab--active"
                            } else {
                                "auth-card__tab"
                            }
                        }
                        on:click=move |_| tab.set(Tab::Doctor)
                    >
                        "Register as Doctor"
                    </button>
                </div>

                <Show
                    when=move || tab.get() == Tab::Patient
                    fallback=move || view! {
                        <form
                            class="auth-form"
                            on:submit=move |ev: leptos::ev::SubmitEvent| {
                                ev.prevent_default();
                                submit_doctor.run(());
                            }
                        >
                            <label class="auth-form__field">
                                "Full Name"
                                <input
                                    type="text"
                                    placeholder="Enter your full name"
                                    prop:value=move || doctor_form.get().name
                                    on:input=move |ev| {
                                        doctor_form.update(|f| f.name = event_target_value(&ev));
                                    }
                                />
                            </label>
                            {move || error_line(doctor_errors.get().name)}

                            <label class="auth-form__field">
                                "Email"
                                <input
                                    type="email"
                                    placeholder="Enter your email"
                                    prop:value=move || doctor_form.get().email
                                    on:input=move |ev| {
                                        doctor_form.update(|f| f.email = event_target_value(&ev));
                                    }
                                />
                            </label>
                            {move || error_line(doctor_errors.get().email)}

                            <label class="auth-form__field auth-form__field--password">
                                "Password"
                                <input
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    placeholder="Create a password"
                                    prop:value=move || doctor_form.get().password
                                    on:input=move |ev| {
                                        doctor_form.update(|f| f.password = event_target_value(&ev));
                                    }
                                />
                                <button
                                    type="button"
                                    class="auth-form__toggle"
                                    on:click=move |_| show_password.update(|v| *v = !*v)
                                >
                                    {move || if show_password.get() { "Hide" } else { "Show" }}
                                </button>
                            </label>
                            {move || error_line(doctor_errors.get().password)}

                            <label class="auth-form__field">
                                "Specialization"
                                <select
                                    prop:value=move || doctor_form.get().specialization
                                    on:change=move |ev| {
                                        doctor_form
                                            .update(|f| f.specialization = event_target_value(&ev));
                                    }
                                >
                                    <option value="">"Select specialization"</option>
                                    {move || {
                                        specializations
                                            .get()
                                            .unwrap_or_default()
                                            .into_iter()
                                            .map(|spec| {
                                                view! { <option value=spec.clone()>{spec.clone()}</option> }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </select>
                            </label>
                            {move || error_line(doctor_errors.get().specialization)}

                            <label class="auth-form__field">
                                "Photo URL (Optional)"
                                <input
                                    type="text"
                                    placeholder="https://example.com/photo.jpg"
                                    prop:value=move || doctor_form.get().photo_url
                                    on:input=move |ev| {
                                        doctor_form.update(|f| f.photo_url = event_target_value(&ev));
                                    }
                                />
                            </label>
                            {move || error_line(doctor_errors.get().photo_url)}

                            <button
                                type="submit"
                                class="btn btn--primary auth-form__submit"
                                disabled=move || pending.get()
                            >
                                "Register as Doctor"
                            </button>
                        </form>
                    }
                >
                    <form
                        class="auth-form"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            submit_patient.run(());
                        }
                    >
                        <label class="auth-form__field">
                            "Full Name"
                            <input
                                type="text"
                                placeholder="Enter your full name"
                                prop:value=move || patient_form.get().name
                                on:input=move |ev| {
                                    patient_form.update(|f| f.name = event_target_value(&ev));
                                }
                            />
                        </label>
                        {move || error_line(patient_errors.get().name)}

                        <label class="auth-form__field">
                            "Email"
                            <input
                                type="email"
                                placeholder="Enter your email"
                                prop:value=move || patient_form.get().email
                                on:input=move |ev| {
                                    patient_form.update(|f| f.email = event_target_value(&ev));
                                }
                            />
                        </label>
                        {move || error_line(patient_errors.get().email)}

                        <label class="auth-form__field auth-form__field--password">
                            "Password"
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="Create a password"
                                prop:value=move || patient_form.get().password
                                on:input=move |ev| {
                                    patient_form.update(|f| f.password = event_target_value(&ev));
                                }
                            />
                            <button
                                type="button"
                                class="auth-form__toggle"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </label>
                        {move || error_line(patient_errors.get().password)}

                        <label class="auth-form__field">
                            "Photo URL (Optional)"
                            <input
                                type="text"
                                placeholder="https://example.com/photo.jpg"
                                prop:value=move || patient_form.get().photo_url
                                on:input=move |ev| {
                                    patient_form.update(|f| f.photo_url = event_target_value(&ev));
                                }
                            />
                        </label>
                        {move || error_line(patient_errors.get().photo_url)}

                        <button
                            type="submit"
                            class="btn btn--primary auth-form__submit"
                            disabled=move || pending.get()
                        >
                            "Register as Patient"
                        </button>
                    </form>
                </Show>

                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
