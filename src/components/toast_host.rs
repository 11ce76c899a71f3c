//! Transient notification host.
//!
//! Renders the toast queue in a fixed corner stack. `notify` is the single
//! entry point components use to surface success or failure; toasts expire
//! on a timer or on click.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Auto-dismiss delay in milliseconds.
#[cfg(feature = "hydrate")]
const TOAST_TTL_MS: u32 = 4_000;

/// Push a notification and schedule its removal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let id = toasts.try_update(|t| t.push(kind, message));
    #[cfg(feature = "hydrate")]
    {
        if let Some(id) = id {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                toasts.try_update(|t| t.dismiss(&id));
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Corner stack rendering the live toast queue.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        let id = toast.id.clone();
                        view! {
                            <div
                                class=class
                                on:click=move |_| {
                                    toasts.update(|t| t.dismiss(&id));
                                }
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
