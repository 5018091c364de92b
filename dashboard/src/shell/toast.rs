//! Transient toast notifications.
//!
//! All network failures surface here; nothing is re-thrown to a global
//! handler and nothing retries automatically.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    /// Confirmation of a completed operation - 3 second duration
    Success,
    /// Neutral guidance (e.g. the navigation guard) - 5 second duration
    Info,
    /// Failed save/reset/load - 7 second duration
    Error,
}

impl ToastSeverity {
    fn duration_ms(self) -> u32 {
        match self {
            ToastSeverity::Success => 3000,
            ToastSeverity::Info => 5000,
            ToastSeverity::Error => 7000,
        }
    }

    fn class(self) -> &'static str {
        match self {
            ToastSeverity::Success => "toast toast-success",
            ToastSeverity::Info => "toast toast-info",
            ToastSeverity::Error => "toast toast-error",
        }
    }
}

#[derive(Clone)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub severity: ToastSeverity,
}

/// Global toast manager for showing notifications.
///
/// Access via `use_toast()` from any component.
#[derive(Clone, Copy)]
pub struct ToastManager {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u32>,
}

impl ToastManager {
    fn new() -> Self {
        Self {
            toasts: Signal::new(vec![]),
            next_id: Signal::new(0),
        }
    }

    /// Show a toast; auto-dismisses by severity. At most four are shown at
    /// once, oldest dropped first.
    pub fn show(&mut self, message: impl Into<String>, severity: ToastSeverity) {
        let id = *self.next_id.peek();
        *self.next_id.write() += 1;

        {
            let mut toasts = self.toasts.write();
            if toasts.len() >= 4 {
                toasts.remove(0);
            }
            toasts.push(Toast {
                id,
                message: message.into(),
                severity,
            });
        }

        let mut toasts = self.toasts;
        let duration = severity.duration_ms();
        spawn(async move {
            TimeoutFuture::new(duration).await;
            toasts.write().retain(|t| t.id != id);
        });
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.write().retain(|t| t.id != id);
    }
}

/// Initialize the toast provider at the shell root, before any children
/// that might show toasts.
pub fn use_toast_provider() -> ToastManager {
    use_context_provider(ToastManager::new)
}

pub fn use_toast() -> ToastManager {
    use_context::<ToastManager>()
}

/// Renders all active toasts; place once at the end of the shell.
#[component]
pub fn ToastFrame() -> Element {
    let mut manager = use_toast();
    let toasts = manager.toasts.read().clone();

    rsx! {
        div { class: "toast-stack",
            for toast in toasts.iter() {
                div {
                    key: "{toast.id}",
                    class: toast.severity.class(),
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: {
                            let id = toast.id;
                            move |_| manager.dismiss(id)
                        },
                        "\u{00d7}"
                    }
                }
            }
        }
    }
}
