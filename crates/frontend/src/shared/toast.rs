use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const AUTO_DISMISS_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast--info",
            ToastLevel::Success => "toast--success",
            ToastLevel::Warning => "toast--warning",
            ToastLevel::Error => "toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    /// Persistent toasts stay until dismissed; used for the
    /// compensating-delete escalation where staff must intervene.
    pub persistent: bool,
}

/// Centralized toast notifications, provided once at the app root.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    fn push(&self, level: ToastLevel, message: impl Into<String>, persistent: bool) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                level,
                message: message.into(),
                persistent,
            })
        });

        if !persistent {
            let toasts = self.toasts;
            Timeout::new(AUTO_DISMISS_MS, move || {
                toasts.update(|list| list.retain(|t| t.id != id));
            })
            .forget();
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message, false);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message, false);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(ToastLevel::Warning, message, false);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message, false);
    }

    /// Stays on screen until the user closes it.
    pub fn persistent_error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message, true);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

/// Renders the toast stack. Must be mounted exactly once, at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        <div class="toast-host">
            <For
                each=move || svc.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.level.class())>
                            <span class="toast__message">{toast.message.clone()}</span>
                            <button
                                class="toast__close"
                                on:click=move |_| svc.dismiss(id)
                            >
                                {"×"}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
