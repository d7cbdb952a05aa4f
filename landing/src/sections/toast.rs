//! Toast notifications for the lead form.
//!
//! [`ToastQueue`] is the form's [`Notifier`]: it pushes each notice into a
//! signal and schedules its removal. [`Toaster`] renders whatever is queued.

use std::time::Duration;

use leadform::{Notice, Notifier};
use leptos::prelude::*;

/// How long a toast stays up unless clicked away.
const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    id: u64,
    notice: Notice,
}

/// Shared handle to the toast list. Cheap to copy into closures.
#[derive(Clone, Copy, Debug)]
pub struct ToastQueue {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|toast| toast.id != id));
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notice: Notice) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| items.push(Toast { id, notice }));

        let queue = *self;
        set_timeout(move || queue.dismiss(id), TOAST_LIFETIME);
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let queue = expect_context::<ToastQueue>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || queue.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = format!("toast toast-{}", toast.notice.severity.as_label());
                    view! {
                        <div class=class on:click=move |_| queue.dismiss(id)>
                            <div class="toast-title">{toast.notice.title}</div>
                            <div class="toast-description">{toast.notice.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
