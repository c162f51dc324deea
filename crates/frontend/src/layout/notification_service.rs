use contracts::shared::error::ConsoleError;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::shared::icons::icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast toast--success",
            NotificationKind::Info => "toast toast--info",
            NotificationKind::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

/// Неблокирующие уведомления (toast). Каждое исчезает само через `ttl_ms`.
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    ttl_ms: u32,
}

impl NotificationService {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            ttl_ms,
        }
    }

    pub fn push(&self, kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) {
        let notification = Notification {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            message: message.into(),
        };
        let id = notification.id;
        self.items.update(|items| items.push(notification));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.ttl_ms).await;
            this.dismiss(id);
        });
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationKind::Success, title, message);
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationKind::Info, title, message);
    }

    /// Ошибка домена: заголовок берётся из `ConsoleError::title`
    pub fn error(&self, err: &ConsoleError) {
        log::debug!("notify error: {}", err);
        self.push(NotificationKind::Error, err.title(), err.to_string());
    }

    /// Ошибка браузерного уровня (скачивание, чтение файла)
    pub fn failure(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationKind::Error, title, message);
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Стопка уведомлений в правом верхнем углу
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toast-stack">
            <For
                each=move || service.items.get()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class() role="status">
                            <div class="toast__body">
                                <div class="toast__title">{n.title}</div>
                                <div class="toast__message">{n.message}</div>
                            </div>
                            <button
                                class="button button--icon toast__close"
                                on:click=move |_| service.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
