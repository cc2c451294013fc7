use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const NOTICE_TIMEOUT_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Транзиентное уведомление страницы
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Показывает уведомление и гасит его по таймеру, если за это время
/// не было показано более новое
pub fn show_notice(slot: RwSignal<Option<Notice>>, kind: NoticeKind, text: impl Into<String>) {
    let notice = Notice {
        kind,
        text: text.into(),
    };
    slot.set(Some(notice.clone()));
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
        if slot.get_untracked() == Some(notice) {
            slot.set(None);
        }
    });
}

#[component]
pub fn NoticeBanner(slot: RwSignal<Option<Notice>>) -> impl IntoView {
    view! {
        {move || {
            slot.get()
                .map(|notice| {
                    let (background, color) = match notice.kind {
                        NoticeKind::Success => ("#e6f4ea", "#1e7e34"),
                        NoticeKind::Error => ("#fdecea", "#c0392b"),
                    };
                    view! {
                        <div
                            class="notice"
                            style=format!(
                                "padding: 10px 14px; border-radius: 4px; margin-bottom: 12px; background: {}; color: {};",
                                background,
                                color,
                            )
                        >
                            {notice.text}
                        </div>
                    }
                })
        }}
    }
}
