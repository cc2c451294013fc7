use crate::layout::context::{use_app, Page};
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

const NAV_ITEMS: [Page; 6] = [
    Page::Plan,
    Page::Report,
    Page::Subjects,
    Page::Objects,
    Page::Providers,
    Page::Users,
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let app = use_app();
    let (auth_state, _) = use_auth();

    let is_admin = move || {
        auth_state
            .get()
            .user_info
            .as_ref()
            .map(|u| u.is_admin)
            .unwrap_or(false)
    };

    let username = move || {
        auth_state
            .get()
            .user_info
            .as_ref()
            .map(|u| u.full_name.clone().unwrap_or_else(|| u.username.clone()))
            .unwrap_or_default()
    };

    let handle_logout = move |_| {
        spawn_local(async move {
            let _ = do_logout().await;
        });
    };

    view! {
        <aside
            class="sidebar"
            style="width: 220px; background: #2c3345; color: #e8eaf0; display: flex; flex-direction: column; padding: 12px 0;"
        >
            <div class="sidebar__brand" style="padding: 8px 16px 20px; font-weight: 600; font-size: 1rem;">
                "Балансирующий рынок"
            </div>
            <nav class="sidebar__nav" style="flex: 1;">
                {NAV_ITEMS
                    .into_iter()
                    .map(|page| {
                        let is_active = move || app.current_page.get() == page;
                        let hidden = move || page == Page::Users && !is_admin();
                        view! {
                            <Show when=move || !hidden()>
                                <button
                                    class="sidebar__item"
                                    class:sidebar__item--active=is_active
                                    style="display: block; width: 100%; text-align: left; padding: 10px 16px; background: none; border: none; color: inherit; cursor: pointer; font-size: 0.875rem;"
                                    on:click=move |_| app.current_page.set(page)
                                >
                                    {page.title()}
                                </button>
                            </Show>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar__footer" style="padding: 12px 16px; border-top: 1px solid #3d455c;">
                <div style="font-size: 0.8125rem; margin-bottom: 8px; opacity: 0.8;">{username}</div>
                <button
                    class="button button--secondary"
                    style="width: 100%; padding: 6px; cursor: pointer;"
                    on:click=handle_logout
                >
                    "Выйти"
                </button>
            </div>
        </aside>
    }
}
