use contracts::system::users::{CreateUserDto, User};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::modal::Modal;

#[component]
pub fn UserList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<User>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_create, set_show_create) = signal(false);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(users) => {
                    set_items.set(users);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Удалить пользователя?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_user(id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(format!("Ошибка удаления: {}", e))),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header" style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;">
                <h1 class="header__title" style="margin: 0; font-size: 1.125rem;">"Пользователи"</h1>
                <div class="header__actions" style="display: flex; gap: 8px;">
                    <button class="button button--primary" on:click=move |_| set_show_create.set(true)>
                        "Новый пользователь"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        "Обновить"
                    </button>
                </div>
            </div>

            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <div class="warning-box" style="background: #fdecea; color: #c0392b; padding: 8px 12px; border-radius: 4px; margin-bottom: 12px;">
                                {e}
                            </div>
                        }
                    })
            }}

            <div class="table">
                <table class="table__data table--striped" style="width: 100%; border-collapse: collapse; background: #fff;">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Логин"</th>
                            <th class="table__header-cell">"ФИО"</th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Активен"</th>
                            <th class="table__header-cell">"Администратор"</th>
                            <th class="table__header-cell">"Последний вход"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            items
                                .get()
                                .into_iter()
                                .map(|user| {
                                    let id = user.id;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{user.username}</td>
                                            <td class="table__cell">{user.full_name.unwrap_or_else(|| "-".into())}</td>
                                            <td class="table__cell">{user.email.unwrap_or_else(|| "-".into())}</td>
                                            <td class="table__cell">{if user.is_active { "Да" } else { "Нет" }}</td>
                                            <td class="table__cell">{if user.is_admin { "Да" } else { "Нет" }}</td>
                                            <td class="table__cell">{user.last_login_at.unwrap_or_else(|| "-".into())}</td>
                                            <td class="table__cell">
                                                <button class="button button--secondary" on:click=move |_| handle_delete(id)>
                                                    "Удалить"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || show_create.get()>
                <CreateUserForm
                    on_saved=Callback::new(move |_| {
                        set_show_create.set(false);
                        fetch();
                    })
                    on_cancel=Callback::new(move |_| set_show_create.set(false))
                />
            </Show>
        </div>
    }
}

/// Форма создания пользователя. Несовпадение паролей ловится локально,
/// до какого-либо сетевого вызова.
#[component]
fn CreateUserForm(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (password_confirm, set_password_confirm) = signal(String::new());
    let (is_admin, set_is_admin) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let submit = move || {
        if username.get().trim().is_empty() {
            set_error.set(Some("Логин обязателен".to_string()));
            return;
        }
        if password.get().is_empty() {
            set_error.set(Some("Пароль обязателен".to_string()));
            return;
        }
        if password.get() != password_confirm.get() {
            set_error.set(Some("Пароли не совпадают".to_string()));
            return;
        }

        let dto = CreateUserDto {
            username: username.get().trim().to_string(),
            password: password.get(),
            email: Some(email.get()).filter(|s| !s.trim().is_empty()),
            full_name: Some(full_name.get()).filter(|s| !s.trim().is_empty()),
            is_admin: is_admin.get(),
        };
        spawn_local(async move {
            match api::create_user(&dto).await {
                Ok(_) => on_saved.run(()),
                Err(e) => set_error.set(Some(format!("Ошибка сохранения: {}", e))),
            }
        });
    };

    let input_style = "width: 100%; padding: 7px 9px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; margin-bottom: 10px; box-sizing: border-box;";

    view! {
        <Modal title="Новый пользователь" on_close=Callback::new(move |_| on_cancel.run(()))>
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <div style="background: #fdecea; color: #c0392b; padding: 8px 10px; border-radius: 4px; margin-bottom: 10px; font-size: 0.8125rem;">
                                {e}
                            </div>
                        }
                    })
            }}

            <input
                type="text"
                placeholder="Логин"
                style=input_style
                prop:value=username
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="ФИО"
                style=input_style
                prop:value=full_name
                on:input=move |ev| set_full_name.set(event_target_value(&ev))
            />
            <input
                type="email"
                placeholder="Email"
                style=input_style
                prop:value=email
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Пароль"
                style=input_style
                prop:value=password
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Подтверждение пароля"
                style=input_style
                prop:value=password_confirm
                on:input=move |ev| set_password_confirm.set(event_target_value(&ev))
            />
            <label style="display: flex; align-items: center; gap: 6px; margin-bottom: 14px; font-size: 0.875rem;">
                <input
                    type="checkbox"
                    prop:checked=is_admin
                    on:change=move |ev| set_is_admin.set(event_target_checked(&ev))
                />
                "Администратор"
            </label>

            <div style="display: flex; gap: 8px; justify-content: flex-end;">
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Отмена"
                </button>
                <button class="button button--primary" on:click=move |_| submit()>
                    "Сохранить"
                </button>
            </div>
        </Modal>
    }
}
