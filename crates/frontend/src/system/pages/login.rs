use crate::system::auth::context::do_login;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let submit = move || {
        let login = username.get();
        let pass = password.get();
        if login.trim().is_empty() || pass.is_empty() {
            set_error.set(Some("Укажите логин и пароль".to_string()));
            return;
        }
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match do_login(login, pass).await {
                Ok(()) => {}
                Err(e) => set_error.set(Some(format!("Ошибка входа: {}", e))),
            }
            set_is_loading.set(false);
        });
    };

    let input_style = "width: 100%; padding: 8px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; margin-bottom: 12px; box-sizing: border-box;";

    view! {
        <div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #2c3345;">
            <form
                style="background: #fff; border-radius: 8px; padding: 32px; width: 340px; box-shadow: 0 4px 12px rgba(0,0,0,0.25);"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <h1 style="margin: 0 0 4px; font-size: 1.125rem;">"Балансирующий рынок"</h1>
                <p style="margin: 0 0 20px; color: #6c757d; font-size: 0.8125rem;">
                    "Суточное планирование и отчётность"
                </p>

                {move || {
                    error
                        .get()
                        .map(|e| {
                            view! {
                                <div style="background: #fdecea; color: #c0392b; padding: 8px 10px; border-radius: 4px; margin-bottom: 12px; font-size: 0.8125rem;">
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
                    type="password"
                    placeholder="Пароль"
                    style=input_style
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="button button--primary"
                    style="width: 100%; padding: 9px; border: none; border-radius: 4px; background: #0b5ed7; color: #fff; cursor: pointer; font-size: 0.875rem;"
                    disabled=move || is_loading.get()
                >
                    {move || if is_loading.get() { "Вход..." } else { "Войти" }}
                </button>
            </form>
        </div>
    }
}
