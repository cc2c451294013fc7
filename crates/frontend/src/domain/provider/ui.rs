use contracts::domain::provider::{Provider, ProviderDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model;
use crate::shared::components::modal::Modal;

#[component]
pub fn ProviderList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Provider>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (editing, set_editing) = signal::<Option<ProviderDto>>(None);

    let fetch = move || {
        spawn_local(async move {
            match model::fetch_providers().await {
                Ok(providers) => {
                    set_items.set(providers);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("Удалить поставщика?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match model::delete_provider(id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(format!("Ошибка удаления: {}", e))),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header" style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;">
                <h1 class="header__title" style="margin: 0; font-size: 1.125rem;">"Поставщики"</h1>
                <div class="header__actions" style="display: flex; gap: 8px;">
                    <button
                        class="button button--primary"
                        on:click=move |_| set_editing.set(Some(ProviderDto::default()))
                    >
                        "Новый поставщик"
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
                            <th class="table__header-cell">"Наименование"</th>
                            <th class="table__header-cell">"БИН"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            items
                                .get()
                                .into_iter()
                                .map(|provider| {
                                    let id = provider.id;
                                    let dto = ProviderDto {
                                        id: Some(provider.id),
                                        name: provider.name.clone(),
                                        bin: provider.bin.clone(),
                                    };
                                    view! {
                                        <tr class="table__row" on:click=move |_| set_editing.set(Some(dto.clone()))>
                                            <td class="table__cell">{provider.name}</td>
                                            <td class="table__cell">{provider.bin}</td>
                                            <td class="table__cell">
                                                <button
                                                    class="button button--secondary"
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        handle_delete(id);
                                                    }
                                                >
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

            {move || {
                editing
                    .get()
                    .map(|dto| {
                        view! {
                            <ProviderForm
                                dto=dto
                                on_saved=Callback::new(move |_| {
                                    set_editing.set(None);
                                    fetch();
                                })
                                on_cancel=Callback::new(move |_| set_editing.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn ProviderForm(dto: ProviderDto, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(dto);
    let (error, set_error) = signal(Option::<String>::None);

    let submit = move || {
        let dto = form.get();
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }
        spawn_local(async move {
            match model::save_provider(&dto).await {
                Ok(_) => on_saved.run(()),
                Err(e) => set_error.set(Some(format!("Ошибка сохранения: {}", e))),
            }
        });
    };

    let input_style = "width: 100%; padding: 7px 9px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; margin-bottom: 10px; box-sizing: border-box;";
    let title = if form.get_untracked().id.is_some() {
        "Поставщик"
    } else {
        "Новый поставщик"
    };

    view! {
        <Modal title=title on_close=Callback::new(move |_| on_cancel.run(()))>
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

            <label style="font-size: 0.8125rem; color: #495057;">"Наименование"</label>
            <input
                type="text"
                style=input_style
                prop:value=move || form.get().name
                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
            />

            <label style="font-size: 0.8125rem; color: #495057;">"БИН"</label>
            <input
                type="text"
                style=input_style
                prop:value=move || form.get().bin
                on:input=move |ev| form.update(|f| f.bin = event_target_value(&ev))
            />

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
