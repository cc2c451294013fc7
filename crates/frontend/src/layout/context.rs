use leptos::prelude::*;

/// Страницы приложения. Навигация без URL-роутера: текущая страница
/// хранится в контексте и переключается боковым меню.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Plan,
    Report,
    Subjects,
    Objects,
    Providers,
    Users,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Plan => "Суточный план",
            Page::Report => "Сводный отчёт",
            Page::Subjects => "Субъекты",
            Page::Objects => "Объекты",
            Page::Providers => "Поставщики",
            Page::Users => "Пользователи",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppContext {
    pub current_page: RwSignal<Page>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            current_page: RwSignal::new(Page::Plan),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext not found in component tree")
}
