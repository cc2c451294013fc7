use crate::domain::object::ui::ObjectList;
use crate::domain::provider::ui::ProviderList;
use crate::domain::subject::ui::SubjectList;
use crate::layout::context::{use_app, Page};
use crate::layout::sidebar::Sidebar;
use crate::plan::ui::PlanPage;
use crate::report::page::ReportPage;
use crate::system::users::ui::UserList;
use leptos::prelude::*;

#[component]
pub fn Shell() -> impl IntoView {
    let app = use_app();

    view! {
        <div class="app-shell" style="display: flex; min-height: 100vh; background: #f5f6f8;">
            <Sidebar />
            <main class="app-shell__center" style="flex: 1; padding: 16px; overflow: auto;">
                {move || match app.current_page.get() {
                    Page::Plan => view! { <PlanPage /> }.into_any(),
                    Page::Report => view! { <ReportPage /> }.into_any(),
                    Page::Subjects => view! { <SubjectList /> }.into_any(),
                    Page::Objects => view! { <ObjectList /> }.into_any(),
                    Page::Providers => view! { <ProviderList /> }.into_any(),
                    Page::Users => view! { <UserList /> }.into_any(),
                }}
            </main>
        </div>
    }
}
