use contracts::domain::day::DayStatus;
use leptos::prelude::*;

fn status_colors(status: DayStatus) -> (&'static str, &'static str) {
    match status {
        DayStatus::Primary => ("#e7f1ff", "#0b5ed7"),
        DayStatus::Adjusted => ("#fff3cd", "#997404"),
        DayStatus::Final => ("#e6f4ea", "#1e7e34"),
        DayStatus::Fact1 | DayStatus::Fact2 => ("#e2e3f3", "#3d348b"),
        DayStatus::Completed => ("#d1e7dd", "#0f5132"),
        DayStatus::Unavailable => ("#f1f3f5", "#868e96"),
    }
}

/// Бейдж статуса суточного плана
#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<DayStatus>) -> impl IntoView {
    view! {
        {move || {
            let current = status.get();
            let (background, color) = status_colors(current);
            view! {
                <span
                    class="status-badge"
                    style=format!(
                        "display: inline-block; padding: 2px 10px; border-radius: 10px; font-size: 0.75rem; white-space: nowrap; background: {}; color: {};",
                        background,
                        color,
                    )
                >
                    {current.display_name()}
                </span>
            }
        }}
    }
}
