pub mod date_input;
pub mod day_selector;
pub mod modal;
pub mod notice;
pub mod status_badge;
