pub mod codec;
pub mod fetch;
pub mod grid;
pub mod report;
pub mod sync;
pub mod ui;
