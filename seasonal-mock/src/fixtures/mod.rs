pub mod history;
pub mod layouts;
