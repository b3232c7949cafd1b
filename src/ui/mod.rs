pub mod app;
pub mod cart;
pub mod catalog;
pub mod events;
pub mod footer;
pub mod header;
pub mod home;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod notify;
pub mod render;
pub mod router;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
