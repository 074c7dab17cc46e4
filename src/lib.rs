pub mod app_state;
pub mod config;
pub mod handlers;
pub mod monzo;
pub mod slack;
