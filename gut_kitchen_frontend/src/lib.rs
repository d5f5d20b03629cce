pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

pub use app::App;
