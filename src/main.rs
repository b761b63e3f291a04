//! Daily Tasks Frontend Entry Point

mod api;
mod app;
mod clock;
mod components;
mod config;
mod context;
mod logger;
mod models;
mod query;
mod store;
mod view_model;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info });
    mount_to_body(App);
}
