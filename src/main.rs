//! Movie Catalog Frontend Entry Point

mod api;
mod app;
mod cards;
mod components;
mod config;
mod context;
mod error;
mod flow;
mod form;
mod models;
mod rating;
mod stats;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
