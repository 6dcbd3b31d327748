#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(clippy::new_without_default)]

mod cmd;
mod controller;
mod data;
mod delegate;
mod error;
mod ui;
mod webapi;
mod widget;

use druid::AppLauncher;
use env_logger::{Builder, Env};
use usergen_core::config::Config;

use crate::{data::AppState, delegate::Delegate, webapi::WebApi};

const ENV_LOG: &str = "USERGEN_LOG";
const ENV_LOG_STYLE: &str = "USERGEN_LOG_STYLE";

fn main() {
    // Setup logging from the env variables, with defaults.
    Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .init();

    // Load configuration
    let config = Config::load_or_init();

    WebApi::new(&config).install_as_global();

    let window = ui::main_window();
    AppLauncher::with_window(window)
        .configure_env(ui::theme::setup)
        .delegate(Delegate::new())
        .launch(AppState::new(config))
        .expect("Application launch");
}
