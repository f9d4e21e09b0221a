//! Drag-and-drop image viewer: drop an image onto the page, then pan it by
//! dragging, zoom with the wheel and toggle zoom with a double-click.

use std::rc::Rc;

pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod model;
pub mod session;
pub mod state;

use components::{App, AppProps};
use config::ViewerConfig;

/// Install the panic hook and logger, read the page config and mount the
/// viewer on `<body>`.
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    let config = ViewerConfig::load();
    log::set_max_level(config.log_level().to_level_filter());
    log::info!(
        "image viewer ready (zoom {}x..{}x)",
        config.min_scale,
        config.max_scale
    );
    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
