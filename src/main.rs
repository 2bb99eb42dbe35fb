#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod infra;
mod ui;
mod util;

use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::dpi::LogicalSize, tao::window::WindowBuilder, Config as DesktopConfig};

use crate::util::version::{version_label, APP_NAME};

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("Logger already initialised: {err}");
    }
    info!("Starting {APP_NAME} {}", version_label());

    #[cfg(feature = "desktop")]
    prefer_gl_on_wayland();

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
                    .with_inner_size(LogicalSize::new(1200.0, 860.0))
            )
        };
        builder.with_cfg(config)
    };

    builder.launch(app::App);
}

/// Wayland explicit sync crashes some drivers; fall back unless the caller opted in.
#[cfg(feature = "desktop")]
fn prefer_gl_on_wayland() {
    if std::env::var("WAYLAND_DISPLAY").is_err() {
        return;
    }
    for (key, value) in [("WGPU_BACKEND", "gl"), ("WEBKIT_DISABLE_DMABUF_RENDERER", "1")] {
        if std::env::var(key).is_err() {
            std::env::set_var(key, value);
        }
    }
}
