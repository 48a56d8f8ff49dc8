mod app;
mod color;
mod columns;
mod config;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use app::MafimaApp;
use config::{ViewerConfig, CONFIG_ENV};
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let data_override = std::env::args_os().nth(1).map(PathBuf::from);
    let config = ViewerConfig::resolve(std::env::var_os(CONFIG_ENV).map(PathBuf::from), data_override)?;
    let options = config.loader_options()?;

    // The table is loaded exactly once; nothing can be shown without it.
    let dataset = match data::loader::load_file(&config.data_path, &options) {
        Ok(ds) => ds,
        Err(e) => {
            let err = anyhow::Error::new(e)
                .context(format!("loading {}", config.data_path.display()));
            log::error!("{err:#}");
            return Err(err);
        }
    };
    let state = AppState::new(dataset, &config);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Magyar Film Maraton",
        native_options,
        Box::new(|cc| {
            // Cover thumbnails are fetched over http and decoded by the image loaders.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(MafimaApp::new(state)))
        }),
    )
    .map_err(|e| anyhow!("{e}"))
    .context("running the viewer window")
}
