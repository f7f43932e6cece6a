//! Main application entry point.
//!
//! Usage: `mockink [config.json] [output-dir]`. Places the config's layout
//! through an editing session and writes its export document and preview.

use std::env;
use std::path::PathBuf;

use mockink_app::{App, AppConfig, AppError, FilePreview, ShortcutRegistry};

fn main() {
    env_logger::init();
    log::info!("Starting Mockink");

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let mut args = env::args().skip(1);
    let mut config = match args.next() {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let out_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let layout = std::mem::take(&mut config.layout);
    let mut app = App::new(config);
    if layout.is_empty() {
        log::warn!("No layout configured; exporting an empty artboard");
    }
    app.apply_layout(&layout);

    let path = app.export_into(&out_dir)?;
    let mut preview = FilePreview::new(out_dir.join("preview.html"));
    app.refresh_preview(&mut preview)?;

    println!("{}", app.status_line());
    println!("Exported to {}", path.display());
    ShortcutRegistry::print_all();
    Ok(())
}
