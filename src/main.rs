use std::sync::Arc;

use eframe::egui;
use kanjiren::{
    backend::SnapshotBackend,
    core::tasks::TaskManager,
    gui::KanjirenApp,
    persistence::{
        load_json_or_default,
        Settings,
        SETTINGS_FILE,
    },
};
use tokio::runtime::Runtime;
use tracing::{
    error,
    info,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kanjiren=info")),
        )
        .init();

    let settings = load_json_or_default::<Settings>(SETTINGS_FILE);
    let runtime = Arc::new(Runtime::new()?);

    let snapshot_path = settings.snapshot_path();
    let backend = match runtime.block_on(SnapshotBackend::open(snapshot_path.clone())) {
        Ok(backend) => backend,
        Err(e) => {
            error!("Failed to open kanji snapshot {}: {}", snapshot_path.display(), e);
            SnapshotBackend::from_entries(Vec::new())
        }
    };
    let task_manager = TaskManager::new(runtime, Arc::new(backend));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Kanjiren")
            .with_inner_size([760.0, 860.0]),
        ..Default::default()
    };

    info!("Starting Kanjiren");
    eframe::run_native(
        "Kanjiren",
        options,
        Box::new(|cc| Ok(Box::new(KanjirenApp::new(cc, settings, task_manager)))),
    )?;

    Ok(())
}
