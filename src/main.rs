mod app;
use flashcard_deck::*;

use app::FlashcardApp;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    // Persistence is best-effort: without the file we still run, unsaved.
    let store = match SqliteStore::open(&config.db_path) {
        Ok(store) => store,
        Err(e) => {
            warn!(path = %config.db_path.display(), error = %e, "cannot open deck database, changes will not be saved");
            SqliteStore::open_in_memory()?
        }
    };

    let manager = DeckManager::restored(store);
    info!("loaded {} cards", manager.cards().len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([520.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Flashcards",
        options,
        Box::new(|_cc| Ok(Box::new(FlashcardApp::new(manager)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run window: {e}"))
}
