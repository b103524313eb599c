//! Rooms host entry point.

use std::error::Error;
use std::io;

use rooms_cli::config::Config;
use rooms_cli::console::{ConsoleContent, ConsoleDisplay, ConsolePlayer};
use rooms_cli::repl;
use rooms_core::clock::SystemClock;
use rooms_core::rng::SystemRng;
use rooms_core::scene::AnchorId;
use rooms_presenter::application::presenter::{RoomPresenter, Scene};
use rooms_sequencer::application::command_handlers::handle_initialize_session;
use rooms_sequencer::domain::themes::ThemeTable;
use rooms_settings_store::json_settings_store::JsonFileSettingsStore;
use tracing_subscriber::EnvFilter;

/// Scene node the themed content hangs under.
const ROOM_ANCHOR: AnchorId = AnchorId(0);

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber. Logs go to stderr; stdout carries room text.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting Rooms host");

    // Read configuration from environment.
    let config = Config::from_env()?;

    // Start the session.
    let clock = SystemClock;
    let mut rng = config
        .rng_seed
        .map_or_else(SystemRng::from_entropy, SystemRng::seeded);
    let mut settings = JsonFileSettingsStore::open(&config.settings_path)?;
    let sequencer =
        handle_initialize_session(ThemeTable::default(), &clock, &mut rng, &mut settings)?;

    // Build the scene.
    let mut content = ConsoleContent::default();
    let mut display = ConsoleDisplay::new(io::stdout());
    let mut player = ConsolePlayer::default();
    let mut presenter = RoomPresenter::new(
        sequencer,
        &clock,
        Scene {
            content: &mut content,
            display: &mut display,
            player: &mut player,
            anchor: ROOM_ANCHOR,
        },
    );
    presenter.start()?;

    repl::run(
        &mut presenter,
        io::stdin().lock(),
        &mut io::stdout(),
        config.portal_room,
    )?;

    tracing::info!("Rooms host stopped");
    Ok(())
}
