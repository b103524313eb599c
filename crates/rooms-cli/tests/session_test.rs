//! End-to-end tests driving a full session through the command loop.

use rooms_cli::repl;
use rooms_core::rng::SystemRng;
use rooms_core::scene::{AnchorId, RoomText};
use rooms_core::settings::SettingsStore;
use rooms_presenter::application::presenter::{RoomPresenter, Scene};
use rooms_sequencer::application::command_handlers::{ROOM_OFFSET_KEY, handle_initialize_session};
use rooms_sequencer::domain::themes::ThemeTable;
use rooms_settings_store::json_settings_store::JsonFileSettingsStore;
use rooms_test_support::{
    FixedClock, InMemorySettingsStore, RecordingContentProvider, RecordingDisplaySurface,
    RecordingPlayer, SequenceRng,
};

fn text(previous: &str, current: &str, next: &str, room: &str) -> RoomText {
    RoomText {
        previous: previous.to_owned(),
        current: current.to_owned(),
        next: next.to_owned(),
        room_number: room.to_owned(),
    }
}

#[test]
fn test_scripted_session_walks_jumps_and_reports_bad_input() {
    // Arrange
    let clock = FixedClock::default();
    let mut rng = SequenceRng::new(vec![2]);
    let mut settings = InMemorySettingsStore::default();
    let sequencer =
        handle_initialize_session(ThemeTable::default(), &clock, &mut rng, &mut settings).unwrap();

    let mut content = RecordingContentProvider::default();
    let mut display = RecordingDisplaySurface::default();
    let mut player = RecordingPlayer::new();
    let mut presenter = RoomPresenter::new(
        sequencer,
        &clock,
        Scene {
            content: &mut content,
            display: &mut display,
            player: &mut player,
            anchor: AnchorId(1),
        },
    );
    presenter.start().unwrap();

    let script = "next\nprev\nprev\n\njump 25\nbogus\njump -3\nstatus\nportal\nquit\nnext\n";
    let mut output = Vec::new();

    // Act
    repl::run(&mut presenter, script.as_bytes(), &mut output, 25).unwrap();
    let final_room = presenter.sequencer().current_room();

    // Assert
    assert_eq!(final_room, 25);
    assert_eq!(
        display.shown(),
        &[
            text("Forest", "Forest", "Countryside", "1"),
            text("Forest", "Countryside", "Cave", "2"),
            text("Forest", "Forest", "Countryside", "1"),
            text("Cave", "Backwaters", "Desert", "25"),
            text("Cave", "Backwaters", "Desert", "25"),
        ]
    );
    assert_eq!(content.live_instances().len(), 1);
    assert_eq!(player.reset_count(), 4);
    assert!(player.collision_enabled());

    let output = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "error: unknown command `bogus`");
    assert_eq!(
        lines[1],
        "error: invalid argument: jump target must be at least 1, got -3"
    );
    let status: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
    assert_eq!(status["room_number"], 25);
    assert_eq!(status["room_offset"], 2);
    assert_eq!(status["current_theme"], "Backwaters");
}

#[test]
fn test_sessions_sharing_a_settings_file_never_repeat_an_offset() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let clock = FixedClock::default();
    let mut rng = SystemRng::seeded(5);
    let mut previous = None;

    for _ in 0..20 {
        // Act
        let mut settings = JsonFileSettingsStore::open(&path).unwrap();
        let sequencer =
            handle_initialize_session(ThemeTable::default(), &clock, &mut rng, &mut settings)
                .unwrap();

        // Assert
        let offset = sequencer.room_offset();
        assert_ne!(Some(offset), previous);
        let reopened = JsonFileSettingsStore::open(&path).unwrap();
        assert_eq!(
            reopened.get(ROOM_OFFSET_KEY).unwrap(),
            Some(i64::from(offset))
        );
        previous = Some(offset);
    }
}
