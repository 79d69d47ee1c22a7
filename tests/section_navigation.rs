//! Integration tests driving the application through its message API

use std::sync::Arc;

use folio_app::config::{load_settings, Settings};
use folio_app::{
    update, AppState, FileStorage, InputKey, Message, ThemeStore, UpdateAction,
};
use folio_core::{IntersectionEntry, ManualClock, SectionList, TerminalProbe, ThemeMode};
use tempfile::TempDir;

fn app(sections: &[&str], clock: &ManualClock) -> AppState {
    let mut state = AppState::new(
        SectionList::new(sections.iter().copied()).unwrap(),
        Settings::default(),
        ThemeStore::load(Box::new(folio_app::MemoryStorage::new()), false),
        Box::new(TerminalProbe::default()),
        Arc::new(clock.clone()),
    );
    send(
        &mut state,
        Message::Resize {
            width: 120,
            height: 40,
        },
    );
    state
}

/// Process a message and its follow-ups, returning the sections scrolled to
fn send(state: &mut AppState, message: Message) -> Vec<usize> {
    let mut scrolled = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        if let Some(UpdateAction::ScrollIntoView(cmd)) = result.action {
            scrolled.push(cmd.index);
        }
        msg = result.message;
    }
    scrolled
}

/// One wheel gesture, resolved once the debounce window has elapsed
fn gesture(state: &mut AppState, clock: &ManualClock, delta: f64) -> Vec<usize> {
    send(state, Message::Wheel { delta });
    clock.advance_ms(200);
    send(state, Message::Tick)
}

#[test]
fn test_wheel_gestures_walk_three_sections() {
    let clock = ManualClock::new();
    let mut state = app(&["hero", "about", "resume"], &clock);
    assert_eq!(state.current_section(), 0);

    assert_eq!(gesture(&mut state, &clock, 50.0), vec![1]);
    assert_eq!(state.current_section(), 1);

    // Still navigating: the gesture is dropped
    assert!(gesture(&mut state, &clock, 50.0).is_empty());
    assert_eq!(state.current_section(), 1);

    clock.advance_ms(1500);
    send(&mut state, Message::Tick);
    assert_eq!(gesture(&mut state, &clock, 50.0), vec![2]);
    assert_eq!(state.current_section(), 2);

    clock.advance_ms(1500);
    send(&mut state, Message::Tick);
    assert!(gesture(&mut state, &clock, 50.0).is_empty());
    assert_eq!(state.current_section(), 2);
}

#[test]
fn test_huge_gesture_moves_one_section() {
    let clock = ManualClock::new();
    let mut state = app(&["hero", "about", "resume"], &clock);

    for _ in 0..10 {
        send(&mut state, Message::Wheel { delta: 500.0 });
        clock.advance_ms(20);
    }
    clock.advance_ms(200);
    assert_eq!(send(&mut state, Message::Tick), vec![1]);
}

#[test]
fn test_small_gesture_never_navigates() {
    let clock = ManualClock::new();
    let mut state = app(&["hero", "about", "resume"], &clock);

    send(&mut state, Message::Wheel { delta: 4.0 });
    send(&mut state, Message::Wheel { delta: 5.0 });
    clock.advance_ms(200);

    assert!(send(&mut state, Message::Tick).is_empty());
    assert_eq!(state.current_section(), 0);
}

#[test]
fn test_click_wins_over_stale_intersection() {
    let clock = ManualClock::new();
    let mut state = app(&["hero", "about", "resume", "projects"], &clock);

    assert_eq!(send(&mut state, Message::GoToSection(3)), vec![3]);
    send(
        &mut state,
        Message::Intersections(vec![
            IntersectionEntry::new(0, 0.2),
            IntersectionEntry::new(1, 0.8),
        ]),
    );
    assert_eq!(state.current_section(), 3);

    // Once suppression has lapsed the viewport is trusted again
    clock.advance_ms(1600);
    send(
        &mut state,
        Message::Intersections(vec![IntersectionEntry::new(1, 0.9)]),
    );
    assert_eq!(state.current_section(), 1);
}

#[test]
fn test_home_and_end_keys() {
    let clock = ManualClock::new();
    let mut state = app(&["hero", "about", "resume", "projects"], &clock);

    assert_eq!(send(&mut state, Message::Key(InputKey::End)), vec![3]);
    clock.advance_ms(1100);
    assert!(send(&mut state, Message::Key(InputKey::Down)).is_empty());
    assert_eq!(send(&mut state, Message::Key(InputKey::Home)), vec![0]);
    clock.advance_ms(1100);
    assert!(send(&mut state, Message::Key(InputKey::Up)).is_empty());
    assert_eq!(state.current_section(), 0);
}

#[test]
fn test_theme_preference_survives_restart() {
    let dir = TempDir::new().unwrap();

    let mut theme = ThemeStore::load(Box::new(FileStorage::open(dir.path())), true);
    assert_eq!(theme.mode(), ThemeMode::Dark, "no stored value: system wins");
    theme.toggle();

    let theme = ThemeStore::load(Box::new(FileStorage::open(dir.path())), true);
    assert_eq!(theme.mode(), ThemeMode::Light);
}

#[test]
fn test_config_file_tunes_the_controller() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[scroll]\nwheel_debounce_ms = 50\nnavigation_lock_ms = 300\nobserver_suppress_ms = 300\n",
    )
    .unwrap();

    let clock = ManualClock::new();
    let mut state = AppState::new(
        SectionList::new(["hero", "about", "resume"]).unwrap(),
        load_settings(&path),
        ThemeStore::load(Box::new(folio_app::MemoryStorage::new()), false),
        Box::new(TerminalProbe::default()),
        Arc::new(clock.clone()),
    );

    send(&mut state, Message::Wheel { delta: 50.0 });
    clock.advance_ms(60);
    assert_eq!(send(&mut state, Message::Tick), vec![1]);

    clock.advance_ms(350);
    assert_eq!(send(&mut state, Message::Key(InputKey::Down)), vec![2]);
}
