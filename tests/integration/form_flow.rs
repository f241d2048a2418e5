//! Drives the relatives form through key presses and checks storage and rendering

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kinform::core::Notice;
use kinform::data::read_json;
use kinform::{App, Config, KeyValueStore, Relation, RelativeRecord};

use super::common::fixtures::{empty_store, store_with_user};
use super::common::terminal::{buffer_contains, create_test_terminal_sized};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn ctrl(app: &mut App, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Fill first and last name of the expanded record, leaving focus on first name
fn fill_names(app: &mut App, first: &str, last: &str) {
    type_text(app, first);
    press(app, KeyCode::Tab);
    type_text(app, last);
    press(app, KeyCode::BackTab);
}

fn render(app: &mut App) -> ratatui::buffer::Buffer {
    let mut terminal = create_test_terminal_sized(80, 24);
    terminal.draw(|f| app.draw(f)).expect("draw");
    terminal.backend().buffer().clone()
}

#[test]
fn test_fill_and_submit_saves_relatives() {
    let store = store_with_user();
    let mut app = App::new(store.clone(), &Config::default());

    fill_names(&mut app, "Alan", "Turing");
    assert!(app.snapshot().relatives[0].is_valid);

    ctrl(&mut app, 's');

    assert!(app.snapshot().summary_open);
    assert!(!app.alert().is_visible());

    let saved: Vec<RelativeRecord> = read_json(&*store, "relativesDetails")
        .expect("read")
        .expect("relatives saved");
    assert_eq!(saved, app.snapshot().relatives);
    assert_eq!(saved[0].first_name, "Alan");
    assert_eq!(saved[0].relation, Relation::Father);

    let buffer = render(&mut app);
    assert!(buffer_contains(&buffer, "User and Relative Details"));
    assert!(buffer_contains(&buffer, "First Name Grace"));
    assert!(buffer_contains(&buffer, "First Name: Alan"));

    press(&mut app, KeyCode::Enter);
    assert!(!app.snapshot().summary_open);
}

#[test]
fn test_submit_without_user_details_shows_alert() {
    let store = empty_store();
    let mut app = App::new(store.clone(), &Config::default());
    fill_names(&mut app, "Alan", "Turing");

    ctrl(&mut app, 's');

    assert_eq!(app.alert().notice(), Some(&Notice::SaveUserDetailsFirst));
    assert_eq!(store.get("relativesDetails").unwrap(), None);

    let buffer = render(&mut app);
    assert!(buffer_contains(&buffer, "User Details Missing"));
    assert!(buffer_contains(&buffer, "Please go to users page"));

    // Form keys are blocked until the alert is dismissed
    type_text(&mut app, "x");
    assert_eq!(app.snapshot().relatives[0].first_name, "Alan");
    press(&mut app, KeyCode::Enter);
    assert!(!app.alert().is_visible());
}

#[test]
fn test_submit_with_new_empty_relative_is_rejected() {
    let store = store_with_user();
    let mut app = App::new(store.clone(), &Config::default());
    fill_names(&mut app, "Alan", "Turing");

    ctrl(&mut app, 'a');
    assert_eq!(app.snapshot().relatives.len(), 2);
    assert_eq!(app.form().selected(), 1);
    assert_eq!(app.snapshot().relatives[1].relation, Relation::Brother);

    ctrl(&mut app, 's');
    assert_eq!(app.alert().notice(), Some(&Notice::CheckFieldsForErrors));
    assert_eq!(store.get("relativesDetails").unwrap(), None);
}

#[test]
fn test_delete_keeps_last_relative() {
    let mut app = App::new(store_with_user(), &Config::default());
    let only = app.snapshot().relatives[0].id;

    ctrl(&mut app, 'd');
    assert_eq!(app.snapshot().relatives.len(), 1);
    assert_eq!(app.snapshot().relatives[0].id, only);

    ctrl(&mut app, 'a');
    ctrl(&mut app, 'd');
    assert_eq!(app.snapshot().relatives.len(), 1);
    assert_eq!(app.form().selected_id(), Some(only));
}

#[test]
fn test_check_record_shows_required_errors_and_revalidates() {
    let mut app = App::new(store_with_user(), &Config::default());

    press(&mut app, KeyCode::Enter);
    let buffer = render(&mut app);
    assert!(buffer_contains(&buffer, "This field is required"));

    // One keystroke per name leaves the record invalid until it is checked again
    type_text(&mut app, "A");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "B");
    assert!(!app.snapshot().relatives[0].is_valid);

    press(&mut app, KeyCode::Enter);
    assert!(app.snapshot().relatives[0].is_valid);
    let buffer = render(&mut app);
    assert!(buffer_contains(&buffer, "Can be saved"));
    assert!(!buffer_contains(&buffer, "This field is required"));
}

#[test]
fn test_relation_selector_edits_record() {
    let mut app = App::new(store_with_user(), &Config::default());

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.snapshot().relatives[0].relation, Relation::Mother);

    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.snapshot().relatives[0].relation, Relation::Brother);
}

#[test]
fn test_saved_relatives_load_in_new_session() {
    let store = store_with_user();
    {
        let mut app = App::new(store.clone(), &Config::default());
        fill_names(&mut app, "Alan", "Turing");
        ctrl(&mut app, 'a');
        fill_names(&mut app, "Ada", "Lovelace");
        ctrl(&mut app, 's');
        assert!(app.snapshot().summary_open);
    }

    let mut app = App::new(store, &Config::default());
    let names: Vec<&str> = app
        .snapshot()
        .relatives
        .iter()
        .map(|r| r.first_name.as_str())
        .collect();
    assert_eq!(names, vec!["Alan", "Ada"]);
    assert_eq!(app.form().first_name.value(), "Alan");

    press(&mut app, KeyCode::Down);
    assert_eq!(app.form().first_name.value(), "Ada");
    let buffer = render(&mut app);
    assert!(buffer_contains(&buffer, "Relative 2"));
}

#[test]
fn test_escape_quits() {
    let mut app = App::new(empty_store(), &Config::default());
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());
}

#[test]
fn test_summary_scrolls_to_every_submitted_relative() {
    let mut app = App::new(store_with_user(), &Config::default());
    let names = [
        ("Alan", "Turing"),
        ("Ada", "Lovelace"),
        ("Kurt", "Goedel"),
        ("Emmy", "Noether"),
    ];
    for (index, (first, last)) in names.iter().enumerate() {
        if index > 0 {
            ctrl(&mut app, 'a');
        }
        fill_names(&mut app, first, last);
    }
    assert!(app.snapshot().relatives.iter().all(|r| r.is_valid));

    ctrl(&mut app, 's');
    assert!(app.snapshot().summary_open);

    let buffer = render(&mut app);
    assert!(buffer_contains(&buffer, "First Name: Alan"));
    assert!(!buffer_contains(&buffer, "First Name: Emmy"));
    assert!(buffer_contains(&buffer, "Scroll"));

    for _ in 0..30 {
        press(&mut app, KeyCode::Down);
    }
    let buffer = render(&mut app);
    assert!(buffer_contains(&buffer, "Relative 4"));
    assert!(buffer_contains(&buffer, "First Name: Emmy"));
    assert!(buffer_contains(&buffer, "Relation: Brother"));

    // Scrolling back up is not delayed by the extra presses
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Up);
    let buffer = render(&mut app);
    assert!(!buffer_contains(&buffer, "First Name: Emmy"));

    press(&mut app, KeyCode::Enter);
    assert!(!app.snapshot().summary_open);
}
