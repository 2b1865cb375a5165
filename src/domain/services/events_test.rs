use crossterm::event::Event as CrosstermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use tui_textarea::Key;

use super::map_crossterm;
use crate::domain::models::Event;

fn key(code: KeyCode, modifiers: KeyModifiers) -> Option<Event> {
    return map_crossterm(CrosstermEvent::Key(KeyEvent::new(code, modifiers)));
}

#[test]
fn it_submits_on_enter() {
    assert!(matches!(
        key(KeyCode::Enter, KeyModifiers::NONE),
        Some(Event::KeyboardSubmit())
    ));
}

#[test]
fn it_submits_on_ctrl_s() {
    assert!(matches!(
        key(KeyCode::Char('s'), KeyModifiers::CONTROL),
        Some(Event::KeyboardSubmit())
    ));
}

#[test]
fn it_types_plain_characters() {
    match key(KeyCode::Char('s'), KeyModifiers::NONE) {
        Some(Event::KeyboardCharInput(input)) => {
            assert_eq!(input.key, Key::Char('s'));
            assert!(!input.ctrl);
        }
        _ => panic!("Expected character input"),
    }
}

#[test]
fn it_quits_on_ctrl_c() {
    assert!(matches!(
        key(KeyCode::Char('c'), KeyModifiers::CONTROL),
        Some(Event::KeyboardCTRLC())
    ));
}

#[test]
fn it_scrolls() {
    assert!(matches!(
        key(KeyCode::Up, KeyModifiers::NONE),
        Some(Event::UIScrollUp())
    ));
    assert!(matches!(
        key(KeyCode::Down, KeyModifiers::NONE),
        Some(Event::UIScrollDown())
    ));
    assert!(matches!(
        key(KeyCode::Char('u'), KeyModifiers::CONTROL),
        Some(Event::UIScrollPageUp())
    ));
    assert!(matches!(
        key(KeyCode::PageDown, KeyModifiers::NONE),
        Some(Event::UIScrollPageDown())
    ));
}

#[test]
fn it_scrolls_with_the_mouse() {
    let event = map_crossterm(CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    }));
    assert!(matches!(event, Some(Event::UIScrollDown())));
}

#[test]
fn it_forwards_pastes() {
    match map_crossterm(CrosstermEvent::Paste("Serum".to_string())) {
        Some(Event::KeyboardPaste(text)) => assert_eq!(text, "Serum"),
        _ => panic!("Expected a paste"),
    }
}

#[test]
fn it_ignores_focus_changes() {
    assert!(map_crossterm(CrosstermEvent::FocusGained).is_none());
}
