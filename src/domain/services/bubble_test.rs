use ratatui::style::Modifier;
use test_utils::long_reply_fixture;
use unicode_width::UnicodeWidthStr;

use super::bold_spans;
use super::Bubble;
use super::BubbleAlignment;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Author;
use crate::domain::models::Message;

fn create_lines(author: Author, alignment: BubbleAlignment, text: &str) -> Vec<String> {
    Config::set(ConfigKey::Username, "testuser");

    let message = Message::new(author, text);
    let lines = Bubble::new(&message, alignment, 50).as_lines();

    return lines
        .iter()
        .map(|line| {
            return line
                .spans
                .iter()
                .map(|span| {
                    return span.content.to_string();
                })
                .collect::<Vec<String>>()
                .join("");
        })
        .collect::<Vec<String>>();
}

#[test]
fn it_creates_author_bot_text() {
    let lines = create_lines(Author::Bot, BubbleAlignment::Left, "Hi there!");
    let trimmed = lines
        .iter()
        .map(|line| return line.trim_end())
        .collect::<Vec<&str>>();

    assert_eq!(
        trimmed,
        vec!["╭CocoBot────╮", "│ Hi there! │", "╰───────────╯"]
    );
    assert!(lines.iter().all(|line| return line.width() == 46));
}

#[test]
fn it_creates_author_user_text() {
    let lines = create_lines(Author::User, BubbleAlignment::Right, "Hi there!");
    let padding = " ".repeat(33);

    assert_eq!(
        lines,
        vec![
            format!("{padding}╭testuser───╮"),
            format!("{padding}│ Hi there! │"),
            format!("{padding}╰───────────╯"),
        ]
    );
}

#[test]
fn it_wraps_long_text() {
    let lines = create_lines(Author::Bot, BubbleAlignment::Left, long_reply_fixture());

    let width = lines[0].width();
    assert!(lines.len() > 3);
    assert!(width <= 50);
    assert!(lines.iter().all(|line| return line.width() == width));
    assert!(lines.iter().all(|line| return !line.contains("**")));
    assert!(lines[0].starts_with("╭CocoBot─"));
}

#[test]
fn it_breaks_words_wider_than_the_bubble() {
    let url = format!("https://cocoon.vn/{}", "a".repeat(100));
    let lines = create_lines(Author::Bot, BubbleAlignment::Left, &url);

    let width = lines[0].width();
    assert_eq!(lines.len(), 5);
    assert!(width <= 50);
    assert!(lines.iter().all(|line| return line.width() == width));

    let text = lines[1..lines.len() - 1]
        .iter()
        .map(|line| {
            return line
                .trim_end()
                .trim_start_matches("│ ")
                .trim_end_matches('│')
                .trim_end()
                .to_string();
        })
        .collect::<Vec<String>>()
        .join("");
    assert_eq!(text, url);
}

#[test]
fn it_breaks_long_words_after_existing_text() {
    let text = format!("Xem thêm tại {}", "b".repeat(60));
    let lines = create_lines(Author::Bot, BubbleAlignment::Left, &text);

    let width = lines[0].width();
    assert!(lines.iter().all(|line| return line.width() == width));
    assert!(lines[1].starts_with("│ Xem thêm tại "));
    assert!(!lines[1].contains('b'));
}

#[test]
fn it_widens_bubble_for_long_author_names() {
    let lines = create_lines(Author::Bot, BubbleAlignment::Left, "Hi");
    assert_eq!(lines[1].trim_end(), "│ Hi      │");
    assert_eq!(lines[0].trim_end(), "╭CocoBot──╮");
}

#[test]
fn it_renders_bold_text() {
    Config::set(ConfigKey::Username, "testuser");

    let message = Message::new(Author::Bot, "Try **Serum** now");
    let lines = Bubble::new(&message, BubbleAlignment::Left, 50).as_lines();
    let bold = lines[1]
        .spans
        .iter()
        .filter(|span| return span.style.add_modifier.contains(Modifier::BOLD))
        .map(|span| return span.content.to_string())
        .collect::<Vec<String>>();

    assert_eq!(bold, vec!["Serum".to_string()]);
}

#[test]
fn it_renders_empty_messages() {
    let lines = create_lines(Author::Bot, BubbleAlignment::Left, "");
    assert_eq!(lines.len(), 3);
}

mod bold {
    use super::*;

    fn contents(line: &str) -> Vec<(String, bool)> {
        return bold_spans(line)
            .iter()
            .map(|span| {
                return (
                    span.content.to_string(),
                    span.style.add_modifier.contains(Modifier::BOLD),
                );
            })
            .collect();
    }

    #[test]
    fn it_splits_bold_markers() {
        assert_eq!(
            contents("Try **Serum** now"),
            vec![
                ("Try ".to_string(), false),
                ("Serum".to_string(), true),
                (" now".to_string(), false),
            ]
        );
    }

    #[test]
    fn it_handles_multiple_markers() {
        assert_eq!(
            contents("**a** and **b**"),
            vec![
                ("a".to_string(), true),
                (" and ".to_string(), false),
                ("b".to_string(), true),
            ]
        );
    }

    #[test]
    fn it_keeps_unmatched_markers() {
        assert_eq!(
            contents("**a** and **b"),
            vec![("a".to_string(), true), (" and **b".to_string(), false)]
        );
    }

    #[test]
    fn it_keeps_plain_text() {
        assert_eq!(contents("plain"), vec![("plain".to_string(), false)]);
        assert_eq!(contents(""), vec![("".to_string(), false)]);
    }
}
