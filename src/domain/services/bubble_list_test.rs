use test_utils::long_reply_fixture;

use super::BubbleList;
use crate::domain::models::Author;
use crate::domain::models::Message;

#[test]
fn it_has_no_cached_lines() {
    let bubble_list = BubbleList::default();

    assert_eq!(bubble_list.cache.len(), 0);
    assert!(bubble_list.is_empty());
}

#[test]
fn it_caches_lines() {
    let messages = vec![
        Message::new(Author::Bot, "Hi there!"),
        Message::new(Author::User, "Da dầu nên dùng gì?"),
    ];

    let mut bubble_list = BubbleList::default();
    bubble_list.set_messages(&messages, 50);

    assert_eq!(bubble_list.cache.len(), 2);
    assert_eq!(bubble_list.len(), 6);
}

#[test]
fn it_counts_wrapped_lines() {
    let messages = vec![Message::new(Author::Bot, long_reply_fixture())];

    let mut bubble_list = BubbleList::default();
    bubble_list.set_messages(&messages, 50);

    assert!(bubble_list.len() > 3);
}

#[test]
fn it_drops_removed_messages() {
    let messages = vec![
        Message::new(Author::Bot, "Hi there!"),
        Message::new(Author::User, "Hello"),
    ];

    let mut bubble_list = BubbleList::default();
    bubble_list.set_messages(&messages, 50);
    bubble_list.set_messages(&messages[..1], 50);

    assert_eq!(bubble_list.cache.len(), 1);
    assert_eq!(bubble_list.len(), 3);
}

#[test]
fn it_clears_cache_on_resize() {
    let messages = vec![Message::new(Author::Bot, long_reply_fixture())];

    let mut bubble_list = BubbleList::default();
    bubble_list.set_messages(&messages, 50);
    let narrow = bubble_list.len();
    bubble_list.set_messages(&messages, 200);

    assert!(bubble_list.len() < narrow);
    assert_eq!(bubble_list.line_width, 200);
}
