use super::SlashCommand;

#[test]
fn it_parse_empty_string() {
    assert!(SlashCommand::parse("").is_none());
}

#[test]
fn it_parse_space_only() {
    assert!(SlashCommand::parse("   ").is_none());
}

#[test]
fn it_parse_single_slash() {
    assert!(SlashCommand::parse("/").is_none());
}

#[test]
fn it_parse_invalid_prefix() {
    assert!(SlashCommand::parse("!q").is_none());
}

#[test]
fn it_parse_plain_question() {
    assert!(SlashCommand::parse("Serum giá bao nhiêu?").is_none());
}

#[test]
fn it_parse_unknown_command() {
    assert!(SlashCommand::parse("/model gpt").is_none());
}

#[test]
fn it_parse_valid_prefix() {
    let cmd = SlashCommand::parse("/q");
    assert!(cmd.is_some());
    assert_eq!(cmd.unwrap().command, "/q");
}

#[test]
fn it_parse_with_surrounding_whitespace() {
    let cmd = SlashCommand::parse("  /help  ").unwrap();
    assert!(cmd.is_help());
}

#[test]
fn it_is_quit() {
    for text in ["/q", "/quit", "/exit"] {
        let cmd = SlashCommand::parse(text).unwrap();
        assert!(cmd.is_quit());
        assert!(!cmd.is_help());
        assert!(!cmd.is_clear());
    }
}

#[test]
fn it_is_help() {
    for text in ["/h", "/help"] {
        let cmd = SlashCommand::parse(text).unwrap();
        assert!(cmd.is_help());
        assert!(!cmd.is_quit());
    }
}

#[test]
fn it_is_clear() {
    for text in ["/c", "/clear"] {
        let cmd = SlashCommand::parse(text).unwrap();
        assert!(cmd.is_clear());
        assert!(!cmd.is_quit());
    }
}
