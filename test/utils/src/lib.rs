/// Body returned by the CocoBot backend for a recognised question.
pub fn chat_reply_fixture() -> &'static str {
    return r#"
{
  "intent": "ask_product",
  "entities": ["SKIN_TYPE:da dau", "PRODUCT:serum"],
  "reply": "Da dầu thì bạn thử **Serum Bí Đao** nhé, kiềm dầu và giảm mụn."
}
"#
    .trim();
}

/// Body returned when the backend matched no rule and has nothing to say.
pub fn chat_no_reply_fixture() -> &'static str {
    return r#"{"intent": "greeting", "entities": []}"#;
}

pub fn long_reply_fixture() -> &'static str {
    return "Hi there! This is a really long reply that pushes the boundaries of 50 characters across the screen, resulting in a bubble where the line is wrapped to the next line. **Cool** right?";
}
