use tui_textarea::Input;

use super::Message;

pub enum Event {
    ChatReply(Message),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardPaste(String),
    KeyboardSubmit(),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
