#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

#[derive(Debug, PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

pub struct Bubble<'a> {
    alignment: BubbleAlignment,
    message: &'a Message,
    window_max_width: usize,
}

pub struct BubbleConfig {
    pub bubble_padding: usize,
    pub border_elements_length: usize,
    pub outer_padding_percentage: f32,
}

fn repeat_from_subtractions(text: &str, subtractions: Vec<usize>) -> String {
    let count = subtractions
        .into_iter()
        .map(|e| return e as i64)
        .reduce(|a, b| return a - b)
        .unwrap_or(0);

    if count <= 0 {
        return "".to_string();
    }

    return text.repeat(count as usize);
}

/// Splits a line on `**bold**` markers. Markers are dropped, an unmatched
/// `**` is kept as plain text.
pub fn bold_spans<'a>(line: &str) -> Vec<Span<'a>> {
    let mut spans = vec![];
    let mut rest = line;

    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        let end = match after.find("**") {
            Some(end) => end,
            None => break,
        };

        if start > 0 {
            spans.push(Span::raw(rest[..start].to_string()));
        }
        if end > 0 {
            spans.push(Span::styled(
                after[..end].to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }

        rest = &after[end + 2..];
    }

    if !rest.is_empty() || spans.is_empty() {
        spans.push(Span::raw(rest.to_string()));
    }

    return spans;
}

/// Splits `text` into words, breaking any word wider than `max_width` into
/// chunks that fit on a line of their own.
fn split_words(text: &str, max_width: usize) -> Vec<String> {
    let mut words = vec![];

    for word in text.split(' ') {
        if word.width() <= max_width {
            words.push(word.to_string());
            continue;
        }

        let mut chunk = String::new();
        let mut chunk_width = 0;
        for c in word.chars() {
            let char_width = c.width().unwrap_or(0);
            if chunk_width + char_width > max_width && !chunk.is_empty() {
                words.push(chunk);
                chunk = String::new();
                chunk_width = 0;
            }

            chunk.push(c);
            chunk_width += char_width;
        }
        words.push(chunk);
    }

    return words;
}

fn spans_width(spans: &[Span]) -> usize {
    return spans.iter().map(|e| return e.content.width()).sum();
}

impl<'a> Bubble<'a> {
    pub fn new(
        message: &'a Message,
        alignment: BubbleAlignment,
        window_max_width: usize,
    ) -> Bubble<'a> {
        return Bubble {
            alignment,
            message,
            window_max_width,
        };
    }

    pub fn style_config() -> BubbleConfig {
        return BubbleConfig {
            // Unicode character border + padding.
            bubble_padding: 8,
            // left border + left padding + (text, not counted) + right padding + right border +
            // scrollbar.
            border_elements_length: 5,
            outer_padding_percentage: 0.04,
        };
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        let max_line_length = self.get_max_line_length();
        let mut lines: Vec<Line<'static>> = vec![];

        for line in self.message.lines() {
            let mut split_spans = vec![];
            let mut line_char_count = 0;

            for span in bold_spans(line) {
                let span_width = span.content.width();
                if span_width + line_char_count <= max_line_length {
                    line_char_count += span_width;
                    split_spans.push(span);
                    continue;
                }

                let mut word_set: Vec<String> = vec![];

                for word in split_words(&span.content, max_line_length) {
                    let word_width = word.width();
                    let has_content = !word_set.is_empty() || !split_spans.is_empty();
                    if word_width + line_char_count > max_line_length && has_content {
                        split_spans.push(Span::styled(word_set.join(" "), span.style));
                        lines.push(self.spans_to_line(split_spans, max_line_length));

                        split_spans = vec![];
                        word_set = vec![];
                        line_char_count = 0;
                    }

                    word_set.push(word);
                    line_char_count += word_width + 1;
                }

                split_spans.push(Span::styled(word_set.join(" "), span.style));
            }

            lines.push(self.spans_to_line(split_spans, max_line_length));
        }

        return self.wrap_lines_in_bubble(lines, max_line_length);
    }

    fn spans_to_line(
        &self,
        mut spans: Vec<Span<'static>>,
        max_line_length: usize,
    ) -> Line<'static> {
        let line_str_len = spans_width(&spans);
        let fill = repeat_from_subtractions(" ", vec![max_line_length, line_str_len]);
        let formatted_line_length =
            line_str_len + fill.len() + Bubble::style_config().bubble_padding;

        let mut wrapped_spans = vec![self.highlight_span("│ ".to_string())];
        wrapped_spans.append(&mut spans);
        wrapped_spans.push(self.highlight_span(format!("{fill} │")));

        let outer_bubble_padding =
            repeat_from_subtractions(" ", vec![self.window_max_width, formatted_line_length]);

        if self.alignment == BubbleAlignment::Left {
            wrapped_spans.push(Span::from(outer_bubble_padding));
            return Line::from(wrapped_spans);
        }

        let mut line_spans = vec![Span::from(outer_bubble_padding)];
        line_spans.extend(wrapped_spans);

        return Line::from(line_spans);
    }

    fn get_max_line_length(&self) -> usize {
        let style_config = Bubble::style_config();
        // Add a minimum 4% of padding on the side.
        let min_bubble_padding_length = ((self.window_max_width as f32
            * style_config.outer_padding_percentage)
            .ceil()) as usize;

        // Border elements + minimum bubble padding.
        let line_border_width = style_config.border_elements_length + min_bubble_padding_length;

        let mut max_line_length = self
            .message
            .lines()
            .iter()
            .map(|line| return spans_width(&bold_spans(line)))
            .max()
            .unwrap_or(0);

        let available = self.window_max_width.saturating_sub(line_border_width);
        if max_line_length > available {
            max_line_length = available;
        }

        let username = self.message.author.to_string();
        if max_line_length < username.width() {
            max_line_length = username.width();
        }

        return max_line_length;
    }

    fn wrap_lines_in_bubble(
        &self,
        lines: Vec<Line<'static>>,
        max_line_length: usize,
    ) -> Vec<Line<'static>> {
        let username = self.message.author.to_string();
        // Add 2 for the spaces next to the vertical bars.
        let name_bar = "─".repeat((max_line_length + 2).saturating_sub(username.width()));
        let top_bar = format!("╭{username}{name_bar}╮");
        let bottom_bar = format!("╰{}╯", "─".repeat(max_line_length + 2));
        let bar_bubble_padding = repeat_from_subtractions(
            " ",
            vec![
                self.window_max_width,
                max_line_length,
                Bubble::style_config().bubble_padding,
            ],
        );

        if self.alignment == BubbleAlignment::Left {
            let mut res = vec![self.highlight_line(format!("{top_bar}{bar_bubble_padding}"))];
            res.extend(lines);
            res.push(self.highlight_line(format!("{bottom_bar}{bar_bubble_padding}")));
            return res;
        }

        let mut res = vec![self.highlight_line(format!("{bar_bubble_padding}{top_bar}"))];
        res.extend(lines);
        res.push(self.highlight_line(format!("{bar_bubble_padding}{bottom_bar}")));
        return res;
    }

    fn highlight_span(&self, text: String) -> Span<'static> {
        if self.message.message_type() == MessageType::Error {
            return Span::styled(
                text,
                Style {
                    fg: Some(Color::Red),
                    ..Style::default()
                },
            );
        } else if self.message.author == Author::App {
            return Span::styled(
                text,
                Style {
                    fg: Some(Color::Rgb(138, 85, 63)), // Brown
                    ..Style::default()
                },
            );
        } else if self.message.author == Author::Bot {
            return Span::styled(
                text,
                Style {
                    fg: Some(Color::Rgb(144, 238, 144)), // Green
                    ..Style::default()
                },
            );
        }

        return Span::from(text);
    }

    fn highlight_line(&self, text: String) -> Line<'static> {
        return Line::from(self.highlight_span(text));
    }
}
