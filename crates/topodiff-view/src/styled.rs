use std::fmt;

use colored::{ColoredString, Colorize};
use topodiff_model::Classification;

/// A run of text styled by a single classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Classification,
}

/// Text made of classification-styled spans.
///
/// `kept` is the unmarked style; the other three classifications each map
/// to a color. Adjacent spans of the same style are merged on push.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledText {
    spans: Vec<Span>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, style: Classification) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.style == style => last.text.push_str(&text),
            _ => self.spans.push(Span { text, style }),
        }
    }

    pub fn push_plain(&mut self, text: impl Into<String>) {
        self.push(text, Classification::Kept);
    }

    /// Append `other` verbatim; its spans keep their own styles.
    pub fn append(&mut self, other: StyledText) {
        for span in other.spans {
            self.push(span.text, span.style);
        }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// `true` if any span carries a color.
    pub fn has_color(&self) -> bool {
        self.spans.iter().any(|s| s.style != Classification::Kept)
    }

    /// Text with color tags: `<green>` for added, `<red>` for deleted and
    /// `<yellow>` for changed. Kept text is left bare.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            match tag_name(span.style) {
                Some(tag) => {
                    out.push_str(&format!("<{tag}>{}</{tag}>", span.text));
                }
                None => out.push_str(&span.text),
            }
        }
        out
    }

    /// Text with ANSI escapes, subject to `colored`'s global override.
    pub fn to_ansi(&self) -> String {
        self.spans
            .iter()
            .flat_map(|span| span.text.split_inclusive('\n').map(move |part| (part, span.style)))
            .map(|(part, style)| {
                // escapes never straddle a line break
                match part.strip_suffix('\n') {
                    Some(line) => format!("{}\n", paint(line, style)),
                    None => paint(part, style).to_string(),
                }
            })
            .collect()
    }

    pub fn to_plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ansi())
    }
}

fn tag_name(style: Classification) -> Option<&'static str> {
    match style {
        Classification::Added => Some("green"),
        Classification::Deleted => Some("red"),
        Classification::Changed => Some("yellow"),
        Classification::Kept => None,
    }
}

fn paint(text: &str, style: Classification) -> ColoredString {
    match style {
        Classification::Added => text.green(),
        Classification::Deleted => text.red(),
        Classification::Changed => text.yellow(),
        Classification::Kept => text.normal(),
    }
}
