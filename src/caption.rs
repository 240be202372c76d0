use std::fmt;

// @module: Caption record model shared by all grammars

/// A single timed caption cue.
///
/// Created when a timing line is recognized, filled by appending text lines,
/// then handed over to the parse output once the cue is closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caption {
    /// Optional cue label preceding the timing line; empty for unnamed cues.
    pub identifier: String,

    /// Start timestamp, kept as the formatted string captured from the file.
    pub start: String,

    /// End timestamp, kept as the formatted string captured from the file.
    pub end: String,

    /// Ordered text lines of the cue.
    pub lines: Vec<String>,

    /// Set by the sentence-grouping parser when a line ends a sentence.
    pub end_of_sentence: bool,
}

impl Caption {
    /// Creates a caption with both timestamps set and no text yet.
    pub fn new(start: String, end: String) -> Self {
        Caption {
            start,
            end,
            ..Caption::default()
        }
    }

    /// Appends a text line to the cue.
    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// The cue text, lines joined by single spaces.
    pub fn text(&self) -> String {
        self.lines.join(" ")
    }
}

impl fmt::Display for Caption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} --> {} {}", self.start, self.end, self.text())
    }
}

/// A blank-line-delimited run of non-blank lines, with the 1-based line
/// number of its first line. Intermediate unit of the block-structured
/// strategy only.
#[derive(Debug, Clone, Default)]
pub struct Block {
    pub line_number: usize,
    pub lines: Vec<String>,
}

impl Block {
    pub fn new(line_number: usize) -> Self {
        Block {
            line_number,
            lines: Vec::new(),
        }
    }
}

/// Raw lines of a styling directive block. Style blocks are header-only:
/// none may appear after the first cue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub lines: Vec<String>,
}

impl Style {
    /// The styling directives as a single newline-joined string.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Everything one parse yields: cue captions in file order plus any header
/// style blocks (always empty for formats without block structure).
#[derive(Debug, Default)]
pub struct ParseOutput {
    pub captions: Vec<Caption>,
    pub styles: Vec<Style>,
}
