use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ParseError, ParseResult};

// @module: Per-format grammar rules, expressed as data

// @const: WebVTT timing line regex, hours optional, dot before milliseconds
static WEBVTT_TIMING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*((?:\d+:)?\d{2}:\d{2}\.\d{3})\s*-->\s*((?:\d+:)?\d{2}:\d{2}\.\d{3})").unwrap()
});

// @const: SubRip timing line regex, hours mandatory, comma before milliseconds
static SRT_TIMING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+:\d{2}:\d{2},\d{3})\s*-->\s*(\d+:\d{2}:\d{2},\d{3})").unwrap()
});

// @const: SBV timing line regex, comma-separated timestamps, no arrow
static SBV_TIMING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+:\d{2}:\d{2}\.\d{3}),(\d+:\d{2}:\d{2}\.\d{3})").unwrap()
});

// @const: WebVTT comment block header
static COMMENT_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^NOTE(?:\s.+|$)").unwrap());

// @const: WebVTT style block header
static STYLE_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^STYLE[ \t]*$").unwrap());

// @const: Terminal sentence punctuation, anywhere in a line
pub(crate) static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]").unwrap());

/// How a grammar recognizes the line carrying cue timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingDetect {
    /// Any line containing the `-->` separator (WebVTT, SubRip).
    Arrow,
    /// Only a line matching the timing pattern (SBV has no separator token).
    Pattern,
}

/// File-level signature rule, checked before any cue parsing.
#[derive(Debug, Clone, Copy)]
pub enum Signature {
    /// First line starts with a literal header token.
    HeaderToken(&'static str),
    /// At least two lines; first is `1`, second matches the timing pattern.
    NumberedCue,
    /// First line matches the timing pattern.
    TimingFirstLine,
}

/// A caption format described as data: patterns plus option flags, consumed
/// by the two parsing strategies. No trait dispatch; strategies take the
/// grammar by reference.
pub struct Grammar {
    pub name: &'static str,
    pub timing: &'static Lazy<Regex>,
    pub detect: TimingDetect,
    pub signature: Signature,
    pub comment: Option<&'static Lazy<Regex>>,
    pub style: Option<&'static Lazy<Regex>>,
    /// Silently drop cues with no text instead of failing; tolerates
    /// encoders that emit empty cues.
    pub ignore_empty_captions: bool,
    /// Bare numeric index lines before a cue opens are structural noise.
    pub skip_index_lines: bool,
}

/// Block cue format. Comment (`NOTE`) and style (`STYLE`) blocks supported.
pub static WEBVTT: Grammar = Grammar {
    name: "webvtt",
    timing: &WEBVTT_TIMING,
    detect: TimingDetect::Arrow,
    signature: Signature::HeaderToken("WEBVTT"),
    comment: Some(&COMMENT_HEADER),
    style: Some(&STYLE_HEADER),
    ignore_empty_captions: false,
    skip_index_lines: false,
};

/// Numbered-cue format. Empty cues are dropped, bare index lines skipped.
pub static SRT: Grammar = Grammar {
    name: "srt",
    timing: &SRT_TIMING,
    detect: TimingDetect::Arrow,
    signature: Signature::NumberedCue,
    comment: None,
    style: None,
    ignore_empty_captions: true,
    skip_index_lines: true,
};

/// Comma-delimited timing format. No block structure, comments or styles.
pub static SBV: Grammar = Grammar {
    name: "sbv",
    timing: &SBV_TIMING,
    detect: TimingDetect::Pattern,
    signature: Signature::TimingFirstLine,
    comment: None,
    style: None,
    ignore_empty_captions: false,
    skip_index_lines: false,
};

impl Grammar {
    /// Returns true if the line carries the cue timings.
    pub fn is_timing_line(&self, line: &str) -> bool {
        match self.detect {
            TimingDetect::Arrow => line.contains("-->"),
            TimingDetect::Pattern => self.timing.is_match(line),
        }
    }

    /// Parses a timing line into its two timestamp captures.
    pub fn parse_timing(&self, line: &str, line_number: usize) -> ParseResult<(String, String)> {
        let caps = self
            .timing
            .captures(line)
            .ok_or_else(|| ParseError::caption(line_number, "Invalid time format"))?;
        Ok((caps[1].to_string(), caps[2].to_string()))
    }

    /// Validates the file-level signature against the first line(s).
    pub fn check_signature(&self, lines: &[String]) -> ParseResult<()> {
        let valid = match self.signature {
            Signature::HeaderToken(token) => {
                lines.first().is_some_and(|line| line.starts_with(token))
            }
            Signature::NumberedCue => {
                lines.len() >= 2 && lines[0] == "1" && self.timing.is_match(&lines[1])
            }
            Signature::TimingFirstLine => {
                lines.first().is_some_and(|line| self.timing.is_match(line))
            }
        };

        if valid {
            Ok(())
        } else {
            Err(ParseError::MalformedFile(
                "The file does not have a valid format".to_string(),
            ))
        }
    }

    /// Returns true if the line opens a comment block.
    pub fn is_comment_header(&self, line: &str) -> bool {
        self.comment.is_some_and(|pattern| pattern.is_match(line))
    }

    /// Returns true if the line opens a style block.
    pub fn is_style_header(&self, line: &str) -> bool {
        self.style.is_some_and(|pattern| pattern.is_match(line))
    }

    /// Returns true if the line is a bare cue index the grammar skips.
    pub fn is_index_line(&self, line: &str) -> bool {
        self.skip_index_lines && !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
    }
}
