use std::path::Path;

use anyhow::Result;
use log::debug;

use crate::block_parser::{self, SentenceGrouping};
use crate::caption::{Caption, ParseOutput};
use crate::errors::ParseResult;
use crate::grammar;
use crate::line_parser;
use crate::line_source;

// @module: Public per-format entry points

/// Caption file format, detectable from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    WebVtt,
    Srt,
    Sbv,
}

impl Format {
    /// Guesses the format from a path's extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "vtt" | "webvtt" => Some(Format::WebVtt),
            "srt" => Some(Format::Srt),
            "sbv" => Some(Format::Sbv),
            _ => None,
        }
    }
}

/// Parses SubRip lines into captions. Bare index lines are skipped and
/// cues with an empty body are silently dropped.
pub fn parse_srt(lines: &[String]) -> ParseResult<Vec<Caption>> {
    line_parser::parse(&grammar::SRT, lines)
}

/// Parses SBV lines into captions.
pub fn parse_sbv(lines: &[String]) -> ParseResult<Vec<Caption>> {
    line_parser::parse(&grammar::SBV, lines)
}

/// Parses WebVTT lines into captions plus any header style blocks.
pub fn parse_webvtt(lines: &[String]) -> ParseResult<ParseOutput> {
    block_parser::parse(&grammar::WEBVTT, lines, SentenceGrouping::Off)
}

/// Parses WebVTT lines, merging consecutive cues into sentence-level
/// captions. A group left open at end of input is dropped.
pub fn parse_webvtt_sentences(lines: &[String]) -> ParseResult<ParseOutput> {
    block_parser::parse(&grammar::WEBVTT, lines, SentenceGrouping::Drop)
}

/// Sentence-grouping parse with an explicit end-of-input policy.
pub fn parse_webvtt_sentences_with(
    lines: &[String],
    grouping: SentenceGrouping,
) -> ParseResult<ParseOutput> {
    block_parser::parse(&grammar::WEBVTT, lines, grouping)
}

/// Reads and parses a caption file in the given format.
pub fn parse_file<P: AsRef<Path>>(path: P, format: Format) -> Result<ParseOutput> {
    let lines = line_source::read_lines(&path)?;
    debug!("parsing {} as {:?}", path.as_ref().display(), format);

    let output = match format {
        Format::WebVtt => parse_webvtt(&lines)?,
        Format::Srt => ParseOutput {
            captions: parse_srt(&lines)?,
            styles: Vec::new(),
        },
        Format::Sbv => ParseOutput {
            captions: parse_sbv(&lines)?,
            styles: Vec::new(),
        },
    };
    Ok(output)
}

/// Reads and parses a WebVTT file with sentence grouping.
pub fn parse_webvtt_file_sentences<P: AsRef<Path>>(
    path: P,
    grouping: SentenceGrouping,
) -> Result<ParseOutput> {
    let lines = line_source::read_lines(&path)?;
    Ok(parse_webvtt_sentences_with(&lines, grouping)?)
}
