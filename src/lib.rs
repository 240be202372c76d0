/*!
 * # cueparse
 *
 * A Rust library for parsing plain-text subtitle/caption files into a
 * uniform in-memory sequence of cue records.
 *
 * ## Features
 *
 * - WebVTT: blank-line-delimited cue blocks with optional identifiers,
 *   `NOTE` comment blocks and header-only `STYLE` blocks
 * - SubRip (SRT): numbered cues, tolerant of empty cue bodies
 * - YouTube SBV: comma-delimited timing lines
 * - Sentence grouping for WebVTT: consecutive cues are merged into one
 *   caption per sentence, split on terminal punctuation
 * - JSON export of parsed captions
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `caption`: the `Caption`, `Block` and `Style` value types
 * - `grammar`: per-format patterns and options, expressed as data
 * - `line_parser`: the generic line-classifying parse strategy (SRT, SBV)
 * - `block_parser`: the block-structured strategy and its sentence-grouping
 *   variant (WebVTT)
 * - `formats`: public per-format entry points and format detection
 * - `line_source`: BOM-aware file reading into the parsers' line sequence
 * - `export`: JSON serialization of parsed captions
 * - `errors`: parse error types
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod block_parser;
pub mod caption;
pub mod errors;
pub mod export;
pub mod formats;
pub mod grammar;
pub mod line_parser;
pub mod line_source;

// Re-export main types for easier usage
pub use block_parser::SentenceGrouping;
pub use caption::{Block, Caption, ParseOutput, Style};
pub use errors::{ParseError, ParseResult};
pub use formats::{
    Format, parse_file, parse_sbv, parse_srt, parse_webvtt, parse_webvtt_file_sentences,
    parse_webvtt_sentences, parse_webvtt_sentences_with,
};
pub use grammar::{Grammar, Signature, TimingDetect};
