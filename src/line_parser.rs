use log::debug;

use crate::caption::Caption;
use crate::errors::{ParseError, ParseResult};
use crate::grammar::Grammar;

// @module: Generic line-classifying parser for formats without block headers

/// Scanner state: either between cues, or filling an open caption.
enum ScanState {
    Idle,
    InCaption(Caption),
}

/// Parses a flat line sequence into captions in a single pass.
///
/// A timing line opens a caption, subsequent non-blank lines extend it, and
/// a blank line (or end of input) closes it. Fails fast with the 1-based
/// line number of the first structural violation.
pub fn parse(grammar: &Grammar, lines: &[String]) -> ParseResult<Vec<Caption>> {
    grammar.check_signature(lines)?;

    let mut captions = Vec::new();
    let mut state = ScanState::Idle;

    for (index, line) in lines.iter().enumerate() {
        let line_number = index + 1;

        if grammar.is_timing_line(line) {
            let (start, end) = grammar.parse_timing(line, line_number)?;
            // A cue still open here was never closed by a blank line; the
            // new timing line takes over and its text is discarded.
            state = ScanState::InCaption(Caption::new(start, end));
        } else if matches!(state, ScanState::Idle) && grammar.is_index_line(line) {
            continue;
        } else if !line.is_empty() {
            match &mut state {
                ScanState::Idle => {
                    return Err(ParseError::caption(line_number, "Caption missing timeframe"));
                }
                ScanState::InCaption(caption) => caption.add_line(line.clone()),
            }
        } else {
            match std::mem::replace(&mut state, ScanState::Idle) {
                ScanState::Idle => {}
                ScanState::InCaption(caption) => {
                    if caption.lines.is_empty() {
                        if grammar.ignore_empty_captions {
                            debug!(
                                "dropping empty {} cue closing in line {}",
                                grammar.name, line_number
                            );
                            continue;
                        }
                        return Err(ParseError::caption(line_number, "Caption missing text"));
                    }
                    captions.push(caption);
                }
            }
        }
    }

    // Files need not end with a trailing blank line.
    if let ScanState::InCaption(caption) = state {
        if !caption.lines.is_empty() {
            captions.push(caption);
        }
    }

    Ok(captions)
}
