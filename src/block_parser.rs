use log::debug;

use crate::caption::{Block, Caption, ParseOutput, Style};
use crate::errors::{ParseError, ParseResult};
use crate::grammar::{Grammar, SENTENCE_END};

// @module: Block-structured parser and its sentence-grouping variant

/// How cue captions are combined before reaching the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SentenceGrouping {
    /// One caption per cue block.
    #[default]
    Off,
    /// Merge consecutive cues into sentence-level captions; a group still
    /// open at end of input is discarded. Default grouping behavior.
    Drop,
    /// Merge consecutive cues into sentence-level captions; a group still
    /// open at end of input is flushed as a final caption.
    Flush,
}

/// Parses a blank-line-delimited caption file.
///
/// First pass groups lines into blocks; second pass classifies each block
/// as cue, comment, style or malformed, in that priority order. Comment
/// blocks are dropped, style blocks are legal only before the first cue.
pub fn parse(
    grammar: &Grammar,
    lines: &[String],
    grouping: SentenceGrouping,
) -> ParseResult<ParseOutput> {
    grammar.check_signature(lines)?;

    let mark_sentences = grouping != SentenceGrouping::Off;
    let mut captions: Vec<Caption> = Vec::new();
    let mut styles: Vec<Style> = Vec::new();

    // Sentence accumulator, reset after each completed group.
    let mut group_text = String::new();
    let mut group_start: Option<String> = None;
    let mut open_group: Option<Caption> = None;

    for block in compute_blocks(lines) {
        if is_cue_block(grammar, &block) {
            let mut caption = parse_cue_block(grammar, &block, mark_sentences)?;

            if !mark_sentences {
                captions.push(caption);
                continue;
            }

            if group_text.is_empty() {
                group_start = Some(caption.start.clone());
            }
            group_text.push(' ');
            group_text.push_str(&caption.text());

            if caption.end_of_sentence {
                // The group spans from the first merged cue's start to this
                // cue's end.
                caption.lines = vec![std::mem::take(&mut group_text)];
                if let Some(start) = group_start.take() {
                    caption.start = start;
                }
                captions.push(caption);
                open_group = None;
            } else {
                open_group = Some(caption);
            }
        } else if block
            .lines
            .first()
            .is_some_and(|line| grammar.is_comment_header(line))
        {
            continue;
        } else if block
            .lines
            .first()
            .is_some_and(|line| grammar.is_style_header(line))
        {
            if !captions.is_empty() {
                return Err(ParseError::MalformedFile(format!(
                    "Style block defined after the first cue in line {}",
                    block.line_number
                )));
            }
            styles.push(Style {
                lines: block.lines[1..].to_vec(),
            });
        } else if block.lines.len() == 1 {
            return Err(ParseError::caption(
                block.line_number,
                "Standalone cue identifier",
            ));
        } else {
            return Err(ParseError::caption(block.line_number, "Missing timing cue"));
        }
    }

    if let Some(mut caption) = open_group {
        match grouping {
            SentenceGrouping::Flush => {
                caption.lines = vec![group_text];
                if let Some(start) = group_start {
                    caption.start = start;
                }
                captions.push(caption);
            }
            _ => {
                debug!(
                    "dropping sentence group open at end of input (started at {})",
                    group_start.as_deref().unwrap_or(caption.start.as_str())
                );
            }
        }
    }

    Ok(ParseOutput { captions, styles })
}

/// Groups lines into blank-line-delimited blocks, recording the 1-based
/// line number of each block's first line. Empty blocks are filtered out
/// and the first surviving block, the file signature, is discarded.
fn compute_blocks(lines: &[String]) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let line_number = index + 1;
        if line.is_empty() {
            blocks.push(Block::new(line_number));
            continue;
        }
        if blocks.is_empty() {
            blocks.push(Block::new(line_number));
        }
        if let Some(current) = blocks.last_mut() {
            if current.lines.is_empty() {
                current.line_number = line_number;
            }
            current.lines.push(line.clone());
        }
    }

    let mut surviving = blocks.into_iter().filter(|block| !block.lines.is_empty());
    surviving.next();
    surviving.collect()
}

/// A cue block has the timing marker in one of its first two lines, which
/// lets comment and style blocks be told apart before any timing is parsed.
fn is_cue_block(grammar: &Grammar, block: &Block) -> bool {
    block
        .lines
        .iter()
        .take(2)
        .any(|line| grammar.is_timing_line(line))
}

/// Extracts a caption from a cue block.
///
/// An optional leading non-timing line is the cue identifier; exactly one
/// timing line is allowed; every other line is cue text.
fn parse_cue_block(grammar: &Grammar, block: &Block, mark_sentences: bool) -> ParseResult<Caption> {
    let mut identifier = String::new();
    let mut timings: Option<(String, String)> = None;
    let mut text_lines: Vec<String> = Vec::new();
    let mut end_of_sentence = false;

    for (offset, line) in block.lines.iter().enumerate() {
        let line_number = block.line_number + offset;
        if grammar.is_timing_line(line) {
            if timings.is_some() {
                return Err(ParseError::caption(line_number, "--> found"));
            }
            timings = Some(grammar.parse_timing(line, line_number)?);
        } else if offset == 0 {
            identifier = line.clone();
        } else {
            if mark_sentences && SENTENCE_END.is_match(line) {
                end_of_sentence = true;
            }
            text_lines.push(line.clone());
        }
    }

    // Classification guarantees a timing line in the first two lines.
    let (start, end) =
        timings.ok_or_else(|| ParseError::caption(block.line_number, "Missing timing cue"))?;

    let mut caption = Caption::new(start, end);
    caption.identifier = identifier;
    caption.lines = text_lines;
    caption.end_of_sentence = end_of_sentence;
    Ok(caption)
}
