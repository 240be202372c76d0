/*!
 * Tests for the generic line-classifying parser (SubRip, SBV)
 */

use cueparse::{ParseError, parse_sbv, parse_srt};

use crate::common::lines;

/// Test a well-formed SubRip parse in file order
#[test]
fn test_parse_srt_withWellFormedInput_shouldReturnCaptionsInOrder() {
    let input = lines(&[
        "1",
        "00:00:01,000 --> 00:00:04,000",
        "This is a test subtitle.",
        "",
        "2",
        "00:00:05,000 --> 00:00:09,000",
        "Across two lines",
        "of text.",
    ]);

    let captions = parse_srt(&input).unwrap();
    assert_eq!(captions.len(), 2);
    assert_eq!(captions[0].start, "00:00:01,000");
    assert_eq!(captions[0].end, "00:00:04,000");
    assert_eq!(captions[0].text(), "This is a test subtitle.");
    assert_eq!(captions[1].lines, vec!["Across two lines", "of text."]);
    assert_eq!(captions[1].text(), "Across two lines of text.");
}

/// Test that the last caption is closed by end of input without a blank line
#[test]
fn test_parse_srt_withNoTrailingBlankLine_shouldCloseLastCaption() {
    let input = lines(&["1", "00:00:01,000 --> 00:00:02,000", "Tail"]);

    let captions = parse_srt(&input).unwrap();
    assert_eq!(captions.len(), 1);
    assert_eq!(captions[0].text(), "Tail");
}

/// Test the empty-caption tolerance of the numbered-cue format
#[test]
fn test_parse_srt_withEmptyCueBody_shouldSilentlyDropIt() {
    let input = lines(&[
        "1",
        "1:00:00,000 --> 1:00:02,500",
        "Hi there",
        "",
        "2",
        "1:00:03,000 --> 1:00:04,000",
        "",
        "3",
        "1:00:05,000 --> 1:00:06,000",
        "Still here",
    ]);

    let captions = parse_srt(&input).unwrap();
    assert_eq!(captions.len(), 2);
    assert_eq!(captions[0].text(), "Hi there");
    assert_eq!(captions[1].text(), "Still here");
}

/// Test that a text line with no open caption reports the missing timeframe
#[test]
fn test_parse_srt_withTextBeforeTiming_shouldFailWithLineNumber() {
    let input = lines(&[
        "1",
        "00:00:01,000 --> 00:00:04,000",
        "First",
        "",
        "stray text",
    ]);

    let err = parse_srt(&input).unwrap_err();
    assert_eq!(err, ParseError::caption(5, "Caption missing timeframe"));
}

/// Test that an arrow line failing the timing pattern is attributed exactly
#[test]
fn test_parse_srt_withInvalidTimingLine_shouldFailWithLineNumber() {
    let input = lines(&[
        "1",
        "00:00:01,000 --> 00:00:04,000",
        "First",
        "",
        "00:07 --> 00:09",
    ]);

    let err = parse_srt(&input).unwrap_err();
    assert_eq!(err, ParseError::caption(5, "Invalid time format"));
}

/// Test the file-level signature check of the numbered-cue format
#[test]
fn test_parse_srt_withBadSignature_shouldFailAsMalformedFile() {
    let input = lines(&["WEBVTT", "", "00:00:01.000 --> 00:00:04.000", "Hello"]);

    let err = parse_srt(&input).unwrap_err();
    assert!(matches!(err, ParseError::MalformedFile(_)));
}

/// Test a well-formed SBV parse
#[test]
fn test_parse_sbv_withWellFormedInput_shouldReturnCaptions() {
    let input = lines(&[
        "0:00:00.599,0:00:04.160",
        ">> ALICE: Hi, my name is Alice Munro",
        "and today we are going to talk",
        "",
        "0:00:04.160,0:00:06.770",
        "about caption files.",
    ]);

    let captions = parse_sbv(&input).unwrap();
    assert_eq!(captions.len(), 2);
    assert_eq!(captions[0].start, "0:00:00.599");
    assert_eq!(captions[0].end, "0:00:04.160");
    assert_eq!(captions[0].lines.len(), 2);
    assert_eq!(captions[1].text(), "about caption files.");
}

/// Test that SBV, unlike SubRip, refuses a cue with no text
#[test]
fn test_parse_sbv_withEmptyCueBody_shouldFailWithMissingText() {
    let input = lines(&[
        "0:00:00.000,0:00:02.000",
        "",
        "0:00:03.000,0:00:04.000",
        "Text",
    ]);

    let err = parse_sbv(&input).unwrap_err();
    assert_eq!(err, ParseError::caption(2, "Caption missing text"));
}

/// Test idempotence: two parses of the same lines agree
#[test]
fn test_parse_srt_calledTwice_shouldYieldIdenticalOutput() {
    let input = lines(&["1", "00:00:01,000 --> 00:00:04,000", "Same again"]);

    let first = parse_srt(&input).unwrap();
    let second = parse_srt(&input).unwrap();
    assert_eq!(first, second);
}
