/*!
 * Tests for the per-format grammar rules
 */

use cueparse::ParseError;
use cueparse::grammar::{SBV, SRT, WEBVTT};

use crate::common::lines;

/// Test WebVTT timing pattern with and without the optional hours group
#[test]
fn test_webvtt_timing_withOptionalHours_shouldCapture() {
    let (start, end) = WEBVTT
        .parse_timing("00:01.000 --> 00:04.000", 1)
        .unwrap();
    assert_eq!(start, "00:01.000");
    assert_eq!(end, "00:04.000");

    let (start, end) = WEBVTT
        .parse_timing("1:02:03.500 --> 1:02:07.250 align:start", 1)
        .unwrap();
    assert_eq!(start, "1:02:03.500");
    assert_eq!(end, "1:02:07.250");
}

/// Test that an arrow line with a bad timestamp is an invalid time format
#[test]
fn test_webvtt_timing_withBadTimestamp_shouldAttributeLine() {
    assert!(WEBVTT.is_timing_line("00:01 --> later"));
    let err = WEBVTT.parse_timing("00:01 --> later", 7).unwrap_err();
    assert_eq!(err, ParseError::caption(7, "Invalid time format"));
}

/// Test SubRip timing detection and the comma millisecond separator
#[test]
fn test_srt_timing_withCommaMilliseconds_shouldMatch() {
    let (start, end) = SRT
        .parse_timing("00:00:01,000 --> 00:00:04,000", 2)
        .unwrap();
    assert_eq!(start, "00:00:01,000");
    assert_eq!(end, "00:00:04,000");

    // Dot milliseconds belong to the WebVTT grammar, not SubRip
    assert!(SRT.parse_timing("00:00:01.000 --> 00:00:04.000", 2).is_err());
}

/// Test SBV timing-line detection is pattern-based, not arrow-based
#[test]
fn test_sbv_timing_withCommaSeparatedStamps_shouldDetect() {
    assert!(SBV.is_timing_line("0:00:00.000,0:00:02.000"));
    assert!(!SBV.is_timing_line("0:00:00.000 --> 0:00:02.000"));
    assert!(!SBV.is_timing_line("Some spoken text, with a comma"));

    let (start, end) = SBV.parse_timing("0:00:00.000,0:00:02.000", 1).unwrap();
    assert_eq!(start, "0:00:00.000");
    assert_eq!(end, "0:00:02.000");
}

/// Test the three signature rules
#[test]
fn test_signatures_withValidAndInvalidHeads_shouldValidate() {
    assert!(WEBVTT.check_signature(&lines(&["WEBVTT - notes"])).is_ok());
    assert!(WEBVTT.check_signature(&lines(&["WEBVT"])).is_err());

    assert!(
        SRT.check_signature(&lines(&["1", "00:00:01,000 --> 00:00:04,000"]))
            .is_ok()
    );
    assert!(SRT.check_signature(&lines(&["1"])).is_err());
    assert!(
        SRT.check_signature(&lines(&["2", "00:00:01,000 --> 00:00:04,000"]))
            .is_err()
    );

    assert!(SBV.check_signature(&lines(&["0:00:00.000,0:00:02.000"])).is_ok());
    assert!(SBV.check_signature(&lines(&["not a timing line"])).is_err());
}

/// Test comment and style header recognition
#[test]
fn test_block_headers_withNoteAndStyle_shouldRecognize() {
    assert!(WEBVTT.is_comment_header("NOTE"));
    assert!(WEBVTT.is_comment_header("NOTE this cue is tricky"));
    assert!(!WEBVTT.is_comment_header("NOTEBOOK"));

    assert!(WEBVTT.is_style_header("STYLE"));
    assert!(WEBVTT.is_style_header("STYLE \t"));
    assert!(!WEBVTT.is_style_header("STYLE inline"));

    // SubRip has neither
    assert!(!SRT.is_comment_header("NOTE"));
    assert!(!SRT.is_style_header("STYLE"));
}

/// Test bare index line recognition, enabled only for SubRip
#[test]
fn test_index_lines_withDigitsOnly_shouldSkipForSrtOnly() {
    assert!(SRT.is_index_line("12"));
    assert!(!SRT.is_index_line(""));
    assert!(!SRT.is_index_line("12a"));
    assert!(!WEBVTT.is_index_line("12"));
}
