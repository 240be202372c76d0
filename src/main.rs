// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use log::{debug, info};

use cueparse::formats::{self, Format};
use cueparse::{SentenceGrouping, export};

/// CLI wrapper for Format to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliFormat {
    Webvtt,
    Srt,
    Sbv,
}

impl From<CliFormat> for Format {
    fn from(cli_format: CliFormat) -> Self {
        match cli_format {
            CliFormat::Webvtt => Format::WebVtt,
            CliFormat::Srt => Format::Srt,
            CliFormat::Sbv => Format::Sbv,
        }
    }
}

/// cueparse - convert caption files to JSON
///
/// Parses a WebVTT, SubRip or SBV caption file and writes the captions as
/// JSON to stdout or a file.
#[derive(Parser, Debug)]
#[command(name = "cueparse", version)]
struct CommandLineOptions {
    /// Input caption file
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Caption format; detected from the file extension when omitted
    #[arg(short, long, value_enum)]
    format: Option<CliFormat>,

    /// Merge consecutive WebVTT cues into sentence-level captions
    #[arg(short, long)]
    group_sentences: bool,

    /// With --group-sentences, keep a sentence group left open at end of
    /// input instead of dropping it
    #[arg(long, requires = "group_sentences")]
    flush_unterminated: bool,

    /// Export only the caption texts as a JSON string array
    #[arg(short, long)]
    text_only: bool,

    /// Output JSON file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = CommandLineOptions::parse();

    let format = match options.format {
        Some(cli_format) => cli_format.into(),
        None => Format::from_path(&options.input_path).ok_or_else(|| {
            anyhow!(
                "Cannot detect caption format from {:?}; pass --format",
                options.input_path
            )
        })?,
    };

    let output = if options.group_sentences {
        if format != Format::WebVtt {
            return Err(anyhow!("--group-sentences is only supported for WebVTT input"));
        }
        let grouping = if options.flush_unterminated {
            SentenceGrouping::Flush
        } else {
            SentenceGrouping::Drop
        };
        formats::parse_webvtt_file_sentences(&options.input_path, grouping)?
    } else {
        formats::parse_file(&options.input_path, format)?
    };

    info!(
        "parsed {} captions and {} style blocks from {}",
        output.captions.len(),
        output.styles.len(),
        options.input_path.display()
    );
    for caption in &output.captions {
        debug!("{}", caption);
    }

    let json = if options.text_only {
        export::texts_to_json(&output.captions)?
    } else {
        export::captions_to_json(&output.captions)?
    };

    match options.output {
        Some(path) => {
            export::write_json_file(&path, &json)?;
            info!("wrote {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
