//! # cli
//! Command line front end: reads horst logs from files or stdin, decodes
//! every line and prints the frames in the requested format.
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use horst::{Decoder, DecoderConfig, FieldPrefix, PacketType};
use tracing::{info, warn};

mod output;
mod reader;

use output::write_frame;

#[derive(Parser, Debug)]
#[command(author, version, about = "Decode horst frame logs", long_about = None)]
struct Args {
    /// horst log files, stdin when omitted or `-`
    files: Vec<PathBuf>,

    /// output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// columns come without horst's leading space
    #[arg(long)]
    trimmed: bool,

    /// skip lines that fail to decode instead of stopping
    #[arg(short, long)]
    keep_going: bool,

    /// list the packet types horst reports
    #[arg(short, long)]
    list_types: bool,

    /// debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Format {
    ///one summary line per frame
    Text,
    ///one JSON object per frame
    Json,
    ///horst's own column layout, normalized
    Fields,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub decoded: usize,
    pub rejected: usize,
}

/// Decoding session shared by all inputs of one run
pub struct Session {
    decoder: Decoder,
    format: Format,
    keep_going: bool,
    stats: Stats,
}

impl Session {
    pub fn new(config: DecoderConfig, format: Format, keep_going: bool) -> Self {
        Session {
            decoder: Decoder::new(config),
            format,
            keep_going,
            stats: Stats::default(),
        }
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Decodes every line of `input`, writing frames to `out`
    pub fn decode_source<R: Read, W: Write>(&mut self, name: &str, input: R, out: &mut W) -> Result<()> {
        let mut records = reader::records(input);
        for record in records.records() {
            let (line, fields) = match record {
                Ok(record) => (reader::line_of(&record), record),
                Err(err) if self.keep_going => {
                    warn!(source = name, error = %err, "skipping unreadable line");
                    self.stats.rejected += 1;
                    continue;
                }
                Err(err) => return Err(err).with_context(|| format!("reading {name}")),
            };

            let columns: Vec<&str> = fields.iter().collect();
            match self.decoder.decode(&columns) {
                Ok(frame) => {
                    write_frame(out, &frame, self.format)?;
                    self.stats.decoded += 1;
                }
                Err(err) if self.keep_going => {
                    warn!(source = name, line, error = %err, cause = ?err.cause(), "skipping line");
                    self.stats.rejected += 1;
                }
                Err(err) => return Err(err).with_context(|| format!("{name}:{line}")),
            }
        }
        Ok(())
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse(); //parse arguments

    let level = if args.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    // list arg
    if args.list_types {
        list_types();
        return Ok(());
    }

    let prefix = if args.trimmed { FieldPrefix::Trimmed } else { FieldPrefix::Separator };
    let mut session = Session::new(DecoderConfig::new().with_prefix(prefix), args.format, args.keep_going);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let stdin_only = [PathBuf::from("-")];
    let files = if args.files.is_empty() { &stdin_only[..] } else { &args.files[..] };
    for path in files {
        if path == Path::new("-") {
            session.decode_source("stdin", io::stdin().lock(), &mut out)?;
        } else {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            session.decode_source(&path.display().to_string(), BufReader::new(file), &mut out)?;
        }
    }
    out.flush()?;

    let stats = session.stats();
    info!(decoded = stats.decoded, rejected = stats.rejected, "done");
    Ok(())
}

fn list_types() {
    for packet_type in PacketType::ALL {
        let layer = if packet_type.is_wlan() { "802.11" } else { "upper" };
        println!("{:<8}{:<8}{}", packet_type.as_str(), layer, packet_type.description());
    }
}
