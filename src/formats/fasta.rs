//! FASTA file parser.
//!
//! This module handles reading FASTA files into a `SequenceCollection`.
//! Sequences may span several lines; names keep everything after '>'.
//!
//! ## FASTA Format
//!
//! ```text
//! >sequence_name with optional words
//! ACGTACGTACGT...
//! >another_sequence
//! TGCA-TGC.TGCA...
//! ```
//!
//! ## Normalization
//!
//! - Sequence data is uppercased, then '.' and '-' become 'N'
//! - Names are truncated to their first 99 characters
//! - Two names that truncate to the same key are rejected

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::model::{Sequence, SequenceCollection};

/// Maximum number of characters kept from a sequence name.
pub const MAX_NAME_LEN: usize = 99;

/// Errors that can occur during FASTA parsing.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("Failed to read FASTA file: {0}")]
    IoError(#[from] std::io::Error),

    #[error(
        "Duplicate sequence name: '{0}' (names are compared on their first {max} characters)",
        max = MAX_NAME_LEN
    )]
    DuplicateName(String),
}

/// Result type for FASTA operations.
pub type FastaResult<T> = Result<T, FastaError>;

/// Parses a FASTA file and returns its sequences.
///
/// The whole file is read into memory before parsing starts.
///
/// # Examples
///
/// ```no_run
/// use fasta2nex::formats::fasta::parse_fasta_file;
///
/// let sequences = parse_fasta_file("alignment.fasta").unwrap();
/// println!("Loaded {} sequences", sequences.len());
/// ```
pub fn parse_fasta_file<P: AsRef<Path>>(path: P) -> FastaResult<SequenceCollection> {
    let file = File::open(&path)?;
    let file_size = file.metadata()?.len() as usize;

    let mut reader = BufReader::with_capacity(1024 * 1024, file);
    let mut content = String::with_capacity(file_size);
    reader.read_to_string(&mut content)?;

    parse_fasta_str(&content)
}

/// Parses FASTA content from a string.
///
/// An empty input yields an empty collection. A leading UTF-8 byte-order
/// mark is ignored.
pub fn parse_fasta_str(content: &str) -> FastaResult<SequenceCollection> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let collection = content
        .lines()
        .try_fold(FastaAccumulator::default(), FastaAccumulator::push_line)?
        .finish()?;

    debug!(sequences = collection.len(), "parsed FASTA input");
    Ok(collection)
}

/// Uppercases sequence data and maps '.' and '-' to 'N'.
pub fn normalize_sequence(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .map(|c| if c == '.' || c == '-' { 'N' } else { c })
        .collect()
}

/// Returns the first `MAX_NAME_LEN` characters of a name.
pub fn truncate_name(name: &str) -> &str {
    match name.char_indices().nth(MAX_NAME_LEN) {
        Some((idx, _)) => &name[..idx],
        None => name,
    }
}

/// Parser state carried from one line to the next.
#[derive(Default)]
struct FastaAccumulator<'a> {
    current_name: Option<&'a str>,
    current_body: String,
    collection: SequenceCollection,
}

impl<'a> FastaAccumulator<'a> {
    fn push_line(mut self, line: &'a str) -> FastaResult<Self> {
        let line = line.trim();

        if let Some(name) = line.strip_prefix('>') {
            self.complete_record()?;
            self.current_name = Some(name);
        } else if self.current_name.is_some() {
            self.current_body.push_str(line);
        } else if !line.is_empty() {
            debug!(line, "discarding sequence data before the first header");
        }

        Ok(self)
    }

    fn complete_record(&mut self) -> FastaResult<()> {
        let Some(name) = self.current_name.take() else {
            return Ok(());
        };

        let data = normalize_sequence(&std::mem::take(&mut self.current_body));
        self.collection
            .insert(Sequence::new(truncate_name(name), data))
            .map_err(|rejected| FastaError::DuplicateName(rejected.name))
    }

    fn finish(mut self) -> FastaResult<SequenceCollection> {
        self.complete_record()?;
        Ok(self.collection)
    }
}
