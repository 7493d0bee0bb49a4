//! FASTA to NEXUS conversion.
//!
//! - `fasta`: reads a FASTA file into a `SequenceCollection`
//! - `nexus`: writes a collection as a NEXUS matrix with a MrBayes block
//!
//! `convert_file` chains both steps. The document is fully rendered
//! before it is returned, so any failure yields no output at all.

pub mod fasta;
pub mod nexus;

use std::path::Path;

use thiserror::Error;

use fasta::parse_fasta_file;
use nexus::{write_nexus, NexusOptions};

/// Errors that can occur during a conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("FASTA error: {0}")]
    FastaError(#[from] fasta::FastaError),

    #[error("NEXUS error: {0}")]
    NexusError(#[from] nexus::NexusError),
}

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Converts a FASTA file into a NEXUS document.
pub fn convert_file<P: AsRef<Path>>(path: P, options: &NexusOptions) -> ConvertResult<String> {
    let sequences = parse_fasta_file(path)?;
    Ok(write_nexus(&sequences, options)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fasta_file(content: &str) -> NamedTempFile {
        let mut temp = NamedTempFile::with_suffix(".fasta").unwrap();
        temp.write_all(content.as_bytes()).unwrap();
        temp.flush().unwrap();
        temp
    }

    #[test]
    fn test_convert_file() {
        let temp = fasta_file(">seq1\nACGTACGT\n>seq2\nTGCA-TGC\n");
        let options = NexusOptions {
            ngen: 5000,
            outgroup: Some("seq1".to_string()),
            ..NexusOptions::default()
        };

        let output = convert_file(temp.path(), &options).unwrap();
        assert!(output.starts_with("#NEXUS\n\nBEGIN DATA;\nDIMENSIONS NTAX=2 NCHAR=8;\n"));
        assert!(output.contains("seq2 TGCANTGC\n;\nEND;\n\nbegin mrbayes;\n"));
        assert!(output.ends_with("  outgroup seq1;\nend;\n"));
    }

    #[test]
    fn test_convert_empty_file() {
        let temp = fasta_file("");
        let result = convert_file(temp.path(), &NexusOptions::default());
        assert!(matches!(
            result,
            Err(ConvertError::NexusError(nexus::NexusError::EmptyInput))
        ));
    }

    #[test]
    fn test_convert_duplicate_names() {
        let temp = fasta_file(">seq1\nACGT\n>seq1\nACGT\n");
        let result = convert_file(temp.path(), &NexusOptions::default());
        assert!(matches!(
            result,
            Err(ConvertError::FastaError(fasta::FastaError::DuplicateName(_)))
        ));
    }

    #[test]
    fn test_convert_missing_file() {
        let result = convert_file("no/such/input.fasta", &NexusOptions::default());
        assert!(matches!(
            result,
            Err(ConvertError::FastaError(fasta::FastaError::IoError(_)))
        ));
    }
}
