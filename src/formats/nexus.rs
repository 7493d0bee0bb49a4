//! NEXUS writer with a MrBayes analysis block.
//!
//! ## NEXUS Output
//!
//! ```text
//! #NEXUS
//!
//! BEGIN DATA;
//! DIMENSIONS NTAX=2 NCHAR=8;
//! FORMAT DATATYPE=DNA GAP=- MISSING=N;
//! MATRIX
//! seq1 ACGTACGT
//! seq2 TGCANTGC
//! ;
//! END;
//!
//! begin mrbayes;
//!   set autoclose=yes nowarn=yes;
//!   lset nst=6 rates=gamma;
//!   mcmc ngen=10000 samplefreq=100 diagnfreq=1000 burninfrac=0.25 starttree=random;
//! end;
//! ```
//!
//! Line layout is reproduced exactly; MrBayes reads these files as is.

use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

use crate::model::SequenceCollection;

/// Number of MCMC generations used when none is given.
pub const DEFAULT_NGEN: u64 = 10_000;

/// Errors that can occur while writing NEXUS output.
#[derive(Error, Debug)]
pub enum NexusError {
    #[error("No sequences found: cannot write an empty NEXUS matrix")]
    EmptyInput,

    #[error("Sequence '{name}' has length {found}, expected {expected} (NCHAR)")]
    IrregularMatrix {
        name: String,
        expected: usize,
        found: usize,
    },
}

/// Result type for NEXUS operations.
pub type NexusResult<T> = Result<T, NexusError>;

/// Parameters of the generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NexusOptions {
    /// Number of MCMC generations
    pub ngen: u64,
    /// Taxon used to root the tree
    pub outgroup: Option<String>,
    /// Whether to append the MrBayes block after the DATA block
    pub mrbayes: bool,
}

impl Default for NexusOptions {
    fn default() -> Self {
        Self {
            ngen: DEFAULT_NGEN,
            outgroup: None,
            mrbayes: true,
        }
    }
}

/// Validated DATA block, rendered through `Display`.
struct DataBlock<'a> {
    sequences: &'a SequenceCollection,
    nchar: usize,
}

impl<'a> DataBlock<'a> {
    fn new(sequences: &'a SequenceCollection) -> NexusResult<Self> {
        let nchar = sequences.alignment_length().ok_or(NexusError::EmptyInput)?;

        if let Some(irregular) = sequences.find_irregular() {
            return Err(NexusError::IrregularMatrix {
                name: irregular.name.clone(),
                expected: nchar,
                found: irregular.len(),
            });
        }

        Ok(Self { sequences, nchar })
    }
}

impl fmt::Display for DataBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#NEXUS")?;
        writeln!(f)?;
        writeln!(f, "BEGIN DATA;")?;
        writeln!(
            f,
            "DIMENSIONS NTAX={} NCHAR={};",
            self.sequences.len(),
            self.nchar
        )?;
        writeln!(f, "FORMAT DATATYPE=DNA GAP=- MISSING=N;")?;
        writeln!(f, "MATRIX")?;
        for seq in self.sequences {
            writeln!(f, "{} {}", seq.name, seq.data)?;
        }
        writeln!(f, ";")?;
        writeln!(f, "END;")
    }
}

struct MrBayesBlock<'a>(&'a NexusOptions);

impl fmt::Display for MrBayesBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = self.0;
        writeln!(f, "begin mrbayes;")?;
        writeln!(f, "  set autoclose=yes nowarn=yes;")?;
        writeln!(f, "  lset nst=6 rates=gamma;")?;
        writeln!(
            f,
            "  mcmc ngen={} samplefreq=100 diagnfreq=1000 burninfrac=0.25 starttree=random;",
            options.ngen
        )?;
        if let Some(outgroup) = &options.outgroup {
            writeln!(f, "  outgroup {};", outgroup)?;
        }
        writeln!(f, "end;")
    }
}

/// Writes the `#NEXUS` header and the DATA block.
///
/// Fails if the collection is empty or if sequences differ in length.
pub fn write_data_block(sequences: &SequenceCollection) -> NexusResult<String> {
    Ok(DataBlock::new(sequences)?.to_string())
}

/// Writes the MrBayes block alone.
pub fn write_mrbayes_block(options: &NexusOptions) -> String {
    MrBayesBlock(options).to_string()
}

/// Writes the full NEXUS document.
///
/// The DATA block is followed by a blank line and the MrBayes block,
/// unless `options.mrbayes` is false.
pub fn write_nexus(sequences: &SequenceCollection, options: &NexusOptions) -> NexusResult<String> {
    let data = DataBlock::new(sequences)?;
    debug!(ntax = sequences.len(), nchar = data.nchar, "writing NEXUS matrix");

    let mut out = data.to_string();
    if options.mrbayes {
        if let Some(outgroup) = options.outgroup.as_deref() {
            if !sequences.contains(outgroup) {
                warn!(outgroup, "outgroup is not a taxon of the matrix");
            }
        }
        out.push('\n');
        out.push_str(&write_mrbayes_block(options));
    } else if let Some(outgroup) = options.outgroup.as_deref() {
        warn!(outgroup, "outgroup ignored: no MrBayes block is written");
    }

    Ok(out)
}
