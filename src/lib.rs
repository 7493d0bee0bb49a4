//! # fasta2nex - FASTA to NEXUS converter
//!
//! Turns a FASTA alignment into a NEXUS character matrix followed by a
//! MrBayes block, ready to be run by MrBayes.
//!
//! ## Architecture
//!
//! A strict two-step pipeline:
//! - `model`: `Sequence` and the ordered `SequenceCollection`
//! - `formats::fasta`: FASTA parsing, name truncation and normalization
//! - `formats::nexus`: NEXUS and MrBayes serialization
//!
//! ## Example
//!
//! ```no_run
//! use fasta2nex::formats::convert_file;
//! use fasta2nex::formats::nexus::NexusOptions;
//!
//! let nexus = convert_file("alignment.fasta", &NexusOptions::default()).unwrap();
//! print!("{}", nexus);
//! ```

pub mod formats;
pub mod model;
