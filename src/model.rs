//! Data model for the converter.
//!
//! This module contains the data structures passed from the FASTA parser
//! to the NEXUS writer:
//! - `Sequence`: one named, normalized sequence
//! - `SequenceCollection`: the ordered set of sequences read from one file

use std::collections::HashSet;

/// Represents a single sequence with its name and data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    /// The sequence name (from FASTA header, without '>', truncated)
    pub name: String,
    /// The normalized sequence data
    pub data: String,
}

impl Sequence {
    /// Creates a new sequence.
    pub fn new(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Returns the length of the sequence in characters.
    pub fn len(&self) -> usize {
        self.data.chars().count()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the sequence data as a string slice.
    pub fn as_str(&self) -> &str {
        &self.data
    }
}

/// Ordered collection of uniquely named sequences.
///
/// Sequences keep the order in which they first appeared in the input.
/// Only the parser adds to a collection; consumers get read-only access.
#[derive(Debug, Clone, Default)]
pub struct SequenceCollection {
    sequences: Vec<Sequence>,
    names: HashSet<String>,
}

impl SequenceCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sequence, handing it back if its name is already taken.
    pub(crate) fn insert(&mut self, sequence: Sequence) -> Result<(), Sequence> {
        if self.names.contains(&sequence.name) {
            return Err(sequence);
        }
        self.names.insert(sequence.name.clone());
        self.sequences.push(sequence);
        Ok(())
    }

    /// Returns the number of sequences.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Returns true if the collection holds no sequence.
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Gets a sequence by index.
    pub fn get(&self, index: usize) -> Option<&Sequence> {
        self.sequences.get(index)
    }

    /// Returns true if a sequence with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterates over sequences in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sequence> {
        self.sequences.iter()
    }

    /// Iterates over sequence names in input order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sequences.iter().map(|s| s.name.as_str())
    }

    /// Length of the first sequence, used as the matrix width.
    pub fn alignment_length(&self) -> Option<usize> {
        self.sequences.first().map(Sequence::len)
    }

    /// Returns the first sequence whose length differs from the first one.
    pub fn find_irregular(&self) -> Option<&Sequence> {
        let expected = self.alignment_length()?;
        self.sequences.iter().find(|s| s.len() != expected)
    }
}

impl<'a> IntoIterator for &'a SequenceCollection {
    type Item = &'a Sequence;
    type IntoIter = std::slice::Iter<'a, Sequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(entries: &[(&str, &str)]) -> SequenceCollection {
        let mut collection = SequenceCollection::new();
        for (name, data) in entries {
            collection.insert(Sequence::new(*name, *data)).unwrap();
        }
        collection
    }

    #[test]
    fn test_insert_keeps_order() {
        let collection = collection(&[("b", "AC"), ("a", "GT"), ("c", "TT")]);
        let names: Vec<&str> = collection.names().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(collection.get(1).unwrap().as_str(), "GT");
    }

    #[test]
    fn test_insert_rejects_duplicate() {
        let mut collection = collection(&[("seq1", "ACGT")]);
        let rejected = collection.insert(Sequence::new("seq1", "TTTT")).unwrap_err();
        assert_eq!(rejected.data, "TTTT");
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get(0).unwrap().as_str(), "ACGT");
    }

    #[test]
    fn test_alignment_length() {
        assert_eq!(SequenceCollection::new().alignment_length(), None);
        let collection = collection(&[("seq1", "ACGTA"), ("seq2", "TTTTT")]);
        assert_eq!(collection.alignment_length(), Some(5));
        assert!(collection.find_irregular().is_none());
    }

    #[test]
    fn test_find_irregular() {
        let collection = collection(&[("seq1", "ACGT"), ("seq2", "ACGT"), ("seq3", "AC")]);
        assert_eq!(collection.find_irregular().unwrap().name, "seq3");
    }

    #[test]
    fn test_sequence_len_counts_chars() {
        let seq = Sequence::new("s", "ÅCG");
        assert_eq!(seq.len(), 3);
        assert!(!seq.is_empty());
        assert!(Sequence::new("e", "").is_empty());
    }
}
