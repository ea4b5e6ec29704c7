//! Huffman coding over text.
//!
//! Builds an optimal prefix code from the character frequencies of the
//! input itself, so the same text yields the same codebook on the encode
//! and decode side.
//!
//! # Historical Context
//!
//! Huffman's 1952 construction (repeatedly merging the two least frequent
//! symbols) produces a prefix code of minimal expected length. It is the
//! classic greedy counterpart to the dynamic-programming problems elsewhere
//! in this crate.

use std::collections::{BTreeMap, BinaryHeap};

use crate::error::{Error, Result};

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Leaf {
        symbol: char,
        freq: u64,
    },
    Internal {
        left: Box<Node>,
        right: Box<Node>,
        freq: u64,
    },
}

impl Node {
    fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.freq().cmp(&self.freq()) // Min-priority queue
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Count character frequencies in `text`.
///
/// The map is ordered so that tree construction visits symbols in a fixed
/// order; encoder and decoder built from the same text derive the same tree.
pub fn count_frequencies(text: &str) -> BTreeMap<char, u64> {
    let mut counts = BTreeMap::new();
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

fn build_tree(counts: &BTreeMap<char, u64>) -> Option<Node> {
    let mut pq = BinaryHeap::new();
    for (&symbol, &freq) in counts {
        pq.push(Node::Leaf { symbol, freq });
    }

    while pq.len() > 1 {
        let left = pq.pop()?;
        let right = pq.pop()?;
        let freq = left.freq() + right.freq();
        pq.push(Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            freq,
        });
    }

    pq.pop()
}

/// Huffman encoder holding the symbol-to-bits codebook.
#[derive(Debug)]
pub struct HuffmanEncoder {
    codes: BTreeMap<char, Vec<u8>>,
}

impl HuffmanEncoder {
    /// Build a codebook from the character frequencies of `text`.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` if `text` has no characters.
    pub fn from_text(text: &str) -> Result<Self> {
        let counts = count_frequencies(text);
        let root = build_tree(&counts).ok_or(Error::EmptyInput)?;

        let mut codes = BTreeMap::new();
        Self::assign_codes(&root, Vec::new(), &mut codes);
        Ok(Self { codes })
    }

    fn assign_codes(node: &Node, prefix: Vec<u8>, codes: &mut BTreeMap<char, Vec<u8>>) {
        match node {
            Node::Leaf { symbol, .. } => {
                // A single-symbol alphabet still needs a one-bit code.
                codes.insert(*symbol, if prefix.is_empty() { vec![0] } else { prefix });
            }
            Node::Internal { left, right, .. } => {
                let mut left_prefix = prefix.clone();
                left_prefix.push(0);
                Self::assign_codes(left, left_prefix, codes);

                let mut right_prefix = prefix;
                right_prefix.push(1);
                Self::assign_codes(right, right_prefix, codes);
            }
        }
    }

    /// The full symbol-to-bits codebook, ordered by symbol.
    pub fn codes(&self) -> &BTreeMap<char, Vec<u8>> {
        &self.codes
    }

    /// The code word for a single symbol, if it is in the alphabet.
    pub fn code_for(&self, symbol: char) -> Option<&[u8]> {
        self.codes.get(&symbol).map(Vec::as_slice)
    }

    /// Encode `text` into a bit sequence (one `u8` per bit, 0 or 1).
    ///
    /// # Errors
    /// Returns `Error::UnknownSymbol` for a character absent from the
    /// codebook.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        let mut bits = Vec::new();
        for c in text.chars() {
            let code = self.codes.get(&c).ok_or(Error::UnknownSymbol(c))?;
            bits.extend_from_slice(code);
        }
        Ok(bits)
    }
}

/// Huffman decoder holding the code tree.
#[derive(Debug)]
pub struct HuffmanDecoder {
    root: Node,
}

impl HuffmanDecoder {
    /// Build the code tree from the character frequencies of `text`.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` if `text` has no characters.
    pub fn from_text(text: &str) -> Result<Self> {
        let counts = count_frequencies(text);
        let root = build_tree(&counts).ok_or(Error::EmptyInput)?;
        Ok(Self { root })
    }

    /// Decode a bit sequence back into text.
    ///
    /// # Errors
    /// Returns `Error::TruncatedBits` if the stream ends in the middle of a
    /// code word.
    pub fn decode(&self, bits: &[u8]) -> Result<String> {
        // A one-leaf tree maps every bit to its only symbol.
        if let Node::Leaf { symbol, .. } = self.root {
            return Ok(std::iter::repeat(symbol).take(bits.len()).collect());
        }

        let mut out = String::new();
        let mut at_root = true;
        let mut curr = &self.root;
        for &bit in bits {
            if let Node::Internal { left, right, .. } = curr {
                curr = if bit == 0 { left } else { right };
                at_root = false;
            }

            if let Node::Leaf { symbol, .. } = curr {
                out.push(*symbol);
                curr = &self.root;
                at_root = true;
            }
        }

        if at_root {
            Ok(out)
        } else {
            Err(Error::TruncatedBits)
        }
    }
}

/// Ratio of encoded size to the original's fixed-width size, taking the
/// original at eight bits per character.
pub fn compression_ratio(original_chars: usize, encoded_bits: usize) -> f64 {
    if original_chars == 0 {
        return 0.0;
    }
    encoded_bits as f64 / (original_chars as f64 * 8.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_abracadabra() {
        let text = "abracadabra";
        let encoder = HuffmanEncoder::from_text(text).unwrap();
        let bits = encoder.encode(text).unwrap();

        let decoder = HuffmanDecoder::from_text(text).unwrap();
        assert_eq!(decoder.decode(&bits).unwrap(), text);

        // 5 symbols, skewed counts: well under 8 bits per character.
        assert!(bits.len() < text.len() * 8);
    }

    #[test]
    fn frequent_symbols_get_shorter_codes() {
        let encoder = HuffmanEncoder::from_text("aaaaaaab").unwrap();
        let a = encoder.code_for('a').unwrap();
        let b = encoder.code_for('b').unwrap();
        assert!(a.len() <= b.len());
    }

    #[test]
    fn single_symbol_text() {
        let text = "zzzz";
        let encoder = HuffmanEncoder::from_text(text).unwrap();
        let bits = encoder.encode(text).unwrap();
        assert_eq!(bits, vec![0, 0, 0, 0]);

        let decoder = HuffmanDecoder::from_text(text).unwrap();
        assert_eq!(decoder.decode(&bits).unwrap(), text);
    }

    #[test]
    fn empty_text_is_rejected() {
        assert_eq!(HuffmanEncoder::from_text("").unwrap_err(), Error::EmptyInput);
        assert_eq!(HuffmanDecoder::from_text("").unwrap_err(), Error::EmptyInput);
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let encoder = HuffmanEncoder::from_text("abc").unwrap();
        assert_eq!(encoder.encode("abd").unwrap_err(), Error::UnknownSymbol('d'));
    }

    #[test]
    fn truncated_stream_is_rejected() {
        let text = "abracadabra";
        let encoder = HuffmanEncoder::from_text(text).unwrap();
        let mut bits = encoder.encode(text).unwrap();
        bits.pop();

        let decoder = HuffmanDecoder::from_text(text).unwrap();
        assert_eq!(decoder.decode(&bits).unwrap_err(), Error::TruncatedBits);
    }

    #[test]
    fn codes_are_prefix_free() {
        let encoder = HuffmanEncoder::from_text("the quick brown fox").unwrap();
        let codes: Vec<&Vec<u8>> = encoder.codes().values().collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "{a:?} is a prefix of {b:?}");
                }
            }
        }
    }
}
