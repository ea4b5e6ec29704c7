//! Huffman coding demo: build a code for a line of text, show the
//! codebook, and round-trip the encoding.

use std::io::{self, BufRead};

use algo_demos::huffman::{compression_ratio, HuffmanDecoder, HuffmanEncoder};

const SAMPLE: &str = "abracadabra";

fn bit_string(bits: &[u8]) -> String {
    bits.iter().map(|&b| if b == 0 { '0' } else { '1' }).collect()
}

fn main() {
    env_logger::init();

    println!("Enter text to encode (empty line uses \"{SAMPLE}\"):");
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line).unwrap_or(0);
    let trimmed = line.trim_end_matches(['\r', '\n']);
    let text = if read == 0 || trimmed.is_empty() {
        SAMPLE
    } else {
        trimmed
    };

    let encoder = HuffmanEncoder::from_text(text).expect("text is non-empty");
    let encoded = encoder.encode(text).expect("codebook covers the input");

    println!("\nHuffman codes:");
    for (symbol, code) in encoder.codes() {
        println!("  {:?}: {}", symbol, bit_string(code));
    }

    println!("\nOriginal text:  {text}");
    println!("Encoded text:   {}", bit_string(&encoded));

    let original_bits = text.chars().count() * 8;
    println!("\nOriginal size:   {original_bits} bits");
    println!("Compressed size: {} bits", encoded.len());
    println!(
        "Compression:     {:.1}% of fixed-width",
        compression_ratio(text.chars().count(), encoded.len()) * 100.0
    );

    let decoder = HuffmanDecoder::from_text(text).expect("text is non-empty");
    let decoded = decoder.decode(&encoded).expect("encoded stream is complete");
    println!("\nDecoded text:   {decoded}");
    println!("Round trip:     {}", if decoded == text { "ok" } else { "MISMATCH" });
}
