#![no_main]
use algo_demos::huffman::{HuffmanDecoder, HuffmanEncoder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: String| {
    if text.is_empty() {
        return;
    }

    let encoder = HuffmanEncoder::from_text(&text).unwrap();
    let bits = encoder.encode(&text).unwrap();

    let decoder = HuffmanDecoder::from_text(&text).unwrap();
    let decoded = decoder.decode(&bits).unwrap();

    assert_eq!(decoded, text);
});
