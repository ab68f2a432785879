//! Tuning the codec with Options.
//!
//! Run with: cargo run --example custom_options

use serde_tagtext::{
    decode_with_options, encode_with_options, tagtext, Error, Options, Splitting,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let note = tagtext!({ "note": "a; b", "rows": [[1, 2], [3]] });

    // Default: nested splitting keeps delimiters inside payloads and nested containers
    let options = Options::new();
    let text = encode_with_options(&note, &options)?;
    println!("Encoded: {}", text);
    println!("Nested:  {:?}\n", decode_with_options(&text, &options)?);

    // Literal splitting cuts on every delimiter and loses the structure
    let legacy = Options::new().with_splitting(Splitting::Literal);
    println!("Literal: {:?}\n", decode_with_options(&text, &legacy)?);

    // Strict decoding rejects fragments that carry no tag
    match decode_with_options("L:[int(1);two;]", &Options::strict()) {
        Err(Error::MalformedStructure { fragment }) => {
            println!("Strict rejected fragment: {}", fragment)
        }
        other => println!("Unexpected: {:?}", other),
    }

    // Ambiguity checks refuse text that cannot survive the trip
    let risky = tagtext!(["f(x)"]);
    let checked = Options::new().with_reject_ambiguous(true);
    if let Err(err) = encode_with_options(&risky, &checked) {
        println!("Refused: {}", err);
    }

    // Depth limits apply in both directions
    let shallow = Options::new().with_max_depth(1);
    if let Err(err) = encode_with_options(&tagtext!([[1]]), &shallow) {
        println!("Refused: {}", err);
    }

    Ok(())
}
