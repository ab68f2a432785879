//! Encoding a product feed summary and reading it back.
//!
//! Run with: cargo run --example product_feed

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_tagtext::{decode, from_str, tagtext, to_string, value::TIMESTAMP_FORMAT, Value};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Product {
    name: String,
    price: i64,
    link: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Summary {
    products: Vec<Product>,
    total_price: i64,
    timestamp: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let products = vec![
        Product {
            name: "Boot".to_string(),
            price: 450,
            link: "https://shop.example/boot".to_string(),
        },
        Product {
            name: "Trail Sock".to_string(),
            price: 12,
            link: "https://shop.example/sock".to_string(),
        },
    ];
    let summary = Summary {
        total_price: products.iter().map(|p| p.price).sum(),
        products,
        timestamp: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
    };

    // The payload a transport would carry as an opaque request body
    let payload = to_string(&summary)?;
    println!("Payload ({} bytes):\n{}\n", payload.len(), payload);

    let back: Summary = from_str(&payload)?;
    assert_eq!(back, summary);
    println!("Typed round-trip: ok");

    // Without a target type the payload still decodes to a tree
    let tree = decode(&payload)?;
    if let Some(total) = tree.get("total_price").and_then(Value::as_i64) {
        println!("Total price: {}", total);
    }

    // Dynamic values skip the struct definitions entirely
    let update = tagtext!({
        "products": [{ "name": "Boot", "price": 430 }],
        "total_price": 430,
        "timestamp": (Utc::now())
    });
    println!("\nDynamic update:\n{}", update);

    Ok(())
}
