//! Rejecting keys the destination does not declare.
//!
//! Run with: cargo run --example strict_mode

use serde::Deserialize;
use serde_hocon::{from_str, from_str_with_options, Error, HoconOptions};

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Database {
    url: String,
    pool_size: u32,
}

fn main() {
    let doc = r#"
url = "postgres://localhost/app"
pool_size = 16
pool_sise = 32   # typo
"#;

    match from_str::<Database>(doc) {
        Ok(db) => println!("Lenient: {:?} (typo ignored)", db),
        Err(e) => println!("Lenient: unexpected error: {}", e),
    }

    match from_str_with_options::<Database>(doc, HoconOptions::strict()) {
        Ok(db) => println!("Strict: unexpected success: {:?}", db),
        Err(Error::InvalidInputField { line, col, field }) => {
            println!("Strict: unknown key `{}` at {}:{}", field, line, col)
        }
        Err(e) => println!("Strict: {}", e),
    }
}
