//! Binding a flat document onto a struct.
//!
//! Run with: cargo run --example simple

use serde::Deserialize;
use serde_hocon::from_str;
use std::error::Error;
use std::time::Duration;

#[derive(Debug, Deserialize, PartialEq)]
struct Server {
    host: String,
    port: u16,
    timeout: Duration,
    max_body: u64,
    tls: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let doc = r#"
# HTTP front end
host = "0.0.0.0"
port: 8080
timeout = 30 seconds   // per request
max_body = 8 MB
tls = false
"#;

    let server: Server = from_str(doc)?;
    println!("{:#?}\n", server);

    assert_eq!(server.timeout, Duration::from_secs(30));
    assert_eq!(server.max_body, 8 * 1024 * 1024);
    println!("✓ Units normalized");

    Ok(())
}
