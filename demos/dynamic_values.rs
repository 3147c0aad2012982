//! Working with Value when the shape is not known up front.
//!
//! Run with: cargo run --example dynamic_values

use serde_hocon::{from_str, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = r#"
service {
    name = billing
    replicas = 3
    ratio = 0.25
    features = [auth, audit]
}
service.limits.requests = 1000
"#;

    let config: Value = from_str(doc)?;

    println!("Document:\n{}\n", config);

    // Path lookups
    if let Some(name) = config.get_path("service.name").and_then(Value::as_str) {
        println!("service.name = {}", name);
    }
    if let Some(replicas) = config.get_path("service.replicas").and_then(Value::as_i64) {
        println!("service.replicas = {}", replicas);
    }
    if let Some(features) = config.get_path("service.features").and_then(Value::as_array) {
        println!("service.features has {} items\n", features.len());
    }

    // Flat view of every leaf
    println!("Flattened:");
    for (path, value) in config.flatten().iter() {
        println!("  {} = {}", path, value);
    }

    // Interop with serde_json-style consumers
    let json = serde_json::to_string_pretty(&config)?;
    println!("\nAs JSON:\n{}", json);

    Ok(())
}
