//! Nested blocks, arrays of objects and dotted keys.
//!
//! Run with: cargo run --example nested_blocks

use serde::Deserialize;
use serde_hocon::from_str;
use std::error::Error;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct Member {
    host: String,
    port: u16,
    #[serde(default)]
    backup: bool,
}

#[derive(Debug, Deserialize)]
struct Cache {
    limit: u64,
    ttl: Duration,
}

#[derive(Debug, Deserialize)]
struct Cluster {
    name: String,
    members: Vec<Member>,
    cache: Cache,
}

#[derive(Debug, Deserialize)]
struct Config {
    cluster: Cluster,
}

fn main() -> Result<(), Box<dyn Error>> {
    let doc = r#"
cluster {
    name = axlrate imdg
    members = [
        { host = node-1, port = 5701 }
        { host = node-2, port = 5701, backup = true }
    ]
    cache {
        limit = 512 MB
    }
}

# dotted keys merge into the block above
cluster.cache.ttl = 10 minutes
"#;

    let config: Config = from_str(doc)?;
    let cluster = &config.cluster;

    println!("Cluster: {}", cluster.name);
    for member in &cluster.members {
        let role = if member.backup { "backup" } else { "primary" };
        println!("  {}:{} ({})", member.host, member.port, role);
    }
    println!(
        "Cache: {} bytes, ttl {:?}",
        cluster.cache.limit, cluster.cache.ttl
    );

    assert_eq!(cluster.cache.ttl, Duration::from_secs(600));
    println!("\n✓ Dotted key merged into block");

    Ok(())
}
