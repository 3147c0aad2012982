//! Syntax reference for the configuration language accepted by this crate.
//!
//! This module contains no code; it documents the grammar as implemented.
//!
//! # Documents
//!
//! A document is an implicit object: a sequence of statements separated by
//! newlines or commas. Each statement is a key followed by either an
//! assignment (`=` or `:`) and a value, or directly by a `{ ... }` block.
//!
//! ```text
//! name = axlrate
//! port: 8080
//! server {
//!     host = localhost
//! }
//! ```
//!
//! `key = { ... }`, `key: { ... }` and `key { ... }` are equivalent.
//!
//! # Keys
//!
//! - Unquoted keys are runs of letters, digits (not leading), `-`, `_` and `.`
//! - A word is a key only when the next non-blank character on its line is
//!   `=`, `:` or `{`; a word standing alone is an error
//! - Dots split a key into a path: `a.b.c = 1` is `a { b { c = 1 } }`, and an
//!   empty segment (`a..b`) is an error
//! - Quoted keys (`"a.b" = 1`) are taken literally and never split
//!
//! ```rust
//! use serde_hocon::{from_str, Value};
//!
//! let value: Value = from_str("a.b.c = 1\n\"x.y\" = 2").unwrap();
//! assert_eq!(value.get_path("a.b.c"), Some(&Value::from(1)));
//! assert!(value.as_object().unwrap().contains_key("x.y"));
//! ```
//!
//! # Repeated Keys
//!
//! Objects assigned to the same key merge, in source order. Any other value
//! replaces what came before, and an object replaces an earlier scalar.
//!
//! ```rust
//! use serde_hocon::{from_str, Value};
//!
//! let value: Value = from_str("a { b = 10 }\na.c = 20\na.b = 30").unwrap();
//! assert_eq!(value.get_path("a.b"), Some(&Value::from(30)));
//! assert_eq!(value.get_path("a.c"), Some(&Value::from(20)));
//! ```
//!
//! # Values
//!
//! | Kind | Example | Bound as |
//! |------|---------|----------|
//! | Boolean | `true`, `false` | `bool` |
//! | Integer | `42`, `-7` | any integer type, range checked |
//! | Float | `0.75`, `1e3` | `f32`, `f64` |
//! | Duration | `10 seconds`, `250ms` | nanoseconds; `std::time::Duration` |
//! | Size | `5 GB`, `512kb` | bytes |
//! | Quoted string | `"a \"b\""` | `String` |
//! | Multi-line string | `"""..."""` | `String`, verbatim |
//! | Unquoted string | `axlrate imdg` | `String` |
//! | Array | `[1, 2, 3]`, `[1 2 3]` | `Vec<T>`, tuples |
//! | Object | `{ a = 1 }` | structs, maps |
//!
//! ## Unquoted Values
//!
//! After `=` or `:` an unquoted value runs until the end of the line, a
//! comment, or one of these characters:
//!
//! ```text
//! $ " { } [ ] : = , + # ` ^ ? ! @ * &
//! ```
//!
//! Trailing whitespace is trimmed and inner whitespace kept. Inside arrays a
//! run also stops at `,` and `]`, and whitespace separates elements unless the
//! whole run is a duration or size.
//!
//! When two statements share a line (`port = 80 host = x`), the last word
//! before the second assignment starts the next statement.
//!
//! ## Durations
//!
//! A non-negative integer, optional blanks, and one of these units:
//!
//! | Unit | Spellings |
//! |------|-----------|
//! | nanosecond | `ns`, `nano`, `nanos`, `nanosecond`, `nanoseconds` |
//! | microsecond | `us`, `micro`, `micros`, `microsecond`, `microseconds` |
//! | millisecond | `ms`, `milli`, `millis`, `millisecond`, `milliseconds` |
//! | second | `s`, `second`, `seconds` |
//! | minute | `m`, `minute`, `minutes` |
//! | hour | `h`, `hour`, `hours` |
//! | day | `d`, `day`, `days` |
//! | week | `w`, `week`, `weeks` |
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_hocon::from_str;
//! use std::time::Duration;
//!
//! #[derive(Deserialize)]
//! struct Timeouts { connect: Duration, idle: Duration }
//!
//! let t: Timeouts = from_str("connect = 250ms\nidle = 2 hours").unwrap();
//! assert_eq!(t.connect, Duration::from_millis(250));
//! assert_eq!(t.idle, Duration::from_secs(7200));
//! ```
//!
//! A leading minus sign is an error, as is a product that does not fit in
//! 64 bits.
//!
//! ## Sizes
//!
//! A non-negative integer, optional blanks, and a unit from `B`/`b`/`byte`/`bytes`,
//! the `kb`, `mb` and `gb` families in any letter case, or
//! `kilobyte(s)`/`megabyte(s)`/`gigabyte(s)`. Units are binary: `1 kb` is 1024 bytes.
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_hocon::from_str;
//!
//! #[derive(Deserialize)]
//! struct Limits { heap: u64 }
//!
//! let limits: Limits = from_str("heap = 2 GB").unwrap();
//! assert_eq!(limits.heap, 2 * 1024 * 1024 * 1024);
//! ```
//!
//! # Comments
//!
//! `#` and `//` start a comment that runs to the end of the line. Comments
//! may follow a value on the same line.
//!
//! # Arrays
//!
//! Arrays appear only after `=` or `:`, or nested inside another array.
//! Elements are scalars, objects or arrays, separated by commas, blanks or
//! newlines.
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_hocon::from_str;
//!
//! #[derive(Deserialize)]
//! struct Node { host: String }
//!
//! #[derive(Deserialize)]
//! struct Cluster { ports: Vec<u16>, nodes: Vec<Node> }
//!
//! let doc = "ports = [80 443]\nnodes = [\n  { host = a }\n  { host = b }\n]";
//! let cluster: Cluster = from_str(doc).unwrap();
//! assert_eq!(cluster.ports, vec![80, 443]);
//! assert_eq!(cluster.nodes[1].host, "b");
//! ```
//!
//! # Not Supported
//!
//! Substitutions (`${...}`), `include` directives and environment variable
//! fallback are not part of this language.
