//! # serde_hocon
//!
//! A Serde-compatible parser for a HOCON-style configuration language.
//!
//! ## What does it parse?
//!
//! Brace-delimited, nested key/value documents written for humans:
//!
//! ```text
//! # cluster settings
//! cluster {
//!     name = axlrate imdg          // unquoted strings run to the end of the line
//!     members = [node-1, node-2]
//!     heartbeat = 5 seconds        // durations normalize to nanoseconds
//!     cache.limit = 512 MB         // sizes normalize to bytes, dotted keys nest
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Serde Compatible**: binds onto any `#[derive(Deserialize)]` type, field
//!   aliases included
//! - **Human units**: `10 seconds`, `250ms`, `5 GB` become integers at tokenization
//!   time and bind to [`std::time::Duration`] or plain integer fields
//! - **Precise errors**: every lexical, structural and conversion error carries
//!   the line and column it was found at
//! - **Strict mode**: optionally reject keys the destination does not declare
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_hocon::from_str;
//! use std::time::Duration;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Cluster {
//!     name: String,
//!     members: Vec<String>,
//!     heartbeat: Duration,
//! }
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Config {
//!     cluster: Cluster,
//! }
//!
//! let doc = r#"
//! cluster {
//!     name = axlrate imdg
//!     members = [node-1, node-2]
//!     heartbeat = 5 seconds
//! }
//! "#;
//!
//! let config: Config = from_str(doc).unwrap();
//! assert_eq!(config.cluster.name, "axlrate imdg");
//! assert_eq!(config.cluster.members, vec!["node-1", "node-2"]);
//! assert_eq!(config.cluster.heartbeat, Duration::from_secs(5));
//! ```
//!
//! ## Pipeline
//!
//! Source text flows through [`scanner`] → [`lexer`] (tokens) → [`validate()`]
//! (structure) → [`de`] (binding). Each stage is public, so the token stream
//! can be inspected on its own:
//!
//! ```rust
//! use serde_hocon::{tokenize, validate, TokenKind};
//!
//! let tokens = tokenize("limit = 5 GB").unwrap();
//! validate(&tokens).unwrap();
//! assert_eq!(tokens[2].kind, TokenKind::Size);
//! ```
//!
//! The first error of any stage aborts the parse. See [`format`] for the full
//! syntax reference.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - binding a flat document
//! - **`nested_blocks.rs`** - blocks, arrays of objects and dotted keys
//! - **`dynamic_values.rs`** - working with [`Value`] and flat key paths
//! - **`strict_mode.rs`** - rejecting unknown keys
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod format;
pub mod lexer;
pub mod map;
pub mod options;
pub mod scanner;
pub mod ser;
pub mod token;
pub mod validate;
pub mod value;

pub use de::Deserializer;
pub use error::{Error, Result};
pub use lexer::{tokenize, DURATION_UNITS, SIZE_UNITS};
pub use map::HoconMap;
pub use options::HoconOptions;
pub use ser::to_value;
pub use token::{Location, Token, TokenKind};
pub use validate::validate;
pub use value::{Number, Value};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Deserialize an instance of type `T` from a string of HOCON text.
///
/// # Examples
///
/// ```rust
/// use serde_hocon::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x = 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not a valid document or cannot be bound to type `T`.
/// Error messages include line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(input: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(input, HoconOptions::default())
}

/// Deserialize an instance of type `T` from HOCON text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_hocon::{from_str_with_options, HoconOptions};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, Debug)]
/// struct Point { x: i32 }
///
/// let result = from_str_with_options::<Point>("x = 1\nz = 2", HoconOptions::strict());
/// assert!(result.is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the input is not a valid document or cannot be bound to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
#[tracing::instrument(level = "debug", skip_all, fields(len = input.len(), strict = options.strict))]
pub fn from_str_with_options<T>(input: &str, options: HoconOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    let mut deserializer = Deserializer::from_str(input)?.with_options(options);
    T::deserialize(&mut deserializer)
}

/// Deserialize an instance of type `T` from bytes of HOCON text.
///
/// # Examples
///
/// ```rust
/// use serde_hocon::from_slice;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_slice(b"x = 1\ny = 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not a valid document,
/// or cannot be bound to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Deserialize an instance of type `T` from an I/O stream of HOCON.
///
/// The whole stream is read once before parsing starts.
///
/// # Examples
///
/// ```rust
/// use serde_hocon::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_reader(Cursor::new(b"x = 1\ny = 2")).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails, the input is not a valid
/// document, or the data cannot be bound to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    from_reader_with_options(reader, HoconOptions::default())
}

/// Deserialize an instance of type `T` from an I/O stream with custom options.
///
/// # Errors
///
/// Same as [`from_reader`], plus strict-mode rejections.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R, T>(mut reader: R, options: HoconOptions) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str_with_options(&string, options)
}

/// Parses `source` into `destination`, in place.
///
/// The document is laid over the current contents of `destination`: fields
/// the document names are replaced (objects merge key by key), everything
/// else keeps its current value. Pre-populate `destination` to supply
/// defaults.
///
/// `destination` is only written when the whole document binds successfully;
/// on any error it is left exactly as it was.
///
/// # Examples
///
/// ```rust
/// use serde_hocon::{parse, Error};
/// use serde::{Deserialize, Serialize};
/// use std::io::Cursor;
///
/// #[derive(Serialize, Deserialize, Debug, PartialEq)]
/// struct Limits { max: u32, min: u32 }
///
/// let mut limits = Limits { max: 10, min: 1 };
/// parse(Some(Cursor::new("max = 7")), &mut limits).unwrap();
/// assert_eq!(limits, Limits { max: 7, min: 1 });
///
/// assert_eq!(parse(None::<Cursor<&str>>, &mut limits), Err(Error::SourceNil));
/// assert!(parse(Some(Cursor::new("max = lots")), &mut limits).is_err());
/// assert_eq!(limits.max, 7);
/// ```
///
/// # Errors
///
/// - [`Error::SourceNil`] when no source is given
/// - any error of [`from_reader`]
/// - an error if `destination` cannot be captured with [`to_value`]
pub fn parse<R, T>(source: Option<R>, destination: &mut T) -> Result<()>
where
    R: io::Read,
    T: Serialize + DeserializeOwned,
{
    parse_with_options(source, destination, HoconOptions::default())
}

/// Like [`parse`], with custom options.
///
/// # Errors
///
/// Same as [`parse`], plus strict-mode rejections.
pub fn parse_with_options<R, T>(
    source: Option<R>,
    destination: &mut T,
    options: HoconOptions,
) -> Result<()>
where
    R: io::Read,
    T: Serialize + DeserializeOwned,
{
    let mut source = source.ok_or(Error::SourceNil)?;
    let mut text = String::new();
    source
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&e.to_string()))?;

    // Checked on its own first so errors point into the document.
    let document = tokenize(&text)?;
    validate(&document)?;

    let mut tokens = match to_value(&*destination)? {
        Value::Object(current) => ser::document_tokens(&current)?,
        _ => Vec::new(),
    };
    tracing::debug!(
        carried = tokens.len(),
        document = document.len(),
        "overlaying document onto destination"
    );
    tokens.extend(document);

    let mut deserializer = Deserializer::from_tokens(&tokens)?.with_options(options);
    *destination = T::deserialize(&mut deserializer)?;
    Ok(())
}
