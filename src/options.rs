//! Configuration options for binding.
//!
//! [`HoconOptions`] controls how the binder treats keys that have no
//! matching destination field:
//!
//! - **Lenient** (default): unknown keys and their values are skipped, so a
//!   document may carry entries a given program does not care about
//! - **Strict**: the first unknown key fails with [`crate::Error::InvalidInputField`]
//!
//! Syntax is checked in full either way; only unknown keys are ever skipped.
//!
//! ## Examples
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_hocon::{from_str, from_str_with_options, Error, HoconOptions};
//!
//! #[derive(Deserialize, Debug)]
//! struct Server { port: u16 }
//!
//! let doc = "port = 80\nlegacy_flag = true";
//! assert!(from_str::<Server>(doc).is_ok());
//!
//! let options = HoconOptions::new().with_strict(true);
//! let err = from_str_with_options::<Server>(doc, options).unwrap_err();
//! assert!(matches!(err, Error::InvalidInputField { line: 2, col: 1, .. }));
//! ```

/// Configuration options for HOCON binding.
///
/// # Examples
///
/// ```rust
/// use serde_hocon::HoconOptions;
///
/// let options = HoconOptions::new();
/// assert!(!options.strict);
///
/// let options = HoconOptions::strict();
/// assert!(options.strict);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoconOptions {
    /// Reject keys without a matching destination field.
    pub strict: bool,
}

impl HoconOptions {
    /// Creates default (lenient) options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that reject unknown keys.
    #[must_use]
    pub fn strict() -> Self {
        HoconOptions { strict: true }
    }

    /// Turns strict mode on or off.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hocon::HoconOptions;
    ///
    /// let options = HoconOptions::strict().with_strict(false);
    /// assert_eq!(options, HoconOptions::new());
    /// ```
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
