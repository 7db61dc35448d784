//! Canonical rendering of business data into a hashable string.
//!
//! Positional values keep their order; named values are sorted by key so the
//! order in which a caller supplies them never affects the result. Tokens are
//! joined with [`FIELD_DELIMITER`].

use std::collections::BTreeMap;
use std::fmt;

/// Delimiter placed between rendered tokens.
pub const FIELD_DELIMITER: &str = "|";

/// A value that can contribute to a derived identifier.
///
/// Every `Debug` type is representable through its debug form, which keeps
/// `123` and `"123"` apart. Types that only implement `Display` can be
/// wrapped in [`Plain`].
pub trait Representable {
    /// Renders the value for hashing.
    fn repr(&self) -> String;
}

impl<T: fmt::Debug + ?Sized> Representable for T {
    fn repr(&self) -> String {
        format!("{:?}", self)
    }
}

/// Renders the wrapped value with its `Display` form.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Plain<T>(pub T);

impl<T: fmt::Display> fmt::Debug for Plain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Business data for one derivation: an ordered list of positional values
/// and a key-sorted map of named values, both already rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    positional: Vec<String>,
    named: BTreeMap<String, String>,
}

impl Fields {
    /// Creates an empty set of fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional value.
    #[must_use]
    pub fn arg(mut self, value: impl Representable) -> Self {
        self.push_arg(value);
        self
    }

    /// Adds a named value, replacing any earlier value under the same key.
    #[must_use]
    pub fn named(mut self, key: impl Into<String>, value: impl Representable) -> Self {
        self.insert(key, value);
        self
    }

    /// Appends a positional value in place.
    pub fn push_arg(&mut self, value: impl Representable) {
        self.positional.push(value.repr());
    }

    /// Adds a named value in place.
    ///
    /// Returns the previously rendered value if the key existed.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Representable) -> Option<String> {
        self.named.insert(key.into(), value.repr())
    }

    /// Returns true if there are no positional and no named values.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Returns the canonical string for these fields.
    pub fn normalize(&self) -> String {
        let positional = self.positional.iter().cloned();
        let named = self
            .named
            .iter()
            .map(|(key, value)| format!("{}={}", key, value));

        positional
            .chain(named)
            .collect::<Vec<_>>()
            .join(FIELD_DELIMITER)
    }
}

/// Normalizes positional and named values without building [`Fields`] first.
///
/// If `named` repeats a key, the last value wins.
pub fn normalize_input(
    positional: &[&dyn Representable],
    named: &[(&str, &dyn Representable)],
) -> String {
    let mut fields = Fields::new();
    for value in positional {
        fields.positional.push(value.repr());
    }
    for (key, value) in named {
        fields.named.insert((*key).to_string(), value.repr());
    }
    fields.normalize()
}
