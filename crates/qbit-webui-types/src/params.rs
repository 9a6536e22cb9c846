//! Request parameter records and the wire transforms applied to them.

use std::fmt;

/// Ordered `name=value` pairs sent as the body of a WebUI request.
///
/// Unset (`None`) values are never stored, so they are omitted from the body,
/// while an empty string is kept and sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(&'static str, String)>,
}

impl Params {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    pub fn with(mut self, name: &'static str, value: impl ToString) -> Self {
        self.push(name, value);
        self
    }

    /// Appends a parameter only when `value` is set.
    pub fn with_opt<V: ToString>(mut self, name: &'static str, value: Option<V>) -> Self {
        self.push_opt(name, value);
        self
    }

    /// Appends a parameter.
    pub fn push(&mut self, name: &'static str, value: impl ToString) {
        self.pairs.push((name, value.to_string()));
    }

    /// Appends a parameter only when `value` is set.
    pub fn push_opt<V: ToString>(&mut self, name: &'static str, value: Option<V>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    /// Value of the first parameter called `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(n, v)| (*n, v.as_str()))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Torrent selector accepted by the `hashes` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hashes {
    /// Every torrent known to the daemon.
    All,
    /// Explicit list of info hashes.
    List(Vec<String>),
}

impl fmt::Display for Hashes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hashes::All => f.write_str("all"),
            Hashes::List(hashes) => f.write_str(&join(hashes, "|")),
        }
    }
}

impl From<&str> for Hashes {
    fn from(value: &str) -> Self {
        if value == "all" {
            Hashes::All
        } else {
            Hashes::List(vec![value.to_string()])
        }
    }
}

impl From<String> for Hashes {
    fn from(value: String) -> Self {
        Hashes::from(value.as_str())
    }
}

impl From<Vec<String>> for Hashes {
    fn from(value: Vec<String>) -> Self {
        Hashes::List(value)
    }
}

impl From<&[&str]> for Hashes {
    fn from(value: &[&str]) -> Self {
        Hashes::List(value.iter().map(|h| h.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Hashes {
    fn from(value: [&str; N]) -> Self {
        Hashes::from(&value[..])
    }
}

/// Joins `items` with `separator`, the list encoding used by most WebUI parameters.
pub fn join<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(item.as_ref());
    }
    out
}

/// Message filter for `log/main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFilter {
    /// Include normal messages.
    pub normal: bool,
    /// Include info messages.
    pub info: bool,
    /// Include warning messages.
    pub warning: bool,
    /// Include critical messages.
    pub critical: bool,
    /// Exclude messages with an id less than or equal to this one.
    pub last_known_id: i64,
}

impl Default for LogFilter {
    fn default() -> Self {
        Self {
            normal: true,
            info: true,
            warning: true,
            critical: true,
            last_known_id: -1,
        }
    }
}

impl LogFilter {
    /// Wire parameters for `log/main`.
    pub fn to_params(&self) -> Params {
        Params::new()
            .with("normal", self.normal)
            .with("info", self.info)
            .with("warning", self.warning)
            .with("critical", self.critical)
            .with("last_known_id", self.last_known_id)
    }
}
