//! Character encoding choice for the parse step

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use itertools::Itertools;
use ledgerline_core::{ImportError, ImportResult, Notifier};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Character encoding declared for a statement file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementEncoding {
    #[default]
    Utf8,
    Utf16,
}

impl StatementEncoding {
    pub fn all() -> &'static [Self] {
        &[Self::Utf8, Self::Utf16]
    }

    /// Stable identifier used by the select control and in settings
    pub fn id(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Utf16 => "utf16",
        }
    }

    /// Canonical encoding name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16 => "UTF-16",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8 (Unicode)",
            Self::Utf16 => "UTF-16",
        }
    }
}

impl fmt::Display for StatementEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StatementEncoding {
    type Err = ImportError;

    /// Accepts the identifier (`utf16`) or the canonical name (`UTF-16`), any case
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::all()
            .iter()
            .copied()
            .find(|encoding| {
                trimmed.eq_ignore_ascii_case(encoding.id())
                    || trimmed.eq_ignore_ascii_case(encoding.name())
            })
            .ok_or_else(|| ImportError::InvalidEncoding {
                value: value.to_string(),
            })
    }
}

/// One entry of the encoding dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodingOption {
    pub encoding: StatementEncoding,
    pub label: &'static str,
    pub selected: bool,
}

/// Holds the encoding the user picked for the forthcoming parse.
///
/// The choice is a declared hint. It is never checked against the file
/// contents here.
pub struct EncodingSelector {
    domain: Vec<StatementEncoding>,
    current: StatementEncoding,
    notifier: Arc<dyn Notifier>,
}

impl EncodingSelector {
    /// Selector over every known encoding
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self::with_domain(StatementEncoding::all().to_vec(), notifier)
    }

    /// Selector over a configured subset, in the given order.
    ///
    /// Duplicates are dropped. An empty domain falls back to every known encoding.
    /// The first entry is the initial choice.
    pub fn with_domain(domain: Vec<StatementEncoding>, notifier: Arc<dyn Notifier>) -> Self {
        let mut domain: Vec<_> = domain.into_iter().unique().collect();
        if domain.is_empty() {
            domain = StatementEncoding::all().to_vec();
        }
        let current = domain[0];

        Self {
            domain,
            current,
            notifier,
        }
    }

    pub fn current_encoding(&self) -> StatementEncoding {
        self.current
    }

    pub fn domain(&self) -> &[StatementEncoding] {
        &self.domain
    }

    /// Set the encoding from a select-control value such as `"utf16"`
    pub fn set_encoding(&mut self, value: &str) -> ImportResult<StatementEncoding> {
        let parsed = value
            .parse::<StatementEncoding>()
            .ok()
            .filter(|encoding| self.domain.contains(encoding));

        match parsed {
            Some(encoding) => Ok(self.apply(encoding)),
            None => Err(self.reject(value)),
        }
    }

    /// Typed variant of [`Self::set_encoding`]
    pub fn select(&mut self, encoding: StatementEncoding) -> ImportResult<StatementEncoding> {
        if self.domain.contains(&encoding) {
            Ok(self.apply(encoding))
        } else {
            Err(self.reject(encoding.id()))
        }
    }

    pub fn options(&self) -> Vec<EncodingOption> {
        self.domain
            .iter()
            .map(|encoding| EncodingOption {
                encoding: *encoding,
                label: encoding.display_name(),
                selected: *encoding == self.current,
            })
            .collect()
    }

    fn apply(&mut self, encoding: StatementEncoding) -> StatementEncoding {
        tracing::debug!(from = %self.current, to = %encoding, "Statement encoding changed");
        self.current = encoding;
        encoding
    }

    fn reject(&self, value: &str) -> ImportError {
        tracing::warn!(value, current = %self.current, "Rejected statement encoding");
        let err = ImportError::InvalidEncoding {
            value: value.to_string(),
        };
        self.notifier.notify(err.notification());
        err
    }
}
