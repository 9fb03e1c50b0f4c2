use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::CoreError;
use crate::types::VersionRecord;

/// Textual date format used in version records and changelog entries.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Today's date in [`DATE_FORMAT`].
#[must_use]
pub fn today() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}

/// A parsed `X.Y.Z[-suffix]` version.
///
/// The derived `Ord` gives the tool's total order: numeric triple first,
/// then byte-wise comparison of the suffix with the empty suffix sorting
/// first. The suffix carries no semver-style precedence semantics; a bare
/// release therefore sorts before its own pre-releases.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionParts {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub extra: String,
}

impl VersionParts {
    /// Parse a version string of the shape `X.Y.Z` or `X.Y.Z-suffix`,
    /// where the suffix is limited to ASCII alphanumerics and dots.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidVersionFormat` for anything else.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidVersionFormat {
            input: input.to_string(),
        };

        let (numeric, extra) = match input.split_once('-') {
            Some((numeric, extra)) => (numeric, extra),
            None => (input, ""),
        };

        if input.contains('-') {
            let suffix_ok = !extra.is_empty()
                && extra
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '.');
            if !suffix_ok {
                return Err(invalid());
            }
        }

        let mut components = numeric.split('.');
        let mut next_number = || {
            components
                .next()
                .filter(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
                .and_then(|part| part.parse::<u64>().ok())
        };

        let major = next_number().ok_or_else(invalid)?;
        let minor = next_number().ok_or_else(invalid)?;
        let patch = next_number().ok_or_else(invalid)?;
        if components.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            major,
            minor,
            patch,
            extra: extra.to_string(),
        })
    }
}

impl fmt::Display for VersionParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.extra.is_empty() {
            write!(f, "-{}", self.extra)?;
        }
        Ok(())
    }
}

impl FromStr for VersionParts {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The kind of increment, as selected on the command line. The `extra`
/// kind needs an additional suffix string before it becomes a [`Bump`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
    Extra,
}

/// A fully specified version increment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bump {
    Major,
    Minor,
    Patch,
    Extra(String),
}

impl VersionRecord {
    /// The current version of this record as parsed components.
    #[must_use]
    pub fn version(&self) -> VersionParts {
        VersionParts {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            extra: self.extra.clone(),
        }
    }

    /// `X.Y.Z[-suffix]`.
    #[must_use]
    pub fn short_version(&self) -> String {
        self.version().to_string()
    }

    /// Product, version, status, codename and release date on one line.
    #[must_use]
    pub fn long_version(&self) -> String {
        format!(
            "{} {} {} [{}] {}",
            self.product,
            self.short_version(),
            self.status,
            self.codename,
            self.release_date
        )
    }

    /// Apply a version increment and restamp the release date.
    pub fn apply_bump(&mut self, bump: &Bump) {
        match bump {
            Bump::Major => {
                self.major += 1;
                self.minor = 0;
                self.patch = 0;
                self.extra.clear();
            }
            Bump::Minor => {
                self.minor += 1;
                self.patch = 0;
                self.extra.clear();
            }
            Bump::Patch => {
                self.patch += 1;
                self.extra.clear();
            }
            Bump::Extra(suffix) => {
                self.extra = suffix.clone();
            }
        }
        self.release_date = today();
    }

    /// Replace the version components and restamp the release date.
    pub fn set_version(&mut self, parts: &VersionParts) {
        self.major = parts.major;
        self.minor = parts.minor;
        self.patch = parts.patch;
        self.extra = parts.extra.clone();
        self.release_date = today();
    }
}
