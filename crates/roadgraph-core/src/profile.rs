//! Delimiter profiles: the separator set and neighbour field order used to
//! read a graph file.
//!
//! A profile is plain data, so both historical file layouts (and any custom
//! one supplied through configuration) go through the same parser.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Role of one field inside a neighbour descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeField {
    /// Road category.
    Category,
    /// Road distance, kept verbatim.
    Distance,
    /// Name of the destination place.
    Destination,
    /// A field that is present in the file but carries nothing we render.
    Ignored,
}

/// Separators and neighbour field order for one file layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterProfile {
    /// Splits a line into the place descriptor and the neighbour descriptors.
    pub record_separator: char,
    /// Splits the place descriptor into `category` and `name`.
    pub node_field_separator: char,
    /// Splits a neighbour descriptor into its fields.
    pub edge_field_separator: char,
    /// Role of each neighbour field, in file order.
    pub edge_fields: Vec<EdgeField>,
}

/// Field positions resolved from a validated [`DelimiterProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EdgeLayout {
    pub(crate) field_count: usize,
    pub(crate) category: usize,
    pub(crate) distance: usize,
    pub(crate) destination: usize,
}

impl DelimiterProfile {
    /// `category:name|category:distance:destination|...`
    #[must_use]
    pub fn pipe() -> Self {
        Self {
            record_separator: '|',
            node_field_separator: ':',
            edge_field_separator: ':',
            edge_fields: vec![EdgeField::Category, EdgeField::Distance, EdgeField::Destination],
        }
    }

    /// `category/name:category/distance/kind/destination:...`
    ///
    /// The `kind` field is redundant with the destination's own category and
    /// is skipped.
    #[must_use]
    pub fn slash() -> Self {
        Self {
            record_separator: ':',
            node_field_separator: '/',
            edge_field_separator: '/',
            edge_fields: vec![
                EdgeField::Category,
                EdgeField::Distance,
                EdgeField::Ignored,
                EdgeField::Destination,
            ],
        }
    }

    /// Checks the profile can parse records unambiguously.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidProfile` if a field role is missing or repeated,
    /// or if the record separator collides with a field separator.
    pub fn validate(&self) -> Result<()> {
        self.layout().map(|_| ())
    }

    pub(crate) fn layout(&self) -> Result<EdgeLayout> {
        if self.record_separator == self.node_field_separator {
            return Err(Error::InvalidProfile(format!(
                "record separator '{}' is also the place field separator",
                self.record_separator
            )));
        }
        if self.record_separator == self.edge_field_separator {
            return Err(Error::InvalidProfile(format!(
                "record separator '{}' is also the neighbour field separator",
                self.record_separator
            )));
        }

        let position = |role: EdgeField| -> Result<usize> {
            let mut found = self
                .edge_fields
                .iter()
                .enumerate()
                .filter(|(_, field)| **field == role)
                .map(|(i, _)| i);
            match (found.next(), found.next()) {
                (Some(i), None) => Ok(i),
                (None, _) => Err(Error::InvalidProfile(format!(
                    "neighbour fields have no {role:?} field"
                ))),
                (Some(_), Some(_)) => Err(Error::InvalidProfile(format!(
                    "neighbour fields repeat the {role:?} field"
                ))),
            }
        };

        Ok(EdgeLayout {
            field_count: self.edge_fields.len(),
            category: position(EdgeField::Category)?,
            distance: position(EdgeField::Distance)?,
            destination: position(EdgeField::Destination)?,
        })
    }
}

impl Default for DelimiterProfile {
    fn default() -> Self {
        Self::pipe()
    }
}

/// Named built-in profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// [`DelimiterProfile::pipe`].
    #[default]
    A,
    /// [`DelimiterProfile::slash`].
    B,
}

impl Preset {
    /// Returns the profile this preset names.
    #[must_use]
    pub fn profile(self) -> DelimiterProfile {
        match self {
            Self::A => DelimiterProfile::pipe(),
            Self::B => DelimiterProfile::slash(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::A => "a",
            Self::B => "b",
        })
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            other => Err(Error::Config(format!(
                "unknown preset '{other}' (expected 'a' or 'b')"
            ))),
        }
    }
}

// Same spellings as the command line, whatever the configuration layer.
impl<'de> Deserialize<'de> for Preset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value
            .parse()
            .map_err(|_| de::Error::unknown_variant(&value, &["a", "b"]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        let a = DelimiterProfile::pipe().layout().unwrap();
        assert_eq!(a.field_count, 3);
        assert_eq!((a.category, a.distance, a.destination), (0, 1, 2));

        let b = DelimiterProfile::slash().layout().unwrap();
        assert_eq!(b.field_count, 4);
        assert_eq!((b.category, b.distance, b.destination), (0, 1, 3));
    }

    #[test]
    fn test_missing_role_is_rejected() {
        let mut profile = DelimiterProfile::pipe();
        profile.edge_fields = vec![EdgeField::Category, EdgeField::Destination];
        let err = profile.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidProfile(msg) if msg.contains("Distance")));
    }

    #[test]
    fn test_repeated_role_is_rejected() {
        let mut profile = DelimiterProfile::pipe();
        profile.edge_fields.push(EdgeField::Destination);
        assert!(matches!(
            profile.validate(),
            Err(Error::InvalidProfile(_))
        ));
    }

    #[test]
    fn test_colliding_separators_are_rejected() {
        let mut profile = DelimiterProfile::pipe();
        profile.record_separator = ':';
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("a".parse::<Preset>().unwrap(), Preset::A);
        assert_eq!("B".parse::<Preset>().unwrap(), Preset::B);
        assert!("c".parse::<Preset>().is_err());
        assert_eq!(Preset::B.to_string(), "b");
    }
}
