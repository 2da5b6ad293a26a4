//! Core types describing the country list.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Iso2
// =============================================================================

/// Error when parsing an ISO alpha-2 identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Iso2Error {
    /// Identifier is not exactly two characters long.
    #[error("ISO code must be exactly 2 letters, got {len}")]
    InvalidLength { len: usize },
    /// Identifier contains something other than ASCII letters.
    #[error("ISO code must contain only ASCII letters")]
    NonLetter,
}

/// Two-letter country identifier (e.g., "us", "DE").
///
/// The case is kept as given in the country list, since the generated
/// table is compared case-insensitively by its consumer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iso2(String);

impl Iso2 {
    /// Create a new Iso2 from a string.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Iso2Error> {
        let s = s.as_ref().trim();
        let len = s.chars().count();
        if len != 2 {
            return Err(Iso2Error::InvalidLength { len });
        }
        if !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Iso2Error::NonLetter);
        }
        Ok(Self(s.to_string()))
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Iso2 {
    type Err = Iso2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for Iso2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Iso2 {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Iso2 {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        Iso2::new(raw).map_err(de::Error::custom)
    }
}

impl Serialize for Iso2 {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

// =============================================================================
// DialCode
// =============================================================================

/// Error when parsing a dial code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialCodeError {
    /// Dial code contains non-digit characters.
    #[error("dial code must contain only digits")]
    NonDigit,
    /// Dial code is empty.
    #[error("dial code cannot be empty")]
    Empty,
    /// Dial code starts with zero.
    #[error("dial code cannot start with 0")]
    LeadingZero,
    /// Dial code does not fit into an integer.
    #[error("dial code is too long")]
    TooLong,
}

/// Country dial code (e.g., 1 for the NANP countries, 380 for Ukraine).
///
/// Dial codes are stored as integers without the leading '+' sign and
/// order numerically, so `44 < 380`.
///
/// # Example
///
/// ```rust
/// use countries_generator::DialCode;
///
/// let dc = DialCode::new("+380").unwrap();
/// assert_eq!(dc.to_string(), "380");
/// assert_eq!(dc.value(), 380);
///
/// assert!(DialCode::new("44").unwrap() < dc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DialCode(u32);

impl DialCode {
    /// Create a new DialCode from a string.
    ///
    /// The input can include a leading '+' which will be stripped.
    pub fn new(s: impl AsRef<str>) -> Result<Self, DialCodeError> {
        let n = s.as_ref().trim().trim_start_matches('+');
        if n.is_empty() {
            return Err(DialCodeError::Empty);
        }
        if !n.chars().all(|c| c.is_ascii_digit()) {
            return Err(DialCodeError::NonDigit);
        }
        if n.starts_with('0') {
            return Err(DialCodeError::LeadingZero);
        }
        n.parse::<u32>()
            .map(Self)
            .map_err(|_| DialCodeError::TooLong)
    }

    /// Create a DialCode from its numeric value.
    pub fn from_value(value: u32) -> Result<Self, DialCodeError> {
        if value == 0 {
            return Err(DialCodeError::LeadingZero);
        }
        Ok(Self(value))
    }

    /// Get the numeric value of the dial code.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl FromStr for DialCode {
    type Err = DialCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for DialCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dial codes appear both as numbers and as strings in country lists.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDialCode {
    Number(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for DialCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        match RawDialCode::deserialize(d)? {
            RawDialCode::Number(n) => {
                let n = u32::try_from(n).map_err(|_| de::Error::custom(DialCodeError::TooLong))?;
                DialCode::from_value(n).map_err(de::Error::custom)
            }
            RawDialCode::Text(s) => DialCode::new(s).map_err(de::Error::custom),
        }
    }
}

impl Serialize for DialCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u32(self.0)
    }
}

// =============================================================================
// AreaCode
// =============================================================================

/// Error when parsing area codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AreaCodeError {
    /// Area code contains non-digit characters.
    #[error("area code must contain only digits")]
    NonDigit,
    /// Area code is empty.
    #[error("area code cannot be empty")]
    Empty,
    /// An area code list was given but holds no entries.
    #[error("area code list cannot be empty, use null instead")]
    EmptyList,
}

/// Area code used to tell apart countries sharing a dial code
/// (e.g., "204" for Canada under +1).
///
/// Kept as a string because leading zeros are significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AreaCode(String);

impl AreaCode {
    /// Create a new AreaCode from a string.
    pub fn new(s: impl AsRef<str>) -> Result<Self, AreaCodeError> {
        let s = s.as_ref().trim();
        if s.is_empty() {
            return Err(AreaCodeError::Empty);
        }
        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(AreaCodeError::NonDigit);
        }
        Ok(Self(s.to_string()))
    }

    /// Get the area code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AreaCode {
    type Err = AreaCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for AreaCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for AreaCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        AreaCode::new(raw).map_err(de::Error::custom)
    }
}

impl Serialize for AreaCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

// =============================================================================
// Country
// =============================================================================

/// One entry of the country list.
///
/// Field names follow the JSON country list: `iso2`, `dialCode`,
/// `priority` (0 or 1) and `areaCodes` (null or a list of strings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// ISO alpha-2 identifier.
    pub iso2: Iso2,
    /// Dial code shared with the rest of the group.
    pub dial_code: DialCode,
    /// Whether this is the fallback country for its dial code.
    #[serde(
        deserialize_with = "deserialize_priority",
        serialize_with = "serialize_priority"
    )]
    pub priority: bool,
    /// Area codes, if the dial code needs to be disambiguated.
    #[serde(default, deserialize_with = "deserialize_area_codes")]
    pub area_codes: Option<Vec<AreaCode>>,
}

impl Country {
    /// Create a country without area codes.
    pub fn new(iso2: Iso2, dial_code: DialCode, priority: bool) -> Self {
        Self {
            iso2,
            dial_code,
            priority,
            area_codes: None,
        }
    }

    /// Attach area codes to this country.
    ///
    /// Fails if `area_codes` is empty.
    pub fn with_area_codes(mut self, area_codes: Vec<AreaCode>) -> Result<Self, AreaCodeError> {
        if area_codes.is_empty() {
            return Err(AreaCodeError::EmptyList);
        }
        self.area_codes = Some(area_codes);
        Ok(self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPriority {
    Flag(bool),
    Number(u64),
}

fn deserialize_priority<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    match RawPriority::deserialize(d)? {
        RawPriority::Flag(flag) => Ok(flag),
        RawPriority::Number(0) => Ok(false),
        RawPriority::Number(1) => Ok(true),
        RawPriority::Number(n) => Err(de::Error::custom(format!(
            "priority must be 0 or 1, got {n}"
        ))),
    }
}

fn serialize_priority<S: Serializer>(priority: &bool, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u8(u8::from(*priority))
}

fn deserialize_area_codes<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<Vec<AreaCode>>, D::Error> {
    match Option::<Vec<AreaCode>>::deserialize(d)? {
        Some(codes) if codes.is_empty() => Err(de::Error::custom(AreaCodeError::EmptyList)),
        other => Ok(other),
    }
}
