//! Cross-check of the country list against ISO 3166 reference data.
//!
//! The checks only produce warnings. Territories and partially recognized
//! countries are often missing from the reference data or use a dial code
//! it does not know, so none of this blocks generation.

use crate::types::{Country, DialCode, Iso2};
use keshvar::CountryIterator;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "tracing")]
use tracing::warn;

/// Upper-case alpha-2 code -> reference dial code.
/// Built from keshvar on first use.
static ALPHA2_TO_DIAL_CODE: Lazy<HashMap<String, u32>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for country in CountryIterator::new() {
        let Ok(code) = u32::try_from(country.country_code()) else {
            continue;
        };
        m.insert(country.alpha2().to_string().to_ascii_uppercase(), code);
    }
    m
});

/// Something in the country list that disagrees with the reference data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceWarning {
    /// The ISO code is not an assigned ISO 3166 alpha-2 code.
    UnknownIso2 { iso2: Iso2 },
    /// The dial code differs from the reference dial code.
    DialCodeMismatch {
        iso2: Iso2,
        dial_code: DialCode,
        expected: u32,
    },
}

impl Display for ReferenceWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceWarning::UnknownIso2 { iso2 } => {
                write!(f, "'{iso2}' is not a known ISO 3166 alpha-2 code")
            }
            ReferenceWarning::DialCodeMismatch {
                iso2,
                dial_code,
                expected,
            } => write!(
                f,
                "'{iso2}' uses dial code +{dial_code}, reference data says +{expected}"
            ),
        }
    }
}

/// Reference dial code for an ISO alpha-2 code, in any case.
pub fn reference_dial_code(iso2: &Iso2) -> Option<u32> {
    ALPHA2_TO_DIAL_CODE
        .get(&iso2.as_str().to_ascii_uppercase())
        .copied()
}

/// Compare every country with the reference data, in input order.
pub fn cross_check<'a>(countries: impl IntoIterator<Item = &'a Country>) -> Vec<ReferenceWarning> {
    let mut warnings = Vec::new();
    for country in countries {
        let warning = match reference_dial_code(&country.iso2) {
            None => ReferenceWarning::UnknownIso2 {
                iso2: country.iso2.clone(),
            },
            Some(expected) if expected != country.dial_code.value() => {
                ReferenceWarning::DialCodeMismatch {
                    iso2: country.iso2.clone(),
                    dial_code: country.dial_code,
                    expected,
                }
            }
            Some(_) => continue,
        };

        #[cfg(feature = "tracing")]
        warn!("{warning}");
        warnings.push(warning);
    }
    warnings
}
