//! Grouping of countries by dial code.
//!
//! Countries sharing a dial code form a group. A group with more than one
//! member must have exactly one priority country, which is moved to the end
//! of the group so that a front-to-back scan tries every area code match
//! before falling back to it.

use crate::errors::{GroupValidationError, GroupingError};
use crate::types::{Country, DialCode};
use std::collections::BTreeMap;
use std::collections::btree_map;

#[cfg(feature = "tracing")]
use tracing::{debug, error};

/// Countries grouped by dial code, validated and reordered.
///
/// Groups iterate in ascending dial code order. Within a group, countries
/// keep their input order except for the priority country, which is last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialCodeGroups {
    groups: BTreeMap<DialCode, Vec<Country>>,
}

impl DialCodeGroups {
    /// Number of distinct dial codes.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of countries across all groups.
    pub fn country_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// The ordered group for a dial code.
    pub fn get(&self, dial_code: DialCode) -> Option<&[Country]> {
        self.groups.get(&dial_code).map(Vec::as_slice)
    }

    /// Iterate over groups in ascending dial code order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.groups.iter(),
        }
    }
}

/// Iterator over `(dial code, group)` pairs of [`DialCodeGroups`].
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, DialCode, Vec<Country>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (DialCode, &'a [Country]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(code, countries)| (*code, countries.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a DialCodeGroups {
    type Item = (DialCode, &'a [Country]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Group countries by dial code and check the priority rule.
///
/// Every group with more than one member must contain exactly one country
/// with priority set; that country is moved to the end of the group.
/// Single-member groups are not checked.
///
/// All invalid groups are reported at once. If any group is invalid, no
/// grouping is returned.
///
/// # Example
///
/// ```rust
/// use countries_generator::{group_and_validate, Country, DialCode, Iso2};
///
/// let us = Country::new(Iso2::new("US")?, DialCode::new("1")?, true);
/// let ca = Country::new(Iso2::new("CA")?, DialCode::new("1")?, false);
///
/// let groups = group_and_validate(vec![us, ca])?;
/// let nanp = groups.get(DialCode::new("1")?).unwrap();
/// assert_eq!(nanp[0].iso2.as_str(), "CA");
/// assert_eq!(nanp[1].iso2.as_str(), "US");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn group_and_validate(
    countries: impl IntoIterator<Item = Country>,
) -> Result<DialCodeGroups, GroupingError> {
    let mut groups: BTreeMap<DialCode, Vec<Country>> = BTreeMap::new();
    for country in countries {
        groups.entry(country.dial_code).or_default().push(country);
    }

    let mut errors = Vec::new();
    for (&dial_code, group) in groups.iter_mut() {
        if group.len() == 1 {
            continue;
        }

        let err = match group.iter().filter(|c| c.priority).count() {
            0 => GroupValidationError::MissingPriority { dial_code },
            1 => {
                move_priority_last(group);
                #[cfg(feature = "tracing")]
                debug!(
                    dial_code = dial_code.value(),
                    members = group.len(),
                    priority = %group[group.len() - 1].iso2,
                    "Moved priority country to end of group"
                );
                continue;
            }
            _ => GroupValidationError::DuplicatePriority { dial_code },
        };

        #[cfg(feature = "tracing")]
        error!(dial_code = dial_code.value(), members = group.len(), "{err}");
        errors.push(err);
    }

    if errors.is_empty() {
        Ok(DialCodeGroups { groups })
    } else {
        Err(GroupingError::new(errors))
    }
}

/// Stable partition: non-priority countries keep their order, the priority
/// country goes last.
fn move_priority_last(group: &mut Vec<Country>) {
    let (mut rest, priority): (Vec<_>, Vec<_>) = group.drain(..).partition(|c| !c.priority);
    rest.extend(priority);
    *group = rest;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(iso2: &str, dial_code: &str, priority: bool) -> Country {
        Country::new(
            iso2.parse().unwrap(),
            dial_code.parse().unwrap(),
            priority,
        )
    }

    fn dc(s: &str) -> DialCode {
        s.parse().unwrap()
    }

    fn isos(group: &[Country]) -> Vec<&str> {
        group.iter().map(|c| c.iso2.as_str()).collect()
    }

    #[test]
    fn test_priority_moved_last() {
        let groups =
            group_and_validate(vec![country("US", "1", true), country("CA", "1", false)]).unwrap();
        assert_eq!(isos(groups.get(dc("1")).unwrap()), ["CA", "US"]);
    }

    #[test]
    fn test_priority_already_last() {
        let groups =
            group_and_validate(vec![country("CA", "1", false), country("US", "1", true)]).unwrap();
        assert_eq!(isos(groups.get(dc("1")).unwrap()), ["CA", "US"]);
    }

    #[test]
    fn test_other_members_keep_input_order() {
        let groups = group_and_validate(vec![
            country("AG", "1", false),
            country("US", "1", true),
            country("CA", "1", false),
            country("JM", "1", false),
        ])
        .unwrap();
        assert_eq!(isos(groups.get(dc("1")).unwrap()), ["AG", "CA", "JM", "US"]);
    }

    #[test]
    fn test_singleton_untouched() {
        let groups = group_and_validate(vec![country("DE", "49", false)]).unwrap();
        let group = groups.get(dc("49")).unwrap();
        assert_eq!(group, [country("DE", "49", false)]);
    }

    #[test]
    fn test_missing_priority() {
        let err = group_and_validate(vec![country("AA", "7", false), country("BB", "7", false)])
            .unwrap_err();
        assert_eq!(
            err.errors(),
            [GroupValidationError::MissingPriority { dial_code: dc("7") }]
        );
    }

    #[test]
    fn test_duplicate_priority() {
        let err = group_and_validate(vec![country("AA", "7", true), country("BB", "7", true)])
            .unwrap_err();
        assert_eq!(
            err.errors(),
            [GroupValidationError::DuplicatePriority { dial_code: dc("7") }]
        );
    }

    #[test]
    fn test_all_invalid_groups_reported() {
        let err = group_and_validate(vec![
            country("GB", "44", false),
            country("AA", "7", true),
            country("DE", "49", false),
            country("BB", "7", true),
            country("GG", "44", false),
        ])
        .unwrap_err();
        assert_eq!(
            err.errors(),
            [
                GroupValidationError::DuplicatePriority { dial_code: dc("7") },
                GroupValidationError::MissingPriority { dial_code: dc("44") },
            ]
        );
    }

    #[test]
    fn test_area_codes_ignored_by_validation() {
        let ca = country("CA", "1", false)
            .with_area_codes(vec!["204".parse().unwrap()])
            .unwrap();
        let err = group_and_validate(vec![ca, country("DO", "1", false)]).unwrap_err();
        assert_eq!(
            err.errors(),
            [GroupValidationError::MissingPriority { dial_code: dc("1") }]
        );
    }

    #[test]
    fn test_groups_iterate_by_numeric_dial_code() {
        let groups = group_and_validate(vec![
            country("UA", "380", false),
            country("GB", "44", false),
            country("US", "1", false),
        ])
        .unwrap();
        let codes: Vec<u32> = groups.iter().map(|(code, _)| code.value()).collect();
        assert_eq!(codes, [1, 44, 380]);
    }

    #[test]
    fn test_no_country_lost_or_duplicated() {
        let input = vec![
            country("US", "1", true),
            country("CA", "1", false),
            country("RU", "7", true),
            country("KZ", "7", false),
            country("DE", "49", false),
            country("US", "1", false),
        ];
        let groups = group_and_validate(input.clone()).unwrap();
        assert_eq!(groups.country_count(), input.len());
        assert_eq!(groups.len(), 3);

        for expected in &input {
            let found = groups
                .iter()
                .flat_map(|(_, g)| g.iter())
                .filter(|c| *c == expected)
                .count();
            let in_input = input.iter().filter(|c| *c == expected).count();
            assert_eq!(found, in_input, "{expected:?}");
        }
    }

    #[test]
    fn test_duplicate_iso2_allowed() {
        let groups =
            group_and_validate(vec![country("US", "1", false), country("US", "1", true)]).unwrap();
        let group = groups.get(dc("1")).unwrap();
        assert!(!group[0].priority);
        assert!(group[1].priority);
    }

    #[test]
    fn test_empty_input() {
        let groups = group_and_validate(Vec::new()).unwrap();
        assert!(groups.is_empty());
        assert_eq!(groups.country_count(), 0);
    }
}
