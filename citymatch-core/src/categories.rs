//! Sets of category codes for multi-select attributes.

use std::collections::BTreeSet;

use crate::ValueError;

/// An ordered set of category codes, each in `1..=max` for its dimension.
///
/// Cities list every category they support; users list every category they
/// would accept. Two sets match when they share at least one code.
///
/// # Examples
/// ```
/// use citymatch_core::CategorySet;
///
/// let city = CategorySet::from_codes([1, 3], 3)?;
/// let user = CategorySet::from_codes([3], 3)?;
/// assert!(city.intersects(&user));
/// # Ok::<(), citymatch_core::ValueError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CategorySet {
    codes: BTreeSet<u8>,
}

impl CategorySet {
    /// Construct an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            codes: BTreeSet::new(),
        }
    }

    /// Validate raw codes against `1..=max` and collect them.
    ///
    /// Duplicate codes collapse into one entry.
    ///
    /// # Errors
    /// Returns [`ValueError::CategoryOutOfRange`] for the first rejected code.
    pub fn from_codes<I>(codes: I, max: u8) -> Result<Self, ValueError>
    where
        I: IntoIterator<Item = i64>,
    {
        codes
            .into_iter()
            .map(|value| {
                u8::try_from(value)
                    .ok()
                    .filter(|code| (1..=max).contains(code))
                    .ok_or(ValueError::CategoryOutOfRange { value, max })
            })
            .collect::<Result<BTreeSet<u8>, ValueError>>()
            .map(|collected| Self { codes: collected })
    }

    /// Report whether `code` is present.
    #[must_use]
    pub fn contains(&self, code: u8) -> bool {
        self.codes.contains(&code)
    }

    /// Report whether the two sets share any code.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        !self.codes.is_disjoint(&other.codes)
    }

    /// Return the largest code, if any.
    #[must_use]
    pub fn max_code(&self) -> Option<u8> {
        self.codes.last().copied()
    }

    /// Number of codes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Report whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over codes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.codes.iter().copied()
    }
}
