//! CASE expressions.

use super::Fragment;

/// `CASE [subject] WHEN .. THEN .. [ELSE ..] END`
///
/// Branches keep declaration order; the first match wins.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Case {
    pub(crate) subject: Option<Fragment>,
    pub(crate) whens: Vec<(Fragment, Fragment)>,
    pub(crate) otherwise: Option<Fragment>,
}

impl Case {
    /// Searched CASE (`CASE WHEN cond THEN ...`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Simple CASE (`CASE subject WHEN value THEN ...`).
    pub fn of(subject: impl Into<Fragment>) -> Self {
        Self {
            subject: Some(subject.into()),
            ..Self::default()
        }
    }

    /// Add a WHEN branch
    pub fn when(mut self, when: impl Into<Fragment>, then: impl Into<Fragment>) -> Self {
        self.whens.push((when.into(), then.into()));
        self
    }

    /// Set the ELSE branch
    pub fn otherwise(mut self, value: impl Into<Fragment>) -> Self {
        self.otherwise = Some(value.into());
        self
    }

    pub fn branches(&self) -> &[(Fragment, Fragment)] {
        &self.whens
    }
}
