//! Static tier policy used to rank keyword matches.

use crate::models::HerbField;
use std::fmt;

const PRIMARY_FIELDS: &[HerbField] = &[HerbField::Name];

const SECONDARY_FIELDS: &[HerbField] = &[HerbField::Alias];

const OTHER_FIELDS: &[HerbField] = &[
    HerbField::Effect,
    HerbField::Indication,
    HerbField::EffectClass,
    HerbField::Taste,
    HerbField::Meridian,
];

/// Ordered priority groups of fields.
///
/// A record matched by an earlier tier always ranks above one matched only by
/// a later tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    /// Herb name
    Primary,
    /// Alternate names
    Secondary,
    /// Descriptive fields
    Other,
}

impl MatchTier {
    /// All tiers, highest priority first.
    pub const ORDERED: [MatchTier; 3] = [MatchTier::Primary, MatchTier::Secondary, MatchTier::Other];

    /// Fields searched by this tier.
    pub fn fields(&self) -> &'static [HerbField] {
        match self {
            Self::Primary => PRIMARY_FIELDS,
            Self::Secondary => SECONDARY_FIELDS,
            Self::Other => OTHER_FIELDS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
