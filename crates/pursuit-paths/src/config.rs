//! Search settings.

use crate::frontier::FrontierKind;

/// Settings for a [`Pathfinder`](crate::Pathfinder).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Open-set implementation. Defaults to the linear frontier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub frontier: FrontierKind,
}
