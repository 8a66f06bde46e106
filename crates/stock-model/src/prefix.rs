use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification label derived from the leading token of an item name.
///
/// Variant order is the sort rank: `Glass < Retail < SitIn < Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PrefixTag {
    #[serde(rename = "GLASS")]
    Glass,
    #[serde(rename = "RETAIL")]
    Retail,
    #[serde(rename = "SIT IN")]
    SitIn,
    #[serde(rename = "OTHER")]
    Other,
}

impl PrefixTag {
    /// Tags tried against an item name, in priority order.
    pub const MATCH_ORDER: [PrefixTag; 3] = [PrefixTag::Glass, PrefixTag::Retail, PrefixTag::SitIn];

    /// Every tag in rank order.
    pub const ALL: [PrefixTag; 4] = [
        PrefixTag::Glass,
        PrefixTag::Retail,
        PrefixTag::SitIn,
        PrefixTag::Other,
    ];

    /// Leading token matched against the uppercased item name.
    pub const fn token(self) -> &'static str {
        match self {
            PrefixTag::Glass => "GLASS",
            PrefixTag::Retail => "RETAIL",
            PrefixTag::SitIn => "SIT IN",
            PrefixTag::Other => "OTHER",
        }
    }

    pub const fn rank(self) -> u8 {
        match self {
            PrefixTag::Glass => 0,
            PrefixTag::Retail => 1,
            PrefixTag::SitIn => 2,
            PrefixTag::Other => 3,
        }
    }
}

impl fmt::Display for PrefixTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
