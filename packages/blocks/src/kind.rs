use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of block kinds a page document may contain.
///
/// The string tags are the `type` values stored in page documents; they are
/// part of the persisted format and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    /// Full-width opening banner with call-to-action.
    Hero,
    /// Card grid of services (items keyed by `title`).
    ServicesGrid,
    /// Compact price-table of services (items keyed by `name`).
    ServiceList,
    /// Team member gallery.
    Team,
    /// Booking call-to-action strip.
    Booking,
}

impl BlockKind {
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Hero,
        BlockKind::ServicesGrid,
        BlockKind::ServiceList,
        BlockKind::Team,
        BlockKind::Booking,
    ];

    /// Stored `type` tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            BlockKind::Hero => "Hero",
            BlockKind::ServicesGrid => "ServicesGrid",
            BlockKind::ServiceList => "ServiceList",
            BlockKind::Team => "Team",
            BlockKind::Booking => "Booking",
        }
    }

    /// Resolve a stored `type` tag. Unknown tags return `None`; callers
    /// decide whether that means skip (renderer) or reject (editor).
    pub fn from_tag(tag: &str) -> Option<BlockKind> {
        match tag {
            "Hero" => Some(BlockKind::Hero),
            "ServicesGrid" => Some(BlockKind::ServicesGrid),
            "ServiceList" => Some(BlockKind::ServiceList),
            "Team" => Some(BlockKind::Team),
            "Booking" => Some(BlockKind::Booking),
            _ => None,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Section kinds an embedding application may request at first-run synthesis
/// time. Smaller than [`BlockKind`]: synthesis only ever pre-populates the
/// standard landing page sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    Services,
    Team,
    Booking,
}

impl SectionKind {
    /// The default section order for a fresh tenant page.
    pub const DEFAULT_PAGE: [SectionKind; 4] = [
        SectionKind::Hero,
        SectionKind::Services,
        SectionKind::Team,
        SectionKind::Booking,
    ];

    /// Block kind synthesized for this section.
    pub fn block_kind(&self) -> BlockKind {
        match self {
            SectionKind::Hero => BlockKind::Hero,
            SectionKind::Services => BlockKind::ServicesGrid,
            SectionKind::Team => BlockKind::Team,
            SectionKind::Booking => BlockKind::Booking,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionKind::Hero => "hero",
            SectionKind::Services => "services",
            SectionKind::Team => "team",
            SectionKind::Booking => "booking",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for kind in BlockKind::ALL {
            assert_eq!(BlockKind::from_tag(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_tag_resolves_to_none() {
        assert_eq!(BlockKind::from_tag("Carousel"), None);
        assert_eq!(BlockKind::from_tag(""), None);
        // Tags are case-sensitive
        assert_eq!(BlockKind::from_tag("hero"), None);
    }

    #[test]
    fn test_section_kinds_map_to_block_kinds() {
        assert_eq!(SectionKind::Hero.block_kind(), BlockKind::Hero);
        assert_eq!(SectionKind::Services.block_kind(), BlockKind::ServicesGrid);
        assert_eq!(SectionKind::Team.block_kind(), BlockKind::Team);
        assert_eq!(SectionKind::Booking.block_kind(), BlockKind::Booking);
    }

    #[test]
    fn test_section_kind_serde_is_lowercase() {
        let json = serde_json::to_string(&SectionKind::Services).unwrap();
        assert_eq!(json, "\"services\"");
        let back: SectionKind = serde_json::from_str("\"booking\"").unwrap();
        assert_eq!(back, SectionKind::Booking);
    }
}
