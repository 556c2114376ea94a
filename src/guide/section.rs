// Section identifiers and the static section table
//
// The set of sections is closed: every value of `SectionId` has exactly one
// entry in `SECTIONS`, in display order.

use super::content::{ADVANCED_CARDS, FOUNDATION_CARDS, WORKSHOP_CARDS};
use super::Card;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three top-level tabs of the guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Foundation,
    Advanced,
    Workshop,
}

impl SectionId {
    /// All sections in display order
    pub const ALL: [SectionId; 3] = [
        SectionId::Foundation,
        SectionId::Advanced,
        SectionId::Workshop,
    ];

    /// Stable identifier used in snapshots and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Foundation => "foundation",
            SectionId::Advanced => "advanced",
            SectionId::Workshop => "workshop",
        }
    }

    /// Position in the tab bar (0-based)
    pub fn index(self) -> usize {
        match self {
            SectionId::Foundation => 0,
            SectionId::Advanced => 1,
            SectionId::Workshop => 2,
        }
    }

    /// Section at a tab position, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next tab (wraps around)
    pub fn next(self) -> Self {
        match self {
            SectionId::Foundation => SectionId::Advanced,
            SectionId::Advanced => SectionId::Workshop,
            SectionId::Workshop => SectionId::Foundation,
        }
    }

    /// Previous tab (wraps around)
    pub fn prev(self) -> Self {
        match self {
            SectionId::Foundation => SectionId::Workshop,
            SectionId::Advanced => SectionId::Foundation,
            SectionId::Workshop => SectionId::Advanced,
        }
    }

    /// Static definition of this section
    pub fn section(self) -> &'static Section {
        &SECTIONS[self.index()]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "foundation" => Ok(SectionId::Foundation),
            "advanced" => Ok(SectionId::Advanced),
            "workshop" => Ok(SectionId::Workshop),
            other => anyhow::bail!(
                "unknown section '{}' (expected foundation, advanced or workshop)",
                other
            ),
        }
    }
}

/// Static definition of a section: label, blurb and its ordered cards
#[derive(Debug)]
pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
    /// Label used when the terminal is too narrow for `title`
    pub short_title: &'static str,
    pub description: &'static str,
    /// Glyph shown next to the title in the tab bar
    pub icon: &'static str,
    pub cards: &'static [Card],
}

/// Every section in display order
pub static SECTIONS: [Section; 3] = [
    Section {
        id: SectionId::Foundation,
        title: "Foundation",
        short_title: "Foundation",
        description: "Master the fundamentals of effective prompting",
        icon: "🧠",
        cards: FOUNDATION_CARDS,
    },
    Section {
        id: SectionId::Advanced,
        title: "Advanced Techniques",
        short_title: "Advanced",
        description: "Level up with sophisticated prompting strategies",
        icon: "⚡",
        cards: ADVANCED_CARDS,
    },
    Section {
        id: SectionId::Workshop,
        title: "Creative Workshop",
        short_title: "Workshop",
        description: "Hands-on exercises for creative professionals",
        icon: "💡",
        cards: WORKSHOP_CARDS,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_enum_order() {
        for (i, id) in SectionId::ALL.iter().enumerate() {
            assert_eq!(SECTIONS[i].id, *id);
            assert_eq!(id.index(), i);
            assert_eq!(SectionId::from_index(i), Some(*id));
        }
        assert_eq!(SectionId::from_index(3), None);
    }

    #[test]
    fn next_and_prev_cycle() {
        for id in SectionId::ALL {
            assert_eq!(id.next().prev(), id);
            assert_eq!(id.next().next().next(), id);
        }
        assert_eq!(SectionId::Workshop.next(), SectionId::Foundation);
        assert_eq!(SectionId::Foundation.prev(), SectionId::Workshop);
    }

    #[test]
    fn parse_section_names() {
        assert_eq!(
            "advanced".parse::<SectionId>().unwrap(),
            SectionId::Advanced
        );
        assert_eq!(
            " Workshop ".parse::<SectionId>().unwrap(),
            SectionId::Workshop
        );
        assert!("basics".parse::<SectionId>().is_err());
    }

    #[test]
    fn default_section_is_foundation() {
        assert_eq!(SectionId::default(), SectionId::Foundation);
    }
}
