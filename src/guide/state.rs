//! Guide UI state and its transitions
//!
//! Three independent pieces of state live here:
//!
//! - the active section (single choice over [`SectionId`])
//! - the card expansion registry (independent flag per card id)
//! - the copy feedback flag, guarded by a generation counter
//!
//! Nothing in this module renders or performs I/O. The controller applies
//! events and the renderer reads the result.

use super::SectionId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Token identifying one successful copy
///
/// Returned by [`GuideState::begin_copy_feedback`]. Only the ticket of the
/// most recent copy may clear the feedback flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeedbackTicket(u64);

impl FeedbackTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Transient "copied" indicator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyFeedback {
    pub shown: bool,
    /// Incremented on every successful copy
    pub generation: u64,
}

/// Inputs accepted by [`GuideState::apply`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideEvent {
    SelectSection(SectionId),
    ToggleCard(String),
    CopySucceeded,
    CopyFeedbackExpired(FeedbackTicket),
}

/// Complete UI state of the guide
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideState {
    pub active_section: SectionId,
    /// Card id -> expanded. Absent means collapsed.
    #[serde(default)]
    pub expanded: BTreeMap<String, bool>,
    #[serde(default)]
    pub copy_feedback: CopyFeedback,
}

impl GuideState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure transition: consume the state and an event, return the next state
    pub fn apply(mut self, event: GuideEvent) -> Self {
        match event {
            GuideEvent::SelectSection(id) => self.select_section(id),
            GuideEvent::ToggleCard(id) => {
                self.toggle_card(&id);
            }
            GuideEvent::CopySucceeded => {
                self.begin_copy_feedback();
            }
            GuideEvent::CopyFeedbackExpired(ticket) => {
                self.end_copy_feedback(ticket);
            }
        }
        self
    }

    /// Make `id` the active section. Expansion state is left alone.
    pub fn select_section(&mut self, id: SectionId) {
        self.active_section = id;
    }

    pub fn is_active(&self, id: SectionId) -> bool {
        self.active_section == id
    }

    /// Flip the expansion flag of a card and return the new value
    pub fn toggle_card(&mut self, id: &str) -> bool {
        let entry = self.expanded.entry(id.to_string()).or_insert(false);
        *entry = !*entry;
        *entry
    }

    /// Unknown ids read as collapsed
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    /// Number of cards currently expanded, across all sections
    pub fn expanded_count(&self) -> usize {
        self.expanded.values().filter(|v| **v).count()
    }

    /// Record a successful copy: show the flag and hand out a fresh ticket
    pub fn begin_copy_feedback(&mut self) -> FeedbackTicket {
        self.copy_feedback.generation = self.copy_feedback.generation.wrapping_add(1);
        self.copy_feedback.shown = true;
        FeedbackTicket(self.copy_feedback.generation)
    }

    /// Ticket of the most recent successful copy
    pub fn feedback_ticket(&self) -> FeedbackTicket {
        FeedbackTicket(self.copy_feedback.generation)
    }

    /// Clear the flag if `ticket` belongs to the latest copy.
    ///
    /// Returns false when the ticket was superseded and nothing changed.
    pub fn end_copy_feedback(&mut self, ticket: FeedbackTicket) -> bool {
        if ticket.0 != self.copy_feedback.generation {
            return false;
        }
        self.copy_feedback.shown = false;
        true
    }

    pub fn copy_feedback_shown(&self) -> bool {
        self.copy_feedback.shown
    }
}
