//! Input data model for parsed musical works
//!
//! The analysis pipeline performs no file I/O: callers parse scores with an
//! external notation library and hand over this plain event representation.
//! Onsets and durations are exact rationals in quarter-note units, so that
//! editorial subdivisions survive untouched until quantization.

use num_rational::Ratio;
use serde::{Deserialize, Serialize};

/// A time position or duration in quarter-note units
pub type OnsetTime = Ratio<u64>;

/// Position of a note event within a tie chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tie {
    /// Not tied
    None,
    /// First note of a tied group
    Start,
    /// Interior note of a tied group
    Continue,
    /// Final note of a tied group
    Stop,
}

/// A single note or rest within a part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEvent {
    /// Onset position from the start of the work, in quarter notes
    pub onset: OnsetTime,

    /// Sounding duration, in quarter notes
    pub duration: OnsetTime,

    /// MIDI pitch number; `None` for a rest
    pub pitch: Option<u8>,

    /// Tie-chain position; tied continuations do not start a new onset
    pub tie: Tie,
}

impl NoteEvent {
    /// Create a sounding note with no tie
    pub fn note(onset: OnsetTime, duration: OnsetTime, pitch: u8) -> Self {
        Self {
            onset,
            duration,
            pitch: Some(pitch),
            tie: Tie::None,
        }
    }

    /// Create a rest
    pub fn rest(onset: OnsetTime, duration: OnsetTime) -> Self {
        Self {
            onset,
            duration,
            pitch: None,
            tie: Tie::None,
        }
    }

    /// Set the tie-chain position
    pub fn with_tie(mut self, tie: Tie) -> Self {
        self.tie = tie;
        self
    }

    /// True if this event is a rest
    pub fn is_rest(&self) -> bool {
        self.pitch.is_none()
    }
}

/// One voice/part of a work, events in score order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Part name (e.g. "Superius", "Tenor")
    pub name: String,

    /// Note and rest events in score order
    pub events: Vec<NoteEvent>,
}

impl Part {
    /// Create a part from its events
    pub fn new(name: impl Into<String>, events: Vec<NoteEvent>) -> Self {
        Self {
            name: name.into(),
            events,
        }
    }
}

/// Catalogue metadata of a work
///
/// Every field is optional: missing metadata is recoverable and
/// default-substituted downstream, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkMetadata {
    /// Composer name as catalogued (e.g. "Prez, Josquin des")
    pub composer: Option<String>,

    /// Movement or section title
    pub title: Option<String>,

    /// Parent work title (e.g. the mass a movement belongs to)
    pub parent_title: Option<String>,
}

impl WorkMetadata {
    /// Unique display name of the form `composer-parent_title-title`
    ///
    /// Returns `None` unless all three components are present.
    pub fn display_name(&self) -> Option<String> {
        match (&self.composer, &self.parent_title, &self.title) {
            (Some(composer), Some(parent), Some(title)) => {
                Some(format!("{}-{}-{}", composer, parent, title))
            }
            _ => None,
        }
    }
}

/// A fully parsed musical work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// The voices/parts of the work
    pub parts: Vec<Part>,

    /// Catalogue metadata, if any survived parsing
    pub metadata: WorkMetadata,
}

impl Score {
    /// Create a score with empty metadata
    pub fn new(parts: Vec<Part>) -> Self {
        Self {
            parts,
            metadata: WorkMetadata::default(),
        }
    }

    /// Create a score carrying catalogue metadata
    pub fn with_metadata(parts: Vec<Part>, metadata: WorkMetadata) -> Self {
        Self { parts, metadata }
    }

    /// Total number of events across all parts (notes and rests)
    pub fn event_count(&self) -> usize {
        self.parts.iter().map(|p| p.events.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qn(n: u64) -> OnsetTime {
        Ratio::from_integer(n)
    }

    #[test]
    fn test_display_name_requires_all_components() {
        let full = WorkMetadata {
            composer: Some("Mouton, Jean".to_string()),
            title: Some("Kyrie".to_string()),
            parent_title: Some("Missa Tu es Petrus".to_string()),
        };
        assert_eq!(
            full.display_name().as_deref(),
            Some("Mouton, Jean-Missa Tu es Petrus-Kyrie")
        );

        let partial = WorkMetadata {
            composer: Some("Anonymous".to_string()),
            ..Default::default()
        };
        assert_eq!(partial.display_name(), None);
        assert_eq!(WorkMetadata::default().display_name(), None);
    }

    #[test]
    fn test_event_helpers() {
        let note = NoteEvent::note(qn(2), qn(1), 60);
        assert!(!note.is_rest());
        assert_eq!(note.tie, Tie::None);

        let rest = NoteEvent::rest(qn(3), qn(1));
        assert!(rest.is_rest());

        let tied = NoteEvent::note(qn(4), qn(2), 62).with_tie(Tie::Continue);
        assert_eq!(tied.tie, Tie::Continue);
    }

    #[test]
    fn test_event_count_spans_parts() {
        let score = Score::new(vec![
            Part::new("Superius", vec![NoteEvent::note(qn(0), qn(1), 67)]),
            Part::new(
                "Tenor",
                vec![NoteEvent::note(qn(0), qn(2), 55), NoteEvent::rest(qn(2), qn(2))],
            ),
        ]);
        assert_eq!(score.event_count(), 3);
    }
}
