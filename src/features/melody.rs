//! Melodic-interval extraction
//!
//! Per-part interval statistics: the signed semitone steps between
//! successive sounding notes, their usage histogram, and the ambitus of a
//! part. A rest breaks the melodic line, so no interval is formed across it.

use std::collections::BTreeMap;

use crate::score::Part;

/// Signed semitone intervals between successive sounding notes of a part
///
/// Adjacent events form an interval only when both are notes; a rest
/// between two notes suppresses the interval. Tied continuations are kept
/// and contribute unisons.
pub fn melodic_intervals(part: &Part) -> Vec<i32> {
    part.events
        .windows(2)
        .filter_map(|pair| match (pair[0].pitch, pair[1].pitch) {
            (Some(from), Some(to)) => Some(to as i32 - from as i32),
            _ => None,
        })
        .collect()
}

/// True for melodic motion that would be unusual in early vocal music:
/// leaps beyond an octave, tritones, and bare sevenths
pub fn is_unusual_interval(semitones: i32) -> bool {
    let abs = semitones.abs();
    abs > 12 || abs == 6 || abs == 10 || abs == 11
}

/// Usage count per signed semitone interval
pub fn interval_histogram(intervals: &[i32]) -> BTreeMap<i32, usize> {
    let mut histogram = BTreeMap::new();
    for &interval in intervals {
        *histogram.entry(interval).or_insert(0) += 1;
    }
    histogram
}

/// Overall range of a part in semitones, clamped to `limit`
///
/// Returns 0 for a part with fewer than two sounding notes.
pub fn semitone_range(part: &Part, limit: u8) -> u8 {
    let mut lowest: Option<u8> = None;
    let mut highest: Option<u8> = None;

    for event in &part.events {
        if let Some(pitch) = event.pitch {
            lowest = Some(lowest.map_or(pitch, |low| low.min(pitch)));
            highest = Some(highest.map_or(pitch, |high| high.max(pitch)));
        }
    }

    match (lowest, highest) {
        (Some(low), Some(high)) => (high - low).min(limit),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{NoteEvent, OnsetTime};
    use num_rational::Ratio;

    fn qn(n: u64) -> OnsetTime {
        Ratio::from_integer(n)
    }

    fn part_of(pitches: &[Option<u8>]) -> Part {
        let events = pitches
            .iter()
            .enumerate()
            .map(|(i, pitch)| match pitch {
                Some(p) => NoteEvent::note(qn(i as u64), qn(1), *p),
                None => NoteEvent::rest(qn(i as u64), qn(1)),
            })
            .collect();
        Part::new("Tenor", events)
    }

    #[test]
    fn test_intervals_between_successive_notes() {
        let part = part_of(&[Some(60), Some(62), Some(59), Some(59)]);
        assert_eq!(melodic_intervals(&part), vec![2, -3, 0]);
    }

    #[test]
    fn test_rest_breaks_the_line() {
        let part = part_of(&[Some(60), None, Some(67), Some(65)]);
        assert_eq!(melodic_intervals(&part), vec![-2]);
    }

    #[test]
    fn test_unusual_intervals() {
        assert!(is_unusual_interval(6)); // tritone
        assert!(is_unusual_interval(-6));
        assert!(is_unusual_interval(10)); // minor seventh
        assert!(is_unusual_interval(11)); // major seventh
        assert!(is_unusual_interval(13)); // beyond the octave
        assert!(!is_unusual_interval(12)); // octave leap is fine
        assert!(!is_unusual_interval(7)); // perfect fifth
        assert!(!is_unusual_interval(0));
    }

    #[test]
    fn test_interval_histogram() {
        let histogram = interval_histogram(&[2, 2, -3, 0, 2]);
        assert_eq!(histogram.get(&2), Some(&3));
        assert_eq!(histogram.get(&-3), Some(&1));
        assert_eq!(histogram.get(&0), Some(&1));
        assert_eq!(histogram.get(&5), None);
    }

    #[test]
    fn test_semitone_range_clamped() {
        let part = part_of(&[Some(48), Some(60), Some(79)]);
        assert_eq!(semitone_range(&part, 25), 25);
        assert_eq!(semitone_range(&part, 40), 31);

        let narrow = part_of(&[Some(60), Some(64)]);
        assert_eq!(semitone_range(&narrow, 25), 4);

        let single = part_of(&[Some(60)]);
        assert_eq!(semitone_range(&single, 25), 0);

        let silent = part_of(&[None, None]);
        assert_eq!(semitone_range(&silent, 25), 0);
    }
}
