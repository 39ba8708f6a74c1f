//! Run detection over projection profiles
//!
//! Converts a 1-D profile into the ordered list of contiguous index ranges
//! where an activity predicate holds. A single left-to-right scan tracks
//! the currently open run: it opens on an inactive-to-active transition,
//! closes as `[start, i)` on the reverse transition, and a run still open
//! at the end of the scan closes at the profile length (foreground touching
//! the image edge).
//!
//! The same scan serves line detection (horizontal profile, `value > 0`)
//! and word detection (vertical profile of a line crop). The
//! above-threshold variant tolerates background noise when splitting
//! words.

use pageseg_core::{Profile, Span};

/// Ordered runs where the profile count is greater than zero.
///
/// The returned spans are pairwise disjoint with strictly increasing
/// `start`, and their union is exactly the set of active indices. An
/// all-zero or empty profile yields an empty list; a profile with no zero
/// entry yields a single span covering the whole profile.
pub fn active_spans(profile: &Profile) -> Vec<Span> {
    spans_where(profile, |v| v > 0)
}

/// Ordered runs where the profile count is strictly above `floor`.
///
/// Same scan as [`active_spans`] with the predicate `value > floor`; with
/// `floor = 0` the two are identical.
pub fn active_spans_above(profile: &Profile, floor: u32) -> Vec<Span> {
    spans_where(profile, |v| v > floor)
}

fn spans_where(profile: &Profile, active: impl Fn(u32) -> bool) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for (i, value) in profile.iter() {
        match (start, active(value)) {
            (None, true) => start = Some(i),
            (Some(s), false) => {
                spans.push(Span::new_unchecked(s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push(Span::new_unchecked(s, profile.len()));
    }

    spans
}
