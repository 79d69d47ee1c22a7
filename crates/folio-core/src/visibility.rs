//! Viewport intersection maths for passive section detection

/// Visibility of one section inside the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    /// Index into the section list
    pub index: usize,
    /// Share of the section's rows inside the viewport, `0.0..=1.0`
    pub ratio: f64,
}

impl IntersectionEntry {
    pub fn new(index: usize, ratio: f64) -> Self {
        Self { index, ratio }
    }
}

/// Share of a section (`top`, `height`) visible in the viewport window.
///
/// Zero-height sections are never visible.
pub fn visibility_ratio(top: f64, height: f64, viewport_top: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }

    let start = top.max(viewport_top);
    let end = (top + height).min(viewport_top + viewport_height);
    let visible = (end - start).max(0.0);

    (visible / height).clamp(0.0, 1.0)
}

/// Pick the section occupying most of the viewport.
///
/// Only entries at or above `min_ratio` qualify. Ties go to the earlier
/// section in document order.
pub fn dominant_section(entries: &[IntersectionEntry], min_ratio: f64) -> Option<usize> {
    let mut best: Option<IntersectionEntry> = None;

    for entry in entries.iter().filter(|e| e.ratio >= min_ratio) {
        best = match best {
            Some(current)
                if current.ratio > entry.ratio
                    || (current.ratio == entry.ratio && current.index < entry.index) =>
            {
                Some(current)
            }
            _ => Some(*entry),
        };
    }

    best.map(|e| e.index)
}
