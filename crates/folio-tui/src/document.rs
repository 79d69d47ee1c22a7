//! Scrollable page document
//!
//! Sections are mounted as pages stacked vertically, each exactly one
//! viewport tall. The document owns the scroll offset (in rows), eases it
//! toward a target after [`PageDocument::scroll_into_view`], and reports how
//! much of every page is visible so the controller can follow native scrolls.

use folio_core::{visibility_ratio, IntersectionEntry, SectionId, SectionList};
use tracing::debug;

use crate::data;

/// Remaining distance (rows) under which the animation snaps to its target
const ARRIVAL_EPSILON: f64 = 0.5;

/// Outcome of one animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollProgress {
    /// No animation running
    Idle,
    /// Offset moved toward the target
    Moving,
    /// Offset reached the target on this frame
    Arrived,
}

/// A mounted page that overlaps the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisiblePage<'a> {
    pub id: &'a SectionId,
    /// Row of the page's top edge relative to the viewport top (may be negative)
    pub top: i32,
}

#[derive(Debug, Clone)]
pub struct PageDocument {
    pages: Vec<SectionId>,
    page_height: u16,
    offset: f64,
    target: Option<f64>,
    /// Share of the remaining distance covered per frame
    speed: f64,
    moved: bool,
}

impl PageDocument {
    pub fn new<I>(pages: I, speed: f64) -> Self
    where
        I: IntoIterator<Item = SectionId>,
    {
        Self {
            pages: pages.into_iter().collect(),
            page_height: 0,
            offset: 0.0,
            target: None,
            speed: speed.clamp(0.05, 0.95),
            moved: false,
        }
    }

    /// Mount a page for every section that has content
    pub fn mount(sections: &SectionList, speed: f64) -> Self {
        let pages = sections
            .iter()
            .filter(|id| {
                let has_page = data::page(id.as_str()).is_some();
                if !has_page {
                    debug!("No page content for section {}, not mounting", id);
                }
                has_page
            })
            .cloned();
        Self::new(pages, speed)
    }

    pub fn pages(&self) -> &[SectionId] {
        &self.pages
    }

    pub fn page_height(&self) -> u16 {
        self.page_height
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    fn max_offset(&self) -> f64 {
        self.pages.len().saturating_sub(1) as f64 * f64::from(self.page_height)
    }

    /// Resize pages to the new viewport height, keeping the same relative position
    pub fn set_page_height(&mut self, height: u16) {
        if height == self.page_height {
            return;
        }

        if self.page_height > 0 {
            let scale = f64::from(height) / f64::from(self.page_height);
            self.offset *= scale;
            self.target = self.target.map(|t| t * scale);
        }
        self.page_height = height;
        self.offset = self.offset.clamp(0.0, self.max_offset());
        self.moved = true;
    }

    /// Start a smooth scroll to the page mounted for `id`.
    ///
    /// Returns false when no page is mounted for that section.
    pub fn scroll_into_view(&mut self, id: &SectionId) -> bool {
        let Some(position) = self.pages.iter().position(|p| p == id) else {
            return false;
        };

        let target = (position as f64 * f64::from(self.page_height)).min(self.max_offset());
        self.target = Some(target);
        true
    }

    /// Native scroll by `rows`; cancels any running animation
    pub fn scroll_by(&mut self, rows: i32) {
        self.target = None;
        let offset = (self.offset + f64::from(rows)).clamp(0.0, self.max_offset());
        if offset != self.offset {
            self.offset = offset;
            self.moved = true;
        }
    }

    /// Advance the animation by one frame (exponential ease-out)
    pub fn tick(&mut self) -> ScrollProgress {
        let Some(target) = self.target else {
            return ScrollProgress::Idle;
        };

        let remaining = target - self.offset;
        self.moved = true;
        if remaining.abs() < ARRIVAL_EPSILON {
            self.offset = target;
            self.target = None;
            ScrollProgress::Arrived
        } else {
            self.offset += remaining * self.speed;
            ScrollProgress::Moving
        }
    }

    /// True once after every change of the offset or page height
    pub fn take_moved(&mut self) -> bool {
        std::mem::take(&mut self.moved)
    }

    /// Visibility of every mounted page that belongs to `sections`
    pub fn intersections(&self, sections: &SectionList) -> Vec<IntersectionEntry> {
        let height = f64::from(self.page_height);
        self.pages
            .iter()
            .enumerate()
            .filter_map(|(position, id)| {
                let index = sections.index_of(id.as_str())?;
                let top = position as f64 * height;
                Some(IntersectionEntry::new(
                    index,
                    visibility_ratio(top, height, self.offset, height),
                ))
            })
            .collect()
    }

    /// Pages overlapping the viewport, top to bottom
    pub fn visible_pages(&self) -> Vec<VisiblePage<'_>> {
        let height = i32::from(self.page_height);
        let offset = self.offset.round() as i32;
        self.pages
            .iter()
            .enumerate()
            .filter_map(|(position, id)| {
                let top = position as i32 * height - offset;
                (top < height && top + height > 0).then_some(VisiblePage { id, top })
            })
            .collect()
    }
}
