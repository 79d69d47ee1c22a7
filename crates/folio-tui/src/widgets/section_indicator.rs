//! Vertical dot indicator, one dot per section

use ratatui::{buffer::Buffer, layout::Rect, text::Span, widgets::Widget};

use crate::theme::{styles, Palette};

const ACTIVE_DOT: &str = "●";
const DOT: &str = "○";

pub struct SectionIndicator<'a> {
    count: usize,
    active: usize,
    palette: &'a Palette,
}

impl<'a> SectionIndicator<'a> {
    pub fn new(count: usize, active: usize, palette: &'a Palette) -> Self {
        Self {
            count,
            active,
            palette,
        }
    }

    /// One row per dot, vertically centred; dots are spaced out when there is room
    pub fn dot_regions(&self, area: Rect) -> Vec<(Rect, usize)> {
        if self.count == 0 || area.width == 0 || area.height == 0 {
            return Vec::new();
        }

        let count = self.count as u16;
        let spacing: u16 = if count * 2 - 1 <= area.height { 2 } else { 1 };
        let span = (count - 1) * spacing + 1;
        let top = area.y + area.height.saturating_sub(span) / 2;

        (0..self.count)
            .map(|index| (Rect::new(area.x, top + index as u16 * spacing, area.width, 1), index))
            .take_while(|(rect, _)| rect.y < area.bottom())
            .collect()
    }

    /// Section under the cell at (`column`, `row`), if any
    pub fn hit(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        self.dot_regions(area)
            .into_iter()
            .find(|(rect, _)| rect.contains((column, row).into()))
            .map(|(_, index)| index)
    }
}

impl Widget for SectionIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let x = area.x + area.width / 2;
        for (rect, index) in self.dot_regions(area) {
            let dot = if index == self.active {
                Span::styled(ACTIVE_DOT, styles::accent_bold(self.palette))
            } else {
                Span::styled(DOT, styles::text_muted(self.palette))
            };
            buf.set_span(x, rect.y, &dot, 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;

    #[test]
    fn test_dots_are_centred_and_spaced() {
        let indicator = SectionIndicator::new(6, 0, &DARK);
        let regions = indicator.dot_regions(Rect::new(77, 3, 3, 20));

        let rows: Vec<u16> = regions.iter().map(|(r, _)| r.y).collect();
        // 11 rows of dots and gaps in 20, starting 4 rows down
        assert_eq!(rows, vec![7, 9, 11, 13, 15, 17]);
    }

    #[test]
    fn test_dots_pack_when_short() {
        let indicator = SectionIndicator::new(6, 0, &DARK);
        let regions = indicator.dot_regions(Rect::new(0, 0, 3, 7));

        let rows: Vec<u16> = regions.iter().map(|(r, _)| r.y).collect();
        assert_eq!(rows, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_dots_clipped_to_area() {
        let indicator = SectionIndicator::new(6, 0, &DARK);
        assert_eq!(indicator.dot_regions(Rect::new(0, 0, 3, 4)).len(), 4);
    }

    #[test]
    fn test_hit_testing() {
        let indicator = SectionIndicator::new(6, 0, &DARK);
        let area = Rect::new(77, 3, 3, 20);

        assert_eq!(indicator.hit(area, 78, 7), Some(0));
        assert_eq!(indicator.hit(area, 77, 11), Some(2));
        assert_eq!(indicator.hit(area, 79, 17), Some(5));
        assert_eq!(indicator.hit(area, 78, 8), None, "gap between dots");
        assert_eq!(indicator.hit(area, 10, 7), None, "outside the column");
    }

    #[test]
    fn test_active_dot_rendered() {
        let mut term = TestTerminal::with_size(3, 11);
        term.render_widget(SectionIndicator::new(6, 2, &DARK), term.area());

        assert_eq!(term.cell_at(1, 4), Some("●"));
        assert_eq!(term.cell_at(1, 0), Some("○"));
        assert_eq!(term.cell_at(1, 10), Some("○"));
    }
}
