// Layout helpers: width breakpoints, click targets and list scrolling

use crate::guide::SectionId;
use ratatui::layout::Rect;

/// Responsive breakpoint for layout decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: short tab labels, no icons
    Compact,
    /// 60-99 cols
    Normal,
    /// 100+ cols: full key hints in the status bar
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }
}

/// Something a mouse click can activate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Tab(SectionId),
    /// Card header, by index within the active section
    CardHeader(usize),
    /// Copy button of the card at this index
    CopyButton(usize),
}

/// Screen regions registered during the last draw
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Topmost target under a terminal cell
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| {
                column >= area.x
                    && column < area.x.saturating_add(area.width)
                    && row >= area.y
                    && row < area.y.saturating_add(area.height)
            })
            .map(|(_, target)| *target)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.regions.len()
    }
}

/// Scroll offset that keeps lines `start..end` visible in a viewport.
///
/// When the span is taller than the viewport its first line wins.
pub fn scroll_to_show(
    current: usize,
    start: usize,
    end: usize,
    viewport: usize,
    total: usize,
) -> usize {
    if viewport == 0 {
        return 0;
    }
    let max_offset = total.saturating_sub(viewport);
    let mut offset = current.min(max_offset);

    if start < offset {
        offset = start;
    } else if end > offset + viewport {
        offset = end.saturating_sub(viewport).min(start);
    }

    offset.min(max_offset)
}
