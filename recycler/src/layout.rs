use alloc::vec::Vec;

use crate::{Axis, Item, Padding, Position, SetupError, Size};

/// Precomputed scroll-axis geometry for every item of one `setup`.
///
/// Coordinates are in content space: `0` is the content's leading edge, before padding.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionTable {
    axis: Axis,
    centers: Vec<f32>,
    leading: Vec<f32>,
    sizes: Vec<f32>,
    content_extent: f32,
}

/// Computes item positions along `axis`.
///
/// Each item is centered at `running + size / 2`, then `running` advances by
/// `size + spacing`. `running` starts at `padding.leading`; `padding.trailing` is added after
/// the last item.
pub fn build_layout<D>(
    items: &[Item<D>],
    type_sizes: &[Size],
    padding: Padding,
    spacing: f32,
    axis: Axis,
) -> Result<PositionTable, SetupError> {
    let count = items.len();
    let mut centers = Vec::with_capacity(count);
    let mut leading = Vec::with_capacity(count);
    let mut sizes = Vec::with_capacity(count);

    let mut running = padding.leading;
    for (i, item) in items.iter().enumerate() {
        let size = type_sizes
            .get(item.type_index)
            .ok_or(SetupError::TypeIndexOutOfRange {
                item: i,
                type_index: item.type_index,
                type_count: type_sizes.len(),
            })?
            .along(axis);

        leading.push(running);
        centers.push(running + size / 2.0);
        sizes.push(size);
        running += size + spacing;
    }

    Ok(PositionTable {
        axis,
        centers,
        leading,
        sizes,
        content_extent: running + padding.trailing,
    })
}

impl PositionTable {
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Total size along the axis, padding included.
    pub fn content_extent(&self) -> f32 {
        self.content_extent
    }

    /// Scroll-axis coordinate of the item center.
    pub fn center(&self, index: usize) -> f32 {
        self.centers[index]
    }

    pub fn leading(&self, index: usize) -> f32 {
        self.leading[index]
    }

    pub fn trailing(&self, index: usize) -> f32 {
        self.leading[index] + self.sizes[index]
    }

    pub fn size(&self, index: usize) -> f32 {
        self.sizes[index]
    }

    /// The item center as a 2D position; the cross-axis component is zero.
    pub fn position(&self, index: usize) -> Position {
        Position::on_axis(self.axis, self.centers[index])
    }

    pub fn centers(&self) -> &[f32] {
        &self.centers
    }

    /// The largest valid scroll offset for a viewport of `viewport_extent`.
    pub fn max_scroll_offset(&self, viewport_extent: f32) -> f32 {
        (self.content_extent - viewport_extent).max(0.0)
    }

    pub fn clamp_scroll_offset(&self, offset: f32, viewport_extent: f32) -> f32 {
        offset.clamp(0.0, self.max_scroll_offset(viewport_extent))
    }

    /// First item whose trailing edge lies past `offset` (binary search).
    ///
    /// Returns `None` for an empty table; offsets past the content map to the last item.
    pub fn index_at_offset(&self, offset: f32) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        // Trailing edges are non-decreasing, so this is a partition point.
        let (mut lo, mut hi) = (0, self.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.trailing(mid) <= offset {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        Some(lo.min(self.len() - 1))
    }

    /// Walks from `candidate` to the first item whose trailing edge lies past `offset`.
    ///
    /// The walk goes in whichever direction is needed, so any candidate works; a close one is
    /// just cheaper.
    pub fn first_visible_from(&self, candidate: usize, offset: f32) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let mut first = candidate.min(self.len() - 1);
        while first > 0 && self.trailing(first - 1) > offset {
            first -= 1;
        }
        while first + 1 < self.len() && self.trailing(first) <= offset {
            first += 1;
        }
        Some(first)
    }
}
