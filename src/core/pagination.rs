use super::error::{CaptionError, CaptionResult};

/// Current position within a paginated working set.
///
/// Invariant: `1 <= current <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current: usize,
    pub total: usize,
    pub page_size: usize,
}

impl PageState {
    /// First page of a working set with `item_count` items
    pub fn new(item_count: usize, page_size: usize) -> Self {
        Self {
            current: 1,
            total: PageManager::compute_total_pages(item_count, page_size),
            page_size,
        }
    }

    /// Absolute working-set index of a slot on the current page
    pub fn item_index(&self, slot: usize) -> usize {
        (self.current - 1) * self.page_size + slot
    }
}

/// Page arithmetic for the slot grid
pub struct PageManager;

impl PageManager {
    /// ceil(item_count / page_size), never less than one page
    pub fn compute_total_pages(item_count: usize, page_size: usize) -> usize {
        if page_size == 0 {
            return 1;
        }
        item_count.div_ceil(page_size).max(1)
    }

    /// Step by `delta` pages, clamped to [1, total_pages]
    pub fn step(current: usize, total_pages: usize, delta: isize) -> usize {
        let total = total_pages.max(1) as isize;
        let target = (current as isize).saturating_add(delta);
        target.clamp(1, total) as usize
    }

    /// Parse a "go to page" request and clamp it into range.
    ///
    /// Fractional pages are floored, so "3.7" goes to page 3. Anything that
    /// is not a finite number is rejected with `InvalidPage`.
    pub fn goto(requested: &str, total_pages: usize) -> CaptionResult<usize> {
        let page: f64 = requested
            .trim()
            .parse()
            .map_err(|_| CaptionError::InvalidPage(requested.to_string()))?;
        if !page.is_finite() {
            return Err(CaptionError::InvalidPage(requested.to_string()));
        }

        let floored = page.floor();
        let total = total_pages.max(1);
        if floored < 1.0 {
            return Ok(1);
        }
        if floored >= total as f64 {
            return Ok(total);
        }
        Ok(Self::step(floored as usize, total, 0))
    }
}
