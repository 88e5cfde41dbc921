//! # Pagination
//!
//! Pages are 1-based and fixed at [`PAGE_SIZE`] entries. Nothing here clamps
//! the requested page: asking for a page past the end yields an empty slice.

use std::ops::Range;

pub const PAGE_SIZE: usize = 25;

/// Maximum number of page buttons shown at once, gaps excluded.
pub const PAGER_WINDOW: usize = 9;

/// ceil(len / page_size)
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Index range `[(page-1)*size, page*size)` clipped to `len`.
pub fn page_range(page: usize, len: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_range(page, items.len(), page_size)]
}

/// One slot in the pager row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerSlot {
    Page(usize),
    Gap,
}

/// Windowed pager: always the first and last page, plus a run of pages
/// around `current`, with `Gap` markers where pages are skipped.
///
/// When `total <= max_buttons` every page is listed.
pub fn pager_window(current: usize, total: usize, max_buttons: usize) -> Vec<PagerSlot> {
    if total == 0 {
        return Vec::new();
    }
    if total <= max_buttons || max_buttons < 5 {
        return (1..=total).map(PagerSlot::Page).collect();
    }

    // first + last are fixed; the rest is the sliding run
    let run = max_buttons - 2;
    let current = current.clamp(1, total);
    let mut start = current.saturating_sub(run / 2).max(2);
    let mut end = start + run - 1;
    if end > total - 1 {
        end = total - 1;
        start = end + 1 - run;
    }

    let mut slots = vec![PagerSlot::Page(1)];
    if start > 2 {
        slots.push(PagerSlot::Gap);
    }
    slots.extend((start..=end).map(PagerSlot::Page));
    if end < total - 1 {
        slots.push(PagerSlot::Gap);
    }
    slots.push(PagerSlot::Page(total));
    slots
}
