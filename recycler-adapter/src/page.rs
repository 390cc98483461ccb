use alloc::sync::Arc;

use recycler::ListHooks;

/// Called with the new page index whenever it changes.
pub type PageCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Tracks which "page" of a list is showing, from the first visible index of each
/// reconciliation.
///
/// Pages are fixed runs of `items_per_page` consecutive items. Install it as the list's hooks
/// (or call it from your own [`ListHooks`] implementation) to drive a page indicator.
#[derive(Clone)]
pub struct PageIndicator {
    items_per_page: usize,
    current: usize,
    on_change: Option<PageCallback>,
}

impl PageIndicator {
    /// `items_per_page` is clamped to at least 1.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            items_per_page: items_per_page.max(1),
            current: 0,
            on_change: None,
        }
    }

    pub fn with_on_change(mut self, f: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(f));
        self
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn page_of(&self, index: usize) -> usize {
        index / self.items_per_page
    }

    /// Number of pages needed for `item_count` items.
    pub fn page_count(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.items_per_page)
    }

    /// Records a new first visible index. Returns `true` if the page changed.
    pub fn update(&mut self, first_visible: usize) -> bool {
        let page = self.page_of(first_visible);
        if page == self.current {
            return false;
        }
        atrace!(from = self.current, to = page, "page changed");
        self.current = page;
        if let Some(cb) = &self.on_change {
            cb(page);
        }
        true
    }
}

impl<V> ListHooks<V> for PageIndicator {
    fn on_show_pills_from(&mut self, first_visible: usize) {
        self.update(first_visible);
    }
}

impl core::fmt::Debug for PageIndicator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PageIndicator")
            .field("items_per_page", &self.items_per_page)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
