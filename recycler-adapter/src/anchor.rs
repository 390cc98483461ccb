use core::fmt;

use recycler::{BindData, ListController, ListHooks};

/// An item identity plus how far the list was scrolled into that item.
///
/// Capture one before calling `setup` with a new item list, then apply it afterwards: the item
/// with the same key ends up at the same distance from the viewport's leading edge, even if
/// items were inserted before it.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnchor<K> {
    pub key: K,
    /// Scroll offset minus the item's leading edge, in layout units.
    pub offset_in_viewport: f32,
}

impl<K: fmt::Debug> fmt::Debug for ScrollAnchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollAnchor")
            .field("key", &self.key)
            .field("offset_in_viewport", &self.offset_in_viewport)
            .finish()
    }
}

/// Captures an anchor for the first visible item, identified by `key_of` its data.
///
/// Returns `None` if the list is empty or has not been reconciled.
pub fn capture_first_visible_anchor<D, V, H, K>(
    list: &ListController<D, V, H>,
    key_of: impl FnOnce(&D) -> K,
) -> Option<ScrollAnchor<K>>
where
    V: BindData<D>,
    H: ListHooks<V>,
{
    let index = list.first_visible()?;
    let item = list.items().get(index)?;
    let offset_in_viewport = list.scroll_offset() - list.layout().leading(index);
    Some(ScrollAnchor {
        key: key_of(&item.data),
        offset_in_viewport,
    })
}

/// Scrolls `list` so the anchored item is back where it was when the anchor was captured.
///
/// `key_to_index` looks the key up in the items passed to the latest `setup`. Unknown keys and
/// indexes past the end leave the list untouched and return `false`. Otherwise any focus
/// animation is canceled and the list moves to the (clamped) offset.
pub fn apply_anchor<D, V, H, K>(
    list: &mut ListController<D, V, H>,
    anchor: &ScrollAnchor<K>,
    mut key_to_index: impl FnMut(&K) -> Option<usize>,
) -> bool
where
    V: BindData<D>,
    H: ListHooks<V>,
{
    let Some(index) = key_to_index(&anchor.key) else {
        return false;
    };
    if index >= list.item_count() {
        return false;
    }
    list.cancel_focus();
    let target = list.layout().leading(index) + anchor.offset_in_viewport;
    adebug!(index, target, "applying anchor");
    list.scroll_to_offset(target);
    true
}
