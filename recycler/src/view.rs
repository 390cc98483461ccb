use crate::{Position, Size};

/// The capabilities the list needs from a recyclable view ("pill").
///
/// Implementations wrap whatever the host uses to draw an item: a widget id, a scene node, a
/// struct of cached draw commands. The list never inspects the view beyond these calls.
pub trait PillView {
    /// Size of this view. Queried once per item type, on a freshly created instance.
    fn compute_size(&self) -> Size;

    /// Moves the view. `position` is the item center in viewport-local coordinates.
    fn set_position(&mut self, position: Position);

    /// Shows or hides the view. Pooled views are always inactive.
    fn set_active(&mut self, active: bool);

    /// Plays an entrance animation. `stagger_index` is the offset from the first visible item.
    fn animate(&mut self, stagger_index: usize) {
        let _ = stagger_index;
    }

    /// Called exactly once, right before the view is dropped on teardown.
    fn destroy(&mut self) {}
}

/// Binds item payloads of type `D` to a view.
///
/// Kept separate from [`PillView`] so pools stay agnostic of the payload type.
pub trait BindData<D>: PillView {
    fn init_with_data(&mut self, data: &D);
}

/// Optional override points for the list owner. Every method defaults to a no-op.
pub trait ListHooks<V> {
    /// A reconciliation finished; `first_visible` is the new first visible index.
    fn on_show_pills_from(&mut self, first_visible: usize) {
        let _ = first_visible;
    }

    /// The scroll offset changed (by the host or by an auto-scroll step).
    fn on_scroll_moved(&mut self) {}

    /// A new view instance was created for `type_index`.
    fn on_view_created(&mut self, type_index: usize, view: &mut V) {
        let _ = (type_index, view);
    }

    /// A focus request settled on `index`. `view` is the item's active view, if it has one.
    fn on_focus_finished(&mut self, index: usize, view: Option<&mut V>) {
        let _ = (index, view);
    }

    /// An in-flight focus animation was interrupted by manual input.
    fn on_focus_canceled(&mut self) {}
}

impl<V> ListHooks<V> for () {}
