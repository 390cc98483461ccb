use alloc::string::String;
use alloc::sync::Arc;

/// The single scroll axis of a list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

/// Width/height of a view or viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The component along `axis` (height for vertical lists, width for horizontal ones).
    pub fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }
}

/// A 2D coordinate. Only the scroll-axis component is ever non-zero for list positions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Builds a position with `value` on `axis` and zero on the other axis.
    pub fn on_axis(axis: Axis, value: f32) -> Self {
        match axis {
            Axis::Vertical => Self { x: 0.0, y: value },
            Axis::Horizontal => Self { x: value, y: 0.0 },
        }
    }

    pub fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.y,
            Axis::Horizontal => self.x,
        }
    }
}

/// Space before the first item and after the last one, along the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub leading: f32,
    pub trailing: f32,
}

impl Padding {
    pub const fn new(leading: f32, trailing: f32) -> Self {
        Self { leading, trailing }
    }

    pub const fn uniform(value: f32) -> Self {
        Self {
            leading: value,
            trailing: value,
        }
    }
}

/// Where a focused item lands inside the viewport.
///
/// The item's own anchor point (its leading edge for `Start`, center for `Center`, trailing
/// edge for `End`) is aligned with the matching point of the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    /// A fraction in `[0, 1]` of both the item and the viewport.
    Fraction(f32),
}

impl Align {
    pub fn factor(self) -> f32 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
            Self::Fraction(f) => f.clamp(0.0, 1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// The reconciled window of active slots, both ends inclusive.
///
/// `last` includes the look-ahead item(s), so it can be one past the strictly visible range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleWindow {
    pub first: usize,
    pub last: usize,
}

impl VisibleWindow {
    pub fn contains(&self, index: usize) -> bool {
        self.first <= index && index <= self.last
    }

    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    /// Always `false`: a window holds at least its first item.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// One entry of the list: an opaque payload plus the index of its [`ItemType`].
#[derive(Clone, Debug, PartialEq)]
pub struct Item<D> {
    pub data: D,
    pub type_index: usize,
}

impl<D> Item<D> {
    pub fn new(type_index: usize, data: D) -> Self {
        Self { data, type_index }
    }
}

/// Creates a fresh view instance for one item type.
pub type ViewFactory<V> = Arc<dyn Fn() -> V + Send + Sync>;

/// A kind of item, identified by name, with the factory used to grow its pool.
///
/// Two item types share a pool across `setup` calls only when their factories are the same
/// `Arc` (see [`ItemType::same_factory`]).
pub struct ItemType<V> {
    name: String,
    factory: ViewFactory<V>,
}

impl<V> ItemType<V> {
    pub fn new(name: impl Into<String>, factory: impl Fn() -> V + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            factory: Arc::new(factory),
        }
    }

    pub fn from_factory(name: impl Into<String>, factory: ViewFactory<V>) -> Self {
        Self {
            name: name.into(),
            factory,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn factory(&self) -> &ViewFactory<V> {
        &self.factory
    }

    pub fn same_factory(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.factory, &other.factory)
    }

    pub(crate) fn create(&self) -> V {
        (self.factory)()
    }
}

impl<V> Clone for ItemType<V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<V> core::fmt::Debug for ItemType<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ItemType")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
