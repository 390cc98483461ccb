use alloc::string::ToString;
use alloc::vec::Vec;

use crate::{ItemType, PillView, SetupError, Size};

/// Instance counts for one item type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolStats {
    /// Instances created since the pool was (re)built. Never decreases until teardown.
    pub created: usize,
    /// Instances currently parked in the pool.
    pub idle: usize,
}

impl PoolStats {
    /// Instances currently handed out.
    pub fn active(&self) -> usize {
        self.created - self.idle
    }
}

struct TypePool<V> {
    item_type: ItemType<V>,
    size: Size,
    idle: Vec<V>,
    created: usize,
}

impl<V: PillView> TypePool<V> {
    fn destroy_idle(&mut self) {
        for mut view in self.idle.drain(..) {
            view.destroy();
        }
    }
}

/// Per-type stacks of inactive, reusable views.
///
/// The pool is the only place views are created or destroyed. Between teardowns the number of
/// instances per type only grows, up to the largest number of that type ever shown at once.
pub struct ViewPool<V> {
    types: Vec<TypePool<V>>,
}

impl<V> Default for ViewPool<V> {
    fn default() -> Self {
        Self { types: Vec::new() }
    }
}

impl<V: PillView> ViewPool<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the item types for a new `setup`.
    ///
    /// A type whose factory is the same `Arc` as the one already installed at that index keeps
    /// its pool and cached size. Any other type gets a fresh pool: one probe instance is
    /// created to discover the type's size and is parked in the pool for later reuse.
    ///
    /// All views must have been released back to the pool before calling this.
    pub fn configure(
        &mut self,
        item_types: Vec<ItemType<V>>,
        mut on_created: impl FnMut(usize, &mut V),
    ) -> Result<(), SetupError> {
        if item_types.is_empty() {
            return Err(SetupError::NoItemTypes);
        }

        let mut previous = core::mem::take(&mut self.types).into_iter();
        let mut next = Vec::with_capacity(item_types.len());
        for (type_index, item_type) in item_types.into_iter().enumerate() {
            match previous.next() {
                Some(kept) if kept.item_type.same_factory(&item_type) => {
                    debug_assert_eq!(kept.idle.len(), kept.created, "configure with views out");
                    next.push(TypePool { item_type, ..kept });
                    continue;
                }
                Some(mut replaced) => replaced.destroy_idle(),
                None => {}
            }

            let mut probe = item_type.create();
            probe.set_active(false);
            on_created(type_index, &mut probe);
            let size = probe.compute_size();
            let mut pool = TypePool {
                item_type,
                size,
                idle: Vec::new(),
                created: 1,
            };
            pool.idle.push(probe);
            if !is_usable(size) {
                vwarn!(type_index, ?size, "item type reported an unusable size");
                let name = pool.item_type.name().to_string();
                next.push(pool);
                for mut dropped in previous {
                    dropped.destroy_idle();
                }
                self.types = next;
                self.destroy_all();
                return Err(SetupError::InvalidTypeSize {
                    type_index,
                    name,
                    size,
                });
            }
            next.push(pool);
        }
        for mut dropped in previous {
            dropped.destroy_idle();
        }

        self.types = next;
        Ok(())
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn item_type(&self, type_index: usize) -> Option<&ItemType<V>> {
        self.types.get(type_index).map(|p| &p.item_type)
    }

    /// The size discovered for `type_index`.
    pub fn type_size(&self, type_index: usize) -> Option<Size> {
        self.types.get(type_index).map(|p| p.size)
    }

    pub fn type_sizes(&self) -> Vec<Size> {
        self.types.iter().map(|p| p.size).collect()
    }

    pub fn stats(&self, type_index: usize) -> Option<PoolStats> {
        self.types.get(type_index).map(|p| PoolStats {
            created: p.created,
            idle: p.idle.len(),
        })
    }

    /// Takes an idle view of `type_index`, creating one when the pool is empty.
    ///
    /// # Panics
    ///
    /// Panics if `type_index` was not installed by [`Self::configure`].
    pub fn acquire(&mut self, type_index: usize) -> V {
        self.acquire_with(type_index, |_, _| {})
    }

    /// Like [`Self::acquire`], calling `on_created` when a new instance had to be made.
    pub fn acquire_with(&mut self, type_index: usize, on_created: impl FnOnce(usize, &mut V)) -> V {
        let pool = &mut self.types[type_index];
        if let Some(view) = pool.idle.pop() {
            return view;
        }

        let mut view = pool.item_type.create();
        pool.created += 1;
        vtrace!(
            type_index,
            created = pool.created,
            "pool exhausted, created a view"
        );
        on_created(type_index, &mut view);
        view
    }

    /// Deactivates `view` and parks it in the pool of `type_index`.
    pub fn release(&mut self, type_index: usize, mut view: V) {
        view.set_active(false);
        self.types[type_index].idle.push(view);
    }

    /// Destroys every pooled view and forgets all item types.
    pub fn destroy_all(&mut self) {
        vdebug!(
            destroyed = self.types.iter().map(|p| p.idle.len()).sum::<usize>(),
            "ViewPool::destroy_all"
        );
        for mut pool in self.types.drain(..) {
            debug_assert_eq!(pool.idle.len(), pool.created, "destroy_all with views out");
            pool.destroy_idle();
        }
    }
}

impl<V> core::fmt::Debug for ViewPool<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut list = f.debug_list();
        for pool in &self.types {
            list.entry(&(
                pool.item_type.name(),
                pool.size,
                pool.created,
                pool.idle.len(),
            ));
        }
        list.finish()
    }
}

fn is_usable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width >= 0.0 && size.height >= 0.0
}
