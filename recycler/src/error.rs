use alloc::string::String;

use crate::Size;

/// A fatal configuration problem detected by `setup`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SetupError {
    #[error("setup needs at least one item type")]
    NoItemTypes,

    #[error("item {item} references type {type_index}, but only {type_count} item types exist")]
    TypeIndexOutOfRange {
        item: usize,
        type_index: usize,
        type_count: usize,
    },

    #[error("item type {type_index} ({name:?}) reported an unusable size {size:?}")]
    InvalidTypeSize {
        type_index: usize,
        name: String,
        size: Size,
    },
}
