//! 各部分状态

mod groups;
mod modal;

pub use groups::GroupsState;
pub use modal::{Modal, ModalState, ADD_GROUP_FIELD_COUNT};
