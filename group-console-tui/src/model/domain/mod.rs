//! 领域模型

mod group;

pub use group::{Group, GroupDraft};
