//! 存储层抽象 Trait

mod group_store;

pub use group_store::GroupStore;
