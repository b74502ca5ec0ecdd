//! 类型定义模块

mod group;

pub use group::{CreateGroupRequest, Group};
