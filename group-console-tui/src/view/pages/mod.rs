//! 页面内容渲染

pub mod groups;
