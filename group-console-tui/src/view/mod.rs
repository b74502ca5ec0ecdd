//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model 状态，绝不修改。
//! 每一帧由主循环调用 `render`，按 布局 → 页面 → 状态栏 → 弹窗 的
//! 顺序绘制。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod components;     // 状态栏、弹窗等组件
//!         mod layout;         // 主布局
//!         mod pages;          // 页面内容（群组列表）
//!         mod theme;          // 颜色与常用样式
//!

mod components;
mod layout;
mod pages;
mod theme;

pub use layout::render;
