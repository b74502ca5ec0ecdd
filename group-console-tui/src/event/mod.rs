//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     · poll_event      事件轮询，受 ~/app.rs 调用，最长阻塞 timeout
//!     · handle_event    事件分发：
//!         - 有弹窗打开时，优先交由 handle_modal_keys 处理
//!         - 全局快捷键（退出、帮助、刷新）就地翻译
//!         - 其余按键按列表页处理（上下选择、Alt+a 新建）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗键盘处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     当 app.modal.is_open() 为 true 时，优先处理弹窗键盘事件。
//!
//!     新建群组弹窗的键盘映射：
//!         Esc / Ctrl+C → ModalMessage::Close
//!         Tab / ↓      → ModalMessage::NextField
//!         Shift+Tab / ↑ → ModalMessage::PrevField
//!         Enter        → ModalMessage::Confirm
//!         Space        → 焦点在启用开关时为 ToggleActive，否则输入空格
//!         Delete       → ModalMessage::DismissError
//!         字符输入      → ModalMessage::Input(c)
//!         Backspace    → ModalMessage::Backspace
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
