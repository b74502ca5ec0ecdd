//! Group Console TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! Group Console TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     读取 GROUP_CONSOLE_API_BASE   // 环境变量只在此处读取一次
//!     HttpGroupStore::new()         // 显式注入 ApiConfig，构造 HTTP 存储
//!     Backend::new()                // 组装后台桥接（tokio 任务 + mpsc 通道）
//!     init_terminal()               // 初始化终端，得到 terminal: Terminal<...>
//!     model::App::new()             // 创建 APP 实例
//!     app::run()                    // 运行 app.rs 主循环
//!     restore_terminal()            // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
#[cfg(test)]
mod test_utils;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use group_console_core::{ApiConfig, HttpGroupStore};
use tokio::sync::mpsc;

use backend::Backend;
use util::{init_terminal, restore_terminal};

/// 未设置环境变量时的默认 API 地址
const DEFAULT_API_BASE: &str = "http://localhost:5000";

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // 1. 读取 API 地址（仅此一处），显式注入客户端
    let base_url =
        std::env::var("GROUP_CONSOLE_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
    let store = Arc::new(HttpGroupStore::new(&ApiConfig::new(base_url)));

    // 2. 组装后台桥接：异步调用经 mpsc 通道回流主循环
    let (tx, mut rx) = mpsc::unbounded_channel();
    let backend = Backend::new(store, tx);

    // 3. 初始化终端
    let mut terminal = init_terminal()?;

    // 4. 创建应用实例
    let mut app = model::App::new();

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app, &backend, &mut rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 7. 返回结果
    result
}
