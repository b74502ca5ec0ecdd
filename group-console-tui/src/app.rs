//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，主循环先发出唯一一次初始拉取（激活即加载），
//! 随后进入事件循环。重绘本身永远不会再次触发拉取。
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     while let Ok(msg) = rx.try_recv() {             // 先消化后台完成消息
//!         update::update(&mut app , msg , backend)        //（拉取/创建的结果）
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg , backend)        // 更新终端状态
//!     }
//! }

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Backend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &Backend,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    // 0. 首次激活：发起唯一一次初始拉取
    update::update(app, AppMessage::Refresh, backend);

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 消化后台完成消息（拉取/创建结果）
        while let Ok(msg) = rx.try_recv() {
            update::update(app, msg, backend);
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            update::update(app, msg, backend);
        }
    }

    Ok(())
}
