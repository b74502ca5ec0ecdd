//！┌────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                           │
//！│  ┌────────────────────────────── UI 层 ──────────────────────────────┐    │
//！│  │                                                                   │    │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐        │    │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │        │    │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │        │    │
//！│  │   └─────────┘          │           │          └────┬─────┘        │    │
//！│  │        ▲               │ AppMessage│               │ 修改          │    │
//！│  │        │               │ ModalMsg  │               ▼               │    │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐        │    │
//！│  │   │  View   │          │ BackendMsg│   ┌───── │  Model   │        │    │
//！│  │   │   层    │          └─────▲─────┘   │      │    层    │        │    │
//！│  │   └────┬────┘ ◀──────── 读取 │─────────┘      └──────────┘        │    │
//！│  │        │                     │                                    │    │
//！│  └────────│─────────────────────│────────────────────────────────────┘    │
//！│           ▼              完成消息│（mpsc 通道）          ▲ 发起异步调用      │
//！│      ┌─────────┐               ┌┴─────────┐            │                  │
//！│      │  终端   │               │ Backend  │────────────┘                  │
//！│      │ (Util)  │               │    层    │                              │
//！│      └─────────┘               └────┬─────┘                              │
//！│                                     │                                    │
//！│                                     ▼                                    │
//！│                          ┌───────────────────┐                           │
//！│                          │ group-console-core │                          │
//！│                          │  (GroupStore/HTTP) │                          │
//！│                          └───────────────────┘                           │
//！└────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责所有的异步存储调用。
//! 通过 group-console-core 库的 `GroupStore` trait 访问远端 API。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod bridge;             // UI ↔ 异步任务桥接
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在弹窗中按下 Enter
//!         ↓
//!     Update 层处理 ModalMessage::Confirm，置 submitting = true
//!         ↓
//!     Backend::create_group 在 tokio 任务上调用 GroupStore::create
//!         ↓
//!     任务结束后把 Result 包装成 BackendMessage::GroupCreateFinished
//!     经 mpsc 通道送回主循环
//!         ↓
//!     Update 层消费完成消息，更新 Model 状态
//!         ↓
//!     View 层在下一帧重新渲染
//!
//!     列表拉取（Refresh / 首次激活）走完全相同的路径，
//!     完成消息为 BackendMessage::GroupsLoaded。
//!
//!     每次调用恰好产生一条完成消息；busy 标志在发起时置位、
//!     在完成消息被消费时清除，因此每个控制器同一时刻至多
//!     只有一个在途请求。
//!

mod bridge;

pub use bridge::Backend;
