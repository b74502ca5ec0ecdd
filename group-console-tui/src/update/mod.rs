//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod backend;            // 后台完成消息处理（拉取/创建结果）
//!         mod content;            // 内容面板子消息处理
//!         mod modal;              // 弹窗子消息处理
//!
//!
//!     主更新函数使用 match 进行穷举，其中每个 Message 变体都对应
//!     一个状态变更。复杂的子消息委托给子模块处理。
//!     通过 &mut App 直接修改状态，避免不必要的复制。
//!
//!     需要发起异步调用的迁移（Refresh、弹窗 Confirm）经由传入的
//!     Backend 句柄进行；调用的结果以 BackendMessage 的形式在之后
//!     的循环中回到这里。
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod backend;
mod content;
mod modal;

use crate::backend::Backend;
use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage, backend: &Backend) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg, backend);
        }

        AppMessage::Backend(backend_msg) => {
            self::backend::update(app, backend_msg);
        }

        AppMessage::Refresh => {
            // 在途时不重复发起：同一时刻至多一个拉取
            if !app.groups.loading {
                app.groups.loading = true;
                backend.load_groups();
                app.set_status("Refreshing groups...");
            }
        }

        AppMessage::ShowHelp => {
            if !app.modal.is_open() {
                app.modal.show_help();
            }
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::sync::Arc;

    use group_console_core::CoreError;

    use super::update;
    use crate::message::{AppMessage, ContentMessage, ModalMessage};
    use crate::model::{App, Modal};
    use crate::test_utils::{backend_with, make_group, MockGroupStore};

    fn type_name(app: &mut App, backend: &crate::backend::Backend, text: &str) {
        for ch in text.chars() {
            update(app, AppMessage::Modal(ModalMessage::Input(ch)), backend);
        }
    }

    #[tokio::test]
    async fn activation_fetches_groups_once() {
        let store = Arc::new(MockGroupStore::new().with_groups(vec![make_group(1, "Eng")]));
        let (backend, mut rx) = backend_with(Arc::clone(&store));
        let mut app = App::new();

        update(&mut app, AppMessage::Refresh, &backend);
        assert!(app.groups.loading);

        let msg = rx.recv().await.unwrap();
        update(&mut app, msg, &backend);

        assert!(!app.groups.loading);
        assert_eq!(app.groups.groups.len(), 1);
        assert_eq!(app.groups.groups[0].name, "Eng");
    }

    #[tokio::test]
    async fn refresh_while_loading_issues_no_second_fetch() {
        let store = Arc::new(MockGroupStore::new());
        let (backend, mut rx) = backend_with(store);
        let mut app = App::new();

        update(&mut app, AppMessage::Refresh, &backend);
        update(&mut app, AppMessage::Refresh, &backend);

        // 恰好一条完成消息
        let msg = rx.recv().await.unwrap();
        update(&mut app, msg, &backend);
        assert!(rx.try_recv().is_err());
        assert!(!app.groups.loading);
    }

    #[tokio::test]
    async fn create_flow_appends_record_and_closes_gate() {
        let store = Arc::new(MockGroupStore::new().with_groups(vec![make_group(1, "Eng")]));
        let (backend, mut rx) = backend_with(Arc::clone(&store));
        let mut app = App::new();

        // 激活并加载
        update(&mut app, AppMessage::Refresh, &backend);
        let msg = rx.recv().await.unwrap();
        update(&mut app, msg, &backend);

        // 打开表单、输入、提交
        update(&mut app, AppMessage::Content(ContentMessage::Add), &backend);
        assert!(app.modal.is_open());
        type_name(&mut app, &backend, "Ops");
        update(&mut app, AppMessage::Modal(ModalMessage::ToggleActive), &backend);
        update(&mut app, AppMessage::Modal(ModalMessage::ToggleActive), &backend);
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm), &backend);
        assert!(matches!(
            app.modal.active,
            Some(Modal::AddGroup { submitting: true, .. })
        ));

        // 消费创建完成消息
        let msg = rx.recv().await.unwrap();
        update(&mut app, msg, &backend);

        let names: Vec<&str> = app.groups.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Eng", "Ops"]);
        assert!(!app.modal.is_open());

        let request = store.last_request().await.unwrap();
        assert_eq!(request.name, "Ops");
        assert!(request.is_active);
        assert_eq!(store.create_calls(), 1);
    }

    #[tokio::test]
    async fn create_failure_then_retry_succeeds_and_clears_error() {
        let store = Arc::new(MockGroupStore::new().with_create_error(CoreError::ApiError {
            status: 500,
            message: "boom".into(),
        }));
        let (backend, mut rx) = backend_with(Arc::clone(&store));
        let mut app = App::new();

        update(&mut app, AppMessage::Content(ContentMessage::Add), &backend);
        type_name(&mut app, &backend, "X");
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm), &backend);

        let msg = rx.recv().await.unwrap();
        update(&mut app, msg, &backend);

        // 失败：表单保持打开，错误可见，草稿原样保留
        assert!(app.groups.groups.is_empty());
        let Some(Modal::AddGroup {
            ref name,
            submitting,
            ref error,
            ..
        }) = app.modal.active
        else {
            unreachable!("form must stay open after a failed create");
        };
        assert_eq!(name, "X");
        assert!(!submitting);
        assert!(error.is_some());

        // 重试：提交开始时清除错误，随后成功
        store.set_create_error(None).await;
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm), &backend);
        assert!(matches!(
            app.modal.active,
            Some(Modal::AddGroup { submitting: true, error: None, .. })
        ));

        let msg = rx.recv().await.unwrap();
        update(&mut app, msg, &backend);
        assert!(!app.modal.is_open());
        assert_eq!(app.groups.groups.len(), 1);
        assert_eq!(store.create_calls(), 2);
    }

    #[tokio::test]
    async fn quit_sets_flag() {
        let (backend, _rx) = backend_with(Arc::new(MockGroupStore::new()));
        let mut app = App::new();
        update(&mut app, AppMessage::Quit, &backend);
        assert!(app.should_quit);
    }
}
