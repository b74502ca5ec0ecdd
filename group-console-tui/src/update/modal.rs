//! 弹窗更新逻辑

use crate::backend::Backend;
use crate::message::ModalMessage;
use crate::model::domain::GroupDraft;
use crate::model::state::ADD_GROUP_FIELD_COUNT;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage, backend: &Backend) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::AddGroup { .. } => handle_add_group(app, msg, backend),
        Modal::Help => handle_simple_modal(app, msg),
    }
}

/// 处理新建群组弹窗
fn handle_add_group(app: &mut App, msg: ModalMessage, backend: &Backend) {
    let Some(Modal::AddGroup {
        ref mut name,
        ref mut is_active,
        ref mut focus,
        ref mut submitting,
        ref mut error,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            // 提交中也允许关闭；迟到的完成消息会因实例已销毁而被丢弃
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::NextField => {
            *focus = (*focus + 1) % ADD_GROUP_FIELD_COUNT;
        }

        ModalMessage::PrevField => {
            if *focus == 0 {
                *focus = ADD_GROUP_FIELD_COUNT - 1;
            } else {
                *focus -= 1;
            }
        }

        ModalMessage::Input(ch) => {
            // 提交期间锁定草稿
            if *submitting {
                return;
            }
            if *focus == 0 {
                name.push(ch);
            }
        }

        ModalMessage::Backspace => {
            if *submitting {
                return;
            }
            if *focus == 0 {
                name.pop();
            }
        }

        ModalMessage::ToggleActive => {
            if *submitting {
                return;
            }
            *is_active = !*is_active;
        }

        ModalMessage::Confirm => {
            // 同一时刻至多一个在途创建请求
            if *submitting {
                return;
            }

            // 必填字段：名称为空时拒绝提交，不进入错误态
            if name.is_empty() {
                app.set_status("Name is required");
                return;
            }

            // 新一次提交开始时清除上次错误
            *error = None;
            *submitting = true;
            let draft = GroupDraft {
                name: name.clone(),
                is_active: *is_active,
            };
            app.set_status(format!("Creating group \"{}\"...", draft.name));
            backend.create_group(draft);
        }

        ModalMessage::DismissError => {
            if error.is_some() {
                *error = None;
            }
        }
    }
}

/// 处理简单弹窗（帮助）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => {
            app.modal.close();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::sync::Arc;

    use super::update;
    use crate::message::ModalMessage;
    use crate::model::{App, Modal};
    use crate::test_utils::{backend_with, MockGroupStore};

    fn open_form(app: &mut App) {
        app.modal.show_add_group();
    }

    fn form_fields(app: &App) -> (&str, bool, bool, Option<&str>) {
        let Some(Modal::AddGroup {
            ref name,
            is_active,
            submitting,
            ref error,
            ..
        }) = app.modal.active
        else {
            unreachable!("add-group form is open");
        };
        (name, is_active, submitting, error.as_deref())
    }

    #[tokio::test]
    async fn edits_mutate_draft_fields() {
        let (backend, _rx) = backend_with(Arc::new(MockGroupStore::new()));
        let mut app = App::new();
        open_form(&mut app);

        update(&mut app, ModalMessage::Input('O'), &backend);
        update(&mut app, ModalMessage::Input('p'), &backend);
        update(&mut app, ModalMessage::Backspace, &backend);
        update(&mut app, ModalMessage::ToggleActive, &backend);

        let (name, is_active, _, _) = form_fields(&app);
        assert_eq!(name, "O");
        assert!(!is_active);
    }

    #[tokio::test]
    async fn empty_name_submit_is_refused_without_request() {
        let store = Arc::new(MockGroupStore::new());
        let (backend, mut rx) = backend_with(Arc::clone(&store));
        let mut app = App::new();
        open_form(&mut app);

        update(&mut app, ModalMessage::Confirm, &backend);

        // 仍处于编辑态，没有发出任何请求
        let (name, _, submitting, error) = form_fields(&app);
        assert_eq!(name, "");
        assert!(!submitting);
        assert!(error.is_none());
        assert_eq!(store.create_calls(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn submit_while_submitting_issues_no_second_request() {
        let store = Arc::new(MockGroupStore::new());
        let (backend, mut rx) = backend_with(Arc::clone(&store));
        let mut app = App::new();
        open_form(&mut app);

        update(&mut app, ModalMessage::Input('X'), &backend);
        update(&mut app, ModalMessage::Confirm, &backend);
        update(&mut app, ModalMessage::Confirm, &backend);

        // 恰好一条完成消息、一次 create 调用
        assert!(rx.recv().await.is_some());
        assert!(rx.try_recv().is_err());
        assert_eq!(store.create_calls(), 1);
    }

    #[tokio::test]
    async fn draft_is_locked_while_submitting() {
        let (backend, _rx) = backend_with(Arc::new(MockGroupStore::new()));
        let mut app = App::new();
        open_form(&mut app);

        update(&mut app, ModalMessage::Input('X'), &backend);
        update(&mut app, ModalMessage::Confirm, &backend);
        update(&mut app, ModalMessage::Input('Y'), &backend);
        update(&mut app, ModalMessage::ToggleActive, &backend);
        update(&mut app, ModalMessage::Backspace, &backend);

        let (name, is_active, submitting, _) = form_fields(&app);
        assert_eq!(name, "X");
        assert!(is_active);
        assert!(submitting);
    }

    #[tokio::test]
    async fn dismiss_error_clears_it_and_keeps_draft() {
        let (backend, _rx) = backend_with(Arc::new(MockGroupStore::new()));
        let mut app = App::new();
        open_form(&mut app);
        update(&mut app, ModalMessage::Input('X'), &backend);

        // 没有错误时是 no-op
        update(&mut app, ModalMessage::DismissError, &backend);
        let (name, _, _, error) = form_fields(&app);
        assert_eq!(name, "X");
        assert!(error.is_none());

        if let Some(Modal::AddGroup { ref mut error, .. }) = app.modal.active {
            *error = Some("create failed".into());
        }
        update(&mut app, ModalMessage::DismissError, &backend);
        let (name, _, _, error) = form_fields(&app);
        assert_eq!(name, "X");
        assert!(error.is_none());
    }

    #[tokio::test]
    async fn close_discards_draft() {
        let (backend, _rx) = backend_with(Arc::new(MockGroupStore::new()));
        let mut app = App::new();
        open_form(&mut app);
        update(&mut app, ModalMessage::Input('X'), &backend);

        update(&mut app, ModalMessage::Close, &backend);
        assert!(!app.modal.is_open());

        // 重新打开得到全新草稿
        app.modal.show_add_group();
        let (name, is_active, submitting, error) = form_fields(&app);
        assert_eq!(name, "");
        assert!(is_active);
        assert!(!submitting);
        assert!(error.is_none());
    }
}
