//! 后台完成消息处理
//!
//! 异步调用的结果在这里进入状态机。两条不变量：
//! - 每条完成消息都把对应的 busy 标志清掉，状态机不会卡在提交中/加载中；
//! - 对应实例已销毁（弹窗已关闭）的迟到完成消息必须安静地丢弃。

use group_console_core::CoreError;

use crate::message::BackendMessage;
use crate::model::domain::Group;
use crate::model::{App, Modal};

/// 处理后台完成消息
pub fn update(app: &mut App, msg: BackendMessage) {
    match msg {
        BackendMessage::GroupsLoaded(Ok(groups)) => {
            app.groups.set_groups(groups);
            app.clear_status();
        }

        BackendMessage::GroupsLoaded(Err(e)) => {
            // 拉取失败不打扰用户：记录日志，保留现有列表
            if e.is_expected() {
                log::warn!("Failed to load groups: {e}");
            } else {
                log::error!("Failed to load groups: {e}");
            }
            app.groups.loading = false;
            app.clear_status();
        }

        BackendMessage::GroupCreateFinished(result) => {
            handle_create_finished(app, result);
        }
    }
}

/// 处理创建完成
fn handle_create_finished(app: &mut App, result: Result<Group, CoreError>) {
    // 表单实例已销毁（或并未在提交中）时丢弃迟到的完成消息
    if !matches!(
        app.modal.active,
        Some(Modal::AddGroup {
            submitting: true,
            ..
        })
    ) {
        log::debug!("Dropping create completion: add-group form is gone");
        return;
    }

    match result {
        Ok(group) => {
            app.modal.close();
            app.set_status(format!("Group \"{}\" created", group.name));
            app.groups.append_group(group);
        }
        Err(e) => {
            if e.is_expected() {
                log::warn!("Failed to create group: {e}");
            } else {
                log::error!("Failed to create group: {e}");
            }
            if let Some(Modal::AddGroup {
                ref mut submitting,
                ref mut error,
                ..
            }) = app.modal.active
            {
                *submitting = false;
                *error = Some(e.to_string());
            }
            app.clear_status();
        }
    }
}
