//! 内容面板更新逻辑

use crate::message::ContentMessage;
use crate::model::App;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => {
            app.groups.select_previous();
        }
        ContentMessage::SelectNext => {
            app.groups.select_next();
        }
        ContentMessage::SelectFirst => {
            app.groups.select_first();
        }
        ContentMessage::SelectLast => {
            app.groups.select_last();
        }

        // ========== CRUD 操作 ==========
        ContentMessage::Add => {
            handle_add(app);
        }
    }
}

fn handle_add(app: &mut App) {
    // 已打开时不重复打开（不覆盖进行中的草稿）
    if app.modal.is_open() {
        return;
    }
    app.modal.show_add_group();
    app.set_status("Adding new group...");
}
