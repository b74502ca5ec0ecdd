//! UI 与异步存储调用之间的桥接
//!
//! 持有 `GroupStore` 与指向主循环的消息发送端。
//! 每个方法都只是在 tokio 任务上发起一次调用，并保证
//! 无论成功失败都投递恰好一条完成消息。

use std::sync::Arc;

use group_console_core::types::CreateGroupRequest;
use group_console_core::GroupStore;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::{AppMessage, BackendMessage};
use crate::model::domain::{Group, GroupDraft};

/// 后台桥接
pub struct Backend {
    /// 群组存储（HTTP 实现，测试中为内存 mock）
    store: Arc<dyn GroupStore>,
    /// 主循环消息发送端
    tx: UnboundedSender<AppMessage>,
}

impl Backend {
    /// 创建后台桥接实例
    pub fn new(store: Arc<dyn GroupStore>, tx: UnboundedSender<AppMessage>) -> Self {
        Self { store, tx }
    }

    /// 发起一次全量拉取，完成后投递 `GroupsLoaded`
    pub fn load_groups(&self) {
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = store
                .list_all()
                .await
                .map(|groups| groups.into_iter().map(Group::from).collect());
            // 接收端已关闭说明应用在退出，丢弃结果即可
            let _ = tx.send(AppMessage::Backend(BackendMessage::GroupsLoaded(result)));
        });
    }

    /// 发起一次创建调用，完成后投递 `GroupCreateFinished`
    pub fn create_group(&self, draft: GroupDraft) {
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let request = CreateGroupRequest::from(draft);
            let result = store.create(&request).await.map(Group::from);
            let _ = tx.send(AppMessage::Backend(BackendMessage::GroupCreateFinished(
                result,
            )));
        });
    }
}
