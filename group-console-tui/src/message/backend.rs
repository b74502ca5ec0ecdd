//! 后台完成消息
//!
//! Backend 层的异步调用结束后，把结果包装成消息投回主循环。
//! 每个在途请求恰好产生一条完成消息，成功或失败。

use group_console_core::CoreError;

use crate::model::domain::Group;

/// 后台完成消息
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// 群组列表拉取完成
    GroupsLoaded(Result<Vec<Group>, CoreError>),

    /// 群组创建完成
    GroupCreateFinished(Result<Group, CoreError>),
}
