#![allow(clippy::unwrap_used, clippy::expect_used)]
//! 测试辅助模块
//!
//! 提供内存版 `GroupStore` mock 和便捷的测试工厂方法。

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use group_console_core::error::{CoreError, CoreResult};
use group_console_core::types::{CreateGroupRequest, Group};
use group_console_core::GroupStore;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::sync::RwLock;

use crate::backend::Backend;
use crate::message::AppMessage;

// ===== MockGroupStore =====

/// 内存版群组存储
pub struct MockGroupStore {
    groups: RwLock<Vec<Group>>,
    /// 如果 Some，`list_all` 返回此错误
    list_error: RwLock<Option<CoreError>>,
    /// 如果 Some，`create` 返回此错误
    create_error: RwLock<Option<CoreError>>,
    create_calls: AtomicUsize,
    last_request: RwLock<Option<CreateGroupRequest>>,
    next_id: AtomicI64,
}

impl Default for MockGroupStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGroupStore {
    pub fn new() -> Self {
        Self {
            groups: RwLock::new(Vec::new()),
            list_error: RwLock::new(None),
            create_error: RwLock::new(None),
            create_calls: AtomicUsize::new(0),
            last_request: RwLock::new(None),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn with_groups(self, groups: Vec<Group>) -> Self {
        let max_id = groups.iter().map(|g| g.id).max().unwrap_or(0);
        self.next_id.store(max_id + 1, Ordering::SeqCst);
        *self.groups.try_write().unwrap() = groups;
        self
    }

    pub fn with_list_error(self, err: CoreError) -> Self {
        *self.list_error.try_write().unwrap() = Some(err);
        self
    }

    pub fn with_create_error(self, err: CoreError) -> Self {
        *self.create_error.try_write().unwrap() = Some(err);
        self
    }

    /// 后续 `create` 调用改为返回指定结果（None = 成功）
    pub async fn set_create_error(&self, err: Option<CoreError>) {
        *self.create_error.write().await = err;
    }

    /// 已收到的 `create` 调用次数
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// 最近一次 `create` 收到的请求体
    pub async fn last_request(&self) -> Option<CreateGroupRequest> {
        self.last_request.read().await.clone()
    }
}

#[async_trait]
impl GroupStore for MockGroupStore {
    async fn list_all(&self) -> CoreResult<Vec<Group>> {
        if let Some(err) = self.list_error.read().await.clone() {
            return Err(err);
        }
        Ok(self.groups.read().await.clone())
    }

    async fn create(&self, request: &CreateGroupRequest) -> CoreResult<Group> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.write().await = Some(request.clone());

        if let Some(err) = self.create_error.read().await.clone() {
            return Err(err);
        }

        let now = Utc::now();
        let group = Group {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: request.name.clone(),
            is_active: request.is_active,
            created_at: now,
            updated_at: now,
        };
        self.groups.write().await.push(group.clone());
        Ok(group)
    }
}

// ===== 工厂方法 =====

/// 构造一条已持久化的群组记录
pub fn make_group(id: i64, name: &str) -> Group {
    let now = Utc::now();
    Group {
        id,
        name: name.to_string(),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

/// 组装带 mock 存储的 Backend 以及完成消息接收端
pub fn backend_with(store: Arc<MockGroupStore>) -> (Backend, UnboundedReceiver<AppMessage>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Backend::new(store, tx), rx)
}
