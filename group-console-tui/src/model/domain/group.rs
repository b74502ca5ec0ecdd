//! 群组数据模型
//!
//! 对应 group-console-core/src/types/group.rs。
//! TUI 版本附带展示用的格式化方法（日期、启用标记）。

use chrono::{DateTime, Utc};
use group_console_core::types::{CreateGroupRequest, Group as CoreGroup};

/// 群组
///
/// 持有此值即代表记录已由后端持久化（ID 与时间戳均已分配）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Group {
    /// 启用状态的显示文本（用于列表徽标）
    pub fn active_label(&self) -> &'static str {
        if self.is_active {
            "active"
        } else {
            "inactive"
        }
    }

    /// 创建时间的显示文本
    pub fn created_text(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }

    /// 更新时间的显示文本
    pub fn updated_text(&self) -> String {
        self.updated_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

impl From<CoreGroup> for Group {
    fn from(group: CoreGroup) -> Self {
        Self {
            id: group.id,
            name: group.name,
            is_active: group.is_active,
            created_at: group.created_at,
            updated_at: group.updated_at,
        }
    }
}

/// 群组草稿（新建表单的字段值）
///
/// 不含 ID 与时间戳，这些由后端在创建时分配。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDraft {
    pub name: String,
    pub is_active: bool,
}

impl From<GroupDraft> for CreateGroupRequest {
    fn from(draft: GroupDraft) -> Self {
        Self {
            name: draft.name,
            is_active: draft.is_active,
        }
    }
}
