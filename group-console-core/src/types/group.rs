//! 群组相关类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 群组记录
///
/// `id` 与两个时间戳均由后端分配，客户端不可修改。
/// 持有 `Group` 值即代表该记录已持久化；未持久化的数据只以
/// [`CreateGroupRequest`] 的形式短暂存在。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// 群组 ID（后端分配）
    pub id: i64,
    /// 群组名称（非空）
    pub name: String,
    /// 是否启用
    #[serde(rename = "isActive")]
    pub is_active: bool,
    /// 创建时间
    #[serde(rename = "createdDate")]
    #[serde(with = "crate::utils::datetime")]
    pub created_at: DateTime<Utc>,
    /// 更新时间
    #[serde(rename = "updatedDate")]
    #[serde(with = "crate::utils::datetime")]
    pub updated_at: DateTime<Utc>,
}

/// 创建群组请求
///
/// 不含 ID 与时间戳，这些字段由后端在创建时分配。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGroupRequest {
    /// 群组名称
    pub name: String,
    /// 是否启用
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_deserializes_backend_payload() {
        let json = r#"{
            "id": 7,
            "name": "Engineering",
            "isActive": true,
            "createdDate": "2024-03-01T09:30:00Z",
            "updatedDate": "2024-03-02T10:00:00+00:00"
        }"#;
        let group: Group = serde_json::from_str(json).expect("valid payload");
        assert_eq!(group.id, 7);
        assert_eq!(group.name, "Engineering");
        assert!(group.is_active);
        assert_eq!(group.created_at.to_rfc3339(), "2024-03-01T09:30:00+00:00");
    }

    #[test]
    fn create_request_uses_wire_field_names() {
        let request = CreateGroupRequest {
            name: "Ops".into(),
            is_active: false,
        };
        let json = serde_json::to_value(&request).expect("serializable");
        assert_eq!(json["name"], "Ops");
        assert_eq!(json["isActive"], false);
    }
}
