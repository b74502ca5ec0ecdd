//! 群组列表状态

use crate::model::domain::Group;

/// 群组列表状态
///
/// 列表顺序即显示顺序：整体替换只发生在拉取成功时，
/// 新建成功的记录只会追加到末尾，本模块绝不重排或过滤。
#[derive(Debug, Default)]
pub struct GroupsState {
    /// 群组列表
    pub groups: Vec<Group>,
    /// 当前选中的索引
    pub selected: usize,
    /// 是否正在加载（本组件发起的拉取在途时为 true）
    pub loading: bool,
}

impl GroupsState {
    /// 创建新的群组状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.groups.is_empty() && self.selected < self.groups.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.groups.is_empty() {
            self.selected = self.groups.len() - 1;
        }
    }

    /// 设置群组列表（拉取成功）
    pub fn set_groups(&mut self, groups: Vec<Group>) {
        self.groups = groups;
        self.selected = 0;
        self.loading = false;
    }

    /// 追加一条新建成功的群组
    ///
    /// 不按 ID 去重：同一 ID 到达两次就显示两行。
    pub fn append_group(&mut self, group: Group) {
        self.groups.push(group);
    }
}
