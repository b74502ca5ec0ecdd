//! 弹窗/对话框状态

/// 新建群组弹窗的字段数（名称 + 启用开关）
pub const ADD_GROUP_FIELD_COUNT: usize = 2;

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 新建群组
    AddGroup {
        /// 群组名称
        name: String,
        /// 是否启用（默认开）
        is_active: bool,
        /// 当前焦点：0=名称, 1=启用开关
        focus: usize,
        /// 是否有创建请求在途（在途期间锁定草稿）
        submitting: bool,
        /// 上次提交失败的错误信息
        error: Option<String>,
    },
    /// 帮助信息
    Help,
}

/// 弹窗状态
///
/// `active` 为 `None` 即关闭态（初始）。打开新建弹窗总是
/// 构造一份全新草稿，上一个实例的任何状态都不会带入。
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示弹窗
    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    /// 关闭弹窗（丢弃其中的草稿与错误）
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示新建群组弹窗
    pub fn show_add_group(&mut self) {
        self.show(Modal::AddGroup {
            name: String::new(),
            is_active: true,
            focus: 0,
            submitting: false,
            error: None,
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }
}
