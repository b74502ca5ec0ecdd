//! 群组列表页面视图

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
};

use crate::model::App;
use crate::model::domain::Group;
use crate::view::theme::{Styles, colors};

/// 渲染群组列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.groups.groups.is_empty() {
        render_empty(app, frame, area);
    } else {
        render_list(app, frame, area);
    }
}

/// 渲染空状态
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let hint = if app.groups.loading {
        "Loading groups..."
    } else {
        "No groups yet"
    };

    let content = vec![
        Line::from(""),
        Line::styled(format!("  {hint}"), Style::default().fg(c.muted)),
        Line::from(""),
        Line::styled("  Alt+a: Add Group", Style::default().fg(c.border)),
    ];

    let paragraph = Paragraph::new(content);
    frame.render_widget(paragraph, area);
}

/// 渲染群组列表（表头 + 行）
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let rows_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 表头
            Constraint::Min(1),    // 列表
        ])
        .split(area);

    render_header(frame, rows_layout[0]);

    let items: Vec<ListItem> = app
        .groups
        .groups
        .iter()
        .enumerate()
        .map(|(i, group)| render_row(group, i == app.groups.selected))
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.groups.selected));

    frame.render_stateful_widget(list, rows_layout[1], &mut state);
}

/// 渲染表头
fn render_header(frame: &mut Frame, area: Rect) {
    let header = format!(
        "  {:<6} {:<24} {:<10} {:<18} {:<18}",
        "ID", "NAME", "ACTIVE", "CREATED", "UPDATED"
    );
    let paragraph = Paragraph::new(Line::styled(header, Styles::title()));
    frame.render_widget(paragraph, area);
}

/// 渲染单行群组
fn render_row(group: &Group, is_selected: bool) -> ListItem<'static> {
    let c = colors();

    let row_style = if is_selected {
        Styles::selected()
    } else {
        Style::default().fg(c.fg)
    };

    let badge_style = if is_selected {
        Styles::selected()
    } else if group.is_active {
        Style::default().fg(c.success)
    } else {
        Style::default().fg(c.muted)
    };

    let line = Line::from(vec![
        Span::styled(
            format!("  {:<6} {:<24.24}", group.id, group.name),
            row_style,
        ),
        Span::styled(format!(" {:<10}", group.active_label()), badge_style),
        Span::styled(
            format!(" {:<18} {:<18}", group.created_text(), group.updated_text()),
            row_style,
        ),
    ]);

    ListItem::new(line)
}
