//! 弹窗组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::model::{App, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::AddGroup { .. } => render_add_group(frame, modal),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染新建群组弹窗
fn render_add_group(frame: &mut Frame, modal: &Modal) {
    let Modal::AddGroup {
        name,
        is_active,
        focus,
        submitting,
        error,
    } = modal
    else {
        return;
    };

    let c = colors();

    // 高度：名称(2) + 空行 + 开关(1) + 空行 + 错误/状态(1) + 空行 + 提示(1) + 边框(2)
    let area = centered_rect(52, 11, frame.area());

    // 清除背景
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" New Group ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.highlight))
        .style(Style::default().bg(c.bg));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);
    let mut lines = Vec::new();

    // === 名称 ===
    let name_focused = *focus == 0;
    lines.push(Line::from(Span::styled(
        "Name (required)",
        Style::default().fg(c.muted),
    )));

    let name_display = if name_focused && !submitting {
        format!("  {name}▎")
    } else {
        format!("  {name}")
    };
    let name_style = if name_focused {
        Style::default().fg(c.highlight)
    } else {
        Style::default().fg(c.fg)
    };
    lines.push(Line::styled(name_display, name_style));
    lines.push(Line::from(""));

    // === 启用开关 ===
    let active_focused = *focus == 1;
    let checkbox = if *is_active { "[x]" } else { "[ ]" };
    let active_style = if active_focused {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    lines.push(Line::from(vec![
        Span::styled(format!("  {checkbox} Active"), active_style),
        if active_focused {
            Span::styled("  (Space to toggle)", Style::default().fg(c.muted))
        } else {
            Span::raw("")
        },
    ]));
    lines.push(Line::from(""));

    // === 错误 / 提交状态 ===
    if let Some(err) = error {
        lines.push(Line::styled(
            format!("  ⚠ {err}"),
            Style::default().fg(c.error),
        ));
    } else if *submitting {
        lines.push(Line::styled(
            "  Submitting...",
            Style::default().fg(c.warning),
        ));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(""));

    // === 操作提示 ===
    let mut hints = vec![
        Span::styled("  Tab", Style::default().fg(c.selected_fg)),
        Span::styled(" Next | ", Style::default().fg(c.muted)),
        Span::styled("Enter", Style::default().fg(c.selected_fg)),
        Span::styled(" Submit | ", Style::default().fg(c.muted)),
        Span::styled("Esc", Style::default().fg(c.selected_fg)),
        Span::styled(" Cancel", Style::default().fg(c.muted)),
    ];
    if error.is_some() {
        hints.push(Span::styled(" | ", Style::default().fg(c.muted)));
        hints.push(Span::styled("Del", Style::default().fg(c.selected_fg)));
        hints.push(Span::styled(" Dismiss", Style::default().fg(c.muted)));
    }
    lines.push(Line::from(hints));

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(44, 12, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.highlight))
        .style(Style::default().bg(c.bg));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let entries = [
        ("↑↓ / jk", "Select group"),
        ("Alt+a", "Add group"),
        ("Alt+r", "Refresh list"),
        ("Alt+h / ?", "Show this help"),
        ("q / Alt+q", "Quit"),
        ("Esc", "Close dialog"),
    ];

    let mut lines = vec![Line::from("")];
    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<12}"), Style::default().fg(c.selected_fg)),
            Span::styled(desc, Style::default().fg(c.fg)),
        ]));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}
