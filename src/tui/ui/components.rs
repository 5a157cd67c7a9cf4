//! UI components for the TUI interface
//!
//! This module contains individual UI components like header, footer,
//! schedule list, and info panels.

use super::layout::create_info_panel_layout;
use crate::schedule::RunPosition;
use crate::tui::app::AppState;
use crate::utils::formatting::{format_clock_span, format_item_row};
use crate::utils::time::format_timestamp;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};

/// Draws the header with rundown summary and session id
pub fn draw_header(f: &mut Frame, area: Rect, state: &AppState) {
    let header_text = format!(
        "rundown - {} items, planned {} - session {}",
        state.tracker.len(),
        format_timestamp(state.tracker.total_length()),
        state.session.id
    );

    let header = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Broadcast Rundown"),
        )
        .alignment(Alignment::Center);

    f.render_widget(header, area);
}

/// Draws the schedule list panel
pub fn draw_schedule_list(f: &mut Frame, area: Rect, state: &AppState) {
    let current_index = state.position.index();

    let rows: Vec<ListItem> = state
        .tracker
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if Some(i) == current_index {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let prefix = if Some(i) == current_index {
                "▶ "
            } else {
                "  "
            };

            let row = format_item_row(i + 1, &item.name, &item.length_label);
            ListItem::new(format!("{prefix}{row}")).style(style)
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_item));

    let list = List::new(rows)
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Schedule ({}/{})",
            state.selected_item + 1,
            state.tracker.len().max(1)
        )))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("► ");

    f.render_stateful_widget(list, area, &mut list_state);
}

/// Draws the info panel with the current item and progress
pub fn draw_info_panel(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = create_info_panel_layout(area);

    // Current item info
    draw_current_item_info(f, chunks[0], state);

    // Item progress gauge
    draw_item_gauge(f, chunks[1], state);

    // Rundown progress gauge
    draw_rundown_gauge(f, chunks[2], state);

    // Status messages
    draw_status_messages(f, chunks[3], state);
}

/// Draws current item information
pub fn draw_current_item_info(f: &mut Frame, area: Rect, state: &AppState) {
    let clock_state = if state.clock.is_running() {
        Span::styled("RUNNING", Style::default().fg(Color::Green))
    } else if state.clock.elapsed() > 0 {
        Span::styled("PAUSED", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("STOPPED", Style::default().fg(Color::Red))
    };

    let mut info = vec![Line::from(vec![
        Span::styled("Clock: ", Style::default().add_modifier(Modifier::BOLD)),
        clock_state,
        Span::raw(format!("  {}", format_timestamp(state.clock.elapsed()))),
    ])];

    match state.position {
        RunPosition::Inside {
            index,
            item_elapsed,
        } => {
            let name = state
                .tracker
                .get(index)
                .map(|item| item.name.as_str())
                .unwrap_or("Unknown");
            let next_name = state
                .tracker
                .get(index + 1)
                .map(|item| item.name.as_str())
                .unwrap_or("- end of rundown -");

            info.push(Line::from(""));
            info.push(Line::from(vec![
                Span::styled("On air: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(name, Style::default().fg(Color::Green)),
            ]));
            info.push(Line::from(vec![
                Span::styled("Elapsed: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(state.tracker.elapsed_label(item_elapsed)),
            ]));
            info.push(Line::from(vec![
                Span::styled("Remaining: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(state.tracker.remaining_label(index, item_elapsed)),
            ]));
            info.push(Line::from(""));
            info.push(Line::from(vec![
                Span::styled("Next: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(next_name),
            ]));
        }
        RunPosition::Overrun { past_end } => {
            info.push(Line::from(""));
            info.push(Line::from(vec![
                Span::styled("On air: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled("- end of rundown -", Style::default().fg(Color::Red)),
            ]));
            info.push(Line::from(vec![
                Span::styled("Over by: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("+{}", format_timestamp(past_end)),
                    Style::default().fg(Color::Red),
                ),
            ]));
        }
    }

    let info_widget = Paragraph::new(info)
        .block(Block::default().borders(Borders::ALL).title("Current Item"))
        .wrap(Wrap { trim: true });

    f.render_widget(info_widget, area);
}

/// Draws the progress gauge of the current item
pub fn draw_item_gauge(f: &mut Frame, area: Rect, state: &AppState) {
    let (progress, label) = match state.position {
        RunPosition::Inside {
            index,
            item_elapsed,
        } => match state.tracker.get(index) {
            Some(item) if item.length > 0 => {
                let progress = (item_elapsed * 100 / item.length).clamp(0, 100) as u16;
                let label = format_clock_span(
                    &format_timestamp(item_elapsed),
                    &format_timestamp(item.length),
                );
                (progress, label)
            }
            _ => (0, "-- / --".to_string()),
        },
        RunPosition::Overrun { .. } => (100, "-- / --".to_string()),
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Item"))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress)
        .label(label);

    f.render_widget(gauge, area);
}

/// Draws the progress gauge of the whole rundown
pub fn draw_rundown_gauge(f: &mut Frame, area: Rect, state: &AppState) {
    let elapsed = state.clock.elapsed();
    let total = state.tracker.total_length();

    let progress = if total > 0 {
        (elapsed * 100 / total).clamp(0, 100) as u16
    } else {
        0
    };
    let label = format_clock_span(&format_timestamp(elapsed), &format_timestamp(total));

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Rundown"))
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent(progress)
        .label(label);

    f.render_widget(gauge, area);
}

/// Draws status and error messages
pub fn draw_status_messages(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![Line::from(vec![
        Span::styled("Status: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(&state.status_message),
    ])];

    if let Some(ref error_msg) = state.error_message {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(error_msg, Style::default().fg(Color::Red)),
        ]));
    }

    let status_widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .wrap(Wrap { trim: true });

    f.render_widget(status_widget, area);
}

/// Draws the footer with keyboard shortcuts
pub fn draw_footer(f: &mut Frame, area: Rect, _state: &AppState) {
    let footer_text = "Q/ESC: Quit | SPACE/P: Start/Pause | R: Reset | ↑/↓: Navigate | ENTER: Jump | H: Help | I: Session";

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(footer, area);
}
