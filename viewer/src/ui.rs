//! Terminal rendering: a pure projection of the view state.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
    Frame,
};
use viewer_core::{Todo, ViewState, Viewer};

use crate::theme;

/// Main draw function. Takes only the state machine and the spinner tick,
/// so rendering stays a side-effect-free function of its inputs.
pub fn draw(frame: &mut Frame, viewer: &Viewer, tick: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Card
            Constraint::Length(3), // Refresh control
            Constraint::Length(1), // Endpoint line
        ])
        .split(frame.area());

    draw_header(frame, chunks[0]);
    draw_card(frame, viewer, tick, chunks[1]);
    draw_refresh_control(frame, viewer, chunks[2]);
    draw_endpoint(frame, viewer, chunks[3]);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Todo Fetcher", theme::title())),
        Line::from(Span::styled(
            "One record over HTTP, rendered in the terminal",
            theme::label(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// The card shows exactly one of: loading indicator, error panel, record
/// details. Mutual exclusivity falls out of matching on `ViewState`.
fn draw_card(frame: &mut Frame, viewer: &Viewer, tick: usize, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::label())
        .padding(Padding::horizontal(1));

    let lines: Vec<Line> = match viewer.state() {
        ViewState::Idle => Vec::new(),
        ViewState::Loading => vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(theme::spinner_frame(tick), theme::action()),
                Span::raw(" Loading todo..."),
            ]),
        ],
        ViewState::Error(message) => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Error occurred",
                theme::error().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(message.clone(), theme::error())),
        ],
        ViewState::Loaded(todo) => todo_lines(todo),
    };

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn todo_lines(todo: &Todo) -> Vec<Line<'_>> {
    let (icon, badge, style) = if todo.completed {
        (theme::COMPLETED_GLYPH, "✓ Completed", theme::completed())
    } else {
        (theme::PENDING_GLYPH, "○ Pending", theme::pending())
    };

    vec![
        Line::from(vec![
            Span::styled("Todo Details", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(icon, style),
        ]),
        Line::from(""),
        Line::from(Span::styled("Title", theme::label())),
        Line::from(Span::raw(todo.title.as_str())),
        Line::from(""),
        Line::from(vec![
            Span::styled("ID ", theme::label()),
            Span::raw(format!("#{}", todo.id)),
            Span::raw("    "),
            Span::styled("User ID ", theme::label()),
            Span::raw(format!("#{}", todo.user_id)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Status ", theme::label()),
            Span::styled(badge, style),
        ]),
    ]
}

/// Always rendered; label and style flip while a fetch is in flight. The
/// `r` key handler ignores presses during loading, which is the disabled
/// behavior this rendering reflects.
fn draw_refresh_control(frame: &mut Frame, viewer: &Viewer, area: Rect) {
    let (label, style) = if viewer.is_loading() {
        ("Refreshing...", theme::label())
    } else {
        ("Refresh Todo", theme::action())
    };

    let button = Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style),
        );
    frame.render_widget(button, area);
}

fn draw_endpoint(frame: &mut Frame, viewer: &Viewer, area: Rect) {
    let line = Line::from(vec![
        Span::styled("API Endpoint: ", theme::label()),
        Span::raw(viewer.endpoint_url()),
        Span::styled("  ·  r refresh  q quit", theme::label()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
