//! TUI rendering for Aura using ratatui.

mod banner;
mod input;
mod theme;

pub use banner::banner_line;
pub use input::{InputPump, apply_event, handle_events, handle_key};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Tabs, Wrap},
};
use unicode_width::UnicodeWidthStr;

use aura_engine::{App, ChatTurn, LogEvent, LogLevel, Role, ScrollState, StreamState, Tab};

const APP_TITLE: &str = "Aura Chat";
const MONITOR_CAPTION: &str = "Agent telemetry and events";
const INPUT_PLACEHOLDER: &str = "Type a message";
/// Draft rows shown before the input box stops growing.
const MAX_INPUT_ROWS: u16 = 4;

/// Main draw function. Records each panel's scrollable range back into `app`.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(app.theme(), options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg).fg(palette.text));
    frame.render_widget(bg_block, frame.area());

    let input_height = match app.active_tab() {
        Tab::Chat => input_rows(app.draft()) + 2,
        Tab::Monitor => 0,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints([
            Constraint::Length(1),            // Header
            Constraint::Length(1),            // Banner
            Constraint::Length(1),            // Tabs
            Constraint::Min(3),               // Panel
            Constraint::Length(input_height), // Input
            Constraint::Length(1),            // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0], &palette, &glyphs);
    frame.render_widget(
        Paragraph::new(banner_line(
            chunks[1].width,
            app.tick_count(),
            &palette,
            &glyphs,
            options,
        )),
        chunks[1],
    );
    draw_tabs(frame, app, chunks[2], &palette);

    let tab = app.active_tab();
    let max_scroll = match tab {
        Tab::Chat => {
            let max_scroll = draw_chat(frame, app, chunks[3], &palette, &glyphs);
            draw_input(frame, app, chunks[4], &palette, &glyphs);
            max_scroll
        }
        Tab::Monitor => draw_monitor(frame, app, chunks[3], &palette, &glyphs),
    };
    app.update_scroll_max(tab, max_scroll);

    draw_status_bar(frame, app, chunks[5], &palette);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let title = Paragraph::new(Line::from(Span::styled(
        APP_TITLE,
        Style::default()
            .fg(palette.violet)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, area);

    let badge = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} {} ", glyphs.theme, app.theme().label()),
            Style::default().fg(palette.text_muted),
        ),
        Span::styled("Ctrl+T", styles::key_hint(palette)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(badge, area);
}

fn draw_tabs(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let tabs = Tabs::new(Tab::ALL.iter().map(|tab| tab.label()))
        .select(app.active_tab().index())
        .style(Style::default().fg(palette.text_muted))
        .highlight_style(styles::tab_active(palette))
        .divider("|");
    frame.render_widget(tabs, area);
}

fn panel_block<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette.bg_panel))
}

fn draw_chat(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) -> u16 {
    let conversation = app.conversation();
    let mut lines: Vec<Line> = Vec::new();

    for (index, turn) in conversation.turns().iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        push_turn(&mut lines, turn, palette, glyphs);
    }

    if conversation.is_pending() {
        let spinner = spinner_frame(app.tick_count(), app.ui_options());
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(format!("{spinner} "), Style::default().fg(palette.violet)),
            Span::styled(
                format!("Assistant is thinking{}", glyphs.ellipsis),
                Style::default()
                    .fg(palette.text_muted)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    let block = panel_block(Tab::Chat.label(), palette);
    render_scrolled(frame, area, block, lines, app.view().chat_scroll)
}

fn push_turn(lines: &mut Vec<Line<'static>>, turn: &ChatTurn, palette: &Palette, glyphs: &Glyphs) {
    let (header, alignment, body_style) = match turn.role() {
        Role::User => (
            Line::from(vec![
                Span::styled(turn.timestamp().to_string(), styles::timestamp(palette)),
                Span::raw("  "),
                Span::styled("You", styles::user_name(palette)),
                Span::styled(format!(" {}", glyphs.user), styles::user_name(palette)),
            ]),
            Alignment::Right,
            Style::default().fg(palette.text),
        ),
        Role::Assistant => (
            Line::from(vec![
                Span::styled(format!("{} ", glyphs.assistant), styles::assistant_name(palette)),
                Span::styled("Assistant", styles::assistant_name(palette)),
                Span::raw("  "),
                Span::styled(turn.timestamp().to_string(), styles::timestamp(palette)),
            ]),
            Alignment::Left,
            Style::default().fg(palette.text),
        ),
    };

    lines.push(header.alignment(alignment));
    for text in turn.content().lines() {
        lines.push(Line::from(Span::styled(text.to_string(), body_style)).alignment(alignment));
    }
}

fn draw_monitor(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) -> u16 {
    let telemetry = app.telemetry();
    let (badge, badge_color) = match telemetry.state() {
        StreamState::Streaming => (
            format!("{} {}", glyphs.streaming, StreamState::Streaming.label()),
            palette.success,
        ),
        StreamState::Paused => (
            format!("{} {}", glyphs.paused, StreamState::Paused.label()),
            palette.warn,
        ),
    };

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(
                badge,
                Style::default().fg(badge_color).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(MONITOR_CAPTION, Style::default().fg(palette.text_muted)),
        ]),
        Line::default(),
    ];

    if telemetry.events().is_empty() {
        lines.push(Line::from(Span::styled(
            "No logs yet.",
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        )));
    } else {
        for event in telemetry.events() {
            push_event(&mut lines, event, palette);
        }
    }

    let block = panel_block(Tab::Monitor.label(), palette);
    render_scrolled(frame, area, block, lines, app.view().monitor_scroll)
}

fn push_event(lines: &mut Vec<Line<'static>>, event: &LogEvent, palette: &Palette) {
    let level_color = match event.level() {
        LogLevel::Info => palette.info,
        LogLevel::Warn => palette.warn,
        LogLevel::Error => palette.error,
    };

    lines.push(Line::from(vec![
        Span::styled(
            format!("[{}]", event.level().label()),
            Style::default().fg(level_color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(event.timestamp().to_string(), styles::timestamp(palette)),
        Span::raw("  "),
        Span::styled(event.message().to_string(), Style::default().fg(palette.text)),
    ]));

    if let Some(meta) = event.meta() {
        for text in meta.to_pretty_json().lines() {
            lines.push(Line::from(Span::styled(
                format!("    {text}"),
                Style::default().fg(palette.text_muted),
            )));
        }
    }
}

/// Render wrapped lines inside `block`, anchored to the bottom unless scrolled back.
/// Returns how many lines the content can scroll.
fn render_scrolled(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    lines: Vec<Line>,
    scroll: ScrollState,
) -> u16 {
    let inner = block.inner(area);
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });

    let total_lines = u16::try_from(paragraph.line_count(inner.width)).unwrap_or(u16::MAX);
    let max_scroll = total_lines.saturating_sub(inner.height);
    let from_top = max_scroll.saturating_sub(scroll.offset_from_bottom().min(max_scroll));

    frame.render_widget(paragraph.block(block).scroll((from_top, 0)), area);
    max_scroll
}

fn input_rows(draft: &str) -> u16 {
    let rows = u16::try_from(draft.split('\n').count()).unwrap_or(u16::MAX);
    rows.clamp(1, MAX_INPUT_ROWS)
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    if area.height < 3 {
        return;
    }

    let border_color = if app.conversation().is_pending() {
        palette.border
    } else {
        palette.violet
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);

    let draft = app.draft();
    let lines: Vec<Line> = if draft.is_empty() {
        vec![Line::from(Span::styled(
            format!("{INPUT_PLACEHOLDER}{}", glyphs.ellipsis),
            Style::default().fg(palette.text_muted),
        ))]
    } else {
        draft
            .split('\n')
            .map(|text| Line::from(Span::styled(text.to_string(), Style::default().fg(palette.text))))
            .collect()
    };

    // Keep the newest draft lines visible.
    let row_count = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let skip = row_count.saturating_sub(inner.height);
    frame.render_widget(Paragraph::new(lines).block(block).scroll((skip, 0)), area);

    let last_line = draft.rsplit('\n').next().unwrap_or_default();
    let last_width = u16::try_from(last_line.width()).unwrap_or(u16::MAX);
    let cursor_x = inner
        .x
        .saturating_add(last_width)
        .min(inner.right().saturating_sub(1));
    let cursor_y = inner
        .y
        .saturating_add(row_count.saturating_sub(1).saturating_sub(skip))
        .min(inner.bottom().saturating_sub(1));
    frame.set_cursor_position((cursor_x, cursor_y));
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let hints: &[(&str, &str)] = match app.active_tab() {
        Tab::Chat => &[
            ("Enter", "send"),
            ("Alt+Enter", "newline"),
            ("Tab", "switch"),
            ("PgUp/PgDn", "scroll"),
            ("Esc", "quit"),
        ],
        Tab::Monitor => &[
            ("Space", "pause/resume"),
            ("c", "clear"),
            ("Tab", "switch"),
            ("PgUp/PgDn", "scroll"),
            ("Esc", "quit"),
        ],
    };

    let mut spans = vec![Span::raw(" ")];
    for (index, (key, action)) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" · ", styles::key_hint(palette)));
        }
        spans.push(Span::styled(*key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}"), styles::key_hint(palette)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
