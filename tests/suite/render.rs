//! End-to-end frame rendering through the public TUI API

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use aura_engine::{App, DEFAULT_REPLY_DELAY, DEFAULT_TICK_INTERVAL, Tab, Theme};
use aura_tui::{apply_event, draw};

use crate::common::{FIXED_TIME, app, elapse};

fn screen(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[tokio::test(start_paused = true)]
async fn typed_message_gets_rendered_reply() {
    let mut app = app();
    for c in "ping".chars() {
        apply_event(&mut app, key(KeyCode::Char(c)));
    }
    apply_event(&mut app, key(KeyCode::Enter));

    let pending = screen(&mut app);
    assert!(pending.contains("ping"));
    assert!(pending.contains("Assistant is thinking"));

    elapse(DEFAULT_REPLY_DELAY).await;
    app.tick();

    let done = screen(&mut app);
    assert!(done.contains("You said: \"ping\""));
    assert!(done.contains("Connect your backend when ready."));
    assert!(done.contains(FIXED_TIME));
    assert!(!done.contains("Assistant is thinking"));
}

#[tokio::test(start_paused = true)]
async fn monitor_tab_follows_stream_controls() {
    let mut app = app();
    apply_event(&mut app, key(KeyCode::Tab));
    assert_eq!(app.active_tab(), Tab::Monitor);

    let initial = screen(&mut app);
    assert!(initial.contains("Ambient Agent Monitoring"));
    assert!(initial.contains("Streaming"));
    assert!(initial.contains("Agent telemetry and events"));
    assert!(initial.contains("Agent initialized"));

    elapse(DEFAULT_TICK_INTERVAL).await;
    app.tick();
    assert_eq!(app.telemetry().events().len(), 3);

    apply_event(&mut app, key(KeyCode::Char('c')));
    apply_event(&mut app, key(KeyCode::Char(' ')));
    let cleared = screen(&mut app);
    assert!(cleared.contains("Paused"));
    assert!(cleared.contains("No logs yet."));
}

#[tokio::test(start_paused = true)]
async fn theme_badge_tracks_toggle() {
    let mut app = app();
    assert!(screen(&mut app).contains("Light"));

    apply_event(
        &mut app,
        Event::Key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL)),
    );
    assert_eq!(app.theme(), Theme::Dark);
    assert!(screen(&mut app).contains("Dark"));
}
