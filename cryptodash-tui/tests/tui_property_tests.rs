use cryptodash_core::{default_menu, RailPresentation};
use cryptodash_tui::config::{ConfigError, MockConfig, ThemeConfig, TuiConfig};
use cryptodash_tui::keys::{map_key, KeyAction};
use cryptodash_tui::state::App;
use cryptodash_tui::theme::{change_color, Theme};
use cryptodash_tui::views::render_view;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use proptest::prelude::*;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::io::Write;

const FULL_CONFIG: &str = r#"
default_location = "/projects"
cell_width = 10
log_path = "logs/cryptodash.log"
log_filter = "cryptodash_tui=debug"

[theme]
name = "daylight"

[mock]
seed = 7
chart_points = 24
sparkline_points = 12
"#;

fn base_config() -> TuiConfig {
    TuiConfig {
        default_location: "/crypto".to_string(),
        cell_width: 8,
        log_path: "tmp/cryptodash.log".into(),
        log_filter: "cryptodash_tui=info".to_string(),
        theme: ThemeConfig {
            name: "synthbrute".to_string(),
        },
        mock: MockConfig {
            seed: 1,
            chart_points: 30,
            sparkline_points: 8,
        },
    }
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn render(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal.draw(|f| render_view(f, app)).expect("draw");
    terminal.backend().buffer().clone()
}

fn screen_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer.get(x, y).symbol());
        }
        out.push('\n');
    }
    out
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer.get(x, y).symbol())
        .collect()
}

#[test]
fn config_loads_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(FULL_CONFIG.as_bytes()).expect("write config");

    let config = TuiConfig::from_path(file.path()).expect("parse config");
    assert!(config.validate().is_ok());
    assert!(config.validate_against_menu(&default_menu()).is_ok());
    assert_eq!(config.default_location, "/projects");
    assert_eq!(config.cell_width, 10);
    assert_eq!(config.mock.chart_points, 24);
    assert!(!config.starts_dark());
}

#[test]
fn config_rejects_unknown_fields() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    let contents = format!("{}\nrefresh_interval_ms = 500\n", FULL_CONFIG);
    file.write_all(contents.as_bytes()).expect("write config");
    assert!(matches!(
        TuiConfig::from_path(file.path()),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn config_requires_theme_name() {
    let mut config = base_config();
    config.theme = ThemeConfig {
        name: "unknown".to_string(),
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue { field: "theme.name", .. })
    ));
}

#[test]
fn expand_only_location_is_not_a_page() {
    let mut config = base_config();
    config.default_location = "#".to_string();
    assert!(config.validate_against_menu(&default_menu()).is_err());
    config.default_location = "/apps/chat".to_string();
    assert!(config.validate_against_menu(&default_menu()).is_ok());
}

#[test]
fn wide_screen_renders_rail_column() {
    let app = App::new(base_config(), Some((160, 40)));
    assert_eq!(app.shell.rail_presentation(), RailPresentation::Column);
    let buffer = render(&app, 160, 40);
    assert!(row_text(&buffer, 0).contains("CRYPTODASH"));
    let text = screen_text(&buffer);
    assert!(text.contains("MENU"));
    assert!(text.contains("Total Invested"));
    assert!(text.contains("Logout"));
    assert!(text.contains("Unlimited Access"));
    assert!(text.contains("Upgrade"));
}

#[test]
fn short_rail_scrolls_to_cursor() {
    let mut app = App::new(base_config(), Some((160, 12)));
    assert!(!screen_text(&render(&app, 160, 12)).contains("Settings"));

    // Settings is the last of nine rows.
    for _ in 0..8 {
        app.handle_action(KeyAction::MoveDown);
    }
    let text = screen_text(&render(&app, 160, 12));
    assert!(text.contains("Settings"));
}

#[test]
fn narrow_screen_hides_rail_until_toggled() {
    let mut app = App::new(base_config(), Some((80, 40)));
    let buffer = render(&app, 80, 40);
    assert!(!screen_text(&buffer).contains("CRYPTODASH"));
    assert!(row_text(&buffer, 1).contains('≡'));

    app.handle_action(KeyAction::ToggleSidebar);
    assert_eq!(app.shell.rail_presentation(), RailPresentation::Drawer);
    let buffer = render(&app, 80, 40);
    assert!(row_text(&buffer, 0).contains("CRYPTODASH"));
}

#[test]
fn header_follows_active_page() {
    let mut app = App::new(base_config(), Some((160, 40)));
    // Projects is the third top-level row.
    app.handle_action(KeyAction::MoveDown);
    app.handle_action(KeyAction::MoveDown);
    app.handle_action(KeyAction::Activate);
    let text = screen_text(&render(&app, 160, 40));
    assert!(text.contains("Home › Projects"));
}

#[test]
fn user_menu_popup_renders_entries() {
    let mut app = App::new(base_config(), Some((160, 40)));
    app.handle_action(KeyAction::ToggleUserMenu);
    let text = screen_text(&render(&app, 160, 40));
    assert!(text.contains("Profile"));
    assert!(text.contains("Log out"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = App::new(base_config(), Some((40, 12)));
    app.handle_action(KeyAction::ToggleSidebar);
    app.handle_action(KeyAction::OpenHelp);
    render(&app, 40, 12);
}

proptest! {
    #[test]
    fn valid_mock_settings_accepted(seed in any::<u64>(), chart in 2usize..500, spark in 2usize..100) {
        let mut config = base_config();
        config.mock = MockConfig {
            seed,
            chart_points: chart,
            sparkline_points: spark,
        };
        prop_assert!(config.validate().is_ok());
    }

    #[test]
    fn degenerate_series_rejected(points in 0usize..2) {
        let mut config = base_config();
        config.mock.chart_points = points;
        prop_assert!(config.validate().is_err());
    }

    #[test]
    fn navigation_keys_consistent(use_vim in prop::bool::ANY, down in prop::bool::ANY) {
        let code = match (use_vim, down) {
            (true, true) => KeyCode::Char('j'),
            (true, false) => KeyCode::Char('k'),
            (false, true) => KeyCode::Down,
            (false, false) => KeyCode::Up,
        };
        let expected = if down { KeyAction::MoveDown } else { KeyAction::MoveUp };
        prop_assert_eq!(map_key(press(code)), Some(expected));
    }

    #[test]
    fn all_action_keys_mapped(key_char in "[qbtuicIjk? ]") {
        let ch = key_char.chars().next().unwrap_or('q');
        prop_assert!(map_key(press(KeyCode::Char(ch))).is_some(), "Key '{}' should map to an action", ch);
    }

    #[test]
    fn release_events_ignored(key_char in "[a-z]") {
        let ch = key_char.chars().next().unwrap_or('q');
        let mut event = press(KeyCode::Char(ch));
        event.kind = KeyEventKind::Release;
        prop_assert!(map_key(event).is_none());
    }

    #[test]
    fn change_color_by_sign(change in -100.0f64..100.0f64) {
        let theme = Theme::default();
        let expected = if change >= 0.0 { theme.success } else { theme.error };
        prop_assert_eq!(change_color(change, &theme), expected);
    }

    #[test]
    fn render_survives_any_size(width in 30u16..220, height in 12u16..60, drawer in prop::bool::ANY) {
        let mut app = App::new(base_config(), Some((width, height)));
        if drawer {
            app.handle_action(KeyAction::ToggleSidebar);
        }
        let buffer = render(&app, width, height);
        prop_assert_eq!(buffer.area.width, width);
    }
}
