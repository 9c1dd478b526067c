//! Application state and input handling.

use crate::config::TuiConfig;
use crate::content::DashboardContent;
use crate::keys::KeyAction;
use crate::nav::PageNavigator;
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::Theme;
use crate::views::layout::{contains, shell_areas, MENU_BUTTON_WIDTH};
use crate::views::rail::{line_at, rail_lines, rail_offset, RailLine};
use cryptodash_core::{
    default_menu, Activation, DashboardShell, NavSection, RailPresentation, ShellEffect,
    ShellMode, ShellSignal,
};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

pub const USER_MENU_ITEMS: [&str; 3] = ["Profile", "Settings", "Log out"];
/// Notifications kept for the footer.
pub const MAX_NOTIFICATIONS: usize = 50;

#[derive(Debug, Clone)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct TopBarState {
    /// Selected entry while the user menu is open.
    pub user_menu: Option<usize>,
}

impl TopBarState {
    pub fn user_menu_open(&self) -> bool {
        self.user_menu.is_some()
    }
}

pub struct App {
    pub config: TuiConfig,
    pub theme: Theme,
    pub shell: DashboardShell,
    pub navigator: PageNavigator,
    pub content: DashboardContent,
    pub top_bar: TopBarState,
    pub notifications: Vec<Notification>,
    pub modal: Option<Modal>,
    /// Last known terminal size, for mouse hit testing.
    pub screen: Rect,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: TuiConfig, screen: Option<(u16, u16)>) -> Self {
        Self::with_menu(config, default_menu(), screen)
    }

    pub fn with_menu(config: TuiConfig, menu: Vec<NavSection>, screen: Option<(u16, u16)>) -> Self {
        let initial_width = screen.map(|(columns, _)| logical_width(columns, config.cell_width));
        let shell = DashboardShell::new(menu, &config.default_location, initial_width);
        let (columns, rows) = screen.unwrap_or((0, 0));
        Self {
            theme: Theme::for_mode(config.starts_dark()),
            navigator: PageNavigator::new(config.default_location.clone()),
            content: DashboardContent::new(&config.mock),
            shell,
            config,
            top_bar: TopBarState::default(),
            notifications: Vec::new(),
            modal: None,
            screen: Rect::new(0, 0, columns, rows),
            should_quit: false,
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
        if self.notifications.len() > MAX_NOTIFICATIONS {
            let excess = self.notifications.len() - MAX_NOTIFICATIONS;
            self.notifications.drain(..excess);
        }
    }

    pub fn handle_action(&mut self, action: KeyAction) {
        if action == KeyAction::Quit {
            self.should_quit = true;
            return;
        }
        if self.modal.is_some() {
            if matches!(action, KeyAction::Cancel | KeyAction::Activate | KeyAction::OpenHelp) {
                self.modal = None;
            }
            return;
        }
        if let Some(selected) = self.top_bar.user_menu {
            self.handle_user_menu(action, selected);
            return;
        }
        match action {
            KeyAction::MoveUp => self.signal(ShellSignal::SelectPrevious),
            KeyAction::MoveDown => self.signal(ShellSignal::SelectNext),
            KeyAction::Activate => self.signal(ShellSignal::ActivateSelected),
            KeyAction::ToggleSidebar => self.signal(ShellSignal::ToggleDrawer),
            KeyAction::Cancel => self.signal(ShellSignal::DismissDrawer),
            KeyAction::ToggleTheme => self.toggle_theme(),
            KeyAction::ToggleUserMenu => self.top_bar.user_menu = Some(0),
            KeyAction::NextInterval => self.content.next_interval(),
            KeyAction::PrevInterval => self.content.previous_interval(),
            KeyAction::NextCurrency => self.content.next_currency(),
            KeyAction::OpenHelp => {
                self.modal = Some(Modal {
                    title: "Keybindings".to_string(),
                    message: "j/k or arrows move • Enter activates • b toggles the sidebar • \
                              Esc closes the drawer • i/I chart interval • c currency • \
                              t theme • u user menu • q quit"
                        .to_string(),
                });
            }
            KeyAction::Quit => {}
        }
    }

    pub fn handle_resize(&mut self, columns: u16, rows: u16) {
        self.screen = Rect::new(0, 0, columns, rows);
        self.signal(ShellSignal::Resize(logical_width(columns, self.config.cell_width)));
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        // Open popups swallow the click and close.
        if self.modal.take().is_some() {
            return;
        }
        if self.top_bar.user_menu.take().is_some() {
            return;
        }
        let (column, row) = (event.column, event.row);
        let areas = shell_areas(self.screen, self.shell.rail_presentation());

        if let Some(rail) = areas.rail {
            if contains(rail, column, row) {
                let lines = rail_lines(&self.shell);
                let offset = rail_offset(rail, &lines, self.shell.selected_row());
                match line_at(rail, &lines, offset, row) {
                    Some(RailLine::Row(index)) => self.signal(ShellSignal::ActivateRow(index)),
                    Some(RailLine::Logout) => self.logout(),
                    Some(RailLine::Upgrade) => self.upgrade(),
                    _ => {}
                }
                return;
            }
        }
        if self.shell.rail_presentation() == RailPresentation::Drawer {
            // Anything outside the drawer is backdrop.
            self.signal(ShellSignal::DismissDrawer);
            return;
        }
        let menu_button = Rect {
            width: MENU_BUTTON_WIDTH.min(areas.top_bar.width),
            ..areas.top_bar
        };
        if self.shell.mode() == ShellMode::Overlay && contains(menu_button, column, row) {
            self.signal(ShellSignal::ToggleDrawer);
        }
    }

    /// Releases the viewport so late resize events are ignored.
    pub fn shutdown(&mut self) {
        self.shell.detach();
        tracing::info!(navigations = self.navigator.navigations(), "dashboard shell detached");
    }

    fn signal(&mut self, signal: ShellSignal) {
        match self.shell.handle(signal, &mut self.navigator) {
            ShellEffect::Activated(Activation::Navigated { target }) => {
                self.notify(NotificationLevel::Info, format!("Navigating to {}", target));
            }
            ShellEffect::ModeChanged(transition) => {
                tracing::info!(from = ?transition.from, to = ?transition.to, "layout switched");
            }
            ShellEffect::Activated(Activation::Toggled { .. }) | ShellEffect::None => {}
        }
    }

    fn handle_user_menu(&mut self, action: KeyAction, selected: usize) {
        let count = USER_MENU_ITEMS.len();
        match action {
            KeyAction::MoveDown => self.top_bar.user_menu = Some((selected + 1) % count),
            KeyAction::MoveUp => {
                self.top_bar.user_menu = Some(if selected == 0 { count - 1 } else { selected - 1 })
            }
            KeyAction::Activate => {
                self.top_bar.user_menu = None;
                match USER_MENU_ITEMS[selected] {
                    "Log out" => self.logout(),
                    item => {
                        tracing::info!(item, "user menu entry selected");
                        self.notify(NotificationLevel::Info, format!("{} opened", item));
                    }
                }
            }
            KeyAction::Cancel | KeyAction::ToggleUserMenu => self.top_bar.user_menu = None,
            _ => {}
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = Theme::for_mode(!self.theme.is_dark());
        tracing::debug!(theme = self.theme.name, "theme switched");
    }

    fn logout(&mut self) {
        tracing::info!("logout requested");
        self.notify(NotificationLevel::Warning, "Logout is not available in this demo");
    }

    fn upgrade(&mut self) {
        tracing::info!("upgrade requested");
        self.notify(NotificationLevel::Info, "Plan upgrades are not available in this demo");
    }
}

/// Terminal columns to logical width units.
pub fn logical_width(columns: u16, cell_width: u32) -> u32 {
    u32::from(columns).saturating_mul(cell_width)
}
