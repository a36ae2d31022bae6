//! Console layout context
//!
//! Created once at start-up and shared by reference for the lifetime of the
//! console. State only changes through [`ConsoleContext::update`]; observers
//! hold a `watch` receiver and see the latest layout.

use std::fmt;
use tokio::sync::watch;

pub const DEFAULT_SIDEBAR_WIDTH: u16 = 240;
pub const MIN_SIDEBAR_WIDTH: u16 = 72;
pub const MAX_SIDEBAR_WIDTH: u16 = 360;

/// Console screens, one per managed entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Menu,
    Stock,
    HealthAlerts,
    Promotions,
    Staff,
    Reservations,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Menu => "Menu",
            Self::Stock => "Stock",
            Self::HealthAlerts => "Health alerts",
            Self::Promotions => "Promotions",
            Self::Staff => "Staff",
            Self::Reservations => "Reservations",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleLayout {
    pub sidebar_width: u16,
    pub screen: Screen,
}

impl Default for ConsoleLayout {
    fn default() -> Self {
        Self {
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            screen: Screen::default(),
        }
    }
}

/// A single layout mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutChange {
    /// Clamped to `[MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH]`
    SidebarWidth(u16),
    Navigate(Screen),
}

#[derive(Debug)]
pub struct ConsoleContext {
    tx: watch::Sender<ConsoleLayout>,
}

impl ConsoleContext {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(ConsoleLayout::default());
        Self { tx }
    }

    pub fn layout(&self) -> ConsoleLayout {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<ConsoleLayout> {
        self.tx.subscribe()
    }

    /// Apply a change; subscribers are only woken when the layout differs
    pub fn update(&self, change: LayoutChange) -> ConsoleLayout {
        self.tx.send_if_modified(|layout| {
            let next = match change {
                LayoutChange::SidebarWidth(width) => ConsoleLayout {
                    sidebar_width: width.clamp(MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH),
                    ..*layout
                },
                LayoutChange::Navigate(screen) => ConsoleLayout { screen, ..*layout },
            };
            if next == *layout {
                return false;
            }
            tracing::debug!(?change, "Console layout changed");
            *layout = next;
            true
        });
        self.layout()
    }
}

impl Default for ConsoleContext {
    fn default() -> Self {
        Self::new()
    }
}
