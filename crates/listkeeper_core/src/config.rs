//! Widget configuration.
//!
//! # Invariants
//! - The default persistence mode writes on every collection change.

/// When a widget writes its collection back to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistMode {
    /// Only `Add` and `Delete` save; `Update` and `ToggleStatus` do not.
    ExplicitWrite,
    /// Any action that changes the collection saves it.
    #[default]
    ReactiveWrite,
}

impl PersistMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExplicitWrite => "explicit_write",
            Self::ReactiveWrite => "reactive_write",
        }
    }
}

/// Options applied when a widget is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidgetConfig {
    pub persist_mode: PersistMode,
}

impl WidgetConfig {
    pub fn explicit_write() -> Self {
        Self {
            persist_mode: PersistMode::ExplicitWrite,
        }
    }

    pub fn reactive_write() -> Self {
        Self {
            persist_mode: PersistMode::ReactiveWrite,
        }
    }
}
