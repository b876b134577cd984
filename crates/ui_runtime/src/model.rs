use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Delay between a dialog entering its closing phase and its overlay teardown,
/// matching the fade-out animation length.
pub const DIALOG_TEARDOWN_MS: u32 = 200;
/// Default dialog width.
pub const DEFAULT_DIALOG_WIDTH: &str = "90%";
/// Default dialog maximum width.
pub const DEFAULT_DIALOG_MAX_WIDTH: &str = "500px";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Identifier for one opened dialog instance.
pub struct DialogId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Lifecycle phase of a dialog. Phases only ever advance.
pub enum DialogPhase {
    /// Overlay attached and interactive.
    Open,
    /// Close requested; overlay fading out until teardown completes.
    Closing,
    /// Overlay released; the handle's result future has resolved.
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Presentation configuration for a dialog.
pub struct DialogConfig {
    /// Title rendered in the dialog header. Empty when `None`.
    pub title: Option<String>,
    /// CSS width of the dialog surface.
    pub width: String,
    /// CSS maximum width of the dialog surface.
    pub max_width: String,
    /// Whether a pointer event on the backdrop dismisses the dialog.
    pub close_on_backdrop: bool,
    /// Whether the header renders a close button.
    pub show_close_button: bool,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            title: None,
            width: DEFAULT_DIALOG_WIDTH.to_string(),
            max_width: DEFAULT_DIALOG_MAX_WIDTH.to_string(),
            close_on_backdrop: true,
            show_close_button: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Request to open a dialog.
///
/// `content` is an opaque payload the broker never interprets; the hosting
/// layer maps it to a rendered view inside the dialog's content slot.
pub struct OpenDialogRequest {
    /// Presentation configuration.
    pub config: DialogConfig,
    /// Opaque content payload for the hosting renderer.
    pub content: Value,
}

impl OpenDialogRequest {
    /// Builds a request with default configuration around a content payload.
    pub fn new(content: Value) -> Self {
        Self {
            config: DialogConfig::default(),
            content,
        }
    }

    /// Sets the dialog title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    /// Overrides the surface width constraints.
    pub fn with_width(mut self, width: impl Into<String>, max_width: impl Into<String>) -> Self {
        self.config.width = width.into();
        self.config.max_width = max_width.into();
        self
    }

    /// Controls whether backdrop clicks dismiss the dialog.
    pub fn with_close_on_backdrop(mut self, close_on_backdrop: bool) -> Self {
        self.config.close_on_backdrop = close_on_backdrop;
        self
    }

    /// Controls whether the header renders a close button.
    pub fn with_show_close_button(mut self, show_close_button: bool) -> Self {
        self.config.show_close_button = show_close_button;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// In-memory record of one dialog instance.
pub struct DialogRecord {
    /// Dialog identifier.
    pub id: DialogId,
    /// Presentation configuration.
    pub config: DialogConfig,
    /// Opaque content payload supplied at open time.
    pub content: Value,
    /// Current lifecycle phase.
    pub phase: DialogPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Lifecycle notification emitted as a dialog advances through its phases.
///
/// Hosting applications subscribe to these for focus management or analytics.
pub enum DialogLifecycleEvent {
    /// The dialog's overlay was attached.
    Opened(DialogId),
    /// Close was requested; teardown is scheduled.
    Closing(DialogId),
    /// The overlay was released and the result future resolved.
    Closed(DialogId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Identifier for one registered exclusive-selection group member.
pub struct MemberId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One exclusive-selection control registered with the coordinator.
pub struct MemberRecord {
    /// Member identifier.
    pub id: MemberId,
    /// Group identifier; `None` for ungrouped members, which behave as
    /// singleton groups of size one.
    pub group: Option<String>,
    /// Value token carried by the member.
    pub value: String,
    /// Whether this member holds the group's selection.
    pub selected: bool,
    /// Whether the member is excluded from interaction. Disabling does not
    /// clear a previously held selection.
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Notification emitted when a group's selection changes.
pub struct SelectionChanged {
    /// Group identifier, `None` for ungrouped members.
    pub group: Option<String>,
    /// Newly selected value.
    pub value: String,
    /// Previously selected value in the group, if any.
    pub previous: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Color scheme preference persisted by the host.
pub enum ThemeMode {
    /// Light scheme.
    Light,
    /// Dark scheme.
    Dark,
}

impl ThemeMode {
    /// Stable string token used for persistence and the document attribute.
    pub fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a persisted token, returning `None` for unknown values.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Returns the opposite scheme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Light
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Shell-level preferences reflected onto the document and persisted per key.
pub struct ShellPrefs {
    /// Active color scheme.
    pub theme: ThemeMode,
    /// Whether the document renders right-to-left.
    pub rtl: bool,
}
