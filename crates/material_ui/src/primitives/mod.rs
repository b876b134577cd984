//! Shared control, navigation, overlay, data-display, and layout primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod layout;
mod navigation;
mod overlays;

pub use controls::{Button, IconButton, RadioButton, SearchBar, Switch};
pub use data_display::{Badge, Card, Heading, Text};
pub use layout::{Cluster, Stack};
pub use navigation::{NavigationBar, NavigationBarItem, NavigationRail, NavigationRailItem};
pub use overlays::{DialogHeader, DialogScrim, DialogSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Material button variants.
pub enum ButtonVariant {
    /// High-emphasis filled button.
    Filled,
    /// Filled button on a shadowed surface.
    Elevated,
    /// Medium-emphasis tonal button.
    Tonal,
    /// Outlined button.
    Outlined,
    /// Low-emphasis text button.
    Text,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Filled
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Elevated => "elevated",
            Self::Tonal => "tonal",
            Self::Outlined => "outlined",
            Self::Text => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Material card variants.
pub enum CardVariant {
    /// Shadowed card.
    Elevated,
    /// Filled surface card.
    Filled,
    /// Outlined card.
    Outlined,
}

impl Default for CardVariant {
    fn default() -> Self {
        Self::Elevated
    }
}

impl CardVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Elevated => "elevated",
            Self::Filled => "filled",
            Self::Outlined => "outlined",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Radio button sizing tokens.
pub enum RadioSize {
    /// Dense radio.
    Small,
    /// Default radio.
    Medium,
    /// Large touch-target radio.
    Large,
}

impl Default for RadioSize {
    fn default() -> Self {
        Self::Medium
    }
}

impl RadioSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon/label arrangement for navigation items.
pub enum NavItemLayout {
    /// Icon stacked above the label.
    Vertical,
    /// Icon beside the label.
    Horizontal,
}

impl Default for NavItemLayout {
    fn default() -> Self {
        Self::Vertical
    }
}

impl NavItemLayout {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Direction of a keyboard move between exclusive-selection members.
pub enum NavigateIntent {
    /// Move to the following member.
    Next,
    /// Move to the preceding member.
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    Md,
    /// Large gap.
    Lg,
}

impl Default for LayoutGap {
    fn default() -> Self {
        Self::Md
    }
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout padding tokens.
pub enum LayoutPadding {
    /// No padding.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    Md,
    /// Spacious padding.
    Lg,
}

impl Default for LayoutPadding {
    fn default() -> Self {
        Self::None
    }
}

impl LayoutPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout alignment tokens.
pub enum LayoutAlign {
    /// Stretch/fill alignment.
    Stretch,
    /// Start alignment.
    Start,
    /// Center alignment.
    Center,
    /// End alignment.
    End,
}

impl Default for LayoutAlign {
    fn default() -> Self {
        Self::Stretch
    }
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout justification tokens.
pub enum LayoutJustify {
    /// Start justification.
    Start,
    /// Center justification.
    Center,
    /// Space between items.
    Between,
    /// End justification.
    End,
}

impl Default for LayoutJustify {
    fn default() -> Self {
        Self::Start
    }
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Between => "between",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text roles.
pub enum TextRole {
    /// Body text.
    Body,
    /// Label text.
    Label,
    /// Caption text.
    Caption,
    /// Title text.
    Title,
}

impl Default for TextRole {
    fn default() -> Self {
        Self::Body
    }
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Title => "title",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text tone.
pub enum TextTone {
    /// Primary text.
    Primary,
    /// Secondary text.
    Secondary,
    /// Accent text.
    Accent,
    /// Error tone.
    Error,
}

impl Default for TextTone {
    fn default() -> Self {
        Self::Primary
    }
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Error => "error",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
