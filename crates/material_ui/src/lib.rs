//! Material Design 3 primitive library for the component showcase.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-md-*` DOM contract consumed by the showcase CSS layers. Pages
//! should compose these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, Button, ButtonVariant, Card, CardVariant, Cluster, DialogHeader, DialogScrim,
    DialogSurface, Heading, IconButton, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding,
    NavItemLayout, NavigateIntent, NavigationBar, NavigationBarItem, NavigationRail,
    NavigationRailItem, RadioButton, RadioSize, SearchBar, Stack, Switch, Text, TextRole,
    TextTone,
};

/// Convenience imports for crates consuming the primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonVariant, Card, CardVariant, Cluster, DialogHeader, DialogScrim,
        DialogSurface, Heading, Icon, IconButton, IconName, IconSize, LayoutAlign, LayoutGap,
        LayoutJustify, LayoutPadding, NavItemLayout, NavigateIntent, NavigationBar,
        NavigationBarItem, NavigationRail, NavigationRailItem, RadioButton, RadioSize, SearchBar,
        Stack, Switch, Text, TextRole, TextTone,
    };
}
