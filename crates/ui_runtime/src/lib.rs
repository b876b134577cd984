//! Shell runtime for the component kit: a single-slot dialog broker, an
//! exclusive-selection group coordinator, and preference persistence wired
//! into Leptos through an ordered side-effect queue.

mod components;
mod dialog;
mod effect_executor;
mod host;
mod model;
mod persistence;
mod runtime_context;
mod selection;

pub use components::{dialog_surface_dom_id, DialogHost};
pub use dialog::{AfterClosed, DialogError, DialogHandle, DialogManager};
pub use host::UiHostContext;
pub use model::{
    DialogConfig, DialogId, DialogLifecycleEvent, DialogPhase, DialogRecord, MemberId,
    MemberRecord, OpenDialogRequest, SelectionChanged, ShellPrefs, ThemeMode,
    DEFAULT_DIALOG_MAX_WIDTH, DEFAULT_DIALOG_WIDTH, DIALOG_TEARDOWN_MS,
};
pub use persistence::{load_shell_prefs, RTL_PREF_KEY, THEME_PREF_KEY};
pub use runtime_context::{use_ui_runtime, UiEffect, UiProvider, UiRuntimeContext};
pub use selection::{SelectionCoordinator, SelectionError};
