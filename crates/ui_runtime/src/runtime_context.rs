//! Runtime provider and context wiring for the component kit.
//!
//! This module owns the long-lived dialog broker and selection coordinator
//! signals, the runtime effect queue, and the host bootstrap wiring. UI
//! composition stays in [`crate::components`].

use leptos::*;
use material_ui::NavigateIntent;
use serde_json::Value;

use crate::{
    dialog::{DialogError, DialogHandle, DialogManager},
    effect_executor,
    host::UiHostContext,
    model::{
        DialogId, DialogLifecycleEvent, MemberId, OpenDialogRequest, SelectionChanged, ShellPrefs,
        ThemeMode,
    },
    selection::{SelectionCoordinator, SelectionError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by runtime operations and executed by the host.
pub enum UiEffect {
    /// Persist the current theme token.
    PersistTheme,
    /// Persist the current RTL flag.
    PersistDirection,
    /// Reflect the current theme onto the document root attribute.
    ApplyDocumentTheme,
    /// Reflect the current text direction onto the document root.
    ApplyDocumentDirection,
    /// Run dialog teardown after the fade-out delay.
    ScheduleDialogTeardown(DialogId),
    /// Move focus onto the newly opened dialog surface.
    FocusDialogSurface(DialogId),
    /// Deliver a dialog lifecycle notification to subscribers.
    NotifyDialogLifecycle(DialogLifecycleEvent),
    /// Deliver a selection-changed notification to subscribers.
    NotifySelectionChanged(SelectionChanged),
}

#[derive(Clone, Copy)]
/// Leptos context for driving the dialog broker, selection coordinator, and
/// shell preferences.
pub struct UiRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<UiHostContext>,
    /// Single-slot dialog broker.
    pub dialogs: RwSignal<DialogManager>,
    /// Exclusive-selection group coordinator.
    pub selection: RwSignal<SelectionCoordinator>,
    /// Shell-level preferences reflected onto the document.
    pub prefs: RwSignal<ShellPrefs>,
    /// Queue of effects emitted by runtime operations.
    pub effects: RwSignal<Vec<UiEffect>>,
}

impl UiRuntimeContext {
    fn enqueue(&self, new_effects: impl IntoIterator<Item = UiEffect>) {
        let mut queue = self.effects.get_untracked();
        queue.extend(new_effects);
        if !queue.is_empty() {
            self.effects.set(queue);
        }
    }

    /// Opens a dialog and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::AlreadyOpen`] while another dialog is active.
    pub fn open_dialog(&self, request: OpenDialogRequest) -> Result<DialogHandle, DialogError> {
        let handle = self
            .dialogs
            .try_update(|manager| manager.open(request))
            .expect("dialog manager signal available")?;
        self.enqueue([
            UiEffect::NotifyDialogLifecycle(DialogLifecycleEvent::Opened(handle.id())),
            UiEffect::FocusDialogSurface(handle.id()),
        ]);
        Ok(handle)
    }

    /// Requests closing the dialog with an optional result value.
    pub fn close_dialog(&self, id: DialogId, result: Option<Value>) {
        let closed = self
            .dialogs
            .try_update(|manager| manager.close(id, result))
            .unwrap_or(false);
        if closed {
            self.enqueue([
                UiEffect::NotifyDialogLifecycle(DialogLifecycleEvent::Closing(id)),
                UiEffect::ScheduleDialogTeardown(id),
            ]);
        }
    }

    /// Handles a pointer event on the dialog backdrop.
    pub fn dismiss_dialog_backdrop(&self, id: DialogId) {
        let closed = self
            .dialogs
            .try_update(|manager| manager.dismiss_backdrop(id))
            .unwrap_or(false);
        if closed {
            self.enqueue([
                UiEffect::NotifyDialogLifecycle(DialogLifecycleEvent::Closing(id)),
                UiEffect::ScheduleDialogTeardown(id),
            ]);
        }
    }

    /// Handles a global Escape key press against the active dialog.
    pub fn dismiss_dialog_escape(&self, id: DialogId) {
        let closed = self
            .dialogs
            .try_update(|manager| manager.dismiss_escape(id))
            .unwrap_or(false);
        if closed {
            self.enqueue([
                UiEffect::NotifyDialogLifecycle(DialogLifecycleEvent::Closing(id)),
                UiEffect::ScheduleDialogTeardown(id),
            ]);
        }
    }

    /// Completes dialog teardown; invoked by the host after the fade delay.
    pub fn finish_dialog_teardown(&self, id: DialogId) {
        let finished = self
            .dialogs
            .try_update(|manager| manager.finish_teardown(id))
            .unwrap_or(false);
        if finished {
            self.enqueue([UiEffect::NotifyDialogLifecycle(
                DialogLifecycleEvent::Closed(id),
            )]);
        }
    }

    /// Registers an exclusive-selection member and returns its id.
    pub fn register_member(
        &self,
        group: Option<String>,
        value: impl Into<String>,
        selected: bool,
        disabled: bool,
    ) -> MemberId {
        self.selection
            .try_update(|coordinator| coordinator.register(group, value, selected, disabled))
            .expect("selection coordinator signal available")
    }

    /// Deregisters a member when its control detaches.
    pub fn deregister_member(&self, id: MemberId) {
        self.selection.update(|coordinator| {
            coordinator.deregister(id);
        });
    }

    /// Toggles a member's disabled flag.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::MemberNotFound`] for unregistered ids.
    pub fn set_member_disabled(&self, id: MemberId, disabled: bool) -> Result<(), SelectionError> {
        self.selection
            .try_update(|coordinator| coordinator.set_disabled(id, disabled))
            .expect("selection coordinator signal available")
    }

    /// Selects a member, broadcasting the change through its group.
    ///
    /// # Errors
    ///
    /// Propagates coordinator errors for disabled or unregistered members.
    pub fn select_member(&self, id: MemberId) -> Result<(), SelectionError> {
        let change = self
            .selection
            .try_update(|coordinator| coordinator.select(id))
            .expect("selection coordinator signal available")?;
        if let Some(change) = change {
            self.enqueue([UiEffect::NotifySelectionChanged(change)]);
        }
        Ok(())
    }

    /// Moves the selection cyclically from a member in the given direction.
    ///
    /// # Errors
    ///
    /// Propagates coordinator errors for disabled or unregistered members.
    pub fn navigate_member(&self, id: MemberId, intent: NavigateIntent) -> Result<(), SelectionError> {
        let change = self
            .selection
            .try_update(|coordinator| match intent {
                NavigateIntent::Next => coordinator.navigate_next(id),
                NavigateIntent::Previous => coordinator.navigate_previous(id),
            })
            .expect("selection coordinator signal available")?;
        if let Some(change) = change {
            self.enqueue([UiEffect::NotifySelectionChanged(change)]);
        }
        Ok(())
    }

    /// Sets the color scheme and schedules persistence plus document update.
    pub fn set_theme(&self, theme: ThemeMode) {
        if self.prefs.get_untracked().theme == theme {
            return;
        }
        self.prefs.update(|prefs| prefs.theme = theme);
        self.enqueue([UiEffect::PersistTheme, UiEffect::ApplyDocumentTheme]);
    }

    /// Flips between light and dark schemes.
    pub fn toggle_theme(&self) {
        let next = self.prefs.get_untracked().theme.toggled();
        self.set_theme(next);
    }

    /// Sets the RTL flag and schedules persistence plus document update.
    pub fn set_rtl(&self, rtl: bool) {
        if self.prefs.get_untracked().rtl == rtl {
            return;
        }
        self.prefs.update(|prefs| prefs.rtl = rtl);
        self.enqueue([UiEffect::PersistDirection, UiEffect::ApplyDocumentDirection]);
    }

    /// Replaces preferences from persisted state at boot and reflects them
    /// onto the document without re-persisting.
    pub fn hydrate_prefs(&self, prefs: ShellPrefs) {
        self.prefs.set(prefs);
        self.enqueue([
            UiEffect::ApplyDocumentTheme,
            UiEffect::ApplyDocumentDirection,
        ]);
    }

    /// Subscribes to dialog lifecycle notifications.
    pub fn subscribe_dialog_events(&self, listener: Callback<DialogLifecycleEvent>) {
        self.host.get_value().add_dialog_listener(listener);
    }

    /// Subscribes to selection-changed notifications (for example, a settings
    /// store persisting the chosen value).
    pub fn subscribe_selection_events(&self, listener: Callback<SelectionChanged>) {
        self.host.get_value().add_selection_listener(listener);
    }
}

#[component]
/// Provides [`UiRuntimeContext`] to descendant components and boots
/// persisted preferences.
pub fn UiProvider(
    /// Injected host bundle; defaults to the browser host.
    #[prop(optional)]
    host: Option<UiHostContext>,
    children: Children,
) -> impl IntoView {
    let host = store_value(host.unwrap_or_default());
    let dialogs = create_rw_signal(DialogManager::default());
    let selection = create_rw_signal(SelectionCoordinator::default());
    let prefs = create_rw_signal(ShellPrefs::default());
    let effects = create_rw_signal(Vec::<UiEffect>::new());

    let runtime = UiRuntimeContext {
        host,
        dialogs,
        selection,
        prefs,
        effects,
    };

    provide_context(runtime);

    host.get_value().install_boot_hydration(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`UiRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`UiProvider`].
pub fn use_ui_runtime() -> UiRuntimeContext {
    use_context::<UiRuntimeContext>().expect("UiRuntimeContext not provided")
}
