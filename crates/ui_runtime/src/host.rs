//! Host-side execution of runtime effects: preference persistence, document
//! attribute reflection, dialog teardown scheduling, and notification fanout.

use std::{cell::RefCell, rc::Rc};

use leptos::{logging, spawn_local, Callable, Callback, SignalGetUntracked};
use platform_prefs::{PrefsStore, WebPrefsStore};

use crate::{
    model::{DialogId, DialogLifecycleEvent, SelectionChanged, ThemeMode},
    persistence,
    runtime_context::{UiEffect, UiRuntimeContext},
};

#[derive(Clone)]
/// Host service bundle for runtime side effects.
pub struct UiHostContext {
    prefs: Rc<dyn PrefsStore>,
    dialog_listeners: Rc<RefCell<Vec<Callback<DialogLifecycleEvent>>>>,
    selection_listeners: Rc<RefCell<Vec<Callback<SelectionChanged>>>>,
}

impl Default for UiHostContext {
    fn default() -> Self {
        Self::with_prefs_store(Rc::new(WebPrefsStore))
    }
}

impl UiHostContext {
    /// Builds a host around a specific preference store implementation.
    pub fn with_prefs_store(prefs: Rc<dyn PrefsStore>) -> Self {
        Self {
            prefs,
            dialog_listeners: Rc::new(RefCell::new(Vec::new())),
            selection_listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Returns the configured preference store.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    pub(crate) fn add_dialog_listener(&self, listener: Callback<DialogLifecycleEvent>) {
        self.dialog_listeners.borrow_mut().push(listener);
    }

    pub(crate) fn add_selection_listener(&self, listener: Callback<SelectionChanged>) {
        self.selection_listeners.borrow_mut().push(listener);
    }

    /// Loads persisted preferences and hydrates the runtime once ready.
    pub fn install_boot_hydration(&self, runtime: UiRuntimeContext) {
        let prefs = self.prefs.clone();
        spawn_local(async move {
            let loaded = persistence::load_shell_prefs(prefs.as_ref()).await;
            runtime.hydrate_prefs(loaded);
        });
    }

    /// Executes a single [`UiEffect`] emitted by the runtime.
    pub fn run_ui_effect(&self, runtime: UiRuntimeContext, effect: UiEffect) {
        match effect {
            UiEffect::PersistTheme => {
                let theme = runtime.prefs.get_untracked().theme;
                let prefs = self.prefs.clone();
                spawn_local(async move {
                    if let Err(err) = persistence::persist_theme(prefs.as_ref(), theme).await {
                        logging::warn!("theme persistence failed: {err}");
                    }
                });
            }
            UiEffect::PersistDirection => {
                let rtl = runtime.prefs.get_untracked().rtl;
                let prefs = self.prefs.clone();
                spawn_local(async move {
                    if let Err(err) = persistence::persist_direction(prefs.as_ref(), rtl).await {
                        logging::warn!("direction persistence failed: {err}");
                    }
                });
            }
            UiEffect::ApplyDocumentTheme => {
                apply_document_theme(runtime.prefs.get_untracked().theme);
            }
            UiEffect::ApplyDocumentDirection => {
                apply_document_direction(runtime.prefs.get_untracked().rtl);
            }
            UiEffect::ScheduleDialogTeardown(id) => schedule_dialog_teardown(runtime, id),
            UiEffect::FocusDialogSurface(id) => focus_dialog_surface(id),
            UiEffect::NotifyDialogLifecycle(event) => {
                for listener in self.dialog_listeners.borrow().iter() {
                    listener.call(event);
                }
            }
            UiEffect::NotifySelectionChanged(change) => {
                for listener in self.selection_listeners.borrow().iter() {
                    listener.call(change.clone());
                }
            }
        }
    }
}

fn apply_document_theme(theme: ThemeMode) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = document_root() else {
            return;
        };
        if let Err(err) = root.set_attribute("theme", theme.token()) {
            logging::warn!("setting document theme attribute failed: {err:?}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}

fn apply_document_direction(rtl: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = document_root() else {
            return;
        };
        let result = if rtl {
            root.set_attribute("dir", "rtl")
        } else {
            root.remove_attribute("dir")
        };
        if let Err(err) = result {
            logging::warn!("setting document dir attribute failed: {err:?}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = rtl;
}

/// Schedules [`UiRuntimeContext::finish_dialog_teardown`] after the fade-out
/// delay. On non-WASM targets there is no event loop to defer into, so
/// teardown completes inline and the full lifecycle stays observable.
fn schedule_dialog_teardown(runtime: UiRuntimeContext, id: DialogId) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{closure::Closure, JsCast};

        use crate::model::DIALOG_TEARDOWN_MS;

        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(move || runtime.finish_dialog_teardown(id));
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            DIALOG_TEARDOWN_MS as i32,
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    runtime.finish_dialog_teardown(id);
}

fn focus_dialog_surface(id: DialogId) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{closure::Closure, JsCast};

        use crate::components::dialog_surface_dom_id;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(element) = document.get_element_by_id(&dialog_surface_dom_id(id)) else {
            return;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        // Focus after the surface has rendered.
        let callback = Closure::once_into_js(move || {
            let _ = element.focus();
        });
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            0,
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

#[cfg(target_arch = "wasm32")]
fn document_root() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}
