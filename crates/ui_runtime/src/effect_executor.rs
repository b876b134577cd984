//! Ordered executor for runtime-emitted [`UiEffect`] values.

use leptos::*;

use crate::runtime_context::UiRuntimeContext;

/// Installs the effect executor that drains queued runtime effects in order.
pub fn install(runtime: UiRuntimeContext) {
    // The queue is cleared before processing so effects enqueued while the
    // drain runs (teardown completions, listener dispatch) land in a fresh
    // batch instead of being overwritten mid-flight.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            runtime.host.get_value().run_ui_effect(runtime, effect);
        }
    });
}
