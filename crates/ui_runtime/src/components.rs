//! Leptos composition layer for the dialog broker.
//!
//! The broker itself never touches the render tree: [`DialogHost`] owns the
//! overlay placeholder and asks the hosting application to render the active
//! dialog's opaque content payload into it.

use leptos::ev;
use leptos::*;
use material_ui::{DialogHeader, DialogScrim, DialogSurface};

use crate::{
    model::{DialogId, DialogPhase, DialogRecord},
    runtime_context::use_ui_runtime,
};

/// DOM id of the focusable dialog surface element for a dialog instance.
pub fn dialog_surface_dom_id(id: DialogId) -> String {
    format!("md-dialog-{}", id.0)
}

#[component]
/// Renders the active dialog overlay and wires backdrop and Escape dismissal.
///
/// `render_content` maps the active dialog record, including its opaque
/// content payload, to the view shown inside the dialog's content slot.
pub fn DialogHost(
    /// Content-slot renderer supplied by the hosting application.
    render_content: Callback<DialogRecord, View>,
) -> impl IntoView {
    let runtime = use_ui_runtime();
    let active = create_memo(move |_| runtime.dialogs.with(|manager| manager.active().cloned()));

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if let Some(record) = active.get_untracked() {
            ev.prevent_default();
            runtime.dismiss_dialog_escape(record.id);
        }
    });
    on_cleanup(move || escape_listener.remove());

    view! {
        {move || {
            active
                .get()
                .map(|record| {
                    let id = record.id;
                    let closing = record.phase == DialogPhase::Closing;
                    view! {
                        <DialogScrim
                            closing=closing
                            on_backdrop=Callback::new(move |_| runtime.dismiss_dialog_backdrop(id))
                        >
                            <DialogSurface
                                id=dialog_surface_dom_id(id)
                                width=record.config.width.clone()
                                max_width=record.config.max_width.clone()
                                closing=closing
                                aria_label=record.config.title.clone().unwrap_or_default()
                            >
                                <DialogHeader
                                    title=record.config.title.clone().unwrap_or_default()
                                    show_close_button=record.config.show_close_button
                                    on_close=Callback::new(move |_| runtime.close_dialog(id, None))
                                />
                                <div data-md-slot="content">
                                    {render_content.call(record.clone())}
                                </div>
                            </DialogSurface>
                        </DialogScrim>
                    }
                })
        }}
    }
}
