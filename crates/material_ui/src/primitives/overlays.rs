use super::*;

#[component]
/// Full-viewport modal scrim. Clicks that reach the scrim itself report
/// through `on_backdrop`; the surface stops propagation of its own clicks.
pub fn DialogScrim(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] closing: MaybeSignal<bool>,
    #[prop(optional)] on_backdrop: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("md-dialog-scrim", layout_class)
            data-md-primitive="true"
            data-md-kind="dialog-scrim"
            data-md-state=move || if closing.get() { "closing" } else { "open" }
            on:click=move |ev| {
                if let Some(on_backdrop) = on_backdrop.as_ref() {
                    on_backdrop.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Focusable modal surface with configurable width constraints.
pub fn DialogSurface(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] width: Option<String>,
    #[prop(optional, into)] max_width: Option<String>,
    #[prop(optional, into)] closing: MaybeSignal<bool>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let mut style = String::new();
    if let Some(width) = width {
        style.push_str(&format!("width:{width};"));
    }
    if let Some(max_width) = max_width {
        style.push_str(&format!("max-width:{max_width};"));
    }
    view! {
        <div
            class=merge_layout_class("md-dialog-surface", layout_class)
            id=id
            role="dialog"
            aria-modal="true"
            aria-label=aria_label
            tabindex="-1"
            style=style
            data-md-primitive="true"
            data-md-kind="dialog-surface"
            data-md-state=move || if closing.get() { "closing" } else { "open" }
            on:click=|ev| ev.stop_propagation()
        >
            {children()}
        </div>
    }
}

#[component]
/// Dialog header row holding the title and the optional close affordance.
pub fn DialogHeader(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = true)] show_close_button: bool,
    #[prop(optional)] on_close: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("md-dialog-header", layout_class)
            data-md-primitive="true"
            data-md-kind="dialog-header"
        >
            {title
                .filter(|title| !title.is_empty())
                .map(|title| {
                    view! {
                        <h2 class="md-dialog-title" data-md-slot="title">
                            {title}
                        </h2>
                    }
                })}
            {show_close_button
                .then(|| {
                    view! {
                        <IconButton
                            icon=IconName::Close
                            aria_label="Close dialog"
                            layout_class="md-dialog-close"
                            on_click=Callback::new(move |ev| {
                                if let Some(on_close) = on_close.as_ref() {
                                    on_close.call(ev);
                                }
                            })
                        />
                    }
                })}
        </header>
    }
}
