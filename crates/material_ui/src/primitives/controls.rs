use super::*;

#[component]
/// Material common button with standardized variants, icon slot, and states.
pub fn Button(
    #[prop(default = ButtonVariant::Filled)] variant: ButtonVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Shows the busy indicator and blocks activation.
    #[prop(optional, into)]
    loading: MaybeSignal<bool>,
    /// Stretches the button across its container.
    #[prop(optional, into)]
    full_width: MaybeSignal<bool>,
    /// Collapses the label slot down to the leading icon.
    #[prop(optional, into)]
    icon_only: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("md-button", layout_class);
    view! {
        <button
            type="button"
            class=class
            id=id
            aria-label=move || aria_label.get()
            aria-busy=move || bool_token(loading.get())
            title=move || title.get()
            disabled=move || disabled.get() || loading.get()
            data-md-primitive="true"
            data-md-kind="button"
            data-md-variant=variant.token()
            data-md-loading=move || bool_token(loading.get())
            data-md-full-width=move || bool_token(full_width.get())
            data-md-icon-only=move || bool_token(icon_only.get())
            data-md-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if loading.get_untracked() {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            <span class="md-button-label" data-md-slot="label">
                {children()}
            </span>
        </button>
    }
}

#[component]
/// Compact circular icon button for toolbars and dialog chrome.
pub fn IconButton(
    icon: IconName,
    #[prop(default = ButtonVariant::Text)] variant: ButtonVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("md-icon-button", layout_class)
            aria-label=move || aria_label.get()
            title=move || title.get()
            disabled=move || disabled.get()
            data-md-primitive="true"
            data-md-kind="icon-button"
            data-md-variant=variant.token()
            data-md-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon size=IconSize::Md />
        </button>
    }
}

#[component]
/// Material switch. Space and Enter toggle through the native button click.
pub fn Switch(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Receives the proposed state after activation.
    #[prop(optional)]
    on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("md-switch", layout_class)
            id=id
            role="switch"
            aria-label=move || aria_label.get()
            aria-checked=move || bool_token(checked.get())
            disabled=move || disabled.get()
            data-md-primitive="true"
            data-md-kind="switch"
            data-md-checked=move || bool_token(checked.get())
            data-md-disabled=move || bool_token(disabled.get())
            on:click=move |_| {
                if let Some(on_toggle) = on_toggle.as_ref() {
                    on_toggle.call(!checked.get_untracked());
                }
            }
        >
            <span class="md-switch-track" data-md-slot="track" aria-hidden="true">
                <span class="md-switch-thumb" data-md-slot="thumb"></span>
            </span>
        </button>
    }
}

#[component]
/// Presentational radio button. Group semantics live with the caller: clicks
/// report through `on_select` and arrow keys through `on_navigate`.
pub fn RadioButton(
    #[prop(default = RadioSize::Medium)] size: RadioSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_select: Option<Callback<()>>,
    #[prop(optional)] on_navigate: Option<Callback<NavigateIntent>>,
    children: Children,
) -> impl IntoView {
    let handle_keydown = move |ev: KeyboardEvent| {
        let intent = match ev.key().as_str() {
            "ArrowRight" | "ArrowDown" => NavigateIntent::Next,
            "ArrowLeft" | "ArrowUp" => NavigateIntent::Previous,
            _ => return,
        };
        ev.prevent_default();
        if let Some(on_navigate) = on_navigate.as_ref() {
            on_navigate.call(intent);
        }
    };
    view! {
        <button
            type="button"
            class=merge_layout_class("md-radio", layout_class)
            id=id
            role="radio"
            aria-label=move || aria_label.get()
            aria-checked=move || bool_token(selected.get())
            disabled=move || disabled.get()
            tabindex=move || if selected.get() { 0 } else { -1 }
            data-md-primitive="true"
            data-md-kind="radio"
            data-md-size=size.token()
            data-md-selected=move || bool_token(selected.get())
            data-md-disabled=move || bool_token(disabled.get())
            on:click=move |_| {
                if let Some(on_select) = on_select.as_ref() {
                    on_select.call(());
                }
            }
            on:keydown=handle_keydown
        >
            <span class="md-radio-indicator" data-md-slot="indicator" aria-hidden="true"></span>
            <span class="md-radio-label" data-md-slot="label">
                {children()}
            </span>
        </button>
    }
}

#[component]
/// Material search bar with a leading glyph, live input reporting, Enter
/// submission, and a clear affordance while text is present.
pub fn SearchBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_submit: Option<Callback<String>>,
    #[prop(optional)] on_clear: Option<Callback<()>>,
) -> impl IntoView {
    let submit_value = value.clone();
    let input_value = value.clone();
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        if let Some(on_submit) = on_submit.as_ref() {
            on_submit.call(submit_value.get_untracked());
        }
    };
    view! {
        <div
            class=merge_layout_class("md-search-bar", layout_class)
            role="search"
            data-md-primitive="true"
            data-md-kind="search-bar"
            data-md-disabled=move || bool_token(disabled.get())
        >
            <Icon icon=IconName::Search size=IconSize::Sm />
            <input
                type="search"
                class="md-search-bar-input"
                id=id
                placeholder=move || placeholder.get()
                aria-label=move || aria_label.get()
                disabled=move || disabled.get()
                data-md-slot="input"
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(event_target_value(&ev));
                    }
                }
                on:keydown=handle_keydown
            />
            {move || {
                (!value.get().is_empty())
                    .then(|| {
                        view! {
                            <IconButton
                                icon=IconName::Close
                                aria_label="Clear search"
                                on_click=Callback::new(move |_| {
                                    if let Some(on_clear) = on_clear.as_ref() {
                                        on_clear.call(());
                                    }
                                })
                            />
                        }
                    })
            }}
        </div>
    }
}
