use super::*;

#[component]
/// Bottom navigation bar container.
pub fn NavigationBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("md-navigation-bar", layout_class)
            aria-label=move || aria_label.get()
            data-md-primitive="true"
            data-md-kind="navigation-bar"
        >
            {children()}
        </nav>
    }
}

#[component]
/// Bottom navigation bar destination with an optional badge.
pub fn NavigationBarItem(
    icon: IconName,
    #[prop(default = NavItemLayout::Vertical)] layout: NavItemLayout,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Badge text; an empty string renders the small dot badge.
    #[prop(optional, into)]
    badge: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let badge_view = badge.map(|text| {
        let large = !text.is_empty();
        view! {
            <Badge layout_class="md-nav-badge" large=large>
                {text}
            </Badge>
        }
    });
    view! {
        <button
            type="button"
            class=merge_layout_class("md-navigation-bar-item", layout_class)
            aria-current=move || if active.get() { "page" } else { "false" }
            disabled=move || disabled.get()
            data-md-primitive="true"
            data-md-kind="navigation-bar-item"
            data-md-layout=layout.token()
            data-md-active=move || bool_token(active.get())
            data-md-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <span class="md-nav-item-indicator" data-md-slot="indicator">
                <Icon icon size=IconSize::Md />
                {badge_view}
            </span>
            <span class="md-nav-item-label" data-md-slot="label">
                {children()}
            </span>
        </button>
    }
}

#[component]
/// Side navigation rail container.
pub fn NavigationRail(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("md-navigation-rail", layout_class)
            aria-label=move || aria_label.get()
            data-md-primitive="true"
            data-md-kind="navigation-rail"
        >
            {children()}
        </nav>
    }
}

#[component]
/// Navigation rail destination.
pub fn NavigationRailItem(
    icon: IconName,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("md-navigation-rail-item", layout_class)
            aria-current=move || if active.get() { "page" } else { "false" }
            disabled=move || disabled.get()
            data-md-primitive="true"
            data-md-kind="navigation-rail-item"
            data-md-active=move || bool_token(active.get())
            data-md-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <span class="md-nav-item-indicator" data-md-slot="indicator">
                <Icon icon size=IconSize::Md />
            </span>
            <span class="md-nav-item-label" data-md-slot="label">
                {children()}
            </span>
        </button>
    }
}
