use super::*;

#[component]
/// Material card surface. Passing `on_click` makes the card interactive.
pub fn Card(
    #[prop(default = CardVariant::Elevated)] variant: CardVariant,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let clickable = on_click.is_some();
    view! {
        <article
            class=merge_layout_class("md-card", layout_class)
            tabindex=clickable.then_some(0)
            data-md-primitive="true"
            data-md-kind="card"
            data-md-variant=variant.token()
            data-md-padding=padding.token()
            data-md-clickable=bool_token(clickable)
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </article>
    }
}

#[component]
/// Compact badge, rendered as a small dot unless `large` is set.
pub fn Badge(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] large: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("md-badge", layout_class)
            data-md-primitive="true"
            data-md-kind="badge"
            data-md-large=move || bool_token(large.get())
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared heading primitive.
pub fn Heading(
    #[prop(default = TextRole::Title)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("md-heading", layout_class)
            data-md-primitive="true"
            data-md-kind="heading"
            data-md-variant=role.token()
            data-md-tone=tone.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared inline text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("md-text", layout_class)
            data-md-primitive="true"
            data-md-kind="text"
            data-md-variant=role.token()
            data-md-tone=tone.token()
        >
            {children()}
        </span>
    }
}
