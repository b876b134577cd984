use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use material_ui::prelude::*;
use serde_json::{json, Value};
use ui_runtime::{
    use_ui_runtime, DialogHost, DialogId, DialogRecord, OpenDialogRequest, SelectionChanged,
    ThemeMode, UiProvider,
};

use crate::pages::{
    ButtonsPage, CardsPage, DialogsPage, HomePage, NavigationPage, RadioButtonsPage, SearchPage,
    SwitchesPage,
};

#[component]
pub fn ShowcaseApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Material 3 Component Showcase" />
        <Meta name="description" content="A Material Design 3 component showcase built with Leptos." />

        <Router>
            <UiProvider>
                <ShowcaseShell />
            </UiProvider>
        </Router>
    }
}

#[component]
fn ShowcaseShell() -> impl IntoView {
    let runtime = use_ui_runtime();
    runtime.subscribe_dialog_events(Callback::new(|event| {
        logging::log!("dialog lifecycle: {event:?}");
    }));
    runtime.subscribe_selection_events(Callback::new(|change: SelectionChanged| {
        logging::log!(
            "selection changed: group={:?} value={} previous={:?}",
            change.group,
            change.value,
            change.previous
        );
    }));

    let open_settings = Callback::new(move |_| {
        let request = OpenDialogRequest::new(json!({ "kind": "settings" })).with_title("Settings");
        if let Err(err) = runtime.open_dialog(request) {
            logging::warn!("settings dialog rejected: {err}");
        }
    });

    view! {
        <div class="showcase-root">
            <NavigationRail aria_label="Showcase sections">
                <RailLink href="/" icon=IconName::Home label="Home" />
                <RailLink href="/buttons" icon=IconName::Add label="Buttons" />
                <RailLink href="/cards" icon=IconName::Check label="Cards" />
                <RailLink href="/switches" icon=IconName::LightMode label="Switches" />
                <RailLink href="/radio-buttons" icon=IconName::Favorite label="Radio" />
                <RailLink href="/navigation" icon=IconName::Menu label="Navigation" />
                <RailLink href="/search" icon=IconName::Search label="Search" />
                <RailLink href="/dialogs" icon=IconName::Settings label="Dialogs" />
            </NavigationRail>
            <main class="showcase-main">
                <Cluster layout_class="showcase-top-bar" justify=LayoutJustify::Between>
                    <Heading>"Material 3 Showcase"</Heading>
                    <Cluster gap=LayoutGap::Sm>
                        <ThemeToggleButton />
                        <IconButton
                            icon=IconName::Settings
                            aria_label="Open settings"
                            on_click=open_settings
                        />
                    </Cluster>
                </Cluster>
                <Routes>
                    <Route path="" view=HomePage />
                    <Route path="/buttons" view=ButtonsPage />
                    <Route path="/cards" view=CardsPage />
                    <Route path="/switches" view=SwitchesPage />
                    <Route path="/radio-buttons" view=RadioButtonsPage />
                    <Route path="/navigation" view=NavigationPage />
                    <Route path="/search" view=SearchPage />
                    <Route path="/dialogs" view=DialogsPage />
                </Routes>
            </main>
            <DialogHost render_content=Callback::new(render_dialog_content) />
        </div>
    }
}

#[component]
fn RailLink(href: &'static str, icon: IconName, label: &'static str) -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();
    let active = Signal::derive(move || location.pathname.get() == href);

    view! {
        <NavigationRailItem
            icon
            active
            on_click=Callback::new(move |_| navigate(href, Default::default()))
        >
            {label}
        </NavigationRailItem>
    }
}

#[component]
fn ThemeToggleButton() -> impl IntoView {
    let runtime = use_ui_runtime();
    view! {
        {move || {
            let dark = runtime.prefs.with(|prefs| prefs.theme == ThemeMode::Dark);
            let icon = if dark { IconName::LightMode } else { IconName::DarkMode };
            view! {
                <IconButton
                    icon
                    aria_label="Toggle color scheme"
                    on_click=Callback::new(move |_| runtime.toggle_theme())
                />
            }
        }}
    }
}

/// Maps the opaque dialog payload onto showcase dialog content.
fn render_dialog_content(record: DialogRecord) -> View {
    match record.content.get("kind").and_then(Value::as_str) {
        Some("settings") => view! { <SettingsDialogContent /> }.into_view(),
        Some("confirm") => {
            let message = record
                .content
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Are you sure?")
                .to_string();
            view! { <ConfirmDialogContent id=record.id message /> }.into_view()
        }
        Some("message") => {
            let text = record
                .content
                .get("text")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            view! { <Text>{text}</Text> }.into_view()
        }
        _ => view! { <Text tone=TextTone::Secondary>"Nothing to show."</Text> }.into_view(),
    }
}

#[component]
fn SettingsDialogContent() -> impl IntoView {
    let runtime = use_ui_runtime();
    let dark = Signal::derive(move || runtime.prefs.with(|prefs| prefs.theme == ThemeMode::Dark));
    let rtl = Signal::derive(move || runtime.prefs.with(|prefs| prefs.rtl));

    view! {
        <Stack gap=LayoutGap::Sm>
            <Cluster justify=LayoutJustify::Between>
                <Text>"Dark mode"</Text>
                <Switch
                    aria_label="Dark mode"
                    checked=dark
                    on_toggle=Callback::new(move |on: bool| {
                        runtime.set_theme(if on { ThemeMode::Dark } else { ThemeMode::Light });
                    })
                />
            </Cluster>
            <Cluster justify=LayoutJustify::Between>
                <Text>"Right-to-left layout"</Text>
                <Switch
                    aria_label="Right-to-left layout"
                    checked=rtl
                    on_toggle=Callback::new(move |on: bool| runtime.set_rtl(on))
                />
            </Cluster>
        </Stack>
    }
}

#[component]
fn ConfirmDialogContent(id: DialogId, message: String) -> impl IntoView {
    let runtime = use_ui_runtime();
    view! {
        <Stack gap=LayoutGap::Md>
            <Text>{message}</Text>
            <Cluster justify=LayoutJustify::End gap=LayoutGap::Sm>
                <Button
                    variant=ButtonVariant::Text
                    on_click=Callback::new(move |_| runtime.close_dialog(id, None))
                >
                    "Cancel"
                </Button>
                <Button
                    on_click=Callback::new(move |_| {
                        runtime.close_dialog(id, Some(json!({ "confirmed": true })));
                    })
                >
                    "Confirm"
                </Button>
            </Cluster>
        </Stack>
    }
}
