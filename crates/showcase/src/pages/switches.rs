use leptos::*;
use material_ui::prelude::*;
use ui_runtime::{use_ui_runtime, ThemeMode};

#[component]
pub fn SwitchesPage() -> impl IntoView {
    let runtime = use_ui_runtime();
    let (notifications, set_notifications) = create_signal(true);
    let dark = Signal::derive(move || runtime.prefs.with(|prefs| prefs.theme == ThemeMode::Dark));
    let rtl = Signal::derive(move || runtime.prefs.with(|prefs| prefs.rtl));

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
            <Heading>"Switches"</Heading>
            <Card variant=CardVariant::Outlined>
                <Stack gap=LayoutGap::Sm>
                    <Cluster justify=LayoutJustify::Between>
                        <Text>"Notifications"</Text>
                        <Switch
                            aria_label="Notifications"
                            checked=notifications
                            on_toggle=Callback::new(move |on| set_notifications.set(on))
                        />
                    </Cluster>
                    <Cluster justify=LayoutJustify::Between>
                        <Text tone=TextTone::Secondary>"Unavailable option"</Text>
                        <Switch aria_label="Unavailable option" disabled=true />
                    </Cluster>
                </Stack>
            </Card>
            <Card variant=CardVariant::Outlined>
                <Stack gap=LayoutGap::Sm>
                    <Heading role=TextRole::Label>"Wired to preferences"</Heading>
                    <Cluster justify=LayoutJustify::Between>
                        <Text>"Dark mode"</Text>
                        <Switch
                            aria_label="Dark mode"
                            checked=dark
                            on_toggle=Callback::new(move |on: bool| {
                                runtime
                                    .set_theme(
                                        if on { ThemeMode::Dark } else { ThemeMode::Light },
                                    );
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
            </Card>
        </Stack>
    }
}
