use leptos::*;
use material_ui::prelude::*;

#[component]
pub fn NavigationPage() -> impl IntoView {
    let (bar_active, set_bar_active) = create_signal(0usize);
    let (rail_active, set_rail_active) = create_signal(0usize);

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
            <Heading>"Navigation"</Heading>
            <Card variant=CardVariant::Outlined>
                <Stack gap=LayoutGap::Sm>
                    <Heading role=TextRole::Label>"Navigation bar"</Heading>
                    <NavigationBar aria_label="Demo destinations">
                        <NavigationBarItem
                            icon=IconName::Home
                            active=Signal::derive(move || bar_active.get() == 0)
                            on_click=Callback::new(move |_| set_bar_active.set(0))
                        >
                            "Home"
                        </NavigationBarItem>
                        <NavigationBarItem
                            icon=IconName::Favorite
                            badge="3".to_string()
                            active=Signal::derive(move || bar_active.get() == 1)
                            on_click=Callback::new(move |_| set_bar_active.set(1))
                        >
                            "Favorites"
                        </NavigationBarItem>
                        <NavigationBarItem
                            icon=IconName::Settings
                            badge=String::new()
                            layout=NavItemLayout::Horizontal
                            active=Signal::derive(move || bar_active.get() == 2)
                            on_click=Callback::new(move |_| set_bar_active.set(2))
                        >
                            "Settings"
                        </NavigationBarItem>
                    </NavigationBar>
                    <Text tone=TextTone::Secondary>
                        "The dot badge marks unread state; numbered badges carry a count."
                    </Text>
                </Stack>
            </Card>
            <Card variant=CardVariant::Outlined>
                <Stack gap=LayoutGap::Sm>
                    <Heading role=TextRole::Label>"Navigation rail"</Heading>
                    <NavigationRail aria_label="Demo rail">
                        <NavigationRailItem
                            icon=IconName::Home
                            active=Signal::derive(move || rail_active.get() == 0)
                            on_click=Callback::new(move |_| set_rail_active.set(0))
                        >
                            "Home"
                        </NavigationRailItem>
                        <NavigationRailItem
                            icon=IconName::Search
                            active=Signal::derive(move || rail_active.get() == 1)
                            on_click=Callback::new(move |_| set_rail_active.set(1))
                        >
                            "Search"
                        </NavigationRailItem>
                        <NavigationRailItem
                            icon=IconName::Settings
                            disabled=true
                        >
                            "Settings"
                        </NavigationRailItem>
                    </NavigationRail>
                </Stack>
            </Card>
        </Stack>
    }
}
