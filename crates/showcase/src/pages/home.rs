use leptos::*;
use leptos_router::use_navigate;
use material_ui::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let to_buttons = use_navigate();
    let to_cards = use_navigate();

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
            <Heading>"Welcome"</Heading>
            <Text tone=TextTone::Secondary>
                "A gallery of Material Design 3 components. Pick a section from the rail, \
                 flip the color scheme from the top bar, or open the settings dialog to \
                 switch layout direction."
            </Text>
            <Cluster gap=LayoutGap::Md align=LayoutAlign::Stretch>
                <Card
                    variant=CardVariant::Filled
                    on_click=Callback::new(move |_| to_buttons("/buttons", Default::default()))
                >
                    <Stack gap=LayoutGap::Sm>
                        <Heading role=TextRole::Label>"Controls"</Heading>
                        <Text tone=TextTone::Secondary>
                            "Buttons, switches, and radio groups with full keyboard support."
                        </Text>
                    </Stack>
                </Card>
                <Card
                    variant=CardVariant::Filled
                    on_click=Callback::new(move |_| to_cards("/cards", Default::default()))
                >
                    <Stack gap=LayoutGap::Sm>
                        <Heading role=TextRole::Label>"Surfaces"</Heading>
                        <Text tone=TextTone::Secondary>
                            "Cards, navigation bars and rails, and modal dialogs."
                        </Text>
                    </Stack>
                </Card>
            </Cluster>
        </Stack>
    }
}
