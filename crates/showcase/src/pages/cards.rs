use leptos::*;
use material_ui::prelude::*;

#[component]
pub fn CardsPage() -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
            <Heading>"Cards"</Heading>
            <Cluster gap=LayoutGap::Md align=LayoutAlign::Stretch>
                <Card>
                    <Stack gap=LayoutGap::Sm>
                        <Heading role=TextRole::Label>"Elevated"</Heading>
                        <Text tone=TextTone::Secondary>
                            "Raised above the surface with a shadow."
                        </Text>
                    </Stack>
                </Card>
                <Card variant=CardVariant::Filled>
                    <Stack gap=LayoutGap::Sm>
                        <Heading role=TextRole::Label>"Filled"</Heading>
                        <Text tone=TextTone::Secondary>
                            "A tonal container without elevation."
                        </Text>
                    </Stack>
                </Card>
                <Card variant=CardVariant::Outlined>
                    <Stack gap=LayoutGap::Sm>
                        <Heading role=TextRole::Label>"Outlined"</Heading>
                        <Text tone=TextTone::Secondary>
                            "A hairline border on the base surface."
                        </Text>
                    </Stack>
                </Card>
            </Cluster>
        </Stack>
    }
}
