use leptos::*;
use material_ui::prelude::*;

#[component]
pub fn ButtonsPage() -> impl IntoView {
    let (loading, set_loading) = create_signal(false);

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
            <Heading>"Buttons"</Heading>
            <Card variant=CardVariant::Outlined>
                <Stack gap=LayoutGap::Sm>
                    <Heading role=TextRole::Label>"Variants"</Heading>
                    <Cluster gap=LayoutGap::Sm>
                        <Button>"Filled"</Button>
                        <Button variant=ButtonVariant::Elevated>"Elevated"</Button>
                        <Button variant=ButtonVariant::Tonal>"Tonal"</Button>
                        <Button variant=ButtonVariant::Outlined>"Outlined"</Button>
                        <Button variant=ButtonVariant::Text>"Text"</Button>
                    </Cluster>
                </Stack>
            </Card>
            <Card variant=CardVariant::Outlined>
                <Stack gap=LayoutGap::Sm>
                    <Heading role=TextRole::Label>"States"</Heading>
                    <Cluster gap=LayoutGap::Sm>
                        <Button disabled=true>"Disabled"</Button>
                        <Button leading_icon=IconName::Add>"With icon"</Button>
                        <Button
                            icon_only=true
                            leading_icon=IconName::Favorite
                            aria_label="Favorite"
                        >
                            "Favorite"
                        </Button>
                        <Button
                            loading=loading
                            on_click=Callback::new(move |_| set_loading.set(true))
                        >
                            "Start loading"
                        </Button>
                        <Button
                            variant=ButtonVariant::Text
                            on_click=Callback::new(move |_| set_loading.set(false))
                        >
                            "Reset"
                        </Button>
                    </Cluster>
                </Stack>
            </Card>
            <Button full_width=true variant=ButtonVariant::Tonal>
                "Full width"
            </Button>
        </Stack>
    }
}
