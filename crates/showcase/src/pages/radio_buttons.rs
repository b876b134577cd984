use leptos::*;
use material_ui::prelude::*;
use ui_runtime::use_ui_runtime;

#[component]
pub fn RadioButtonsPage() -> impl IntoView {
    let runtime = use_ui_runtime();
    let flavor = move || {
        runtime
            .selection
            .with(|coordinator| coordinator.selected_value("flavor").map(str::to_string))
            .unwrap_or_else(|| "none".to_string())
    };
    let size = move || {
        runtime
            .selection
            .with(|coordinator| coordinator.selected_value("size").map(str::to_string))
            .unwrap_or_else(|| "none".to_string())
    };

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
            <Heading>"Radio buttons"</Heading>
            <Text tone=TextTone::Secondary>
                "Selection is exclusive per group. Arrow keys move the selection \
                 cyclically and skip disabled options."
            </Text>
            <Card variant=CardVariant::Outlined>
                <Stack gap=LayoutGap::Sm>
                    <Heading role=TextRole::Label>"Flavor"</Heading>
                    <Cluster gap=LayoutGap::Sm>
                        <GroupRadio group="flavor" value="vanilla" initially_selected=true />
                        <GroupRadio group="flavor" value="chocolate" />
                        <GroupRadio group="flavor" value="pistachio" />
                    </Cluster>
                    <Text tone=TextTone::Secondary>{move || format!("Selected: {}", flavor())}</Text>
                </Stack>
            </Card>
            <Card variant=CardVariant::Outlined>
                <Stack gap=LayoutGap::Sm>
                    <Heading role=TextRole::Label>"Sizes, with a disabled option"</Heading>
                    <Cluster gap=LayoutGap::Sm>
                        <GroupRadio
                            group="size"
                            value="small"
                            size=RadioSize::Small
                            initially_selected=true
                        />
                        <GroupRadio group="size" value="medium" size=RadioSize::Medium disabled=true />
                        <GroupRadio group="size" value="large" size=RadioSize::Large />
                    </Cluster>
                    <Text tone=TextTone::Secondary>{move || format!("Selected: {}", size())}</Text>
                </Stack>
            </Card>
        </Stack>
    }
}

#[component]
/// Radio control registered with the exclusive-selection coordinator for the
/// lifetime of the view.
fn GroupRadio(
    group: &'static str,
    value: &'static str,
    #[prop(optional)] initially_selected: bool,
    #[prop(optional)] disabled: bool,
    #[prop(default = RadioSize::Medium)] size: RadioSize,
) -> impl IntoView {
    let runtime = use_ui_runtime();
    let member = runtime.register_member(
        Some(group.to_string()),
        value,
        initially_selected,
        disabled,
    );
    on_cleanup(move || runtime.deregister_member(member));

    let selected =
        Signal::derive(move || runtime.selection.with(|coordinator| coordinator.is_selected(member)));

    view! {
        <RadioButton
            size=size
            aria_label=value
            selected=selected
            disabled=disabled
            on_select=Callback::new(move |_| {
                if let Err(err) = runtime.select_member(member) {
                    logging::warn!("radio select rejected: {err}");
                }
            })
            on_navigate=Callback::new(move |intent| {
                if let Err(err) = runtime.navigate_member(member, intent) {
                    logging::warn!("radio navigation rejected: {err}");
                }
            })
        >
            {value}
        </RadioButton>
    }
}
