use leptos::*;
use material_ui::prelude::*;

#[component]
pub fn SearchPage() -> impl IntoView {
    let (query, set_query) = create_signal(String::new());
    let (submitted, set_submitted) = create_signal(Vec::<String>::new());

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
            <Heading>"Search"</Heading>
            <SearchBar
                placeholder="Search components"
                aria_label="Search components"
                value=query
                on_input=Callback::new(move |text| set_query.set(text))
                on_submit=Callback::new(move |text: String| {
                    if !text.is_empty() {
                        set_submitted.update(|log| log.push(text));
                    }
                })
                on_clear=Callback::new(move |_| set_query.set(String::new()))
            />
            <Card variant=CardVariant::Outlined>
                <Stack gap=LayoutGap::Sm>
                    <Heading role=TextRole::Label>"Submitted queries"</Heading>
                    {move || {
                        let log = submitted.get();
                        if log.is_empty() {
                            view! {
                                <Text tone=TextTone::Secondary>
                                    "Press Enter in the search bar to record a query."
                                </Text>
                            }
                                .into_view()
                        } else {
                            log
                                .into_iter()
                                .map(|entry| view! { <Text>{entry}</Text> })
                                .collect_view()
                        }
                    }}
                </Stack>
            </Card>
        </Stack>
    }
}
