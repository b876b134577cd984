use leptos::*;
use material_ui::prelude::*;
use serde_json::json;
use ui_runtime::{use_ui_runtime, OpenDialogRequest};

#[component]
pub fn DialogsPage() -> impl IntoView {
    let runtime = use_ui_runtime();
    let (last_result, set_last_result) = create_signal(String::from("none yet"));

    let open_basic = Callback::new(move |_| {
        let request = OpenDialogRequest::new(json!({
            "kind": "message",
            "text": "A plain dialog. Click the backdrop, press Escape, or use the \
                     close button to dismiss it.",
        }))
        .with_title("Hello");
        if let Err(err) = runtime.open_dialog(request) {
            logging::warn!("dialog rejected: {err}");
        }
    });

    let open_persistent = Callback::new(move |_| {
        let request = OpenDialogRequest::new(json!({
            "kind": "message",
            "text": "Backdrop clicks are ignored here. Escape and the close \
                     button still dismiss the dialog.",
        }))
        .with_title("Persistent")
        .with_close_on_backdrop(false);
        if let Err(err) = runtime.open_dialog(request) {
            logging::warn!("dialog rejected: {err}");
        }
    });

    let open_confirm = Callback::new(move |_| {
        let request = OpenDialogRequest::new(json!({
            "kind": "confirm",
            "message": "Delete the item?",
        }))
        .with_title("Confirm")
        .with_width("320px", "400px");
        match runtime.open_dialog(request) {
            Ok(mut handle) => {
                if let Some(closed) = handle.after_closed() {
                    spawn_local(async move {
                        let outcome = match closed.await {
                            Some(value) => value.to_string(),
                            None => "dismissed".to_string(),
                        };
                        set_last_result.set(outcome);
                    });
                }
            }
            Err(err) => logging::warn!("dialog rejected: {err}"),
        }
    });

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
            <Heading>"Dialogs"</Heading>
            <Text tone=TextTone::Secondary>
                "Only one dialog can be open at a time; a second open request is \
                 rejected until teardown completes."
            </Text>
            <Cluster gap=LayoutGap::Sm>
                <Button on_click=open_basic>"Open dialog"</Button>
                <Button variant=ButtonVariant::Tonal on_click=open_persistent>
                    "Open persistent dialog"
                </Button>
                <Button variant=ButtonVariant::Outlined on_click=open_confirm>
                    "Open confirm dialog"
                </Button>
            </Cluster>
            <Card variant=CardVariant::Outlined>
                <Stack gap=LayoutGap::Sm>
                    <Heading role=TextRole::Label>"Last confirm result"</Heading>
                    <Text>{move || last_result.get()}</Text>
                </Stack>
            </Card>
        </Stack>
    }
}
