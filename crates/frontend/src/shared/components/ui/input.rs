use leptos::prelude::*;

/// Plain text input bound to a signal
#[component]
pub fn Input(
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// ID (also used as the `name` attribute)
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Maximum accepted length
    #[prop(optional)]
    max_length: Option<u32>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <input
            id=input_id
            name=input_id
            class=move || format!("form__input {}", additional_class())
            type="text"
            maxlength=max_length.map(|n| n.to_string())
            prop:value=move || value.get()
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        />
    }
}
