use leptos::prelude::*;

/// On/off toggle rendered as a switch-styled checkbox
#[component]
pub fn Toggle(
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// ID for the checkbox element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Short note rendered after the switch (e.g. "(default)")
    #[prop(optional, into)]
    note: MaybeProp<String>,
) -> impl IntoView {
    let toggle_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__toggle-wrapper">
            <input
                id=toggle_id
                name=toggle_id
                type="checkbox"
                role="switch"
                class="form__toggle"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            {move || note.get().map(|n| view! {
                <span class="form__toggle-note">{n}</span>
            })}
        </div>
    }
}
