use leptos::prelude::*;

/// Single-choice select without a "clear" entry.
///
/// While `value` matches none of the options (empty, or a key whose option
/// is gone) a disabled placeholder option is shown; once a value is picked
/// there is no way back to the empty state.
#[component]
pub fn Select(
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Placeholder shown while nothing is selected
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <select
            id=select_id
            name=select_id
            class=move || format!("form__select {}", additional_class())
            on:change=move |ev| {
                if let Some(handler) = on_change {
                    handler.run(event_target_value(&ev));
                }
            }
        >
            <Show when=move || value.with(|v| options.with(|o| shows_placeholder(o, v)))>
                <option value="" disabled=true selected=true>
                    {move || placeholder.get().unwrap_or_default()}
                </option>
            </Show>
            <For
                each=move || options.get()
                key=|(val, label)| (val.clone(), label.clone())
                children=move |(val, label)| {
                    let val_clone = val.clone();
                    let is_selected = move || value.get() == val_clone;
                    view! {
                        <option value=val selected=is_selected>
                            {label}
                        </option>
                    }
                }
            />
        </select>
    }
}

/// The placeholder stands in for any value without a matching option
pub fn shows_placeholder(options: &[(String, String)], value: &str) -> bool {
    !options.iter().any(|(v, _)| v == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<(String, String)> {
        vec![
            ("gh".to_string(), "gh — https://api.github.com".to_string()),
            ("gl".to_string(), "gl".to_string()),
        ]
    }

    #[test]
    fn test_placeholder_for_empty_value() {
        assert!(shows_placeholder(&options(), ""));
    }

    #[test]
    fn test_placeholder_for_value_without_option() {
        assert!(shows_placeholder(&options(), "removed"));
        assert!(shows_placeholder(&[], "gh"));
    }

    #[test]
    fn test_no_placeholder_for_matching_value() {
        assert!(!shows_placeholder(&options(), "gl"));
    }
}
