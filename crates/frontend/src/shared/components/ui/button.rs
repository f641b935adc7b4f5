use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    Success,
    #[default]
    Secondary,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Success => "button--success",
            ButtonVariant::Secondary => "button--secondary",
        }
    }
}

/// Button with a colour variant; `submit` makes it the form's submit button
#[component]
pub fn Button(
    #[prop(optional)]
    variant: ButtonVariant,
    /// Render as `type="submit"` instead of `type="button"`
    #[prop(optional)]
    submit: bool,
    /// Disabled state (reactive)
    #[prop(into)]
    disabled: Signal<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// `data-test` hook for UI tests
    #[prop(optional, into)]
    data_test: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let btn_type = if submit { "submit" } else { "button" };

    view! {
        <button
            type=btn_type
            class=format!("button spacer-right {}", variant.class())
            disabled=move || disabled.get()
            data-test=move || data_test.get()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
