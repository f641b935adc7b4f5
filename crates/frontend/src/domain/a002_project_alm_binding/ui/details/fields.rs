//! Label and field renderers for the binding form

use super::plan::{FieldSpec, HelpExample};
use crate::shared::components::ui::{Input, Toggle};
use crate::shared::icons::icon;
use crate::shared::l10n::{split_placeholder, translate, translate_parts};
use contracts::domain::a002_project_alm_binding::{BindingField, FieldValue};
use leptos::prelude::*;

const MESSAGE_PREFIX: &str = "settings.pr_decoration.binding.form";
const MAX_TEXT_LENGTH: u32 = 256;

/// Field label: translated text, mandatory marker and optional help tooltip
#[component]
pub fn FieldLabel(
    id: &'static str,
    #[prop(optional)] optional: bool,
    #[prop(optional)] help: bool,
    example: Option<HelpExample>,
) -> impl IntoView {
    view! {
        <label class="form__label display-flex-center" for=id>
            {translate_parts(&[MESSAGE_PREFIX, id])}
            {(!optional).then(|| view! { <em class="mandatory">"*"</em> })}
            {help.then(|| view! { <HelpTooltip id=id example=example /> })}
        </label>
    }
}

#[component]
fn HelpTooltip(id: &'static str, example: Option<HelpExample>) -> impl IntoView {
    let text = translate_parts(&[MESSAGE_PREFIX, id, "help"]);
    let overlay = match (split_placeholder(&text, "example"), example) {
        (Some((before, after)), Some(ex)) => view! {
            {before.to_string()}
            <code>
                {ex.before}
                {(!ex.emphasis.is_empty()).then(|| view! { <strong>{ex.emphasis}</strong> })}
                {ex.after}
            </code>
            {after.to_string()}
        }
        .into_any(),
        _ => view! { {text.clone()} }.into_any(),
    };

    view! {
        <span class="help-tooltip spacer-left" tabindex="0">
            {icon("help")}
            <span class="help-tooltip__overlay help-tooltip__overlay--right" role="tooltip">
                {overlay}
            </span>
        </span>
    }
}

#[component]
pub fn TextField(
    spec: FieldSpec,
    #[prop(into)] value: Signal<String>,
    on_field_change: Callback<(BindingField, FieldValue)>,
) -> impl IntoView {
    let field = spec.field;

    view! {
        <div class="form-field">
            <FieldLabel id=spec.id optional=spec.optional help=spec.help example=spec.example />
            <Input
                id=spec.id
                class="input-super-large"
                max_length=MAX_TEXT_LENGTH
                value=value
                on_input=Callback::new(move |v: String| {
                    on_field_change.run((field, FieldValue::Text(v)));
                })
            />
        </div>
    }
}

/// Boolean field; always rendered as optional
#[component]
pub fn BooleanField(
    spec: FieldSpec,
    #[prop(into)] value: Signal<bool>,
    default: bool,
    on_field_change: Callback<(BindingField, FieldValue)>,
) -> impl IntoView {
    let field = spec.field;
    let note = Signal::derive(move || (value.get() == default).then(|| translate("settings.default")));

    view! {
        <div class="form-field">
            <FieldLabel id=spec.id optional=true help=spec.help example=spec.example />
            <Toggle
                id=spec.id
                checked=value
                note=note
                on_change=Callback::new(move |v: bool| {
                    on_field_change.run((field, FieldValue::Flag(v)));
                })
            />
        </div>
    }
}
