use super::fields::{BooleanField, FieldLabel, TextField};
use super::plan::{
    actions, provider_fields, screen, selected_alm, BindingFlags, FieldKind, FieldSpec, Screen,
    SubmitState,
};
use crate::shared::components::ui::{Button, ButtonVariant, Select};
use crate::shared::config::DEFAULT_DOCUMENTATION_URL;
use crate::shared::icons::icon;
use crate::shared::l10n::{split_placeholder, translate};
use contracts::domain::a001_alm_settings::AlmSettingsInstance;
use contracts::domain::a002_project_alm_binding::{BindingField, FieldValue, ProjectAlmBinding};
use leptos::prelude::*;
use thaw::*;

/// Project binding form for pull-request decoration.
///
/// Stateless: everything it shows comes from the props, and every user
/// action is reported through the callbacks.
#[component]
pub fn AlmBindingForm(
    #[prop(into)] form_data: Signal<ProjectAlmBinding>,
    #[prop(into)] instances: Signal<Vec<AlmSettingsInstance>>,
    #[prop(into)] is_changed: Signal<bool>,
    #[prop(into)] is_configured: Signal<bool>,
    #[prop(into)] is_valid: Signal<bool>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] success: Signal<bool>,
    on_field_change: Callback<(BindingField, FieldValue)>,
    on_reset: Callback<()>,
    on_submit: Callback<()>,
    /// Target of the "learn more" link shown when no instance exists
    #[prop(optional, into)]
    documentation_url: MaybeProp<String>,
) -> impl IntoView {
    let current_screen = Memo::new(move |_| screen(loading.get(), instances.with(Vec::len)));
    let fields = Memo::new(move |_| {
        form_data.with(|form| instances.with(|list| provider_fields(selected_alm(form, list))))
    });
    let action_state = Memo::new(move |_| {
        actions(BindingFlags {
            is_changed: is_changed.get(),
            is_configured: is_configured.get(),
            is_valid: is_valid.get(),
            loading: loading.get(),
            saving: saving.get(),
            success: success.get(),
        })
    });

    move || match current_screen.get() {
        Screen::Loading => view! {
            <div class="alm-binding__loading">
                <Spinner />
            </div>
        }
        .into_any(),
        Screen::NoInstances => view! { <NoInstancesMessage documentation_url=documentation_url /> }.into_any(),
        Screen::Form => {
            let selected_key = Signal::derive(move || form_data.with(|f| f.key.clone().unwrap_or_default()));
            let options = Signal::derive(move || {
                instances.with(|list| {
                    list.iter()
                        .map(|i| (i.key.clone(), i.option_label()))
                        .collect::<Vec<_>>()
                })
            });

            view! {
                <div>
                    <header class="page-header">
                        <h1 class="page-title">{translate("settings.pr_decoration.binding.title")}</h1>
                    </header>

                    <div class="markdown small spacer-top big-spacer-bottom">
                        {translate("settings.pr_decoration.binding.description")}
                    </div>

                    <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }>
                        <div class="form-field">
                            <FieldLabel id="name" example=None />
                            <Select
                                id="name"
                                class="abs-width-400"
                                value=selected_key
                                options=options
                                placeholder=translate("settings.pr_decoration.binding.form.select")
                                on_change=Callback::new(move |key: String| {
                                    on_field_change.run((BindingField::Key, FieldValue::Text(key)));
                                })
                            />
                        </div>

                        <For
                            each=move || fields.get()
                            key=|spec| spec.id
                            children=move |spec| provider_field(spec, form_data, on_field_change)
                        />

                        <div class="display-flex-center">
                            <Show when=move || action_state.get().saving_spinner>
                                <span class="spacer-right">
                                    <Spinner size=SpinnerSize::Small />
                                </span>
                            </Show>
                            <Show when=move || action_state.get().submit != SubmitState::Hidden>
                                <Button
                                    variant=ButtonVariant::Success
                                    submit=true
                                    disabled=Signal::derive(move || {
                                        action_state.get().submit == SubmitState::Disabled
                                    })
                                    data_test="project-settings__alm-save"
                                >
                                    {translate("save")}
                                </Button>
                            </Show>
                            <Show when=move || action_state.get().reset_visible>
                                <Button
                                    variant=ButtonVariant::Secondary
                                    disabled=false
                                    on_click=Callback::new(move |_| on_reset.run(()))
                                    data_test="project-settings__alm-reset"
                                >
                                    {translate("reset_verb")}
                                </Button>
                            </Show>
                            <Show when=move || action_state.get().success_visible>
                                <span class="text-success display-flex-center">
                                    <span class="spacer-right">{icon("check-circle")}</span>
                                    {translate("settings.state.saved")}
                                </span>
                            </Show>
                        </div>
                    </form>
                </div>
            }
            .into_any()
        }
    }
}

fn provider_field(
    spec: FieldSpec,
    form_data: Signal<ProjectAlmBinding>,
    on_field_change: Callback<(BindingField, FieldValue)>,
) -> AnyView {
    match spec.kind {
        FieldKind::Text => {
            let value = Signal::derive(move || form_data.with(|f| f.text(spec.field)));
            view! { <TextField spec=spec value=value on_field_change=on_field_change /> }.into_any()
        }
        FieldKind::Boolean { default } => {
            let value = Signal::derive(move || form_data.with(|f| spec.flag(f)));
            view! {
                <BooleanField spec=spec value=value default=default on_field_change=on_field_change />
            }
            .into_any()
        }
    }
}

#[component]
fn NoInstancesMessage(documentation_url: MaybeProp<String>) -> impl IntoView {
    let message = translate("settings.pr_decoration.binding.no_bindings");
    let (before, after) = match split_placeholder(&message, "link") {
        Some((before, after)) => (before.to_string(), after.to_string()),
        None => (message.clone(), String::new()),
    };
    let href = move || {
        documentation_url
            .get()
            .unwrap_or_else(|| DEFAULT_DOCUMENTATION_URL.to_string())
    };

    view! {
        <div>
            <div class="spacer-top huge-spacer-bottom">
                <MessageBar intent=MessageBarIntent::Info>
                    <span>
                        {before}
                        <a href=href>{translate("learn_more")}</a>
                        {after}
                    </span>
                </MessageBar>
            </div>
        </div>
    }
}
