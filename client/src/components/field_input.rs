//! One labelled form control, chosen from a field's [`Input`] kind.

#[cfg(test)]
#[path = "field_input_test.rs"]
mod field_input_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use records::{FieldSpec, Input, RefOption};

/// `type` attribute for plain `<input>` kinds.
pub fn html_input_type(input: Input) -> &'static str {
    match input {
        Input::Email => "email",
        Input::Date => "date",
        Input::Number => "number",
        Input::Text | Input::Choice(_) | Input::Reference(_) => "text",
    }
}

/// Display text for a fixed choice value (`"late"` -> `"Late"`).
pub fn choice_label(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

#[component]
pub fn FieldInput(
    spec: FieldSpec,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<RefOption>>,
    #[prop(into)] invalid: Signal<bool>,
    on_input: Callback<String>,
) -> impl IntoView {
    let control = match spec.input {
        Input::Choice(choices) => view! {
            <select
                class="field__input"
                name=spec.name
                prop:value=move || value.get()
                on:change=move |ev| on_input.run(event_target_value(&ev))
            >
                <option value="">"Select..."</option>
                {choices
                    .iter()
                    .map(|choice| view! { <option value=*choice>{choice_label(choice)}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        Input::Reference(_) => view! {
            <select
                class="field__input"
                name=spec.name
                prop:value=move || value.get()
                on:change=move |ev| on_input.run(event_target_value(&ev))
            >
                <option value="">"Select..."</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|option| view! { <option value=option.id.to_string()>{option.label}</option> })
                        .collect_view()
                }}
            </select>
        }
        .into_any(),
        other => view! {
            <input
                class="field__input"
                type=html_input_type(other)
                name=spec.name
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <label class="field" class:field--invalid=move || invalid.get()>
            <span class="field__label">{spec.label}</span>
            {control}
        </label>
    }
}
