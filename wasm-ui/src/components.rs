//! UI components for the converter page.

use yew::prelude::*;

use crate::theme::Theme;

/// Top bar with the title and theme toggle.
#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let on_click = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    html! {
        <nav class="navbar">
            <span class="title">{ "YAML" }</span>
            <button class="theme-button" onclick={on_click}>
                { props.theme.toggle_label() }
            </button>
        </nav>
    }
}

/// Single-line input for the `$schema` override.
#[derive(Properties, PartialEq)]
pub struct SchemaUrlInputProps {
    pub value: String,
    pub on_change: Callback<String>,
}

#[function_component(SchemaUrlInput)]
pub fn schema_url_input(props: &SchemaUrlInputProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    html! {
        <div class="schema-url">
            <input
                id="schema-url"
                name="schema-url"
                placeholder="Schema URL"
                value={props.value.clone()}
                oninput={on_input}
                spellcheck="false"
            />
        </div>
    }
}

/// Text panel with a copy button.
///
/// Editable when `on_change` is set, read-only otherwise.
#[derive(Properties, PartialEq)]
pub struct TextPanelProps {
    pub id: AttrValue,
    pub placeholder: AttrValue,
    pub value: String,
    #[prop_or_default]
    pub on_change: Option<Callback<String>>,
    pub on_copy: Callback<String>,
}

#[function_component(TextPanel)]
pub fn text_panel(props: &TextPanelProps) -> Html {
    let on_input = props.on_change.clone().map(|on_change| {
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    });

    let on_copy_click = {
        let on_copy = props.on_copy.clone();
        let value = props.value.clone();
        Callback::from(move |_: MouseEvent| on_copy.emit(value.clone()))
    };

    html! {
        <div class="panel">
            <button type="button" class="copy-button" onclick={on_copy_click}>
                { "📋" }
            </button>
            <textarea
                id={props.id.clone()}
                name={props.id.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={on_input}
                readonly={props.on_change.is_none()}
                spellcheck="false"
            />
        </div>
    }
}
