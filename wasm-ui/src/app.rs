//! Main application component.

use gloo::console;
use yaml_schema_rs::{Derived, INITIAL_YAML, try_derive};
use yew::prelude::*;

use crate::clipboard::copy_to_clipboard;
use crate::components::{NavBar, SchemaUrlInput, TextPanel};
use crate::theme::Theme;

/// Editable inputs; everything else on the page is derived from these.
#[derive(Clone, PartialEq)]
pub struct AppState {
    /// YAML document text.
    pub yaml_text: String,
    /// `$schema` override, empty for the default.
    pub schema_url: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            yaml_text: INITIAL_YAML.to_string(),
            schema_url: String::new(),
        }
    }
}

/// Derive both outputs, reporting failures on the browser console.
fn derive_outputs(yaml_text: &str, schema_url: &str) -> Derived {
    try_derive(yaml_text, schema_url).unwrap_or_else(|e| {
        console::error!(e.to_string());
        Derived::invalid()
    })
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(AppState::default);
    let theme = use_state(Theme::load);

    let derived = use_memo(
        (state.yaml_text.clone(), state.schema_url.clone()),
        |(yaml_text, schema_url)| derive_outputs(yaml_text, schema_url),
    );

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = theme.toggled();
            next.store();
            theme.set(next);
        })
    };

    let on_yaml_change = {
        let state = state.clone();
        Callback::from(move |text: String| {
            let mut new_state = (*state).clone();
            new_state.yaml_text = text;
            state.set(new_state);
        })
    };

    let on_schema_url_change = {
        let state = state.clone();
        Callback::from(move |url: String| {
            let mut new_state = (*state).clone();
            new_state.schema_url = url;
            state.set(new_state);
        })
    };

    let on_copy = Callback::from(|text: String| copy_to_clipboard(&text));

    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <div class="app">
            <NavBar theme={*theme} on_toggle_theme={on_toggle_theme} />

            <main class="main">
                <SchemaUrlInput
                    value={state.schema_url.clone()}
                    on_change={on_schema_url_change}
                />

                <div class="panels">
                    <TextPanel
                        id="yaml"
                        placeholder="YAML"
                        value={state.yaml_text.clone()}
                        on_change={Some(on_yaml_change)}
                        on_copy={on_copy.clone()}
                    />
                    <TextPanel
                        id="json"
                        placeholder="JSON"
                        value={derived.json.clone()}
                        on_copy={on_copy.clone()}
                    />
                    <TextPanel
                        id="json-schema"
                        placeholder="JSON Schema"
                        value={derived.schema.clone()}
                        on_copy={on_copy}
                    />
                </div>
            </main>

            <footer class="footer">
                <div class="footer-row">
                    { format!("\u{00A9} YAML {year}") }
                </div>
                <div class="footer-row footer-build">
                    { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                </div>
            </footer>
        </div>
    }
}
