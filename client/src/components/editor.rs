//! Rich-text editor backed by a `contenteditable` area.
//!
//! DESIGN
//! ======
//! Formatting goes through the browser's `document.execCommand`, which keeps
//! the component free of a document model: the area's `innerHTML` is the
//! value. The external `value` is only written back into the area when it
//! differs from the current markup, so typing never resets the caret.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use leptos::prelude::*;

use crate::util::browser;

/// Toolbar actions, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorCommand {
    Bold,
    Italic,
    UnorderedList,
    OrderedList,
    Link,
    ClearFormat,
}

impl EditorCommand {
    pub const ALL: [Self; 6] = [
        Self::Bold,
        Self::Italic,
        Self::UnorderedList,
        Self::OrderedList,
        Self::Link,
        Self::ClearFormat,
    ];

    /// `execCommand` name.
    pub fn exec_name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::UnorderedList => "insertUnorderedList",
            Self::OrderedList => "insertOrderedList",
            Self::Link => "createLink",
            Self::ClearFormat => "removeFormat",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Bold => "B",
            Self::Italic => "I",
            Self::UnorderedList => "• List",
            Self::OrderedList => "1. List",
            Self::Link => "Link",
            Self::ClearFormat => "Clear",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::UnorderedList => "Bulleted list",
            Self::OrderedList => "Numbered list",
            Self::Link => "Insert link",
            Self::ClearFormat => "Clear formatting",
        }
    }

    /// Resolve the command argument. `None` means the command is skipped.
    pub fn argument(self, ask: impl FnOnce(&str) -> Option<String>) -> Option<String> {
        match self {
            Self::Link => ask("Enter URL").filter(|url| !url.trim().is_empty()),
            _ => Some(String::new()),
        }
    }
}

/// Whether an external value must be pushed into the area.
pub fn needs_resync(current_markup: &str, value: &str) -> bool {
    current_markup != value
}

#[component]
pub fn Editor(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let area = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        let value = value.get();
        sync_area(area, &value);
    });

    let emit = move || {
        if let Some(html) = area_markup(area) {
            on_change.run(html);
        }
    };

    let run_command = move |command: EditorCommand| {
        let Some(argument) = command.argument(browser::prompt) else {
            return;
        };
        exec(area, command, &argument);
        emit();
    };

    view! {
        <div class="editor">
            <div class="editor__toolbar">
                {EditorCommand::ALL
                    .into_iter()
                    .map(|command| {
                        view! {
                            <button
                                type="button"
                                class="editor__button"
                                title=command.title()
                                on:mousedown=move |ev| ev.prevent_default()
                                on:click=move |_| run_command(command)
                            >
                                {command.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div
                node_ref=area
                class="editor__area"
                contenteditable="true"
                data-placeholder=placeholder
                on:input=move |_| emit()
            ></div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn sync_area(area: NodeRef<leptos::html::Div>, value: &str) {
    if let Some(el) = area.get() {
        if needs_resync(&el.inner_html(), value) {
            el.set_inner_html(value);
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn sync_area(area: NodeRef<leptos::html::Div>, value: &str) {
    let _ = (area, value);
}

#[cfg(feature = "hydrate")]
fn area_markup(area: NodeRef<leptos::html::Div>) -> Option<String> {
    area.get().map(|el| el.inner_html())
}

#[cfg(not(feature = "hydrate"))]
fn area_markup(area: NodeRef<leptos::html::Div>) -> Option<String> {
    let _ = area;
    None
}

#[cfg(feature = "hydrate")]
fn exec(area: NodeRef<leptos::html::Div>, command: EditorCommand, argument: &str) {
    use wasm_bindgen::JsCast;

    if let Some(el) = area.get() {
        let _ = el.focus();
    }
    let Some(doc) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
    else {
        return;
    };
    if let Err(e) = doc.exec_command_with_show_ui_and_value(command.exec_name(), false, argument) {
        log::warn!("execCommand {} failed: {e:?}", command.exec_name());
    }
}

#[cfg(not(feature = "hydrate"))]
fn exec(area: NodeRef<leptos::html::Div>, command: EditorCommand, argument: &str) {
    let _ = (area, command, argument);
}
