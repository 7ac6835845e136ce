#![allow(non_snake_case)]

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

#[derive(PartialEq, Props)]
pub struct ContentProps {
    content: String,
}

pub fn UserMessage(cx: Scope<ContentProps>) -> Element {
    cx.render(rsx!(
        div {
            class: "chat-row user-row",
            div {
                class: "chat-message user-message",
                "{cx.props.content}"
            }
        }
    ))
}

pub fn AgentMessage(cx: Scope<ContentProps>) -> Element {
    cx.render(rsx!(
        div {
            class: "chat-row agent-row",
            div {
                class: "chat-message agent-message",
                "{cx.props.content}"
            }
        }
    ))
}

pub fn Loading(cx: Scope) -> Element {
    cx.render(rsx!(
        div {
            class: "chat-row agent-row",
            div {
                class: "chat-message agent-message",
                div {
                    class: "spinner",
                }
            }
        }
    ))
}

pub fn EmptyState(cx: Scope) -> Element {
    cx.render(rsx!(
        div {
            class: "empty-state",
            "Ask me anything"
        }
    ))
}

#[derive(Props)]
pub struct DraftProps<'a> {
    draft: &'a UseRef<String>,
    on_submit: EventHandler<'a, KeyboardEvent>,
}

/// Single-line input bound to `draft`; Enter submits.
pub fn UserInput<'a>(cx: Scope<'a, DraftProps<'a>>) -> Element<'a> {
    let draft = cx.props.draft;
    cx.render(rsx!(input {
        id: "user-input",
        r#type: "text",
        placeholder: "Enter your message",
        value: "{draft.read()}",
        oninput: move |e| {
            draft.set(e.value.clone());
        },
        onkeydown: move |e: KeyboardEvent| {
            if let Key::Enter = e.data.key() {
                cx.props.on_submit.call(e);
            }
        },
    }))
}
