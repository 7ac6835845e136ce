use dioxus::prelude::*;
use tracing::warn;

use super::components::*;
use crate::chat_core::{Bot, Message, Role};

pub fn app(cx: Scope<Bot>) -> Element {
    let bot = cx.props;
    let draft = use_ref(cx, String::new);
    let messages = use_ref(cx, Vec::<Message>::new);
    let send_lock = use_state(cx, || false);
    let loading = use_state(cx, || false);

    let send = move |_| {
        if *send_lock.get() {
            return;
        }
        let tmp = draft.read().clone();
        if tmp.is_empty() {
            return;
        }
        send_lock.set(true);
        loading.set(true);
        draft.set(String::new());
        messages.write().push(Message::user(tmp.trim()));

        cx.spawn({
            to_owned![send_lock, loading, messages, bot];

            async move {
                match bot.chat(&tmp).await {
                    Ok(_) => messages.set(bot.log().snapshot()),
                    Err(err) => {
                        warn!(error = %err, "chat session unavailable");
                        messages
                            .write()
                            .push(Message::agent(format!("Error: {}", err)));
                    }
                }

                loading.set(false);
                send_lock.set(false);
            }
        })
    };

    let send_enter = move |_: KeyboardEvent| {
        send(0);
    };

    let send_button = move |_| {
        send(0);
    };

    cx.render(rsx!(
        style { include_str!("./style.css") }
        div {
            id: "header",
            h1 {"RANA... CHATBOT"}
        }
        div {
            id: "chat-window",
            class: "chat-window",
            if messages.read().is_empty() {
                rsx!(EmptyState {})
            }
            for msg in messages.read().iter() {
                match msg.role() {
                    Role::User => rsx!(UserMessage { content: msg.text().to_owned() }),
                    Role::Agent => rsx!(AgentMessage { content: msg.text().to_owned() }),
                }
            }
            if *loading.get() {
                rsx!(Loading {})
            }
        }
        div {
            id: "input-area",
            UserInput {
                draft: draft,
                on_submit: send_enter,
            }
            button {
                id: "send-button",
                onclick: send_button, "Send" }
        }
    ))
}
