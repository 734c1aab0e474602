use std::rc::Rc;

use web_sys::{Element, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::chat::controller::TurnController;
use crate::chat::conversation::{ChatTurn, Phase, Role};
use crate::chat::scheduler::BrowserScheduler;
use crate::config::ChatConfig;

#[derive(Properties, PartialEq)]
pub struct ChatWidgetProps {
    #[prop_or_default]
    pub config: ChatConfig,
}

pub enum ChatWidgetMsg {
    Open,
    Close,
    SetInput(String),
    Submit,
    Restart,
    ConversationChanged,
}

pub struct ChatWidget {
    open: bool,
    input: String,
    controller: TurnController,
    messages_end: NodeRef,
    scroll_pending: bool,
}

impl Component for ChatWidget {
    type Message = ChatWidgetMsg;
    type Properties = ChatWidgetProps;

    fn create(ctx: &Context<Self>) -> Self {
        let controller = TurnController::new(
            &ctx.props().config,
            Rc::new(BrowserScheduler),
            ctx.link().callback(|_| ChatWidgetMsg::ConversationChanged),
        );

        Self {
            open: false,
            input: String::new(),
            controller,
            messages_end: NodeRef::default(),
            scroll_pending: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatWidgetMsg::Open => {
                self.open = true;
                self.scroll_pending = true;
                true
            }
            ChatWidgetMsg::Close => {
                self.open = false;
                true
            }
            ChatWidgetMsg::SetInput(value) => {
                self.input = value;
                true
            }
            ChatWidgetMsg::Submit => {
                // Whitespace-only input stays in the box, like any other rejected submit.
                if self.controller.submit_user_message(&self.input) {
                    self.input.clear();
                }
                true
            }
            ChatWidgetMsg::Restart => {
                self.controller.reset();
                false
            }
            ChatWidgetMsg::ConversationChanged => {
                self.scroll_pending = true;
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if !self.scroll_pending {
            return;
        }
        if let Some(end) = self.messages_end.cast::<Element>() {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            end.scroll_into_view_with_scroll_into_view_options(&options);
            self.scroll_pending = false;
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.controller.detach();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = &ctx.props().config;
        let turns = self.controller.turns();
        let awaiting = self.controller.phase() == Phase::AwaitingReply;

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ChatWidgetMsg::Submit
        });
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ChatWidgetMsg::SetInput(input.value())
        });

        html! {
            <>
                <button
                    class={classes!("chat-launcher", self.open.then(|| "hidden"))}
                    onclick={ctx.link().callback(|_| ChatWidgetMsg::Open)}
                    aria-label="Open chat"
                >
                    <svg class="icon-lg" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M8 10h.01M12 10h.01M16 10h.01M9 16H5a2 2 0 01-2-2V6a2 2 0 012-2h14a2 2 0 012 2v8a2 2 0 01-2 2h-5l-5 5v-5z" />
                    </svg>
                </button>

                if self.open {
                    <div class="chat-panel">
                        <div class="chat-header">
                            <div class="chat-identity">
                                <div class="chat-avatar">{ config.avatar_initial() }</div>
                                <div>
                                    <h3>{ &config.assistant_name }</h3>
                                    <p>{ &config.assistant_title }</p>
                                </div>
                            </div>
                            <div class="chat-header-actions">
                                <button
                                    class="chat-icon-button"
                                    onclick={ctx.link().callback(|_| ChatWidgetMsg::Restart)}
                                    aria-label="Start a new conversation"
                                    title="Start a new conversation"
                                >
                                    { "↺" }
                                </button>
                                <button
                                    class="chat-icon-button"
                                    onclick={ctx.link().callback(|_| ChatWidgetMsg::Close)}
                                    aria-label="Close chat"
                                >
                                    { "✕" }
                                </button>
                            </div>
                        </div>

                        <div class="chat-messages" aria-live="polite" aria-busy={awaiting.to_string()}>
                            { for turns.iter().map(render_turn) }

                            if self.controller.is_composing() {
                                <div class="chat-row assistant">
                                    <div class="chat-bubble typing">
                                        <span class="dot"></span>
                                        <span class="dot"></span>
                                        <span class="dot"></span>
                                    </div>
                                </div>
                            }

                            <div ref={self.messages_end.clone()}></div>
                        </div>

                        <form class="chat-form" {onsubmit}>
                            <div class="chat-input-row">
                                <input
                                    type="text"
                                    value={self.input.clone()}
                                    placeholder={config.input_placeholder.clone()}
                                    {oninput}
                                />
                                <button type="submit" class="chat-send" aria-label="Send">
                                    <svg class="icon-sm" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 19l9 2-9-18-9 18 9-2zm0 0v-8" />
                                    </svg>
                                </button>
                            </div>
                            <p class="chat-powered-by">{ &config.powered_by }</p>
                        </form>
                    </div>
                }

                <style>
                    {r#"
                    .chat-launcher {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 50;
                        width: 4rem;
                        height: 4rem;
                        border: none;
                        border-radius: 50%;
                        background: #c9a227;
                        color: #1e3a5f;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        cursor: pointer;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                        transform: scale(0);
                        animation: launcherIn 0.5s cubic-bezier(0.34, 1.56, 0.64, 1) 1s forwards;
                        transition: background 0.3s ease;
                    }

                    .chat-launcher:hover {
                        background: #ffffff;
                    }

                    .chat-launcher.hidden {
                        display: none;
                    }

                    @keyframes launcherIn {
                        to { transform: scale(1); }
                    }

                    .icon-lg { width: 2rem; height: 2rem; }
                    .icon-sm { width: 1.25rem; height: 1.25rem; }

                    .chat-panel {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 50;
                        width: 24rem;
                        max-width: calc(100vw - 3rem);
                        height: 500px;
                        background: #ffffff;
                        border: 1px solid #e5e7eb;
                        border-radius: 0.5rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        display: flex;
                        flex-direction: column;
                        overflow: hidden;
                        animation: panelIn 0.35s ease-out;
                    }

                    @keyframes panelIn {
                        from { opacity: 0; transform: translateY(100px) scale(0.9); }
                        to { opacity: 1; transform: translateY(0) scale(1); }
                    }

                    .chat-header {
                        background: #1e3a5f;
                        padding: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .chat-identity {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }

                    .chat-identity h3 {
                        margin: 0;
                        color: #ffffff;
                        font-weight: 500;
                    }

                    .chat-identity p {
                        margin: 0;
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 0.75rem;
                    }

                    .chat-avatar {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        background: #c9a227;
                        color: #1e3a5f;
                        font-weight: 700;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .chat-header-actions {
                        display: flex;
                        gap: 0.5rem;
                    }

                    .chat-icon-button {
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 1.1rem;
                        cursor: pointer;
                        transition: color 0.3s ease;
                    }

                    .chat-icon-button:hover {
                        color: #ffffff;
                    }

                    .chat-messages {
                        flex: 1;
                        overflow-y: auto;
                        padding: 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .chat-row {
                        display: flex;
                        animation: rowIn 0.3s ease-out;
                    }

                    .chat-row.user { justify-content: flex-end; }
                    .chat-row.assistant { justify-content: flex-start; }

                    @keyframes rowIn {
                        from { opacity: 0; transform: translateY(10px); }
                        to { opacity: 1; transform: translateY(0); }
                    }

                    .chat-bubble {
                        max-width: 80%;
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        font-size: 0.875rem;
                        line-height: 1.4;
                    }

                    .chat-bubble p {
                        margin: 0;
                    }

                    .chat-row.user .chat-bubble {
                        background: #1e3a5f;
                        color: #ffffff;
                        border-bottom-right-radius: 0;
                    }

                    .chat-row.assistant .chat-bubble {
                        background: #f3f4f6;
                        color: #1e3a5f;
                        border-bottom-left-radius: 0;
                    }

                    .chat-bubble.typing {
                        display: flex;
                        gap: 0.25rem;
                    }

                    .chat-bubble .dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: rgba(30, 58, 95, 0.4);
                        animation: bounce 1s infinite;
                    }

                    .chat-bubble .dot:nth-child(2) { animation-delay: 150ms; }
                    .chat-bubble .dot:nth-child(3) { animation-delay: 300ms; }

                    @keyframes bounce {
                        0%, 100% { transform: translateY(-25%); }
                        50% { transform: translateY(0); }
                    }

                    .chat-form {
                        padding: 1rem;
                        border-top: 1px solid #e5e7eb;
                    }

                    .chat-input-row {
                        display: flex;
                        gap: 0.5rem;
                    }

                    .chat-input-row input {
                        flex: 1;
                        border: 1px solid #d1d5db;
                        border-radius: 0.5rem;
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                    }

                    .chat-input-row input:focus {
                        outline: none;
                        border-color: #c9a227;
                    }

                    .chat-send {
                        background: #c9a227;
                        color: #1e3a5f;
                        border: none;
                        border-radius: 0.5rem;
                        padding: 0.5rem 1rem;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }

                    .chat-send:hover {
                        background: #1e3a5f;
                        color: #ffffff;
                    }

                    .chat-powered-by {
                        margin: 0.5rem 0 0;
                        font-size: 0.75rem;
                        color: #9ca3af;
                        text-align: center;
                    }
                    "#}
                </style>
            </>
        }
    }
}

fn render_turn(turn: &ChatTurn) -> Html {
    let side = match turn.role() {
        Role::User => "user",
        Role::Assistant => "assistant",
    };
    html! {
        <div class={classes!("chat-row", side)}>
            <div class="chat-bubble">
                <p>{ turn.text() }</p>
            </div>
        </div>
    }
}
