use log::{info, Level};
use yew::prelude::*;

mod config;
mod chat {
    pub mod controller;
    pub mod conversation;
    pub mod responder;
    pub mod scheduler;
    #[cfg(test)]
    pub mod testing;
}
mod components {
    pub mod chat_widget;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod nav;
    pub mod news;
    pub mod practice_areas;
    pub mod stats;
}
mod pages {
    pub mod landing;
}

use components::chat_widget::ChatWidget;
use config::ChatConfig;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub chat_config: ChatConfig,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <>
            <Landing />
            <ChatWidget config={props.chat_config.clone()} />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {e}").into());
    }

    let chat_config = ChatConfig::load();
    info!("Starting site, chat assistant {}", chat_config.assistant_name);
    yew::Renderer::<App>::with_props(AppProps { chat_config }).render();
}
