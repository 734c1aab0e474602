use std::time::Duration;

use log::warn;
use serde::Deserialize;

pub const CHAT_CONFIG_ELEMENT_ID: &str = "chat-config";

pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;
pub const HERO_ROTATION_MS: u32 = 5000;
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_TICK_MS: u32 = 16;

/// Copy and timing for the chat widget. Every field can be overridden from the
/// host page; anything left out keeps its default.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub assistant_name: String,
    pub assistant_title: String,
    pub greeting: String,
    pub reply_delay_ms: u64,
    pub input_placeholder: String,
    pub powered_by: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            assistant_name: "Emma".to_string(),
            assistant_title: "AI Legal Assistant".to_string(),
            greeting: "Hello! I'm Emma, your virtual legal assistant at Greenspoon Marder. How may I help you today?".to_string(),
            reply_delay_ms: 1500,
            input_placeholder: "Type your message...".to_string(),
            powered_by: "Powered by U Botika AI".to_string(),
        }
    }
}

impl ChatConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// Reads `<script type="application/json" id="chat-config">` from the page.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CHAT_CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Ignoring invalid #{} block: {}", CHAT_CONFIG_ELEMENT_ID, e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }

    pub fn avatar_initial(&self) -> String {
        self.assistant_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = ChatConfig::from_json(r#"{ "assistant_name": "Ava", "reply_delay_ms": 300 }"#).unwrap();
        assert_eq!(config.assistant_name, "Ava");
        assert_eq!(config.reply_delay(), Duration::from_millis(300));
        assert_eq!(config.greeting, ChatConfig::default().greeting);
        assert_eq!(config.powered_by, "Powered by U Botika AI");
    }

    #[test]
    fn empty_object_is_the_default_config() {
        assert_eq!(ChatConfig::from_json("{}").unwrap(), ChatConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ChatConfig::from_json("{ assistant_name: ").is_err());
        assert!(ChatConfig::from_json(r#"{ "reply_delay_ms": "soon" }"#).is_err());
    }

    #[test]
    fn default_delay_is_a_second_and_a_half() {
        assert_eq!(ChatConfig::default().reply_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn avatar_initial_is_first_letter_uppercased() {
        let mut config = ChatConfig::default();
        assert_eq!(config.avatar_initial(), "E");
        config.assistant_name = "olivia".to_string();
        assert_eq!(config.avatar_initial(), "O");
        config.assistant_name.clear();
        assert_eq!(config.avatar_initial(), "");
    }
}
