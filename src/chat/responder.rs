//! Canned replies for the chat widget.
//!
//! Rules are checked in order and the first rule with a keyword contained in
//! the lowercased utterance wins. Containment is plain substring matching, so
//! "sue" also fires on "issue".

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub topic: &'static str,
    /// Lowercase.
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

impl KeywordRule {
    fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|keyword| normalized.contains(keyword))
    }
}

pub const FIRM_RULES: &[KeywordRule] = &[
    KeywordRule {
        topic: "cannabis",
        keywords: &["cannabis", "marijuana"],
        reply: "Our Cannabis Law team has an exceptional track record - we're the only firm to secure cannabis dispensary approvals in Miami. Would you like me to connect you with our Cannabis Law group, led by Irina Dashevsky in Chicago?",
    },
    KeywordRule {
        topic: "real estate",
        keywords: &["real estate", "property"],
        reply: "Real Estate is one of our core practice areas. We represent buyers, sellers, developers, lenders, and investors across all property types. Which office location would be most convenient for you?",
    },
    KeywordRule {
        topic: "litigation",
        keywords: &["litigation", "lawsuit", "sue"],
        reply: "Our Litigation team is nationally recognized. We recently secured a major victory defeating a $123 million class action. Can you tell me a bit more about your matter so I can direct you to the right attorney?",
    },
    KeywordRule {
        topic: "immigration",
        keywords: &["immigration", "visa", "h1b"],
        reply: "Our Immigration practice handles both business and family immigration matters, including H-1B, EB-5, and naturalization. Patricia Gannon chairs our Immigration group in New York. Would you like to schedule a consultation?",
    },
    KeywordRule {
        topic: "offices",
        keywords: &["office", "location"],
        reply: "We have 22 offices nationwide including Atlanta, Chicago, Denver, Fort Lauderdale, Las Vegas, Los Angeles, Miami, New York, Orlando, and West Palm Beach. Which location is most convenient for you?",
    },
    KeywordRule {
        topic: "attorneys",
        keywords: &["attorney", "lawyer"],
        reply: "With over 215 attorneys across 41 practice areas, we can help with virtually any legal matter. Could you tell me what type of legal assistance you're looking for?",
    },
];

pub const FALLBACK_REPLY: &str = "I'd be happy to help you with that. Could you provide a bit more detail about your legal needs? Our firm handles Real Estate, Litigation, Corporate, Cannabis, Immigration, Hospitality, and many other practice areas.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Responder {
    rules: &'static [KeywordRule],
    fallback: &'static str,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(FIRM_RULES, FALLBACK_REPLY)
    }
}

impl Responder {
    pub const fn new(rules: &'static [KeywordRule], fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    pub fn matched_rule(&self, utterance: &str) -> Option<&'static KeywordRule> {
        let normalized = utterance.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&normalized))
    }

    /// Callers filter out blank input before it gets here.
    pub fn reply(&self, utterance: &str) -> &'static str {
        match self.matched_rule(utterance) {
            Some(rule) => {
                debug!("chat: matched '{}' rule", rule.topic);
                rule.reply
            }
            None => {
                debug!("chat: no rule matched, using fallback");
                self.fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply_for(topic: &str) -> &'static str {
        FIRM_RULES.iter().find(|r| r.topic == topic).unwrap().reply
    }

    #[test]
    fn same_input_same_reply() {
        let responder = Responder::default();
        let input = "Do you handle property disputes?";
        assert_eq!(responder.reply(input), responder.reply(input));
    }

    #[test]
    fn earlier_rule_wins_on_multi_topic_input() {
        let responder = Responder::default();
        assert_eq!(
            responder.reply("I have a cannabis and litigation dispute"),
            reply_for("cannabis")
        );
        assert_eq!(
            responder.reply("Need a lawyer for my visa"),
            reply_for("immigration")
        );
    }

    #[test]
    fn matching_ignores_case() {
        let responder = Responder::default();
        assert_eq!(responder.reply("CANNABIS"), responder.reply("cannabis"));
        assert_eq!(responder.reply("Real Estate closing"), reply_for("real estate"));
        assert_eq!(responder.reply("My H1B petition"), reply_for("immigration"));
    }

    #[test]
    fn unknown_topic_gets_fallback() {
        let responder = Responder::default();
        assert_eq!(responder.reply("what is your favorite color"), FALLBACK_REPLY);
        assert!(responder.matched_rule("what is your favorite color").is_none());
    }

    #[test]
    fn keywords_match_as_substrings() {
        let responder = Responder::default();
        assert_eq!(responder.reply("I have an issue with my landlord"), reply_for("litigation"));
        assert_eq!(responder.reply("Which offices are open?"), reply_for("offices"));
        assert_eq!(responder.reply("attorneys in Denver"), reply_for("attorneys"));
    }

    #[test]
    fn every_rule_is_reachable_by_its_own_keywords() {
        let responder = Responder::default();
        for rule in FIRM_RULES {
            for keyword in rule.keywords {
                let hit = responder.matched_rule(keyword).unwrap();
                assert_eq!(hit.topic, rule.topic, "keyword {keyword:?}");
            }
        }
    }

    #[test]
    fn custom_rule_set_is_respected() {
        const RULES: &[KeywordRule] = &[KeywordRule {
            topic: "hours",
            keywords: &["open"],
            reply: "We are open 9 to 5.",
        }];
        let responder = Responder::new(RULES, "Sorry?");
        assert_eq!(responder.reply("When are you OPEN"), "We are open 9 to 5.");
        assert_eq!(responder.reply("cannabis"), "Sorry?");
    }
}
