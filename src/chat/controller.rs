use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use log::debug;
use yew::Callback;

use super::conversation::{ChatTurn, ConversationState, Phase};
use super::responder::Responder;
use super::scheduler::Scheduler;
use crate::config::ChatConfig;

struct Session {
    state: ConversationState,
    // Bumped by reset/detach so replies scheduled earlier are dropped.
    epoch: u64,
}

/// Sequences the conversation: user turn now, canned reply after the delay.
///
/// There is no input lock. Every accepted submission schedules its own reply,
/// and replies land in the order their timers fire.
pub struct TurnController {
    session: Rc<RefCell<Session>>,
    responder: Responder,
    scheduler: Rc<dyn Scheduler>,
    greeting: String,
    reply_delay: Duration,
    on_change: Callback<()>,
}

impl TurnController {
    pub fn new(config: &ChatConfig, scheduler: Rc<dyn Scheduler>, on_change: Callback<()>) -> Self {
        Self::with_responder(config, Responder::default(), scheduler, on_change)
    }

    pub fn with_responder(
        config: &ChatConfig,
        responder: Responder,
        scheduler: Rc<dyn Scheduler>,
        on_change: Callback<()>,
    ) -> Self {
        Self {
            session: Rc::new(RefCell::new(Session {
                state: ConversationState::seeded(&config.greeting),
                epoch: 0,
            })),
            responder,
            scheduler,
            greeting: config.greeting.clone(),
            reply_delay: config.reply_delay(),
            on_change,
        }
    }

    /// Returns false when the trimmed text is empty; nothing changes then.
    pub fn submit_user_message(&self, text: &str) -> bool {
        let utterance = text.trim();
        if utterance.is_empty() {
            return false;
        }

        let epoch = {
            let mut session = self.session.borrow_mut();
            session.state.push_user(utterance);
            session.epoch
        };
        self.on_change.emit(());

        let session = Rc::clone(&self.session);
        let responder = self.responder;
        let on_change = self.on_change.clone();
        let utterance = utterance.to_owned();
        self.scheduler.schedule(
            self.reply_delay,
            Box::new(move || {
                {
                    let mut session = session.borrow_mut();
                    if session.epoch != epoch {
                        debug!("chat: dropping reply from a previous session");
                        return;
                    }
                    session.state.push_reply(responder.reply(&utterance));
                }
                on_change.emit(());
            }),
        );
        true
    }

    pub fn reset(&self) {
        {
            let mut session = self.session.borrow_mut();
            session.state = ConversationState::seeded(&self.greeting);
            session.epoch += 1;
        }
        self.on_change.emit(());
    }

    /// Stops any scheduled reply from landing. Called when the widget unmounts.
    pub fn detach(&self) {
        self.session.borrow_mut().epoch += 1;
    }

    pub fn turns(&self) -> Vec<ChatTurn> {
        self.session.borrow().state.turns().to_vec()
    }

    pub fn is_composing(&self) -> bool {
        self.session.borrow().state.is_composing()
    }

    pub fn phase(&self) -> Phase {
        self.session.borrow().state.phase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::conversation::Role;
    use crate::chat::responder::{FALLBACK_REPLY, FIRM_RULES};
    use crate::chat::testing::ManualScheduler;
    use std::cell::Cell;

    const DELAY: Duration = Duration::from_millis(1500);

    struct Harness {
        controller: TurnController,
        scheduler: Rc<ManualScheduler>,
        changes: Rc<Cell<usize>>,
    }

    fn harness() -> Harness {
        let scheduler = Rc::new(ManualScheduler::new());
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        let controller = TurnController::new(
            &ChatConfig::default(),
            scheduler.clone(),
            Callback::from(move |_| counter.set(counter.get() + 1)),
        );
        Harness { controller, scheduler, changes }
    }

    #[test]
    fn starts_with_the_greeting() {
        let h = harness();
        let turns = h.controller.turns();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].role(), Role::Assistant);
        assert_eq!(turns[0].text(), ChatConfig::default().greeting);
        assert_eq!(h.controller.phase(), Phase::Idle);
    }

    #[test]
    fn submit_appends_user_turn_then_reply_after_delay() {
        let h = harness();

        assert!(h.controller.submit_user_message("Hello"));
        let turns = h.controller.turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[1], ChatTurn::user("Hello"));
        assert!(h.controller.is_composing());
        assert_eq!(h.controller.phase(), Phase::AwaitingReply);

        assert_eq!(h.scheduler.advance(DELAY - Duration::from_millis(1)), 0);
        assert_eq!(h.controller.turns().len(), 2);
        assert!(h.controller.is_composing());

        assert_eq!(h.scheduler.advance(Duration::from_millis(1)), 1);
        let turns = h.controller.turns();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[2], ChatTurn::assistant(FALLBACK_REPLY));
        assert!(!h.controller.is_composing());
        assert_eq!(h.changes.get(), 2);
    }

    #[test]
    fn user_text_is_stored_trimmed() {
        let h = harness();
        h.controller.submit_user_message("  visa question \n");
        assert_eq!(h.controller.turns()[1].text(), "visa question");
        h.scheduler.advance(DELAY);
        assert_eq!(h.controller.turns()[2].text(), FIRM_RULES[3].reply);
    }

    #[test]
    fn blank_submission_is_ignored() {
        let h = harness();
        assert!(!h.controller.submit_user_message("   "));
        assert!(!h.controller.submit_user_message(""));
        assert_eq!(h.controller.turns().len(), 1);
        assert!(!h.controller.is_composing());
        assert_eq!(h.scheduler.pending(), 0);
        assert_eq!(h.changes.get(), 0);
    }

    #[test]
    fn blank_submission_while_awaiting_leaves_composing_on() {
        let h = harness();
        h.controller.submit_user_message("lawsuit");
        assert!(!h.controller.submit_user_message("\t"));
        assert!(h.controller.is_composing());
        assert_eq!(h.scheduler.pending(), 1);
    }

    #[test]
    fn overlapping_submissions_each_get_a_reply_in_order() {
        let h = harness();
        h.controller.submit_user_message("cannabis license");
        h.scheduler.advance(Duration::from_millis(500));
        h.controller.submit_user_message("where is your office");

        let turns = h.controller.turns();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[1].role(), Role::User);
        assert_eq!(turns[2].role(), Role::User);

        h.scheduler.advance(Duration::from_millis(1000));
        assert_eq!(h.controller.turns().len(), 4);
        assert!(h.controller.is_composing());

        h.scheduler.advance(Duration::from_millis(500));
        let texts: Vec<_> = h.controller.turns().iter().map(|t| t.text().to_string()).collect();
        assert_eq!(texts[3], FIRM_RULES[0].reply);
        assert_eq!(texts[4], FIRM_RULES[4].reply);
        assert!(!h.controller.is_composing());
    }

    #[test]
    fn reset_restores_greeting_and_drops_pending_replies() {
        let h = harness();
        h.controller.submit_user_message("property");
        h.scheduler.advance(DELAY);
        h.controller.submit_user_message("attorney");

        h.controller.reset();
        assert_eq!(h.controller.turns(), vec![ChatTurn::assistant(ChatConfig::default().greeting)]);
        assert!(!h.controller.is_composing());

        h.scheduler.advance(DELAY);
        assert_eq!(h.controller.turns().len(), 1);
        assert!(!h.controller.is_composing());

        h.controller.submit_user_message("attorney");
        h.scheduler.advance(DELAY);
        assert_eq!(h.controller.turns()[2].text(), FIRM_RULES[5].reply);
    }

    #[test]
    fn detached_controller_ignores_late_replies() {
        let h = harness();
        h.controller.submit_user_message("Hello");
        h.controller.detach();
        let before = h.changes.get();

        assert_eq!(h.scheduler.advance(DELAY), 1);
        assert_eq!(h.controller.turns().len(), 2);
        assert_eq!(h.changes.get(), before);
    }

    #[test]
    fn honours_configured_delay() {
        let scheduler = Rc::new(ManualScheduler::new());
        let config = ChatConfig { reply_delay_ms: 200, ..ChatConfig::default() };
        let controller = TurnController::new(&config, scheduler.clone(), Callback::noop());

        controller.submit_user_message("Hi");
        scheduler.advance(Duration::from_millis(200));
        assert_eq!(controller.turns().len(), 3);
    }
}
