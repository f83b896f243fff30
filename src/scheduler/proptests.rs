//! Property-based tests for the turn scheduler
//!
//! Random interleavings of user input, timer firings and resets. Timers fire
//! in arbitrary order, including ones scheduled before a reset.

use super::*;
use crate::chat::{ResponseDispatcher, Sender, QUICK_OPTIONS};
use proptest::prelude::*;
use std::time::Duration;

#[derive(Debug, Clone)]
enum Action {
    Start(String),
    Text(String),
    Quick(usize),
    Fire(usize),
    Reset,
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        1 => "[A-Za-z ]{0,8}".prop_map(Action::Start),
        3 => prop_oneof![
            Just("deposit".to_string()),
            Just("কিভাবে খেলব".to_string()),
            Just("হ্যাঁ".to_string()),
            Just("ফেসবুক".to_string()),
            "[a-z ]{0,12}",
        ]
        .prop_map(Action::Text),
        1 => (0..QUICK_OPTIONS.len()).prop_map(Action::Quick),
        6 => any::<usize>().prop_map(Action::Fire),
        1 => Just(Action::Reset),
    ]
}

/// Timers the runtime would be holding
fn collect(pending: &mut Vec<(u64, Step)>, effects: Vec<Effect>) {
    for effect in effects {
        if let Effect::Schedule { generation, step, .. } = effect {
            pending.push((generation, step));
        }
    }
}

proptest! {
    #[test]
    fn prop_scheduler_invariants(seed in any::<u64>(), actions in proptest::collection::vec(arb_action(), 1..60)) {
        let config = PacingConfig {
            follow_up_probability: 0.5,
            ..PacingConfig::deterministic(Duration::from_millis(10), true)
        };
        let mut scheduler = TurnScheduler::new(ResponseDispatcher::new(), Pacing::seeded(config, seed));
        let mut session = Session::new();
        let mut pending: Vec<(u64, Step)> = Vec::new();

        for action in actions {
            let before_len = session.log().len();
            let before_generation = session.generation();
            let event = match action {
                Action::Start(name) => Event::Start { name },
                Action::Text(text) => Event::UserText { text },
                Action::Quick(i) => Event::QuickOption { option_id: QUICK_OPTIONS[i].id.to_string() },
                Action::Fire(i) => {
                    if pending.is_empty() {
                        continue;
                    }
                    let (generation, step) = pending.remove(i % pending.len());
                    Event::StepDue { generation, step }
                }
                Action::Reset => Event::Reset,
            };
            let is_reset = matches!(event, Event::Reset);

            match scheduler.handle(&mut session, event) {
                Ok(result) => collect(&mut pending, result.effects),
                Err(_) => {
                    prop_assert_eq!(session.log().len(), before_len);
                }
            }

            if is_reset {
                prop_assert!(session.log().is_empty());
                prop_assert_eq!(session.phase(), Phase::AwaitingName);
                prop_assert_eq!(session.generation(), before_generation + 1);
            } else {
                prop_assert!(session.log().len() >= before_len);
                prop_assert!(session.log().len() <= before_len + 1);
            }

            // The indicator is on exactly while a live delivery is outstanding
            let live_deliveries = pending
                .iter()
                .filter(|(generation, step)| *generation == session.generation() && matches!(step, Step::Deliver(_)))
                .count();
            prop_assert_eq!(session.is_typing(), live_deliveries > 0);

            // Bot turns only ever follow a name being entered
            if session.phase() == Phase::AwaitingName {
                prop_assert!(session.log().is_empty());
            }
            prop_assert!(session.log().iter().take(1).all(|m| m.sender == Sender::Bot));
        }
    }
}
