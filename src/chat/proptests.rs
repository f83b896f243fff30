//! Property-based tests for the dispatcher
//!
//! These check invariants that must hold for every input, not just the
//! keywords the rules were written for.

use super::keywords::{AFFIRMATIVE, THANK_YOU};
use super::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Generators
// ============================================================================

fn arb_pending() -> impl Strategy<Value = Option<PendingTopic>> {
    prop_oneof![
        Just(None),
        Just(Some(PendingTopic::HowToPlay)),
        Just(Some(PendingTopic::Deposit)),
        Just(Some(PendingTopic::Tournament)),
        "[a-z-]{1,12}".prop_map(|tag| PendingTopic::from_tag(&tag)),
    ]
}

/// Mix of ascii, Bengali script and real keywords
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[a-zA-Z ]{0,30}",
        "[\u{0980}-\u{09FF} ]{0,20}",
        prop::sample::select(AFFIRMATIVE.words).prop_map(String::from),
        prop::sample::select(vec!["টাকা জমা", "কিভাবে খেলব", "টুর্নামেন্ট", "ludo", "ফেসবুক"])
            .prop_map(String::from),
    ]
}

fn context_with(pending: Option<PendingTopic>) -> ConversationContext {
    let mut ctx = ConversationContext::new();
    ctx.set_name("Karim");
    if let Some(topic) = pending {
        ctx.update(ContextUpdate::new().pending_topic(topic));
    }
    ctx
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_every_input_gets_one_bot_reply(text in arb_text(), pending in arb_pending()) {
        let mut ctx = context_with(pending);
        let msg = ResponseDispatcher::new().generate_response(&mut ctx, &text);
        prop_assert!(msg.is_bot());
        prop_assert!(!msg.text.is_empty());
    }

    #[test]
    fn prop_thank_you_wins_and_keeps_latch(
        prefix in "[a-z ]{0,10}",
        word in prop::sample::select(THANK_YOU.words),
        suffix in "[a-z ]{0,10}",
        pending in arb_pending(),
    ) {
        let mut ctx = context_with(pending.clone());
        let input = format!("{prefix}{word}{suffix}");
        let msg = ResponseDispatcher::new().generate_response(&mut ctx, &input);

        prop_assert!(msg.text.starts_with("আপনাকেও অসংখ্য ধন্যবাদ"));
        prop_assert_eq!(ctx.pending_topic, pending);
    }

    #[test]
    fn prop_latch_only_holds_armed_topics(inputs in proptest::collection::vec(arb_text(), 1..20)) {
        let dispatcher = ResponseDispatcher::new();
        let mut ctx = ConversationContext::new();
        for input in &inputs {
            dispatcher.generate_response(&mut ctx, input);
            prop_assert!(matches!(
                ctx.pending_topic(),
                None | Some(PendingTopic::HowToPlay | PendingTopic::Deposit | PendingTopic::Tournament)
            ));
        }
    }

    #[test]
    fn prop_consecutive_follow_ups_differ(seed in any::<u64>(), rounds in 2usize..30) {
        let dispatcher = ResponseDispatcher::new();
        let mut ctx = ConversationContext::new();
        let mut rng = StdRng::seed_from_u64(seed);

        let mut previous = dispatcher.suggest_follow_up(&mut ctx, &mut rng).text;
        for _ in 1..rounds {
            let next = dispatcher.suggest_follow_up(&mut ctx, &mut rng).text;
            prop_assert_ne!(&next, &previous);
            previous = next;
        }
    }

    #[test]
    fn prop_quick_options_never_touch_context(
        id in prop::sample::select(QUICK_OPTIONS.iter().map(|o| o.id).collect::<Vec<_>>()),
        pending in arb_pending(),
    ) {
        let ctx = context_with(pending);
        let before = ctx.snapshot();
        let msg = ResponseDispatcher::new().handle_quick_response(&ctx, id);

        prop_assert!(!msg.links.is_empty());
        prop_assert_eq!(ctx, before);
    }
}
