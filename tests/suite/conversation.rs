//! Conversation engine scenarios

use std::time::Duration;

use aura_engine::{DEFAULT_REPLY_DELAY, Role, Submission, WELCOME_MESSAGE, reply_template};

use crate::common::{FIXED_TIME, conversation, elapse};

#[tokio::test(start_paused = true)]
async fn hello_round_trip() {
    let mut engine = conversation();
    assert_eq!(engine.turns().len(), 1);
    assert_eq!(engine.turns()[0].role(), Role::Assistant);
    assert_eq!(engine.turns()[0].content(), WELCOME_MESSAGE.as_str());

    assert_eq!(engine.submit("hello"), Submission::Accepted);
    assert_eq!(engine.turns().len(), 2);
    assert!(engine.is_pending());

    elapse(DEFAULT_REPLY_DELAY).await;
    assert_eq!(engine.process_events(), 1);

    assert_eq!(engine.turns().len(), 3);
    assert_eq!(engine.turns()[2].role(), Role::Assistant);
    assert_eq!(engine.turns()[2].content(), reply_template("hello"));
    assert_eq!(engine.turns()[2].timestamp(), FIXED_TIME);
    assert!(!engine.is_pending());
}

#[tokio::test(start_paused = true)]
async fn reply_not_applied_before_delay() {
    let mut engine = conversation();
    engine.submit("hello");

    tokio::time::sleep(DEFAULT_REPLY_DELAY - Duration::from_millis(1)).await;
    assert_eq!(engine.process_events(), 0);
    assert!(engine.is_pending());
    assert_eq!(engine.turns().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn whitespace_variants_are_rejected() {
    let mut engine = conversation();
    for text in ["", " ", "\n", "\t \r\n "] {
        assert_eq!(engine.submit(text), Submission::Empty);
    }
    assert_eq!(engine.turns().len(), 1);
    assert!(!engine.is_pending());
}

#[tokio::test(start_paused = true)]
async fn submitted_text_is_trimmed_but_inner_newlines_kept() {
    let mut engine = conversation();
    engine.submit("  line one\nline two  ");
    assert_eq!(engine.turns()[1].content(), "line one\nline two");
    assert!(engine.turns()[1].is_user());
}

#[tokio::test(start_paused = true)]
async fn second_submit_while_pending_is_dropped() {
    let mut engine = conversation();
    engine.submit("first");
    assert_eq!(engine.submit("second"), Submission::Busy);
    assert_eq!(engine.turns().len(), 2);

    assert!(engine.wait_for_update().await);
    assert_eq!(engine.turns().len(), 3);
    assert_eq!(engine.turns()[2].content(), reply_template("first"));

    // Gate reopens once the reply lands.
    assert_eq!(engine.submit("second"), Submission::Accepted);
    assert_eq!(engine.turns().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn cancelled_reply_never_arrives() {
    let mut engine = conversation();
    engine.submit("hello");
    assert!(engine.cancel_pending());
    assert!(!engine.is_pending());

    elapse(DEFAULT_REPLY_DELAY * 3).await;
    assert_eq!(engine.process_events(), 0);
    assert_eq!(engine.turns().len(), 2);
    assert!(!engine.wait_for_update().await);
}
