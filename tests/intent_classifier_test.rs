//! Integration tests for the two-stage intent classifier.

mod common;

use std::sync::Arc;

use common::{OfflineChat, ScriptedChat};
use ticketeer::domain::models::Intent;
use ticketeer::services::IntentClassifier;

#[tokio::test]
async fn model_verdict_wins_when_definite() {
    let classifier = IntentClassifier::new(Arc::new(ScriptedChat::replying(&["CREATE"])));

    // Text that the patterns would call a query; the model's verdict wins.
    let intent = classifier.classify("Show me how to file a bug ticket").await;
    assert_eq!(intent, Intent::Create);
}

#[tokio::test]
async fn indefinite_model_reply_falls_back_to_patterns() {
    let classifier =
        IntentClassifier::new(Arc::new(ScriptedChat::replying(&["I am not sure about this one"])));

    let intent = classifier.classify("Move KAN-1 to Done").await;
    assert_eq!(intent, Intent::Update);
}

#[tokio::test]
async fn offline_model_falls_back_to_patterns() {
    let cases = [
        ("Create a bug ticket in DEMO", Intent::Create),
        ("Move KAN-1 to Done", Intent::Update),
        ("Show me all open tickets assigned to me", Intent::Query),
        ("asdkjasd", Intent::Unknown),
    ];

    for (text, expected) in cases {
        let classifier = IntentClassifier::new(Arc::new(OfflineChat));
        let intent = classifier.classify(text).await;
        assert_eq!(intent, expected, "for input {text:?}");
    }
}
