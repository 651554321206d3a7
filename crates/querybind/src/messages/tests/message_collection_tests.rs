use crate::error_codes;
use crate::messages::GraphMessage;
use crate::messages::MessageCollection;
use crate::messages::MessageSeverity;
use std::sync::Arc;

#[test]
fn empty_collection_has_no_critical_messages() {
    let messages = MessageCollection::new();
    assert!(messages.is_empty());
    assert!(!messages.has_critical());
    assert_eq!(messages.max_severity(), None);
}

#[test]
fn warnings_do_not_fail_a_request() {
    let messages = MessageCollection::new();
    messages.add(GraphMessage::warning("SOMETHING", "heads up"));
    assert!(!messages.has_critical());
    assert_eq!(messages.max_severity(), Some(MessageSeverity::Warning));
}

#[test]
fn critical_message_is_detected() {
    let messages = MessageCollection::new();
    messages.add(GraphMessage::warning("SOMETHING", "heads up"));
    messages.add(GraphMessage::critical(error_codes::ACCESS_DENIED, "nope"));
    assert!(messages.has_critical());
    assert!(messages.contains_code(error_codes::ACCESS_DENIED));
    assert_eq!(messages.max_severity(), Some(MessageSeverity::Critical));
}

#[test]
fn concurrent_appends_are_all_kept() {
    let messages = Arc::new(MessageCollection::new());
    let handles = (0..8).map(|idx| {
        let messages = messages.clone();
        std::thread::spawn(move || {
            for _ in 0..25 {
                messages.add(GraphMessage::warning("W", format!("thread {idx}")));
            }
        })
    }).collect::<Vec<_>>();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(messages.len(), 200);
}
