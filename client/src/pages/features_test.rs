use super::*;

#[test]
fn demo_starts_disconnected_and_idle() {
    let demo = DemoState::default();
    assert!(!demo.connected);
    assert!(!demo.sending);
    assert!(demo.messages.is_empty());
    assert_eq!(demo.connection_badge(), (BadgeKind::Warning, "Disconnected"));
}

#[test]
fn toggle_connection_flips_badge() {
    let mut demo = DemoState::default();
    demo.toggle_connection();
    assert_eq!(demo.connection_badge(), (BadgeKind::Success, "Connected"));
    demo.toggle_connection();
    assert!(!demo.connected);
}

#[test]
fn send_appends_message_after_finish() {
    let mut demo = DemoState::default();
    assert!(demo.begin_send());
    assert!(demo.sending);
    assert!(demo.messages.is_empty());
    demo.finish_send();
    assert!(!demo.sending);
    assert_eq!(demo.messages, vec![SENT_MESSAGE.to_owned()]);
}

#[test]
fn begin_send_rejects_overlapping_sends() {
    let mut demo = DemoState::default();
    assert!(demo.begin_send());
    assert!(!demo.begin_send());
    demo.finish_send();
    assert_eq!(demo.messages.len(), 1);
    assert!(demo.begin_send());
}

#[test]
fn clear_empties_log_only() {
    let mut demo = DemoState { connected: true, ..DemoState::default() };
    demo.begin_send();
    demo.finish_send();
    demo.clear();
    assert!(demo.messages.is_empty());
    assert!(demo.connected);
}

#[test]
fn feature_ids_are_unique() {
    let mut ids: Vec<&str> = FEATURE_DETAILS.iter().map(|f| f.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), FEATURE_DETAILS.len());
}

#[test]
fn simulated_send_takes_one_second() {
    assert_eq!(SEND_DELAY_MS, 1000);
}
