use super::*;
use crate::types::AuthEventKind;
use futures::StreamExt;

fn drain(stream: &mut EventStream) -> Vec<AuthEventKind> {
    let mut kinds = Vec::new();
    while let Ok(Some(event)) = stream.try_next() {
        kinds.push(event.kind);
    }
    kinds
}

#[test]
fn emit_reaches_every_subscriber_in_order() {
    let hub = EventHub::new();
    let (_sub_a, mut rx_a) = hub.subscribe();
    let (_sub_b, mut rx_b) = hub.subscribe();

    hub.emit(&AuthEvent::signed_out());
    hub.emit(&AuthEvent::new(AuthEventKind::UserUpdated, None));

    let expected = vec![AuthEventKind::SignedOut, AuthEventKind::UserUpdated];
    assert_eq!(drain(&mut rx_a), expected);
    assert_eq!(drain(&mut rx_b), expected);
}

#[test]
fn release_removes_only_that_subscriber() {
    let hub = EventHub::new();
    let (sub_a, _rx_a) = hub.subscribe();
    let (_sub_b, _rx_b) = hub.subscribe();
    assert_eq!(hub.subscriber_count(), 2);

    sub_a.release();
    assert_eq!(hub.subscriber_count(), 1);
}

#[test]
fn release_ends_stream_after_buffered_events() {
    let hub = EventHub::new();
    let (sub, mut rx) = hub.subscribe();
    hub.emit(&AuthEvent::signed_out());
    sub.release();
    hub.emit(&AuthEvent::signed_out());

    let collected = futures::executor::block_on(async {
        let mut kinds = Vec::new();
        while let Some(event) = rx.next().await {
            kinds.push(event.kind);
        }
        kinds
    });
    assert_eq!(collected, vec![AuthEventKind::SignedOut]);
}

#[test]
fn dropping_subscription_releases_it() {
    let hub = EventHub::new();
    {
        let (_sub, _rx) = hub.subscribe();
        assert_eq!(hub.subscriber_count(), 1);
    }
    assert_eq!(hub.subscriber_count(), 0);
}

#[test]
fn emit_prunes_subscribers_whose_receiver_was_dropped() {
    let hub = EventHub::new();
    let (_sub, rx) = hub.subscribe();
    drop(rx);
    hub.emit(&AuthEvent::signed_out());
    assert_eq!(hub.subscriber_count(), 0);
}

#[test]
fn release_after_hub_dropped_is_harmless() {
    let hub = EventHub::new();
    let (sub, _rx) = hub.subscribe();
    drop(hub);
    sub.release();
}
