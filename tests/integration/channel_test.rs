//! Integration tests for the channel registry and channel wrappers.

use std::sync::atomic::Ordering;

use serde_json::json;

use signalhub::{ChannelVariant, Connector, ConnectorConfig};

use crate::helpers::{TestConnector, counting_callback};

#[test]
fn test_resolve_is_idempotent() {
    let app = TestConnector::connect("");

    let first = app.connector.channel("orders");
    let second = app.connector.channel("orders");

    assert!(first.ptr_eq(&second));
    assert_eq!(app.connector.channels().len(), 1);
    // Exactly one wrapper construction, so exactly one subscribe frame.
    assert_eq!(app.transport().emit_count("subscribe"), 1);
}

#[test]
fn test_variants_get_distinct_wrappers() {
    let app = TestConnector::connect("");

    let public = app.connector.channel("orders");
    let private = app.connector.private_channel("orders");
    let presence = app.connector.presence_channel("orders");

    assert_eq!(public.name(), "orders");
    assert_eq!(private.name(), "private-orders");
    assert_eq!(presence.name(), "presence-orders");
    assert_eq!(public.variant(), ChannelVariant::Public);
    assert_eq!(private.variant(), ChannelVariant::Private);
    assert_eq!(presence.variant(), ChannelVariant::Presence);
    assert_eq!(app.connector.channels().len(), 3);
}

#[test]
fn test_key_prefix_namespaces_all_variants() {
    let app = TestConnector::connect("app:");

    app.connector.channel("foo");
    app.connector.private_channel("foo");
    app.connector.presence_channel("foo");

    let channels = app.connector.channels();
    assert!(channels.contains("app:foo"));
    assert!(channels.contains("app:private-foo"));
    assert!(channels.contains("app:presence-foo"));
}

#[test]
fn test_leave_removes_all_variants() {
    let app = TestConnector::connect("");

    app.connector.channel("orders");
    app.connector.private_channel("orders");
    app.connector.leave("orders");

    assert!(app.connector.channels().is_empty());
    // One unsubscribe per removed entry; the absent presence variant is
    // silently skipped.
    assert_eq!(app.transport().emit_count("unsubscribe"), 2);
}

#[test]
fn test_leave_is_idempotent() {
    let app = TestConnector::connect("");

    app.connector.channel("orders");
    app.connector.leave("orders");
    app.connector.leave("orders");

    assert!(app.connector.channels().is_empty());
    assert_eq!(app.transport().emit_count("unsubscribe"), 1);
}

#[test]
fn test_leave_channel_removes_exactly_one_key() {
    let app = TestConnector::connect("");

    app.connector.channel("orders");
    app.connector.private_channel("orders");
    app.connector.leave_channel("private-orders");

    let channels = app.connector.channels();
    assert!(channels.contains("orders"));
    assert!(!channels.contains("private-orders"));

    // Absent keys are a silent no-op.
    app.connector.leave_channel("missing");
    assert_eq!(app.transport().emit_count("unsubscribe"), 1);
}

#[test]
fn test_leave_respects_key_prefix() {
    let app = TestConnector::connect("app:");

    app.connector.channel("orders");
    app.connector.presence_channel("orders");
    app.connector.leave("orders");

    assert!(app.connector.channels().is_empty());
    assert_eq!(app.transport().emit_count("unsubscribe"), 2);
}

#[test]
fn test_listen_filters_by_channel_name() {
    let app = TestConnector::connect("");
    let (callback, counter) = counting_callback();

    app.connector.listen("orders", "OrderShipped", callback);

    let transport = app.transport();
    transport.dispatch("OrderShipped", "orders", &json!({ "id": 7 }));
    transport.dispatch("OrderShipped", "payments", &json!({ "id": 8 }));

    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn test_listen_applies_event_namespace() {
    let mut config = ConnectorConfig::new("http://localhost:6001");
    config.namespace = Some("App.Events".to_string());
    let app = TestConnector::connect_with(config);
    let (callback, counter) = counting_callback();

    app.connector.listen("orders", "OrderShipped", callback);

    let transport = app.transport();
    assert_eq!(transport.listener_count("App\\Events\\OrderShipped"), 1);
    transport.dispatch("App\\Events\\OrderShipped", "orders", &json!({}));
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn test_stop_listening_keeps_subscription() {
    let app = TestConnector::connect("");
    let (callback, counter) = counting_callback();

    let channel = app.connector.listen("orders", "OrderShipped", callback);
    channel.stop_listening("OrderShipped");

    let transport = app.transport();
    transport.dispatch("OrderShipped", "orders", &json!({}));

    assert_eq!(counter.load(Ordering::SeqCst), 0);
    assert_eq!(transport.listener_count("OrderShipped"), 0);
    assert_eq!(transport.emit_count("unsubscribe"), 0);
    assert!(app.connector.channels().contains("orders"));
}

#[test]
fn test_unsubscribe_unbinds_listeners() {
    let app = TestConnector::connect("");
    let (callback, counter) = counting_callback();

    app.connector.listen("orders", "OrderShipped", callback);
    app.connector.leave("orders");

    let transport = app.transport();
    transport.dispatch("OrderShipped", "orders", &json!({}));

    assert_eq!(counter.load(Ordering::SeqCst), 0);
    assert_eq!(transport.listener_count("OrderShipped"), 0);
}

#[test]
fn test_whisper_emits_client_event() {
    let app = TestConnector::connect("");

    let handle = app.connector.private_channel("orders");
    let private = handle.as_private().expect("private wrapper");
    private.whisper("typing", json!({ "user": 42 }));

    let emitted = app.transport().emitted();
    let frame = emitted
        .iter()
        .find(|frame| frame.event == "client event")
        .expect("whisper frame");
    assert_eq!(frame.payload["channel"], "private-orders");
    assert_eq!(frame.payload["event"], "client-typing");
    assert_eq!(frame.payload["data"]["user"], 42);
}

#[test]
fn test_presence_events_are_forwarded() {
    let app = TestConnector::connect("");
    let (joining, joined) = counting_callback();
    let (leaving, left) = counting_callback();

    let handle = app.connector.presence_channel("room");
    let presence = handle.as_presence().expect("presence wrapper");
    presence.joining(joining).leaving(leaving);

    let transport = app.transport();
    transport.dispatch("presence:joining", "presence-room", &json!({ "user_info": {} }));
    transport.dispatch("presence:leaving", "presence-room", &json!({ "user_info": {} }));
    // Announcements for other channels never reach this wrapper.
    transport.dispatch("presence:joining", "presence-lobby", &json!({}));

    assert_eq!(joined.load(Ordering::SeqCst), 1);
    assert_eq!(left.load(Ordering::SeqCst), 1);
}

#[test]
fn test_subscribe_frame_carries_auth() {
    let mut config = ConnectorConfig::new("http://localhost:6001");
    config
        .auth
        .insert("token".to_string(), json!("secret"));
    let app = TestConnector::connect_with(config);

    app.connector.private_channel("orders");

    let emitted = app.transport().emitted();
    let frame = emitted
        .iter()
        .find(|frame| frame.event == "subscribe")
        .expect("subscribe frame");
    assert_eq!(frame.payload["channel"], "private-orders");
    assert_eq!(frame.payload["auth"]["token"], "secret");
}

#[test]
fn test_resolve_before_connect_is_inert() {
    let factory = std::sync::Arc::new(signalhub::MemoryTransportFactory::new());
    let connector = signalhub::SocketIoConnector::with_client(
        ConnectorConfig::new("http://localhost:6001"),
        factory.clone(),
    );
    let (callback, counter) = counting_callback();

    // No connect yet: the wrapper is created but bound to no transport.
    let channel = connector.channel("orders");
    channel.listen("OrderShipped", callback);

    assert_eq!(connector.channels().len(), 1);
    assert_eq!(factory.connection_count(), 0);
    assert_eq!(counter.load(Ordering::SeqCst), 0);

    // Leaving such a channel is equally safe.
    connector.leave("orders");
    assert!(connector.channels().is_empty());
}
