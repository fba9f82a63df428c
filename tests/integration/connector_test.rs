//! Integration tests for the connector facade.

use std::sync::Arc;
use std::sync::atomic::Ordering;

use serde_json::json;

use signalhub::{
    Connector, ConnectorConfig, ErrorKind, MemoryTransportFactory, SocketIoConnector,
    TransportClient,
};

use crate::helpers::{TestConnector, counting_callback};

#[test]
fn test_connect_without_factory_is_a_configuration_error() {
    let connector = SocketIoConnector::new(ConnectorConfig::new("http://localhost:6001"));

    let err = connector.connect().expect_err("no factory configured");

    assert_eq!(err.kind, ErrorKind::Configuration);
    // The failed connect must leave no transport handle behind.
    assert!(connector.socket().is_none());
    assert!(connector.socket_id().is_none());
}

#[test]
fn test_socket_id_reads_the_live_connection() {
    let app = TestConnector::connect("");

    let id = app.connector.socket_id().expect("connected");
    assert_eq!(Some(id), app.transport().id());
}

#[test]
fn test_socket_id_is_none_before_connect() {
    let connector = SocketIoConnector::with_client(
        ConnectorConfig::new("http://localhost:6001"),
        Arc::new(MemoryTransportFactory::new()),
    );

    assert!(connector.socket_id().is_none());
}

#[test]
fn test_disconnect_delegates_to_transport() {
    let app = TestConnector::connect("");

    app.connector.disconnect();

    assert!(!app.transport().is_connected());
    // The memory transport invalidates its id once torn down.
    assert!(app.connector.socket_id().is_none());
}

#[test]
fn test_connect_opens_a_fresh_transport_each_time() {
    let app = TestConnector::connect("");

    app.connector.connect().expect("reconnect");

    assert_eq!(app.factory.connection_count(), 2);
    assert_eq!(app.connector.socket_id(), app.transport().id());
}

#[test]
fn test_listen_subscribes_and_forwards() {
    let app = TestConnector::connect("");
    let (callback, counter) = counting_callback();

    let channel = app.connector.listen("orders", "OrderShipped", callback);

    assert_eq!(channel.name(), "orders");
    assert_eq!(app.transport().emit_count("subscribe"), 1);

    app.transport()
        .dispatch("OrderShipped", "orders", &json!({ "id": 1 }));
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn test_listen_reuses_the_cached_channel() {
    let app = TestConnector::connect("");
    let (first_callback, first) = counting_callback();
    let (second_callback, second) = counting_callback();

    app.connector.listen("orders", "OrderShipped", first_callback);
    app.connector.listen("orders", "OrderPaid", second_callback);

    // Both listens share one subscription.
    assert_eq!(app.transport().emit_count("subscribe"), 1);

    let transport = app.transport();
    transport.dispatch("OrderShipped", "orders", &json!({}));
    transport.dispatch("OrderPaid", "orders", &json!({}));
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[test]
fn test_resolve_then_leave_scenario() {
    // prefix "", resolve orders public then private, leave("orders"):
    // zero entries remain and one unsubscribe per created variant.
    let app = TestConnector::connect("");

    app.connector.channel("orders");
    app.connector.private_channel("orders");
    assert_eq!(app.connector.channels().len(), 2);

    app.connector.leave("orders");

    assert_eq!(app.connector.channels().len(), 0);
    assert_eq!(app.transport().emit_count("unsubscribe"), 2);
}
