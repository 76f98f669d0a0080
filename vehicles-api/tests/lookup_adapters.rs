//! Reqwest lookup adapters exercised against a local HTTP double.

use std::time::Duration;

use httpmock::prelude::*;
use reqwest::Url;
use serde_json::json;
use vehicles_api::domain::ports::{
    AddressSource, AddressSourceError, PriceSource, PriceSourceError,
};
use vehicles_api::domain::{CarId, Coordinates};
use vehicles_api::outbound::maps::MapsHttpSource;
use vehicles_api::outbound::pricing::PriceHttpSource;

fn base_url(server: &MockServer) -> Url {
    Url::parse(&server.base_url()).expect("mock server url")
}

fn car(id: u64) -> CarId {
    CarId::new(id).expect("valid id")
}

#[tokio::test]
async fn price_source_decodes_pricing_service_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/prices/3")
                .header("accept", "application/json");
            then.status(200)
                .json_body(json!({ "vehicleId": 3, "price": 12345.67, "currency": "USD" }));
        })
        .await;
    let source = PriceHttpSource::new(base_url(&server), Duration::from_secs(2))
        .expect("client builds");

    let price = source.get_price(car(3)).await.expect("price");

    mock.assert_async().await;
    assert_eq!(price.to_string(), "USD 12345.67");
}

#[tokio::test]
async fn price_source_maps_missing_vehicle_to_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/prices/42");
            then.status(404)
                .json_body(json!({ "code": "not_found", "message": "no price for vehicle 42" }));
        })
        .await;
    let source = PriceHttpSource::new(base_url(&server), Duration::from_secs(2))
        .expect("client builds");

    let error = source.get_price(car(42)).await.expect_err("missing price");

    assert!(matches!(error, PriceSourceError::NotFound { .. }));
}

#[tokio::test]
async fn price_source_reports_server_errors_as_unavailable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/prices/1");
            then.status(503).body("maintenance");
        })
        .await;
    let source = PriceHttpSource::new(base_url(&server), Duration::from_secs(2))
        .expect("client builds");

    let error = source.get_price(car(1)).await.expect_err("unavailable");

    assert_eq!(
        error,
        PriceSourceError::unavailable("status 503: maintenance")
    );
}

#[tokio::test]
async fn price_source_times_out_slow_responses() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/prices/1");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(json!({ "vehicleId": 1, "price": 5000.0, "currency": "USD" }));
        })
        .await;
    let source = PriceHttpSource::new(base_url(&server), Duration::from_millis(50))
        .expect("client builds");

    let error = source.get_price(car(1)).await.expect_err("timeout");

    assert!(matches!(error, PriceSourceError::Timeout { .. }));
}

#[tokio::test]
async fn price_source_rejects_undecodable_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/prices/2");
            then.status(200).body("not json");
        })
        .await;
    let source = PriceHttpSource::new(base_url(&server), Duration::from_secs(2))
        .expect("client builds");

    let error = source.get_price(car(2)).await.expect_err("decode failure");

    assert!(matches!(error, PriceSourceError::Decode { .. }));
}

#[tokio::test]
async fn maps_source_sends_coordinates_as_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/maps")
                .query_param("lat", "40.5")
                .query_param("lon", "-73.25");
            then.status(200).json_body(json!({
                "address": "777 Brockton Avenue",
                "city": "Abington",
                "state": "MA",
                "zip": "2351"
            }));
        })
        .await;
    let source = MapsHttpSource::new(base_url(&server), Duration::from_secs(2))
        .expect("client builds");
    let coordinates = Coordinates::new(40.5, -73.25).expect("valid coordinates");

    let address = source.get_address(&coordinates).await.expect("address");

    mock.assert_async().await;
    assert_eq!(address.city, "Abington");
    assert_eq!(address.zip, "2351");
}

#[tokio::test]
async fn maps_source_reports_failures_as_unavailable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/maps");
            then.status(500);
        })
        .await;
    let source = MapsHttpSource::new(base_url(&server), Duration::from_secs(2))
        .expect("client builds");
    let coordinates = Coordinates::new(0.0, 0.0).expect("valid coordinates");

    let error = source
        .get_address(&coordinates)
        .await
        .expect_err("unavailable");

    assert!(matches!(error, AddressSourceError::Unavailable { .. }));
}
