//! End-to-end car lifecycle over the HTTP adapter, the car service and the
//! in-memory store.

use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use httpmock::prelude::*;
use mockable::DefaultClock;
use reqwest::Url;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use vehicles_api::Trace;
use vehicles_api::domain::ports::{
    AddressSource, FixtureAddressSource, FixturePriceSource, Price, PriceSource,
};
use vehicles_api::domain::{CarService, LookupRetryPolicy};
use vehicles_api::inbound::http::cars::{create_car, delete_car, get_car, list_cars, update_car};
use vehicles_api::inbound::http::state::HttpState;
use vehicles_api::inbound::http::validation::json_config;
use vehicles_api::outbound::maps::CoordinateAddressSource;
use vehicles_api::outbound::persistence::InMemoryCarRepository;
use vehicles_api::outbound::pricing::PriceHttpSource;

fn app_with(
    prices: Arc<dyn PriceSource>,
    addresses: Arc<dyn AddressSource>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cars = Arc::new(InMemoryCarRepository::new(Arc::new(DefaultClock)));
    let service = Arc::new(
        CarService::new(cars, prices, addresses).with_retry(
            LookupRetryPolicy::single_attempt(),
            Arc::new(vehicles_api::domain::TokioSleeper),
        ),
    );
    App::new()
        .app_data(web::Data::new(HttpState::new(service.clone(), service)))
        .app_data(json_config())
        .wrap(Trace)
        .service(create_car)
        .service(list_cars)
        .service(get_car)
        .service(update_car)
        .service(delete_car)
}

fn priced_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let price = Price::new(Decimal::new(1_234_567, 2), "USD");
    app_with(
        Arc::new(FixturePriceSource::fixed(price)),
        Arc::new(CoordinateAddressSource),
    )
}

fn impala() -> Value {
    json!({
        "condition": "USED",
        "details": {
            "body": "sedan",
            "model": "Impala",
            "manufacturer": { "code": 101, "name": "Chevrolet" },
            "numberOfDoors": 4,
            "fuelType": "Gasoline",
            "engine": "3.6L V6",
            "mileage": 32280,
            "modelYear": 2018,
            "productionYear": 2018,
            "externalColor": "white"
        },
        "location": { "lat": 40.730_61, "lon": -73.935_242 }
    })
}

#[actix_web::test]
async fn created_car_reads_back_with_price_and_address() {
    let app = actix_test::init_service(priced_app()).await;

    let created: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/cars")
            .set_json(impala())
            .to_request(),
    )
    .await;
    let id = created["id"].as_u64().expect("numeric id");
    assert!(created["createdAt"].is_string());
    assert_eq!(created["price"], Value::Null);

    let found: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/cars/{id}"))
            .to_request(),
    )
    .await;

    assert_eq!(found["details"], impala()["details"]);
    assert_eq!(found["condition"], json!("USED"));
    assert_eq!(found["location"]["lat"], impala()["location"]["lat"]);
    assert_eq!(found["price"], json!("USD 12345.67"));
    assert!(found["location"]["city"].is_string());
    assert_eq!(found["createdAt"], created["createdAt"]);
}

#[actix_web::test]
async fn listing_after_one_create_returns_that_car() {
    let app = actix_test::init_service(priced_app()).await;
    let create = actix_test::TestRequest::post()
        .uri("/cars")
        .set_json(impala())
        .to_request();
    let created: Value = actix_test::call_and_read_body_json(&app, create).await;

    let listing: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/cars").to_request(),
    )
    .await;

    let cars = listing["_embedded"]["carList"]
        .as_array()
        .expect("carList array");
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0]["id"], created["id"]);
    assert_eq!(cars[0]["details"], created["details"]);
    assert_eq!(cars[0]["price"], json!("USD 12345.67"));
}

#[actix_web::test]
async fn empty_listing_keeps_envelope() {
    let app = actix_test::init_service(priced_app()).await;

    let listing: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/cars").to_request(),
    )
    .await;

    assert_eq!(listing["_embedded"]["carList"], json!([]));
}

#[actix_web::test]
async fn update_preserves_identity_and_applies_new_values() {
    let app = actix_test::init_service(priced_app()).await;
    let created: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/cars")
            .set_json(impala())
            .to_request(),
    )
    .await;
    let id = created["id"].as_u64().expect("numeric id");

    let mut revised = impala();
    revised["details"]["fuelType"] = json!("Electric");
    revised["details"]["model"] = json!("i5");
    revised["details"]["manufacturer"] = json!({ "code": 200, "name": "BMW" });
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/cars/{id}"))
            .set_json(revised)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = actix_test::read_body_json(response).await;

    assert_eq!(updated["id"], json!(id));
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_eq!(updated["details"]["fuelType"], json!("Electric"));
    assert_eq!(updated["details"]["model"], json!("i5"));
    assert_eq!(
        updated["details"]["manufacturer"],
        json!({ "code": 200, "name": "BMW" })
    );
}

#[actix_web::test]
async fn deleted_car_is_gone() {
    let app = actix_test::init_service(priced_app()).await;
    let created: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/cars")
            .set_json(impala())
            .to_request(),
    )
    .await;
    let uri = format!("/cars/{}", created["id"]);

    let deleted = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri(&uri).to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let found = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri(&uri).to_request(),
    )
    .await;
    assert_eq!(found.status(), StatusCode::NOT_FOUND);

    let again = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri(&uri).to_request(),
    )
    .await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn unknown_ids_are_not_found() {
    let app = actix_test::init_service(priced_app()).await;

    for request in [
        actix_test::TestRequest::get().uri("/cars/999").to_request(),
        actix_test::TestRequest::put()
            .uri("/cars/999")
            .set_json(impala())
            .to_request(),
        actix_test::TestRequest::delete().uri("/cars/999").to_request(),
    ] {
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key("trace-id"));
    }
}

#[actix_web::test]
async fn failing_pricing_service_leaves_price_null() {
    let pricing = MockServer::start_async().await;
    pricing
        .mock_async(|when, then| {
            when.method(GET).path_contains("/prices/");
            then.status(500);
        })
        .await;
    let base = Url::parse(&pricing.base_url()).expect("mock server url");
    let prices = PriceHttpSource::new(base, Duration::from_secs(2)).expect("client builds");
    let app =
        actix_test::init_service(app_with(Arc::new(prices), Arc::new(CoordinateAddressSource)))
            .await;

    let created: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/cars")
            .set_json(impala())
            .to_request(),
    )
    .await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/cars/{}", created["id"]))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let found: Value = actix_test::read_body_json(response).await;
    let listing: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/cars").to_request(),
    )
    .await;

    assert_eq!(found["price"], Value::Null);
    assert!(found["location"]["address"].is_string());
    assert_eq!(listing["_embedded"]["carList"][0]["price"], Value::Null);
}

#[actix_web::test]
async fn failing_address_lookup_keeps_price_and_coordinates() {
    let price = Price::new(Decimal::new(500_000, 2), "USD");
    let app = actix_test::init_service(app_with(
        Arc::new(FixturePriceSource::fixed(price)),
        Arc::new(FixtureAddressSource),
    ))
    .await;

    let created: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/cars")
            .set_json(impala())
            .to_request(),
    )
    .await;
    let found: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/cars/{}", created["id"]))
            .to_request(),
    )
    .await;

    assert_eq!(found["price"], json!("USD 5000.00"));
    assert_eq!(found["location"]["lat"], impala()["location"]["lat"]);
    for field in ["address", "city", "state", "zip"] {
        assert_eq!(found["location"][field], Value::Null, "{field}");
    }
}
