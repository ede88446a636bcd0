use dealer_inventory::{HttpVehicleApi, InventoryError, NewVehicle, VehicleSource};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

fn api_for(server: &MockServer) -> HttpVehicleApi {
    HttpVehicleApi::new(&server.base_url(), Duration::from_secs(5)).unwrap()
}

fn new_vehicle() -> NewVehicle {
    NewVehicle {
        vin: "XYZ123".to_string(),
        description: None,
        make: "Ford".to_string(),
        model: "F150".to_string(),
        image_urls: vec!["a.jpg".to_string(), "b.jpg".to_string()],
    }
}

#[tokio::test]
async fn test_list_vehicles_parses_array() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/vehicles");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([
                {"id": "1", "vin": "1C4RJXR66RW241060", "make": "Jeep", "model": "Wrangler",
                 "description": null, "image_urls": []},
                {"id": "2", "vin": "XYZ123", "make": "Ford", "model": "F150",
                 "description": "great truck", "image_urls": ["a.jpg"]}
            ]));
    });

    let vehicles = api_for(&server).list_vehicles().await.unwrap();

    api_mock.assert();
    assert_eq!(vehicles.len(), 2);
    assert_eq!(vehicles[0].make, "Jeep");
    assert_eq!(vehicles[1].description.as_deref(), Some("great truck"));
}

#[tokio::test]
async fn test_list_vehicles_tolerates_missing_optional_fields() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/vehicles");
        then.status(200)
            .json_body(json!([{"id": "1", "vin": "V1", "make": "Jeep", "model": "Wrangler"}]));
    });

    let vehicles = api_for(&server).list_vehicles().await.unwrap();

    assert_eq!(vehicles[0].description, None);
    assert!(vehicles[0].image_urls.is_empty());
}

#[tokio::test]
async fn test_list_vehicles_keeps_records_with_mistyped_fields() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/vehicles");
        then.status(200).json_body(json!([
            {"id": "1", "vin": "V1", "make": "Jeep", "model": "Wrangler", "description": 42},
            {"id": "2", "vin": "V2", "make": "Ford", "model": "F150",
             "description": "great truck", "image_urls": ["a.jpg", null]}
        ]));
    });

    let vehicles = api_for(&server).list_vehicles().await.unwrap();

    assert_eq!(vehicles.len(), 2);
    assert_eq!(vehicles[0].description, None);
    assert_eq!(vehicles[1].image_urls, vec!["a.jpg"]);
}

#[tokio::test]
async fn test_list_vehicles_non_success_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/vehicles");
        then.status(500);
    });

    let err = api_for(&server).list_vehicles().await.unwrap_err();
    assert!(matches!(err, InventoryError::UnexpectedStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_get_vehicle_found_and_missing() {
    let server = MockServer::start();
    let found = server.mock(|when, then| {
        when.method(GET).path("/vehicles/abc-123");
        then.status(200).json_body(json!({
            "id": "abc-123", "vin": "XYZ123", "make": "Ford", "model": "F150",
            "description": "great truck", "image_urls": ["a.jpg"]
        }));
    });
    let missing = server.mock(|when, then| {
        when.method(GET).path("/vehicles/nope");
        then.status(404).json_body(json!({"detail": "Vehicle not found"}));
    });

    let api = api_for(&server);
    let vehicle = api.get_vehicle("abc-123").await.unwrap().unwrap();
    assert_eq!(vehicle.model, "F150");
    assert!(api.get_vehicle("nope").await.unwrap().is_none());

    found.assert();
    missing.assert();
}

#[tokio::test]
async fn test_create_vehicle_sends_payload() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/vehicles")
            .header("content-type", "application/json")
            .json_body(json!({
                "vin": "XYZ123",
                "description": null,
                "make": "Ford",
                "model": "F150",
                "image_urls": ["a.jpg", "b.jpg"]
            }));
        then.status(201).json_body(json!({
            "id": "new-id", "vin": "XYZ123", "description": null, "make": "Ford",
            "model": "F150", "image_urls": ["a.jpg", "b.jpg"]
        }));
    });

    let created = api_for(&server).create_vehicle(&new_vehicle()).await.unwrap();

    create.assert();
    assert_eq!(created.id, "new-id");
}

#[tokio::test]
async fn test_create_vehicle_surfaces_detail() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/vehicles");
        then.status(400).json_body(json!({"detail": "VIN already exists"}));
    });

    let err = api_for(&server).create_vehicle(&new_vehicle()).await.unwrap_err();

    match err {
        InventoryError::Rejected { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "VIN already exists");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_create_vehicle_without_json_body_uses_fallback() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/vehicles");
        then.status(502).body("Bad Gateway");
    });

    let err = api_for(&server).create_vehicle(&new_vehicle()).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to add vehicle (502)");
}

#[tokio::test]
async fn test_create_vehicle_false_detail_uses_fallback() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/vehicles");
        then.status(400).json_body(json!({"detail": false}));
    });

    let err = api_for(&server).create_vehicle(&new_vehicle()).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to add vehicle (400)");
}

#[tokio::test]
async fn test_unreachable_backend() {
    let api = HttpVehicleApi::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();

    let err = api.create_vehicle(&new_vehicle()).await.unwrap_err();
    assert!(matches!(err, InventoryError::Unreachable { .. }));
    assert!(err.to_string().contains("Cannot connect to backend server"));
}

#[tokio::test]
async fn test_health_check() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(200).json_body(json!({"status": "ok"}));
    });

    let health = api_for(&server).health().await.unwrap();
    assert!(health.is_ok());
}
