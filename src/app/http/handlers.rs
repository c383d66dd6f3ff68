//! REST handlers for the farm registry
//!
//! Thin wrappers over the store and services: each handler fetches, delegates,
//! and shapes the response. User-visible failures are always a structured
//! `{"message"}` JSON body, never a raw internal error.

use crate::app::models::NewFarm;
use crate::app::services::estimator;
use crate::app::services::query::QueryService;
use crate::app::services::store::FarmStore;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

/// Query parameters for the farm listing endpoint
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Free-text country filter, localized or canonical spelling
    pub country: Option<String>,
}

/// Interactive farm creation payload
///
/// Numeric fields may arrive as JSON numbers or strings; strings are coerced
/// here. Everything except country and capacity is optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFarmRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub capacity: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub production: Option<f64>,
    #[serde(default)]
    pub operator: Option<String>,
}

/// Accept a JSON number or a numeric string for a float field
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(value)) => Ok(Some(value)),
        Some(NumberOrString::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("not a number: '{}'", text))),
    }
}

fn message_body(message: impl Into<String>) -> serde_json::Value {
    json!({ "message": message.into() })
}

fn internal_error(context: &str, err: crate::Error) -> HttpResponse {
    error!("{}: {}", context, err);
    HttpResponse::InternalServerError().json(message_body("internal storage error"))
}

/// GET /health
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "OK", "message": "Server is running" }))
}

/// GET /api/farms
pub async fn list_farms(
    store: web::Data<FarmStore>,
    query: web::Data<QueryService>,
    params: web::Query<ListParams>,
) -> HttpResponse {
    match query.list(&store, params.country.as_deref()) {
        Ok(farms) => HttpResponse::Ok().json(farms),
        Err(err) => internal_error("failed to list farms", err),
    }
}

/// GET /api/farms/{id}
pub async fn get_farm(store: web::Data<FarmStore>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    match store.get(&id) {
        Ok(Some(farm)) => HttpResponse::Ok().json(farm),
        Ok(None) => HttpResponse::NotFound().json(message_body("Farm not found")),
        Err(err) => internal_error("failed to fetch farm", err),
    }
}

/// POST /api/farms
pub async fn create_farm(
    store: web::Data<FarmStore>,
    payload: web::Json<CreateFarmRequest>,
) -> HttpResponse {
    let request = payload.into_inner();

    let country = match request.country {
        Some(ref country) if !country.trim().is_empty() => country.clone(),
        _ => return HttpResponse::BadRequest().json(message_body("country is required")),
    };
    let capacity = match request.capacity {
        Some(capacity) => capacity,
        None => return HttpResponse::BadRequest().json(message_body("capacity is required")),
    };
    let latitude = match request.latitude {
        Some(latitude) => latitude,
        None => return HttpResponse::BadRequest().json(message_body("latitude is required")),
    };
    let longitude = match request.longitude {
        Some(longitude) => longitude,
        None => return HttpResponse::BadRequest().json(message_body("longitude is required")),
    };

    let name = match request.name {
        Some(ref name) if !name.trim().is_empty() => name.clone(),
        _ => crate::constants::DEFAULT_FARM_NAME.to_string(),
    };
    let production = request
        .production
        .unwrap_or_else(|| NewFarm::estimated_production(capacity));
    let operator = request.operator.unwrap_or_default();

    // The creation endpoint owns range validation for interactive data
    let candidate = match NewFarm::new(
        name, country, latitude, longitude, capacity, production, operator,
    ) {
        Ok(candidate) => candidate,
        Err(err) => return HttpResponse::BadRequest().json(message_body(err.to_string())),
    };

    match store.insert(&candidate) {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(err) => HttpResponse::BadRequest().json(message_body(err.to_string())),
    }
}

/// DELETE /api/farms/{id}
///
/// Idempotent: success-shaped response whether or not the id existed, so a
/// delete racing a concurrent delete stays non-fatal for the caller.
pub async fn delete_farm(store: web::Data<FarmStore>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    match store.delete(&id) {
        Ok(_) => HttpResponse::Ok().json(message_body("Farm deleted")),
        Err(err) => internal_error("failed to delete farm", err),
    }
}

/// GET /api/farms/{id}/production
///
/// Synthetic 24-hour curve for farms without recorded history. Seeded from
/// the farm id so the same farm renders the same curve across requests.
pub async fn production_curve(
    store: web::Data<FarmStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    match store.get(&id) {
        Ok(Some(farm)) => {
            let curve = estimator::estimate_seeded(&farm, estimator::seed_for(&farm.id));
            HttpResponse::Ok().json(curve)
        }
        Ok(None) => HttpResponse::NotFound().json(message_body("Farm not found")),
        Err(err) => internal_error("failed to fetch farm", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::http::server::configure_routes;
    use crate::app::models::{FarmRecord, HourlyPoint};
    use actix_web::{test, App};

    fn seeded_store() -> web::Data<FarmStore> {
        let store = FarmStore::open_in_memory().unwrap();
        let farm = NewFarm {
            name: "Vlora Wind".to_string(),
            country: "Albania".to_string(),
            latitude: 41.3,
            longitude: 19.8,
            capacity: 50.0,
            production: 125.0,
            operator: String::new(),
        };
        store.insert(&farm).unwrap();
        web::Data::new(store)
    }

    macro_rules! test_app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data($store.clone())
                    .app_data(web::Data::new(QueryService::new()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let store = web::Data::new(FarmStore::open_in_memory().unwrap());
        let app = test_app!(store);

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "OK");
    }

    #[actix_web::test]
    async fn test_list_farms_with_bilingual_filter() {
        let store = seeded_store();
        let app = test_app!(store);

        let req = test::TestRequest::get().uri("/api/farms").to_request();
        let farms: Vec<FarmRecord> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(farms.len(), 1);

        let req = test::TestRequest::get()
            .uri("/api/farms?country=albania")
            .to_request();
        let farms: Vec<FarmRecord> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(farms.len(), 1);

        let req = test::TestRequest::get()
            .uri("/api/farms?country=serbia")
            .to_request();
        let farms: Vec<FarmRecord> = test::call_and_read_body_json(&app, req).await;
        assert!(farms.is_empty());
    }

    #[actix_web::test]
    async fn test_get_unknown_farm_is_404_with_message() {
        let store = web::Data::new(FarmStore::open_in_memory().unwrap());
        let app = test_app!(store);

        let req = test::TestRequest::get()
            .uri("/api/farms/no-such-id")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["message"].is_string());
    }

    #[actix_web::test]
    async fn test_create_farm_coerces_string_numerics() {
        let store = web::Data::new(FarmStore::open_in_memory().unwrap());
        let app = test_app!(store);

        let req = test::TestRequest::post()
            .uri("/api/farms")
            .set_json(json!({
                "name": "Dajti Park",
                "country": "Albania",
                "latitude": "41.36",
                "longitude": "19.92",
                "capacity": "42",
            }))
            .to_request();
        let created: FarmRecord = test::call_and_read_body_json(&app, req).await;

        assert_eq!(created.capacity, 42.0);
        assert_eq!(created.production, 105.0);
        assert!(!created.id.is_empty());
        assert_eq!(store.count().unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_create_farm_rejects_out_of_range_latitude() {
        let store = web::Data::new(FarmStore::open_in_memory().unwrap());
        let app = test_app!(store);

        let req = test::TestRequest::post()
            .uri("/api/farms")
            .set_json(json!({
                "country": "Albania",
                "latitude": 95.0,
                "longitude": 19.92,
                "capacity": 42,
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        assert_eq!(store.count().unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_delete_nonexistent_farm_is_success_shaped() {
        let store = seeded_store();
        let app = test_app!(store);

        let req = test::TestRequest::delete()
            .uri("/api/farms/no-such-id")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_production_curve_has_24_stable_points() {
        let store = seeded_store();
        let farm_id = store.list_all().unwrap()[0].id.clone();
        let app = test_app!(store);

        let uri = format!("/api/farms/{}/production", farm_id);
        let req = test::TestRequest::get().uri(&uri).to_request();
        let first: Vec<HourlyPoint> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(first.len(), 24);
        assert_eq!(first[0].hour, "1");
        assert_eq!(first[23].hour, "24");

        // Same farm, same curve on a second request
        let req = test::TestRequest::get().uri(&uri).to_request();
        let second: Vec<HourlyPoint> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(first, second);
    }
}
