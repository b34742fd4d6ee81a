//! Route definitions for the Harvest Schedule server

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/summary", get(handlers::get_summary))
        .route("/months", get(handlers::list_months))
        .route("/export", get(handlers::export_table))
        .nest("/crops", crop_routes())
}

/// Crop list, table and detail routes
fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_crops))
        .route("/table", get(handlers::get_crop_table))
        .route("/:name", get(handlers::get_crop))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use shared::default_crops;
    use tower::ServiceExt;

    use crate::config::{Config, DatasetConfig};
    use crate::{create_app, AppState};

    fn test_state() -> AppState {
        let config = Config {
            dataset: DatasetConfig {
                reference_year: Some(2025),
                ..Default::default()
            },
            ..Default::default()
        };
        AppState {
            dataset: Arc::new(default_crops()),
            config: Arc::new(config),
        }
    }

    async fn get(uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let response = create_app(test_state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, body.to_vec())
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, _, body) = get(uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_root_and_health() {
        let (status, _, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"OK");

        let (status, json) = get_json("/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["crops_loaded"], 29);
        assert_eq!(json["wrap_policy"], "clamp");
    }

    #[tokio::test]
    async fn test_dashboard_filters() {
        // November (index 10)
        let (status, json) = get_json("/api/v1/dashboard?month=10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["chart"].as_array().unwrap().len(), 1);
        assert_eq!(json["chart"][0]["name"], "Гарбуз батернат");
        assert_eq!(json["summary"]["totalCrops"], 29);
        assert_eq!(json["selectedMonth"], 10);
    }

    #[tokio::test]
    async fn test_month_out_of_range_is_bad_request() {
        let (status, json) = get_json("/api/v1/crops?month=12").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["field"], "month");
    }

    #[tokio::test]
    async fn test_crop_list_and_table() {
        let (status, json) = get_json("/api/v1/crops").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json[0]["name"], "Капуста броколі");

        let (status, json) = get_json("/api/v1/crops/table?month=7").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json[0]["name"], "Баклажан");
        assert!(json[0]["yieldForPeriod"].is_number());
    }

    #[tokio::test]
    async fn test_crop_detail_and_not_found() {
        // "Огірок", percent-encoded
        let (status, json) = get_json("/api/v1/crops/%D0%9E%D0%B3%D1%96%D1%80%D0%BE%D0%BA").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["crop"]["harvestDuration"], 61);

        let (status, json) = get_json("/api/v1/crops/unknown").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_summary_and_months() {
        let (_, json) = get_json("/api/v1/summary").await;
        assert_eq!(json["totalYield"], 3706.0);
        assert_eq!(json["earliestStartDate"], "14.06");
        assert_eq!(json["latestEndDate"], "03.11");

        let (_, json) = get_json("/api/v1/months").await;
        assert_eq!(json.as_array().unwrap().len(), 6);
        assert_eq!(json[0]["num"], 5);
        assert_eq!(json[0]["name"], "Червень");
    }

    #[tokio::test]
    async fn test_export_download() {
        let (status, headers, body) = get("/api/v1/export?search=%D0%BE%D0%B3%D1%96%D1%80%D0%BE%D0%BA").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"harvest_data.txt\""
        );

        let text = String::from_utf8(body).unwrap();
        assert!(text.starts_with('\u{feff}'));
        assert_eq!(text.lines().count(), 3);
    }
}
