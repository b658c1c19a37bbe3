//! End-to-end submission against a local mock prediction service.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use dariprice::form::{Field, FormController, FormError, PropertyType, View};
use dariprice::locations::LocationIndex;
use dariprice::predictor::{HttpPredictor, PredictError};
use dariprice::view;
use tokio::task::JoinHandle;

#[derive(Clone)]
struct MockService {
    status: StatusCode,
    body: &'static str,
    received: Arc<Mutex<Vec<(Option<String>, String)>>>,
}

async fn predict(
    State(mock): State<MockService>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    mock.received.lock().unwrap().push((content_type, body));
    (mock.status, mock.body.to_string())
}

struct TestServer {
    base_url: String,
    mock: MockService,
    handle: JoinHandle<()>,
}

impl TestServer {
    async fn spawn(status: StatusCode, body: &'static str) -> Self {
        let mock = MockService {
            status,
            body,
            received: Arc::new(Mutex::new(Vec::new())),
        };
        let app = Router::new()
            .route("/api/predict", post(predict))
            .with_state(mock.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test port");
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{}", addr),
            mock,
            handle,
        }
    }

    fn requests(&self) -> Vec<(Option<String>, serde_json::Value)> {
        self.mock
            .received
            .lock()
            .unwrap()
            .iter()
            .map(|(ct, body)| (ct.clone(), serde_json::from_str(body).unwrap()))
            .collect()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn controller(base_url: &str) -> FormController {
    let locations = LocationIndex::from_map([(
        "Tunis".to_string(),
        vec!["La Marsa".to_string(), "Carthage".to_string()],
    )]);
    let predictor = HttpPredictor::new(base_url).unwrap();
    FormController::new(Arc::new(locations), Arc::new(predictor))
}

fn fill_la_marsa_apartment(form: &FormController) {
    form.set_property_type(PropertyType::Apartment);
    form.set_field(Field::Bedrooms, "3");
    form.set_field(Field::Bathrooms, "1");
    form.set_field(Field::Area, "80");
    form.set_state("Tunis");
    form.set_city("La Marsa");
}

#[tokio::test]
async fn apartment_in_la_marsa_shows_estimate() {
    let server = TestServer::spawn(StatusCode::OK, r#"{"id": 1, "price": 310000}"#).await;
    let form = controller(&format!("{}/", server.base_url));
    fill_la_marsa_apartment(&form);

    let result = form.submit().await.unwrap();
    assert_eq!(result.price, Some(310000.0));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let (content_type, body) = &requests[0];
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(
        *body,
        serde_json::json!({
            "n_bedrooms": "3",
            "n_bathrooms": "1",
            "area": "80",
            "city": "La Marsa",
            "state": "Tunis",
            "Type": "apartment",
        })
    );

    let state = form.snapshot();
    assert_eq!(state.view, View::Result);
    assert!(view::render(&state).contains("310,000 TND"));
}

#[tokio::test]
async fn null_price_renders_not_found() {
    let server = TestServer::spawn(StatusCode::OK, r#"{"price": null}"#).await;
    let form = controller(&server.base_url);
    fill_la_marsa_apartment(&form);

    form.submit().await.unwrap();
    assert!(view::render(&form.snapshot()).contains("Price data not found."));
}

#[tokio::test]
async fn missing_price_renders_not_found() {
    let server = TestServer::spawn(StatusCode::OK, r#"{"Type": "appartement"}"#).await;
    let form = controller(&server.base_url);
    fill_la_marsa_apartment(&form);

    let result = form.submit().await.unwrap();
    assert_eq!(result.price, None);
    assert_eq!(form.snapshot().view, View::Result);
    assert!(view::render(&form.snapshot()).contains("Price data not found."));
}

#[tokio::test]
async fn error_status_with_json_body_is_still_decoded() {
    let server =
        TestServer::spawn(StatusCode::INTERNAL_SERVER_ERROR, r#"{"price": null}"#).await;
    let form = controller(&server.base_url);
    fill_la_marsa_apartment(&form);

    assert!(form.submit().await.is_ok());
    assert_eq!(form.snapshot().view, View::Result);
}

#[tokio::test]
async fn non_json_body_leaves_form_untouched() {
    let server =
        TestServer::spawn(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").await;
    let form = controller(&server.base_url);
    fill_la_marsa_apartment(&form);
    let before = form.snapshot();

    let err = form.submit().await.unwrap_err();
    assert!(matches!(err, FormError::Request(PredictError::Decode(_))));
    assert_eq!(form.snapshot(), before);
    assert_eq!(form.snapshot().error, None);
}

#[tokio::test]
async fn unreachable_service_is_a_request_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let form = controller(&format!("http://{}", addr));
    fill_la_marsa_apartment(&form);

    let err = form.submit().await.unwrap_err();
    assert!(matches!(err, FormError::Request(PredictError::Request(_))));
    assert_eq!(form.snapshot().view, View::Form);
}

#[tokio::test]
async fn incomplete_form_never_reaches_the_service() {
    let server = TestServer::spawn(StatusCode::OK, r#"{"price": 1}"#).await;
    let form = controller(&server.base_url);
    form.set_property_type(PropertyType::Villa);
    form.set_field(Field::Area, "50");

    let err = form.submit().await.unwrap_err();
    assert!(matches!(err, FormError::Validation(_)));
    assert!(server.requests().is_empty());
    assert_eq!(form.snapshot().form.area, "");
}
