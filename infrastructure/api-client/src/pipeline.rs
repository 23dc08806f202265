use std::time::Duration;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::case_insensitive::CaseInsensitive;
use crate::config::ApiClientConfig;
use crate::error::{ApiError, ApiResult, ErrorCode};

/// One outbound call: verb, path relative to the base URL, optional JSON body,
/// optional operation label and timeout override.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Option<Value>,
    body_error: Option<String>,
    operation: Option<String>,
    timeout: Option<Duration>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            body_error: None,
            operation: None,
            timeout: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attaches a JSON body. A body that fails to serialize is reported by the
    /// pipeline as `UNEXPECTED_ERROR` and nothing is sent.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => {
                self.body = Some(value);
                self.body_error = None;
            }
            Err(e) => {
                self.body = None;
                self.body_error = Some(e.to_string());
            }
        }
        self
    }

    pub fn operation(mut self, label: impl Into<String>) -> Self {
        self.operation = Some(label.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn label(&self) -> String {
        self.operation
            .clone()
            .unwrap_or_else(|| format!("{} {}", self.method, self.path))
    }
}

/// Executes [`ApiRequest`]s and classifies every outcome into an [`ApiResult`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Build failure is kept and reported per request as `UNEXPECTED_ERROR`.
    http: Result<Client, String>,
    base_url: String,
    default_timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &ApiClientConfig) -> Self {
        let http = Client::builder().build().map_err(|e| e.to_string());

        Self {
            http,
            base_url: config.base_url.clone(),
            default_timeout: config.timeout,
        }
    }

    /// Runs the request and decodes a JSON payload of type `T`.
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let operation = request.label();
        let outcome = self
            .fetch(&request, &operation)
            .await
            .and_then(|body| decode(&body, &operation));
        log_outcome(&operation, &outcome);
        outcome
    }

    /// Runs a request whose success carries no payload (e.g. `204 No Content`).
    pub async fn execute_empty(&self, request: ApiRequest) -> ApiResult<()> {
        let operation = request.label();
        let outcome = self.fetch(&request, &operation).await.map(|_| ());
        log_outcome(&operation, &outcome);
        outcome
    }

    /// Sends the request and reads the body of a success response, all under
    /// the request timeout. Dropping the in-flight future on timeout does not
    /// cancel work already accepted by the server.
    async fn fetch(&self, request: &ApiRequest, operation: &str) -> ApiResult<String> {
        if let Some(message) = &request.body_error {
            return Err(ApiError::unexpected(
                operation,
                std::any::type_name::<serde_json::Error>(),
                message.clone(),
            ));
        }

        let timeout = request.timeout.unwrap_or(self.default_timeout);
        match tokio::time::timeout(timeout, self.send(request, operation)).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::timeout(operation, timeout)),
        }
    }

    async fn send(&self, request: &ApiRequest, operation: &str) -> ApiResult<String> {
        let http = self.http.as_ref().map_err(|message| {
            ApiError::unexpected(
                operation,
                std::any::type_name::<reqwest::Error>(),
                message.clone(),
            )
        })?;
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = http.request(request.method.clone(), &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(operation, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::http(operation, status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| transport_error(operation, e))
    }
}

fn transport_error(operation: &str, error: reqwest::Error) -> ApiError {
    let kind = std::any::type_name::<reqwest::Error>();
    if error.is_builder() {
        ApiError::unexpected(operation, kind, error.to_string())
    } else {
        ApiError::network(operation, kind, error.to_string())
    }
}

fn decode<T: DeserializeOwned>(body: &str, operation: &str) -> ApiResult<T> {
    if body.trim().is_empty() {
        return Err(ApiError::empty_response(operation));
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| ApiError::parsing(operation, &e))?;
    if value.is_null() {
        return Err(ApiError::invalid_data(operation));
    }

    T::deserialize(CaseInsensitive(value)).map_err(|e| ApiError::parsing(operation, &e))
}

fn log_outcome<T>(operation: &str, outcome: &ApiResult<T>) {
    match outcome {
        Ok(_) => info!(operation, "Request succeeded"),
        Err(e) => match e.code {
            ErrorCode::HttpError | ErrorCode::EmptyResponse | ErrorCode::InvalidData => warn!(
                operation,
                code = %e.code,
                context = ?e.context.entries(),
                "{}",
                e.message
            ),
            _ => error!(
                operation,
                code = %e.code,
                context = ?e.context.entries(),
                "{}",
                e.message
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use serde::Deserialize;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::error::FailureDetail;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Item {
        id: i64,
        name: String,
        is_available: bool,
    }

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&ApiClientConfig::new(server.uri()))
    }

    async fn respond(server: &MockServer, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/items/1"))
            .respond_with(template)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn should_decode_successful_payload() {
        let server = MockServer::start().await;
        respond(
            &server,
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 1, "name": "Mouse", "isAvailable": true})),
        )
        .await;

        let item: Item = client_for(&server)
            .execute(ApiRequest::get("/items/1"))
            .await
            .unwrap();

        assert_eq!(
            item,
            Item {
                id: 1,
                name: "Mouse".to_string(),
                is_available: true
            }
        );
    }

    #[tokio::test]
    async fn should_match_fields_case_insensitively() {
        let server = MockServer::start().await;
        respond(
            &server,
            ResponseTemplate::new(200)
                .set_body_json(json!({"ID": 1, "Name": "Mouse", "IsAvailable": false})),
        )
        .await;

        let item: Item = client_for(&server)
            .execute(ApiRequest::get("/items/1"))
            .await
            .unwrap();

        assert_eq!(item.id, 1);
        assert_eq!(item.name, "Mouse");
        assert!(!item.is_available);
    }

    #[tokio::test]
    async fn should_match_multi_word_fields_in_single_case() {
        for body in [
            json!({"id": 1, "name": "Mouse", "isavailable": true}),
            json!({"ID": 1, "NAME": "Mouse", "ISAVAILABLE": true}),
        ] {
            let server = MockServer::start().await;
            respond(&server, ResponseTemplate::new(200).set_body_json(body)).await;

            let item: Item = client_for(&server)
                .execute(ApiRequest::get("/items/1"))
                .await
                .unwrap();

            assert_eq!(
                item,
                Item {
                    id: 1,
                    name: "Mouse".to_string(),
                    is_available: true
                }
            );
        }
    }

    #[tokio::test]
    async fn should_classify_error_status_as_http_error() {
        let server = MockServer::start().await;
        respond(&server, ResponseTemplate::new(404)).await;

        let error = client_for(&server)
            .execute::<Item>(ApiRequest::get("/items/1").operation("get item"))
            .await
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::HttpError);
        assert_eq!(error.status(), Some(404));
        assert!(error.message.contains("not found"));
        assert_eq!(error.context.operation.as_deref(), Some("get item"));
    }

    #[tokio::test]
    async fn should_use_generic_message_for_unlisted_status() {
        let server = MockServer::start().await;
        respond(&server, ResponseTemplate::new(409)).await;

        let error = client_for(&server)
            .execute::<Item>(ApiRequest::get("/items/1"))
            .await
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::HttpError);
        assert!(error.message.contains("409"));
        assert_eq!(error.context.operation.as_deref(), Some("GET /items/1"));
    }

    #[tokio::test]
    async fn should_report_empty_response() {
        let server = MockServer::start().await;
        respond(&server, ResponseTemplate::new(200)).await;

        let error = client_for(&server)
            .execute::<Item>(ApiRequest::get("/items/1"))
            .await
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::EmptyResponse);
    }

    #[tokio::test]
    async fn should_report_parsing_error_for_malformed_json() {
        let server = MockServer::start().await;
        respond(
            &server,
            ResponseTemplate::new(200).set_body_string("{\"id\": 1, \"name\": "),
        )
        .await;

        let error = client_for(&server)
            .execute::<Item>(ApiRequest::get("/items/1"))
            .await
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::ParsingError);
        assert!(matches!(
            error.context.detail,
            FailureDetail::Exception { .. }
        ));
    }

    #[tokio::test]
    async fn should_report_parsing_error_for_wrong_shape() {
        let server = MockServer::start().await;
        respond(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({"id": "one"})),
        )
        .await;

        let error = client_for(&server)
            .execute::<Item>(ApiRequest::get("/items/1"))
            .await
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::ParsingError);
    }

    #[tokio::test]
    async fn should_report_invalid_data_for_null_payload() {
        let server = MockServer::start().await;
        respond(&server, ResponseTemplate::new(200).set_body_string("null")).await;

        let error = client_for(&server)
            .execute::<Item>(ApiRequest::get("/items/1"))
            .await
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::InvalidData);
    }

    #[tokio::test]
    async fn should_time_out_slow_responses() {
        let server = MockServer::start().await;
        respond(
            &server,
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 1, "name": "Mouse", "isAvailable": true}))
                .set_delay(Duration::from_millis(500)),
        )
        .await;

        let error = client_for(&server)
            .execute::<Item>(
                ApiRequest::get("/items/1")
                    .operation("slow item")
                    .timeout(Duration::from_millis(50)),
            )
            .await
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::Timeout);
        assert_eq!(
            error.context.detail,
            FailureDetail::Timeout {
                timeout: Duration::from_millis(50)
            }
        );
        assert_eq!(
            error.context.entries().get("timeoutSeconds").map(String::as_str),
            Some("0.05")
        );
    }

    #[tokio::test]
    async fn should_apply_client_default_timeout() {
        let server = MockServer::start().await;
        respond(
            &server,
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 1, "name": "Mouse", "isAvailable": true}))
                .set_delay(Duration::from_millis(500)),
        )
        .await;
        let client = ApiClient::new(
            &ApiClientConfig::new(server.uri()).with_timeout(Duration::from_millis(50)),
        );

        let error = client
            .execute::<Item>(ApiRequest::get("/items/1"))
            .await
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::Timeout);
    }

    #[tokio::test]
    async fn should_report_network_error_when_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);
        let client = ApiClient::new(&ApiClientConfig::new(format!("http://{address}")));

        let error = client
            .execute::<Item>(ApiRequest::get("/items/1"))
            .await
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::NetworkError);
        assert!(error.context.entries().contains_key("exceptionMessage"));
    }

    #[tokio::test]
    async fn should_report_unexpected_error_for_invalid_base_url() {
        let client = ApiClient::new(&ApiClientConfig::new("not a url"));

        let error = client
            .execute::<Item>(ApiRequest::get("/items/1"))
            .await
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::UnexpectedError);
    }

    #[tokio::test]
    async fn should_report_unexpected_error_when_http_client_failed_to_build() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let client = ApiClient {
            http: Err("TLS backend unavailable".to_string()),
            base_url: server.uri(),
            default_timeout: Duration::from_secs(1),
        };

        let error = client
            .execute::<Item>(ApiRequest::get("/items/1"))
            .await
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::UnexpectedError);
        assert_eq!(
            error.context.entries().get("exceptionMessage").map(String::as_str),
            Some("TLS backend unavailable")
        );
    }

    #[tokio::test]
    async fn should_not_send_body_that_fails_to_serialize() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;
        let mut unserializable = BTreeMap::new();
        unserializable.insert(vec![1u8], 1u8);

        let error = client_for(&server)
            .execute::<Item>(ApiRequest::post("/items").json(&unserializable))
            .await
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::UnexpectedError);
    }

    #[tokio::test]
    async fn should_send_json_body_for_write_verbs() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/items/1"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"name": "Mouse"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": 1, "name": "Mouse", "isAvailable": true})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let item: Item = client_for(&server)
            .execute(ApiRequest::put("/items/1").json(&json!({"name": "Mouse"})))
            .await
            .unwrap();

        assert_eq!(item.name, "Mouse");
    }

    #[tokio::test]
    async fn should_accept_no_content_for_empty_requests() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/items/1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .execute_empty(ApiRequest::delete("/items/1"))
            .await;

        assert!(outcome.is_ok());
    }
}
