//! # Stripe Customers
//!
//! Implementation of the Stripe Customers API (`POST /v1/customers`).

use crate::config::StripeConfig;
use async_trait::async_trait;
use chrono::DateTime;
use customer_core::{
    CustomerError, CustomerProvider, CustomerResult, NewCustomer, ProviderCustomer,
};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

const PROVIDER: &str = "stripe";

/// Thin per-request Stripe client.
///
/// Borrows the shared HTTP connection pool and the immutable configuration;
/// building one is cheap and is done for every create-customer call.
pub struct StripeClient<'a> {
    http: &'a Client,
    config: &'a StripeConfig,
}

impl<'a> StripeClient<'a> {
    /// Build a client, failing when the configuration cannot authenticate
    pub fn new(http: &'a Client, config: &'a StripeConfig) -> CustomerResult<Self> {
        if config.secret_key.trim().is_empty() {
            return Err(CustomerError::Configuration(
                "Stripe secret key is empty".to_string(),
            ));
        }
        if config.api_version.trim().is_empty() {
            return Err(CustomerError::Configuration(
                "Stripe API version is empty".to_string(),
            ));
        }

        Ok(Self { http, config })
    }

    /// Build form data for the Stripe API
    fn form_params(customer: &NewCustomer) -> Vec<(String, String)> {
        let mut form_params = Vec::with_capacity(3 + customer.metadata.len());

        if let Some(ref email) = customer.email {
            form_params.push(("email".to_string(), email.clone()));
        }
        form_params.push(("name".to_string(), customer.name.clone()));
        if let Some(ref phone) = customer.phone {
            form_params.push(("phone".to_string(), phone.clone()));
        }
        for (key, value) in &customer.metadata {
            form_params.push((format!("metadata[{}]", key), value.clone()));
        }

        form_params
    }

    /// Create a Stripe customer
    pub async fn create_customer(
        &self,
        customer: &NewCustomer,
    ) -> CustomerResult<ProviderCustomer> {
        let form_params = Self::form_params(customer);
        let url = format!("{}/v1/customers", self.config.api_base_url);

        debug!("Creating Stripe customer: {} form fields", form_params.len());

        let response = self
            .http
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(&form_params)
            .send()
            .await
            .map_err(|e| CustomerError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CustomerError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                debug!(
                    error_type = ?error_response.error.error_type,
                    code = ?error_response.error.code,
                    param = ?error_response.error.param,
                    "Stripe rejected customer"
                );
                return Err(CustomerError::Provider {
                    provider: PROVIDER.to_string(),
                    message: error_response.error.message,
                });
            }

            return Err(CustomerError::Provider {
                provider: PROVIDER.to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let customer_response: StripeCustomerResponse =
            serde_json::from_str(&body).map_err(|e| {
                CustomerError::Serialization(format!("Failed to parse Stripe response: {}", e))
            })?;

        Ok(customer_response.into())
    }
}

/// Stripe-backed [`CustomerProvider`]
pub struct StripeCustomerProvider {
    config: StripeConfig,
    http: Client,
}

impl StripeCustomerProvider {
    /// Create a provider with its own HTTP connection pool
    pub fn new(config: StripeConfig) -> CustomerResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                CustomerError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self::with_http_client(config, http))
    }

    /// Create a provider sharing an existing HTTP client
    pub fn with_http_client(config: StripeConfig, http: Client) -> Self {
        Self { config, http }
    }

    /// Create from environment variables
    pub fn from_env() -> CustomerResult<Self> {
        Self::new(StripeConfig::from_env()?)
    }

    pub fn config(&self) -> &StripeConfig {
        &self.config
    }
}

#[async_trait]
impl CustomerProvider for StripeCustomerProvider {
    #[instrument(skip(self, customer), fields(cms_id = ?customer.cms_id()))]
    async fn create_customer(&self, customer: &NewCustomer) -> CustomerResult<ProviderCustomer> {
        let client = StripeClient::new(&self.http, &self.config)?;
        let created = client.create_customer(customer).await?;

        info!(
            email = ?created.email,
            name = ?created.name,
            created = ?created.created.map(|t| t.to_rfc3339()),
            "Created Stripe customer: id={}",
            created.id
        );

        Ok(created)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeCustomerResponse {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    created: Option<i64>,
}

impl From<StripeCustomerResponse> for ProviderCustomer {
    fn from(response: StripeCustomerResponse) -> Self {
        Self {
            id: response.id,
            email: response.email,
            name: response.name,
            created: response
                .created
                .and_then(|ts| DateTime::from_timestamp(ts, 0)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
    #[serde(default, rename = "type")]
    error_type: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    param: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn jane(first: &str) -> NewCustomer {
        let mut metadata = BTreeMap::new();
        metadata.insert("cms_id".to_string(), "cms-123".to_string());
        NewCustomer {
            email: Some("jane@example.com".into()),
            name: format!("{} Doe", first),
            phone: Some("+15555550100".into()),
            metadata,
        }
    }

    fn provider_for(mock_server: &MockServer) -> StripeCustomerProvider {
        let config = StripeConfig::new("sk_test_abc123").with_api_base_url(mock_server.uri());
        StripeCustomerProvider::new(config).unwrap()
    }

    /// Decode the form-encoded body of a captured request
    fn form_fields(request: &Request) -> HashMap<String, String> {
        let body = String::from_utf8(request.body.clone()).unwrap();
        reqwest::Url::parse(&format!("http://form.local/?{}", body))
            .unwrap()
            .query_pairs()
            .into_owned()
            .collect()
    }

    #[test]
    fn test_form_params_order_and_keys() {
        let params = StripeClient::form_params(&jane("Jane"));
        let keys: Vec<&str> = params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["email", "name", "phone", "metadata[cms_id]"]);
    }

    #[test]
    fn test_form_params_skip_absent_contact_fields() {
        let params = StripeClient::form_params(&NewCustomer {
            name: " Doe".into(),
            ..Default::default()
        });
        assert_eq!(params, vec![("name".to_string(), " Doe".to_string())]);
    }

    #[test]
    fn test_client_rejects_empty_secret() {
        let http = Client::new();
        let config = StripeConfig::new("");
        let result = StripeClient::new(&http, &config);
        assert!(matches!(result, Err(CustomerError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_create_customer_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/customers"))
            .and(header("Authorization", "Bearer sk_test_abc123"))
            .and(header("Stripe-Version", "2022-11-15"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "cus_NffrFeUfNV2Hib",
                "object": "customer",
                "email": "jane@example.com",
                "name": "Jane Doe",
                "created": 1680893993,
                "metadata": { "cms_id": "cms-123" }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = provider_for(&mock_server);
        let created = provider.create_customer(&jane("Jane")).await.unwrap();

        assert_eq!(created.id, "cus_NffrFeUfNV2Hib");
        assert_eq!(created.name.as_deref(), Some("Jane Doe"));
        assert_eq!(created.created.map(|t| t.timestamp()), Some(1680893993));
    }

    #[tokio::test]
    async fn test_create_customer_sends_form_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/customers"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "cus_1" })),
            )
            .mount(&mock_server)
            .await;

        let provider = provider_for(&mock_server);
        provider.create_customer(&jane("")).await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);

        let fields = form_fields(&requests[0]);
        assert_eq!(fields["email"], "jane@example.com");
        assert_eq!(fields["name"], " Doe");
        assert_eq!(fields["phone"], "+15555550100");
        assert_eq!(fields["metadata[cms_id]"], "cms-123");
        assert!(requests[0].headers.get("Idempotency-Key").is_none());
    }

    #[tokio::test]
    async fn test_stripe_error_message_is_passed_through() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/customers"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": {
                    "message": "Invalid email address: nope",
                    "param": "email",
                    "type": "invalid_request_error"
                }
            })))
            .mount(&mock_server)
            .await;

        let provider = provider_for(&mock_server);
        let err = provider.create_customer(&jane("Jane")).await.unwrap_err();

        assert!(matches!(err, CustomerError::Provider { .. }));
        assert_eq!(err.message(), "Invalid email address: nope");
    }

    #[tokio::test]
    async fn test_unparseable_error_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/customers"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&mock_server)
            .await;

        let provider = provider_for(&mock_server);
        let err = provider.create_customer(&jane("Jane")).await.unwrap_err();

        assert_eq!(err.message(), "HTTP 502 Bad Gateway: bad gateway");
    }

    #[tokio::test]
    async fn test_unparseable_success_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/customers"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let provider = provider_for(&mock_server);
        let err = provider.create_customer(&jane("Jane")).await.unwrap_err();

        assert!(matches!(err, CustomerError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_empty_secret_never_reaches_stripe() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let config = StripeConfig::new("").with_api_base_url(mock_server.uri());
        let provider = StripeCustomerProvider::new(config).unwrap();
        let err = provider.create_customer(&jane("Jane")).await.unwrap_err();

        assert!(matches!(err, CustomerError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_unreachable_stripe_is_network_error() {
        let config = StripeConfig::new("sk_test_abc123").with_api_base_url("http://127.0.0.1:1");
        let provider = StripeCustomerProvider::new(config).unwrap();
        let err = provider.create_customer(&jane("Jane")).await.unwrap_err();

        assert!(matches!(err, CustomerError::Network(_)));
    }
}
