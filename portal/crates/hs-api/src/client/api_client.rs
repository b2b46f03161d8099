use crate::{ApiError, ApiResult};

use std::time::Duration;

use hs_core::{
    AuthResponse, CompanyStats, ContactInquiry, ContactReceipt, Identity, QuoteReceipt,
    QuoteRecord, QuoteRequest, RegistrationRequest, Shipment,
};
use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

/// HTTP client for the portal backend REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client with reqwest defaults
    ///
    /// # Arguments
    /// * `base_url` - Backend origin (e.g., "http://localhost:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &hs_config::ApiConfig) -> ApiResult<Self> {
        Self::with_timeout(&config.base_url, config.timeout())
    }

    /// Build a request, attaching the bearer token when one is given
    fn request(&self, method: Method, path: &str, access_token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(token) = access_token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute request, mapping any non-success status to an error
    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> ApiResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let url = response.url().path().to_string();
        let body = response.text().await?;

        debug!("{} -> {}", url, status.as_u16());

        if !status.is_success() {
            return Err(ApiError::from_status(
                status.as_u16(),
                Self::error_message(&body),
            ));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Pull a human-readable message out of an error body.
    ///
    /// The backend uses `message`, `error` (string or `{message}`), `detail`,
    /// or a `non_field_errors` list depending on which layer rejected the call.
    pub(crate) fn error_message(body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;

        let direct = ["message", "detail", "error"]
            .iter()
            .find_map(|key| value.get(key).and_then(Value::as_str));
        if let Some(message) = direct {
            return Some(message.to_string());
        }

        if let Some(message) = value
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
        {
            return Some(message.to_string());
        }

        value
            .get("non_field_errors")
            .and_then(Value::as_array)
            .and_then(|errors| errors.first())
            .and_then(Value::as_str)
            .map(String::from)
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Exchange email and password for a token pair
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let body = LoginRequest { email, password };
        let req = self
            .request(Method::POST, "/api/auth/login/", None)
            .json(&body);
        self.execute(req).await
    }

    /// Create an account; the backend signs the new user in immediately
    pub async fn register(&self, registration: &RegistrationRequest) -> ApiResult<AuthResponse> {
        let req = self
            .request(Method::POST, "/api/auth/register/", None)
            .json(registration);
        self.execute(req).await
    }

    /// Exchange a Google identity token for a token pair
    pub async fn google_login(&self, token: &str) -> ApiResult<AuthResponse> {
        #[derive(Serialize)]
        struct GoogleLoginRequest<'a> {
            token: &'a str,
        }

        let req = self
            .request(Method::POST, "/api/auth/google/", None)
            .json(&GoogleLoginRequest { token });
        self.execute(req).await
    }

    pub async fn fetch_profile(&self, access_token: &str) -> ApiResult<Identity> {
        let req = self.request(Method::GET, "/api/auth/profile/", Some(access_token));
        self.execute(req).await
    }

    // =========================================================================
    // Quote Operations
    // =========================================================================

    /// Submit a quote request.
    ///
    /// A session without a bearer token (demo identities) sends no
    /// Authorization header and is rejected by the backend.
    pub async fn submit_quote(
        &self,
        access_token: Option<&str>,
        quote: &QuoteRequest,
    ) -> ApiResult<QuoteReceipt> {
        let req = self
            .request(Method::POST, "/api/quote/", access_token)
            .json(quote);
        self.execute(req).await
    }

    pub async fn quote_status(
        &self,
        access_token: Option<&str>,
        quote_number: &str,
    ) -> ApiResult<QuoteRecord> {
        let path = format!("/api/quote/{}/", urlencoding::encode(quote_number));
        let req = self.request(Method::GET, &path, access_token);
        self.execute(req).await
    }

    /// Quotes submitted by the signed-in user
    pub async fn user_quotes(&self, access_token: Option<&str>) -> ApiResult<Vec<QuoteRecord>> {
        let req = self.request(Method::GET, "/api/user/quotes/", access_token);
        self.execute(req).await
    }

    // =========================================================================
    // Tracking Operations
    // =========================================================================

    /// Look up a shipment by tracking number. An unknown number is `ApiError::NotFound`.
    pub async fn track_shipment(
        &self,
        access_token: Option<&str>,
        tracking_number: &str,
    ) -> ApiResult<Shipment> {
        let path = format!("/api/track/{}/", urlencoding::encode(tracking_number));
        let req = self.request(Method::GET, &path, access_token);
        self.execute(req).await
    }

    pub async fn user_shipments(&self, access_token: Option<&str>) -> ApiResult<Vec<Shipment>> {
        let req = self.request(Method::GET, "/api/user/shipments/", access_token);
        self.execute(req).await
    }

    // =========================================================================
    // Public Operations
    // =========================================================================

    pub async fn submit_contact(&self, inquiry: &ContactInquiry) -> ApiResult<ContactReceipt> {
        let req = self
            .request(Method::POST, "/api/contact/", None)
            .json(inquiry);
        self.execute(req).await
    }

    pub async fn company_stats(&self) -> ApiResult<CompanyStats> {
        let req = self.request(Method::GET, "/api/stats/", None);
        self.execute(req).await
    }
}
