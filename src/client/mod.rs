//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    AcknowledgeResponse, AcknowledgeVerification, ApiError, ApiKey, ApiSecret, CancelResponse,
    CancelVerification, ResponseFormat, SendSms, SendSmsResponse, SendVerification,
    ValidationError, VerificationResponse,
};
use crate::transport::TransportError;

/// Base URL of the Movider REST API.
pub const DEFAULT_ENDPOINT: &str = "https://api.movider.co/v1";

/// Wall-clock limit applied to every request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

const SMS_PATH: &str = "/sms";
const VERIFY_PATH: &str = "/verify";
const VERIFY_ACKNOWLEDGE_PATH: &str = "/verify/acknowledge";
const VERIFY_CANCEL_PATH: &str = "/verify/cancel";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

type Decoder<T> = fn(ResponseFormat, &str) -> Result<T, TransportError>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

#[derive(Debug, thiserror::Error)]
enum HttpError {
    #[error("request timed out: {0}")]
    Timeout(#[source] Box<dyn StdError + Send + Sync>),

    #[error("request failed: {0}")]
    Failed(#[source] Box<dyn StdError + Send + Sync>),
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(Box::new(err))
        } else {
            Self::Failed(Box::new(err))
        }
    }
}

impl HttpError {
    fn into_client_error(self) -> MoviderError {
        match self {
            Self::Timeout(source) => MoviderError::Timeout(source),
            Self::Failed(source) => MoviderError::Transport(source),
        }
    }
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        accept: &'static str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, HttpError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        accept: &'static str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, HttpError>> {
        Box::pin(async move {
            // `form` sets `Content-Type: application/x-www-form-urlencoded`.
            let response = self
                .client
                .post(url)
                .header(reqwest::header::ACCEPT, accept)
                .timeout(self.timeout)
                .form(&params)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// API key and secret sent with every Movider request.
///
/// Both parts are validated as non-empty; the secret never shows up in `Debug` output.
pub struct Credentials {
    api_key: ApiKey,
    api_secret: ApiSecret,
}

impl Credentials {
    /// Create validated credentials.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            api_key: ApiKey::new(api_key)?,
            api_secret: ApiSecret::new(api_secret)?,
        })
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    fn push_form_params(&self, params: &mut Vec<(String, String)>) {
        params.push((ApiKey::FIELD.to_owned(), self.api_key.as_str().to_owned()));
        params.push((
            ApiSecret::FIELD.to_owned(),
            self.api_secret.expose().to_owned(),
        ));
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`MoviderClient`].
///
/// Exactly one of these is returned for a failed call; nothing is retried.
pub enum MoviderError {
    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP client / transport failure (DNS, TLS, connection refused, body read).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The request did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(#[source] Box<dyn StdError + Send + Sync>),

    /// Response body did not match the expected success or error shape.
    #[error("could not decode response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// Movider answered with its error shape.
    #[error("API error (HTTP {status}): {error}")]
    Api { status: u16, error: ApiError },

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

impl MoviderError {
    /// `true` for network failures, timeouts included.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// The error body Movider returned, if this is an [`MoviderError::Api`].
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`MoviderClient`].
///
/// Use this when you need to customize the endpoint, timeout, response format, or user-agent.
pub struct MoviderClientBuilder {
    credentials: Credentials,
    endpoint: String,
    timeout: Duration,
    format: ResponseFormat,
    user_agent: Option<String>,
}

impl MoviderClientBuilder {
    /// Create a builder with the default endpoint, a 15 second timeout and JSON responses.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            format: ResponseFormat::Json,
            user_agent: None,
        }
    }

    /// Override the API base URL; operation paths (`/sms`, `/verify`, ...) are appended to it.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the timeout applied to each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Choose the response body format requested through `Accept`.
    pub fn response_format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`MoviderClient`].
    pub fn build(self) -> Result<MoviderClient, MoviderError> {
        url::Url::parse(self.endpoint.trim())?;

        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| MoviderError::Transport(Box::new(err)))?;

        Ok(MoviderClient {
            credentials: self.credentials,
            endpoint: self.endpoint.trim().trim_end_matches('/').to_owned(),
            format: self.format,
            http: Arc::new(ReqwestTransport {
                client,
                timeout: self.timeout,
            }),
        })
    }
}

#[derive(Clone)]
/// High-level Movider client.
///
/// This type orchestrates form encoding, the HTTP call, and response decoding for
/// `sms`, `verify`, `verify/acknowledge` and `verify/cancel`. An HTTP 200 answer is
/// decoded as the operation's success shape; any other status is decoded as the
/// shared error shape and returned as [`MoviderError::Api`].
pub struct MoviderClient {
    credentials: Credentials,
    endpoint: String,
    format: ResponseFormat,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for MoviderClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoviderClient")
            .field("api_key", &self.credentials.api_key)
            .field("endpoint", &self.endpoint)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl MoviderClient {
    /// Create a client using the default endpoint, timeout, and JSON responses.
    ///
    /// For more customization, use [`MoviderClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            format: ResponseFormat::Json,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
                timeout: DEFAULT_TIMEOUT,
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> MoviderClientBuilder {
        MoviderClientBuilder::new(credentials)
    }

    /// Send an SMS to every recipient of `request`.
    ///
    /// Errors:
    /// - [`MoviderError::Transport`] / [`MoviderError::Timeout`] when the call cannot complete,
    /// - [`MoviderError::Api`] for a non-200 response carrying the error shape,
    /// - [`MoviderError::Decode`] when the body matches neither shape.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "MoviderClient::send_sms",
            skip_all,
            fields(recipients = request.recipients().len())
        )
    )]
    pub async fn send_sms(&self, request: SendSms) -> Result<SendSmsResponse, MoviderError> {
        let form = crate::transport::encode_send_sms_form(&request);
        self.execute(SMS_PATH, form, crate::transport::decode_send_sms_response)
            .await
    }

    /// Start a verification: Movider generates a code and sends it to the recipient.
    ///
    /// Keep the returned `request_id` to acknowledge or cancel the verification later.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "MoviderClient::send_verification", skip_all)
    )]
    pub async fn send_verification(
        &self,
        request: SendVerification,
    ) -> Result<VerificationResponse, MoviderError> {
        let form = crate::transport::encode_send_verification_form(&request);
        self.execute(
            VERIFY_PATH,
            form,
            crate::transport::decode_verification_response,
        )
        .await
    }

    /// Confirm the code the end user typed back, closing the verification.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "MoviderClient::acknowledge_verification",
            skip_all,
            fields(request_id = %request.request_id().as_str())
        )
    )]
    pub async fn acknowledge_verification(
        &self,
        request: AcknowledgeVerification,
    ) -> Result<AcknowledgeResponse, MoviderError> {
        let form = crate::transport::encode_acknowledge_form(&request);
        self.execute(
            VERIFY_ACKNOWLEDGE_PATH,
            form,
            crate::transport::decode_acknowledge_response,
        )
        .await
    }

    /// Abort a verification before it is acknowledged.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "MoviderClient::cancel_verification",
            skip_all,
            fields(request_id = %request.request_id().as_str())
        )
    )]
    pub async fn cancel_verification(
        &self,
        request: CancelVerification,
    ) -> Result<CancelResponse, MoviderError> {
        let form = crate::transport::encode_cancel_form(&request);
        self.execute(
            VERIFY_CANCEL_PATH,
            form,
            crate::transport::decode_cancel_response,
        )
        .await
    }

    async fn execute<T>(
        &self,
        path: &str,
        form: Vec<(String, String)>,
        decode: Decoder<T>,
    ) -> Result<T, MoviderError> {
        let mut params = Vec::<(String, String)>::new();
        self.credentials.push_form_params(&mut params);
        params.extend(form);

        let url = format!("{}{}", self.endpoint, path);
        let response = self
            .http
            .post_form(&url, self.format.accept(), params)
            .await
            .map_err(HttpError::into_client_error)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(status = response.status, path, "received Movider response");

        if response.status != 200 {
            let error = crate::transport::decode_api_error(self.format, &response.body)
                .map_err(|err| MoviderError::Decode {
                    status: response.status,
                    source: Box::new(err),
                })?;

            #[cfg(feature = "tracing")]
            tracing::warn!(
                status = response.status,
                code = error.code,
                name = %error.name,
                "Movider returned an error"
            );

            return Err(MoviderError::Api {
                status: response.status,
                error,
            });
        }

        decode(self.format, &response.body).map_err(|err| MoviderError::Decode {
            status: response.status,
            source: Box::new(err),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::domain::{
        CodeLength, MessageText, Recipient, RequestId, SmsOptions, VerificationCode,
        VerifyOptions,
    };

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        calls: usize,
        last_url: Option<String>,
        last_accept: Option<&'static str>,
        last_params: Vec<(String, String)>,
        response_status: u16,
        response_body: String,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    calls: 0,
                    last_url: None,
                    last_accept: None,
                    last_params: Vec::new(),
                    response_status,
                    response_body: response_body.into(),
                })),
            }
        }

        fn calls(&self) -> usize {
            self.state.lock().unwrap().calls
        }

        fn last_request(&self) -> (Option<String>, Option<&'static str>, Vec<(String, String)>) {
            let state = self.state.lock().unwrap();
            (
                state.last_url.clone(),
                state.last_accept,
                state.last_params.clone(),
            )
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_form<'a>(
            &'a self,
            url: &'a str,
            accept: &'static str,
            params: Vec<(String, String)>,
        ) -> BoxFuture<'a, Result<HttpResponse, HttpError>> {
            Box::pin(async move {
                let (status, body) = {
                    let mut state = self.state.lock().unwrap();
                    state.calls += 1;
                    state.last_url = Some(url.to_owned());
                    state.last_accept = Some(accept);
                    state.last_params = params;
                    (state.response_status, state.response_body.clone())
                };
                Ok(HttpResponse { status, body })
            })
        }
    }

    #[derive(Debug, Clone)]
    struct FailingTransport {
        timeout: bool,
        calls: Arc<Mutex<usize>>,
    }

    impl FailingTransport {
        fn new(timeout: bool) -> Self {
            Self {
                timeout,
                calls: Arc::new(Mutex::new(0)),
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    impl HttpTransport for FailingTransport {
        fn post_form<'a>(
            &'a self,
            _url: &'a str,
            _accept: &'static str,
            _params: Vec<(String, String)>,
        ) -> BoxFuture<'a, Result<HttpResponse, HttpError>> {
            Box::pin(async move {
                *self.calls.lock().unwrap() += 1;
                let source: Box<dyn StdError + Send + Sync> = "connection refused".into();
                if self.timeout {
                    Err(HttpError::Timeout(source))
                } else {
                    Err(HttpError::Failed(source))
                }
            })
        }
    }

    fn assert_param(params: &[(String, String)], key: &str, value: &str) {
        assert!(
            params.iter().any(|(k, v)| k == key && v == value),
            "missing param {key}={value}; got: {params:?}"
        );
    }

    fn credentials() -> Credentials {
        Credentials::new("test_key", "test_secret").unwrap()
    }

    fn make_client(transport: impl HttpTransport + 'static, format: ResponseFormat) -> MoviderClient {
        MoviderClient {
            credentials: credentials(),
            endpoint: "https://example.invalid/v1".to_owned(),
            format,
            http: Arc::new(transport),
        }
    }

    fn sms_request(recipients: &[&str], text: &str) -> Result<SendSms, ValidationError> {
        let recipients = recipients
            .iter()
            .map(|it| Recipient::new(*it))
            .collect::<Result<Vec<_>, _>>()?;
        SendSms::new(recipients, MessageText::new(text)?, SmsOptions::default())
    }

    async fn send_sms_with(
        client: &MoviderClient,
        recipients: &[&str],
        text: &str,
    ) -> Result<SendSmsResponse, MoviderError> {
        let request = sms_request(recipients, text)?;
        client.send_sms(request).await
    }

    const SMS_OK: &str = r#"{"remaining_balance":1.5,"total_sms":1,"phone_number_list":[{"number":"6680000000","message_id":"abc","price":0.05}],"bad_phone_number_list":[]}"#;
    const BAD_PARAM: &str =
        r#"{"error":{"code":4,"name":"bad_param","description":"to is invalid"}}"#;

    #[tokio::test]
    async fn send_sms_posts_credentials_and_parses_ok_response() {
        let transport = FakeTransport::new(200, SMS_OK);
        let client = make_client(transport.clone(), ResponseFormat::Json);

        let response = send_sms_with(&client, &["111", "222"], "hello")
            .await
            .unwrap();
        assert_eq!(response.remaining_balance, 1.5);
        assert_eq!(response.total_sms, 1);
        assert_eq!(response.phone_number_list.len(), 1);
        assert_eq!(response.phone_number_list[0].message_id, "abc");

        let (url, accept, params) = transport.last_request();
        assert_eq!(url.as_deref(), Some("https://example.invalid/v1/sms"));
        assert_eq!(accept, Some("application/json"));
        assert_param(&params, "api_key", "test_key");
        assert_param(&params, "api_secret", "test_secret");
        assert_param(&params, "to", "111,222");
        assert_param(&params, "text", "hello");
        assert_param(&params, "tag", "");
    }

    #[tokio::test]
    async fn invalid_sms_input_never_reaches_transport() {
        let transport = FakeTransport::new(200, SMS_OK);
        let client = make_client(transport.clone(), ResponseFormat::Json);

        let err = send_sms_with(&client, &[], "hello").await.unwrap_err();
        assert!(matches!(
            err,
            MoviderError::Validation(ValidationError::Empty { field: "to" })
        ));

        let err = send_sms_with(&client, &["111"], "").await.unwrap_err();
        assert!(matches!(
            err,
            MoviderError::Validation(ValidationError::Empty { field: "text" })
        ));

        let err = send_sms_with(&client, &["111,222"], "hello").await.unwrap_err();
        assert!(matches!(
            err,
            MoviderError::Validation(ValidationError::ContainsSeparator { field: "to", .. })
        ));

        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn error_status_maps_to_api_error() {
        let transport = FakeTransport::new(400, BAD_PARAM);
        let client = make_client(transport.clone(), ResponseFormat::Json);

        let err = send_sms_with(&client, &["111"], "hello").await.unwrap_err();
        assert_eq!(transport.calls(), 1);
        match err {
            MoviderError::Api { status, error } => {
                assert_eq!(status, 400);
                assert_eq!(error.code, 4);
                assert_eq!(error.name, "bad_param");
                assert_eq!(error.description, "to is invalid");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn success_status_other_than_200_is_treated_as_error_shape() {
        let transport = FakeTransport::new(201, SMS_OK);
        let client = make_client(transport, ResponseFormat::Json);

        let err = send_sms_with(&client, &["111"], "hello").await.unwrap_err();
        assert!(matches!(err, MoviderError::Decode { status: 201, .. }));
    }

    #[tokio::test]
    async fn unparseable_error_body_maps_to_decode_error() {
        let transport = FakeTransport::new(502, "Bad Gateway");
        let client = make_client(transport, ResponseFormat::Json);

        let err = send_sms_with(&client, &["111"], "hello").await.unwrap_err();
        assert!(matches!(err, MoviderError::Decode { status: 502, .. }));
        assert!(err.api_error().is_none());
    }

    #[tokio::test]
    async fn invalid_success_body_maps_to_decode_error() {
        let transport = FakeTransport::new(200, "{ not json }");
        let client = make_client(transport, ResponseFormat::Json);

        let err = send_sms_with(&client, &["111"], "hello").await.unwrap_err();
        assert!(matches!(err, MoviderError::Decode { status: 200, .. }));
    }

    #[tokio::test]
    async fn transport_failures_are_not_retried() {
        let transport = FailingTransport::new(false);
        let client = make_client(transport.clone(), ResponseFormat::Json);
        let err = send_sms_with(&client, &["111"], "hello").await.unwrap_err();
        assert!(matches!(err, MoviderError::Transport(_)));
        assert!(err.is_transport());
        assert!(!err.is_timeout());
        assert_eq!(transport.calls(), 1);

        let transport = FailingTransport::new(true);
        let client = make_client(transport.clone(), ResponseFormat::Json);
        let request = CancelVerification::new(RequestId::new("req-1").unwrap());
        let err = client.cancel_verification(request).await.unwrap_err();
        assert!(err.is_timeout());
        assert!(err.is_transport());
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn send_verification_uses_verify_path() {
        let transport = FakeTransport::new(
            200,
            r#"{"request_id":"req-1","number":"66812345678"}"#,
        );
        let client = make_client(transport.clone(), ResponseFormat::Json);
        let request = SendVerification::new(
            Recipient::new("66812345678").unwrap(),
            VerifyOptions {
                code_length: Some(CodeLength::Six),
                ..Default::default()
            },
        );

        let response = client.send_verification(request).await.unwrap();
        assert_eq!(response.request_id.as_str(), "req-1");
        assert_eq!(response.number, "66812345678");

        let (url, _, params) = transport.last_request();
        assert_eq!(url.as_deref(), Some("https://example.invalid/v1/verify"));
        assert_param(&params, "api_key", "test_key");
        assert_param(&params, "to", "66812345678");
        assert_param(&params, "code_length", "6");
        assert_param(&params, "pin_expire", "0");
    }

    #[tokio::test]
    async fn acknowledge_verification_uses_acknowledge_path() {
        let transport = FakeTransport::new(200, r#"{"request_id":"req-1","price":0.05}"#);
        let client = make_client(transport.clone(), ResponseFormat::Json);
        let request = AcknowledgeVerification::new(
            RequestId::new("req-1").unwrap(),
            VerificationCode::new("123456").unwrap(),
        );

        let response = client.acknowledge_verification(request).await.unwrap();
        assert_eq!(response.request_id.as_str(), "req-1");
        assert_eq!(response.price, 0.05);

        let (url, _, params) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/v1/verify/acknowledge")
        );
        assert_param(&params, "api_secret", "test_secret");
        assert_param(&params, "request_id", "req-1");
        assert_param(&params, "code", "123456");
    }

    #[tokio::test]
    async fn cancel_verification_maps_error_shape() {
        let transport = FakeTransport::new(
            404,
            r#"{"error":{"code":10,"name":"not_found","description":"request not found"}}"#,
        );
        let client = make_client(transport.clone(), ResponseFormat::Json);
        let request = CancelVerification::new(RequestId::new("req-1").unwrap());

        let err = client.cancel_verification(request).await.unwrap_err();
        assert_eq!(err.api_error().map(|it| it.code), Some(10));

        let (url, _, params) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/v1/verify/cancel")
        );
        assert_eq!(params.len(), 3);
    }

    #[tokio::test]
    async fn xml_format_sets_accept_and_decodes_xml() {
        let transport = FakeTransport::new(200, "<xml><request_id>req-9</request_id></xml>");
        let client = make_client(transport.clone(), ResponseFormat::Xml);
        let request = CancelVerification::new(RequestId::new("req-9").unwrap());

        let response = client.cancel_verification(request).await.unwrap();
        assert_eq!(response.request_id.as_str(), "req-9");

        let (_, accept, _) = transport.last_request();
        assert_eq!(accept, Some("application/xml"));
    }

    #[test]
    fn credentials_validate_inputs_and_hide_secret() {
        assert!(Credentials::new("  ", "secret").is_err());
        assert!(Credentials::new("key", "").is_err());

        let credentials = Credentials::new("key", "very-secret").unwrap();
        assert!(!format!("{credentials:?}").contains("very-secret"));

        let client = MoviderClient::new(credentials);
        assert!(!format!("{client:?}").contains("very-secret"));
    }

    #[test]
    fn builder_applies_endpoint_and_format() {
        let client = MoviderClient::builder(credentials())
            .endpoint("http://127.0.0.1:8080/v1/")
            .response_format(ResponseFormat::Xml)
            .timeout(Duration::from_secs(3))
            .build()
            .unwrap();
        assert_eq!(client.endpoint, "http://127.0.0.1:8080/v1");
        assert_eq!(client.format, ResponseFormat::Xml);

        let client = MoviderClient::new(credentials());
        assert_eq!(client.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(client.format, ResponseFormat::Json);
    }

    #[test]
    fn builder_rejects_invalid_endpoint() {
        let err = MoviderClient::builder(credentials())
            .endpoint("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, MoviderError::InvalidEndpoint(_)));
    }
}
