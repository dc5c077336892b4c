//! Client layer: signs requests, runs them through the transport, and maps
//! gateway answers to domain values or errors.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    Credentials, ErrorCode, OutboundMessage, ReceivedMessage, SendSmsResponse, ValidationError,
};
use crate::transport::{
    AuthData, Decoded, MessageQueue, TransportError, XML_FIELD, decode_inbox_xml_response,
    decode_send_sms_xml_response, encode_inbox_query, encode_send_sms_query,
};

const DEFAULT_ENDPOINT: &str = "https://api.smsbrana.cz/smsconnect/http.php";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

type Params = Vec<(String, String)>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    /// `GET url?query`, with `form` as an urlencoded body when present.
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Params,
        form: Option<Params>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Params,
        form: Option<Params>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = self.client.get(url).query(&query);
            if let Some(form) = form {
                request = request.form(&form);
            }
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// SMS Connect actions used by this client.
pub enum Action {
    SendSms,
    Inbox,
    XmlQueue,
}

impl Action {
    /// Query field name carrying the action (`action`).
    pub const FIELD: &'static str = "action";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SendSms => "send_sms",
            Self::Inbox => "inbox",
            Self::XmlQueue => "xml_queue",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsBranaClient`].
///
/// Nothing is retried: a salt is accepted only once per day, so callers that
/// want to retry must issue a new call, which signs the request again.
pub enum SmsBranaError {
    /// Login or password is empty after trimming.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(#[source] ValidationError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The gateway answered with `err > 0`.
    ///
    /// `parameters` holds the action-specific parameters only; auth fields are never included.
    #[error("request '{action}' failed with error {code}: {description}")]
    RequestFailed {
        action: Action,
        parameters: Vec<(String, String)>,
        code: ErrorCode,
        description: &'static str,
    },

    /// The response could not be read where an XML document was required.
    #[error("malformed response: {0}")]
    ResponseMalformed(#[source] Box<dyn StdError + Send + Sync>),

    /// The queue document could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(#[source] Box<dyn StdError + Send + Sync>),
}

impl SmsBranaError {
    /// Gateway error code for [`SmsBranaError::RequestFailed`].
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::RequestFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}

fn malformed(err: TransportError) -> SmsBranaError {
    SmsBranaError::ResponseMalformed(Box::new(err))
}

#[derive(Debug, Clone)]
/// Builder for [`SmsBranaClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct SmsBranaClientBuilder {
    credentials: Credentials,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SmsBranaClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the SMS Connect endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SmsBranaClient`].
    pub fn build(self) -> Result<SmsBranaClient, SmsBranaError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SmsBranaError::Transport(Box::new(err)))?;

        Ok(SmsBranaClient {
            credentials: self.credentials,
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport { client }),
            queue: MessageQueue::new(),
        })
    }
}

#[derive(Clone)]
/// High-level SMS Connect client.
///
/// Every request is signed with a fresh salt and timestamp. Messages can be sent
/// one at a time with [`SmsBranaClient::send`], or collected with
/// [`SmsBranaClient::add_sms`] and submitted together by
/// [`SmsBranaClient::send_all_sms`]. The two paths never share state.
///
/// The queue is plain owned state; callers sharing a client across tasks must
/// serialize access to it themselves.
pub struct SmsBranaClient {
    credentials: Credentials,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
    queue: MessageQueue,
}

impl SmsBranaClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`SmsBranaClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
            queue: MessageQueue::new(),
        }
    }

    /// Validate the login/password pair and create a client with defaults.
    pub fn with_login(
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, SmsBranaError> {
        let credentials =
            Credentials::new(login, password).map_err(SmsBranaError::InvalidCredentials)?;
        Ok(Self::new(credentials))
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> SmsBranaClientBuilder {
        SmsBranaClientBuilder::new(credentials)
    }

    /// Send a single SMS right away. Does not touch the queue.
    ///
    /// Errors:
    /// - [`SmsBranaError::RequestFailed`] when the gateway returns `err > 0`,
    /// - [`SmsBranaError::ResponseMalformed`] when the answer lacks `sms_id`/`sms_count`.
    pub async fn send(&self, message: &OutboundMessage) -> Result<SendSmsResponse, SmsBranaError> {
        let decoded = self
            .execute(Action::SendSms, encode_send_sms_query(message), None)
            .await?;
        let xml = decoded.xml().map_err(malformed)?;
        decode_send_sms_xml_response(xml).map_err(malformed)
    }

    /// Read received messages, removing them from the gateway inbox when `delete` is set.
    ///
    /// Items without a sender number are skipped. An item whose time cannot be
    /// parsed fails the whole call with [`SmsBranaError::ResponseMalformed`].
    pub async fn inbox(&self, delete: bool) -> Result<Vec<ReceivedMessage>, SmsBranaError> {
        let decoded = self
            .execute(Action::Inbox, encode_inbox_query(delete), None)
            .await?;
        let xml = decoded.xml().map_err(malformed)?;
        decode_inbox_xml_response(xml).map_err(malformed)
    }

    /// Queue a message for [`SmsBranaClient::send_all_sms`].
    pub fn add_sms(&mut self, message: OutboundMessage) {
        self.queue.push(message);
    }

    /// Submit every queued message in one `xml_queue` request.
    ///
    /// Returns `None` without any network call when the queue is empty. Otherwise
    /// returns the gateway answer: the re-serialized document, or the raw body if
    /// the gateway did not answer with XML.
    ///
    /// The queue is not cleared afterwards; calling this again resubmits the same
    /// messages. Use [`SmsBranaClient::clear_queue`] to start over.
    pub async fn send_all_sms(&self) -> Result<Option<String>, SmsBranaError> {
        if self.queue.is_empty() {
            tracing::debug!("message queue is empty, nothing to submit");
            return Ok(None);
        }

        let document = self
            .queue
            .to_document()
            .map_err(|err| SmsBranaError::Encode(Box::new(err)))?;
        let decoded = self
            .execute(Action::XmlQueue, Vec::new(), Some(document))
            .await?;
        Ok(Some(decoded.into_string()))
    }

    /// Messages currently queued, in submission order.
    pub fn queued(&self) -> &[OutboundMessage] {
        self.queue.entries()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// The `xml_queue` document [`SmsBranaClient::send_all_sms`] would submit.
    pub fn queue_document(&self) -> Result<String, SmsBranaError> {
        self.queue
            .to_document()
            .map_err(|err| SmsBranaError::Encode(Box::new(err)))
    }

    pub fn clear_queue(&mut self) {
        self.queue.clear();
    }

    /// Sign and run one request.
    ///
    /// `parameters` are merged with fresh auth data and `action`; `xml` is sent
    /// as the `xml` form field. A decoded document with `err > 0` becomes
    /// [`SmsBranaError::RequestFailed`]. A body that is not XML is passed back
    /// as [`Decoded::Raw`] for the caller to judge.
    async fn execute(
        &self,
        action: Action,
        parameters: Params,
        xml: Option<String>,
    ) -> Result<Decoded, SmsBranaError> {
        let mut query = parameters.clone();
        query.extend(AuthData::generate(&self.credentials).into_params());
        query.push((Action::FIELD.to_owned(), action.as_str().to_owned()));
        let form = xml.map(|xml| vec![(XML_FIELD.to_owned(), xml)]);

        tracing::debug!(%action, endpoint = %self.endpoint, "sending SMS Connect request");
        let response = self
            .http
            .get(&self.endpoint, query, form)
            .await
            .map_err(SmsBranaError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(SmsBranaError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let decoded = crate::transport::decode(&response.body);
        if let Decoded::Xml(xml) = &decoded {
            let code = crate::transport::error_code(xml).map_err(malformed)?;
            tracing::debug!(%action, err = ?code.map(ErrorCode::as_i32), "SMS Connect response decoded");
            if let Some(code) = code.filter(|code| code.is_failure()) {
                tracing::warn!(%action, %code, "SMS Connect request failed");
                return Err(SmsBranaError::RequestFailed {
                    action,
                    parameters,
                    code,
                    description: code.description(),
                });
            }
        }

        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use md5::{Digest, Md5};

    use crate::domain::{GatewayTime, KnownErrorCode};

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        calls: usize,
        last_url: Option<String>,
        last_query: Params,
        last_form: Option<Params>,
        response: Option<(u16, String)>,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self::with_response(Some((response_status, response_body.into())))
        }

        fn failing() -> Self {
            Self::with_response(None)
        }

        fn with_response(response: Option<(u16, String)>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    calls: 0,
                    last_url: None,
                    last_query: Vec::new(),
                    last_form: None,
                    response,
                })),
            }
        }

        fn calls(&self) -> usize {
            self.state.lock().unwrap().calls
        }

        fn last_request(&self) -> (Option<String>, Params, Option<Params>) {
            let state = self.state.lock().unwrap();
            (
                state.last_url.clone(),
                state.last_query.clone(),
                state.last_form.clone(),
            )
        }
    }

    impl HttpTransport for FakeTransport {
        fn get<'a>(
            &'a self,
            url: &'a str,
            query: Params,
            form: Option<Params>,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let response = {
                    let mut state = self.state.lock().unwrap();
                    state.calls += 1;
                    state.last_url = Some(url.to_owned());
                    state.last_query = query;
                    state.last_form = form;
                    state.response.clone()
                };
                match response {
                    Some((status, body)) => Ok(HttpResponse { status, body }),
                    None => Err("connection refused".into()),
                }
            })
        }
    }

    fn param<'p>(params: &'p [(String, String)], key: &str) -> Option<&'p str> {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn assert_param(params: &[(String, String)], key: &str, value: &str) {
        assert!(
            params.iter().any(|(k, v)| k == key && v == value),
            "missing param {key}={value}; got: {params:?}"
        );
    }

    fn make_client(transport: FakeTransport) -> SmsBranaClient {
        SmsBranaClient {
            credentials: Credentials::new("user", "secret").unwrap(),
            endpoint: "https://example.invalid/smsconnect/http.php".to_owned(),
            http: Arc::new(transport),
            queue: MessageQueue::new(),
        }
    }

    #[test]
    fn with_login_rejects_blank_credentials() {
        for (login, password) in [("", "secret"), ("  ", "secret"), ("user", ""), ("user", "\t")] {
            let err = SmsBranaClient::with_login(login, password).err().unwrap();
            assert!(
                matches!(err, SmsBranaError::InvalidCredentials(ValidationError::Empty { .. })),
                "unexpected error: {err:?}"
            );
        }
        assert!(SmsBranaClient::with_login(" user ", " secret ").is_ok());
    }

    #[tokio::test]
    async fn send_signs_request_and_parses_response() {
        let xml = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
                   <result><err>0</err><price>1.1</price><sms_count>1</sms_count>\
                   <credit>99.2</credit><sms_id>377351</sms_id></result>";
        let transport = FakeTransport::new(200, xml);
        let client = make_client(transport.clone());

        let response = client
            .send(&OutboundMessage::new("+420777000111", "hello"))
            .await
            .unwrap();
        assert_eq!(
            response,
            SendSmsResponse {
                id: "377351".to_owned(),
                count: 1,
            }
        );

        let (url, query, form) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/smsconnect/http.php")
        );
        assert!(form.is_none());
        assert_param(&query, "action", "send_sms");
        assert_param(&query, "login", "user");
        assert_param(&query, "number", "+420777000111");
        assert_param(&query, "message", "hello");
        assert_param(&query, "when", "");
        assert!(param(&query, "password").is_none());

        let time = param(&query, "time").unwrap();
        let salt = param(&query, "sul").unwrap();
        assert!(GatewayTime::parse(time).is_ok());
        assert_eq!(salt.len(), 10);
        let expected = hex::encode(Md5::digest(format!("secret{time}{salt}")));
        assert_param(&query, "hash", &expected);
    }

    #[tokio::test]
    async fn every_request_gets_a_fresh_salt() {
        let xml = "<result><err>0</err><sms_id>1</sms_id><sms_count>1</sms_count></result>";
        let transport = FakeTransport::new(200, xml);
        let client = make_client(transport.clone());
        let message = OutboundMessage::new("123", "hi");

        client.send(&message).await.unwrap();
        let (_, first, _) = transport.last_request();
        client.send(&message).await.unwrap();
        let (_, second, _) = transport.last_request();

        assert_ne!(param(&first, "sul"), param(&second, "sul"));
    }

    #[tokio::test]
    async fn send_maps_gateway_error_to_request_failed() {
        let transport = FakeTransport::new(200, "<result><err>11</err></result>");
        let client = make_client(transport);

        let err = client
            .send(&OutboundMessage::new("123", ""))
            .await
            .unwrap_err();
        assert_eq!(err.code().and_then(ErrorCode::known), Some(KnownErrorCode::EmptyMessageText));
        match err {
            SmsBranaError::RequestFailed {
                action,
                parameters,
                code,
                description,
            } => {
                assert_eq!(action, Action::SendSms);
                assert_eq!(code.as_i32(), 11);
                assert_eq!(description, "empty message text");
                assert_param(&parameters, "number", "123");
                assert!(param(&parameters, "hash").is_none());
                assert!(param(&parameters, "login").is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn request_failed_message_names_action_and_code() {
        let transport = FakeTransport::new(200, "<result><err>9</err></result>");
        let client = make_client(transport);

        let err = client
            .send(&OutboundMessage::new("123", "hi"))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "request 'send_sms' failed with error 9: insufficient credit"
        );
    }

    #[tokio::test]
    async fn send_maps_non_xml_body_to_response_malformed() {
        let transport = FakeTransport::new(200, "Service unavailable");
        let client = make_client(transport);

        let err = client
            .send(&OutboundMessage::new("123", "hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, SmsBranaError::ResponseMalformed(_)));
    }

    #[tokio::test]
    async fn send_requires_err_field() {
        let transport = FakeTransport::new(
            200,
            "<result><sms_id>1</sms_id><sms_count>1</sms_count></result>",
        );
        let client = make_client(transport);

        let err = client
            .send(&OutboundMessage::new("123", "hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, SmsBranaError::ResponseMalformed(_)));
    }

    #[tokio::test]
    async fn transport_failure_is_not_mapped_through_the_catalog() {
        let client = make_client(FakeTransport::failing());

        let err = client.inbox(true).await.unwrap_err();
        assert!(matches!(err, SmsBranaError::Transport(_)));
        assert_eq!(err.code(), None);
    }

    #[tokio::test]
    async fn non_success_http_status_is_reported() {
        let client = make_client(FakeTransport::new(503, "  "));

        let err = client.inbox(true).await.unwrap_err();
        assert!(matches!(
            err,
            SmsBranaError::HttpStatus {
                status: 503,
                body: None
            }
        ));
    }

    #[tokio::test]
    async fn inbox_returns_well_formed_items() {
        let xml = "<result><err>0</err><inbox><delivery_sms><item>\
                   <number>+420777000111</number><time>20240615T093000</time>\
                   <message>Ahoj</message></item></delivery_sms></inbox></result>";
        let transport = FakeTransport::new(200, xml);
        let client = make_client(transport.clone());

        let messages = client.inbox(false).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text(), "Ahoj");
        assert_eq!(messages[0].number(), "+420777000111");
        assert_eq!(
            messages[0].received_at(),
            GatewayTime::parse("20240615T093000").unwrap()
        );

        let (_, query, _) = transport.last_request();
        assert_param(&query, "action", "inbox");
        assert_param(&query, "delete", "0");
    }

    #[tokio::test]
    async fn inbox_drops_items_with_empty_number() {
        let xml = "<result><err>0</err><inbox><delivery_sms><item>\
                   <number> </number><time>20240615T093000</time><message>x</message>\
                   </item></delivery_sms></inbox></result>";
        let client = make_client(FakeTransport::new(200, xml));

        assert!(client.inbox(true).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn inbox_fails_on_malformed_time() {
        let xml = "<result><err>0</err><inbox><delivery_sms><item>\
                   <number>123</number><time>2024-06-15</time><message>x</message>\
                   </item></delivery_sms></inbox></result>";
        let client = make_client(FakeTransport::new(200, xml));

        let err = client.inbox(true).await.unwrap_err();
        assert!(matches!(err, SmsBranaError::ResponseMalformed(_)));
    }

    #[tokio::test]
    async fn send_all_sms_on_empty_queue_makes_no_request() {
        let transport = FakeTransport::new(200, "<result><err>0</err></result>");
        let client = make_client(transport.clone());

        assert_eq!(client.send_all_sms().await.unwrap(), None);
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn send_all_sms_submits_queue_document() {
        let transport = FakeTransport::new(200, "<result><err>0</err></result>");
        let mut client = make_client(transport.clone());
        client.add_sms(OutboundMessage::new("+420777000111", "1 < 2 & 3"));

        let answer = client.send_all_sms().await.unwrap();
        assert_eq!(answer.as_deref(), Some("<result><err>0</err></result>"));
        assert_eq!(transport.calls(), 1);

        let (_, query, form) = transport.last_request();
        assert_param(&query, "action", "xml_queue");
        assert!(param(&query, "number").is_none());
        assert!(param(&query, "xml").is_none());

        let form = form.unwrap();
        let document = param(&form, "xml").unwrap();
        assert_eq!(document.matches("<sms>").count(), 1);
        assert!(document.contains("<number>+420777000111</number>"));
        assert!(document.contains("<message>1 &lt; 2 &amp; 3</message>"));
        assert!(document.contains("<when></when>"));
        assert!(document.contains("<sender_id></sender_id>"));
        assert!(document.contains("<delivery_report></delivery_report>"));
    }

    #[tokio::test]
    async fn send_all_sms_passes_non_xml_answer_through() {
        let transport = FakeTransport::new(200, "OK 2 queued");
        let mut client = make_client(transport);
        client.add_sms(OutboundMessage::new("123", "hi"));

        assert_eq!(
            client.send_all_sms().await.unwrap().as_deref(),
            Some("OK 2 queued")
        );
    }

    #[tokio::test]
    async fn send_all_sms_maps_gateway_error() {
        let transport = FakeTransport::new(200, "<result><err>2</err></result>");
        let mut client = make_client(transport);
        client.add_sms(OutboundMessage::new("123", "hi"));

        let err = client.send_all_sms().await.unwrap_err();
        match err {
            SmsBranaError::RequestFailed {
                action,
                parameters,
                code,
                ..
            } => {
                assert_eq!(action, Action::XmlQueue);
                assert!(parameters.is_empty());
                assert!(code.is_auth_error());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_all_sms_keeps_queue_and_resubmits_on_second_call() {
        let transport = FakeTransport::new(200, "<result><err>0</err></result>");
        let mut client = make_client(transport.clone());
        client.add_sms(OutboundMessage::new("111", "first"));

        client.send_all_sms().await.unwrap();
        assert_eq!(client.queue_len(), 1);

        client.add_sms(OutboundMessage::new("222", "second"));
        client.send_all_sms().await.unwrap();

        let (_, _, form) = transport.last_request();
        let form = form.unwrap();
        let document = param(&form, "xml").unwrap();
        assert_eq!(document.matches("<sms>").count(), 2);
        assert!(document.contains("<message>first</message>"));
        assert_eq!(transport.calls(), 2);

        client.clear_queue();
        assert_eq!(client.send_all_sms().await.unwrap(), None);
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn send_does_not_touch_the_queue() {
        let xml = "<result><err>0</err><sms_id>7</sms_id><sms_count>1</sms_count></result>";
        let mut client = make_client(FakeTransport::new(200, xml));
        client.add_sms(OutboundMessage::new("111", "queued"));

        client
            .send(&OutboundMessage::new("222", "direct"))
            .await
            .unwrap();
        assert_eq!(client.queued(), &[OutboundMessage::new("111", "queued")]);
        assert!(client.queue_document().unwrap().contains("<number>111</number>"));
    }

    #[test]
    fn builder_endpoint_override_is_applied() {
        let credentials = Credentials::new("user", "secret").unwrap();
        let client = SmsBranaClient::builder(credentials.clone())
            .endpoint("https://example.invalid/http.php")
            .timeout(Duration::from_secs(5))
            .user_agent("smsbrana-tests")
            .build()
            .unwrap();
        assert_eq!(client.endpoint, "https://example.invalid/http.php");

        let client = SmsBranaClient::new(credentials);
        assert_eq!(client.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(client.queue_len(), 0);
    }
}
