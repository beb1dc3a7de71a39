//! Fluent request builder

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, COOKIE};
use reqwest::{Body, Method};
use serde::Serialize;
use url::Url;

use crate::client::HttpClient;
use crate::error::HttpError;
use crate::response::{Response, ResponseHead};
use crate::values::{to_url_values, FormValue};

/// Response interpretation hint carried by a builder.
///
/// Defaults to JSON. Also selects the content type applied when a body is
/// assembled implicitly from form data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetType {
    /// JSON bodies
    #[default]
    Json,
    /// URL-encoded form bodies
    Form,
    /// XML bodies
    Xml,
    /// Plain text bodies
    Text,
}

impl TargetType {
    /// Content type sent when a body of this kind is assembled implicitly
    pub fn content_type(self) -> &'static str {
        match self {
            TargetType::Json => "application/json",
            TargetType::Form => "application/x-www-form-urlencoded",
            TargetType::Xml => "application/xml",
            TargetType::Text => "text/plain",
        }
    }
}

/// Accumulates request state and issues it through a preconfigured client.
///
/// Setters consume and return the builder. A setter that fails records its
/// error instead of aborting the chain; the first recorded error is
/// surfaced by [`RequestBuilder::send`] before any network activity.
#[derive(Debug)]
pub struct RequestBuilder {
    client: HttpClient,
    method: String,
    url: String,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    form_data: HashMap<String, Vec<String>>,
    query_data: HashMap<String, Vec<String>>,
    target_type: TargetType,
    cookies: Vec<(String, String)>,
    errors: Vec<HttpError>,
}

impl RequestBuilder {
    pub(crate) fn new(
        client: HttpClient,
        method: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            method: method.into(),
            url: url.into(),
            headers: Vec::new(),
            body: None,
            form_data: HashMap::new(),
            query_data: HashMap::new(),
            target_type: TargetType::default(),
            cookies: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Append a header; repeated names accumulate in order
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the raw request body
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `body` as JSON into the request body.
    ///
    /// A serialization failure is recorded and surfaced at send time. The
    /// JSON content type is appended when no content type has been set.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        match serde_json::to_vec(body) {
            Ok(bytes) => {
                self.body = Some(bytes);
                self.target_type = TargetType::Json;
                if !self.has_content_type() {
                    self.headers.push((
                        CONTENT_TYPE.as_str().to_string(),
                        TargetType::Json.content_type().to_string(),
                    ));
                }
            }
            Err(e) => {
                tracing::warn!("JSON body serialization failed: {}", e);
                self.errors.push(HttpError::Serialization(e.to_string()));
            }
        }
        self
    }

    /// Coerce `data` and merge it into the query string values
    pub fn query(mut self, data: &HashMap<String, FormValue>) -> Self {
        for (key, values) in to_url_values(data) {
            self.query_data.entry(key).or_default().extend(values);
        }
        self
    }

    /// Coerce `data` and merge it into the form values, switching the
    /// target type to form.
    ///
    /// When no explicit body is set, the accumulated form values are
    /// URL-encoded into one at send time.
    pub fn form(mut self, data: &HashMap<String, FormValue>) -> Self {
        for (key, values) in to_url_values(data) {
            self.form_data.entry(key).or_default().extend(values);
        }
        self.target_type = TargetType::Form;
        self
    }

    /// Attach a cookie, sent in a single `Cookie` header
    pub fn cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.push((name.into(), value.into()));
        self
    }

    /// Override the response interpretation hint
    pub fn target_type(mut self, target_type: TargetType) -> Self {
        self.target_type = target_type;
        self
    }

    fn has_content_type(&self) -> bool {
        self.headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("content-type"))
    }

    /// GET `url` and send.
    ///
    /// The second argument exists for call-site symmetry with
    /// [`RequestBuilder::post`] and is never read.
    pub async fn get(
        mut self,
        url: impl Into<String>,
        _body: Option<&[u8]>,
    ) -> Response<(ResponseHead, Option<Vec<u8>>)> {
        self.method = Method::GET.as_str().to_string();
        self.url = url.into();
        self.send().await
    }

    /// POST a pre-serialized JSON string to `url` and send.
    ///
    /// Replaces all accumulated headers with a single
    /// `Content-Type: application/json`. The body is sent byte-for-byte;
    /// there is no serialization step.
    pub async fn post(
        mut self,
        url: impl Into<String>,
        body: &str,
    ) -> Response<(ResponseHead, Option<Vec<u8>>)> {
        self.method = Method::POST.as_str().to_string();
        self.url = url.into();
        self.headers = vec![(
            CONTENT_TYPE.as_str().to_string(),
            TargetType::Json.content_type().to_string(),
        )];
        self.body = Some(body.as_bytes().to_vec());
        self.send().await
    }

    /// Issue the accumulated request.
    ///
    /// On a 200 the whole body is read into memory and returned next to the
    /// response head. Any other status returns the head with no body and no
    /// error; status handling is the caller's responsibility.
    pub async fn send(self) -> Response<(ResponseHead, Option<Vec<u8>>)> {
        let Self {
            client,
            method,
            url,
            mut headers,
            body,
            form_data,
            query_data,
            target_type,
            cookies,
            errors,
        } = self;

        if let Some(err) = errors.into_iter().next() {
            return Err(err);
        }

        let method = Method::from_bytes(method.as_bytes())
            .map_err(|e| HttpError::RequestConstruction(format!("invalid method {}: {}", method, e)))?;
        let mut url = Url::parse(&url)
            .map_err(|e| HttpError::RequestConstruction(format!("invalid url {}: {}", url, e)))?;

        if !query_data.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, values) in &query_data {
                for value in values {
                    pairs.append_pair(key, value);
                }
            }
        }

        // An explicit body wins; otherwise non-empty form values are
        // URL-encoded into one.
        let body = match body {
            Some(bytes) => Some(bytes),
            None if !form_data.is_empty() => {
                let pairs: Vec<(&String, &String)> = form_data
                    .iter()
                    .flat_map(|(key, values)| values.iter().map(move |value| (key, value)))
                    .collect();
                let encoded = serde_urlencoded::to_string(&pairs)
                    .map_err(|e| HttpError::Serialization(e.to_string()))?;
                if !headers
                    .iter()
                    .any(|(name, _)| name.eq_ignore_ascii_case("content-type"))
                {
                    headers.push((
                        CONTENT_TYPE.as_str().to_string(),
                        target_type.content_type().to_string(),
                    ));
                }
                Some(encoded.into_bytes())
            }
            None => None,
        };

        let mut header_map = HeaderMap::new();
        for (name, value) in &headers {
            let parsed_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                HttpError::RequestConstruction(format!("invalid header name {}: {}", name, e))
            })?;
            let parsed_value = HeaderValue::from_str(value).map_err(|e| {
                HttpError::RequestConstruction(format!("invalid value for header {}: {}", name, e))
            })?;
            header_map.append(parsed_name, parsed_value);
        }
        if !cookies.is_empty() {
            let line = cookies
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<_>>()
                .join("; ");
            let parsed = HeaderValue::from_str(&line)
                .map_err(|e| HttpError::RequestConstruction(format!("invalid cookie: {}", e)))?;
            header_map.append(COOKIE, parsed);
        }

        let mut request = reqwest::Request::new(method, url);
        // Accumulated headers replace whatever the transport would set;
        // they are not merged.
        *request.headers_mut() = header_map;
        *request.body_mut() = body.map(Body::from);

        tracing::debug!("{} {}", request.method(), request.url());
        let response = client
            .inner()
            .execute(request)
            .await
            .map_err(HttpError::from)?;

        let status = response.status().as_u16();
        tracing::debug!("response status {}", status);
        let head = ResponseHead::new(status, response.headers().clone());

        if status == 200 {
            let bytes = response.bytes().await.map_err(HttpError::from)?;
            Ok((head, Some(bytes.to_vec())))
        } else {
            // Deliberately not an error; the body is dropped unread.
            Ok((head, None))
        }
    }
}
