// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::options::{ClientConfig, Credentials, ServiceInfo};
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::{Error, ServiceError};
use gax::response::{Parts, REQUEST_ID_HEADER, Response};
use http::HeaderMap;
use http::header::{CONTENT_TYPE, HeaderValue, USER_AGENT};
use std::time::Duration;
use tracing::Instrument;

/// The content type for all requests.
pub const CONTENT_TYPE_JSON: &str = "application/x-amz-json-1.0";
/// Names the operation in each request.
pub const TARGET_HEADER: &str = "x-amz-target";
/// Some services return the error code in this header.
pub const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: url::Url,
    region: String,
    timeout: Option<Duration>,
    info: &'static ServiceInfo,
}

impl ReqwestClient {
    pub async fn new(
        config: ClientConfig,
        info: &'static ServiceInfo,
    ) -> gax::client_builder::Result<Self> {
        let region = crate::endpoint::resolve_region(config.region.as_deref())?;
        let endpoint =
            crate::endpoint::resolve_endpoint(config.endpoint.as_deref(), &region, info)?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        Ok(Self {
            inner,
            cred: config.cred.unwrap_or_default(),
            endpoint,
            region,
            timeout: config.timeout,
            info,
        })
    }

    /// The URL receiving all the requests.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// The region used to compute the default endpoint.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Sends `body` as the payload of the `action` operation.
    ///
    /// Makes exactly one attempt.
    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        action: &str,
        body: &I,
        options: gax::options::RequestOptions,
    ) -> Result<Response<O>> {
        let span = crate::observability::create_client_request_span(
            action,
            self.endpoint.as_str(),
            self.info,
        );
        let result = self
            .request_attempt(action, body, &options)
            .instrument(span.clone())
            .await;
        crate::observability::record_client_request_span(&result, &span);
        result
    }

    async fn request_attempt<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        action: &str,
        body: &I,
        options: &gax::options::RequestOptions,
    ) -> Result<Response<O>> {
        let payload = serde_json::to_vec(body).map_err(Error::ser)?;
        let target = format!("{}.{action}", self.info.target_prefix);
        let mut builder = self
            .inner
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON))
            .header(
                TARGET_HEADER,
                HeaderValue::from_str(&target).map_err(Error::ser)?,
            )
            .header(USER_AGENT, self.user_agent(options)?)
            .body(payload);
        if let Some(timeout) = (*options.attempt_timeout()).or(self.timeout) {
            builder = builder.timeout(timeout);
        }
        let auth_headers = self.cred.headers().await.map_err(Error::authentication)?;
        builder = builder.headers(auth_headers);

        let response = builder.send().await.map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }
        self::to_http_response(response).await
    }

    fn user_agent(&self, options: &gax::options::RequestOptions) -> Result<HeaderValue> {
        let default = self.info.user_agent();
        let value = match options.user_agent() {
            Some(prefix) => format!("{prefix} {default}"),
            None => default,
        };
        HeaderValue::from_str(&value).map_err(Error::ser)
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::io)?;

    let error = match parse_service_error(&headers, &body) {
        Some(svc) => Error::service(
            svc.set_http_status_code(status_code)
                .set_headers(headers),
        ),
        None => Error::http(status_code, headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::io)?;
    let response = decode_body::<O>(&body).map_err(Error::deser)?;
    Ok(Response::from_parts(
        Parts::new().set_headers(headers),
        response,
    ))
}

/// Decodes a successful response.
///
/// An empty body, or an empty object, decode to `O::default()` when `O`
/// cannot represent them. This covers operations without a result.
fn decode_body<O: serde::de::DeserializeOwned + Default>(
    content: &[u8],
) -> serde_json::Result<O> {
    if content.iter().all(u8::is_ascii_whitespace) {
        return Ok(O::default());
    }
    match serde_json::from_slice::<serde_json::Value>(content)? {
        serde_json::Value::Object(m) if m.is_empty() => {
            Ok(serde_json::from_value(serde_json::Value::Object(m)).unwrap_or_default())
        }
        v => serde_json::from_value(v),
    }
}

#[derive(Debug, Default, serde::Deserialize)]
struct ErrorPayload {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    code: Option<String>,
    #[serde(rename = "Code")]
    code_upper: Option<String>,
    message: Option<String>,
    #[serde(rename = "Message")]
    message_upper: Option<String>,
}

/// Extracts the service error from a failed response.
///
/// Returns `None` when neither the payload nor the headers identify an error
/// code, for example, when a proxy or load balancer rejects the request.
fn parse_service_error(headers: &HeaderMap, body: &[u8]) -> Option<ServiceError> {
    let payload = serde_json::from_slice::<ErrorPayload>(body).unwrap_or_default();
    let code = payload
        .error_type
        .or(payload.code)
        .or(payload.code_upper)
        .or_else(|| {
            headers
                .get(ERROR_TYPE_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        })
        .map(|c| error_code(&c).to_string())
        .filter(|c| !c.is_empty())?;
    let message = payload
        .message
        .or(payload.message_upper)
        .unwrap_or_default();
    let svc = ServiceError::new(code, message);
    let svc = match headers.get(REQUEST_ID_HEADER).and_then(|v| v.to_str().ok()) {
        Some(id) => svc.set_request_id(id),
        None => svc,
    };
    Some(svc)
}

/// Removes the namespace prefix and the documentation suffix from an error
/// code, e.g. `aws.rds#DBInstanceNotFound:http://...` is `DBInstanceNotFound`.
fn error_code(raw: &str) -> &str {
    let code = raw.rsplit('#').next().unwrap_or(raw);
    code.split(':').next().unwrap_or(code).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, HeaderValue};
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[test_case("DBInstanceNotFound", "DBInstanceNotFound"; "plain")]
    #[test_case("aws.rds#DBInstanceNotFound", "DBInstanceNotFound"; "with namespace")]
    #[test_case("DBInstanceNotFound:http://internal.amazon.com/", "DBInstanceNotFound"; "with suffix")]
    #[test_case("com.amazon#QuotaExceeded.DBSecurityGroup:x", "QuotaExceeded.DBSecurityGroup"; "with dot")]
    fn code(raw: &str, want: &str) {
        assert_eq!(error_code(raw), want);
    }

    #[tokio::test]
    async fn client_http_error_bytes() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "text/html")
            .status(502)
            .body("<html>bad gateway</html>")?;
        let response: reqwest::Response = http_resp.into();
        let err = super::to_http_error::<()>(response).await.unwrap_err();
        assert!(err.service_error().is_none(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(502));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("text/html"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from("<html>bad gateway</html>")).as_ref()
        );
        Ok(())
    }

    #[tokio::test]
    async fn client_error_with_service_error() -> TestResult {
        let body = serde_json::json!({
            "__type": "com.amazonaws.rds#DBClusterNotFoundFault",
            "message": "DBCluster my-cluster not found.",
        });
        let http_resp = http::Response::builder()
            .header("Content-Type", CONTENT_TYPE_JSON)
            .header(REQUEST_ID_HEADER, "req-789")
            .status(404)
            .body(body.to_string())?;
        let response: reqwest::Response = http_resp.into();
        let err = super::to_http_error::<()>(response).await.unwrap_err();
        let svc = err.service_error().unwrap();
        assert_eq!(svc.code(), "DBClusterNotFoundFault");
        assert_eq!(svc.message(), "DBCluster my-cluster not found.");
        assert_eq!(svc.request_id(), Some("req-789"));
        assert!(!svc.is_declared(), "{svc:?}");
        assert_eq!(err.http_status_code(), Some(404));
        assert!(err.http_headers().is_some(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn client_error_with_header_code() -> TestResult {
        let http_resp = http::Response::builder()
            .header(ERROR_TYPE_HEADER, "InvalidParameterValue:http://internal/")
            .status(400)
            .body(r#"{"Message": "bad value"}"#)?;
        let response: reqwest::Response = http_resp.into();
        let err = super::to_http_error::<()>(response).await.unwrap_err();
        let svc = err.service_error().unwrap();
        assert_eq!(svc.code(), "InvalidParameterValue");
        assert_eq!(svc.message(), "bad value");
        Ok(())
    }

    #[test_case(""; "empty")]
    #[test_case("{}"; "empty object")]
    #[test_case("null"; "null")]
    fn decode_unit(content: &str) -> TestResult {
        decode_body::<()>(content.as_bytes())?;
        Ok(())
    }

    #[test_case("", serde_json::json!(null); "empty")]
    #[test_case("{}", serde_json::json!({}); "empty object")]
    #[test_case(r#"{"a": 1}"#, serde_json::json!({"a": 1}); "object")]
    fn decode_value(content: &str, want: serde_json::Value) -> TestResult {
        let got = decode_body::<serde_json::Value>(content.as_bytes())?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case("not json")]
    #[test_case("[1, 2")]
    fn decode_error(content: &str) {
        let got = decode_body::<serde_json::Value>(content.as_bytes());
        assert!(got.is_err(), "{got:?}");
    }

    #[tokio::test]
    async fn client_empty_content() -> TestResult {
        let http_resp = http::Response::builder().status(200).body("")?;
        let response: reqwest::Response = http_resp.into();
        let response = super::to_http_response::<()>(response).await?;
        assert!(response.headers().is_empty(), "{:?}", response.headers());
        Ok(())
    }

    #[tokio::test]
    async fn client_bad_content() -> TestResult {
        let http_resp = http::Response::builder()
            .status(200)
            .body("<html>captive portal</html>")?;
        let response: reqwest::Response = http_resp.into();
        let err = super::to_http_response::<serde_json::Value>(response)
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }
}
