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

//! Spans describing each request made by a client.
//!
//! The field names follow the OpenTelemetry semantic conventions, so a
//! `tracing-opentelemetry` layer in the application can export them without
//! any mapping.

use crate::options::ServiceInfo;
use gax::error::Error;
use gax::response::Response;
use tracing::{Span, field};

pub mod keys {
    pub const RPC_SYSTEM: &str = "rpc.system";
    pub const RPC_SERVICE: &str = "rpc.service";
    pub const RPC_METHOD: &str = "rpc.method";
    pub const URL_FULL: &str = "url.full";
    pub const HTTP_REQUEST_METHOD: &str = "http.request.method";
    pub const HTTP_RESPONSE_STATUS_CODE: &str = "http.response.status_code";
    pub const ERROR_TYPE: &str = "error.type";
    pub const OTEL_STATUS_CODE: &str = "otel.status_code";
    pub const OTEL_STATUS_DESCRIPTION: &str = "otel.status_description";
    pub const CLIENT_ARTIFACT: &str = "client.artifact";
    pub const CLIENT_VERSION: &str = "client.version";
    pub const REQUEST_ID: &str = "aws.request_id";
}

pub const RPC_SYSTEM_AWS: &str = "aws-api";

pub mod otel_status_codes {
    pub const UNSET: &str = "UNSET";
    pub const OK: &str = "OK";
    pub const ERROR: &str = "ERROR";
}

pub const ERROR_TYPE_CLIENT_TIMEOUT: &str = "CLIENT_TIMEOUT";
pub const ERROR_TYPE_CLIENT_CONNECTION_ERROR: &str = "CLIENT_CONNECTION_ERROR";
pub const ERROR_TYPE_CLIENT_AUTHENTICATION_ERROR: &str = "CLIENT_AUTHENTICATION_ERROR";
pub const ERROR_TYPE_CLIENT_REQUEST_ERROR: &str = "CLIENT_REQUEST_ERROR";
pub const ERROR_TYPE_CLIENT_RESPONSE_DECODE_ERROR: &str = "CLIENT_RESPONSE_DECODE_ERROR";
pub const ERROR_TYPE_INTERNAL: &str = "INTERNAL";

/// Creates the span wrapping a single request.
pub fn create_client_request_span(method_name: &str, url: &str, info: &ServiceInfo) -> Span {
    use keys::*;
    tracing::info_span!(
        "client_request",
        { RPC_SYSTEM } = RPC_SYSTEM_AWS,
        { RPC_SERVICE } = info.service_name,
        { RPC_METHOD } = method_name,
        { URL_FULL } = url,
        { HTTP_REQUEST_METHOD } = "POST",
        { CLIENT_ARTIFACT } = info.client_artifact,
        { CLIENT_VERSION } = info.client_version,
        { OTEL_STATUS_CODE } = otel_status_codes::UNSET,
        // Fields to be recorded later
        { OTEL_STATUS_DESCRIPTION } = field::Empty,
        { ERROR_TYPE } = field::Empty,
        { HTTP_RESPONSE_STATUS_CODE } = field::Empty,
        { REQUEST_ID } = field::Empty,
    )
}

/// Records the outcome of a request in its span.
pub fn record_client_request_span<T>(result: &Result<Response<T>, Error>, span: &Span) {
    use keys::*;
    match result {
        Ok(response) => {
            span.record(OTEL_STATUS_CODE, otel_status_codes::OK);
            if let Some(id) = response.request_id() {
                span.record(REQUEST_ID, id);
            }
        }
        Err(err) => {
            span.record(OTEL_STATUS_CODE, otel_status_codes::ERROR);
            span.record(ERROR_TYPE, error_type(err));
            span.record(OTEL_STATUS_DESCRIPTION, err.to_string());
            if let Some(code) = err.http_status_code() {
                span.record(HTTP_RESPONSE_STATUS_CODE, code as i64);
            }
            if let Some(id) = err.service_error().and_then(|s| s.request_id()) {
                span.record(REQUEST_ID, id);
            }
        }
    }
}

/// A low-cardinality classification of the error.
pub fn error_type(err: &Error) -> String {
    if let Some(svc) = err.service_error() {
        return svc.code().to_string();
    }
    if let Some(code) = err.http_status_code() {
        return code.to_string();
    }
    let t = match err {
        e if e.is_timeout() => ERROR_TYPE_CLIENT_TIMEOUT,
        e if e.is_io() => ERROR_TYPE_CLIENT_CONNECTION_ERROR,
        e if e.is_authentication() => ERROR_TYPE_CLIENT_AUTHENTICATION_ERROR,
        e if e.is_serialization() => ERROR_TYPE_CLIENT_REQUEST_ERROR,
        e if e.is_deserialization() => ERROR_TYPE_CLIENT_RESPONSE_DECODE_ERROR,
        _ => ERROR_TYPE_INTERNAL,
    };
    t.to_string()
}

#[cfg(test)]
mod tests {
    use super::keys::*;
    use super::*;
    use gax::error::{CredentialsError, ServiceError};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use test_case::test_case;
    use tracing::{Subscriber, span};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::prelude::*;

    const INFO: ServiceInfo = ServiceInfo {
        service_name: "rds",
        endpoint_prefix: "rds",
        target_prefix: "AmazonRDSv19",
        client_version: "1.2.3",
        client_artifact: "rds-admin",
    };

    // Captures the attributes of each span, including the fields recorded
    // after the span is created.
    #[derive(Clone, Default)]
    struct TestLayer {
        spans: Arc<Mutex<HashMap<span::Id, HashMap<String, String>>>>,
    }

    impl<S> Layer<S> for TestLayer
    where
        S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    {
        fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, _ctx: Context<'_, S>) {
            let mut span_map = HashMap::new();
            attrs.record(&mut TestVisitor(&mut span_map));
            self.spans.lock().unwrap().insert(id.clone(), span_map);
        }

        fn on_record(&self, id: &span::Id, values: &span::Record<'_>, _ctx: Context<'_, S>) {
            let mut spans = self.spans.lock().unwrap();
            if let Some(span_map) = spans.get_mut(id) {
                values.record(&mut TestVisitor(span_map));
            }
        }
    }

    struct TestVisitor<'a>(&'a mut HashMap<String, String>);

    impl tracing::field::Visit for TestVisitor<'_> {
        fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{value:?}"));
        }
    }

    fn capture<F>(f: F) -> HashMap<String, String>
    where
        F: FnOnce() -> Span,
    {
        let layer = TestLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        let id = tracing::subscriber::with_default(subscriber, || {
            let span = f();
            span.id().unwrap()
        });
        let spans = layer.spans.lock().unwrap();
        spans.get(&id).cloned().expect("span not found")
    }

    #[test]
    fn create_span() {
        let attributes = capture(|| {
            create_client_request_span(
                "DescribeDBInstances",
                "https://rds.us-east-1.amazonaws.com/",
                &INFO,
            )
        });
        let want: HashMap<String, String> = [
            (RPC_SYSTEM, "aws-api"),
            (RPC_SERVICE, "rds"),
            (RPC_METHOD, "DescribeDBInstances"),
            (URL_FULL, "https://rds.us-east-1.amazonaws.com/"),
            (HTTP_REQUEST_METHOD, "POST"),
            (CLIENT_ARTIFACT, "rds-admin"),
            (CLIENT_VERSION, "1.2.3"),
            (OTEL_STATUS_CODE, "UNSET"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(attributes, want);
    }

    #[test]
    fn record_ok() {
        let attributes = capture(|| {
            let span = create_client_request_span("StopDBInstance", "http://localhost/", &INFO);
            let mut headers = http::HeaderMap::new();
            headers.insert(
                gax::response::REQUEST_ID_HEADER,
                http::HeaderValue::from_static("req-123"),
            );
            let response = Response::from_parts(
                gax::response::Parts::new().set_headers(headers),
                (),
            );
            record_client_request_span(&Ok(response), &span);
            span
        });
        assert_eq!(attributes.get(OTEL_STATUS_CODE).map(String::as_str), Some("OK"));
        assert_eq!(attributes.get(REQUEST_ID).map(String::as_str), Some("req-123"));
        assert!(attributes.get(ERROR_TYPE).is_none(), "{attributes:?}");
    }

    #[test]
    fn record_service_error() {
        let attributes = capture(|| {
            let span = create_client_request_span("StopDBInstance", "http://localhost/", &INFO);
            let svc = ServiceError::new("DBInstanceNotFound", "DBInstance db-1 not found.")
                .set_http_status_code(404_u16)
                .set_request_id("req-456");
            let result: gax::Result<Response<()>> = Err(Error::service(svc));
            record_client_request_span(&result, &span);
            span
        });
        assert_eq!(attributes.get(OTEL_STATUS_CODE).map(String::as_str), Some("ERROR"));
        assert_eq!(
            attributes.get(ERROR_TYPE).map(String::as_str),
            Some("DBInstanceNotFound")
        );
        assert_eq!(
            attributes.get(HTTP_RESPONSE_STATUS_CODE).map(String::as_str),
            Some("404")
        );
        assert_eq!(attributes.get(REQUEST_ID).map(String::as_str), Some("req-456"));
        let description = attributes.get(OTEL_STATUS_DESCRIPTION).unwrap();
        assert!(description.contains("not found"), "{description}");
    }

    #[test_case(Error::timeout("t"), ERROR_TYPE_CLIENT_TIMEOUT)]
    #[test_case(Error::io("refused"), ERROR_TYPE_CLIENT_CONNECTION_ERROR)]
    #[test_case(Error::authentication(CredentialsError::from_msg("bad")), ERROR_TYPE_CLIENT_AUTHENTICATION_ERROR)]
    #[test_case(Error::ser("bad"), ERROR_TYPE_CLIENT_REQUEST_ERROR)]
    #[test_case(Error::deser("bad"), ERROR_TYPE_CLIENT_RESPONSE_DECODE_ERROR)]
    #[test_case(Error::http(503, http::HeaderMap::new(), bytes::Bytes::new()), "503")]
    #[test_case(Error::service(ServiceError::new("InvalidParameterValue", "m")), "InvalidParameterValue")]
    fn classify(error: Error, want: &str) {
        assert_eq!(error_type(&error), want);
    }
}
