// Copyright 2024 Google LLC
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

use super::CredentialsError;
use super::ServiceError;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client operations.
///
/// Errors come from two tiers. The service may reject the request, for
/// example because the database instance does not exist or is in the wrong
/// state. Such errors are reported with a [ServiceError], available via
/// [service_error()][Error::service_error]. Alternatively, the request may
/// fail before the service can process it: the transport may be unable to
/// connect, the request may time out, or the library may be unable to format
/// the request or parse the response. These client-side errors have no
/// `ServiceError`, and this type offers predicates to distinguish them.
///
/// Applications can query the error [source][std::error::Error::source] for
/// deeper information.
///
/// # Example
/// ```
/// use rds_gax::error::Error;
/// match example_function() {
///     Err(e) if e.service_error().is_some() => {
///         println!("service error {e}, code {}", e.service_error().unwrap().code());
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use rds_gax::error::ServiceError;
///     # Err(Error::service(ServiceError::new("DBInstanceNotFound", "not found")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use rds_gax::error::{Error, ServiceError};
    /// let svc = ServiceError::new("DBInstanceNotFound", "DBInstance db-1 not found.");
    /// let error = Error::service(svc.clone());
    /// assert_eq!(error.service_error(), Some(&svc));
    /// ```
    pub fn service(error: ServiceError) -> Self {
        Self {
            kind: ErrorKind::Service(Box::new(error)),
            source: None,
        }
    }

    /// The [ServiceError] payload associated with this error.
    ///
    /// Returns `None` for client-side errors, that is, errors where the
    /// request did not reach the service or the response could not be
    /// interpreted.
    ///
    /// # Troubleshooting
    ///
    /// As this error is created by the service, troubleshooting typically
    /// involves reading the service documentation for the error
    /// [code][ServiceError::code].
    pub fn service_error(&self) -> Option<&ServiceError> {
        match &self.kind {
            ErrorKind::Service(d) => Some(d.as_ref()),
            _ => None,
        }
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use rds_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    /// If the request mutates any state in the service, it may or may not be
    /// safe to attempt the request again.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause of this problem is setting a timeout value that is
    /// based on the observed latency when the service is not under load.
    /// Consider increasing the timeout value to handle temporary latency
    /// increases too.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use rds_gax::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have completed in the service.
    ///
    /// # Troubleshooting
    ///
    /// The models tolerate unknown fields, so the most common cause for this
    /// problem is a proxy or load balancer returning a non-JSON payload with a
    /// successful status code.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use rds_gax::error::Error;
    /// let error = Error::ser("simulated problem");
    /// assert!(error.is_serialization());
    /// assert!(error.source().is_some());
    /// ```
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient: the serialization is
    /// deterministic, and will fail on future attempts with the same input.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause is a request option that cannot be represented as
    /// a HTTP header, such as a user agent with control characters.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot create the authentication headers.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn authentication(source: CredentialsError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// Could not create the authentication headers before sending the request.
    ///
    /// # Troubleshooting
    ///
    /// Consult the documentation for the credentials type configured in the
    /// client builder.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use rds_gax::error::Error;
    /// let e = search_for_thing("the thing");
    /// if let Some(code) = e.http_status_code() {
    ///     if code == 404 {
    ///         println!("cannot find the thing, more details in {e}");
    ///     }
    /// }
    ///
    /// fn search_for_thing(name: &str) -> Error {
    ///     # Error::http(400, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND"))
    /// }
    /// ```
    ///
    /// Sometimes the error is generated before it reaches the service. For
    /// example, your proxy or a load balancer may generate errors without the
    /// payload the service uses to report errors. In such cases the client
    /// library returns the status code, headers, and http payload.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().status_code,
            ErrorKind::Service(d) => d.as_ref().http_status_code(),
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    ///
    /// Many errors do not have this information, e.g. errors detected before
    /// the request is sent, or timeouts.
    pub fn http_headers(&self) -> Option<&http::HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().headers.as_ref(),
            ErrorKind::Service(d) => d.as_ref().headers(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    ///
    /// Only transport errors with a full HTTP response have a payload. The
    /// payload of service errors is parsed into the [ServiceError].
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem reported by the transport layer, with a full HTTP response
    /// that does not contain a service error.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        let kind = ErrorKind::Transport(Box::new(details));
        Self { kind, source: None }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include: a refused connection, a broken connection after the
    /// request is sent, or DNS resolution failures.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include read or write problems, refused connections, and
    /// broken connections.
    ///
    /// # Troubleshooting
    ///
    /// Verify the endpoint configured in the client builder is reachable from
    /// your environment.
    pub fn is_io(&self) -> bool {
        matches!(
        &self.kind,
        ErrorKind::Transport(d) if matches!(**d, TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        }))
    }

    /// A problem in the transport layer.
    ///
    /// This includes [io][Error::is_io] errors and HTTP responses that do not
    /// contain a service error, for example, errors generated by a proxy or a
    /// load balancer before the request reaches the service.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport { .. })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Transport(details), _) => details.display(self.source(), f),
            (ErrorKind::Service(d), _) => write!(f, "{d}"),
            (_, None) => write!(f, "an unclassified problem making a request"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &dyn std::error::Error)
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceError>),
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, &self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => {
                if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                    write!(f, "the HTTP transport reports a [{code}] error: {message}")
                } else {
                    write!(f, "the HTTP transport reports a [{code}] error: {p:?}")
                }
            }
            (Some(source), _) => {
                write!(f, "the transport reports an error: {source}")
            }
            (None, _) => write!(f, "the transport reports an unknown error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use std::error::Error as StdError;

    #[test]
    fn service() {
        let svc = ServiceError::new("DBInstanceNotFound", "DBInstance db-1 not found.")
            .set_http_status_code(404_u16)
            .set_request_id("req-123");
        let error = Error::service(svc.clone());
        assert_eq!(error.service_error(), Some(&svc));
        assert_eq!(error.http_status_code(), Some(404));
        assert!(error.source().is_none(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(!error.is_timeout(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
        let fmt = error.to_string();
        assert!(fmt.contains("DBInstanceNotFound"), "{fmt}");
        assert!(fmt.contains("DBInstance db-1 not found."), "{fmt}");
        assert!(fmt.contains("req-123"), "{fmt}");
    }

    #[test]
    fn service_with_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-amzn-requestid", HeaderValue::from_static("req-456"));
        let svc = ServiceError::new("InvalidDBClusterStateFault", "cluster is stopping")
            .set_headers(headers.clone());
        let error = Error::service(svc);
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.http_status_code(), None);
    }

    #[test]
    fn timeout() {
        let source = std::io::Error::other("test-only");
        let error = Error::timeout(source);
        assert!(error.is_timeout(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert!(error.service_error().is_none(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(matches!(got, Some(e) if e.kind() == std::io::ErrorKind::Other));
        assert!(error.to_string().contains("test-only"), "{error}");
    }

    #[test]
    fn serialization() {
        let error = Error::ser("test-only");
        assert!(error.is_serialization(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        assert!(error.service_error().is_none(), "{error:?}");
        assert!(error.to_string().contains("cannot serialize"), "{error}");
    }

    #[test]
    fn deserialization() {
        let error = Error::deser("test-only");
        assert!(error.is_deserialization(), "{error:?}");
        assert!(!error.is_serialization(), "{error:?}");
        assert!(error.service_error().is_none(), "{error:?}");
        assert!(error.to_string().contains("cannot deserialize"), "{error}");
    }

    #[test]
    fn authentication() {
        let error = Error::authentication(CredentialsError::from_msg("test-only"));
        assert!(error.is_authentication(), "{error:?}");
        assert!(error.service_error().is_none(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(got.is_some(), "{error:?}");
        assert!(error.to_string().contains("test-only"), "{error}");
    }

    #[test]
    fn http() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("text/plain"));
        let payload = bytes::Bytes::from_static(b"bad gateway");
        let error = Error::http(502, headers.clone(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.service_error().is_none(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(502));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.http_payload(), Some(&payload));
        let fmt = error.to_string();
        assert!(fmt.contains("[502]"), "{fmt}");
        assert!(fmt.contains("bad gateway"), "{fmt}");
    }

    #[test]
    fn http_binary_payload() {
        let payload = bytes::Bytes::from_static(&[0xff_u8, 0xfe, 0xfd]);
        let error = Error::http(500, HeaderMap::new(), payload);
        let fmt = error.to_string();
        assert!(fmt.contains("[500]"), "{fmt}");
    }

    #[test]
    fn io() {
        let error = Error::io(std::io::Error::other("connection refused"));
        assert!(error.is_io(), "{error:?}");
        assert!(error.is_transport(), "{error:?}");
        assert!(error.service_error().is_none(), "{error:?}");
        assert_eq!(error.http_status_code(), None);
        assert_eq!(error.http_headers(), None);
        assert_eq!(error.http_payload(), None);
        let fmt = error.to_string();
        assert!(fmt.contains("connection refused"), "{fmt}");
    }

    #[test]
    fn send_sync() {
        static_assertions::assert_impl_all!(Error: Send, Sync, StdError);
    }
}
