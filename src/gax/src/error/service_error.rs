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

use http::HeaderMap;

/// An error returned by the service.
///
/// The service reports failures with an error code (e.g.
/// `DBInstanceNotFound`), a human-readable message, and a request id that
/// identifies the failed request in the service logs. Errors received over
/// HTTP also carry the status code and response headers.
///
/// Each operation declares the error codes it may return. When the client
/// recognizes the code as one of the declared errors for the operation that
/// failed, [is_declared][ServiceError::is_declared] returns `true`. Undeclared
/// codes (for example, throttling or parameter validation failures) are still
/// reported as service errors.
///
/// # Example
/// ```
/// # use rds_gax::error::ServiceError;
/// let e = ServiceError::new("DBInstanceNotFound", "DBInstance my-db not found.")
///     .set_request_id("f1d2c3b4")
///     .set_declared(true);
/// assert_eq!(e.code(), "DBInstanceNotFound");
/// assert!(e.is_declared());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ServiceError {
    code: String,
    message: String,
    request_id: Option<String>,
    http_status_code: Option<u16>,
    headers: Option<HeaderMap>,
    declared: bool,
}

impl ServiceError {
    /// Creates a new service error with the given code and message.
    pub fn new<C: Into<String>, M: Into<String>>(code: C, message: M) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    /// The error code reported by the service.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The human-readable message reported by the service.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The request id, if known.
    ///
    /// Include this value when contacting support about a failed request.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        self.http_status_code
    }

    /// The HTTP headers, if any, associated with this error.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.headers.as_ref()
    }

    /// Returns true if the code is one of the errors declared by the failed
    /// operation.
    pub fn is_declared(&self) -> bool {
        self.declared
    }

    /// Sets the request id.
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = Some(v.into());
        self
    }

    /// Sets the HTTP status code.
    pub fn set_http_status_code<T: Into<u16>>(mut self, v: T) -> Self {
        self.http_status_code = Some(v.into());
        self
    }

    /// Sets the HTTP headers.
    pub fn set_headers(mut self, v: HeaderMap) -> Self {
        self.headers = Some(v);
        self
    }

    /// Marks the error as declared (or not) by the failed operation.
    pub fn set_declared(mut self, v: bool) -> Self {
        self.declared = v;
        self
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "the service reports an error with code {} described as: {}",
            self.code, self.message
        )?;
        if let Some(id) = &self.request_id {
            write!(f, " (request id: {id})")?;
        }
        Ok(())
    }
}
