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

//! Response types.
//!
//! This module contains types related to service responses. Notably it
//! contains the `Response` type itself, which carries the response metadata
//! (the headers and the request id) alongside the body.
//!
//! # Examples
//!
//! Inspecting the result of a request
//!
//! ```no_run
//! # use rds_gax::Result;
//! # use rds_gax::response::Response;
//! // A type representing a service resource, for example, a database
//! // instance.
//! struct Resource {
//!   // ...
//! }
//!
//! async fn describe_resource(id: &str) -> Result<Response<Resource>> {
//!   // ...
//! # panic!()
//! }
//!
//! # tokio_test::block_on(async {
//! let response = describe_resource("my-database").await?;
//! if let Some(id) = response.request_id() {
//!     println!("request id: {id}");
//! }
//! let resource = response.body();
//! // do something with
//! # Result::<()>::Ok(()) });
//! ```
//!
//! Creating a response for mocks
//!
//! ```
//! # use rds_gax::Result;
//! # use rds_gax::response::Response;
//! struct Resource {
//!   // ...
//! }
//!
//! fn make_mock_response(body: Resource) -> Result<Response<Resource>> {
//!     Ok(Response::from(body))
//! }
//! ```

/// The header used by the service to return the request id.
pub const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

/// Represents a service response.
///
/// A response consists of a body (potentially the unit type), and some
/// metadata, currently just headers.
///
/// Typically you get a response as the result of making a request via the
/// client. You may also create responses directly when mocking clients for
/// your own tests.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body.
    ///
    /// # Example
    /// ```
    /// # use rds_gax::response::Response;
    /// #[derive(Clone, Default)]
    /// pub struct Resource {
    ///   // ...
    /// }
    ///
    /// let body = Resource::default();
    /// let response = Response::from(body);
    /// ```
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    ///
    /// # Example
    /// ```
    /// # use rds_gax::response::Response;
    /// # use rds_gax::response::Parts;
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert(http::header::CONTENT_TYPE, http::HeaderValue::from_static("application/json"));
    /// let response = Response::from_parts(Parts::new().set_headers(headers), ());
    /// assert!(response.headers().get(http::header::CONTENT_TYPE).is_some());
    /// ```
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the request id, if the service included one.
    ///
    /// # Example
    /// ```
    /// # use rds_gax::response::{Parts, Response, REQUEST_ID_HEADER};
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert(REQUEST_ID_HEADER, http::HeaderValue::from_static("abc-123"));
    /// let response = Response::from_parts(Parts::new().set_headers(headers), ());
    /// assert_eq!(response.request_id(), Some("abc-123"));
    /// ```
    pub fn request_id(&self) -> Option<&str> {
        self.parts.request_id()
    }

    /// Returns the body associated with this response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response returning the metadata, and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response returning only its body.
    pub fn into_body(self) -> T {
        self.body
    }
}

/// Component parts of a response.
///
/// The response parts, other than the body, consist of just headers. We
/// anticipate the addition of new fields over time.
///
/// # Example
/// ```
/// # use rds_gax::response::Parts;
/// let mut headers = http::HeaderMap::new();
/// headers.insert(http::header::CONTENT_TYPE, http::HeaderValue::from_static("application/json"));
/// let parts = Parts::new().set_headers(headers);
///
/// assert_eq!(
///     parts.headers.get(http::header::CONTENT_TYPE),
///     Some(&http::HeaderValue::from_static("application/json"))
/// );
/// ```
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }

    /// Returns the request id, if present in the headers.
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_from() {
        let response = Response::from("abc123".to_string());
        assert!(response.headers().is_empty());
        assert_eq!(response.request_id(), None);
        assert_eq!(response.body().as_str(), "abc123");

        let body = response.into_body();
        assert_eq!(body.as_str(), "abc123");
    }

    #[test]
    fn response_from_parts() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        let parts = Parts::new().set_headers(headers.clone());

        let response = Response::from_parts(parts, "abc123".to_string());
        assert_eq!(response.body().as_str(), "abc123");
        assert_eq!(response.headers(), &headers);

        let (parts, body) = response.into_parts();
        assert_eq!(body.as_str(), "abc123");
        assert_eq!(parts.headers, headers);
    }

    #[test]
    fn request_id() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            "x-amzn-requestid",
            http::HeaderValue::from_static("7d7bd5a6-5b0c-4d7e-bd7b-bb1e0a4d0a1c"),
        );
        let response = Response::from_parts(Parts::new().set_headers(headers), ());
        assert_eq!(
            response.request_id(),
            Some("7d7bd5a6-5b0c-4d7e-bd7b-bb1e0a4d0a1c")
        );
    }

    #[test]
    fn request_id_not_utf8() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            REQUEST_ID_HEADER,
            http::HeaderValue::from_bytes(&[0xfa_u8, 0xfb]).unwrap(),
        );
        let parts = Parts::new().set_headers(headers);
        assert_eq!(parts.request_id(), None);
    }
}
