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

//! Types to configure the authentication headers sent with each request.
//!
//! The client does not sign requests. Applications typically run the client
//! against an endpoint (a proxy, a gateway, or an emulator) that accepts
//! simpler credentials, such as an API key. Applications with more complex
//! needs can implement [CredentialsProvider].
//!
//! # Example
//! ```
//! # use rds_gax::credentials::{api_key, Credentials};
//! let credentials: Credentials = api_key::Builder::new("my-api-key").build();
//! ```

use crate::error::CredentialsError;
use http::HeaderMap;
use std::future::Future;
use std::sync::Arc;

/// The result type for credential operations.
pub type Result<T> = std::result::Result<T, CredentialsError>;

/// A set of credentials, used to create the authentication headers of each
/// request.
///
/// The client libraries clone this type freely, all clones share the same
/// provider.
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers to include in a request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }
}

impl std::default::Default for Credentials {
    fn default() -> Self {
        anonymous::Builder::new().build()
    }
}

/// Creates the authentication headers for each request.
///
/// Implement this trait to integrate custom authentication schemes, or to
/// mock credentials in tests.
///
/// # Example
/// ```
/// # use rds_gax::credentials::{Credentials, CredentialsProvider, Result};
/// #[derive(Debug)]
/// struct MyHeaders;
/// impl CredentialsProvider for MyHeaders {
///     async fn headers(&self) -> Result<http::HeaderMap> {
///         let mut headers = http::HeaderMap::new();
///         headers.insert("x-my-token", http::HeaderValue::from_static("abc"));
///         Ok(headers)
///     }
/// }
/// let credentials = Credentials::from(MyHeaders);
/// ```
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the authentication headers.
    fn headers(&self) -> impl Future<Output = Result<HeaderMap>> + Send;
}

pub(crate) mod dynamic {
    use super::{HeaderMap, Result};

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        async fn headers(&self) -> Result<HeaderMap>;
    }

    /// The public CredentialsProvider implements the dyn-compatible version.
    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self) -> Result<HeaderMap> {
            T::headers(self).await
        }
    }
}

/// Credentials that add no headers.
///
/// Use these credentials with emulators, or with proxies that authenticate
/// requests on behalf of the application.
pub mod anonymous {
    use super::{Credentials, CredentialsProvider, HeaderMap, Result};

    #[derive(Debug)]
    struct AnonymousProvider;

    impl CredentialsProvider for AnonymousProvider {
        async fn headers(&self) -> Result<HeaderMap> {
            Ok(HeaderMap::new())
        }
    }

    /// Creates anonymous credentials.
    #[derive(Debug, Default)]
    pub struct Builder {}

    impl Builder {
        pub fn new() -> Self {
            Self {}
        }

        pub fn build(self) -> Credentials {
            Credentials::from(AnonymousProvider)
        }
    }
}

/// Credentials based on an API key.
///
/// The key is sent in the `x-api-key` header of each request.
pub mod api_key {
    use super::{Credentials, CredentialsProvider, HeaderMap, Result};
    use crate::error::CredentialsError;
    use http::HeaderValue;

    /// The header used to send the API key.
    pub const API_KEY_HEADER: &str = "x-api-key";

    struct ApiKeyProvider {
        key: String,
    }

    impl std::fmt::Debug for ApiKeyProvider {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("ApiKeyProvider")
                .field("key", &"[censored]")
                .finish()
        }
    }

    impl CredentialsProvider for ApiKeyProvider {
        async fn headers(&self) -> Result<HeaderMap> {
            let mut value = HeaderValue::from_str(&self.key).map_err(CredentialsError::new)?;
            value.set_sensitive(true);
            let mut headers = HeaderMap::new();
            headers.insert(API_KEY_HEADER, value);
            Ok(headers)
        }
    }

    /// Creates credentials based on an API key.
    ///
    /// # Example
    /// ```
    /// # use rds_gax::credentials::api_key;
    /// let credentials = api_key::Builder::new("my-api-key").build();
    /// ```
    #[derive(Debug)]
    pub struct Builder {
        key: String,
    }

    impl Builder {
        pub fn new<V: Into<String>>(key: V) -> Self {
            Self { key: key.into() }
        }

        pub fn build(self) -> Credentials {
            Credentials::from(ApiKeyProvider { key: self.key })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn anonymous() {
        let credentials = anonymous::Builder::new().build();
        let headers = credentials.headers().await.unwrap();
        assert!(headers.is_empty(), "{headers:?}");
    }

    #[tokio::test]
    async fn default_is_anonymous() {
        let credentials = Credentials::default();
        let headers = credentials.headers().await.unwrap();
        assert!(headers.is_empty(), "{headers:?}");
    }

    #[tokio::test]
    async fn api_key() {
        let credentials = api_key::Builder::new("test-key-123").build();
        let headers = credentials.headers().await.unwrap();
        let got = headers.get(api_key::API_KEY_HEADER).unwrap();
        assert_eq!(got.to_str().unwrap(), "test-key-123");
        assert!(got.is_sensitive());
    }

    #[tokio::test]
    async fn api_key_invalid() {
        let credentials = api_key::Builder::new("bad\nkey").build();
        let err = credentials.headers().await.unwrap_err();
        assert!(err.to_string().contains("credential headers"), "{err}");
    }

    #[test]
    fn api_key_debug() {
        let credentials = api_key::Builder::new("super-secret").build();
        let fmt = format!("{credentials:?}");
        assert!(!fmt.contains("super-secret"), "{fmt}");
    }

    #[derive(Debug)]
    struct Failing;
    impl CredentialsProvider for Failing {
        async fn headers(&self) -> Result<HeaderMap> {
            Err(CredentialsError::from_msg("simulated"))
        }
    }

    #[tokio::test]
    async fn custom_provider() {
        let credentials = Credentials::from(Failing);
        let err = credentials.headers().await.unwrap_err();
        assert!(err.to_string().contains("simulated"), "{err}");
    }
}
