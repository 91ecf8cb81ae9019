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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint, the region, or the
//! authentication credentials. The client libraries use a generic builder type
//! to provide such functionality. The types in this module implement the
//! client builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with the default configuration.
//!
//! ```
//! # use rds_gax::client_builder::examples;
//! # use rds_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder().build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: create a client for a different region
//!
//! ```
//! # use rds_gax::client_builder::examples;
//! # use rds_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_region("eu-west-1")
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use rds_gax::client_builder::examples;
/// use rds_gax::client_builder::Error as Error;
/// use examples::Client; // Placeholder for examples
/// # tokio_test::block_on(async {
/// let client = match Client::builder().with_endpoint("not a url").build().await {
///     Ok(c) => c,
///     Err(e) if e.is_invalid_endpoint() => {
///         println!("check the endpoint configuration: {e}");
///         return Err(e);
///     }
///     Err(e) => {
///         println!("error during client initialization {e}");
///         return Err(e);
///     }
/// };
/// # Ok::<(), Error>(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the configured (or default) endpoint is not a valid URL.
    pub fn is_invalid_endpoint(&self) -> bool {
        matches!(&self.0, ErrorKind::InvalidEndpoint(_))
    }

    /// If true, the configured region is empty or contains invalid characters.
    pub fn is_invalid_region(&self) -> bool {
        matches!(&self.0, ErrorKind::InvalidRegion(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn invalid_endpoint<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::InvalidEndpoint(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn invalid_region<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::InvalidRegion(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("the endpoint is not a valid URL")]
    InvalidEndpoint(#[source] BoxError),
    #[error("the region is not valid")]
    InvalidRegion(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// A "client" represents a connection to a specific service. All the clients
/// are initialized using a `ClientBuilder`.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client:
/// ```
/// # use rds_gax::client_builder::examples;
/// # use rds_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let builder = Client::builder();
/// # Result::<()>::Ok(()) });
/// ```
///
/// The builder offers several methods to configure the client, and a
/// `.build()` method to construct the client. The configuration is captured
/// when the client is built, later changes to the environment do not affect
/// existing clients.
/// ```
/// # use rds_gax::client_builder::examples;
/// # use rds_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder()
///     .with_endpoint("http://localhost:4566")
///     .with_region("us-west-2")
///     .build().await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// The default endpoint is derived from the region. Override it to use a
    /// VPC endpoint, a proxy, or a local emulator.
    ///
    /// ```
    /// # use rds_gax::client_builder::examples;
    /// # use rds_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_endpoint("https://rds.us-east-1.amazonaws.com")
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Sets the region.
    pub fn with_region<V: Into<String>>(mut self, v: V) -> Self {
        self.config.region = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    ///
    /// ```
    /// # use rds_gax::client_builder::examples;
    /// # use rds_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_tracing()
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authentication credentials.
    ///
    /// Without credentials the client sends anonymous requests, which is
    /// useful with emulators and with proxies that sign requests on behalf
    /// of the application.
    ///
    /// ```
    /// # use rds_gax::client_builder::examples;
    /// # use rds_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// use examples::credentials;
    /// let client = Client::builder()
    ///     .with_credentials(credentials::api_key::Builder::new("my-key").build())
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Sets the default timeout for each request.
    ///
    /// Individual requests can override this value using
    /// [with_attempt_timeout][crate::options::RequestOptionsBuilder::with_attempt_timeout].
    pub fn with_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.config.timeout = Some(v.into());
        self
    }
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: internal::ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// A client represents a connection to the service in one region. The
    /// default configuration should work for most applications. But some
    /// applications may need to override the default endpoint, the region,
    /// the authentication credentials, or the request timeout.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub region: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
        pub timeout: Option<std::time::Duration>,
    }

    impl<Cr> std::default::Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                region: None,
                cred: None,
                tracing: false,
                timeout: None,
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.
    //!
    //! The examples require relatively complex types to be useful.

    type Config = super::internal::ClientConfig<Credentials>;
    use super::Result;

    /// A client type for use in examples.
    ///
    /// This type is used in examples as a placeholder for a real client. It
    /// does not work, but illustrates how to use `ClientBuilder`.
    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        /// Create a builder to initialize new instances of this client.
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: super::internal::ClientConfig<Credentials>) -> Result<Self> {
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory, super::Credentials>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Credentials = super::Credentials;
            type Client = super::Client;
            async fn build(
                self,
                config: crate::client_builder::internal::ClientConfig<Self::Credentials>,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Credentials {
        pub api_key: String,
    }

    pub mod credentials {
        pub mod api_key {
            #[derive(Clone, Default)]
            pub struct Builder(super::super::Credentials);
            impl Builder {
                pub fn new<V: Into<String>>(v: V) -> Self {
                    Self(super::super::Credentials { api_key: v.into() })
                }
                pub fn build(self) -> super::super::Credentials {
                    self.0
                }
            }
        }
    }

    // We use the examples as scaffolding for the tests.
    #[cfg(test)]
    mod tests {
        use super::*;
        use std::time::Duration;

        #[tokio::test]
        async fn build_default() {
            let client = Client::builder().build().await.unwrap();
            let config = client.0;
            assert_eq!(config.endpoint, None);
            assert_eq!(config.region, None);
            assert_eq!(config.cred, None);
            assert_eq!(config.timeout, None);
            assert!(!config.tracing);
        }

        #[tokio::test]
        async fn endpoint() {
            let client = Client::builder()
                .with_endpoint("http://example.com")
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert_eq!(config.endpoint.as_deref(), Some("http://example.com"));
        }

        #[tokio::test]
        async fn region() {
            let client = Client::builder()
                .with_region("ap-southeast-2")
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert_eq!(config.region.as_deref(), Some("ap-southeast-2"));
        }

        #[tokio::test]
        async fn tracing() {
            let client = Client::builder().with_tracing().build().await.unwrap();
            let config = client.0;
            assert!(config.tracing);
        }

        #[tokio::test]
        async fn credentials() {
            let client = Client::builder()
                .with_credentials(credentials::api_key::Builder::new("test-key").build())
                .build()
                .await
                .unwrap();
            let config = client.0;
            let cred = config.cred.unwrap();
            assert_eq!(cred.api_key, "test-key");
        }

        #[tokio::test]
        async fn timeout() {
            let client = Client::builder()
                .with_timeout(Duration::from_secs(42))
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert_eq!(config.timeout, Some(Duration::from_secs(42)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn invalid_endpoint() {
        let error = Error::invalid_endpoint(std::io::Error::other("test-only"));
        assert!(error.is_invalid_endpoint(), "{error:?}");
        assert!(!error.is_invalid_region(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("endpoint"), "{error}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(got.is_some(), "{error:?}");
    }

    #[test]
    fn invalid_region() {
        let error = Error::invalid_region("region cannot be empty");
        assert!(error.is_invalid_region(), "{error:?}");
        assert!(!error.is_invalid_endpoint(), "{error:?}");
        assert!(error.to_string().contains("region"), "{error}");
        assert!(error.source().is_some(), "{error:?}");
    }

    #[test]
    fn transport() {
        let error = Error::transport(std::io::Error::other("test-only"));
        assert!(error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("transport client"), "{error}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(
            matches!(got, Some(e) if e.kind() == std::io::ErrorKind::Other),
            "{error:?}"
        );
    }
}
