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

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

use std::sync::Arc;

/// Implements a client for the Relational Database Service.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use rds_admin::client::Rds;
/// let client = Rds::builder().build().await?;
/// // use `client` to make requests to the service.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// The service creates, configures, and operates relational databases. This
/// client manages the resources of the control plane, such as instances,
/// clusters, snapshots, and parameter groups. It does not connect to the
/// databases themselves.
///
/// Every function returns a request builder. Use the `set_*` functions of
/// the builder to populate the request, and then call `send()`. Operations
/// returning collections also provide `by_page()` and `by_item()`.
///
/// # Configuration
///
/// To configure `Rds` use the `with_*` methods in the type returned
/// by [builder()][Rds::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_region()]: by default this client uses the region set in
///   `AWS_REGION` or `AWS_DEFAULT_REGION`, and falls back to `us-east-1`.
/// * [with_endpoint()]: by default this client uses the regional endpoint
///   (`https://rds.{region}.amazonaws.com`). Applications using emulators
///   or proxies may want to override this default.
/// * [with_credentials()]: by default this client sends anonymous requests.
///
/// # Pooling and Cloning
///
/// `Rds` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `Rds` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
///
/// [with_region()]: super::builder::rds::ClientBuilder::with_region
/// [with_endpoint()]: super::builder::rds::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::rds::ClientBuilder::with_credentials
#[derive(Clone, Debug)]
pub struct Rds {
    inner: Arc<dyn super::stub::dynamic::Rds>,
}

impl Rds {
    /// Returns a builder for [Rds].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use rds_admin::client::Rds;
    /// let client = Rds::builder().with_region("eu-west-1").build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::rds::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::rds::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Rds + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Arc<dyn super::stub::dynamic::Rds>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Rds> {
        super::transport::Rds::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Rds> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Rds::new)
    }
}

macro_rules! client_impl {
    ($(
        $op:ident {
            name: $wire:literal,
            method: $method:ident,
            request: $req:ident,
            response: $resp:ty,
            errors: [$($kind:ident),* $(,)?],
            paginated: $paginated:tt,
        },
    )*) => {
        impl Rds {
            $(
                #[doc = concat!("Calls the `", $wire, "` operation.")]
                #[doc = ""]
                #[doc = concat!("The declared error conditions are in `", stringify!($req), "::OPERATION.errors()`.")]
                pub fn $method(&self) -> super::builder::rds::$op {
                    super::builder::rds::$op::new(self.inner.clone())
                }
            )*
        }
    };
}

rds_operations!(client_impl);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_and_sync() {
        static_assertions::assert_impl_all!(Rds: Clone, std::fmt::Debug, Send, Sync);
    }

    #[tokio::test]
    async fn builder() -> anyhow::Result<()> {
        let client = Rds::builder()
            .with_endpoint("http://localhost:4566")
            .with_region("us-west-2")
            .build()
            .await?;
        let debug = format!("{client:?}");
        assert!(debug.contains("localhost"), "{debug}");
        Ok(())
    }

    #[tokio::test]
    async fn builder_invalid_region() {
        let err = Rds::builder()
            .with_region("US West")
            .build()
            .await
            .unwrap_err();
        assert!(err.is_invalid_region(), "{err:?}");
    }

    #[tokio::test]
    async fn builder_invalid_endpoint() {
        let err = Rds::builder()
            .with_endpoint("ftp://localhost")
            .build()
            .await
            .unwrap_err();
        assert!(err.is_invalid_endpoint(), "{err:?}");
    }
}
