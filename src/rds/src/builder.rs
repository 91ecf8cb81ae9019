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

pub mod rds {
    use crate::Result;
    use crate::model::*;
    use std::sync::Arc;

    /// A builder for [Rds][crate::client::Rds].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use rds_admin::*;
    /// # use builder::rds::ClientBuilder;
    /// # use client::Rds;
    /// let builder: ClientBuilder = Rds::builder();
    /// let client = builder
    ///     .with_endpoint("http://localhost:4566")
    ///     .with_region("us-west-2")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use crate::client::Rds;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Rds;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [super::rds] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        pub(crate) stub: Arc<dyn crate::stub::dynamic::Rds>,
        pub(crate) request: R,
        pub(crate) options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Rds>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    // Adds `by_page()` and `by_item()` to the builders of paginated
    // operations.
    macro_rules! pages {
        (true, $op:ident, $resp:ty) => {
            impl $op {
                /// Streams each page in the collection.
                ///
                /// The first request starts at the marker set in the
                /// request, if any. Each following request uses the marker
                /// returned with the previous page, until the service
                /// returns no marker.
                pub fn by_page(self) -> gax::paginator::Paginator<$resp, gax::error::Error> {
                    let token = self.0.request.marker.clone().unwrap_or_default();
                    let execute = move |token: String| {
                        let mut builder = self.clone();
                        builder.0.request.marker = (!token.is_empty()).then_some(token);
                        builder.send()
                    };
                    gax::paginator::Paginator::new(token, execute)
                }

                /// Streams each item in the collection.
                pub fn by_item(self) -> gax::paginator::ItemPaginator<$resp, gax::error::Error> {
                    self.by_page().items()
                }
            }
        };
        (false, $op:ident, $resp:ty) => {};
    }

    macro_rules! builders {
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
            $(
                #[doc = concat!("The request builder for [Rds::", stringify!($method), "][crate::client::Rds::", stringify!($method), "] calls.")]
                #[derive(Clone, Debug)]
                pub struct $op(pub(crate) RequestBuilder<$req>);

                impl $op {
                    pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Rds>) -> Self {
                        Self(RequestBuilder::new(stub))
                    }

                    /// Sets the full request, replacing any prior values.
                    pub fn with_request<V: Into<$req>>(mut self, v: V) -> Self {
                        self.0.request = v.into();
                        self
                    }

                    /// Sets all the options, replacing any prior values.
                    pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
                        self.0.options = v.into();
                        self
                    }

                    /// Sends the request.
                    pub async fn send(self) -> Result<$resp> {
                        self.send_with_metadata()
                            .await
                            .map(gax::response::Response::into_body)
                    }

                    /// Sends the request, and returns the response headers with the body.
                    pub async fn send_with_metadata(self) -> Result<gax::response::Response<$resp>> {
                        (*self.0.stub)
                            .$method(self.0.request, self.0.options)
                            .await
                    }
                }

                pages!($paginated, $op, $resp);

                #[doc(hidden)]
                impl gax::options::internal::RequestBuilder for $op {
                    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
                        &mut self.0.options
                    }
                }
            )*
        };
    }

    rds_operations!(builders);

}
