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

#[cfg(test)]
mod test {
    use gax::client_builder::internal::ClientConfig;
    use gax::credentials::{Credentials, api_key};
    use rds_gax as gax;
    use std::time::Duration;

    #[tokio::test]
    async fn test_default() -> anyhow::Result<()> {
        let client = MyClient::builder().build().await?;
        assert_eq!(client.endpoint, None);
        assert_eq!(client.region, None);
        assert!(client.credentials.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_with_all() -> anyhow::Result<()> {
        let client = MyClient::builder()
            .with_endpoint("http://localhost:4566")
            .with_region("eu-central-1")
            .with_credentials(api_key::Builder::new("test-only").build())
            .with_timeout(Duration::from_secs(5))
            .build()
            .await?;
        assert_eq!(client.endpoint.as_deref(), Some("http://localhost:4566"));
        assert_eq!(client.region.as_deref(), Some("eu-central-1"));
        let headers = client.credentials.unwrap().headers().await?;
        assert!(headers.contains_key("x-api-key"), "{headers:?}");
        assert_eq!(client.timeout, Some(Duration::from_secs(5)));
        Ok(())
    }

    #[tokio::test]
    async fn test_factory_error() -> anyhow::Result<()> {
        let err = MyClient::builder()
            .with_region("")
            .build()
            .await
            .err()
            .unwrap();
        assert!(err.is_invalid_region(), "{err:?}");
        Ok(())
    }

    pub struct MyClient {
        endpoint: Option<String>,
        region: Option<String>,
        credentials: Option<Credentials>,
        timeout: Option<Duration>,
    }
    impl MyClient {
        pub fn builder() -> my_client::Builder {
            gax::client_builder::internal::new_builder(my_client::Factory)
        }

        async fn new(config: ClientConfig<Credentials>) -> gax::client_builder::Result<Self> {
            if config.region.as_deref() == Some("") {
                return Err(gax::client_builder::Error::invalid_region(
                    "region cannot be empty",
                ));
            }
            Ok(Self {
                endpoint: config.endpoint,
                region: config.region,
                credentials: config.cred,
                timeout: config.timeout,
            })
        }
    }
    mod my_client {
        use super::gax;
        pub type Builder = gax::client_builder::ClientBuilder<Factory, super::Credentials>;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = super::MyClient;
            type Credentials = super::Credentials;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig<Self::Credentials>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }
}
