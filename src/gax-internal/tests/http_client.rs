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

#[cfg(test)]
mod tests {
    use gax::options::RequestOptions;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use rds_gax_internal::http::ReqwestClient;
    use rds_gax_internal::options::{ClientConfig, ServiceInfo};
    use serde_json::json;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    static INFO: ServiceInfo = ServiceInfo {
        service_name: "rds",
        endpoint_prefix: "rds",
        target_prefix: "AmazonRDSv19",
        client_version: "1.2.3",
        client_artifact: "rds-admin",
    };

    fn test_config(server: &Server) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.endpoint = Some(format!("http://{}", server.addr()));
        config.region = Some("us-west-2".to_string());
        config
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn request_format() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::headers(contains((
                    "x-amz-target",
                    "AmazonRDSv19.DescribeDBInstances"
                ))),
                request::headers(contains(("content-type", "application/x-amz-json-1.0"))),
                request::headers(contains(("user-agent", "rds-admin/1.2.3"))),
                request::body(json_decoded(eq(json!({"DBInstanceIdentifier": "db-1"})))),
            ])
            .respond_with(json_encoded(json!({"DBInstances": []}))),
        );

        let client = ReqwestClient::new(test_config(&server), &INFO).await?;
        assert_eq!(client.region(), "us-west-2");
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(
                "DescribeDBInstances",
                &json!({"DBInstanceIdentifier": "db-1"}),
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(response.into_body(), json!({"DBInstances": []}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn request_id() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/")).respond_with(
                status_code(200)
                    .insert_header("x-amzn-requestid", "req-123")
                    .body("{}"),
            ),
        );

        let client = ReqwestClient::new(test_config(&server), &INFO).await?;
        let response = client
            .execute::<serde_json::Value, ()>("StopDBInstance", &json!({}), RequestOptions::default())
            .await?;
        assert_eq!(response.request_id(), Some("req-123"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn user_agent_with_prefix() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::headers(contains(("user-agent", "myapp/4.5.6 rds-admin/1.2.3"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = ReqwestClient::new(test_config(&server), &INFO).await?;
        let mut options = RequestOptions::default();
        options.set_user_agent("myapp/4.5.6");
        client
            .execute::<serde_json::Value, serde_json::Value>("DescribeDBClusters", &json!({}), options)
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn credentials() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::headers(contains(("x-api-key", "test-key"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let mut config = test_config(&server);
        config.cred = Some(gax::credentials::api_key::Builder::new("test-key").build());
        let client = ReqwestClient::new(config, &INFO).await?;
        client
            .execute::<serde_json::Value, serde_json::Value>(
                "DescribeAccountAttributes",
                &json!({}),
                RequestOptions::default(),
            )
            .await?;
        Ok(())
    }

    #[derive(Debug)]
    struct FailingCredentials;
    impl gax::credentials::CredentialsProvider for FailingCredentials {
        async fn headers(&self) -> gax::credentials::Result<http::HeaderMap> {
            Err(gax::error::CredentialsError::from_msg("simulated"))
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn credentials_error() -> Result<()> {
        let server = Server::run();
        let mut config = test_config(&server);
        config.cred = Some(gax::credentials::Credentials::from(FailingCredentials));
        let client = ReqwestClient::new(config, &INFO).await?;
        let err = client
            .execute::<serde_json::Value, serde_json::Value>(
                "DescribeAccountAttributes",
                &json!({}),
                RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/")).respond_with(
                status_code(404)
                    .insert_header("x-amzn-requestid", "req-404")
                    .body(
                        json!({
                            "__type": "DBInstanceNotFound",
                            "message": "DBInstance db-404 not found."
                        })
                        .to_string(),
                    ),
            ),
        );

        let client = ReqwestClient::new(test_config(&server), &INFO).await?;
        let err = client
            .execute::<serde_json::Value, ()>(
                "DeleteDBInstance",
                &json!({"DBInstanceIdentifier": "db-404"}),
                RequestOptions::default(),
            )
            .await
            .unwrap_err();
        let svc = err.service_error().unwrap();
        assert_eq!(svc.code(), "DBInstanceNotFound");
        assert_eq!(svc.message(), "DBInstance db-404 not found.");
        assert_eq!(svc.request_id(), Some("req-404"));
        assert_eq!(err.http_status_code(), Some(404));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn http_error_without_code() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/"))
                .respond_with(status_code(503).body("try again later")),
        );

        let client = ReqwestClient::new(test_config(&server), &INFO).await?;
        let err = client
            .execute::<serde_json::Value, ()>("StartDBCluster", &json!({}), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.service_error().is_none(), "{err:?}");
        assert!(err.is_transport(), "{err:?}");
        assert!(!err.is_io(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(503));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn request_timeout() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/"))
                .times(..)
                .respond_with(delay_and_then(
                    Duration::from_secs(5),
                    json_encoded(json!({})),
                )),
        );

        let client = ReqwestClient::new(test_config(&server), &INFO).await?;
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_millis(100));
        let err = client
            .execute::<serde_json::Value, ()>("RebootDBInstance", &json!({}), options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        assert!(err.service_error().is_none(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn client_timeout() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/"))
                .times(..)
                .respond_with(delay_and_then(
                    Duration::from_secs(5),
                    json_encoded(json!({})),
                )),
        );

        let mut config = test_config(&server);
        config.timeout = Some(Duration::from_millis(100));
        let client = ReqwestClient::new(config, &INFO).await?;
        let err = client
            .execute::<serde_json::Value, ()>("RebootDBInstance", &json!({}), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn connection_refused() -> Result<()> {
        // Find an unused port, then stop listening on it.
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
            listener.local_addr()?
        };
        let mut config = ClientConfig::default();
        config.endpoint = Some(format!("http://{addr}"));
        config.region = Some("us-east-1".to_string());
        let client = ReqwestClient::new(config, &INFO).await?;
        let err = client
            .execute::<serde_json::Value, ()>("StopDBInstance", &json!({}), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");
        assert!(err.service_error().is_none(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn builder_errors() -> Result<()> {
        let mut config = ClientConfig::default();
        config.endpoint = Some("ftp://example.com".to_string());
        config.region = Some("us-east-1".to_string());
        let err = ReqwestClient::new(config, &INFO).await.unwrap_err();
        assert!(err.is_invalid_endpoint(), "{err:?}");

        let mut config = ClientConfig::default();
        config.region = Some("Not A Region".to_string());
        let err = ReqwestClient::new(config, &INFO).await.unwrap_err();
        assert!(err.is_invalid_region(), "{err:?}");
        Ok(())
    }
}
