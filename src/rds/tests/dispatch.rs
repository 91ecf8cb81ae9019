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
mod dispatch {
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use rds_admin::client::Rds;
    use rds_admin::errors::ErrorKind;
    use rds_admin::model::*;
    use serde_json::json;
    use test_case::test_case;

    type Result<T> = anyhow::Result<T>;

    async fn test_client(server: &Server) -> Result<Rds> {
        let client = Rds::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_region("us-west-2")
            .build()
            .await?;
        Ok(client)
    }

    fn error_response(code: &str, message: &str) -> impl Responder + use<> {
        status_code(400)
            .insert_header("content-type", "application/x-amz-json-1.0")
            .insert_header("x-amzn-requestid", "req-123")
            .body(
                json!({"__type": format!("com.amazonaws.rds#{code}"), "message": message})
                    .to_string(),
            )
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn describe_instances() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::headers(contains((
                    "x-amz-target",
                    "AmazonRDSv19.DescribeDBInstances"
                ))),
                request::body(json_decoded(eq(json!({
                    "DBInstanceIdentifier": "db-1",
                    "Filters": [{"Name": "engine", "Values": ["postgres"]}],
                })))),
            ])
            .respond_with(json_encoded(json!({
                "DBInstances": [{
                    "DBInstanceIdentifier": "db-1",
                    "Engine": "postgres",
                    "DBInstanceStatus": "available",
                }],
            }))),
        );

        let client = test_client(&server).await?;
        let response = client
            .describe_db_instances()
            .set_db_instance_identifier("db-1")
            .set_filters([Filter::new().set_name("engine").set_values(["postgres"])])
            .send()
            .await?;
        let want = DescribeDbInstancesResponse::new().set_db_instances([DbInstance::new()
            .set_db_instance_identifier("db-1")
            .set_engine("postgres")
            .set_db_instance_status("available")]);
        assert_eq!(response, want);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn describe_is_repeatable() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/"))
                .times(3)
                .respond_with(json_encoded(json!({
                    "DBInstances": [{"DBInstanceIdentifier": "db-1"}],
                }))),
        );

        let client = test_client(&server).await?;
        let mut responses = Vec::new();
        for _ in 0..3 {
            responses.push(client.describe_db_instances().send().await?);
        }
        assert!(responses.windows(2).all(|w| w[0] == w[1]), "{responses:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn metadata() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/")).respond_with(
                status_code(200)
                    .insert_header("x-amzn-requestid", "req-456")
                    .body(json!({"DBInstance": {"DBInstanceIdentifier": "db-1"}}).to_string()),
            ),
        );

        let client = test_client(&server).await?;
        let response = client
            .reboot_db_instance()
            .set_db_instance_identifier("db-1")
            .send_with_metadata()
            .await?;
        assert_eq!(response.request_id(), Some("req-456"));
        let instance = response.into_body().db_instance.unwrap();
        assert_eq!(instance.db_instance_identifier.as_deref(), Some("db-1"));
        Ok(())
    }

    #[test_case(""; "empty body")]
    #[test_case("{}"; "empty object")]
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn void_operation(body: &'static str) -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::headers(contains((
                    "x-amz-target",
                    "AmazonRDSv19.DeleteDBParameterGroup"
                ))),
                request::body(json_decoded(eq(json!({"DBParameterGroupName": "my-group"})))),
            ])
            .respond_with(status_code(200).body(body)),
        );

        let client = test_client(&server).await?;
        client
            .delete_db_parameter_group()
            .set_db_parameter_group_name("my-group")
            .send()
            .await?;
        Ok(())
    }

    #[test_case("DBInstanceNotFound", ErrorKind::DbInstanceNotFound)]
    #[test_case("InvalidDBInstanceState", ErrorKind::InvalidDbInstanceState)]
    #[test_case("DBSnapshotAlreadyExists", ErrorKind::DbSnapshotAlreadyExists)]
    #[test_case("SnapshotQuotaExceeded", ErrorKind::SnapshotQuotaExceeded)]
    #[test_case("InvalidDBClusterStateFault", ErrorKind::InvalidDbClusterState)]
    #[test_case("DBInstanceAutomatedBackupQuotaExceeded", ErrorKind::DbInstanceAutomatedBackupQuotaExceeded)]
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn declared_errors(code: &'static str, want: ErrorKind) -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/"))
                .respond_with(error_response(code, "cannot delete")),
        );

        let client = test_client(&server).await?;
        let err = client
            .delete_db_instance()
            .set_db_instance_identifier("db-1")
            .send()
            .await
            .unwrap_err();
        assert_eq!(ErrorKind::from_error(&err), Some(want), "{err:?}");
        let svc = err.service_error().unwrap();
        assert_eq!(svc.code(), code);
        assert_eq!(svc.message(), "cannot delete");
        assert_eq!(svc.request_id(), Some("req-123"));
        assert_eq!(svc.http_status_code(), Some(400));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn missing_instance() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::body(json_decoded(eq(json!({
                "DBInstanceIdentifier": "missing",
                "SkipFinalSnapshot": true,
            })))))
            .respond_with(error_response(
                "DBInstanceNotFound",
                "DBInstance missing not found.",
            )),
        );

        let client = test_client(&server).await?;
        let err = client
            .delete_db_instance()
            .set_db_instance_identifier("missing")
            .set_skip_final_snapshot(true)
            .send()
            .await
            .unwrap_err();
        assert_eq!(
            ErrorKind::from_error(&err),
            Some(ErrorKind::DbInstanceNotFound)
        );
        Ok(())
    }

    #[test_case("Throttling"; "unknown code")]
    #[test_case("DBClusterNotFoundFault"; "known but not declared")]
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn undeclared_errors(code: &'static str) -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/"))
                .respond_with(error_response(code, "nope")),
        );

        let client = test_client(&server).await?;
        let err = client
            .delete_db_instance()
            .set_db_instance_identifier("db-1")
            .send()
            .await
            .unwrap_err();
        assert_eq!(ErrorKind::from_error(&err), None, "{err:?}");
        let svc = err.service_error().unwrap();
        assert_eq!(svc.code(), code);
        assert!(!svc.is_declared(), "{svc:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn error_without_code() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/"))
                .respond_with(status_code(502).body("<html>bad gateway</html>")),
        );

        let client = test_client(&server).await?;
        let err = client.describe_db_instances().send().await.unwrap_err();
        assert!(err.service_error().is_none(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(502));
        assert_eq!(ErrorKind::from_error(&err), None);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn connection_refused() -> Result<()> {
        // Nothing listens on this port once the server is dropped.
        let endpoint = {
            let server = Server::run();
            format!("http://{}", server.addr())
        };
        let client = Rds::builder()
            .with_endpoint(endpoint)
            .with_region("us-west-2")
            .build()
            .await?;
        let err = client.describe_db_instances().send().await.unwrap_err();
        assert!(err.is_io(), "{err:?}");
        assert_eq!(ErrorKind::from_error(&err), None);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_clones() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::headers(contains(("x-api-key", "test-key"))),
            ])
            .times(8)
            .respond_with(json_encoded(json!({"DBClusters": []}))),
        );

        let client = Rds::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_region("us-west-2")
            .with_credentials(gax::credentials::api_key::Builder::new("test-key").build())
            .build()
            .await?;
        let tasks = (0..8)
            .map(|_| {
                let client = client.clone();
                tokio::spawn(async move { client.describe_db_clusters().send().await })
            })
            .collect::<Vec<_>>();
        for task in tasks {
            let response = task.await??;
            assert!(response.db_clusters.is_empty());
        }
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn pagination() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::body(json_decoded(eq(json!({"MaxRecords": 20})))))
                .respond_with(json_encoded(json!({
                    "Marker": "page-2",
                    "DBSnapshots": [
                        {"DBSnapshotIdentifier": "s1"},
                        {"DBSnapshotIdentifier": "s2"},
                    ],
                }))),
        );
        server.expect(
            Expectation::matching(request::body(json_decoded(eq(json!({
                "MaxRecords": 20,
                "Marker": "page-2",
            })))))
            .respond_with(json_encoded(json!({
                "DBSnapshots": [{"DBSnapshotIdentifier": "s3"}],
            }))),
        );

        let client = test_client(&server).await?;
        let mut items = client
            .describe_db_snapshots()
            .set_max_records(20)
            .by_item();
        let mut ids = Vec::new();
        while let Some(snapshot) = items.next().await {
            ids.push(snapshot?.db_snapshot_identifier.unwrap_or_default());
        }
        assert_eq!(ids, vec!["s1", "s2", "s3"]);
        Ok(())
    }
}
