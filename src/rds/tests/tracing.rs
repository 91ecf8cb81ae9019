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
mod tracing {
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use rds_admin::client::Rds;
    use scoped_env::ScopedEnv;
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    type Result<T> = anyhow::Result<T>;

    const LOGGING_VAR: &str = "RDS_RUST_LOGGING";

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn logs(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
        }
    }

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;
        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    // Runs one call on a client from `builder`, and returns the logs.
    async fn call(builder: rds_admin::builder::rds::ClientBuilder) -> Result<String> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/"))
                .respond_with(json_encoded(json!({"DBClusters": []}))),
        );

        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .finish();
        let _guard = ::tracing::subscriber::set_default(subscriber);

        let client = builder
            .with_endpoint(format!("http://{}", server.addr()))
            .with_region("us-west-2")
            .build()
            .await?;
        client
            .describe_db_clusters()
            .set_db_cluster_identifier("my-cluster")
            .send()
            .await?;
        Ok(capture.logs())
    }

    // These tests must run serially because they manipulate the environment.
    #[tokio::test]
    #[serial_test::serial]
    async fn disabled() -> Result<()> {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let logs = call(Rds::builder()).await?;
        assert!(!logs.contains("describe_db_clusters"), "{logs}");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn with_tracing() -> Result<()> {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let logs = call(Rds::builder().with_tracing()).await?;
        assert!(logs.contains("describe_db_clusters"), "{logs}");
        assert!(logs.contains("my-cluster"), "{logs}");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn passwords_are_censored() -> Result<()> {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let server = Server::run();
        server.expect(
            Expectation::matching(request::body(json_decoded(eq(json!({
                "DBInstanceIdentifier": "my-db",
                "DBInstanceClass": "db.t3.micro",
                "Engine": "postgres",
                "MasterUserPassword": "hunter2-secret",
            })))))
            .respond_with(json_encoded(json!({
                "DBInstance": {"DBInstanceIdentifier": "my-db"},
            }))),
        );

        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .finish();
        let _guard = ::tracing::subscriber::set_default(subscriber);

        let client = Rds::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_region("us-west-2")
            .with_tracing()
            .build()
            .await?;
        client
            .create_db_instance()
            .set_db_instance_identifier("my-db")
            .set_db_instance_class("db.t3.micro")
            .set_engine("postgres")
            .set_master_user_password("hunter2-secret")
            .send()
            .await?;
        let logs = capture.logs();
        assert!(logs.contains("create_db_instance"), "{logs}");
        assert!(logs.contains("[censored]"), "{logs}");
        assert!(!logs.contains("hunter2-secret"), "{logs}");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn from_environment() -> Result<()> {
        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        let logs = call(Rds::builder()).await?;
        assert!(logs.contains("describe_db_clusters"), "{logs}");
        Ok(())
    }
}
