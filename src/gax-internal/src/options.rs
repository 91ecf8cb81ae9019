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

pub use gax::credentials::Credentials;

pub type ClientConfig = gax::client_builder::internal::ClientConfig<Credentials>;

pub(crate) const LOGGING_VAR: &str = "RDS_RUST_LOGGING";

/// Static information about a service, provided by each client library.
#[derive(Copy, Clone, Debug)]
pub struct ServiceInfo {
    /// The short service name, e.g., "rds".
    pub service_name: &'static str,
    /// The first label of the default hostname, combined with the region.
    pub endpoint_prefix: &'static str,
    /// The prefix of the `x-amz-target` header, e.g., "AmazonRDSv19".
    pub target_prefix: &'static str,
    /// The version of the client library.
    pub client_version: &'static str,
    /// The name of the client library artifact (e.g., crate name).
    pub client_artifact: &'static str,
}

impl ServiceInfo {
    /// The default `user-agent` header value.
    pub fn user_agent(&self) -> String {
        format!("{}/{}", self.client_artifact, self.client_version)
    }
}

pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;

    // This test must run serially because it manipulates the environment.
    #[test]
    #[serial_test::serial]
    fn config_tracing() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
        let mut config = ClientConfig::default();
        config.tracing = true;
        let config = config;
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        let config = ClientConfig::default();
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "not-true");
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
    }

    #[test]
    fn user_agent() {
        let info = ServiceInfo {
            service_name: "rds",
            endpoint_prefix: "rds",
            target_prefix: "AmazonRDSv19",
            client_version: "1.2.3",
            client_artifact: "rds-admin",
        };
        assert_eq!(info.user_agent(), "rds-admin/1.2.3");
    }
}
