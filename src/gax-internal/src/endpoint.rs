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

use crate::options::ServiceInfo;
use gax::client_builder::Error as BuilderError;
use url::Url;

pub(crate) const REGION_VARS: [&str; 2] = ["AWS_REGION", "AWS_DEFAULT_REGION"];
pub(crate) const DEFAULT_REGION: &str = "us-east-1";

/// The environment variable overriding the endpoint for a service.
pub(crate) fn endpoint_var(info: &ServiceInfo) -> String {
    format!(
        "AWS_ENDPOINT_URL_{}",
        info.endpoint_prefix.to_ascii_uppercase().replace('-', "_")
    )
}

/// Returns the configured region, or the region from the environment.
pub(crate) fn resolve_region(region: Option<&str>) -> gax::client_builder::Result<String> {
    let region = match region {
        Some(r) => r.to_string(),
        None => REGION_VARS
            .iter()
            .find_map(|v| std::env::var(v).ok().filter(|r| !r.is_empty()))
            .unwrap_or_else(|| DEFAULT_REGION.to_string()),
    };
    validate_region(&region)?;
    Ok(region)
}

fn validate_region(region: &str) -> gax::client_builder::Result<()> {
    if region.is_empty() {
        return Err(BuilderError::invalid_region("the region cannot be empty"));
    }
    if let Some(c) = region
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(BuilderError::invalid_region(format!(
            "unexpected character {c:?} in region {region:?}"
        )));
    }
    Ok(())
}

/// Returns the URL for all requests.
///
/// An explicit endpoint wins over the environment, which wins over the
/// default `https://{prefix}.{region}.amazonaws.com` endpoint.
pub(crate) fn resolve_endpoint(
    endpoint: Option<&str>,
    region: &str,
    info: &ServiceInfo,
) -> gax::client_builder::Result<Url> {
    let endpoint = match endpoint {
        Some(e) => e.to_string(),
        None => std::env::var(endpoint_var(info))
            .ok()
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| format!("https://{}.{region}.amazonaws.com", info.endpoint_prefix)),
    };
    parse_endpoint(&endpoint)
}

fn parse_endpoint(endpoint: &str) -> gax::client_builder::Result<Url> {
    let full = if endpoint.contains("://") {
        endpoint.to_string()
    } else {
        // Emulators are often configured as `host:port`.
        format!("https://{endpoint}")
    };
    let url = Url::parse(&full).map_err(BuilderError::invalid_endpoint)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(BuilderError::invalid_endpoint(format!(
            "unsupported scheme in endpoint {endpoint:?}"
        )));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(BuilderError::invalid_endpoint(format!(
            "missing host in endpoint {endpoint:?}"
        )));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use test_case::test_case;

    const INFO: ServiceInfo = ServiceInfo {
        service_name: "rds",
        endpoint_prefix: "rds",
        target_prefix: "AmazonRDSv19",
        client_version: "1.2.3",
        client_artifact: "rds-admin",
    };

    #[test_case("https://rds.us-east-1.amazonaws.com", "https://rds.us-east-1.amazonaws.com/"; "default form")]
    #[test_case("http://localhost:4566", "http://localhost:4566/"; "emulator")]
    #[test_case("localhost:5678", "https://localhost:5678/"; "missing scheme")]
    #[test_case("https://vpce-123.rds.us-west-2.vpce.amazonaws.com/", "https://vpce-123.rds.us-west-2.vpce.amazonaws.com/"; "vpc endpoint")]
    #[test_case("http://127.0.0.1:8080/proxy", "http://127.0.0.1:8080/proxy"; "with path")]
    fn parse(input: &str, want: &str) -> anyhow::Result<()> {
        let got = parse_endpoint(input)?;
        assert_eq!(got.as_str(), want);
        Ok(())
    }

    #[test_case("not a url"; "spaces")]
    #[test_case("ftp://example.com"; "bad scheme")]
    #[test_case("https://"; "missing host")]
    #[test_case("https://:8080"; "only port")]
    fn parse_error(input: &str) {
        let err = parse_endpoint(input).unwrap_err();
        assert!(err.is_invalid_endpoint(), "{err:?}");
    }

    #[test_case("us-east-1")]
    #[test_case("eu-central-2")]
    #[test_case("us-gov-west-1")]
    fn region_valid(region: &str) -> anyhow::Result<()> {
        let got = resolve_region(Some(region))?;
        assert_eq!(got, region);
        Ok(())
    }

    #[test_case(""; "empty")]
    #[test_case("US-EAST-1"; "uppercase")]
    #[test_case("us east 1"; "spaces")]
    #[test_case("us-east-1/evil"; "slash")]
    fn region_invalid(region: &str) {
        let err = resolve_region(Some(region)).unwrap_err();
        assert!(err.is_invalid_region(), "{err:?}");
    }

    // These tests must run serially because they manipulate the environment.
    #[test]
    #[serial_test::serial]
    fn region_from_env() -> anyhow::Result<()> {
        let _r = ScopedEnv::set("AWS_REGION", "ap-south-1");
        let _d = ScopedEnv::set("AWS_DEFAULT_REGION", "eu-west-1");
        assert_eq!(resolve_region(None)?, "ap-south-1");
        assert_eq!(resolve_region(Some("sa-east-1"))?, "sa-east-1");
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn region_from_default_env() -> anyhow::Result<()> {
        let _r = ScopedEnv::remove("AWS_REGION");
        let _d = ScopedEnv::set("AWS_DEFAULT_REGION", "eu-west-1");
        assert_eq!(resolve_region(None)?, "eu-west-1");
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn region_default() -> anyhow::Result<()> {
        let _r = ScopedEnv::remove("AWS_REGION");
        let _d = ScopedEnv::remove("AWS_DEFAULT_REGION");
        assert_eq!(resolve_region(None)?, DEFAULT_REGION);
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn endpoint_default() -> anyhow::Result<()> {
        let _e = ScopedEnv::remove(endpoint_var(&INFO));
        let got = resolve_endpoint(None, "eu-west-3", &INFO)?;
        assert_eq!(got.as_str(), "https://rds.eu-west-3.amazonaws.com/");
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn endpoint_from_env() -> anyhow::Result<()> {
        assert_eq!(endpoint_var(&INFO), "AWS_ENDPOINT_URL_RDS");
        let _e = ScopedEnv::set(endpoint_var(&INFO), "http://localhost:4566".to_string());
        let got = resolve_endpoint(None, "eu-west-3", &INFO)?;
        assert_eq!(got.as_str(), "http://localhost:4566/");

        let got = resolve_endpoint(Some("http://override:1234"), "eu-west-3", &INFO)?;
        assert_eq!(got.as_str(), "http://override:1234/");
        Ok(())
    }
}
