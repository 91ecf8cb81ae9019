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

use rds_gax::error::{Error, ServiceError};
use test_case::test_case;

#[derive(Debug, Default)]
struct LeafError {}

impl LeafError {
    fn hey(&self) -> &'static str {
        "hey"
    }
}

impl std::fmt::Display for LeafError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "leaf error")
    }
}

impl std::error::Error for LeafError {}

#[test]
fn downcast() -> anyhow::Result<()> {
    use std::error::Error as _;
    let root_err = Error::io(LeafError::default());
    let msg = root_err
        .source()
        .and_then(|e| e.downcast_ref::<LeafError>())
        .map(LeafError::hey);
    assert_eq!(msg, Some("hey"));
    Ok(())
}

#[test_case(Error::timeout("t"), false ; "timeout")]
#[test_case(Error::io("refused"), false ; "io")]
#[test_case(Error::http(502, http::HeaderMap::new(), bytes::Bytes::new()), false ; "http")]
#[test_case(Error::service(ServiceError::new("DBInstanceNotFound", "m")), true ; "service")]
fn service_tier(error: Error, want: bool) {
    assert_eq!(error.service_error().is_some(), want, "{error:?}");
}

#[test]
fn declared() {
    let svc = ServiceError::new("DBInstanceNotFound", "not found");
    assert!(!svc.is_declared());
    let error = Error::service(svc.set_declared(true));
    assert!(error.service_error().is_some_and(ServiceError::is_declared));
}
