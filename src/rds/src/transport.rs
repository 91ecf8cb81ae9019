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

use crate::Result;
use crate::errors::ErrorKind;
use crate::model::*;
use crate::operations::{Operation, RdsRequest};
use gax::error::Error;
use gax::options::RequestOptions;
use gax::response::Response;

/// Implements [Rds](super::stub::Rds) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct Rds {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for Rds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Rds")
            .field("inner", &self.inner)
            .finish()
    }
}

impl Rds {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, &crate::info::SERVICE).await?;
        Ok(Self { inner })
    }

    /// Sends `req` to its operation, and tags the declared error conditions.
    async fn dispatch<R: RdsRequest>(
        &self,
        req: R,
        options: RequestOptions,
    ) -> Result<Response<R::Response>> {
        self.inner
            .execute(R::OPERATION.name(), &req, options)
            .await
            .map_err(|e| classify(R::OPERATION, e))
    }
}

// Marks service errors with a code declared by `operation`.
fn classify(operation: Operation, error: Error) -> Error {
    let tagged = error
        .service_error()
        .filter(|svc| ErrorKind::from_code(svc.code()).is_some_and(|k| operation.declares(k)))
        .map(|svc| Error::service(svc.clone().set_declared(true)));
    tagged.unwrap_or(error)
}

macro_rules! transport_impl {
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
        impl super::stub::Rds for Rds {
            $(
                async fn $method(
                    &self,
                    req: $req,
                    options: RequestOptions,
                ) -> Result<Response<$resp>> {
                    self.dispatch(req, options).await
                }
            )*
        }
    };
}

rds_operations!(transport_impl);

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::ServiceError;
    use httptest::{Expectation, Server, matchers::*, responders::*};

    async fn test_transport(server: &Server) -> anyhow::Result<Rds> {
        let mut config = gaxi::options::ClientConfig::default();
        config.endpoint = Some(format!("http://{}", server.addr()));
        config.region = Some("us-west-2".to_string());
        Ok(Rds::new(config).await?)
    }

    // The reply used for each operation, and the value its decoded response
    // must serialize to. Operations without a result ignore the payload.
    fn reply<R: 'static>() -> (serde_json::Value, serde_json::Value) {
        if std::any::TypeId::of::<R>() == std::any::TypeId::of::<()>() {
            return (serde_json::json!({}), serde_json::Value::Null);
        }
        let payload = serde_json::json!({
            "Marker": "page-2",
            "ExtraField": {"Nested": [1, 2]},
        });
        (payload.clone(), payload)
    }

    // Calls every operation with an empty request. The service replies with
    // an empty object first, and then with a payload that must round-trip.
    macro_rules! every_operation {
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
            #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
            async fn every_operation() -> anyhow::Result<()> {
                use crate::stub::Rds as _;
                let mut server = Server::run();
                let transport = test_transport(&server).await?;
                $(
                    server.expect(
                        Expectation::matching(request::headers(contains((
                            "x-amz-target",
                            concat!("AmazonRDSv19.", $wire),
                        ))))
                        .respond_with(status_code(200).body("{}")),
                    );
                    let response = transport
                        .$method($req::new(), RequestOptions::default())
                        .await?;
                    assert_eq!(response.into_body(), <$resp>::default(), $wire);
                    server.verify_and_clear();

                    let (payload, want) = reply::<$resp>();
                    server.expect(
                        Expectation::matching(request::headers(contains((
                            "x-amz-target",
                            concat!("AmazonRDSv19.", $wire),
                        ))))
                        .respond_with(json_encoded(payload)),
                    );
                    let response = transport
                        .$method($req::new(), RequestOptions::default())
                        .await?;
                    let got = serde_json::to_value(response.into_body())?;
                    assert_eq!(got, want, $wire);
                    server.verify_and_clear();
                )*
                Ok(())
            }
        };
    }

    rds_operations!(every_operation);

    #[test]
    fn classify_declared() {
        let op = DeleteDbInstanceRequest::OPERATION;
        let svc = ServiceError::new("DBInstanceNotFound", "not found")
            .set_request_id("req-123")
            .set_http_status_code(404_u16);
        let got = classify(op, Error::service(svc));
        let svc = got.service_error().unwrap();
        assert!(svc.is_declared(), "{svc:?}");
        assert_eq!(svc.request_id(), Some("req-123"));
        assert_eq!(svc.http_status_code(), Some(404));
        assert_eq!(
            ErrorKind::from_error(&got),
            Some(ErrorKind::DbInstanceNotFound)
        );
    }

    #[test]
    fn classify_known_but_not_declared() {
        let op = DeleteDbInstanceRequest::OPERATION;
        let got = classify(
            op,
            Error::service(ServiceError::new("DBClusterNotFoundFault", "not found")),
        );
        let svc = got.service_error().unwrap();
        assert!(!svc.is_declared(), "{svc:?}");
        assert_eq!(ErrorKind::from_error(&got), None);
    }

    #[test]
    fn classify_unknown_code() {
        let op = DescribeDbInstancesRequest::OPERATION;
        let got = classify(op, Error::service(ServiceError::new("Throttling", "slow down")));
        let svc = got.service_error().unwrap();
        assert_eq!(svc.code(), "Throttling");
        assert!(!svc.is_declared(), "{svc:?}");
    }

    #[test]
    fn classify_every_declared_kind() {
        for op in crate::operations::OPERATIONS {
            for kind in op.errors() {
                let got = classify(*op, Error::service(ServiceError::new(kind.code(), "test")));
                assert_eq!(ErrorKind::from_error(&got), Some(*kind), "{op:?}");
            }
        }
    }

    #[test]
    fn classify_transport() {
        let op = DescribeDbInstancesRequest::OPERATION;
        let got = classify(op, Error::io("connection refused"));
        assert!(got.is_io(), "{got:?}");
        assert!(got.service_error().is_none(), "{got:?}");
    }
}
