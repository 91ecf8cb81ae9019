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

//! Client library for the Relational Database Service control plane.
//!
//! This crate contains a typed client for the service. Each operation has a
//! request message in [model], a response message (or no data at all), and a
//! fixed set of [errors::ErrorKind] values it may report.
//!
//! ```no_run
//! # async fn sample() -> anyhow::Result<()> {
//! use rds_admin::client::Rds;
//! use rds_admin::errors::ErrorKind;
//!
//! let client = Rds::builder().with_region("us-west-2").build().await?;
//! match client
//!     .describe_db_instances()
//!     .set_db_instance_identifier("my-db")
//!     .send()
//!     .await
//! {
//!     Ok(response) => println!("{:?}", response.db_instances),
//!     Err(e) if ErrorKind::from_error(&e) == Some(ErrorKind::DbInstanceNotFound) => {
//!         println!("no such instance");
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(()) }
//! ```
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production. We welcome feedback
//! about the APIs, documentation, missing features, bugs, etc.

pub use gax::Result;
pub use gax::error::Error;

#[macro_use]
mod macros;

pub mod model;

pub mod errors;

#[macro_use]
pub mod operations;

pub mod stub;

/// Concrete implementations of this client library traits.
pub mod client;

/// Request builders.
pub mod builder;

pub(crate) mod tracing;

pub(crate) mod transport;

pub(crate) mod info {
    use gaxi::options::ServiceInfo;

    pub(crate) static SERVICE: ServiceInfo = ServiceInfo {
        service_name: "rds",
        endpoint_prefix: "rds",
        target_prefix: "AmazonRDSv19",
        client_version: env!("CARGO_PKG_VERSION"),
        client_artifact: env!("CARGO_PKG_NAME"),
    };
}
