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

//! The messages and resources used by the service.
//!
//! Each operation has a `*Request` message and, unless the operation returns
//! no data, a `*Response` message. Messages are created with `new()` and
//! populated with the `set_*` functions:
//!
//! ```
//! # use rds_admin::model::{DescribeDbInstancesRequest, Filter};
//! let request = DescribeDbInstancesRequest::new()
//!     .set_filters([Filter::new().set_name("engine").set_values(["postgres"])])
//!     .set_max_records(20);
//! assert_eq!(request.max_records, Some(20));
//! ```
//!
//! The field names on the wire are those used by the service, for example,
//! `db_instance_identifier` is sent as `DBInstanceIdentifier`.

/// The timestamps used in requests and responses.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

mod account;
mod clusters;
mod common;
mod events;
mod global_clusters;
mod instances;
mod options;
mod parameters;
mod proxies;
mod reserved;
mod security;
mod snapshots;

pub use account::*;
pub use clusters::*;
pub use common::*;
pub use events::*;
pub use global_clusters::*;
pub use instances::*;
pub use options::*;
pub use parameters::*;
pub use proxies::*;
pub use reserved::*;
pub use security::*;
pub use snapshots::*;

// Omits fields with default values from the serialized messages.
pub(crate) fn is_default<T: Default + PartialEq>(v: &T) -> bool {
    *v == T::default()
}

// The service may send `null` for fields without a value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let value = <Option<T> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
