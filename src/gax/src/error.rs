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

mod core_error;
pub use core_error::*;
mod credentials;
pub use credentials::CredentialsError;

/// Errors returned by the service.
///
/// The client libraries distinguish between errors detected while trying to
/// send a request (e.g. cannot open a connection), errors trying to receive a
/// response (e.g. the connection is dropped before the full response), and
/// errors returned by the service itself.
///
/// The types in this module represent the information returned by the
/// service: an error code, a human-readable message and the request id.
///
/// # Examples
///
/// ```
/// use rds_gax::error::Error;
/// fn handle_error(e: Error) {
///     if let Some(svc) = e.service_error() {
///         println!("the service reported {} ({})", svc.code(), svc.message())
///     }
/// }
/// ```
mod service_error;
pub use service_error::ServiceError;
