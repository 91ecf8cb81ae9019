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

//! Runtime types shared by the Relational Database Service client libraries.
//!
//! This crate contains the error types, per-request options, response
//! wrappers, the generic client builder, credentials, and pagination helpers
//! used by the `rds-admin` client.
//!
//! <div class="warning">
//! Types and functions marked as "not part of the public API" are used by the
//! client implementation. They may change without notice.
//! </div>

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping remote operations.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the clients.
pub mod error;

pub mod client_builder;
pub mod credentials;
pub mod options;
pub mod paginator;
pub mod response;
