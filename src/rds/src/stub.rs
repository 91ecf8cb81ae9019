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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

use crate::model::*;

macro_rules! stub_trait {
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
        /// Defines the trait used to implement [super::client::Rds].
        ///
        /// Application developers may need to implement this trait to mock
        /// `client::Rds`. In other use-cases, application developers only
        /// use `client::Rds` and need not be concerned with this trait or
        /// its implementations.
        ///
        /// Services gain new operations routinely. Consequently, this trait
        /// gains new methods too. To avoid breaking applications the trait
        /// provides a default implementation of each method. These
        /// implementations panic, mocks must override every method used in
        /// the test.
        pub trait Rds: std::fmt::Debug + Send + Sync {
            $(
                #[doc = concat!("Implements [super::client::Rds::", stringify!($method), "].")]
                fn $method(
                    &self,
                    _req: $req,
                    _options: gax::options::RequestOptions,
                ) -> impl std::future::Future<
                    Output = crate::Result<gax::response::Response<$resp>>,
                > + Send {
                    gaxi::unimplemented::unimplemented_stub()
                }
            )*
        }
    };
}

rds_operations!(stub_trait);
