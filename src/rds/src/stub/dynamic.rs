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

use crate::model::*;

macro_rules! dynamic_trait {
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
        /// A dyn-compatible, crate-private version of [super::Rds].
        #[async_trait::async_trait]
        pub trait Rds: std::fmt::Debug + Send + Sync {
            $(
                async fn $method(
                    &self,
                    req: $req,
                    options: gax::options::RequestOptions,
                ) -> crate::Result<gax::response::Response<$resp>>;
            )*
        }

        /// All implementations of [super::Rds] also implement [Rds].
        #[async_trait::async_trait]
        impl<T: super::Rds> Rds for T {
            $(
                async fn $method(
                    &self,
                    req: $req,
                    options: gax::options::RequestOptions,
                ) -> crate::Result<gax::response::Response<$resp>> {
                    T::$method(self, req, options).await
                }
            )*
        }
    };
}

rds_operations!(dynamic_trait);
