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
use crate::model::*;
use gax::options::RequestOptions;
use gax::response::Response;

/// Implements a [Rds](super::stub::Rds) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct Rds<T>
where
    T: super::stub::Rds + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> Rds<T>
where
    T: super::stub::Rds + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

macro_rules! tracing_impl {
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
        impl<T> super::stub::Rds for Rds<T>
        where
            T: super::stub::Rds + std::fmt::Debug + Send + Sync,
        {
            $(
                #[tracing::instrument(ret)]
                async fn $method(
                    &self,
                    req: $req,
                    options: RequestOptions,
                ) -> Result<Response<$resp>> {
                    self.inner.$method(req, options).await
                }
            )*
        }
    };
}

rds_operations!(tracing_impl);
