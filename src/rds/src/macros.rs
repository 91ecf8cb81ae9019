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

// Defines a model type.
//
// A request names the builder of its operation with `#[builder(Name)]`, placed
// after the doc comments. Each field is declared as
// `"WireName" => field: kind Type`, where `kind` is one of:
// - `opt`: an `Option<Type>`, with `set_field()` and `set_or_clear_field()`.
// - `list`: a `Vec<Type>`, with a `set_field()` accepting any iterator.
// - `req`: a plain `Type`, with `set_field()`.
// - `secret`: like `opt`, but `Debug` prints `[censored]` instead of the
//   value.
//
// Fields unknown to the model are preserved in a private map, so they
// round-trip unchanged.
macro_rules! message {
    (@type opt $ty:ty) => { std::option::Option<$ty> };
    (@type list $ty:ty) => { std::vec::Vec<$ty> };
    (@type req $ty:ty) => { $ty };
    (@type secret $ty:ty) => { std::option::Option<$ty> };

    (@debug secret $value:expr) => { &$value.as_ref().map(|_| "[censored]") };
    (@debug $kind:ident $value:expr) => { $value };

    (@setter secret $field:ident $ty:ty) => { message!(@setter opt $field $ty); };
    (@forward $name:ident secret $field:ident $ty:ty) => { message!(@forward $name opt $field $ty); };

    (@setter opt $field:ident $ty:ty) => {
        pastey::paste! {
            #[doc = concat!("Sets the value of [", stringify!($field), "][Self::", stringify!($field), "].")]
            pub fn [<set_ $field>]<T>(mut self, v: T) -> Self
            where
                T: std::convert::Into<$ty>,
            {
                self.$field = std::option::Option::Some(v.into());
                self
            }

            #[doc = concat!("Sets or clears the value of [", stringify!($field), "][Self::", stringify!($field), "].")]
            pub fn [<set_or_clear_ $field>]<T>(mut self, v: std::option::Option<T>) -> Self
            where
                T: std::convert::Into<$ty>,
            {
                self.$field = v.map(|x| x.into());
                self
            }
        }
    };
    (@setter list $field:ident $ty:ty) => {
        pastey::paste! {
            #[doc = concat!("Sets the value of [", stringify!($field), "][Self::", stringify!($field), "].")]
            pub fn [<set_ $field>]<T, V>(mut self, v: T) -> Self
            where
                T: std::iter::IntoIterator<Item = V>,
                V: std::convert::Into<$ty>,
            {
                self.$field = v.into_iter().map(|i| i.into()).collect();
                self
            }
        }
    };
    (@setter req $field:ident $ty:ty) => {
        pastey::paste! {
            #[doc = concat!("Sets the value of [", stringify!($field), "][Self::", stringify!($field), "].")]
            pub fn [<set_ $field>]<T>(mut self, v: T) -> Self
            where
                T: std::convert::Into<$ty>,
            {
                self.$field = v.into();
                self
            }
        }
    };

    (@forward $name:ident opt $field:ident $ty:ty) => {
        pastey::paste! {
            #[doc = concat!("Sets the value of [", stringify!($field), "][crate::model::", stringify!($name), "::", stringify!($field), "].")]
            pub fn [<set_ $field>]<T>(mut self, v: T) -> Self
            where
                T: std::convert::Into<$ty>,
            {
                self.0.request.$field = std::option::Option::Some(v.into());
                self
            }

            #[doc = concat!("Sets or clears the value of [", stringify!($field), "][crate::model::", stringify!($name), "::", stringify!($field), "].")]
            pub fn [<set_or_clear_ $field>]<T>(mut self, v: std::option::Option<T>) -> Self
            where
                T: std::convert::Into<$ty>,
            {
                self.0.request.$field = v.map(|x| x.into());
                self
            }
        }
    };
    (@forward $name:ident list $field:ident $ty:ty) => {
        pastey::paste! {
            #[doc = concat!("Sets the value of [", stringify!($field), "][crate::model::", stringify!($name), "::", stringify!($field), "].")]
            pub fn [<set_ $field>]<T, V>(mut self, v: T) -> Self
            where
                T: std::iter::IntoIterator<Item = V>,
                V: std::convert::Into<$ty>,
            {
                self.0.request.$field = v.into_iter().map(|i| i.into()).collect();
                self
            }
        }
    };
    (@forward $name:ident req $field:ident $ty:ty) => {
        pastey::paste! {
            #[doc = concat!("Sets the value of [", stringify!($field), "][crate::model::", stringify!($name), "::", stringify!($field), "].")]
            pub fn [<set_ $field>]<T>(mut self, v: T) -> Self
            where
                T: std::convert::Into<$ty>,
            {
                self.0.request.$field = v.into();
                self
            }
        }
    };

    // A request also gets setters on the builder of its operation.
    (
        $(#[doc = $doc:literal])*
        #[builder($builder:ident)]
        pub struct $name:ident {
            $(
                $(#[$fattr:meta])*
                $wire:literal => $field:ident: $kind:ident $ty:ty
            ),* $(,)?
        }
    ) => {
        message! {
            $(#[doc = $doc])*
            pub struct $name {
                $(
                    $(#[$fattr])*
                    $wire => $field: $kind $ty,
                )*
            }
        }

        impl crate::builder::rds::$builder {
            $(
                message!(@forward $name $kind $field $ty);
            )*
        }
    };

    (
        $(#[$attr:meta])*
        pub struct $name:ident {
            $(
                $(#[$fattr:meta])*
                $wire:literal => $field:ident: $kind:ident $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        #[non_exhaustive]
        pub struct $name {
            $(
                $(#[$fattr])*
                #[serde(
                    rename = $wire,
                    skip_serializing_if = "crate::model::is_default",
                    deserialize_with = "crate::model::null_as_default"
                )]
                pub $field: message!(@type $kind $ty),
            )*

            #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
            _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut debug = f.debug_struct(stringify!($name));
                $(
                    debug.field(stringify!($field), message!(@debug $kind &self.$field));
                )*
                debug
                    .field("_unknown_fields", &self._unknown_fields)
                    .finish()
            }
        }

        impl $name {
            pub fn new() -> Self {
                std::default::Default::default()
            }

            $(
                message!(@setter $kind $field $ty);
            )*
        }
    };
}

// Implements `PageableResponse` for the response of a paginated operation.
macro_rules! pageable {
    ($response:ident, $items:ident: $item:ty) => {
        impl gax::paginator::PageableResponse for $response {
            type PageItem = $item;

            fn items(self) -> std::vec::Vec<Self::PageItem> {
                self.$items
            }

            fn next_page_token(&self) -> std::string::String {
                self.marker.clone().unwrap_or_default()
            }
        }
    };
}
