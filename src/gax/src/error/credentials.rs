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

use std::error::Error;
use std::fmt::{Debug, Display, Formatter, Result};
use std::sync::Arc;

/// Represents an error creating the authentication headers for a request.
///
/// Credential providers may fail to produce the headers, for example, if an
/// API key contains characters that are not valid in a HTTP header.
///
/// Applications rarely need to create instances of this error type. The
/// exception might be custom
/// [CredentialsProvider][crate::credentials::CredentialsProvider]
/// implementations and tests.
///
/// # Example
/// ```
/// # use rds_gax::error::CredentialsError;
/// let err = CredentialsError::from_msg("the key contains invalid characters");
/// assert!(format!("{err}").contains("invalid characters"));
/// ```
#[derive(Clone, Debug)]
pub struct CredentialsError {
    source: CredentialsErrorImpl,
}

#[derive(Clone, Debug)]
enum CredentialsErrorImpl {
    SimpleMessage(String),
    Source(Arc<dyn Error + Send + Sync>),
}

impl CredentialsError {
    /// Creates a new `CredentialsError` wrapping `source`.
    pub fn new<T: Error + Send + Sync + 'static>(source: T) -> Self {
        Self {
            source: CredentialsErrorImpl::Source(Arc::new(source)),
        }
    }

    /// Creates a new `CredentialsError` from a message.
    pub fn from_msg<T: Into<String>>(message: T) -> Self {
        Self {
            source: CredentialsErrorImpl::SimpleMessage(message.into()),
        }
    }
}

impl Error for CredentialsErrorImpl {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self {
            CredentialsErrorImpl::SimpleMessage(_) => None,
            CredentialsErrorImpl::Source(source) => Some(source),
        }
    }
}

impl Display for CredentialsErrorImpl {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self {
            CredentialsErrorImpl::SimpleMessage(message) => write!(f, "{message}"),
            CredentialsErrorImpl::Source(source) => write!(f, "{source}"),
        }
    }
}

impl Error for CredentialsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl Display for CredentialsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "cannot create the credential headers, source: {}", self.source)
    }
}
