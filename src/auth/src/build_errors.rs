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

//! Errors created during credentials construction.

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for [Credentials] builders.
///
/// [Credentials]: super::credentials::Credentials
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// No credentials were found in the environment.
    pub fn is_not_found(&self) -> bool {
        matches!(self.0, ErrorKind::NotFound(_))
    }

    /// The credentials cannot be used to create authentication headers.
    pub fn is_invalid(&self) -> bool {
        matches!(self.0, ErrorKind::Invalid(_))
    }

    pub(crate) fn not_found<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::NotFound(source.into()))
    }

    pub(crate) fn invalid<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::Invalid(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not find default credentials: {0}")]
    NotFound(#[source] BoxError),
    #[error("invalid credentials: {0}")]
    Invalid(#[source] BoxError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found() {
        let e = Error::not_found("test message");
        assert!(e.is_not_found(), "{e:?}");
        assert!(!e.is_invalid(), "{e:?}");
        assert!(e.to_string().contains("test message"), "{e}");
    }

    #[test]
    fn invalid() {
        let e = Error::invalid("bad token");
        assert!(e.is_invalid(), "{e:?}");
        assert!(!e.is_not_found(), "{e:?}");
        assert!(e.to_string().contains("bad token"), "{e}");
    }
}
