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

//! The error payload returned by OCI services.
//!
//! Failed OCI requests return a JSON object with a `code` and a `message`
//! field. The `code` is a short string describing the kind of failure, for
//! example `NotAuthorizedOrNotFound`, or `TooManyRequests`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The error details returned by an OCI service.
///
/// # Example
/// ```
/// # use oci_gax::error::rpc::{Code, Status};
/// let status = Status::default()
///     .set_code(Code::NotFound)
///     .set_message("the log group does not exist");
/// assert_eq!(status.code, Code::NotFound);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Status {
    /// The service-specific error code.
    pub code: Code,

    /// A human-readable description of the error.
    pub message: String,
}

impl Status {
    /// Sets the value of [code][Status::code].
    pub fn set_code<T: Into<Code>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value of [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }
}

impl TryFrom<&bytes::Bytes> for Status {
    type Error = crate::error::Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        serde_json::from_slice::<Status>(value).map_err(crate::error::Error::deser)
    }
}

/// The error codes returned by OCI services.
///
/// Services may add new codes over time. Unrecognized codes are preserved in
/// [Code::UnknownValue].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Code {
    /// One of the request parameters is malformed.
    InvalidParameter,
    /// The request contains an invalid combination of parameters.
    InvalidParameters,
    /// The request exceeds a service limit.
    LimitExceeded,
    /// The request was not authenticated.
    NotAuthenticated,
    /// The tenancy is not subscribed to the service.
    SignUpRequired,
    /// The resource does not exist, or the caller cannot see it.
    NotAuthorizedOrNotFound,
    /// The resource exists, or the caller cannot create it.
    NotAuthorizedOrResourceAlreadyExists,
    /// The resource does not exist.
    NotFound,
    /// The HTTP method is not supported for the resource.
    MethodNotAllowed,
    /// The resource was modified concurrently.
    Conflict,
    /// The resource is in a state that does not allow the operation.
    ///
    /// The state may change over time, clients may retry these errors.
    IncorrectState,
    /// The `opc-retry-token` was already used with a different request.
    InvalidatedRetryToken,
    /// The `if-match` header does not match the resource etag.
    NoEtagMatch,
    /// A precondition in the request headers failed.
    PreconditionFailed,
    /// The caller is sending too many requests.
    TooManyRequests,
    /// The service had an internal error.
    #[default]
    InternalServerError,
    /// The service is temporarily unavailable.
    ServiceUnavailable,
    /// A code not recognized by this version of the library.
    UnknownValue(String),
}

impl Code {
    /// Gets the wire name of the code.
    pub fn name(&self) -> &str {
        match self {
            Self::InvalidParameter => "InvalidParameter",
            Self::InvalidParameters => "InvalidParameters",
            Self::LimitExceeded => "LimitExceeded",
            Self::NotAuthenticated => "NotAuthenticated",
            Self::SignUpRequired => "SignUpRequired",
            Self::NotAuthorizedOrNotFound => "NotAuthorizedOrNotFound",
            Self::NotAuthorizedOrResourceAlreadyExists => "NotAuthorizedOrResourceAlreadyExists",
            Self::NotFound => "NotFound",
            Self::MethodNotAllowed => "MethodNotAllowed",
            Self::Conflict => "Conflict",
            Self::IncorrectState => "IncorrectState",
            Self::InvalidatedRetryToken => "InvalidatedRetryToken",
            Self::NoEtagMatch => "NoEtagMatch",
            Self::PreconditionFailed => "PreconditionFailed",
            Self::TooManyRequests => "TooManyRequests",
            Self::InternalServerError => "InternalServerError",
            Self::ServiceUnavailable => "ServiceUnavailable",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for Code {
    fn from(value: &str) -> Self {
        match value {
            "InvalidParameter" => Self::InvalidParameter,
            "InvalidParameters" => Self::InvalidParameters,
            "LimitExceeded" => Self::LimitExceeded,
            "NotAuthenticated" => Self::NotAuthenticated,
            "SignUpRequired" => Self::SignUpRequired,
            "NotAuthorizedOrNotFound" => Self::NotAuthorizedOrNotFound,
            "NotAuthorizedOrResourceAlreadyExists" => Self::NotAuthorizedOrResourceAlreadyExists,
            "NotFound" => Self::NotFound,
            "MethodNotAllowed" => Self::MethodNotAllowed,
            "Conflict" => Self::Conflict,
            "IncorrectState" => Self::IncorrectState,
            "InvalidatedRetryToken" => Self::InvalidatedRetryToken,
            "NoEtagMatch" => Self::NoEtagMatch,
            "PreconditionFailed" => Self::PreconditionFailed,
            "TooManyRequests" => Self::TooManyRequests,
            "InternalServerError" => Self::InternalServerError,
            "ServiceUnavailable" => Self::ServiceUnavailable,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Code {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Code::from(value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(Code::InvalidParameter)]
    #[test_case(Code::NotAuthorizedOrNotFound)]
    #[test_case(Code::IncorrectState)]
    #[test_case(Code::TooManyRequests)]
    #[test_case(Code::ServiceUnavailable)]
    fn code_names(code: Code) {
        let got = Code::from(code.name());
        assert_eq!(got, code);
        assert_eq!(code.to_string(), code.name());
    }

    #[test]
    fn unknown_code() {
        let got = Code::from("SomethingNew");
        assert_eq!(got, Code::UnknownValue("SomethingNew".into()));
        assert_eq!(got.name(), "SomethingNew");
    }

    #[test]
    fn status_from_bytes() -> anyhow::Result<()> {
        let payload = json!({
            "code": "NotAuthorizedOrNotFound",
            "message": "Authorization failed or requested resource not found.",
        });
        let bytes = bytes::Bytes::from(serde_json::to_vec(&payload)?);
        let got = Status::try_from(&bytes)?;
        let want = Status::default()
            .set_code(Code::NotAuthorizedOrNotFound)
            .set_message("Authorization failed or requested resource not found.");
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn status_ignores_unknown_fields() -> anyhow::Result<()> {
        let payload = json!({"code": "Conflict", "message": "m", "originalMessage": "o"});
        let got = serde_json::from_value::<Status>(payload)?;
        assert_eq!(got.code, Code::Conflict);
        Ok(())
    }

    #[test]
    fn status_bad_payload() {
        let bytes = bytes::Bytes::from_static(b"<html>bad gateway</html>");
        let got = Status::try_from(&bytes);
        assert!(
            matches!(&got, Err(e) if e.is_deserialization()),
            "{got:?}"
        );
    }
}
