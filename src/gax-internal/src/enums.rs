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

//! Validate enumerated request parameters.
//!
//! Enumerated types in the clients accept unknown values, so applications can
//! read values added to the service after the client was generated. Requests
//! are stricter: an enumerated parameter must be one of the values known to
//! the client, otherwise the request fails with a
//! [binding error][gax::error::Error::is_binding] before it is sent.

/// Implemented by the enumerated types in the generated clients.
pub trait ServiceEnum {
    /// The values accepted by the service, as they appear on the wire.
    const KNOWN_VALUES: &'static [&'static str];

    /// The wire name of this value.
    fn name(&self) -> &str;
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid value `{value}` for parameter `{parameter}`, the allowed values are: {}", .allowed.join(", "))]
    InvalidValue {
        parameter: String,
        value: String,
        allowed: &'static [&'static str],
    },
}

/// Returns the wire name of `value`, or an error if it is not allowed.
pub fn check<'a, E: ServiceEnum>(value: &'a E, parameter: &str) -> gax::Result<&'a str> {
    let name = value.name();
    if E::KNOWN_VALUES.contains(&name) {
        return Ok(name);
    }
    Err(gax::error::Error::binding(Error::InvalidValue {
        parameter: parameter.to_string(),
        value: name.to_string(),
        allowed: E::KNOWN_VALUES,
    }))
}

/// Validates an optional enumerated parameter.
pub fn check_optional<'a, E: ServiceEnum>(
    value: &'a Option<E>,
    parameter: &str,
) -> gax::Result<Option<&'a str>> {
    value.as_ref().map(|v| check(v, parameter)).transpose()
}

/// Validates every element of a repeated enumerated parameter.
pub fn check_all<'a, E: ServiceEnum>(
    values: &'a [E],
    parameter: &str,
) -> gax::Result<Vec<&'a str>> {
    values.iter().map(|v| check(v, parameter)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug)]
    enum Color {
        Red,
        Green,
        UnknownValue(String),
    }

    impl ServiceEnum for Color {
        const KNOWN_VALUES: &'static [&'static str] = &["RED", "GREEN"];

        fn name(&self) -> &str {
            match self {
                Self::Red => "RED",
                Self::Green => "GREEN",
                Self::UnknownValue(s) => s,
            }
        }
    }

    #[test]
    fn known() {
        assert_eq!(check(&Color::Red, "color").ok(), Some("RED"));
        assert_eq!(check(&Color::Green, "color").ok(), Some("GREEN"));
    }

    #[test]
    fn unknown() {
        let e = check(&Color::UnknownValue("BLUE".into()), "color").unwrap_err();
        assert!(e.is_binding(), "{e:?}");
        let msg = e.to_string();
        assert!(msg.contains("BLUE"), "{msg}");
        assert!(msg.contains("RED, GREEN"), "{msg}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::InvalidValue { parameter, .. }) if parameter == "color"),
            "{e:?}"
        );
    }

    #[test]
    fn spelled_differently() {
        // Matching is exact, the service does not accept other spellings.
        assert!(check(&Color::UnknownValue("red".into()), "color").is_err());
    }

    #[test]
    fn optional() {
        assert_eq!(check_optional::<Color>(&None, "color").ok(), Some(None));
        assert_eq!(
            check_optional(&Some(Color::Green), "color").ok(),
            Some(Some("GREEN"))
        );
        assert!(check_optional(&Some(Color::UnknownValue("x".into())), "color").is_err());
    }

    #[test]
    fn repeated() {
        let values = vec![Color::Red, Color::Green];
        assert_eq!(check_all(&values, "colors").ok(), Some(vec!["RED", "GREEN"]));
        let values = vec![Color::Red, Color::UnknownValue("PURPLE".into())];
        let e = check_all(&values, "colors").unwrap_err();
        assert!(e.to_string().contains("PURPLE"), "{e}");
    }
}
