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

//! Generate `opc-retry-token` values.
//!
//! The service uses the token to recognize retries of a mutating request, and
//! avoids applying the same change twice. Each logical request needs a new
//! token, all the attempts for that request reuse it.

/// The name of the header carrying the retry token.
pub const OPC_RETRY_TOKEN: &str = "opc-retry-token";

/// Returns a new random retry token.
pub fn generate_opc_retry_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format() {
        let token = generate_opc_retry_token();
        assert_eq!(token.len(), 32, "{token}");
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()), "{token}");
    }

    #[test]
    fn unique() {
        let tokens = (0..64)
            .map(|_| generate_opc_retry_token())
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(tokens.len(), 64);
    }
}
