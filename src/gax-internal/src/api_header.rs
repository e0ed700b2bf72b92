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

//! Helpers to create the client identification headers.
//!
//! OCI services use the `user-agent` and `opc-client-info` headers to
//! identify the SDK and version making a request.

/// The name and version of a client library.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    pub name: &'static str,
    pub version: &'static str,
}

/// The SDK family reported in the client identification headers.
pub const SDK_NAME: &str = "Oracle-RustSDK";

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl ApiClient {
    /// Format the struct as needed for the `user-agent` header.
    pub fn user_agent(&self) -> String {
        let rustc_version = build_info::RUSTC_VERSION;
        let rustc_version = rustc_version
            .strip_prefix("rustc ")
            .unwrap_or(build_info::RUSTC_VERSION);
        format!(
            "{SDK_NAME}/{} ({}/{}; rust/{rustc_version}) gax/{}",
            self.version,
            self.name,
            self.version,
            build_info::PKG_VERSION
        )
    }

    /// Format the struct as needed for the `opc-client-info` header.
    pub fn opc_client_info(&self) -> String {
        format!("{SDK_NAME}/{}", self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIENT: ApiClient = ApiClient {
        name: "oci-test",
        version: "1.2.3",
    };

    #[test]
    fn user_agent() {
        let got = CLIENT.user_agent();
        assert!(got.starts_with("Oracle-RustSDK/1.2.3 "), "{got}");
        assert!(got.contains("oci-test/1.2.3"), "{got}");
        assert!(
            got.contains(&format!("gax/{}", build_info::PKG_VERSION)),
            "{got}"
        );
        let rustc = build_info::RUSTC_VERSION;
        let rustc = rustc.strip_prefix("rustc ").unwrap_or(rustc);
        assert!(got.contains(&format!("rust/{rustc}")), "{got}");
    }

    #[test]
    fn opc_client_info() {
        assert_eq!(CLIENT.opc_client_info(), "Oracle-RustSDK/1.2.3");
    }
}
