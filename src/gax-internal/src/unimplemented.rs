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

/// The default implementation for stub methods.
///
/// All the methods in a generated stub trait have a default implementation, so
/// new operations do not break existing mocks. The client implementations
/// override every method, this is only reachable from incomplete mocks.
pub async fn unimplemented_stub<T: Send>() -> gax::Result<gax::response::Response<T>> {
    unimplemented!(concat!(
        "the stub traits provide default implementations for each method, ",
        "so new operations do not break existing implementations. The client ",
        "libraries override all methods. Reaching this code means a mock ",
        "does not implement a method used by the test, add the missing ",
        "expectation to the mock."
    ));
}
