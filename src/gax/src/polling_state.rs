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

//! The state of a polling loop.
//!
//! Long-running operations, represented as work requests in OCI, are polled
//! until they complete. The polling policies use this state to decide when to
//! poll again and when to give up.

use std::time::Instant;

/// The state of a polling loop.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct PollingState {
    /// When the polling loop started.
    pub loop_start: Instant,

    /// The number of polling attempts, including the current one.
    pub attempt_count: u32,
}

impl PollingState {
    /// Creates a new state, with the loop starting at `loop_start`.
    pub fn new(loop_start: Instant) -> Self {
        Self {
            loop_start,
            attempt_count: 0,
        }
    }

    /// Sets the [attempt_count][PollingState::attempt_count].
    pub fn with_attempt_count(mut self, v: u32) -> Self {
        self.attempt_count = v;
        self
    }

    /// Records a new polling attempt.
    pub fn attempt(&mut self) {
        self.attempt_count = self.attempt_count.saturating_add(1);
    }
}

impl Default for PollingState {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempts() {
        let start = Instant::now();
        let mut state = PollingState::new(start);
        assert_eq!(state.attempt_count, 0);
        state.attempt();
        state.attempt();
        assert_eq!(state, PollingState::new(start).with_attempt_count(2));

        let mut state = PollingState::new(start).with_attempt_count(u32::MAX);
        state.attempt();
        assert_eq!(state.attempt_count, u32::MAX);
    }
}
