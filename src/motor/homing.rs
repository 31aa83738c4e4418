//! Non-blocking homing sequence.
//!
//! The sequence is polled once per control cycle instead of spinning until
//! the proximity sensor asserts:
//!
//! ```text
//! Idle --begin--> Searching --sensor--> Found --complete--> Zeroed
//!                     |
//!                     +--timeout--> Stalled
//! ```

use crate::control::Direction;

/// Homing progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HomingState {
    /// No homing requested.
    Idle,
    /// Driving toward the proximity sensor.
    Searching {
        /// Travel direction, fixed when the search began.
        direction: Direction,
        /// Cycles spent searching so far.
        cycles: u32,
    },
    /// Sensor asserted; the encoder still has to be zeroed.
    Found,
    /// Encoder zeroed at the sensor. Terminal.
    Zeroed,
    /// Sensor never asserted within the cycle bound.
    Stalled {
        /// Cycles spent searching.
        cycles: u32,
    },
}

/// What the caller must do this cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomingAction {
    /// Drive at homing speed in the given direction.
    Drive(Direction),
    /// Reset the encoder, then call [`HomingRoutine::complete`].
    Zero,
    /// Hold position 0.
    Hold,
    /// Command zero output.
    Stop,
}

/// Homing state machine.
#[derive(Debug, Clone, Copy)]
pub struct HomingRoutine {
    state: HomingState,
    timeout_cycles: Option<u32>,
}

impl HomingRoutine {
    /// Create an idle routine, optionally bounded to `timeout_cycles` of searching.
    pub fn new(timeout_cycles: Option<u32>) -> Self {
        Self {
            state: HomingState::Idle,
            timeout_cycles,
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> HomingState {
        self.state
    }

    /// Whether a sequence is running and still needs polling.
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self.state, HomingState::Searching { .. } | HomingState::Found)
    }

    /// Start searching. Direction is chosen once, from the sign of the raw count.
    pub fn begin(&mut self, raw_count: i64) {
        let direction = if raw_count < 0 {
            Direction::Reverse
        } else {
            Direction::Forward
        };
        debug!("homing: searching from raw count {}", raw_count);
        self.state = HomingState::Searching { direction, cycles: 0 };
    }

    /// Advance by one cycle.
    pub fn poll(&mut self, at_proximity: bool) -> HomingAction {
        match self.state {
            HomingState::Idle | HomingState::Stalled { .. } => HomingAction::Stop,
            HomingState::Searching { .. } if at_proximity => {
                debug!("homing: proximity found");
                self.state = HomingState::Found;
                HomingAction::Zero
            }
            HomingState::Searching { direction, cycles } => match self.timeout_cycles {
                Some(limit) if cycles >= limit => {
                    warn!("homing: stalled after {} cycles", cycles);
                    self.state = HomingState::Stalled { cycles };
                    HomingAction::Stop
                }
                _ => {
                    self.state = HomingState::Searching {
                        direction,
                        cycles: cycles.saturating_add(1),
                    };
                    HomingAction::Drive(direction)
                }
            },
            HomingState::Found => HomingAction::Zero,
            HomingState::Zeroed => HomingAction::Hold,
        }
    }

    /// Acknowledge that the encoder has been zeroed.
    pub fn complete(&mut self) {
        if self.state == HomingState::Found {
            self.state = HomingState::Zeroed;
        }
    }

    /// Abandon any sequence in progress.
    pub fn cancel(&mut self) {
        self.state = HomingState::Idle;
    }
}
