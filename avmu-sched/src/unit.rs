/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Scheduler inputs: unit descriptors and the scheduling mode.
//!
//! ```text
//! network.yaml ──(config)──►  UnitDescriptor[] + SchedulingMode  ──(scheduler)──►  Schedule
//!                               ↑ input snapshot                                    ↑ output
//! ```
//!
//! A [`UnitDescriptor`] holds only what the scheduler needs to know about a
//! unit.  Connection details (IP address, timeouts, sweep settings) belong to
//! the acquisition layer and never reach this crate's algorithm.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::topology::{ParseError, SwitchboardType};

// ── Scheduling mode ───────────────────────────────────────────────────────────

/// Whether several units may be measured within one triggered sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SchedulingMode {
    /// One unit transmits while every enabled unit receives in the same frame.
    #[default]
    #[serde(rename = "SIMULTANEOUS")]
    Simultaneous,
    /// Each frame involves a single unit transmitting to itself.
    #[serde(rename = "SEQUENTIAL")]
    Sequential,
}

impl SchedulingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SchedulingMode::Simultaneous => "SIMULTANEOUS",
            SchedulingMode::Sequential => "SEQUENTIAL",
        }
    }
}

impl fmt::Display for SchedulingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchedulingMode {
    type Err = ParseError;

    /// Case-insensitive: `sequential`, `SEQUENTIAL` and `Sequential` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        [SchedulingMode::Simultaneous, SchedulingMode::Sequential]
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownMode(s.to_string()))
    }
}

// ── UnitDescriptor ────────────────────────────────────────────────────────────

/// One AVMU as seen by the scheduler.
///
/// `tdd_requested` is only meaningful on a [`SwitchboardType::Tdd4PortSwitch`]
/// board; the scheduler rejects it anywhere else rather than ignoring it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitDescriptor {
    /// Network-unique unit index.
    pub index: u32,

    /// Disabled units are removed before scheduling and never appear in the
    /// output, neither as transmitter nor as receiver.
    pub enabled: bool,

    pub switchboard_type: SwitchboardType,

    /// Transmit and receive on the same port by time-sharing it.
    pub tdd_requested: bool,
}

impl UnitDescriptor {
    /// An enabled, non-TDD unit.
    pub fn new(index: u32, switchboard_type: SwitchboardType) -> Self {
        Self {
            index,
            enabled: true,
            switchboard_type,
            tdd_requested: false,
        }
    }

    pub fn with_tdd(mut self, tdd_requested: bool) -> Self {
        self.tdd_requested = tdd_requested;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// `true` when monostatic receptions are possible on this unit.
    ///
    /// Requires both the request and a board that supports it.
    pub fn tdd_active(&self) -> bool {
        self.tdd_requested && self.switchboard_type.supports_tdd()
    }
}

impl Default for UnitDescriptor {
    fn default() -> Self {
        Self::new(0, SwitchboardType::default())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
