/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error type for the path-combination scheduler.
//!
//! Every variant is a configuration or logic error, never a transient one:
//! retrying with the same unit set always fails the same way.  There is no
//! partial schedule on error.
//!
//! | Variant | Cause | Operator action |
//! |---|---|---|
//! | `DuplicateUnitIndex` | two units share an index | renumber the units |
//! | `InvalidTddConfiguration` | TDD on a non-TDD board | clear TDD or fit a TDD board |
//! | `SParamRequiresSingleUnit` | S-param board next to other units | disable the other units |
//! | `MismatchedSwitchboards` | heterogeneous boards | fit identical boards |
//! | `InvariantViolation` | frame with no receiver | report a bug |
//!
//! Each variant carries the unit indices involved so the acquisition layer can
//! point the operator at the offending entry without parsing the message.

use thiserror::Error;

use crate::topology::SwitchboardType;

/// Error returned by
/// [`compute_schedule()`](super::compute_schedule).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The same unit index appears more than once in the input.
    #[error("unit index {index} appears more than once in the network description")]
    DuplicateUnitIndex { index: u32 },

    /// TDD was requested on a board that cannot time-share a port.
    #[error("unit {unit}: TDD requires a TDD_4_PORT_SWITCH board (configured: {switchboard})")]
    InvalidTddConfiguration {
        unit: u32,
        switchboard: SwitchboardType,
    },

    /// Two enabled units carry different switch boards.
    ///
    /// `first_unit` is the lowest enabled index; `unit` is the first unit
    /// found to differ from it.
    #[error(
        "mismatched switch-board types: unit {first_unit} has {first}, unit {unit} has {switchboard}"
    )]
    MismatchedSwitchboards {
        first_unit: u32,
        first: SwitchboardType,
        unit: u32,
        switchboard: SwitchboardType,
    },

    /// An S-parameter board was enabled alongside other units.
    #[error(
        "unit {unit} has an S_PARAM_SWITCH board, which can only run by itself \
         ({enabled} units enabled)"
    )]
    SParamRequiresSingleUnit { unit: u32, enabled: usize },

    /// A generated frame contains no receiving combo.
    ///
    /// Indicates a defect in the generation logic, not in the input.
    #[error(
        "internal error: frame {frame_index} (transmitter unit {tx_unit}) has no receiving path"
    )]
    InvariantViolation { frame_index: usize, tx_unit: u32 },
}
