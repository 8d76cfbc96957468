/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! AVMU path-combination scheduler
//!
//! Computes, before any hardware is touched, which TX/RX antenna paths a
//! network of AVMUs has to measure and how they group into triggered frames.
//!
//! ```text
//! lib.rs
//! ├── topology/       – switch-board types, port catalog, typed ports
//! ├── unit            – UnitDescriptor, SchedulingMode (scheduler input)
//! ├── schedule        – PathCombo, Frame, Schedule (scheduler output)
//! ├── scheduler/      – compute_schedule, errors, self-check
//! └── config/         – YAML network description
//! ```

pub mod config;
pub mod schedule;
pub mod scheduler;
pub mod topology;
pub mod unit;

pub use schedule::{Frame, MeasuredPath, PathCombo, Schedule};
pub use scheduler::{compute_schedule, compute_uniform_schedule, ScheduleError};
pub use topology::{RxPort, SwitchboardType, TxPort};
pub use unit::{SchedulingMode, UnitDescriptor};
