/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Scheduler output: path combos, frames and the schedule itself.
//!
//! ```text
//! Schedule
//! └── Frame            – one trigger / sweep
//!     └── PathCombo    – (tx unit, rx unit, tx port, rx port)
//! ```
//!
//! All three types are immutable once built.  Combos and frames can only be
//! created inside the crate, so every `Schedule` a caller holds came out of
//! [`compute_schedule`](crate::scheduler::compute_schedule) and passed its
//! self-check.
//!
//! The acquisition layer does not program "frames"; it programs each unit
//! with its own list of paths.  [`Schedule::unit_program`] produces that
//! per-unit view, including which unit and port radiates for each entry so
//! captured data can be associated with the path that produced it.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::topology::{RxPort, TxPort};
use crate::unit::SchedulingMode;

// ── PathCombo ─────────────────────────────────────────────────────────────────

/// One measurable antenna path.
///
/// `tx_unit` is always the unit radiating in the frame, even when this combo
/// belongs to a passive receiver and `tx_port` is therefore `TX_NONE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PathCombo {
    tx_unit: u32,
    rx_unit: u32,
    tx_port: TxPort,
    rx_port: RxPort,
}

impl PathCombo {
    pub(crate) fn new(tx_unit: u32, rx_unit: u32, tx_port: TxPort, rx_port: RxPort) -> Self {
        Self {
            tx_unit,
            rx_unit,
            tx_port,
            rx_port,
        }
    }

    pub fn tx_unit(&self) -> u32 {
        self.tx_unit
    }

    pub fn rx_unit(&self) -> u32 {
        self.rx_unit
    }

    pub fn tx_port(&self) -> TxPort {
        self.tx_port
    }

    pub fn rx_port(&self) -> RxPort {
        self.rx_port
    }

    /// `true` if the receiving unit captures useful data for this combo.
    pub fn is_receiving(&self) -> bool {
        !self.rx_port.is_none()
    }

    /// `true` if the receiving unit is also the one radiating.
    pub fn is_transmitting(&self) -> bool {
        !self.tx_port.is_none()
    }
}

impl fmt::Display for PathCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unit {} {} -> unit {} {}",
            self.tx_unit, self.tx_port, self.rx_unit, self.rx_port
        )
    }
}

// ── Frame ─────────────────────────────────────────────────────────────────────

/// Combos measured together under one trigger.  Never empty.
///
/// Combo order is receiver order (ascending unit index) and is kept as-is for
/// result association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Frame {
    combos: Vec<PathCombo>,
}

impl Frame {
    /// Returns `None` for an empty combo list.
    pub(crate) fn from_combos(combos: Vec<PathCombo>) -> Option<Self> {
        if combos.is_empty() {
            None
        } else {
            Some(Self { combos })
        }
    }

    pub fn combos(&self) -> &[PathCombo] {
        &self.combos
    }

    /// `true` if at least one combo receives something.
    pub fn has_receiver(&self) -> bool {
        self.combos.iter().any(PathCombo::is_receiving)
    }

    /// Unit and port radiating in this frame.
    ///
    /// Every scheduled frame has exactly one transmitting combo; `None` is
    /// only possible for frames that would fail the scheduler's self-check.
    pub fn transmitter(&self) -> Option<(u32, TxPort)> {
        self.combos
            .iter()
            .find(|c| c.is_transmitting())
            .map(|c| (c.tx_unit, c.tx_port))
    }

    /// The combo unit `rx_unit` is programmed with in this frame, if it takes
    /// part at all.
    pub fn combo_for_receiver(&self, rx_unit: u32) -> Option<&PathCombo> {
        self.combos.iter().find(|c| c.rx_unit == rx_unit)
    }
}

// ── MeasuredPath ──────────────────────────────────────────────────────────────

/// One entry of a unit's measurement program.
///
/// `tx_port` / `rx_port` are what the unit itself is switched to;
/// `transmitter_unit` / `transmitter_port` identify who is radiating, which
/// may be a different unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeasuredPath {
    /// Position of the originating frame in the schedule.
    pub frame: usize,
    pub tx_port: TxPort,
    pub rx_port: RxPort,
    pub transmitter_unit: u32,
    pub transmitter_port: TxPort,
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// Ordered frames for one network configuration and scheduling mode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Schedule {
    mode: SchedulingMode,
    frames: Vec<Frame>,
}

impl Schedule {
    pub(crate) fn new(mode: SchedulingMode, frames: Vec<Frame>) -> Self {
        Self { mode, frames }
    }

    pub(crate) fn empty(mode: SchedulingMode) -> Self {
        Self::new(mode, Vec::new())
    }

    pub fn mode(&self) -> SchedulingMode {
        self.mode
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Total number of combos across all frames.
    pub fn combo_count(&self) -> usize {
        self.frames.iter().map(|f| f.combos.len()).sum()
    }

    /// Iterate every combo in schedule order.
    pub fn combos(&self) -> impl Iterator<Item = &PathCombo> {
        self.frames.iter().flat_map(|f| f.combos.iter())
    }

    /// Unit indices that appear as a receiver anywhere, ascending.
    pub fn units(&self) -> Vec<u32> {
        self.combos()
            .map(|c| c.rx_unit)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Measurement program for `unit`: the paths it has to be switched to, in
    /// schedule order, one entry per frame it takes part in.
    ///
    /// Returns an empty list for a unit that never appears.
    pub fn unit_program(&self, unit: u32) -> Vec<MeasuredPath> {
        self.frames
            .iter()
            .enumerate()
            .filter_map(|(frame, f)| {
                let combo = f.combo_for_receiver(unit)?;
                let transmitter_port = f.transmitter().map_or(TxPort::None, |(_, port)| port);
                Some(MeasuredPath {
                    frame,
                    tx_port: combo.tx_port,
                    rx_port: combo.rx_port,
                    transmitter_unit: combo.tx_unit,
                    transmitter_port,
                })
            })
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
