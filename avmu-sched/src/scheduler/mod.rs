//! Path-combination scheduler.
//!
//! [`compute_schedule`] turns a snapshot of [`UnitDescriptor`]s and a
//! [`SchedulingMode`] into the [`Schedule`] of frames the acquisition loop
//! triggers, one frame per `(transmitter, tx port, rx port)` triple that
//! yields usable data.
//!
//! # Pipeline
//!
//! ```text
//! units ──► drop disabled ──► sort by index ──► validate ──► generate frames ──► self-check
//! ```
//!
//! # Design decisions
//!
//! | Topic | Choice |
//! |---|---|
//! | State | Stateless free function; all per-run state is local |
//! | Ordering | Units sorted by index, catalog order for ports; input order never reaches the output |
//! | Board rules | Exhaustive `match` on [`SwitchboardType`] via [`PortPairing`] |
//! | Same-port test | Numeric comparison of typed ports |
//! | Validation | Up front, fail fast, before any frame is built |
//! | Self-check | Every frame must receive something, else `InvariantViolation` |
//!
//! # Example
//! ```rust
//! use avmu_sched::scheduler::compute_schedule;
//! use avmu_sched::topology::SwitchboardType;
//! use avmu_sched::unit::{SchedulingMode, UnitDescriptor};
//!
//! let units = [
//!     UnitDescriptor::new(0, SwitchboardType::Simple4PortSwitch),
//!     UnitDescriptor::new(1, SwitchboardType::Simple4PortSwitch),
//! ];
//! let schedule = compute_schedule(&units, SchedulingMode::Simultaneous).unwrap();
//! assert_eq!(schedule.len(), 32);
//! ```

pub mod error;
pub mod invariant;

pub use error::ScheduleError;

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::schedule::{Frame, PathCombo, Schedule};
use crate::topology::{PortPairing, RxPort, SwitchboardType, TxPort};
use crate::unit::{SchedulingMode, UnitDescriptor};

use invariant::first_silent_frame;

// ── Public entry point ────────────────────────────────────────────────────────

/// Compute the frame schedule for `units` under `mode`.
///
/// Disabled units are ignored entirely.  With no enabled unit the result is
/// an empty schedule, not an error.
///
/// # Errors
/// * [`ScheduleError::DuplicateUnitIndex`] – two input units share an index.
/// * [`ScheduleError::InvalidTddConfiguration`] – TDD on a non-TDD board.
/// * [`ScheduleError::SParamRequiresSingleUnit`] – S-param board with other
///   enabled units.
/// * [`ScheduleError::MismatchedSwitchboards`] – enabled boards differ.
/// * [`ScheduleError::InvariantViolation`] – internal self-check failed.
pub fn compute_schedule(
    units: &[UnitDescriptor],
    mode: SchedulingMode,
) -> Result<Schedule, ScheduleError> {
    check_unique_indices(units)?;

    let mut enabled: Vec<&UnitDescriptor> = units.iter().filter(|u| u.enabled).collect();
    enabled.sort_by_key(|u| u.index);

    info!(
        mode = %mode,
        unit_count = units.len(),
        enabled_count = enabled.len(),
        "=== compute_schedule() ==="
    );

    if enabled.is_empty() {
        info!("No enabled units, schedule is empty");
        return Ok(Schedule::empty(mode));
    }

    validate(&enabled)?;

    let single_unit = enabled.len() == 1;
    let mut frames: Vec<Frame> = Vec::new();

    for tx_unit in &enabled {
        for (tx_port, rx_port) in tx_unit.switchboard_type.port_pairs() {
            let combos: Vec<PathCombo> = enabled
                .iter()
                .filter_map(|rx_unit| build_combo(tx_unit, rx_unit, tx_port, rx_port, mode))
                .collect();

            match Frame::from_combos(combos) {
                None => {
                    debug!(
                        tx_unit = tx_unit.index,
                        tx_port = %tx_port,
                        rx_port = %rx_port,
                        "frame dropped: no combos"
                    );
                }
                Some(frame) if single_unit && is_lone_silent_combo(&frame) => {
                    debug!(
                        tx_unit = tx_unit.index,
                        tx_port = %tx_port,
                        rx_port = %rx_port,
                        "frame dropped: single unit with nothing to receive"
                    );
                }
                Some(frame) => {
                    debug!(
                        index = frames.len(),
                        tx_unit = tx_unit.index,
                        tx_port = %tx_port,
                        rx_port = %rx_port,
                        combos = frame.combos().len(),
                        "frame scheduled"
                    );
                    frames.push(frame);
                }
            }
        }
    }

    if let Some(frame_index) = first_silent_frame(&frames) {
        let tx_unit = frames[frame_index]
            .combos()
            .first()
            .map_or(0, PathCombo::tx_unit);
        return Err(ScheduleError::InvariantViolation {
            frame_index,
            tx_unit,
        });
    }

    let schedule = Schedule::new(mode, frames);

    info!(
        frame_count = schedule.len(),
        combo_count = schedule.combo_count(),
        "=== Scheduling complete ==="
    );

    Ok(schedule)
}

// ── Validation ────────────────────────────────────────────────────────────────

/// Reject repeated indices across the whole input, disabled units included:
/// an index identifies one physical unit regardless of its enable flag.
fn check_unique_indices(units: &[UnitDescriptor]) -> Result<(), ScheduleError> {
    let mut seen = BTreeSet::new();
    for unit in units {
        if !seen.insert(unit.index) {
            return Err(ScheduleError::DuplicateUnitIndex { index: unit.index });
        }
    }
    Ok(())
}

/// Input checks over the enabled, index-sorted units.
///
/// Order: TDD, S-param exclusivity, then board homogeneity.  S-param comes
/// before homogeneity so an S-param board among other boards reports the
/// S-param rule rather than a generic mismatch.
fn validate(enabled: &[&UnitDescriptor]) -> Result<(), ScheduleError> {
    for unit in enabled {
        if unit.tdd_requested && !unit.switchboard_type.supports_tdd() {
            return Err(ScheduleError::InvalidTddConfiguration {
                unit: unit.index,
                switchboard: unit.switchboard_type,
            });
        }
    }

    if enabled.len() > 1 {
        if let Some(unit) = enabled
            .iter()
            .find(|u| u.switchboard_type.single_unit_only())
        {
            return Err(ScheduleError::SParamRequiresSingleUnit {
                unit: unit.index,
                enabled: enabled.len(),
            });
        }
    }

    let first = enabled[0];
    if let Some(other) = enabled[1..]
        .iter()
        .find(|u| u.switchboard_type != first.switchboard_type)
    {
        return Err(ScheduleError::MismatchedSwitchboards {
            first_unit: first.index,
            first: first.switchboard_type,
            unit: other.index,
            switchboard: other.switchboard_type,
        });
    }

    Ok(())
}

// ── Combo generation ──────────────────────────────────────────────────────────

/// The combo `rx_unit` contributes to the frame in which `tx_unit` radiates on
/// `tx_port` and receivers listen on `rx_port`, or `None` if it contributes
/// nothing.
///
/// Boards are homogeneous after validation, so the transmitter's board decides
/// the pairing rule for every receiver.
fn build_combo(
    tx_unit: &UnitDescriptor,
    rx_unit: &UnitDescriptor,
    tx_port: TxPort,
    rx_port: RxPort,
    mode: SchedulingMode,
) -> Option<PathCombo> {
    let same_unit = tx_unit.index == rx_unit.index;

    match mode {
        SchedulingMode::Sequential if !same_unit => return None,
        SchedulingMode::Sequential | SchedulingMode::Simultaneous => {}
    }

    match tx_unit.switchboard_type.pairing() {
        PortPairing::StraightThrough => tx_port
            .same_port_as(rx_port)
            .then(|| PathCombo::new(tx_unit.index, rx_unit.index, tx_port, rx_port)),

        PortPairing::Masked => {
            // A port cannot listen while it radiates unless TDD time-shares it.
            let rx_port = if same_unit && tx_port.same_port_as(rx_port) && !rx_unit.tdd_active() {
                RxPort::None
            } else {
                rx_port
            };
            // Only the designated transmitter radiates.
            let tx_port = if same_unit { tx_port } else { TxPort::None };

            let combo = PathCombo::new(tx_unit.index, rx_unit.index, tx_port, rx_port);
            match mode {
                SchedulingMode::Simultaneous => Some(combo),
                SchedulingMode::Sequential => combo.is_receiving().then_some(combo),
            }
        }
    }
}

/// `true` for a frame made of exactly one combo that receives nothing.
fn is_lone_silent_combo(frame: &Frame) -> bool {
    matches!(frame.combos(), [only] if !only.is_receiving())
}

/// Convenience for callers holding a board type rather than descriptors:
/// schedules `count` enabled, non-TDD units indexed `0..count`.
pub fn compute_uniform_schedule(
    switchboard_type: SwitchboardType,
    count: u32,
    mode: SchedulingMode,
) -> Result<Schedule, ScheduleError> {
    let units: Vec<UnitDescriptor> = (0..count)
        .map(|index| UnitDescriptor::new(index, switchboard_type))
        .collect();
    compute_schedule(&units, mode)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
