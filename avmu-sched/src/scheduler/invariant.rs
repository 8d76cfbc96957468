/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Post-generation self-check on the frame list.
//!
//! A frame in which no combo receives anything would still cost a full
//! trigger and sweep on the hardware, yet return nothing usable.  The
//! generation rules are written so that this never happens:
//!
//! * SIMULTANEOUS with several units: every passive receiver keeps its RX port,
//!   only the transmitter's own monostatic reception can be masked.
//! * SEQUENTIAL: combos with a masked RX port are never added.
//! * Single unit: the lone masked combo is dropped by the post-frame filter.
//! * S-param: only straight-through pairs are emitted, never masked.
//!
//! The check below runs after every scheduling run anyway.  Unlike the input
//! validation it does not describe a user error; a hit means the rules above
//! were broken by a code change.

use crate::schedule::Frame;

/// Position of the first frame without a receiving combo, or `None` if every
/// frame receives something.
pub fn first_silent_frame(frames: &[Frame]) -> Option<usize> {
    frames.iter().position(|f| !f.has_receiver())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
