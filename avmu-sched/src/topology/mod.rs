//! Switch-board topologies and the static port catalog.
//!
//! Every AVMU front end carries one of a closed set of antenna switch boards.
//! The board fixes which ports can transmit and which can receive:
//!
//! | Switch board | TX ports | RX ports |
//! |---|---|---|
//! | `NO_SWITCH_BOARD` | TX_0 | RX_1 |
//! | `SIMPLE_4_PORT_SWITCH` / `TDD_4_PORT_SWITCH` | TX_0..TX_3 | RX_0..RX_3 |
//! | `SIMPLE_8_PORT_SWITCH` | TX_0..TX_7 | RX_0..RX_7 |
//! | `S_PARAM_SWITCH` | TX_0..TX_4 | RX_0..RX_4 |
//!
//! The catalog is plain `'static` data; there is nothing to initialise and
//! nothing to invalidate.  Every property of a board is an exhaustive `match`
//! on [`SwitchboardType`], so adding a board fails to compile until each rule
//! has been decided for it.

pub mod port;

pub use port::{RxPort, TxPort, MAX_PORT_NUMBER};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Parse errors ──────────────────────────────────────────────────────────────

/// Failure to turn a configuration string into one of the closed enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(
        "unknown switch-board type: '{0}' (valid: NO_SWITCH_BOARD, SIMPLE_4_PORT_SWITCH, \
         TDD_4_PORT_SWITCH, SIMPLE_8_PORT_SWITCH, S_PARAM_SWITCH)"
    )]
    UnknownSwitchboard(String),

    #[error("unknown scheduling mode: '{0}' (valid: SIMULTANEOUS, SEQUENTIAL)")]
    UnknownMode(String),

    #[error("invalid {side} port name: '{value}'")]
    InvalidPort { side: &'static str, value: String },
}

// ── Port catalog ──────────────────────────────────────────────────────────────

const TX_SINGLE: &[TxPort] = &[TxPort::Path(0)];
const RX_SINGLE: &[RxPort] = &[RxPort::Path(1)];

const TX_4: &[TxPort] = &[
    TxPort::Path(0),
    TxPort::Path(1),
    TxPort::Path(2),
    TxPort::Path(3),
];
const RX_4: &[RxPort] = &[
    RxPort::Path(0),
    RxPort::Path(1),
    RxPort::Path(2),
    RxPort::Path(3),
];

const TX_5: &[TxPort] = &[
    TxPort::Path(0),
    TxPort::Path(1),
    TxPort::Path(2),
    TxPort::Path(3),
    TxPort::Path(4),
];
const RX_5: &[RxPort] = &[
    RxPort::Path(0),
    RxPort::Path(1),
    RxPort::Path(2),
    RxPort::Path(3),
    RxPort::Path(4),
];

const TX_8: &[TxPort] = &[
    TxPort::Path(0),
    TxPort::Path(1),
    TxPort::Path(2),
    TxPort::Path(3),
    TxPort::Path(4),
    TxPort::Path(5),
    TxPort::Path(6),
    TxPort::Path(7),
];
const RX_8: &[RxPort] = &[
    RxPort::Path(0),
    RxPort::Path(1),
    RxPort::Path(2),
    RxPort::Path(3),
    RxPort::Path(4),
    RxPort::Path(5),
    RxPort::Path(6),
    RxPort::Path(7),
];

// ── PortPairing ───────────────────────────────────────────────────────────────

/// How a board combines a TX port with an RX port inside one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortPairing {
    /// Any TX/RX pair is a path.  Monostatic receptions are masked unless the
    /// unit runs TDD; non-transmitting receivers get `TX_NONE`.
    Masked,
    /// Only TX_n → RX_n is a physical path; other pairs are omitted.
    StraightThrough,
}

// ── SwitchboardType ───────────────────────────────────────────────────────────

/// Antenna switch board fitted to a unit.
///
/// Serialised with the hardware spelling (`TDD_4_PORT_SWITCH`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SwitchboardType {
    /// Bare front end: one TX and one RX connector.
    #[default]
    #[serde(rename = "NO_SWITCH_BOARD")]
    NoSwitchBoard,
    #[serde(rename = "SIMPLE_4_PORT_SWITCH")]
    Simple4PortSwitch,
    /// Same ports as the simple 4-port board, with time-division duplexing.
    #[serde(rename = "TDD_4_PORT_SWITCH")]
    Tdd4PortSwitch,
    #[serde(rename = "SIMPLE_8_PORT_SWITCH")]
    Simple8PortSwitch,
    /// S-parameter board: straight-through paths, single-unit operation.
    #[serde(rename = "S_PARAM_SWITCH")]
    SParamSwitch,
}

impl SwitchboardType {
    /// Every board, in declaration order.
    pub const ALL: [SwitchboardType; 5] = [
        SwitchboardType::NoSwitchBoard,
        SwitchboardType::Simple4PortSwitch,
        SwitchboardType::Tdd4PortSwitch,
        SwitchboardType::Simple8PortSwitch,
        SwitchboardType::SParamSwitch,
    ];

    /// Hardware name of the board.
    pub fn as_str(self) -> &'static str {
        match self {
            SwitchboardType::NoSwitchBoard => "NO_SWITCH_BOARD",
            SwitchboardType::Simple4PortSwitch => "SIMPLE_4_PORT_SWITCH",
            SwitchboardType::Tdd4PortSwitch => "TDD_4_PORT_SWITCH",
            SwitchboardType::Simple8PortSwitch => "SIMPLE_8_PORT_SWITCH",
            SwitchboardType::SParamSwitch => "S_PARAM_SWITCH",
        }
    }

    /// Ports that can transmit, in catalog order.
    ///
    /// The TDD board switches exactly like the simple 4-port board.
    pub fn tx_ports(self) -> &'static [TxPort] {
        match self {
            SwitchboardType::NoSwitchBoard => TX_SINGLE,
            SwitchboardType::Simple4PortSwitch | SwitchboardType::Tdd4PortSwitch => TX_4,
            SwitchboardType::Simple8PortSwitch => TX_8,
            SwitchboardType::SParamSwitch => TX_5,
        }
    }

    /// Ports that can receive, in catalog order.
    pub fn rx_ports(self) -> &'static [RxPort] {
        match self {
            SwitchboardType::NoSwitchBoard => RX_SINGLE,
            SwitchboardType::Simple4PortSwitch | SwitchboardType::Tdd4PortSwitch => RX_4,
            SwitchboardType::Simple8PortSwitch => RX_8,
            SwitchboardType::SParamSwitch => RX_5,
        }
    }

    /// Every `(tx, rx)` pair of the board: TX outer, RX inner, catalog order.
    pub fn port_pairs(self) -> impl Iterator<Item = (TxPort, RxPort)> {
        let rx_ports = self.rx_ports();
        self.tx_ports()
            .iter()
            .flat_map(move |&tx| rx_ports.iter().map(move |&rx| (tx, rx)))
    }

    /// `true` if the board can transmit and receive on the same port by
    /// time-sharing it.
    pub fn supports_tdd(self) -> bool {
        match self {
            SwitchboardType::Tdd4PortSwitch => true,
            SwitchboardType::NoSwitchBoard
            | SwitchboardType::Simple4PortSwitch
            | SwitchboardType::Simple8PortSwitch
            | SwitchboardType::SParamSwitch => false,
        }
    }

    /// `true` if the board can only be scheduled as the sole enabled unit.
    pub fn single_unit_only(self) -> bool {
        match self {
            SwitchboardType::SParamSwitch => true,
            SwitchboardType::NoSwitchBoard
            | SwitchboardType::Simple4PortSwitch
            | SwitchboardType::Tdd4PortSwitch
            | SwitchboardType::Simple8PortSwitch => false,
        }
    }

    /// Pairing rule applied when building combos for this board.
    pub fn pairing(self) -> PortPairing {
        match self {
            SwitchboardType::SParamSwitch => PortPairing::StraightThrough,
            SwitchboardType::NoSwitchBoard
            | SwitchboardType::Simple4PortSwitch
            | SwitchboardType::Tdd4PortSwitch
            | SwitchboardType::Simple8PortSwitch => PortPairing::Masked,
        }
    }
}

impl fmt::Display for SwitchboardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwitchboardType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SwitchboardType::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownSwitchboard(s.to_string()))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_matches_hardware_table() {
        use crate::topology::SwitchboardType::*;

        assert_eq!(NoSwitchBoard.tx_ports(), &[TxPort::Path(0)]);
        assert_eq!(NoSwitchBoard.rx_ports(), &[RxPort::Path(1)]);

        assert_eq!(Simple4PortSwitch.tx_ports().len(), 4);
        assert_eq!(Simple4PortSwitch.rx_ports().len(), 4);
        assert_eq!(Tdd4PortSwitch.tx_ports(), Simple4PortSwitch.tx_ports());
        assert_eq!(Tdd4PortSwitch.rx_ports(), Simple4PortSwitch.rx_ports());

        assert_eq!(Simple8PortSwitch.tx_ports().len(), 8);
        assert_eq!(Simple8PortSwitch.rx_ports().len(), 8);

        assert_eq!(SParamSwitch.tx_ports().len(), 5);
        assert_eq!(SParamSwitch.rx_ports().len(), 5);
    }

    #[test]
    fn catalog_ports_are_numbered_in_ascending_order() {
        for board in SwitchboardType::ALL {
            let tx: Vec<u8> = board.tx_ports().iter().filter_map(|p| p.number()).collect();
            let rx: Vec<u8> = board.rx_ports().iter().filter_map(|p| p.number()).collect();
            assert_eq!(tx.len(), board.tx_ports().len(), "{board}: TX sentinel in catalog");
            assert_eq!(rx.len(), board.rx_ports().len(), "{board}: RX sentinel in catalog");
            assert!(tx.windows(2).all(|w| w[0] < w[1]), "{board}: TX not ascending");
            assert!(rx.windows(2).all(|w| w[0] < w[1]), "{board}: RX not ascending");
            assert!(tx.iter().chain(&rx).all(|&n| n <= MAX_PORT_NUMBER));
        }
    }

    #[test]
    fn port_pairs_iterate_tx_outer_rx_inner() {
        let pairs: Vec<_> = SwitchboardType::Simple4PortSwitch.port_pairs().collect();
        assert_eq!(pairs.len(), 16);
        assert_eq!(pairs[0], (TxPort::Path(0), RxPort::Path(0)));
        assert_eq!(pairs[1], (TxPort::Path(0), RxPort::Path(1)));
        assert_eq!(pairs[4], (TxPort::Path(1), RxPort::Path(0)));
        assert_eq!(pairs[15], (TxPort::Path(3), RxPort::Path(3)));
    }

    #[test]
    fn only_tdd_board_supports_tdd() {
        let tdd: Vec<_> = SwitchboardType::ALL
            .into_iter()
            .filter(|b| b.supports_tdd())
            .collect();
        assert_eq!(tdd, vec![SwitchboardType::Tdd4PortSwitch]);
    }

    #[test]
    fn only_s_param_board_is_straight_through_and_single_unit() {
        for board in SwitchboardType::ALL {
            let s_param = board == SwitchboardType::SParamSwitch;
            assert_eq!(board.single_unit_only(), s_param);
            assert_eq!(board.pairing() == PortPairing::StraightThrough, s_param);
        }
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for board in SwitchboardType::ALL {
            assert_eq!(board.as_str().parse::<SwitchboardType>().unwrap(), board);
        }
        assert_eq!(
            "tdd_4_port_switch".parse::<SwitchboardType>().unwrap(),
            SwitchboardType::Tdd4PortSwitch
        );
    }

    #[test]
    fn unknown_board_name_is_rejected() {
        let err = "SIMPLE_16_PORT_SWITCH".parse::<SwitchboardType>().unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownSwitchboard("SIMPLE_16_PORT_SWITCH".to_string())
        );
    }

    #[test]
    fn serde_uses_hardware_spelling() {
        let board: SwitchboardType = serde_yaml::from_str("SIMPLE_8_PORT_SWITCH").unwrap();
        assert_eq!(board, SwitchboardType::Simple8PortSwitch);
        let yaml = serde_yaml::to_string(&SwitchboardType::SParamSwitch).unwrap();
        assert_eq!(yaml.trim(), "S_PARAM_SWITCH");
    }
}
