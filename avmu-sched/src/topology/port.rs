/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Typed antenna ports.
//!
//! A port is either an active path carrying its numeric suffix, or the `None`
//! sentinel meaning "this side of the path is inactive".  Ports are
//! unit-relative: `TxPort::Path(2)` on unit 0 and on unit 1 are different
//! physical connectors.
//!
//! Ports print as the hardware path names programmed into each unit
//! (`AVMU_TX_PATH_2`, `AVMU_RX_PATH_NONE`) and parse from those names or from
//! the short forms `TX_2` / `RX_NONE`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ParseError;

/// Highest port number exposed by any switch-board topology.
pub const MAX_PORT_NUMBER: u8 = 7;

// ── TxPort ────────────────────────────────────────────────────────────────────

/// Transmit side of a path.
///
/// `None` orders before every `Path`, so sorted combo sets list masked
/// transmitters first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TxPort {
    /// The unit does not radiate for this combo.
    None,
    /// Transmit on the numbered switch-board port.
    Path(u8),
}

impl TxPort {
    /// Numeric suffix of the port, `None` for the sentinel.
    pub fn number(self) -> Option<u8> {
        match self {
            TxPort::None => None,
            TxPort::Path(n) => Some(n),
        }
    }

    pub fn is_none(self) -> bool {
        matches!(self, TxPort::None)
    }

    /// `true` when `self` and `rx` are the same physical connector.
    ///
    /// The sentinel never matches anything, including the RX sentinel.
    pub fn same_port_as(self, rx: RxPort) -> bool {
        match (self, rx) {
            (TxPort::Path(t), RxPort::Path(r)) => t == r,
            _ => false,
        }
    }
}

impl fmt::Display for TxPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxPort::None => f.write_str("AVMU_TX_PATH_NONE"),
            TxPort::Path(n) => write!(f, "AVMU_TX_PATH_{n}"),
        }
    }
}

impl FromStr for TxPort {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match parse_port(s, "TX")? {
            Some(n) => TxPort::Path(n),
            None => TxPort::None,
        })
    }
}

// ── RxPort ────────────────────────────────────────────────────────────────────

/// Receive side of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RxPort {
    /// Nothing useful is received for this combo.
    None,
    /// Receive on the numbered switch-board port.
    Path(u8),
}

impl RxPort {
    /// Numeric suffix of the port, `None` for the sentinel.
    pub fn number(self) -> Option<u8> {
        match self {
            RxPort::None => None,
            RxPort::Path(n) => Some(n),
        }
    }

    pub fn is_none(self) -> bool {
        matches!(self, RxPort::None)
    }
}

impl fmt::Display for RxPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RxPort::None => f.write_str("AVMU_RX_PATH_NONE"),
            RxPort::Path(n) => write!(f, "AVMU_RX_PATH_{n}"),
        }
    }
}

impl FromStr for RxPort {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match parse_port(s, "RX")? {
            Some(n) => RxPort::Path(n),
            None => RxPort::None,
        })
    }
}

// ── Name parsing ──────────────────────────────────────────────────────────────

/// Accepts `AVMU_<side>_PATH_<n>`, `<side>_PATH_<n>` and `<side>_<n>`, where
/// `<n>` is a port number or `NONE`.  Case-insensitive.
fn parse_port(s: &str, side: &'static str) -> Result<Option<u8>, ParseError> {
    let invalid = || ParseError::InvalidPort {
        side,
        value: s.to_string(),
    };

    let upper = s.trim().to_ascii_uppercase();
    let name = upper.strip_prefix("AVMU_").unwrap_or(&upper);
    let rest = name
        .strip_prefix(side)
        .and_then(|r| r.strip_prefix('_'))
        .ok_or_else(invalid)?;
    let suffix = rest.strip_prefix("PATH_").unwrap_or(rest);

    if suffix == "NONE" {
        return Ok(None);
    }
    match suffix.parse::<u8>() {
        Ok(n) if n <= MAX_PORT_NUMBER => Ok(Some(n)),
        _ => Err(invalid()),
    }
}

// ── serde: ports travel as their hardware names ───────────────────────────────

impl Serialize for TxPort {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TxPort {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for RxPort {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RxPort {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_hardware_names() {
        assert_eq!(TxPort::Path(3).to_string(), "AVMU_TX_PATH_3");
        assert_eq!(TxPort::None.to_string(), "AVMU_TX_PATH_NONE");
        assert_eq!(RxPort::Path(0).to_string(), "AVMU_RX_PATH_0");
        assert_eq!(RxPort::None.to_string(), "AVMU_RX_PATH_NONE");
    }

    #[test]
    fn parse_accepts_long_and_short_forms() {
        assert_eq!("AVMU_TX_PATH_2".parse::<TxPort>().unwrap(), TxPort::Path(2));
        assert_eq!("TX_PATH_2".parse::<TxPort>().unwrap(), TxPort::Path(2));
        assert_eq!("tx_2".parse::<TxPort>().unwrap(), TxPort::Path(2));
        assert_eq!("RX_NONE".parse::<RxPort>().unwrap(), RxPort::None);
        assert_eq!(
            " AVMU_RX_PATH_NONE ".parse::<RxPort>().unwrap(),
            RxPort::None
        );
    }

    #[test]
    fn parse_rejects_wrong_side() {
        let err = "AVMU_RX_PATH_1".parse::<TxPort>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidPort { side: "TX", .. }));
        assert!("TX_1".parse::<RxPort>().is_err());
    }

    #[test]
    fn parse_rejects_out_of_range_numbers() {
        assert!("TX_8".parse::<TxPort>().is_err());
        assert!("RX_255".parse::<RxPort>().is_err());
        assert!("TX_".parse::<TxPort>().is_err());
        assert!("TX_-1".parse::<TxPort>().is_err());
    }

    #[test]
    fn same_port_compares_numbers_only() {
        assert!(TxPort::Path(1).same_port_as(RxPort::Path(1)));
        assert!(!TxPort::Path(1).same_port_as(RxPort::Path(2)));
        assert!(!TxPort::None.same_port_as(RxPort::None));
        assert!(!TxPort::Path(0).same_port_as(RxPort::None));
    }

    #[test]
    fn sentinel_orders_before_paths() {
        assert!(TxPort::None < TxPort::Path(0));
        assert!(RxPort::None < RxPort::Path(0));
        assert!(RxPort::Path(1) < RxPort::Path(4));
    }

    #[test]
    fn serde_yaml_uses_hardware_names() {
        let yaml = serde_yaml::to_string(&TxPort::Path(4)).unwrap();
        assert_eq!(yaml.trim(), "AVMU_TX_PATH_4");

        let rx: RxPort = serde_yaml::from_str("RX_NONE").unwrap();
        assert_eq!(rx, RxPort::None);

        assert!(serde_yaml::from_str::<RxPort>("RX_9").is_err());
    }
}
