//! Network configuration loading and management.
//!
//! Describes the AVMUs of one acquisition network and the scheduling mode to
//! use for it.  The expected YAML structure is:
//! ```yaml
//! scheduling_mode: SIMULTANEOUS
//! units:
//!   - index: 0
//!     enabled: true
//!     switchboard_type: TDD_4_PORT_SWITCH
//!     tdd: true
//!     ip_address: "192.168.1.223"
//!     description: "North mast"
//! ```
//!
//! Only `index` and `switchboard_type` are required per unit.  Semantic
//! checks (duplicate indices, TDD on the wrong board, mixed boards) are left
//! to the scheduler so there is a single place that enforces them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::topology::SwitchboardType;
use crate::unit::{SchedulingMode, UnitDescriptor};

// ── Private YAML deserialization types ────────────────────────────────────────

/// Top-level wrapper that maps directly onto the YAML file layout.
#[derive(Debug, Deserialize)]
struct NetworkConfigFile {
    #[serde(default)]
    scheduling_mode: SchedulingMode,
    #[serde(default)]
    units: Vec<UnitConfigEntry>,
}

/// Per-unit fields as they appear in the YAML file.
#[derive(Debug, Deserialize)]
struct UnitConfigEntry {
    index: u32,
    #[serde(default = "default_enabled")]
    enabled: bool,
    switchboard_type: SwitchboardType,
    #[serde(default)]
    tdd: bool,
    ip_address: Option<String>,
    description: Option<String>,
}

/// Units are enabled unless the file says otherwise.
fn default_enabled() -> bool {
    true
}

// ── Public data structures ────────────────────────────────────────────────────

/// One unit entry from the network file.
///
/// `ip_address` and `description` are informational: they are logged and
/// handed to the acquisition layer, but the scheduler never sees them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitConfig {
    pub index: u32,
    pub enabled: bool,
    pub switchboard_type: SwitchboardType,
    pub tdd: bool,
    pub ip_address: String,
    pub description: String,
}

impl UnitConfig {
    /// Scheduler view of this entry.
    pub fn descriptor(&self) -> UnitDescriptor {
        UnitDescriptor {
            index: self.index,
            enabled: self.enabled,
            switchboard_type: self.switchboard_type,
            tdd_requested: self.tdd,
        }
    }
}

// ── NetworkConfigManager ──────────────────────────────────────────────────────

/// Loads and manages the network description from a YAML file.
#[derive(Debug, Default)]
pub struct NetworkConfigManager {
    /// Units in file order.
    units: Vec<UnitConfig>,

    scheduling_mode: SchedulingMode,

    /// Set to `true` after a successful [`load_from_file`](Self::load_from_file).
    loaded: bool,
}

impl NetworkConfigManager {
    /// Creates a new, empty `NetworkConfigManager`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `path` and replaces any previously loaded network.
    ///
    /// A file without units is accepted (it schedules to nothing) but logged
    /// as a warning.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if the YAML is
    /// structurally invalid (unknown board or mode names included).  The
    /// manager is left unloaded in that case.
    pub fn load_from_file(&mut self, path: &Path) -> Result<()> {
        info!("Loading network configuration from: {}", path.display());

        // Reset state before (re-)loading
        self.units.clear();
        self.scheduling_mode = SchedulingMode::default();
        self.loaded = false;

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open configuration file: {}", path.display()))?;

        let file: NetworkConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML file: {}", path.display()))?;

        for entry in file.units {
            let unit = UnitConfig {
                index: entry.index,
                enabled: entry.enabled,
                switchboard_type: entry.switchboard_type,
                tdd: entry.tdd,
                ip_address: entry.ip_address.unwrap_or_default(),
                description: entry.description.unwrap_or_default(),
            };

            debug!(
                "  Unit: {} | Board: {} | Enabled: {} | TDD: {} | IP: {}",
                unit.index, unit.switchboard_type, unit.enabled, unit.tdd, unit.ip_address,
            );

            self.units.push(unit);
        }

        if self.units.is_empty() {
            warn!("No units found in network configuration, schedule will be empty");
        }

        self.scheduling_mode = file.scheduling_mode;
        self.loaded = true;

        info!(
            unit_count = self.units.len(),
            enabled_count = self.enabled_count(),
            mode = %self.scheduling_mode,
            "Successfully loaded network configuration"
        );

        Ok(())
    }

    /// All unit entries, in file order.
    pub fn units(&self) -> &[UnitConfig] {
        &self.units
    }

    /// The entry with `index`, if any.  With duplicate indices the first
    /// entry wins; the scheduler rejects such files anyway.
    pub fn unit(&self, index: u32) -> Option<&UnitConfig> {
        self.units.iter().find(|u| u.index == index)
    }

    /// Scheduler input built from every entry, disabled ones included.
    pub fn unit_descriptors(&self) -> Vec<UnitDescriptor> {
        self.units.iter().map(UnitConfig::descriptor).collect()
    }

    /// Scheduling mode from the file (`SIMULTANEOUS` when absent).
    pub fn scheduling_mode(&self) -> SchedulingMode {
        self.scheduling_mode
    }

    pub fn enabled_count(&self) -> usize {
        self.units.iter().filter(|u| u.enabled).count()
    }

    /// Returns `true` after a successful call to [`load_from_file`](Self::load_from_file).
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
