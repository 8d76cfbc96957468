/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

use avmu_sched::config::NetworkConfigManager;
use avmu_sched::scheduler::compute_schedule;
use avmu_sched::unit::SchedulingMode;

// ── CLI argument definition ───────────────────────────────────────────────────

/// Compute the path-combination schedule for a network of AVMUs.
///
/// Example:
///   avmu-sched -c configs/two_unit_tdd.yaml -m SEQUENTIAL
#[derive(Debug, Parser)]
#[command(
    name = "avmu-sched",
    about = "AVMU path-combination scheduler",
    long_about = None,
)]
struct Cli {
    /// Path to the YAML network configuration file.
    #[arg(short = 'c', long = "network")]
    network: PathBuf,

    /// Scheduling mode (SIMULTANEOUS or SEQUENTIAL); overrides the file.
    #[arg(short = 'm', long = "mode")]
    mode: Option<SchedulingMode>,

    /// Print the measurement program of this unit instead of the full schedule.
    #[arg(short = 'u', long = "unit")]
    unit: Option<u32>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    // Logs go to stderr so the YAML on stdout can be piped.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!(
        network = %cli.network.display(),
        mode    = ?cli.mode,
        unit    = ?cli.unit,
        "Configuration"
    );

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // ── Load network configuration ────────────────────────────────────────────
    let mut network = NetworkConfigManager::new();
    network.load_from_file(&cli.network)?;

    let mode = cli.mode.unwrap_or_else(|| network.scheduling_mode());
    if cli.mode.is_some_and(|m| m != network.scheduling_mode()) {
        warn!(
            file_mode = %network.scheduling_mode(),
            mode = %mode,
            "Scheduling mode overridden on the command line"
        );
    }

    for unit in network.units() {
        info!(
            "  [unit {idx}]  board={board}  enabled={enabled}  tdd={tdd}  ip={ip}",
            idx = unit.index,
            board = unit.switchboard_type,
            enabled = unit.enabled,
            tdd = unit.tdd,
            ip = unit.ip_address,
        );
    }

    // ── Schedule ──────────────────────────────────────────────────────────────
    let schedule = compute_schedule(&network.unit_descriptors(), mode)
        .context("Failed to compute path schedule")?;

    info!(
        mode = %schedule.mode(),
        frames = schedule.len(),
        combos = schedule.combo_count(),
        units = ?schedule.units(),
        "Schedule computed"
    );

    // ── Output ────────────────────────────────────────────────────────────────
    let yaml = match cli.unit {
        Some(index) => {
            let program = schedule.unit_program(index);
            if program.is_empty() {
                warn!(unit = index, "Unit takes part in no frame");
            }
            serde_yaml::to_string(&program)
        }
        None => serde_yaml::to_string(&schedule),
    }
    .context("Failed to serialise schedule")?;

    print!("{yaml}");
    Ok(())
}
