//! building — smallest runnable demo of the lift dispatch bank.
//!
//! Four cars serve a 24-floor building under a random request stream for
//! ten seconds of wall-clock time, with the classic top-floor idle parking
//! rule switched on.  Intervals are scaled down from the one-request-per-
//! second defaults so the demo finishes quickly; restore
//! `BankConfig::default()` for real-time pacing.

use std::time::{Duration, Instant};

use anyhow::Result;

use lift_cab::{CabSnapshot, StatusTransition};
use lift_core::{BankConfig, IdleParking, PickupRequest};
use lift_dispatch::Assignment;
use lift_sim::{FleetObserver, RandomRequests, SimBuilder, runtime};

// ── Constants ─────────────────────────────────────────────────────────────────

const ELEVATORS:    u16 = 4;
const FLOORS:       u16 = 24;
const SEED:         u64 = 42;
const RUN_DURATION: Duration = Duration::from_secs(10);

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints every dispatch outcome, status change, and periodic report.
struct PrintObserver;

impl FleetObserver for PrintObserver {
    fn on_assigned(&mut self, a: &Assignment) {
        println!("  {} takes {}", a.elevator, a.request);
    }

    fn on_deferred(&mut self, request: &PickupRequest, waiting: usize) {
        println!("  {request} deferred ({waiting} waiting)");
    }

    fn on_status_change(&mut self, t: &StatusTransition) {
        println!("  {} {} -> {}", t.elevator, t.from, t.to);
    }

    fn on_report(&mut self, fleet: &[CabSnapshot], deferred: usize) {
        let positions: Vec<String> = fleet
            .iter()
            .map(|cab| format!("{}@{}", cab.id, cab.current_floor))
            .collect();
        println!("  report: [{}] deferred={deferred}", positions.join(" "));
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== building — lift dispatch demo ===");
    println!("Elevators: {ELEVATORS}  |  Floors: {FLOORS}  |  Seed: {SEED}");
    println!();

    // 1. Config: classic bank with top-floor idle parking, sped up ~20x.
    let config = BankConfig {
        num_elevators:    ELEVATORS,
        num_floors:       FLOORS,
        idle_parking:     IdleParking::TopFloor,
        seed:             SEED,
        travel_interval:  Duration::from_millis(200),
        request_interval: Duration::from_millis(50),
        report_interval:  Duration::from_millis(1500),
        ..Default::default()
    };

    // 2. Build the bank and its request stream.
    let source = RandomRequests::from_config(&config);
    let sim = SimBuilder::new(config).build()?;

    // 3. Run the threaded runtime for a fixed wall-clock window.
    let t0 = Instant::now();
    let handle = runtime::start(sim, source, PrintObserver);
    std::thread::sleep(RUN_DURATION);
    let fleet = handle.shutdown()?;
    let elapsed = t0.elapsed();

    // 4. Summary.
    println!();
    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!();
    println!("{:<10} {:<12} {:<8} {:<8}", "Elevator", "Status", "Floor", "Pending");
    println!("{}", "-".repeat(40));
    for cab in &fleet {
        println!(
            "{:<10} {:<12} {:<8} {:<8}",
            cab.id.to_string(),
            cab.status.to_string(),
            cab.current_floor.to_string(),
            cab.pending_floors.len(),
        );
    }

    // 5. Final snapshot as JSON, for piping into other tools.
    println!();
    println!("{}", serde_json::to_string_pretty(&fleet)?);

    Ok(())
}
