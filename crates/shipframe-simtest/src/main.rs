//! Shipframe Headless Generation Harness
//!
//! Validates blueprint generation across a seed sweep without a renderer or
//! physics engine. Runs entirely in-process.
//!
//! Usage:
//!   cargo run -p shipframe-simtest
//!   cargo run -p shipframe-simtest -- --verbose
//!   cargo run -p shipframe-simtest -- --json 42

use std::collections::BTreeSet;

use shipframe_logic::{
    generate, rotate_forward, translate_centre, RandomSource, SettingValue, ShipBlueprint,
    ShipSettings,
};

const SEED_SWEEP: u64 = 200;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn result(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail,
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose");

    if let Some(pos) = args.iter().position(|a| a == "--json") {
        let seed = args
            .get(pos + 1)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0u64);
        dump_blueprint(seed);
        return;
    }

    println!("=== Shipframe Generation Harness ===\n");

    let mut results = Vec::new();

    // 1. Settings surface
    results.extend(validate_settings_surface());

    // 2. Determinism across repeated runs
    results.extend(validate_determinism());

    // 3. Skeleton invariants over the seed sweep
    results.extend(validate_skeletons(verbose));

    // 4. Thruster and key invariants over the seed sweep
    results.extend(validate_controls(verbose));

    // 5. Transform pipeline
    results.extend(validate_transforms());

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn dump_blueprint(seed: u64) {
    let settings = ShipSettings::default();
    let mut random = RandomSource::from_seed(seed);
    match generate(&settings, &mut random) {
        Ok(blueprint) => match serde_json::to_string_pretty(&blueprint) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("serialization failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("generation failed for seed {}: {}", seed, e);
            std::process::exit(1);
        }
    }
}

// ── 1. Settings surface ─────────────────────────────────────────────────

fn validate_settings_surface() -> Vec<TestResult> {
    println!("--- Settings ---");
    let mut results = Vec::new();

    let defaults = ShipSettings::default();
    results.push(result(
        "defaults_valid",
        defaults.validate().is_empty(),
        format!("{} validation errors", defaults.validate().len()),
    ));

    let mut settings = ShipSettings::default();
    let unknown = settings.set("hyperdrive", SettingValue::Int(1)).is_err();
    results.push(result(
        "unknown_option_rejected",
        unknown,
        "set(\"hyperdrive\") must fail".into(),
    ));

    let mut reversed = ShipSettings::default();
    reversed.min_circles = 9;
    reversed.max_circles = 1;
    let caught = generate(&reversed, &mut RandomSource::from_seed(0)).is_err();
    results.push(result(
        "reversed_bounds_abort",
        caught,
        "min>max must abort generation".into(),
    ));

    results
}

// ── 2. Determinism ──────────────────────────────────────────────────────

fn validate_determinism() -> Vec<TestResult> {
    println!("--- Determinism ---");
    let settings = ShipSettings::default();
    let mut identical = true;
    for seed in 0..20 {
        let a = generate(&settings, &mut RandomSource::from_seed(seed));
        let b = generate(&settings, &mut RandomSource::from_seed(seed));
        if a != b {
            identical = false;
            break;
        }
    }
    vec![result(
        "repeat_runs_identical",
        identical,
        "20 seeds generated twice".into(),
    )]
}

// ── 3. Skeleton invariants ──────────────────────────────────────────────

fn validate_skeletons(verbose: bool) -> Vec<TestResult> {
    println!("--- Skeleton invariants ({} seeds) ---", SEED_SWEEP);
    let settings = ShipSettings::default();
    let mut results = Vec::new();

    let mut failures: Vec<String> = Vec::new();
    let mut vertex_total = 0usize;
    for seed in 0..SEED_SWEEP {
        let blueprint = match generate(&settings, &mut RandomSource::from_seed(seed)) {
            Ok(b) => b,
            Err(e) => {
                failures.push(format!("seed {} failed: {}", seed, e));
                continue;
            }
        };
        vertex_total += blueprint.vertices.len();
        if let Some(problem) = check_skeleton(&blueprint) {
            failures.push(format!("seed {}: {}", seed, problem));
        }
    }

    if verbose {
        println!(
            "  mean vertices per blueprint: {:.1}",
            vertex_total as f64 / SEED_SWEEP as f64
        );
    }
    results.push(result(
        "skeleton_invariants",
        failures.is_empty(),
        if failures.is_empty() {
            format!("{} seeds clean", SEED_SWEEP)
        } else {
            failures.join("; ")
        },
    ));
    results
}

fn check_skeleton(blueprint: &ShipBlueprint) -> Option<String> {
    // Ring distances pairwise distinct, outer ring carries the triangle.
    for i in 0..blueprint.rings.len() {
        for j in (i + 1)..blueprint.rings.len() {
            if blueprint.rings[i].centre_distance == blueprint.rings[j].centre_distance {
                return Some("duplicate ring distance".into());
            }
        }
    }
    let outer = blueprint
        .rings
        .iter()
        .max_by(|a, b| a.centre_distance.total_cmp(&b.centre_distance))?;
    if outer.num_nodes < 3 {
        return Some("outer ring below 3 nodes".into());
    }

    // Hull is a single closed cycle.
    if blueprint.hull_indices.len() < 3 {
        return Some("hull below 3 indices".into());
    }
    if blueprint.hull_edges.len() != blueprint.hull_indices.len() {
        return Some("hull cycle length mismatch".into());
    }

    // Internal edges never join two hull vertices.
    let hull: BTreeSet<usize> = blueprint.hull_indices.iter().copied().collect();
    for edge in &blueprint.internal_edges {
        if hull.contains(&edge.start_index) && hull.contains(&edge.end_index) {
            return Some("internal edge joins two hull vertices".into());
        }
    }
    None
}

// ── 4. Thrusters and keys ───────────────────────────────────────────────

fn validate_controls(verbose: bool) -> Vec<TestResult> {
    println!("--- Thrusters & keys ({} seeds) ---", SEED_SWEEP);
    let settings = ShipSettings::default();
    let mut results = Vec::new();

    let mut failures: Vec<String> = Vec::new();
    let mut key_total = 0usize;
    for seed in 0..SEED_SWEEP {
        let blueprint = match generate(&settings, &mut RandomSource::from_seed(seed)) {
            Ok(b) => b,
            Err(e) => {
                failures.push(format!("seed {} failed: {}", seed, e));
                continue;
            }
        };
        key_total += blueprint.keys.len();
        if let Some(problem) = check_controls(&blueprint, &settings) {
            failures.push(format!("seed {}: {}", seed, problem));
        }
    }

    if verbose {
        println!(
            "  mean keys per blueprint: {:.1}",
            key_total as f64 / SEED_SWEEP as f64
        );
    }
    results.push(result(
        "control_invariants",
        failures.is_empty(),
        if failures.is_empty() {
            format!("{} seeds clean", SEED_SWEEP)
        } else {
            failures.join("; ")
        },
    ));
    results
}

fn check_controls(blueprint: &ShipBlueprint, settings: &ShipSettings) -> Option<String> {
    if blueprint.thrusters.len() < 2 {
        return Some("fewer than 2 thrusters".into());
    }
    let extras = blueprint.thrusters.len() - 2;
    if extras < settings.min_extra_thrusters as usize
        || extras > settings.max_extra_thrusters as usize
    {
        return Some(format!("{} extra thrusters out of bounds", extras));
    }
    for t in &blueprint.thrusters {
        if !(0.0..=1.0).contains(&t.weight) {
            return Some(format!("weight {} out of range", t.weight));
        }
        if t.hull_edge >= blueprint.hull_edges.len() {
            return Some("thruster references missing hull edge".into());
        }
    }

    // Baseline singletons, coverage, unique symbols.
    if blueprint.keys[0].thrusters != vec![0] || blueprint.keys[1].thrusters != vec![1] {
        return Some("baseline singletons altered".into());
    }
    let covered: BTreeSet<usize> = blueprint
        .keys
        .iter()
        .flat_map(|k| k.thrusters.iter().copied())
        .collect();
    if covered.len() != blueprint.thrusters.len() {
        return Some(format!(
            "coverage {}/{} thrusters",
            covered.len(),
            blueprint.thrusters.len()
        ));
    }
    let symbols: BTreeSet<char> = blueprint.keys.iter().map(|k| k.symbol).collect();
    if symbols.len() != blueprint.keys.len() {
        return Some("duplicate key symbols".into());
    }
    None
}

// ── 5. Transform pipeline ───────────────────────────────────────────────

fn validate_transforms() -> Vec<TestResult> {
    println!("--- Transforms ---");
    let settings = ShipSettings::default();
    let mut results = Vec::new();

    let mut centred = true;
    let mut aligned = true;
    for seed in 0..20 {
        if let Ok(blueprint) = generate(&settings, &mut RandomSource::from_seed(seed)) {
            let posed = rotate_forward(&translate_centre(&blueprint));
            if posed.centre.magnitude() > 1e-9 {
                centred = false;
            }
            if posed.forward.x.abs() > 1e-9 || (posed.forward.y - 1.0).abs() > 1e-9 {
                aligned = false;
            }
        }
    }
    results.push(result(
        "translate_zeroes_centre",
        centred,
        "centre at origin after translate".into(),
    ));
    results.push(result(
        "rotate_aligns_forward",
        aligned,
        "forward on the up axis after rotate".into(),
    ));
    results
}
