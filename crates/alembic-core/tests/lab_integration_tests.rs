//! Integration tests for scripted experiments against a live lab session
//!
//! These tests require the session object, the reaction engine, and the
//! experiment sequencer together, so they live at the crate level.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use alembic_core::chemistry::{SubstanceId, VisualEffect};
use alembic_core::experiment::ExperimentDefinition;
use alembic_core::lab::{Lab, LabEvent, LabStats, NoopStats};

fn builtin(id: &str) -> ExperimentDefinition {
    ExperimentDefinition::builtin()
        .into_iter()
        .find(|e| e.id == id)
        .unwrap_or_else(|| panic!("missing builtin experiment: {id}"))
}

/// Tick until the predicate holds or the limit is reached
fn tick_until(
    lab: &mut Lab,
    rng: &mut Xoshiro256StarStar,
    max_ticks: usize,
    mut pred: impl FnMut(&[LabEvent], &Lab) -> bool,
) -> bool {
    for _ in 0..max_ticks {
        let events = lab.tick(rng, &mut NoopStats).unwrap();
        if pred(&events, lab) {
            return true;
        }
    }
    false
}

#[test]
fn test_polyethylene_synthesis_runs_to_completion() {
    let mut lab = Lab::new().unwrap();
    let mut rng = Xoshiro256StarStar::seed_from_u64(42);

    lab.run_experiment(builtin("pe"));
    assert!(lab.experiment_active());

    let reacted = tick_until(&mut lab, &mut rng, 200, |events, _| {
        events.iter().any(|e| {
            matches!(
                e,
                LabEvent::Reaction {
                    overlay: true,
                    produced,
                    ..
                } if produced == &[SubstanceId::POLIETENA.to_string()]
            )
        })
    });

    assert!(reacted, "polymerization never fired");
    assert_eq!(
        lab.vessel().contents(),
        &[SubstanceId::POLIETENA.to_string()]
    );
    // A controlled synthesis presents an overlay; it does not reset the vessel
    assert!(lab.vessel().temperature > 20.0);
}

#[test]
fn test_methane_combustion_waits_for_default_flash_point() {
    let mut lab = Lab::new().unwrap();
    let mut rng = Xoshiro256StarStar::seed_from_u64(42);

    lab.run_experiment(builtin("methane_fire"));

    let mut ignition_temperature = 0.0;
    let ignited = tick_until(&mut lab, &mut rng, 400, |events, lab| {
        let hit = events
            .iter()
            .any(|e| matches!(e, LabEvent::Reaction { visuals, .. } if visuals.contains(&VisualEffect::Fire)));
        if hit {
            ignition_temperature = lab.vessel().temperature;
        }
        hit
    });

    assert!(ignited, "methane never ignited");
    // Methane has no explicit flash point, so ignition waited for the
    // 200-degree default (plus the +100 released by burning)
    assert!(ignition_temperature > 300.0);
    assert_eq!(lab.vessel().contents(), &[SubstanceId::ASH.to_string()]);
}

#[test]
fn test_hydrogen_detonation_resets_vessel() {
    let mut lab = Lab::new().unwrap();
    let mut rng = Xoshiro256StarStar::seed_from_u64(42);

    lab.run_experiment(builtin("hydrogen_boom"));

    let detonated = tick_until(&mut lab, &mut rng, 400, |events, _| {
        events.iter().any(|e| e.resets_vessel())
    });

    assert!(detonated, "hydrogen never detonated");
    assert!(lab.vessel().is_empty());
    assert_eq!(lab.vessel().temperature, 20.0);
    assert!(!lab.experiment_active());
}

#[test]
fn test_reset_cancels_in_flight_experiment() {
    let mut lab = Lab::new().unwrap();
    let mut rng = Xoshiro256StarStar::seed_from_u64(42);

    lab.run_experiment(builtin("pe"));

    // Still inside the initial settling delay; nothing has been added yet
    for _ in 0..3 {
        lab.tick(&mut rng, &mut NoopStats).unwrap();
    }
    assert!(lab.vessel().is_empty());

    lab.reset();
    assert!(!lab.experiment_active());

    // No orphaned delayed steps may fire after the reset
    for _ in 0..100 {
        let events = lab.tick(&mut rng, &mut NoopStats).unwrap();
        assert!(events.is_empty());
    }
    assert!(lab.vessel().is_empty());
    assert_eq!(lab.vessel().temperature, 20.0);
}

#[test]
fn test_evaporation_drains_overheated_water() {
    struct EvaporationCount(u32);

    impl LabStats for EvaporationCount {
        fn record_substance_added(&mut self) {}
        fn record_reaction(&mut self) {}
        fn record_evaporation(&mut self) {
            self.0 += 1;
        }
    }

    let mut lab = Lab::new().unwrap();
    let mut rng = Xoshiro256StarStar::seed_from_u64(7);
    let mut stats = EvaporationCount(0);

    for _ in 0..3 {
        lab.add_substance(SubstanceId::WATER, &mut rng, &mut stats)
            .unwrap();
    }
    lab.set_heat_control(50.0); // target 270, well past the evaporation threshold

    for _ in 0..400 {
        lab.tick(&mut rng, &mut stats).unwrap();
        if lab.vessel().is_empty() {
            break;
        }
    }

    assert!(lab.vessel().is_empty(), "water never fully evaporated");
    assert_eq!(stats.0, 3);
}

#[test]
fn test_custom_ron_experiment() {
    let ron = r#"(
        id: "brine",
        name: "Brine Preparation",
        steps: [
            AddSubstance(id: "hcl"),
            Wait(ticks: 2),
            AddSubstance(id: "naoh"),
        ],
    )"#;
    let definition = ExperimentDefinition::from_ron_str(ron).unwrap();

    let mut lab = Lab::new().unwrap();
    let mut rng = Xoshiro256StarStar::seed_from_u64(42);
    lab.run_experiment(definition);

    let neutralized = tick_until(&mut lab, &mut rng, 20, |events, _| {
        events
            .iter()
            .any(|e| matches!(e, LabEvent::Reaction { visuals, .. } if visuals == &[VisualEffect::Steam]))
    });

    assert!(neutralized, "neutralization never fired");
    assert_eq!(
        lab.vessel().contents(),
        &[SubstanceId::SALT_WATER.to_string()]
    );
    // +40 from neutralization, minus the passive cooling applied later in
    // the same tick
    assert_eq!(lab.vessel().temperature, 59.0);
}
