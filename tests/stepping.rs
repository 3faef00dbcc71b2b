//! Stepping behavior of the rotor chain: odometer carries, the double step
//! of middle rotors, and reproducibility.

use std::collections::HashSet;

use rotor_machine::config::MachineConfig;
use rotor_machine::presets::{self, ReflectorModel, RotorModel};
use rotor_machine::RotorSet;

fn machine(models: &[RotorModel], positions: &[usize], increments: &[usize]) -> RotorSet {
    MachineConfig::from_parts(models, positions, increments, ReflectorModel::B, 1)
        .unwrap()
        .build()
        .unwrap()
}

fn step_trace(rs: &mut RotorSet, steps: usize) -> Vec<Vec<usize>> {
    (0..steps)
        .map(|_| {
            rs.step();
            rs.positions()
        })
        .collect()
}

const I_II_III: [RotorModel; 3] = [RotorModel::I, RotorModel::II, RotorModel::III];

#[test]
fn double_step_moves_middle_and_left_together() {
    // rotor II carries at slot 25, rotor III at slot 11
    let mut rs = machine(&I_II_III, &[0, 24, 10], &[1, 1, 1]);
    let before = rs.positions();
    rs.step();
    let after = rs.positions();

    assert_eq!(before, vec![0, 24, 10]);
    assert_eq!(after, vec![1, 25, 11]);
    assert_ne!(after[0], before[0], "left rotor must advance");
    assert_ne!(after[1], before[1], "middle rotor must advance");
}

#[test]
fn middle_rotor_steps_again_on_next_event() {
    let mut rs = machine(&I_II_III, &[0, 24, 10], &[1, 1, 1]);
    let trace = step_trace(&mut rs, 3);
    assert_eq!(trace, vec![vec![1, 25, 11], vec![1, 0, 12], vec![1, 0, 13]]);
}

#[test]
fn historical_period_with_double_step() {
    let mut rs = presets::default_rotor_set().unwrap();
    let mut seen = HashSet::new();
    for _ in 0..17_000 {
        rs.step();
        seen.insert(rs.positions());
    }
    // 26 * 25 * 26: the double step skips one middle position per cycle
    assert_eq!(seen.len(), 16_900);
}

#[test]
fn stepping_is_reproducible() {
    let mut a = machine(&I_II_III, &[3, 7, 11], &[2, 5, 3]);
    let mut b = machine(&I_II_III, &[3, 7, 11], &[2, 5, 3]);
    assert_eq!(step_trace(&mut a, 500), step_trace(&mut b, 500));
}

#[test]
fn reset_replays_the_same_trace() {
    let mut rs = machine(&I_II_III, &[3, 7, 11], &[2, 5, 3]);
    let first = step_trace(&mut rs, 100);
    rs.reset();
    assert_eq!(step_trace(&mut rs, 100), first);
}

#[test]
fn single_rotor_only_counts() {
    let mut rs = machine(&[RotorModel::III], &[9], &[1]);
    let trace = step_trace(&mut rs, 4);
    assert_eq!(trace, vec![vec![10], vec![11], vec![12], vec![13]]);

    let mut rs = machine(&[RotorModel::III], &[0], &[1]);
    let trace = step_trace(&mut rs, 26);
    let expected: Vec<Vec<usize>> = (1..=26).map(|p| vec![p % 26]).collect();
    assert_eq!(trace, expected);
}

#[test]
fn two_rotor_carry() {
    // no interior rotor: only the carry rule applies
    let mut rs = machine(&[RotorModel::I, RotorModel::III], &[0, 10], &[1, 1]);
    let trace = step_trace(&mut rs, 2);
    assert_eq!(trace, vec![vec![1, 11], vec![1, 12]]);
}

#[test]
fn increments_scale_steps() {
    let mut rs = machine(&I_II_III, &[0, 0, 0], &[1, 1, 5]);
    let trace = step_trace(&mut rs, 3);
    assert_eq!(trace, vec![vec![0, 0, 5], vec![0, 0, 10], vec![0, 0, 15]]);
}
