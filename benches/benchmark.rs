//! Benchmarks for rotor machine operations.
//!
//! Measures machine assembly, stepping, and message encoding throughput
//! across repeat counts and rotor counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rotor_machine::config::MachineConfig;
use rotor_machine::presets::{self, ReflectorModel, RotorModel};
use rotor_machine::Message;

/// Plaintext used consistently across all encoding benchmarks.
const BENCH_TEXT: &str = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";

/// Benchmarks assembling the historical I-II-III / B machine.
///
/// Covers wiring validation and inverse-table construction for three
/// rotors and the reflector.
fn bench_assemble(c: &mut Criterion) {
    c.bench_function("assemble_default", |b| {
        b.iter(|| black_box(presets::default_rotor_set().unwrap()));
    });
}

/// Benchmarks a single `step()` of the three-rotor chain.
fn bench_step(c: &mut Criterion) {
    let mut rs = presets::default_rotor_set().unwrap();
    c.bench_function("step_three_rotors", |b| {
        b.iter(|| {
            rs.step();
            black_box(&rs);
        });
    });
}

/// Benchmarks `encode()` across repeat counts.
///
/// The machine keeps stepping between iterations, as it would when
/// encoding a long stream message by message.
fn bench_encode_repeat_scaling(c: &mut Criterion) {
    let message = Message::parse(BENCH_TEXT).unwrap();

    let mut group = c.benchmark_group("encode_repeat_scaling");
    group.throughput(Throughput::Bytes(BENCH_TEXT.len() as u64));

    for &repeat in &[1usize, 2, 4, 8] {
        let mut rs = presets::default_rotor_set().unwrap();
        rs.set_repeat(repeat).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(repeat), &repeat, |b, _| {
            b.iter(|| black_box(rs.encode(black_box(&message))));
        });
    }

    group.finish();
}

/// Benchmarks `encode()` across rotor chain lengths.
fn bench_encode_rotor_scaling(c: &mut Criterion) {
    let message = Message::parse(BENCH_TEXT).unwrap();

    let mut group = c.benchmark_group("encode_rotor_scaling");
    group.throughput(Throughput::Bytes(BENCH_TEXT.len() as u64));

    for &num_rotors in &[1usize, 3, 5] {
        let models: Vec<RotorModel> = RotorModel::ALL.into_iter().take(num_rotors).collect();
        let config = MachineConfig::from_parts(
            &models,
            &vec![0; num_rotors],
            &vec![1; num_rotors],
            ReflectorModel::B,
            1,
        )
        .unwrap();
        let mut rs = config.build().unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(num_rotors),
            &num_rotors,
            |b, _| {
                b.iter(|| black_box(rs.encode(black_box(&message))));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_assemble,
    bench_step,
    bench_encode_repeat_scaling,
    bench_encode_rotor_scaling,
);
criterion_main!(benches);
