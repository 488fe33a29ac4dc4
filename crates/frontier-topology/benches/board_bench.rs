//! Benchmarks for Frontier Board Topology
//!
//! Measures performance of:
//! - Canonical key resolution
//! - The full table build
//! - Adjacency lookups

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use frontier_topology::{
    corner_key, edge_key, Board, BoardTopology, EdgeId, HexCoord, HexId, VertexId,
};

/// Benchmark corner key resolution across the board
fn bench_corner_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("corner_key");

    let coords = [
        HexCoord::ORIGIN,
        HexCoord::new(2, -2),
        HexCoord::new(-2, 2),
    ];

    for coord in coords {
        group.throughput(Throughput::Elements(6));
        group.bench_with_input(
            BenchmarkId::from_parameter(coord),
            &coord,
            |b, &coord| {
                b.iter(|| {
                    for corner in 0..6u8 {
                        black_box(corner_key(black_box(coord), corner));
                    }
                })
            },
        );
    }
    group.finish();
}

/// Benchmark edge key resolution (two corner keys plus normalization)
fn bench_edge_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_key");
    group.throughput(Throughput::Elements(6));
    group.bench_function("center_hex", |b| {
        b.iter(|| {
            for edge in 0..6u8 {
                black_box(edge_key(black_box(HexCoord::ORIGIN), edge));
            }
        })
    });
    group.finish();
}

/// Benchmark the full build: traversal, allocation, derivation, checks
fn bench_build(c: &mut Criterion) {
    let board = Board::standard();
    let mut group = c.benchmark_group("build");
    group.throughput(Throughput::Elements(19 * 6));
    group.bench_function("standard_board", |b| {
        b.iter(|| BoardTopology::build(black_box(&board)))
    });
    group.finish();
}

/// Benchmark table lookups on a built topology
fn bench_lookups(c: &mut Criterion) {
    let board = Board::standard();
    let topology = BoardTopology::build(&board).expect("standard board must build");

    let mut group = c.benchmark_group("lookups");
    group.bench_function("hex_vertices", |b| {
        b.iter(|| {
            for hex in 0..19u8 {
                black_box(topology.hex_vertices(HexId(hex)));
            }
        })
    });
    group.bench_function("vertex_neighbors", |b| {
        b.iter(|| {
            for v in 0..54u8 {
                black_box(topology.vertex_neighbors(VertexId(v)));
            }
        })
    });
    group.bench_function("edge_neighbors", |b| {
        b.iter(|| {
            for e in 0..72u8 {
                black_box(topology.edge_neighbors(EdgeId(e)));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_corner_key, bench_edge_key, bench_build, bench_lookups);
criterion_main!(benches);
