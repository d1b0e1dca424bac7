use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use metroline_core::model::{Distance, ExtraFare, Line, Section};
use metroline_core::routing::NetworkGraph;
use metroline_core::topology::SectionChain;

const LINES: u64 = 20;
const STATIONS_PER_LINE: u64 = 50;

fn station(line: u64, offset: u64) -> u64 {
    line * 1000 + offset
}

// A ladder: LINES parallel chains plus one connector line joining their
// first stations, so cross-line routes exist everywhere.
fn build_network() -> Vec<(Line, SectionChain)> {
    let mut network = Vec::new();

    for line_id in 0..LINES {
        let sections = (0..STATIONS_PER_LINE - 1)
            .map(|offset| {
                Section::new(
                    line_id,
                    station(line_id, offset),
                    station(line_id, offset + 1),
                    Distance::new(2 + (offset % 5) as u32).unwrap(),
                )
                .unwrap()
            })
            .collect();
        network.push((
            Line::new(
                line_id,
                format!("line-{line_id}"),
                "bg-blue-600",
                ExtraFare::new(100 * line_id as u32),
            ),
            SectionChain::from_unordered(sections).unwrap(),
        ));
    }

    let connector_sections = (0..LINES - 1)
        .map(|line_id| {
            Section::new(
                LINES,
                station(line_id, 0),
                station(line_id + 1, 0),
                Distance::new(3).unwrap(),
            )
            .unwrap()
        })
        .collect();
    network.push((
        Line::new(LINES, "connector", "bg-gray-600", ExtraFare::new(0)),
        SectionChain::from_unordered(connector_sections).unwrap(),
    ));

    network
}

fn bench_routing(c: &mut Criterion) {
    let network = build_network();
    let graph = NetworkGraph::from_lines(network.iter().map(|(line, chain)| (line, chain)));

    let source = station(0, STATIONS_PER_LINE - 1);
    let target = station(LINES - 1, STATIONS_PER_LINE - 1);

    c.bench_function("shortest_path_ladder", |b| {
        b.iter(|| {
            graph
                .shortest_path(black_box(source), black_box(target))
                .unwrap()
        });
    });

    c.bench_function("graph_rebuild", |b| {
        b.iter(|| {
            NetworkGraph::from_lines(network.iter().map(|(line, chain)| (line, chain)))
        });
    });
}

criterion_group!(benches, bench_routing);
criterion_main!(benches);
