//! Benchmarks pour la conversion feuille -> GeoJSON

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use planilha::{convert, Cell, Sheet};

fn synthetic_sheet(rows: usize) -> Sheet {
    let mut data = vec![
        vec![Cell::from("Empreendimentos 2024")],
        Vec::new(),
        ["Nome", "Concelho", "Estado", "Preço_m2", "Latitude", "Longitude", "Link"]
            .iter()
            .map(|s| Cell::from(*s))
            .collect(),
    ];
    for i in 0..rows {
        let lat = if i % 10 == 0 {
            Cell::from("n/d")
        } else {
            Cell::from(format!("38,{}", 700 + i % 100).as_str())
        };
        data.push(vec![
            Cell::from(format!("Projeto {}", i).as_str()),
            Cell::from("Lisboa"),
            Cell::from("Em construção"),
            Cell::Number(4000.0 + i as f64),
            lat,
            Cell::Number(-9.1 - (i % 50) as f64 / 1000.0),
            Cell::from("https://example.pt"),
        ]);
    }
    Sheet::new("Folha1", data)
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for rows in [100, 1_000, 10_000] {
        let sheet = synthetic_sheet(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &sheet, |b, sheet| {
            b.iter(|| {
                let conversion = convert(black_box(sheet)).unwrap();
                black_box(conversion.to_json().unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
