use chartboard::api::{ChartBoard, ChartBoardConfig};
use chartboard::core::ChartKind;
use chartboard::markup::{ChartContainer, ChartDocument, MarkupPoint, Surface};
use chartboard::render::RecordingRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn dashboard_document(points_per_container: usize) -> ChartDocument {
    let mut document = ChartDocument::new();
    for kind in ChartKind::PASS_ORDER {
        let mut container = ChartContainer::new(kind.as_str(), kind)
            .with_surface(Surface::new(format!("{kind}-canvas")));
        for point in 0..points_per_container {
            container.push_point(MarkupPoint::named(
                format!("p{point}"),
                (point % 97) as f64,
            ));
        }
        document.push_container(container);
    }
    document
}

fn bench_render_document_1k(c: &mut Criterion) {
    let document = dashboard_document(250);

    c.bench_function("render_document_1k_points", |b| {
        b.iter(|| {
            let mut document = black_box(document.clone());
            let mut board =
                ChartBoard::new(RecordingRenderer::new(), ChartBoardConfig::default())
                    .expect("board init");
            let report = board.render_document(&mut document);
            assert!(report.is_clean());
        })
    });
}

fn bench_document_json_contract_1k(c: &mut Criterion) {
    let document = dashboard_document(250);

    c.bench_function("document_json_contract_1k_points", |b| {
        b.iter(|| {
            let json = black_box(&document)
                .to_json_contract_v1_pretty()
                .expect("serialize");
            let _ = ChartDocument::from_json_compat_str(&json).expect("parse");
        })
    });
}

criterion_group!(
    benches,
    bench_render_document_1k,
    bench_document_json_contract_1k
);
criterion_main!(benches);
