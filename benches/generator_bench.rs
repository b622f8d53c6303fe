use criterion::{Criterion, criterion_group, criterion_main};
use figure_gallery::data::synthesis;
use figure_gallery::registry::FigureRegistry;
use figure_gallery::render::{NullRenderer, RenderAdapter, bind};
use figure_gallery::{Gallery, GalleryConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

fn bench_generate_all_figures(c: &mut Criterion) {
    let registry = FigureRegistry::standard();
    let mut rng = StdRng::seed_from_u64(7);

    c.bench_function("generate_all_figures", |b| {
        b.iter(|| {
            for descriptor in registry.iter() {
                let _ = black_box(descriptor.generate(&mut rng));
            }
        })
    });
}

fn bench_demand_series(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);

    c.bench_function("demand_series_week", |b| {
        b.iter(|| {
            let _ = black_box(synthesis::demand_series(&mut rng));
        })
    });
}

fn bench_bind_correlation_grid(c: &mut Criterion) {
    let descriptor = FigureRegistry::standard()
        .try_lookup(3)
        .expect("figure 3 exists");
    let dataset = descriptor.generate(&mut StdRng::seed_from_u64(13));

    c.bench_function("bind_correlation_grid", |b| {
        b.iter(|| {
            let _ = bind(black_box(&dataset), &descriptor.chart).expect("bind");
        })
    });
}

fn bench_null_render_every_figure(c: &mut Criterion) {
    let registry = FigureRegistry::standard();
    let mut rng = StdRng::seed_from_u64(17);
    let datasets: Vec<_> = registry
        .iter()
        .map(|descriptor| (descriptor, descriptor.generate(&mut rng)))
        .collect();
    let mut renderer = NullRenderer::default();

    c.bench_function("null_render_every_figure", |b| {
        b.iter(|| {
            for (descriptor, dataset) in &datasets {
                renderer
                    .render(black_box(dataset), &descriptor.chart)
                    .expect("render");
            }
        })
    });
}

fn bench_gallery_walk(c: &mut Criterion) {
    c.bench_function("gallery_walk_forward", |b| {
        b.iter(|| {
            let mut gallery =
                Gallery::new(NullRenderer::default(), GalleryConfig::new().with_seed(19));
            let _ = gallery.show().expect("initial render");
            while gallery.can_go_next() {
                let _ = black_box(gallery.next().expect("render next"));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_generate_all_figures,
    bench_demand_series,
    bench_bind_correlation_grid,
    bench_null_render_every_figure,
    bench_gallery_walk
);
criterion_main!(benches);
