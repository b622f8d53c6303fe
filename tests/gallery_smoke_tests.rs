use figure_gallery::core::FigureId;
use figure_gallery::data::Dataset;
use figure_gallery::navigation::Transition;
use figure_gallery::registry::ChartSpec;
use figure_gallery::render::{NullRenderer, RenderAdapter};
use figure_gallery::{Gallery, GalleryConfig, GalleryError, GalleryResult};

#[test]
fn gallery_smoke_flow() {
    let mut gallery = Gallery::new(NullRenderer::default(), GalleryConfig::new().with_seed(1));

    let first = gallery.show().expect("initial render");
    assert_eq!(first.id(), FigureId::FIRST);
    assert!(!gallery.can_go_previous());
    assert!(gallery.can_go_next());

    for _ in 0..5 {
        gallery.next().expect("render next figure");
    }
    assert_eq!(gallery.current_figure().get(), 6);

    let last = gallery.jump_to(20).expect("render clamped jump");
    assert_eq!(last.id().get(), 15);
    assert!(!gallery.can_go_next());

    let back = gallery.jump_to(-3).expect("render clamped jump");
    assert_eq!(back.id().get(), 1);

    assert_eq!(gallery.adapter().render_count, 8);
    assert_eq!(gallery.total_figures(), 15);
}

#[test]
fn same_seed_yields_identical_sessions() {
    let walk = |seed: u64| -> Vec<Dataset> {
        let mut gallery =
            Gallery::new(NullRenderer::default(), GalleryConfig::new().with_seed(seed));
        let mut datasets = vec![gallery.show().expect("initial render").dataset];
        while gallery.can_go_next() {
            datasets.push(gallery.next().expect("render next").dataset);
        }
        datasets
    };

    let first = walk(77);
    assert_eq!(first.len(), 15);
    assert_eq!(first, walk(77));
    assert_ne!(first, walk(78));
}

#[test]
fn boundary_no_op_still_regenerates() {
    let mut gallery = Gallery::new(NullRenderer::default(), GalleryConfig::new().with_seed(3));
    let before = gallery.show().expect("initial render");
    let after = gallery.previous().expect("render after no-op");

    assert_eq!(after.id(), before.id());
    assert_ne!(after.dataset, before.dataset);
    assert_eq!(gallery.adapter().render_count, 2);
}

#[test]
fn revisiting_a_figure_draws_new_data() {
    let mut gallery = Gallery::new(NullRenderer::default(), GalleryConfig::new().with_seed(4));
    let first_visit = gallery.jump_to(8).expect("render figure 8").dataset;
    gallery.next().expect("render figure 9");
    let second_visit = gallery.previous().expect("render figure 8").dataset;
    assert_ne!(first_visit, second_visit);
}

#[test]
fn initial_figure_comes_from_config() {
    let config = GalleryConfig::new()
        .with_initial_figure(FigureId::new(11).expect("valid id"))
        .with_seed(9);
    let mut gallery = Gallery::new(NullRenderer::default(), config);
    let active = gallery.show().expect("initial render");
    assert_eq!(active.id().get(), 11);
    assert_eq!(
        active.descriptor.title,
        "Figure S11: Sobol Sensitivity Indices"
    );

    let indicators: Vec<_> = gallery.page_indicators().collect();
    assert!(indicators[10].current);
    assert_eq!(gallery.navigation().current_figure().get(), 11);
}

#[test]
fn explicit_transitions_match_helpers() {
    let mut gallery = Gallery::new(NullRenderer::default(), GalleryConfig::new().with_seed(6));
    let active = gallery
        .transition(Transition::JumpTo(14))
        .expect("render figure 14");
    assert_eq!(active.id().get(), 14);
    assert_eq!(gallery.adapter().last_figure, Some(active.id()));
    assert_eq!(gallery.adapter().last_record_count, 5);
}

struct RejectingRenderer;

impl RenderAdapter for RejectingRenderer {
    fn render(&mut self, _dataset: &Dataset, _chart: &ChartSpec) -> GalleryResult<()> {
        Err(GalleryError::InvalidData("backend unavailable".to_owned()))
    }
}

#[test]
fn adapter_errors_propagate_without_stalling_navigation() {
    let mut gallery = Gallery::new(RejectingRenderer, GalleryConfig::new().with_seed(2));
    assert!(matches!(gallery.next(), Err(GalleryError::InvalidData(_))));
    assert_eq!(gallery.current_figure().get(), 2);
}

#[test]
fn unseeded_sessions_still_render() {
    let mut gallery = Gallery::new(NullRenderer::default(), GalleryConfig::default());
    let active = gallery.jump_to(4).expect("render figure 4");
    assert_eq!(active.dataset.len(), 200);
    let renderer = gallery.into_adapter();
    assert_eq!(renderer.render_count, 1);
}
