use figure_gallery::core::{FigureId, TOTAL_FIGURES};
use figure_gallery::navigation::{NavigationController, NavigationState, Transition};

#[test]
fn controller_starts_on_first_figure() {
    let controller = NavigationController::new();
    assert_eq!(controller.current_figure(), FigureId::FIRST);
    assert_eq!(
        controller.state(),
        NavigationState {
            current_figure: FigureId::FIRST
        }
    );
    assert_eq!(controller.total_figures(), TOTAL_FIGURES);
}

#[test]
fn next_and_previous_step_by_one() {
    let mut controller = NavigationController::new();
    assert_eq!(controller.next().get(), 2);
    assert_eq!(controller.next().get(), 3);
    assert_eq!(controller.previous().get(), 2);
}

#[test]
fn previous_on_first_figure_is_a_no_op() {
    let mut controller = NavigationController::new();
    let outcome = controller.apply(Transition::Previous);
    assert_eq!(outcome.from, FigureId::FIRST);
    assert_eq!(outcome.to, FigureId::FIRST);
    assert!(!outcome.changed());
    assert!(!controller.can_go_previous());
    assert!(controller.can_go_next());
}

#[test]
fn next_on_last_figure_is_a_no_op() {
    let mut controller = NavigationController::starting_at(FigureId::LAST);
    let outcome = controller.apply(Transition::Next);
    assert_eq!(outcome.to.get(), 15);
    assert!(!outcome.changed());
    assert!(!controller.can_go_next());
    assert!(controller.can_go_previous());
}

#[test]
fn jump_clamps_out_of_range_targets() {
    let mut controller = NavigationController::new();
    assert_eq!(controller.jump_to(20).get(), 15);
    assert_eq!(controller.jump_to(0).get(), 1);
    assert_eq!(controller.jump_to(-3).get(), 1);
    assert_eq!(controller.jump_to(i64::MAX).get(), 15);
    assert_eq!(controller.jump_to(i64::MIN).get(), 1);
    assert_eq!(controller.jump_to(7).get(), 7);
}

#[test]
fn session_walkthrough_scenario() {
    let mut controller = NavigationController::new();
    for _ in 0..5 {
        controller.apply(Transition::Next);
    }
    assert_eq!(controller.current_figure().get(), 6);

    controller.apply(Transition::JumpTo(20));
    assert_eq!(controller.current_figure().get(), 15);

    controller.apply(Transition::JumpTo(-3));
    assert_eq!(controller.current_figure().get(), 1);
}

#[test]
fn walking_forward_visits_every_figure_once() {
    let mut controller = NavigationController::new();
    let mut visited = vec![controller.current_figure().get()];
    while controller.can_go_next() {
        visited.push(controller.next().get());
    }
    assert_eq!(visited, (1..=TOTAL_FIGURES).collect::<Vec<_>>());
}

#[test]
fn page_indicators_mark_only_the_current_figure() {
    let mut controller = NavigationController::new();
    controller.jump_to(9);

    let indicators: Vec<_> = controller.page_indicators().collect();
    assert_eq!(indicators.len(), usize::from(TOTAL_FIGURES));
    assert_eq!(indicators.iter().filter(|page| page.current).count(), 1);
    let current = indicators
        .iter()
        .find(|page| page.current)
        .expect("one current page");
    assert_eq!(current.id.get(), 9);
    assert!(
        indicators
            .windows(2)
            .all(|pair| pair[0].id.get() + 1 == pair[1].id.get())
    );
}

#[test]
fn transition_serializes_with_target() {
    let json = serde_json::to_value(Transition::JumpTo(4)).expect("serialize transition");
    assert_eq!(json["transition"], "jump_to");
    assert_eq!(json["target"], 4);

    let json = serde_json::to_value(Transition::Next).expect("serialize transition");
    assert_eq!(json["transition"], "next");
}
