use std::time::Duration;

use egui_algos::{Projection, SortAlgorithm, SortProjection, StepPlayer};

/// Stepping a trace through the player reaches the same state as folding it
/// directly, whatever mix of tick and finish drains it.
#[test]
fn player_replay_matches_direct_fold() {
    let values: Vec<u32> = vec![9, 3, 7, 1, 8, 2, 6, 4, 5];

    for algorithm in SortAlgorithm::ALL {
        let trace = algorithm.trace(&values);

        let mut direct = SortProjection::new(values.clone());
        for event in &trace {
            direct.apply(event);
        }

        let mut player = StepPlayer::new(Duration::ZERO);
        player.play(trace.clone(), SortProjection::new(values.clone()));
        for _ in 0..trace.len() / 2 {
            assert!(player.tick());
        }
        player.finish();

        assert!(player.is_finished());
        assert_eq!(
            player.projection().unwrap().values(),
            direct.values(),
            "{}",
            algorithm.name()
        );
    }
}

#[test]
fn superseding_run_discards_the_old_projection() {
    let mut player = StepPlayer::new(Duration::ZERO);
    player.play(
        SortAlgorithm::Bubble.trace(&[3, 2, 1]),
        SortProjection::new(vec![3, 2, 1]),
    );
    player.tick();

    player.play(
        SortAlgorithm::Selection.trace(&[2, 1]),
        SortProjection::new(vec![2, 1]),
    );
    player.finish();

    assert_eq!(player.projection().unwrap().values(), &[1, 2]);
}
