// rust/engine/tests/goal_heuristic_contracts.rs
#![forbid(unsafe_code)]

/**
 * Goal-heuristic contract tests.
 *
 * Covered:
 * - Quadrant location of the maximum tile, including the fixed tie-break order
 *   top-left > bottom-left > top-right > bottom-right.
 * - Corner -> (slide_x, slide_y) mapping.
 * - Ranking of candidate moves by immediate score, with non-scoring demotion and
 *   stable ordering among equal scores.
 */
use twenty48_engine::engine::{Direction, Grid};
use twenty48_engine::goal::{
    GoalState, Quadrant, RankedMove, alternate_vertical, find_goal_space, score_maximizer,
    slide_to,
};

fn grid(rows: &[[u32; 4]]) -> Grid {
    Grid::from_rows(rows).expect("valid fixture grid")
}

#[test]
fn max_tile_in_each_quadrant() {
    let cases = [
        ((0, 1), Quadrant::TopLeft, (0, 0), "top-left"),
        ((3, 1), Quadrant::BottomLeft, (3, 0), "bot-left"),
        ((1, 2), Quadrant::TopRight, (0, 3), "top-right"),
        ((2, 3), Quadrant::BottomRight, (3, 3), "bot-right"),
    ];
    for ((r, c), quadrant, corner, label) in cases {
        let mut rows = [[2u32; 4]; 4];
        rows[r][c] = 64;
        let space = find_goal_space(&grid(&rows));
        assert_eq!(space.quadrant, quadrant);
        assert_eq!((space.goal_row, space.goal_col), corner);
        assert_eq!(space.label(), label);
    }
}

#[test]
fn tie_break_prefers_top_left_over_bottom_right() {
    let g = grid(&[[0, 0, 0, 0], [0, 128, 0, 0], [0, 0, 0, 0], [0, 0, 0, 128]]);
    assert_eq!(find_goal_space(&g).quadrant, Quadrant::TopLeft);
}

#[test]
fn tie_break_order_is_fixed() {
    // bottom-left beats top-right
    let g = grid(&[[0, 0, 0, 32], [0, 0, 0, 0], [32, 0, 0, 0], [0, 0, 0, 0]]);
    assert_eq!(find_goal_space(&g).quadrant, Quadrant::BottomLeft);

    // top-right beats bottom-right
    let g = grid(&[[0, 0, 16, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 16]]);
    assert_eq!(find_goal_space(&g).quadrant, Quadrant::TopRight);
}

#[test]
fn odd_sizes_split_at_half() {
    // size 5: half = 2, so row 2 / col 2 belong to the bottom / right halves.
    let rows: Vec<Vec<u32>> = vec![
        vec![0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0],
        vec![0, 0, 8, 0, 0],
        vec![0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 2],
    ];
    let space = find_goal_space(&Grid::from_rows(&rows).expect("grid"));
    assert_eq!(space.quadrant, Quadrant::BottomRight);
    assert_eq!((space.goal_row, space.goal_col), (4, 4));
}

#[test]
fn corners_map_to_slide_pairs() {
    assert_eq!(slide_to(0, 0, 4), Some((Direction::Left, Direction::Up)));
    assert_eq!(slide_to(0, 3, 4), Some((Direction::Right, Direction::Up)));
    assert_eq!(slide_to(3, 0, 4), Some((Direction::Left, Direction::Down)));
    assert_eq!(slide_to(3, 3, 4), Some((Direction::Right, Direction::Down)));
    assert_eq!(slide_to(1, 1, 4), None);

    for q in Quadrant::SEARCH_ORDER {
        let (x, y) = q.slide_directions();
        assert!(!x.is_vertical());
        assert!(y.is_vertical());
    }
}

#[test]
fn goal_state_tracks_worst_direction() {
    let g = grid(&[[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 256]]);
    let goal = GoalState::locate(&g);
    assert_eq!(goal.label(), "bot-right");
    assert_eq!((goal.slide_x, goal.slide_y), (Direction::Right, Direction::Down));
    assert_eq!(goal.worst_direction(), Direction::Left);
}

#[test]
fn alternate_vertical_is_the_other_vertical() {
    assert_eq!(alternate_vertical(Direction::Up), Direction::Down);
    assert_eq!(alternate_vertical(Direction::Down), Direction::Up);
}

#[test]
fn ranking_orders_by_score_and_keeps_candidate_order_on_ties() {
    // Left scores 4 (top row); up and down both score 8 (column 3).
    let g = grid(&[[2, 2, 0, 0], [0, 0, 0, 4], [0, 0, 0, 4], [0, 0, 0, 0]]);

    let ranked = score_maximizer(Direction::Left, Direction::Up, &g);
    assert_eq!(
        ranked.ranked(),
        [
            RankedMove::Scoring(Direction::Up),
            RankedMove::Scoring(Direction::Down),
            RankedMove::Scoring(Direction::Left),
        ]
    );

    let ranked = score_maximizer(Direction::Left, Direction::Down, &g);
    assert_eq!(ranked.best(), RankedMove::Scoring(Direction::Down));
    assert_eq!(ranked.second(), RankedMove::Scoring(Direction::Up));
    assert_eq!(ranked.third(), RankedMove::Scoring(Direction::Left));
    assert_eq!(ranked.to_obs(), [3.0, 2.0, 0.0]);
}

#[test]
fn non_scoring_candidates_are_demoted() {
    let g = grid(&[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    let ranked = score_maximizer(Direction::Left, Direction::Up, &g);

    assert_eq!(ranked.best(), RankedMove::Scoring(Direction::Left));
    assert_eq!(ranked.second(), RankedMove::NonScoring);
    assert_eq!(ranked.third(), RankedMove::NonScoring);
    assert_eq!(ranked.rank_of(Direction::Left), Some(0));
    assert_eq!(ranked.rank_of(Direction::Up), None);
    assert_eq!(ranked.best().label(), "left");
    assert_eq!(ranked.second().label(), "NA");
    assert_eq!(ranked.to_obs(), [0.0, -1.0, -1.0]);
}

#[test]
fn nothing_scores_on_a_sparse_board() {
    let g = grid(&[[2, 0, 0, 0], [0, 4, 0, 0], [0, 0, 8, 0], [0, 0, 0, 16]]);
    let ranked = score_maximizer(Direction::Right, Direction::Down, &g);
    assert_eq!(ranked.ranked(), [RankedMove::NonScoring; 3]);
}
