// rust/engine/tests/core_engine_characterization.rs
#![forbid(unsafe_code)]

/**
 * Core engine characterization tests.
 *
 * Purpose:
 * - Lock in the observable behavior of the rightward primitive and the four
 *   orientation adapters built on top of it.
 * - Catch regressions in spawning, terminal detection and board validation.
 *
 * Tests use fixture grids and the pure `slide` kernel wherever a spawned tile would
 * make the expected board nondeterministic.
 */
use twenty48_engine::engine::{
    Board, Direction, EngineError, Grid, MAX_TILE, SpawnRuleKind, apply_transforms,
    compact_and_merge, enumerate_legal_moves, post_transform, pre_transform, slide,
};

fn grid(rows: &[[u32; 4]]) -> Grid {
    Grid::from_rows(rows).expect("valid fixture grid")
}

fn locked_grid() -> Grid {
    grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
}

#[test]
fn right_merges_pair_into_edge() {
    let g = grid(&[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    let out = slide(&g, Direction::Right);

    assert!(out.moved);
    assert_eq!(out.score_gained, 4);
    assert_eq!(out.grid.row(0), &[0, 0, 0, 4]);
    assert_eq!(out.grid.count_occupied(), 1);
}

#[test]
fn primitive_merges_pair_nearest_the_edge_first() {
    let mut row = [0, 2, 2, 2];
    assert_eq!(compact_and_merge(&mut row), 4);
    assert_eq!(row, [0, 0, 2, 4]);

    let mut row = [8, 2, 2, 2];
    assert_eq!(compact_and_merge(&mut row), 4);
    assert_eq!(row, [0, 8, 2, 4]);

    let mut row = [4, 4, 8, 0];
    assert_eq!(compact_and_merge(&mut row), 8);
    assert_eq!(row, [0, 0, 8, 8]);

    let mut row = [2, 2, 2, 2];
    assert_eq!(compact_and_merge(&mut row), 8);
    assert_eq!(row, [0, 0, 4, 4]);

    let mut row = [4, 0, 4, 8];
    assert_eq!(compact_and_merge(&mut row), 8);
    assert_eq!(row, [0, 0, 8, 8]);
}

#[test]
fn primitive_leaves_compacted_distinct_row_alone() {
    let mut row = [0, 2, 4, 8];
    assert_eq!(compact_and_merge(&mut row), 0);
    assert_eq!(row, [0, 2, 4, 8]);
}

#[test]
fn each_direction_pushes_toward_its_edge() {
    let g = grid(&[[0, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 8]]);

    let up = slide(&g, Direction::Up);
    assert_eq!(up.score_gained, 4);
    assert_eq!(up.grid.get(0, 0), 4);
    assert_eq!(up.grid.get(0, 3), 8);
    assert_eq!(up.grid.count_occupied(), 2);

    let down = slide(&g, Direction::Down);
    assert_eq!(down.score_gained, 4);
    assert_eq!(down.grid.get(3, 0), 4);
    assert_eq!(down.grid.get(3, 3), 8);
    assert!(down.moved);

    let left = slide(&g, Direction::Left);
    assert_eq!(left.score_gained, 0);
    assert_eq!(left.grid.row(3), &[2, 8, 0, 0]);

    let right = slide(&g, Direction::Right);
    assert_eq!(right.grid.row(1), &[0, 0, 0, 2]);
    assert_eq!(right.grid.row(3), &[0, 0, 2, 8]);
}

#[test]
fn three_of_a_kind_merges_toward_the_move_edge() {
    let g = grid(&[[2, 2, 2, 0], [8, 2, 2, 2], [0, 0, 0, 0], [0, 0, 0, 0]]);

    let right = slide(&g, Direction::Right);
    assert_eq!(right.grid.row(0), &[0, 0, 2, 4]);
    assert_eq!(right.grid.row(1), &[0, 8, 2, 4]);
    assert_eq!(right.score_gained, 8);

    let left = slide(&g, Direction::Left);
    assert_eq!(left.grid.row(0), &[4, 2, 0, 0]);
    assert_eq!(left.grid.row(1), &[8, 4, 2, 0]);

    let col = grid(&[[2, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0]]);
    let up = slide(&col, Direction::Up);
    assert_eq!((up.grid.get(0, 0), up.grid.get(1, 0)), (4, 2));
    let down = slide(&col, Direction::Down);
    assert_eq!((down.grid.get(2, 0), down.grid.get(3, 0)), (2, 4));
}

#[test]
fn transforms_are_inverse_pairs() {
    let g = grid(&[[2, 4, 8, 16], [32, 64, 128, 256], [0, 2, 0, 4], [8, 0, 16, 0]]);
    for dir in Direction::ALL {
        let there = apply_transforms(&g, pre_transform(dir));
        let back = apply_transforms(&there, post_transform(dir));
        assert_eq!(back, g, "direction {dir:?}");
    }
}

#[test]
fn locked_board_rejects_every_direction() {
    let g = locked_grid();
    for dir in Direction::ALL {
        let out = slide(&g, dir);
        assert!(!out.moved, "direction {dir:?}");
        assert_eq!(out.grid, g);
        assert_eq!(out.score_gained, 0);
    }
    assert!(!enumerate_legal_moves(&g).any());

    let mut board = Board::from_grid(g.clone(), 7, SpawnRuleKind::Even);
    for dir in Direction::ALL {
        let out = board.apply_move(dir).expect("rejected move is not an error");
        assert!(!out.moved);
    }
    assert_eq!(board.grid(), &g);
    assert_eq!(board.moves, 0);
    assert_eq!(board.score, 0);
}

#[test]
fn terminal_detection() {
    assert!(locked_grid().is_terminal(2048));

    // Empty cell wins over everything, even a winning tile.
    let open = grid(&[[2048, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 0]]);
    assert!(!open.is_terminal(2048));

    // Full board with a merge left.
    let mergeable = grid(&[[2, 2, 4, 8], [4, 8, 16, 32], [8, 16, 32, 64], [16, 32, 64, 128]]);
    assert!(!mergeable.is_terminal(2048));

    // Full board with a winning tile, merges notwithstanding.
    let won = grid(&[[2048, 2, 4, 8], [2, 2, 16, 32], [8, 16, 32, 64], [16, 32, 64, 128]]);
    assert!(won.is_terminal(2048));
    assert!(!won.is_terminal(4096));

    // Vertical pair only.
    let vertical = grid(&[[2, 4, 2, 4], [2, 8, 4, 2], [4, 2, 8, 4], [8, 4, 2, 8]]);
    assert!(!vertical.has_horizontal_pair());
    assert!(vertical.has_vertical_pair());
    assert!(!vertical.is_terminal(2048));
}

#[test]
fn new_board_starts_with_two_twos() {
    for seed in 0..32u64 {
        let board = Board::new(4, seed, SpawnRuleKind::Even).expect("valid size");
        let tiles: Vec<u32> = board.grid().cells().iter().copied().filter(|&v| v != 0).collect();
        assert_eq!(tiles, vec![2, 2], "seed {seed}");
        assert_eq!(board.score, 0);
        assert_eq!(board.moves, 0);
    }
}

#[test]
fn accepted_move_spawns_exactly_one_tile() {
    let g = grid(&[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    let mut board = Board::from_grid(g, 11, SpawnRuleKind::Even);

    let out = board.apply_move(Direction::Right).expect("move");
    assert!(out.moved);
    assert_eq!(out.score_gained, 4);
    assert_eq!(out.grid.row(0), &[0, 0, 0, 4]);
    assert_eq!(board.grid().count_occupied(), out.grid.count_occupied() + 1);
    assert_eq!(board.grid().get(0, 3), 4);
    assert_eq!(board.score, 4);
    assert_eq!(board.moves, 1);

    let spawned: Vec<u32> = board
        .grid()
        .cells()
        .iter()
        .zip(out.grid.cells())
        .filter(|(after, before)| after != before)
        .map(|(&after, _)| after)
        .collect();
    assert_eq!(spawned.len(), 1);
    assert!(spawned[0] == 2 || spawned[0] == 4);
}

#[test]
fn populate_on_full_board_fails() {
    let mut board = Board::from_grid(locked_grid(), 3, SpawnRuleKind::Even);
    assert_eq!(board.populate(1), Err(EngineError::BoardFull));
}

#[test]
fn same_seed_same_trajectory() {
    let mut a = Board::new(4, 2024, SpawnRuleKind::Classic).expect("board");
    let mut b = Board::new(4, 2024, SpawnRuleKind::Classic).expect("board");
    for i in 0..60usize {
        assert_eq!(a.grid(), b.grid());
        let dir = Direction::ALL[i % 4];
        let ra = a.apply_move(dir).expect("move");
        let rb = b.apply_move(dir).expect("move");
        assert_eq!(ra, rb);
        if a.is_terminal(2048) {
            break;
        }
    }
    assert_eq!(a.score, b.score);
    assert_eq!(a.moves, b.moves);
}

#[test]
fn malformed_grids_are_rejected() {
    assert_eq!(
        Grid::empty(1),
        Err(EngineError::InvalidSize { size: 1, min: 2 })
    );

    let ragged: Vec<Vec<u32>> = vec![vec![0, 2, 0], vec![0, 0], vec![0, 0, 0]];
    assert_eq!(
        Grid::from_rows(&ragged),
        Err(EngineError::NonSquare { row: 1, len: 2, size: 3 })
    );

    let bad_tile: Vec<Vec<u32>> = vec![vec![0, 3], vec![0, 0]];
    assert_eq!(
        Grid::from_rows(&bad_tile),
        Err(EngineError::InvalidTile { row: 0, col: 1, value: 3 })
    );

    let one: Vec<Vec<u32>> = vec![vec![1, 0], vec![0, 0]];
    assert!(Grid::from_rows(&one).is_err());

    // two of these would overflow a u32 cell on merge
    let huge: Vec<Vec<u32>> = vec![vec![1 << 31, 1 << 31], vec![0, 0]];
    assert_eq!(
        Grid::from_rows(&huge),
        Err(EngineError::InvalidTile { row: 0, col: 0, value: 1 << 31 })
    );
    let largest: Vec<Vec<u32>> = vec![vec![MAX_TILE, MAX_TILE], vec![0, 0]];
    let merged = slide(&Grid::from_rows(&largest).expect("largest tile"), Direction::Right);
    assert_eq!(merged.grid.row(0), &[0, 1 << 31]);
    assert_eq!(merged.score_gained, 1u64 << 31);

    assert!(Board::new(0, 1, SpawnRuleKind::Even).is_err());
}

#[test]
fn spawn_rule_parsing() {
    assert_eq!(SpawnRuleKind::from_cli("classic"), SpawnRuleKind::Classic);
    assert_eq!(SpawnRuleKind::from_cli("EVEN"), SpawnRuleKind::Even);
    assert_eq!(SpawnRuleKind::from_cli("whatever"), SpawnRuleKind::Even);
}
