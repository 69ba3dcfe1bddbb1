//! Loading puzzle definitions beyond the reference fixture.

use word_wheel::core::{Grid, PuzzleDefinition, PuzzleError, WordPlacement};
use word_wheel::types::{CellPos, Orientation};

fn placement(text: &str, row: u8, col: u8, o: &str) -> WordPlacement {
    WordPlacement::new(text, CellPos::new(row, col), Orientation::from_str(o).unwrap())
}

#[test]
fn custom_cross_puzzle_loads() {
    // C A T
    // . R .
    // . T .
    let grid = Grid::from_rows(&[[1u8, 1, 1], [0, 1, 0], [0, 1, 0]]).unwrap();
    let def = PuzzleDefinition::new(
        grid,
        vec![placement("CAT", 0, 0, "h"), placement("ART", 0, 1, "v")],
        "CATR".chars(),
    )
    .unwrap();

    assert_eq!(def.words().len(), 2);
    assert_eq!(def.letter_at(CellPos::new(0, 1)), Some('A'));
    assert_eq!(def.letter_at(CellPos::new(2, 1)), Some('T'));
    assert_eq!(def.letter_at(CellPos::new(1, 0)), None);
}

#[test]
fn pool_must_cover_repeated_letters() {
    let grid = Grid::from_rows(&[[1u8, 1, 1]]).unwrap();
    let err = PuzzleDefinition::new(grid, vec![placement("TOT", 0, 0, "h")], "TO".chars())
        .unwrap_err();
    assert_eq!(
        err,
        PuzzleError::MissingLetters {
            word: "TOT".into(),
            letter: 'T'
        }
    );
}

#[test]
fn ragged_grid_rejected() {
    let rows: Vec<Vec<u8>> = vec![vec![1, 1, 1], vec![1, 1]];
    assert!(matches!(
        Grid::from_rows(&rows),
        Err(PuzzleError::RaggedGrid { row: 1, .. })
    ));
}

#[test]
fn crossing_must_agree() {
    let grid = Grid::from_rows(&[[1u8, 1, 1], [1, 0, 0], [1, 0, 0]]).unwrap();
    let err = PuzzleDefinition::new(
        grid,
        vec![placement("CAT", 0, 0, "h"), placement("DOG", 0, 0, "v")],
        "CATDOG".chars(),
    )
    .unwrap_err();
    assert!(matches!(err, PuzzleError::ConflictingLetters { row: 0, col: 0, .. }));
    assert_eq!(
        err.to_string(),
        "cell (0, 0) holds 'C' but a crossing word needs 'D'"
    );
}
