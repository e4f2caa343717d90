//! Whole-game scenarios driven through `GameSession`.

use connect_four::{GameSession, Mark, Outcome};

/// Fills all 42 cells with no line of four for either mark.
///
/// Column 0 is filled first with strictly alternating drops; the remaining
/// columns are filled in pairs so that every column ends up holding three
/// pieces of each mark and no row or diagonal ever carries a run of four.
const DRAWN_GAME: [usize; 42] = [
    0, 0, 0, 0, 0, 0, // column 0, alternating from red
    1, 2, 2, 1, 1, 2, 2, 1, 1, 2, 2, 1, // columns 1 and 2
    4, 3, 3, 4, 4, 3, 3, 4, 4, 3, 3, 4, // columns 4 and 3
    5, 6, 6, 5, 5, 6, 6, 5, 5, 6, 6, 5, // columns 5 and 6
];

#[test]
fn drawn_game_ends_on_the_last_cell() {
    let mut session = GameSession::new(Mark::Red, Mark::Yellow);

    let (last, opening) = DRAWN_GAME.split_last().unwrap();
    for (turn, &column) in opening.iter().enumerate() {
        assert_eq!(
            session.play_turn(column),
            Outcome::Continue,
            "unexpected outcome on turn {turn} in column {column}"
        );
    }

    assert_eq!(session.play_turn(*last), Outcome::Draw);
    assert!(session.board().is_full());
    // The drawing player stays active after the terminal outcome
    assert_eq!(session.current_mark(), Mark::Yellow);
}

#[test]
fn drawn_game_leaves_three_of_each_mark_per_column() {
    let mut session = GameSession::new(Mark::Red, Mark::Yellow);
    for &column in &DRAWN_GAME {
        assert_ne!(session.play_turn(column), Outcome::Invalid);
    }

    for column in session.board().grid() {
        let reds = column.iter().filter(|&&c| c == Some(Mark::Red)).count();
        assert_eq!(reds, 3);
    }
}

#[test]
fn red_wins_a_full_game_horizontally() {
    let mut session = GameSession::new(Mark::Red, Mark::Yellow);

    for column in 0..3 {
        assert_eq!(session.play_turn(column), Outcome::Continue); // red
        assert_eq!(session.play_turn(column), Outcome::Continue); // yellow
    }
    assert_eq!(session.play_turn(3), Outcome::Won);

    // The winner is read off the still-active mark
    assert_eq!(session.current_mark(), Mark::Red);
}

#[test]
fn yellow_wins_a_full_game_diagonally() {
    let mut session = GameSession::new(Mark::Red, Mark::Yellow);

    // Yellow climbs a staircase from (1, bottom) to (4, row 2) while red
    // stacks the supports in columns 2-4
    let moves = [2, 1, 3, 2, 4, 3, 4, 3, 4];
    for column in moves {
        assert_eq!(session.play_turn(column), Outcome::Continue);
    }

    assert_eq!(session.play_turn(4), Outcome::Won);
    assert_eq!(session.current_mark(), Mark::Yellow);
}

#[test]
fn rejected_moves_never_change_the_board() {
    let mut session = GameSession::new(Mark::Red, Mark::Yellow);

    for _ in 0..3 {
        session.play_turn(2);
        session.play_turn(2);
    }
    let snapshot = session.board().clone();
    let mark = session.current_mark();

    assert_eq!(session.play_turn(2), Outcome::Invalid); // full column
    assert_eq!(session.play_turn(42), Outcome::Invalid); // out of range
    assert_eq!(session.board(), &snapshot);
    assert_eq!(session.current_mark(), mark);
}
