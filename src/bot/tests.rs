use super::*;
use crate::tictactoe_position;

#[test]
fn test_difficulty_depths() {
    assert_eq!(Difficulty::Easy.search_depth(), None);
    assert_eq!(Difficulty::Medium.search_depth(), Some(2));
    assert_eq!(Difficulty::Hard.search_depth(), Some(4));
}

#[test]
fn test_difficulty_parse_and_cycle() {
    assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
    assert!("expert".parse::<Difficulty>().is_err());
    for difficulty in Difficulty::ALL.iter() {
        assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(*difficulty));
    }
    assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
    assert_eq!(Difficulty::Easy.next().next(), Difficulty::Hard);
}

#[test]
fn test_full_board_has_no_moves() {
    let board = tictactoe_position! {
        X O X
        X O O
        O X X
    };
    let mut bot = Bot::with_seed(7);
    for &difficulty in Difficulty::ALL.iter() {
        assert_eq!(
            bot.choose_move(&board, difficulty),
            Err(BotError::NoMovesAvailable)
        );
    }
}

#[test]
fn test_easy_picks_an_available_cell() {
    let board = tictactoe_position! {
        X O X
        . O .
        X . .
    };
    let available = board.available_positions();
    let mut bot = Bot::with_seed(42);
    for _ in 0..20 {
        let chosen = bot.choose_move(&board, Difficulty::Easy).unwrap();
        assert!(available.contains(&chosen));
    }
}

#[test]
fn test_easy_is_reproducible_with_seed() {
    let board = Board::new();
    let mut first = Bot::with_seed(1234);
    let mut second = Bot::with_seed(1234);
    for _ in 0..10 {
        assert_eq!(
            first.choose_move(&board, Difficulty::Easy),
            second.choose_move(&board, Difficulty::Easy)
        );
    }
}

#[test]
fn test_easy_uses_every_cell_eventually() {
    let board = Board::new();
    let mut bot = Bot::with_seed(99);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
        seen.insert(bot.choose_move(&board, Difficulty::Easy).unwrap());
    }
    assert_eq!(seen.len(), 9);
}

#[test]
fn test_hard_blocks_open_row() {
    let board = tictactoe_position! {
        . . .
        . O .
        X X .
    };
    let mut bot = Bot::with_seed(0);
    assert_eq!(
        bot.choose_move(&board, Difficulty::Hard),
        Ok(Position::new(2, 2))
    );
}

#[test]
fn test_medium_blocks_open_column() {
    let board = tictactoe_position! {
        . X .
        . X .
        O . .
    };
    let mut bot = Bot::with_seed(0);
    assert_eq!(
        bot.choose_move(&board, Difficulty::Medium),
        Ok(Position::new(2, 1))
    );
}

#[test]
fn test_search_prefers_win_over_block() {
    let board = tictactoe_position! {
        X . O
        X X O
        . . .
    };
    let mut bot = Bot::with_seed(0);
    for &difficulty in [Difficulty::Medium, Difficulty::Hard].iter() {
        assert_eq!(
            bot.choose_move(&board, difficulty),
            Ok(Position::new(2, 2))
        );
    }
}

#[test]
fn test_ties_go_to_first_cell_in_row_major_order() {
    // Nothing can be won within two plies of an empty board.
    let mut bot = Bot::with_seed(0);
    assert_eq!(
        bot.choose_move(&Board::new(), Difficulty::Medium),
        Ok(Position::new(0, 0))
    );
}

#[test]
fn test_choose_move_leaves_board_untouched() {
    let board = tictactoe_position! {
        X . .
        . O .
        . . X
    };
    let before = board.clone();
    let mut bot = Bot::with_seed(0);
    bot.choose_move(&board, Difficulty::Hard).unwrap();
    assert_eq!(board, before);
}

#[test]
fn test_search_stats_track_last_choice() {
    let mut bot = Bot::with_seed(3);
    bot.choose_move(&Board::new(), Difficulty::Hard).unwrap();
    let stats = bot.search_stats().clone();
    assert_eq!(stats.depth, Some(4));
    assert_eq!(stats.last_score, Some(0));
    assert!(stats.positions_searched > 9);
    assert!(stats.last_search_duration.is_some());

    bot.choose_move(&Board::new(), Difficulty::Easy).unwrap();
    assert_eq!(bot.search_stats(), &SearchStats::default());
}
