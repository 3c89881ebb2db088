#[cfg(test)]
pub mod test {
    use anyhow::Result;

    use crate::board::{Board, Cell};
    use crate::engine::Engine;
    use crate::eval::{evaluate, WIN};
    use crate::player::{Player, SearchPlayer};

    #[test]
    pub fn opening_move_is_legal() {
        let board = Board::new();
        let mut engine = Engine::new();

        let column = engine.select_move(&board);
        assert!(board.validate_column(column).is_ok());
        println!(
            "Opening search: column {}, {} positions",
            column, engine.node_count
        );
    }

    #[test]
    pub fn takes_the_winning_column() -> Result<()> {
        let board: Board = "0000000\n\
                            0000000\n\
                            0000000\n\
                            0000000\n\
                            0000000\n\
                            1110000"
            .parse()?;

        assert_eq!(Engine::new().select_move(&board), 3);
        Ok(())
    }

    #[test]
    pub fn blocks_an_immediate_loss() -> Result<()> {
        // every column but 3 hands player two the game next turn
        let board: Board = "0000000\n\
                            0000000\n\
                            0000000\n\
                            0000000\n\
                            0000000\n\
                            2220000"
            .parse()?;

        assert_eq!(Engine::new().select_move(&board), 3);
        Ok(())
    }

    #[test]
    pub fn full_columns_are_never_chosen() -> Result<()> {
        // every column except 5 is packed, and nobody has won yet
        let board: Board = "2211202\n\
                            1122101\n\
                            2211202\n\
                            1122101\n\
                            2211202\n\
                            1122101"
            .parse()?;
        assert!(evaluate(&board).abs() < WIN);

        assert_eq!(Engine::new().select_move(&board), 5);
        Ok(())
    }

    #[test]
    pub fn move_selection_is_deterministic() -> Result<()> {
        for moves in ["", "334", "3302614"] {
            let board = Board::from_moves(moves)?;

            let mut engine = Engine::new();
            let first = engine.select_move(&board);
            assert_eq!(engine.select_move(&board), first);
            assert_eq!(Engine::new().select_move(&board), first);
        }
        Ok(())
    }

    #[test]
    pub fn parallel_search_matches_at_full_depth() -> Result<()> {
        for moves in ["", "33", "330142"] {
            let board = Board::from_moves(moves)?;
            let sequential = Engine::new().select_move(&board);
            let parallel = Engine::new().select_move_parallel(&board);
            assert_eq!(sequential, parallel, "moves {:?}", moves);
        }
        Ok(())
    }

    #[test]
    pub fn self_play_reaches_a_verdict() -> Result<()> {
        let mut board = Board::new();
        let mut one = SearchPlayer::new(Cell::PlayerOne);
        let mut two = SearchPlayer::new(Cell::PlayerTwo);

        let mut to_play = Cell::PlayerOne;
        let mut moves = 0;
        while evaluate(&board).abs() < WIN && !board.is_complete() {
            assert!(moves < 42, "game did not finish on a full board");

            let column = match to_play {
                Cell::PlayerOne => one.next_move(&board)?,
                _ => two.next_move(&board)?,
            };
            board.play_checked(column, to_play)?;
            to_play = to_play.opponent();
            moves += 1;
        }

        let verdict = match evaluate(&board) {
            v if v >= WIN => "player one wins",
            v if v <= -WIN => "player two wins",
            _ => "draw",
        };
        println!("Self-play: {} after {} moves", verdict, moves);
        Ok(())
    }
}
