use anyhow::Result;

use std::io::{stdin, stdout, Stdin, Write};

use connect_four_engine::board::{Board, Cell};
use connect_four_engine::eval::{evaluate, WIN};
use connect_four_engine::player::{ConsolePlayer, Player, RandomPlayer, SearchPlayer};

mod display;

fn choose_player(stdin: &Stdin, seat: usize, discs: Cell) -> Result<Box<dyn Player>> {
    loop {
        let mut buffer = String::new();
        print!("Is player {} (a)i, (h)uman or (r)andom? a/h/r: ", seat);
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;

        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'a') => return Ok(Box::new(SearchPlayer::new(discs))),
            Some(_letter @ 'h') => return Ok(Box::new(ConsolePlayer)),
            Some(_letter @ 'r') => return Ok(Box::new(RandomPlayer::new())),
            _ => println!("Unknown answer given"),
        }
    }
}

fn main() -> Result<()> {
    let mut board = Board::new();
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let mut player_one = choose_player(&stdin, 1, Cell::PlayerOne)?;
    let mut player_two = choose_player(&stdin, 2, Cell::PlayerTwo)?;
    println!();

    let mut to_play = Cell::PlayerOne;

    // game loop
    loop {
        display::draw(&board)?;

        // wins read off the evaluation, ahead of the packed-board draw test
        let value = evaluate(&board);
        if value >= WIN {
            println!("Player 1 wins!");
            break;
        } else if value <= -WIN {
            println!("Player 2 wins!");
            break;
        } else if board.is_complete() {
            println!("Draw!");
            break;
        }

        let (seat, player) = match to_play {
            Cell::PlayerOne => (1, &mut player_one),
            _ => (2, &mut player_two),
        };
        println!("Player {}:{}", seat, player.name());

        let column = player.next_move(&board)?;
        if let Err(err) = board.play_checked(column, to_play) {
            println!("{}", err);
            // try the turn again
            continue;
        }
        println!("Played column {}\n", column);

        to_play = to_play.opponent();
    }
    Ok(())
}
