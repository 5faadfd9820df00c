use std::io::{self, BufRead};

use sudoku_solver::Sudoku;

fn main() {
    env_logger::init();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::error!("failed to read stdin: {}", err);
                std::process::exit(1);
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match Sudoku::from_str_line(line) {
            Ok(sudoku) => match sudoku.solve() {
                Ok(solution) => println!("{}", solution.to_str_line()),
                Err(err) => println!("{}", err),
            },
            Err(err) => println!("{}", err),
        }
    }
}
