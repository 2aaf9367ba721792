//! Interactive console game loop
//!
//! Line-based play: one prompt per turn, an empty line requests a hint.
//! Game events are reported through `tracing`; user-facing text goes to
//! stdout.

use crate::game::{GameError, Session};
use crate::output::{colorize_guess, verdict_markers};
use crate::wordlists::Dictionary;
use anyhow::Result;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Run the interactive game, offering a new round after each finished one
///
/// When `seed` is given the first round is reproducible; later rounds draw
/// from the OS.
///
/// # Errors
///
/// Returns an error if the dictionary is empty or reading user input fails.
pub fn run_play(dictionary: &Arc<Dictionary>, seed: Option<u64>) -> Result<()> {
    println!("\nДобро пожаловать в Wordle!");
    println!("У вас 6 попыток отгадать слово из 5 букв");
    println!("Символы: + - правильная позиция, ^ - буква есть, но не на месте, - - буквы нет");
    println!("Для подсказки нажмите Enter без ввода слова");

    let mut seed = seed;
    loop {
        let session = match seed.take() {
            Some(s) => Session::with_rng(Arc::clone(dictionary), StdRng::seed_from_u64(s))?,
            None => Session::new(Arc::clone(dictionary))?,
        };

        if !play_round(session)? {
            return Ok(());
        }

        let answer = prompt("\nСыграть ещё раз? (да/нет)")?;
        match answer.as_deref().map(str::to_lowercase).as_deref() {
            Some("да" | "д" | "yes" | "y") => {}
            _ => {
                println!("\nДо встречи!");
                return Ok(());
            }
        }
    }
}

/// Play one session to its end; returns `false` when stdin closed mid-round
fn play_round(mut session: Session) -> Result<bool> {
    debug!(secret = %session.secret(), "secret chosen");

    while !session.is_terminal() {
        println!("\nПопыток осталось: {}", session.remaining_attempts());
        let Some(input) = prompt(">")? else {
            println!("\nВвод завершён, игра прервана");
            info!("input closed, round abandoned");
            return Ok(false);
        };

        if input.is_empty() {
            serve_hint(&mut session);
            continue;
        }

        match session.submit_attempt(&input) {
            Ok(attempt) => {
                let won = attempt.is_winning();
                println!("> {}", colorize_guess(attempt.word(), attempt.verdicts()));
                println!("> {}", verdict_markers(attempt.verdicts()));

                if won {
                    println!("\n{}", "Поздравляем! Вы угадали слово!".green().bold());
                    info!(word = %attempt.word(), attempts = session.history().len(), "round won");
                }
            }
            Err(GameError::InvalidLength(len)) => {
                println!("X Слово должно содержать 5 букв (введено {len})");
                warn!(%input, len, "input of wrong length");
            }
            Err(GameError::WordNotFound(word)) => {
                println!("X Слово не найдено в словаре: {word}");
                warn!(%word, "word not in dictionary");
            }
            // Unreachable behind the loop guard, but a terminal session
            // must never be replayed silently.
            Err(err) => return Err(err.into()),
        }
    }

    if !session.is_won() {
        println!(
            "\nИгра окончена! Загаданное слово: {}",
            session.secret().text().bold()
        );
        info!(secret = %session.secret(), "round lost");
    }

    Ok(true)
}

fn serve_hint(session: &mut Session) {
    match session.request_hint() {
        Some(hint) => {
            println!("Подсказка: {hint}");
            info!(%hint, "hint served");
        }
        None => {
            println!("Подсказки недоступны");
            info!("no hint available");
        }
    }
}

/// Read one trimmed line from stdin after printing a prompt
///
/// Returns `None` once stdin is exhausted, so a piped or closed input ends
/// the game instead of looping.
fn prompt(text: &str) -> io::Result<Option<String>> {
    print!("{text} ");
    io::stdout().flush()?;
    read_trimmed_line(&mut io::stdin().lock())
}

/// Read one line, trimmed; `None` on a zero-byte read (end of input)
fn read_trimmed_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
