//! Interactive menu: the numbered 1-5 loop, `x` to exit.
//!
//! Reads from any `BufRead` and writes to any `Write` so the loop can be
//! driven from tests. Prompts and results go straight to the writer; only
//! diagnostics from the database layer pass through the logger.

use std::io::{BufRead, Write};

use movielens_db::{objects, Connection};

use super::detail::{detail_lines, NO_SUCH_MOVIE};
use super::review::{add_review_message, valid_rating};
use super::search::search_lines;
use super::stats::stats_lines;
use super::tagline::set_tagline_message;
use super::top::{positive, top_lines};
use super::parse_int;
use crate::CliError;

const COMMAND_PROMPT: &str = "Please enter a command (1-5, x to exit): ";

struct Menu<'a, R, W> {
    conn: &'a Connection,
    input: R,
    out: W,
}

pub(crate) fn run_menu<R: BufRead, W: Write>(
    conn: &Connection,
    input: R,
    out: W,
) -> Result<(), CliError> {
    let mut menu = Menu { conn, input, out };
    menu.run()
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    fn run(&mut self) -> Result<(), CliError> {
        writeln!(self.out, "** Welcome to the MovieLens app **")?;
        writeln!(self.out)?;
        self.lines(&stats_lines(self.conn))?;
        writeln!(self.out)?;

        // End of input behaves like `x`.
        while let Some(cmd) = self.prompt(COMMAND_PROMPT)? {
            match cmd.trim() {
                "x" => break,
                "1" => self.search()?,
                "2" => self.detail()?,
                "3" => self.top()?,
                "4" => self.review()?,
                "5" => self.tagline()?,
                _ => writeln!(self.out, "**Error, unknown command, try again...")?,
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Show a prompt and read one line without its line ending.
    /// `None` means the input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, CliError> {
        write!(self.out, "{text}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prompt, treating end of input as an empty answer.
    fn ask(&mut self, text: &str) -> Result<String, CliError> {
        Ok(self.prompt(text)?.unwrap_or_default())
    }

    fn lines(&mut self, lines: &[String]) -> Result<(), CliError> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    /// Print a rejected-input message; the loop carries on.
    fn reject(&mut self, err: CliError) -> Result<(), CliError> {
        writeln!(self.out, "{err}")?;
        Ok(())
    }

    fn search(&mut self) -> Result<(), CliError> {
        writeln!(self.out)?;
        let pattern = self.ask("Enter movie name (wildcards _ and % supported): ")?;
        writeln!(self.out)?;
        let movies = objects::get_movies(self.conn, &pattern);
        self.lines(&search_lines(&movies))
    }

    fn detail(&mut self) -> Result<(), CliError> {
        writeln!(self.out)?;
        let id = self.ask("Enter movie id: ")?;
        writeln!(self.out)?;
        // An id that isn't a number can't match any movie.
        let detail = parse_int(&id).and_then(|id| objects::get_movie_details(self.conn, id));
        self.lines(&detail_lines(detail.as_ref()))
    }

    fn top(&mut self) -> Result<(), CliError> {
        writeln!(self.out)?;
        let n = self.ask("N? ")?;
        let n = match positive(parse_int(&n), "N") {
            Ok(n) => n,
            Err(e) => return self.reject(e),
        };
        let min = self.ask("min number of reviews? ")?;
        let min = match positive(parse_int(&min), "min number of reviews") {
            Ok(min) => min,
            Err(e) => return self.reject(e),
        };
        writeln!(self.out)?;
        let movies = objects::get_top_n_movies(self.conn, n, min);
        self.lines(&top_lines(&movies))
    }

    fn review(&mut self) -> Result<(), CliError> {
        writeln!(self.out)?;
        let rating = self.ask("Enter rating (0..10): ")?;
        let rating = match valid_rating(parse_int(&rating)) {
            Ok(r) => r,
            Err(e) => return self.reject(e),
        };
        let id = self.ask("Enter movie id: ")?;
        writeln!(self.out)?;
        let msg = match parse_int(&id) {
            Some(id) => add_review_message(self.conn, id, rating),
            None => NO_SUCH_MOVIE,
        };
        writeln!(self.out, "{msg}")?;
        Ok(())
    }

    fn tagline(&mut self) -> Result<(), CliError> {
        writeln!(self.out)?;
        let tagline = self.ask("tagline? ")?;
        let id = self.ask("movie id? ")?;
        writeln!(self.out)?;
        let msg = match parse_int(&id) {
            Some(id) => set_tagline_message(self.conn, id, &tagline),
            None => NO_SUCH_MOVIE,
        };
        writeln!(self.out, "{msg}")?;
        Ok(())
    }
}
