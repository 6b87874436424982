//! The interactive menu loop.
//!
//! The session is generic over its input and output so a whole run can be
//! driven from a byte slice in tests. It is the only place that prompts or
//! prints; everything it shows comes from a `CmdResult`.

mod menu;
mod print;
mod prompt;

use bookshelf::api::{CmdMessage, CmdResult, LibraryApi};
use bookshelf::commands::add::{parse_read_status, parse_year};
use bookshelf::commands::search::parse_field;
use bookshelf::error::{LibraryError, Result};
use bookshelf::model::Book;
use bookshelf::store::LibraryStore;
use menu::{MenuChoice, MENU};
use print::{print_books, print_candidates, print_messages, print_stats};
use prompt::Terminal;
use std::io::{BufRead, Write};

pub(crate) struct Session<S: LibraryStore, R, W> {
    api: LibraryApi<S>,
    opened: CmdResult,
    term: Terminal<R, W>,
}

impl<S: LibraryStore, R: BufRead, W: Write> Session<S, R, W> {
    /// Loads the library from `store`; nothing is printed until [`run`](Self::run).
    pub(crate) fn new(store: S, input: R, output: W) -> Self {
        let (api, opened) = LibraryApi::open(store);
        Self {
            api,
            opened,
            term: Terminal::new(input, output),
        }
    }

    /// Runs menu cycles until the user exits (saving) or input ends (not saving).
    pub(crate) fn run(&mut self) -> Result<()> {
        print_messages(self.term.out(), &self.opened.messages)?;

        match self.menu_loop() {
            Err(LibraryError::InputClosed) => {
                log::debug!("Input closed, leaving without saving");
                Ok(())
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let answer = self.term.ask("Enter your choice: ")?;

            let choice = match answer.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(LibraryError::InvalidInput(msg)) => {
                    self.show(&CmdResult::default().with_message(CmdMessage::error(msg)))?;
                    continue;
                }
                Err(e) => return Err(e),
            };
            log::debug!("Menu choice: {:?}", choice);

            match choice {
                MenuChoice::Add => self.add()?,
                MenuChoice::Remove => self.remove()?,
                MenuChoice::Search => self.search()?,
                MenuChoice::List => self.list()?,
                MenuChoice::Stats => self.stats()?,
                MenuChoice::Exit => {
                    let result = self.api.save()?;
                    return self.show(&result);
                }
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        let out = self.term.out();
        writeln!(out)?;
        for line in MENU {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    fn show(&mut self, result: &CmdResult) -> Result<()> {
        print_messages(self.term.out(), &result.messages)?;
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        let title = self.term.ask("Enter the book title: ")?;
        let author = self.term.ask("Enter the author: ")?;
        let year = self
            .term
            .ask_until("Enter the publication year: ", parse_year)?;
        let genre = self.term.ask("Enter the genre: ")?;
        let read = self
            .term
            .ask_until("Have you read this book? (yes/no): ", parse_read_status)?;

        let result = self
            .api
            .add_book(Book::new(title, author, year, genre, read))?;
        self.show(&result)
    }

    fn remove(&mut self) -> Result<()> {
        let title = self.term.ask("Enter the title of the book to remove: ")?;
        let result = self.api.remove_book(&title)?;
        self.show(&result)?;

        if !result.needs_choice() {
            return Ok(());
        }

        print_candidates(self.term.out(), &result.candidates)?;
        let choice = self.term.ask("Enter the number of the book to remove: ")?;
        let chosen = self.api.choose_removal(&result.candidates, &choice)?;
        self.show(&chosen)
    }

    fn search(&mut self) -> Result<()> {
        let out = self.term.out();
        writeln!(out, "Search by:")?;
        writeln!(out, "1. Title")?;
        writeln!(out, "2. Author")?;

        let answer = self.term.ask("Enter your choice: ")?;
        let field = match parse_field(&answer) {
            Ok(field) => field,
            Err(LibraryError::InvalidInput(msg)) => {
                return self.show(&CmdResult::default().with_message(CmdMessage::error(msg)));
            }
            Err(e) => return Err(e),
        };

        let term = self.term.ask("Enter the search term: ")?;
        let result = self.api.search_books(field, &term)?;
        if !result.listed_books.is_empty() {
            print_books(self.term.out(), "Matching Books:", &result.listed_books)?;
        }
        self.show(&result)
    }

    fn list(&mut self) -> Result<()> {
        let result = self.api.list_books()?;
        if !result.listed_books.is_empty() {
            let out = self.term.out();
            writeln!(out)?;
            print_books(out, "Your Library:", &result.listed_books)?;
        }
        self.show(&result)
    }

    fn stats(&mut self) -> Result<()> {
        let result = self.api.stats()?;
        if let Some(stats) = &result.stats {
            print_stats(self.term.out(), stats)?;
        }
        self.show(&result)
    }
}

#[cfg(test)]
impl<S: LibraryStore, R: BufRead> Session<S, R, Vec<u8>> {
    fn finish(self) -> (LibraryApi<S>, String) {
        let output = String::from_utf8_lossy(&self.term.into_output()).into_owned();
        (self.api, output)
    }
}
