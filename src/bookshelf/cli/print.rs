use bookshelf::api::{CmdMessage, LibraryStats, MessageLevel};
use bookshelf::commands::DisplayBook;
use colored::Colorize;
use std::io::{self, Write};

pub(crate) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content)?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// `1. Dune by Frank Herbert (1965)`
pub(crate) fn book_summary(dp: &DisplayBook) -> String {
    format!(
        "{}. {} by {} ({})",
        dp.index, dp.book.title, dp.book.author, dp.book.publication_year
    )
}

pub(crate) fn print_books<W: Write>(
    out: &mut W,
    header: &str,
    books: &[DisplayBook],
) -> io::Result<()> {
    writeln!(out, "{}", header.bold())?;
    for dp in books {
        let label = if dp.book.read_status {
            dp.book.read_label().green()
        } else {
            dp.book.read_label().dimmed()
        };
        writeln!(out, "{} - {} - {}", book_summary(dp), dp.book.genre, label)?;
    }
    Ok(())
}

pub(crate) fn print_candidates<W: Write>(out: &mut W, books: &[DisplayBook]) -> io::Result<()> {
    for dp in books {
        writeln!(out, "{}", book_summary(dp))?;
    }
    Ok(())
}

pub(crate) fn print_stats<W: Write>(out: &mut W, stats: &LibraryStats) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Total books: {}", stats.total)?;
    writeln!(out, "Percentage read: {}%", stats.percent_read_display())
}
