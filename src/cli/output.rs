use colored::*;
use std::io::{self, Write};
use std::path::Path;

pub fn print_candidates(
    out: &mut impl Write,
    word: &str,
    candidates: &[String],
    colored: bool,
) -> io::Result<()> {
    if colored {
        writeln!(out, "{} '{}'", "Misspelled word:".yellow().bold(), word.red().bold())?;
    } else {
        writeln!(out, "Misspelled word: '{}'", word)?;
    }

    for (i, candidate) in candidates.iter().enumerate() {
        if colored {
            writeln!(out, "{}: {}", (i + 1).to_string().blue(), candidate.green())?;
        } else {
            writeln!(out, "{}: {}", i + 1, candidate)?;
        }
    }

    Ok(())
}

pub fn print_choice_prompt(
    out: &mut impl Write,
    word: &str,
    count: usize,
    colored: bool,
) -> io::Result<()> {
    let word = if colored {
        word.bold().to_string()
    } else {
        word.to_string()
    };
    write!(out, "Choose the correct word for '{}' (1-{}): ", word, count)?;
    out.flush()
}

pub fn print_invalid_input(out: &mut impl Write, colored: bool) -> io::Result<()> {
    let message = "Invalid input. Please enter a number.";
    if colored {
        writeln!(out, "{}", message.yellow())
    } else {
        writeln!(out, "{}", message)
    }
}

pub fn print_invalid_choice(out: &mut impl Write, colored: bool) -> io::Result<()> {
    let message = "Invalid choice. Please try again.";
    if colored {
        writeln!(out, "{}", message.yellow())
    } else {
        writeln!(out, "{}", message)
    }
}

pub fn print_no_suggestions(out: &mut impl Write, word: &str, colored: bool) -> io::Result<()> {
    if colored {
        writeln!(
            out,
            "{}",
            format!("No suggestions for '{}', keeping original.", word).dimmed()
        )
    } else {
        writeln!(out, "No suggestions for '{}', keeping original.", word)
    }
}

pub fn print_saved(output: &Path, colored: bool) {
    let message = format!("Corrected text saved to '{}'.", output.display());
    if colored {
        println!("{}", message.green().bold());
    } else {
        println!("{}", message);
    }
}
