//! Terminal output formatting for search hits

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::index::Hit;

/// Print search hits, one per line: the character, its code point, its name.
pub fn print_hits(hits: &[Hit], color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    for hit in hits {
        stdout.set_color(ColorSpec::new().set_bold(true))?;
        write!(stdout, "{}", hit.ch)?;
        stdout.reset()?;

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "\tU+{:04X}\t", hit.ch as u32)?;
        stdout.reset()?;

        writeln!(stdout, "{}", hit.name)?;
    }

    Ok(())
}

/// Print search hits as a JSON array (the same shape the HTTP front end
/// serves).
pub fn print_hits_json(hits: &[Hit]) -> io::Result<()> {
    let json = serde_json::to_string(hits)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}
