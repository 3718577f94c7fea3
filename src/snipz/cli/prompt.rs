use snipz::error::Result;
use std::io::{self, BufRead, Write};

/// Prints `prompt` on stderr and reads one trimmed line from stdin.
/// End of input reads as an empty line.
pub fn read_line(prompt: &str) -> Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{}", prompt)?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Asks a yes/no question; anything but `y`/`yes` is a no.
pub fn confirm(question: &str) -> Result<bool> {
    let answer = read_line(&format!("{} [y/n] ", question))?;
    Ok(is_yes(&answer))
}

/// Reads a value, falling back to `default` on an empty answer.
pub fn read_with_default(question: &str, default: &str) -> Result<String> {
    let answer = read_line(&format!("{} [{}]: ", question, default))?;
    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer
    })
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
