//! Split a line into tokens, keeping quoted spans whole.

use fit_core::errors::SyntaxError;

const QUOTE: char = '"';

/// Split `line` on whitespace outside double quotes.
///
/// Quote characters stay part of the token they delimit; unquoting is the
/// value inferencer's job. A quote inside a token toggles quoting without
/// ending the token, so `name="a b"` is a single token.
///
/// # Errors
///
/// [`SyntaxError::EmptyInput`] for a blank line and
/// [`SyntaxError::UnclosedQuotes`] when the line ends inside quotes.
pub fn tokenize(line: &str) -> Result<Vec<String>, SyntaxError> {
    if line.trim().is_empty() {
        return Err(SyntaxError::EmptyInput);
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == QUOTE {
            in_quotes = !in_quotes;
            current.push(ch);
        } else if ch.is_whitespace() && !in_quotes {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(ch);
        }
    }

    if in_quotes {
        return Err(SyntaxError::UnclosedQuotes);
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_spaces() {
        assert_eq!(
            tokenize("Workout date 2025.12.15 duration 01:30").unwrap(),
            vec!["Workout", "date", "2025.12.15", "duration", "01:30"]
        );
    }

    #[test]
    fn collapses_repeated_whitespace() {
        assert_eq!(
            tokenize("  Exercise   sets\t4  ").unwrap(),
            vec!["Exercise", "sets", "4"]
        );
    }

    #[test]
    fn keeps_quoted_spaces_and_quotes() {
        assert_eq!(
            tokenize(r#"UserProfile goal "набор массы" age 30"#).unwrap(),
            vec!["UserProfile", "goal", "\"набор массы\"", "age", "30"]
        );
    }

    #[test]
    fn empty_quotes_are_a_token() {
        assert_eq!(tokenize(r#"Exercise notes """#).unwrap(), vec!["Exercise", "notes", "\"\""]);
    }

    #[test]
    fn blank_line_is_empty_input() {
        assert_eq!(tokenize(""), Err(SyntaxError::EmptyInput));
        assert_eq!(tokenize("   \t "), Err(SyntaxError::EmptyInput));
    }

    #[test]
    fn unclosed_quote_is_rejected() {
        assert_eq!(
            tokenize(r#"UserProfile gender "мужской"#),
            Err(SyntaxError::UnclosedQuotes)
        );
    }
}
