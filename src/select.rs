use std::num::IntErrorKind;

use thiserror::Error;

/// Label shown in the column picker before a real column is chosen.
pub const COLUMN_PLACEHOLDER: &str = "-- Select a column --";

/// Rejected user input. Always recoverable: the frontend asks again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Choose one of the listed columns.")]
    NoColumn,
    #[error("Enter a whole number greater than 0.")]
    NotPositive,
    #[error("Only {available} names are available.")]
    TooMany { available: usize },
}

/// Accept a column choice only if it names one of `valid`.
///
/// `None` and the placeholder label both mean nothing was picked yet.
pub fn validate_column<'a>(
    choice: Option<&str>,
    valid: &'a [String],
) -> Result<&'a str, SelectionError> {
    let choice = choice
        .filter(|c| *c != COLUMN_PLACEHOLDER)
        .ok_or(SelectionError::NoColumn)?;
    valid
        .iter()
        .find(|v| v.as_str() == choice)
        .map(String::as_str)
        .ok_or(SelectionError::NoColumn)
}

/// Parse the requested draw size, bounded by the unfiltered pool size.
pub fn parse_count(input: &str, max: usize) -> Result<usize, SelectionError> {
    let n = match input.trim().parse::<usize>() {
        Ok(0) => return Err(SelectionError::NotPositive),
        Ok(n) => n,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            return Err(SelectionError::TooMany { available: max });
        }
        Err(_) => return Err(SelectionError::NotPositive),
    };
    if n > max {
        return Err(SelectionError::TooMany { available: max });
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_not_a_column() {
        let valid = vec!["Name".to_string(), "Team".to_string()];
        assert_eq!(validate_column(Some("Team"), &valid), Ok("Team"));
        assert_eq!(validate_column(None, &valid), Err(SelectionError::NoColumn));
        assert_eq!(
            validate_column(Some(COLUMN_PLACEHOLDER), &valid),
            Err(SelectionError::NoColumn)
        );
        assert_eq!(validate_column(Some("Age"), &valid), Err(SelectionError::NoColumn));
    }

    #[test]
    fn counts_are_bounded() {
        assert_eq!(parse_count("3", 4), Ok(3));
        assert_eq!(parse_count(" 4 ", 4), Ok(4));
        assert_eq!(parse_count("+2", 4), Ok(2));
        assert_eq!(parse_count("5", 4), Err(SelectionError::TooMany { available: 4 }));
        assert_eq!(
            parse_count("99999999999999999999", 4),
            Err(SelectionError::TooMany { available: 4 })
        );
    }

    #[test]
    fn non_positive_and_garbage_are_rejected() {
        for input in ["0", "-1", "two", "2.5", ""] {
            assert_eq!(parse_count(input, 10), Err(SelectionError::NotPositive), "{input:?}");
        }
    }
}
