//! Command module
//!
//! Describes and parses the choices available at the travel menu.

/// Commands the player can issue at the travel menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 1-based exit selection, already range-checked against the menu.
    Move(usize),
    Inventory,
    Quit,
    Unknown,
}

/// Parse one line of menu input against a menu of `exit_count` exits.
///
/// The single-letter commands match case-insensitively. A numeric choice
/// must parse as an integer and satisfy `1 <= choice <= exit_count`;
/// anything else, including empty input, is `Unknown`.
pub fn parse_command(input: &str, exit_count: usize) -> Command {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("i") {
        return Command::Inventory;
    }
    if trimmed.eq_ignore_ascii_case("q") {
        return Command::Quit;
    }
    if let Ok(choice) = trimmed.parse::<i64>()
        && choice >= 1
        && let Ok(choice) = usize::try_from(choice)
        && choice <= exit_count
    {
        return Command::Move(choice);
    }
    Command::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_in_range_move() {
        assert_eq!(parse_command("1", 3), Command::Move(1));
        assert_eq!(parse_command(" 3 ", 3), Command::Move(3));
    }

    #[test]
    fn numbers_out_of_range_are_unknown() {
        assert_eq!(parse_command("0", 3), Command::Unknown);
        assert_eq!(parse_command("4", 3), Command::Unknown);
        assert_eq!(parse_command("-2", 3), Command::Unknown);
        assert_eq!(parse_command("1", 0), Command::Unknown);
    }

    #[test]
    fn letters_match_case_insensitively() {
        assert_eq!(parse_command("i", 3), Command::Inventory);
        assert_eq!(parse_command("I", 3), Command::Inventory);
        assert_eq!(parse_command("q", 3), Command::Quit);
        assert_eq!(parse_command("Q", 3), Command::Quit);
        assert_eq!(parse_command("  q  ", 3), Command::Quit);
    }

    #[test]
    fn junk_is_unknown() {
        assert_eq!(parse_command("", 3), Command::Unknown);
        assert_eq!(parse_command("   ", 3), Command::Unknown);
        assert_eq!(parse_command("go north", 3), Command::Unknown);
        assert_eq!(parse_command("1.5", 3), Command::Unknown);
        assert_eq!(parse_command("one", 3), Command::Unknown);
        assert_eq!(parse_command("qq", 3), Command::Unknown);
    }
}
