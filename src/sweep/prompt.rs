// Interactive confirmation prompt

use std::io::{self, BufRead, Write};

/// Ask the operator whether to remove a certificate.
///
/// Only a trimmed `y` or `Y` confirms; any other input (including EOF or a
/// read error) declines.
pub fn confirm_removal<R: BufRead>(input: &mut R) -> bool {
    print!("Do you want to revoke and delete this certificate? [y/N]: ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if input.read_line(&mut line).is_err() {
        return false;
    }
    line.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_y_and_uppercase_y() {
        assert!(confirm_removal(&mut "y\n".as_bytes()));
        assert!(confirm_removal(&mut "Y\n".as_bytes()));
        assert!(confirm_removal(&mut "  y  \n".as_bytes()));
    }

    #[test]
    fn test_declines_everything_else() {
        assert!(!confirm_removal(&mut "n\n".as_bytes()));
        assert!(!confirm_removal(&mut "yes\n".as_bytes()));
        assert!(!confirm_removal(&mut "\n".as_bytes()));
        assert!(!confirm_removal(&mut "".as_bytes()));
    }
}
