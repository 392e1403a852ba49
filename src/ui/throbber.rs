//! Spinner shown while the game-over comment is being fetched.

/// Braille spinner characters.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Spinner frame for `now_ms`; advances every 100ms, a full turn per second.
pub fn spinner_char(now_ms: f64) -> char {
    let step = (now_ms.max(0.0) / 100.0) as usize;
    SPINNER[step % SPINNER.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_advances_every_100ms() {
        assert_eq!(spinner_char(0.0), '⠋');
        assert_eq!(spinner_char(99.0), '⠋');
        assert_eq!(spinner_char(100.0), '⠙');
        assert_eq!(spinner_char(1000.0), '⠋');
    }
}
