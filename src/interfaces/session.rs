use crate::interfaces::form::TipForm;

/// A single line of input in an interactive session.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SessionCommand {
    Bill(String),
    Tip(String),
    RoundUp(bool),
    ToggleRoundUp,
    Reset,
    Quit,
}

impl SessionCommand {
    /// Parses one line. Blank lines give `None`; unknown commands, and `round`
    /// with anything but `on`, `off` or `toggle`, give the line back as an
    /// error.
    pub fn parse(line: &str) -> Option<Result<Self, String>> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (word, arg) = match line.split_once(char::is_whitespace) {
            Some((word, arg)) => (word, arg.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "bill" => Self::Bill(arg.to_string()),
            "tip" => Self::Tip(arg.to_string()),
            "round" => match arg.to_ascii_lowercase().as_str() {
                "on" => Self::RoundUp(true),
                "off" => Self::RoundUp(false),
                "toggle" => Self::ToggleRoundUp,
                _ => return Some(Err(line.to_string())),
            },
            "reset" => Self::Reset,
            "quit" | "exit" => Self::Quit,
            _ => return Some(Err(line.to_string())),
        };
        Some(Ok(command))
    }

    /// Applies the command to the form. Returns `false` once the session
    /// should end.
    pub fn apply(self, form: &mut TipForm) -> bool {
        match self {
            Self::Bill(text) => form.set_bill(text),
            Self::Tip(text) => form.set_tip(text),
            Self::RoundUp(round_up) => form.set_round_up(round_up),
            Self::ToggleRoundUp => form.toggle_round_up(),
            Self::Reset => form.reset(),
            Self::Quit => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            SessionCommand::parse("bill 10.50"),
            Some(Ok(SessionCommand::Bill("10.50".into())))
        );
        assert_eq!(
            SessionCommand::parse("  TIP   18 "),
            Some(Ok(SessionCommand::Tip("18".into())))
        );
        assert_eq!(SessionCommand::parse("bill"), Some(Ok(SessionCommand::Bill(String::new()))));
        assert_eq!(SessionCommand::parse("round on"), Some(Ok(SessionCommand::RoundUp(true))));
        assert_eq!(SessionCommand::parse("round off"), Some(Ok(SessionCommand::RoundUp(false))));
        assert_eq!(SessionCommand::parse("round Toggle"), Some(Ok(SessionCommand::ToggleRoundUp)));
        assert_eq!(SessionCommand::parse("reset"), Some(Ok(SessionCommand::Reset)));
        assert_eq!(SessionCommand::parse("exit"), Some(Ok(SessionCommand::Quit)));
    }

    #[test]
    fn test_blank_and_unknown_lines() {
        assert_eq!(SessionCommand::parse(""), None);
        assert_eq!(SessionCommand::parse("   "), None);
        assert_eq!(SessionCommand::parse("split 3"), Some(Err("split 3".into())));
    }

    #[test]
    fn test_round_only_takes_on_off_toggle() {
        assert_eq!(SessionCommand::parse("round ON"), Some(Ok(SessionCommand::RoundUp(true))));
        for line in ["round", "round maybe", "round yes", "round 1"] {
            assert_eq!(SessionCommand::parse(line), Some(Err(line.to_string())));
        }
    }

    #[test]
    fn test_apply_updates_form() {
        let mut form = TipForm::new();
        assert!(SessionCommand::RoundUp(true).apply(&mut form));
        assert!(form.round_up());

        assert!(SessionCommand::ToggleRoundUp.apply(&mut form));
        assert!(!form.round_up());

        assert!(SessionCommand::Bill("10".into()).apply(&mut form));
        assert!(!SessionCommand::Quit.apply(&mut form));
    }
}
