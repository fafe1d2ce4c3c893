//! Input handling for the interactive loop.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(usize),
    Refresh,
    NextPage,
    PreviousPage,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if let Ok(n) = line.parse::<usize>() {
            return Some(Command::Open(n));
        }
        Some(match line.to_ascii_lowercase().as_str() {
            "r" | "refresh" => Command::Refresh,
            "n" | "next" => Command::NextPage,
            "p" | "prev" | "previous" => Command::PreviousPage,
            "h" | "?" | "help" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("3"), Some(Command::Open(3)));
        assert_eq!(Command::parse(" R \n"), Some(Command::Refresh));
        assert_eq!(Command::parse("next"), Some(Command::NextPage));
        assert_eq!(Command::parse("p"), Some(Command::PreviousPage));
        assert_eq!(Command::parse("?"), Some(Command::Help));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
        assert_eq!(Command::parse("   "), None);
        assert_eq!(Command::parse("-1"), Some(Command::Unknown("-1".to_string())));
    }
}
