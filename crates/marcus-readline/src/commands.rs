//! Parsing of typed lines into REPL intents.

/// Everything a typed line can mean. Which commands are accepted depends on
/// the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Free text: a name, a line of the situation draft, or a debate message.
    Text(String),
    /// `/lang` lists the languages; `/lang CODE` switches.
    Language(Option<String>),
    Image(String),
    DropImage,
    Analyze,
    WorstCase,
    Debate,
    Done,
    End,
    Help,
    Quit,
    /// A known command used without its required argument.
    Usage(&'static str),
    Unknown(String),
}

/// Completion candidates, in help order.
pub const COMMANDS: [&str; 10] = [
    "/lang", "/image", "/drop-image", "/analyze", "/worst", "/debate", "/done", "/end", "/help",
    "/quit",
];

/// Parses one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed.starts_with('/') {
        return Some(Command::Text(trimmed.to_string()));
    }

    let (name, argument) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, Some(rest.trim()).filter(|rest| !rest.is_empty())),
        None => (trimmed, None),
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "/lang" => Command::Language(argument.map(str::to_string)),
        "/image" => match argument {
            Some(path) => Command::Image(path.to_string()),
            None => Command::Usage("/image <PATH>"),
        },
        "/drop-image" => Command::DropImage,
        "/analyze" => Command::Analyze,
        "/worst" => Command::WorstCase,
        "/debate" => Command::Debate,
        "/done" => Command::Done,
        "/end" => Command::End,
        "/help" => Command::Help,
        "/quit" | "/exit" => Command::Quit,
        _ => Command::Unknown(name.to_string()),
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_ignored() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \t"), None);
    }

    #[test]
    fn test_text_is_trimmed() {
        assert_eq!(
            parse_line("  my boss shouted at me  "),
            Some(Command::Text("my boss shouted at me".into()))
        );
    }

    #[test]
    fn test_lang_with_and_without_code() {
        assert_eq!(parse_line("/lang"), Some(Command::Language(None)));
        assert_eq!(
            parse_line("/lang  en "),
            Some(Command::Language(Some("en".into())))
        );
    }

    #[test]
    fn test_image_requires_path() {
        assert_eq!(parse_line("/image"), Some(Command::Usage("/image <PATH>")));
        assert_eq!(
            parse_line("/image ~/photos/storm day.jpg"),
            Some(Command::Image("~/photos/storm day.jpg".into()))
        );
    }

    #[test]
    fn test_commands_are_case_insensitive() {
        assert_eq!(parse_line("/ANALYZE"), Some(Command::Analyze));
        assert_eq!(parse_line("/Worst"), Some(Command::WorstCase));
        assert_eq!(parse_line("/exit"), Some(Command::Quit));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_line("/dance now"),
            Some(Command::Unknown("/dance".into()))
        );
    }

    #[test]
    fn test_every_listed_command_parses() {
        for command in COMMANDS {
            let parsed = parse_line(command).unwrap();
            assert!(!matches!(parsed, Command::Unknown(_)), "{command}");
        }
    }
}
