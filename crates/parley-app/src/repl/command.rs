//! Parsing of REPL input lines.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain text: send it as a turn.
    Send(String),
    /// `/image <path> [text]`
    Image { path: PathBuf, text: String },
    /// `/persona` with no argument lists the personas.
    ListPersonas,
    /// `/persona <id>`
    SwitchPersona(String),
    Reset,
    History,
    Copy,
    /// `/save [dir]`
    Save(Option<PathBuf>),
    Help,
    Quit,
    Unknown(String),
    Empty,
}

/// Interpret one line of input. Anything not starting with `/` is a message.
pub fn parse(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Send(line.trim_end_matches(['\r', '\n']).to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name {
        "image" | "img" => {
            if arg.is_empty() {
                return Command::Unknown("/image needs a file path".into());
            }
            let (path, text) = match arg.split_once(char::is_whitespace) {
                Some((path, text)) => (path, text.trim()),
                None => (arg, ""),
            };
            Command::Image {
                path: PathBuf::from(path),
                text: text.to_string(),
            }
        }
        "persona" | "p" if arg.is_empty() => Command::ListPersonas,
        "persona" | "p" => Command::SwitchPersona(arg.to_string()),
        "reset" | "clear" => Command::Reset,
        "history" => Command::History,
        "copy" => Command::Copy,
        "save" if arg.is_empty() => Command::Save(None),
        "save" => Command::Save(Some(PathBuf::from(arg))),
        "help" | "h" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Unknown(format!("Unknown command: /{other}")),
    }
}

pub const HELP: &str = "\
Commands:
  <text>                 Send a message
  /image <path> [text]   Send an image, optionally with a question
  /persona               List personas
  /persona <id>          Switch persona (clears the conversation)
  /reset                 Clear the conversation
  /history               Show the conversation
  /copy                  Copy the last reply to the clipboard
  /save [dir]            Download images from the last reply
  /help                  Show this help
  /quit                  Exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_sent_verbatim() {
        assert_eq!(parse("  hello there "), Command::Send("  hello there ".into()));
        assert_eq!(parse("hi\r\n"), Command::Send("hi".into()));
    }

    #[test]
    fn blank_line_is_empty() {
        assert_eq!(parse(""), Command::Empty);
        assert_eq!(parse("   \t"), Command::Empty);
    }

    #[test]
    fn image_with_and_without_text() {
        assert_eq!(
            parse("/image ./cat.png what breed is this?"),
            Command::Image {
                path: PathBuf::from("./cat.png"),
                text: "what breed is this?".into(),
            }
        );
        assert_eq!(
            parse("/img cat.png"),
            Command::Image {
                path: PathBuf::from("cat.png"),
                text: String::new(),
            }
        );
        assert!(matches!(parse("/image"), Command::Unknown(_)));
    }

    #[test]
    fn persona_lists_or_switches() {
        assert_eq!(parse("/persona"), Command::ListPersonas);
        assert_eq!(parse("/persona image-gen"), Command::SwitchPersona("image-gen".into()));
        assert_eq!(parse("/p coder"), Command::SwitchPersona("coder".into()));
    }

    #[test]
    fn save_takes_optional_directory() {
        assert_eq!(parse("/save"), Command::Save(None));
        assert_eq!(parse("/save /tmp/out"), Command::Save(Some(PathBuf::from("/tmp/out"))));
    }

    #[test]
    fn simple_commands_and_aliases() {
        assert_eq!(parse("/reset"), Command::Reset);
        assert_eq!(parse("/clear"), Command::Reset);
        assert_eq!(parse("/history"), Command::History);
        assert_eq!(parse("/copy"), Command::Copy);
        assert_eq!(parse("/help"), Command::Help);
        assert_eq!(parse("/?"), Command::Help);
        assert_eq!(parse("/quit"), Command::Quit);
        assert_eq!(parse("/exit"), Command::Quit);
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(
            parse("/frobnicate now"),
            Command::Unknown("Unknown command: /frobnicate".into())
        );
    }
}
