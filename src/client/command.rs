use std::str::FromStr;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Next,
    Previous,
    Set { field: String, value: String },
    Run,
    Show,
    Help,
    Quit
}

pub const HELP_TEXT: &str = "Commands: next | prev | set <field> <value> | run | show | help | quit";

impl FromStr for Command {
    type Err = String;

    /// `set` takes the rest of the line as the value, spaces included; leaving it out sets an empty value.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest),
            None => (line, "")
        };
        match keyword.to_ascii_lowercase().as_str() {
            "next" | "n" => Ok(Command::Next),
            "prev" | "previous" | "p" => Ok(Command::Previous),
            "run" | "r" => Ok(Command::Run),
            "show" | "s" => Ok(Command::Show),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "set" => {
                let rest = rest.trim_start();
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(String::from("Usage: set <field> <value>"));
                }
                Ok(Command::Set { field: field.to_string(), value: value.trim_end().to_string() })
            },
            "" => Err(HELP_TEXT.to_string()),
            other => Err(format!("Unknown command \"{}\". {}", other, HELP_TEXT))
        }
    }
}
