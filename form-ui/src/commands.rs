//! Parsing of the line-oriented commands typed at the form prompt.

use form_core::Field;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  set <field> <value>   replace a field value (fields: name, email, mobile,
                        dob, gender, zip, color, notes)
  clear <field>         empty a field
  submit                submit the form (available once every field is valid)
  wait                  block until a pending submit completes
  show                  show the submitted data
  reset                 clear a submitted form
  colors                list the available colors
  genders               list the available genders
  view                  redraw the form
  log <level>           change the log level (error, warn, info, debug, trace)
  help                  show this text
  quit                  leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: Field, value: String },
    Clear(Field),
    Submit,
    Wait,
    Show,
    Reset,
    Colors,
    Genders,
    View,
    LogLevel(String),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("type a command, or 'help' for a list")]
    Empty,

    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),

    #[error("'{0}' needs a field name")]
    MissingField(&'static str),

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("'log' needs a level")]
    MissingLevel,
}

impl Command {
    /// Parses one input line. The keyword is case-insensitive; everything
    /// after `set <field> ` is kept verbatim as the value, including inner
    /// spaces.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        let (keyword, rest) = split_word(trimmed);
        if keyword.is_empty() {
            return Err(CommandError::Empty);
        }

        match keyword.to_ascii_lowercase().as_str() {
            "set" => {
                let (name, value) = split_word(rest.trim_start());
                let field = parse_field(name, "set")?;
                Ok(Command::Set {
                    field,
                    value: value.strip_prefix(' ').unwrap_or(value).to_string(),
                })
            }
            "clear" => {
                let (name, _) = split_word(rest.trim_start());
                Ok(Command::Clear(parse_field(name, "clear")?))
            }
            "submit" => Ok(Command::Submit),
            "wait" => Ok(Command::Wait),
            "show" | "show-data" => Ok(Command::Show),
            "reset" => Ok(Command::Reset),
            "colors" | "colours" => Ok(Command::Colors),
            "genders" => Ok(Command::Genders),
            "view" | "redraw" => Ok(Command::View),
            "log" => match rest.trim() {
                "" => Err(CommandError::MissingLevel),
                level => Ok(Command::LogLevel(level.to_string())),
            },
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn split_word(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], &s[idx..]),
        None => (s, ""),
    }
}

fn parse_field(
    name: &str,
    command: &'static str,
) -> Result<Field, CommandError> {
    if name.is_empty() {
        return Err(CommandError::MissingField(command));
    }
    Field::parse(name).ok_or_else(|| CommandError::UnknownField(name.to_string()))
}
