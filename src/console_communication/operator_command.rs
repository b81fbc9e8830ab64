use std::str::FromStr;
use strum_macros::{Display, EnumString};

#[derive(Debug, Display, EnumString, PartialEq, Eq, Clone, Copy)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum Keyword {
    Takeoff,
    Land,
    Home,
    Circle,
    Speed,
    Status,
    Quit,
}

/// One line of operator input, mirroring the buttons and slider of the view.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum OperatorCommand {
    TakeOff,
    Land,
    GoHome,
    /// Circle toggle, `true` to start circling.
    Circle(bool),
    /// New slider position.
    Speed(i32),
    Status,
    Quit,
}

#[derive(Debug, Display, PartialEq, Eq, Clone)]
pub(crate) enum ParseCommandError {
    Empty,
    UnknownKeyword(String),
    MissingArgument(&'static str),
    InvalidArgument(String),
}

impl std::error::Error for ParseCommandError {}

impl FromStr for OperatorCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let first = tokens.next().ok_or(ParseCommandError::Empty)?;
        let keyword = Keyword::from_str(first)
            .map_err(|_| ParseCommandError::UnknownKeyword(first.to_string()))?;
        let arg = tokens.next();
        Ok(match keyword {
            Keyword::Takeoff => OperatorCommand::TakeOff,
            Keyword::Land => OperatorCommand::Land,
            Keyword::Home => OperatorCommand::GoHome,
            Keyword::Status => OperatorCommand::Status,
            Keyword::Quit => OperatorCommand::Quit,
            Keyword::Circle => match arg {
                Some(a) if a.eq_ignore_ascii_case("on") => OperatorCommand::Circle(true),
                Some(a) if a.eq_ignore_ascii_case("off") => OperatorCommand::Circle(false),
                Some(a) => return Err(ParseCommandError::InvalidArgument(a.to_string())),
                None => return Err(ParseCommandError::MissingArgument("on|off")),
            },
            Keyword::Speed => {
                let pos = arg.ok_or(ParseCommandError::MissingArgument("slider position"))?;
                let parsed = pos
                    .parse::<i32>()
                    .map_err(|_| ParseCommandError::InvalidArgument(pos.to_string()))?;
                OperatorCommand::Speed(parsed)
            }
        })
    }
}
