use std::str::FromStr;

/// Possible errors to occur while parsing an input line
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("Invalid input. Use: {usage}")]
    MissingArgument { usage: &'static str },
    #[error("Invalid command.")]
    UnknownCommand,
}

/// One command of the interactive session
///
/// A line consists of a verb and, for the verbs that take one, a single
/// argument token. Anything after the argument token is ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Buy(String),
    Return(String),
    Add(u32),
    View(String),
    Belongings,
    Inventory,
    Exit,
}

fn argument(
    words: &mut std::str::SplitWhitespace,
    usage: &'static str,
) -> Result<String, ParseCommandError> {
    words
        .next()
        .map(str::to_owned)
        .ok_or(ParseCommandError::MissingArgument { usage })
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = match words.next() {
            Some("buy") => Self::Buy(argument(&mut words, "buy <item_name>")?),
            Some("return") => Self::Return(argument(&mut words, "return <item_name>")?),
            Some("view") => Self::View(argument(&mut words, "view <item_name>")?),
            Some("add") => {
                let usage = "add <amount>";
                let amount = argument(&mut words, usage)?
                    .parse()
                    .map_err(|_| ParseCommandError::MissingArgument { usage })?;
                Self::Add(amount)
            }
            Some("belongings") => Self::Belongings,
            Some("inventory") => Self::Inventory,
            Some("exit") => Self::Exit,
            _ => return Err(ParseCommandError::UnknownCommand),
        };

        Ok(command)
    }
}
