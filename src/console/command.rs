use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Show,
    Quit,
    Logout,
    Submit,
    Email(String),
    Password(String),
    Select(String),
    Name(String),
    Card(String),
    Expiry(String),
    Cvv(String),
    Toggle(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command `{0}`. Type `help` for the commands on this step.")]
    Unknown(String),
    #[error("`{0}` needs a value")]
    MissingValue(&'static str),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Show => "show",
            Command::Quit => "quit",
            Command::Logout => "logout",
            Command::Submit => "submit",
            Command::Email(_) => "email",
            Command::Password(_) => "password",
            Command::Select(_) => "select",
            Command::Name(_) => "name",
            Command::Card(_) => "card",
            Command::Expiry(_) => "expiry",
            Command::Cvv(_) => "cvv",
            Command::Toggle(_) => "toggle",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let value = |name: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingValue(name))
            } else {
                Ok(rest.to_string())
            }
        };

        match keyword.to_ascii_lowercase().as_str() {
            "help" | "?" => Ok(Command::Help),
            "" | "show" => Ok(Command::Show),
            "quit" | "exit" => Ok(Command::Quit),
            "logout" => Ok(Command::Logout),
            "submit" | "continue" => Ok(Command::Submit),
            // An empty password is a value the login guard rejects, not a parse error.
            "password" => Ok(Command::Password(rest.to_string())),
            "email" => value("email").map(Command::Email),
            "select" => value("select").map(Command::Select),
            "name" => value("name").map(Command::Name),
            "card" => value("card").map(Command::Card),
            "expiry" => value("expiry").map(Command::Expiry),
            "cvv" => value("cvv").map(Command::Cvv),
            "toggle" => value("toggle").map(Command::Toggle),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
