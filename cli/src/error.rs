use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("SDK Error: {0}")]
    Sdk(#[from] zerion_rewards_sdk::Error),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Toml Error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Incorrect Address or Domain: \"{0}\"")]
    IncorrectAccount(String),

    #[error("Command Error: {0}")]
    Command(String),
}
