//! CLI argument definitions for the Zamanix account binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use zamanix_account::Recurrence;

/// Zamanix account state CLI
///
/// Works against a JSON state file holding the same two records the
/// storefront persists: the session slot and the account directory.
#[derive(Parser, Debug)]
#[command(name = "zamanix-account")]
#[command(about = "Zamanix account, session, and rewards state")]
#[command(version)]
pub struct Cli {
    /// State file holding the persisted account records
    #[arg(
        short = 'f',
        long,
        default_value = "zamanix-account.json",
        env = "ZAMANIX_STATE_FILE"
    )]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new account and start a session
    Signup(SignupArgs),
    /// Log in with an existing account (or the admin pair)
    Login(LoginArgs),
    /// End the active session
    Logout,
    /// Show the active session
    Show,
    /// Adjust the loyalty-coin balance
    AddCoins(AddCoinsArgs),
    /// Apply the daily-login streak check
    Daily,
    /// Save a delivery address
    AddAddress(AddAddressArgs),
    /// Save a personal event or reminder
    AddEvent(AddEventArgs),
    /// Delete a saved event by id
    DeleteEvent(DeleteEventArgs),
}

#[derive(clap::Args, Debug)]
pub struct SignupArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub phone: String,
}

#[derive(clap::Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(clap::Args, Debug)]
pub struct AddCoinsArgs {
    /// Amount to add; negative values spend coins
    #[arg(allow_hyphen_values = true)]
    pub amount: i64,
}

#[derive(clap::Args, Debug)]
pub struct AddAddressArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub street: String,
    #[arg(long)]
    pub city: String,
    #[arg(long)]
    pub state: String,
    #[arg(long)]
    pub pincode: String,
    /// Mark this address as the default
    #[arg(long)]
    pub default: bool,
}

#[derive(clap::Args, Debug)]
pub struct AddEventArgs {
    #[arg(long)]
    pub date: String,
    #[arg(long)]
    pub occasion: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long, value_enum, default_value = "once")]
    pub recurrence: RecurrenceArg,
}

#[derive(clap::Args, Debug)]
pub struct DeleteEventArgs {
    pub id: String,
}

/// Event recurrence, mirroring the library enum for clap.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RecurrenceArg {
    Once,
    Weekly,
    Monthly,
    Yearly,
}

impl From<RecurrenceArg> for Recurrence {
    fn from(arg: RecurrenceArg) -> Self {
        match arg {
            RecurrenceArg::Once => Recurrence::Once,
            RecurrenceArg::Weekly => Recurrence::Weekly,
            RecurrenceArg::Monthly => Recurrence::Monthly,
            RecurrenceArg::Yearly => Recurrence::Yearly,
        }
    }
}
