//! Command handlers for the account CLI.

use std::process::ExitCode;

use zamanix_account::user::{NewAddress, NewEvent, SignupData};
use zamanix_account::{Result, SessionStore, User};

use crate::cli::{
    AddAddressArgs, AddCoinsArgs, AddEventArgs, Commands, DeleteEventArgs, LoginArgs, SignupArgs,
};

pub fn dispatch(command: &Commands, store: &SessionStore) -> Result<ExitCode> {
    match command {
        Commands::Signup(args) => signup(args, store),
        Commands::Login(args) => login(args, store),
        Commands::Logout => logout(store),
        Commands::Show => show(store),
        Commands::AddCoins(args) => add_coins(args, store),
        Commands::Daily => daily(store),
        Commands::AddAddress(args) => add_address(args, store),
        Commands::AddEvent(args) => add_event(args, store),
        Commands::DeleteEvent(args) => delete_event(args, store),
    }
}

fn signup(args: &SignupArgs, store: &SessionStore) -> Result<ExitCode> {
    let created = store.signup(SignupData {
        name: args.name.clone(),
        email: args.email.clone(),
        password: args.password.clone(),
        phone: args.phone.clone(),
    })?;
    if created {
        println!("Account created for {}", args.email);
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{} is already registered", args.email);
        Ok(ExitCode::FAILURE)
    }
}

fn login(args: &LoginArgs, store: &SessionStore) -> Result<ExitCode> {
    if store.login(&args.email, &args.password)? {
        let user = store.current();
        let streak = user.map(|u| u.login_streak).unwrap_or(1);
        println!("Logged in as {} (streak {streak})", args.email);
        Ok(ExitCode::SUCCESS)
    } else {
        println!("Invalid email or password");
        Ok(ExitCode::FAILURE)
    }
}

fn logout(store: &SessionStore) -> Result<ExitCode> {
    store.logout()?;
    println!("Logged out");
    Ok(ExitCode::SUCCESS)
}

fn show(store: &SessionStore) -> Result<ExitCode> {
    match store.current() {
        None => {
            println!("No active session");
            Ok(ExitCode::FAILURE)
        }
        Some(user) => {
            print_user(&user);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn add_coins(args: &AddCoinsArgs, store: &SessionStore) -> Result<ExitCode> {
    require_session(store, |_| store.add_coins(args.amount), |user| {
        println!("Balance: {} coins", user.coins);
    })
}

fn daily(store: &SessionStore) -> Result<ExitCode> {
    require_session(store, |_| store.check_daily_login(), |user| {
        println!(
            "Streak {} day(s), balance {} coins",
            user.login_streak, user.coins
        );
    })
}

fn add_address(args: &AddAddressArgs, store: &SessionStore) -> Result<ExitCode> {
    require_session(
        store,
        |_| {
            store.add_address(NewAddress {
                name: args.name.clone(),
                phone: args.phone.clone(),
                street: args.street.clone(),
                city: args.city.clone(),
                state: args.state.clone(),
                pincode: args.pincode.clone(),
                is_default: args.default,
            })
        },
        |user| println!("Saved {} address(es)", user.addresses.len()),
    )
}

fn add_event(args: &AddEventArgs, store: &SessionStore) -> Result<ExitCode> {
    require_session(
        store,
        |_| {
            store.add_event(NewEvent {
                date: args.date.clone(),
                occasion: args.occasion.clone(),
                name: args.name.clone(),
                notes: args.notes.clone(),
                recurrence: args.recurrence.into(),
            })
        },
        |user| {
            for event in user.events.as_deref().unwrap_or_default() {
                println!("{}  {}  {}", event.id, event.date, event.occasion);
            }
        },
    )
}

fn delete_event(args: &DeleteEventArgs, store: &SessionStore) -> Result<ExitCode> {
    require_session(
        store,
        |_| store.delete_event(&args.id),
        |user| {
            println!(
                "{} event(s) remain",
                user.events.as_deref().unwrap_or_default().len()
            );
        },
    )
}

/// Run `op` only when a session is active, then report from the fresh
/// session value. Without a session the store would silently no-op, which is
/// unhelpful at a terminal, so the CLI surfaces it.
fn require_session(
    store: &SessionStore,
    op: impl FnOnce(&User) -> Result<()>,
    report: impl FnOnce(&User),
) -> Result<ExitCode> {
    let Some(user) = store.current() else {
        println!("No active session; log in first");
        return Ok(ExitCode::FAILURE);
    };
    op(&user)?;
    if let Some(updated) = store.current() {
        report(&updated);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_user(user: &User) {
    println!("{} <{}>", user.name, user.email);
    println!("  coins:  {}", user.coins);
    println!(
        "  streak: {} day(s), last login {}",
        user.login_streak, user.last_login_date
    );
    if let Some(phone) = &user.phone {
        println!("  phone:  {phone}");
    }
    if !user.addresses.is_empty() {
        println!("  addresses:");
        for address in &user.addresses {
            let default = if address.is_default { " (default)" } else { "" };
            println!(
                "    {}: {}, {} {}{default}",
                address.name, address.street, address.city, address.pincode
            );
        }
    }
    if let Some(events) = user.events.as_deref()
        && !events.is_empty()
    {
        println!("  events:");
        for event in events {
            println!("    {}  {}  {}", event.id, event.date, event.occasion);
        }
    }
}
