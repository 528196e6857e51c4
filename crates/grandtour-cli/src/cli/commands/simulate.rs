//! `simulate`: drive the sign-in flow without a terminal UI.
//!
//! Runs the same controller the app uses: open the form, submit credentials,
//! pick a role, enter the code. With `--forge` the form is skipped and a
//! session carrying the raw role string is installed directly, which shows
//! where corrupted or tampered role data ends up.

use anyhow::{Context, Result};
use grandtour_core::config::Config;
use grandtour_core::nav::{
    Contact, NavigationController, Role, Session, TransitionRecord, ViewId,
};
use secrecy::SecretString;
use serde::Serialize;
use tracing::info;

#[derive(clap::Args, Debug)]
pub struct SimulateArgs {
    /// Email address or phone number
    #[arg(long, value_name = "LOGIN")]
    pub login: String,

    /// Password (any non-empty value; nothing is verified)
    #[arg(long, env = "GRANDTOUR_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Role to pick, e.g. `executive` or `member-gold`
    #[arg(long)]
    pub role: String,

    /// Six-digit verification code
    #[arg(long, default_value = "000000")]
    pub code: String,

    /// Install a session with this role verbatim instead of using the form
    #[arg(long)]
    pub forge: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Outcome<'a> {
    view: ViewId,
    session: Option<&'a Session>,
    transitions: Vec<&'a TransitionRecord>,
}

pub fn run(args: &SimulateArgs, config: &Config) -> Result<()> {
    let mut nav = NavigationController::with_journal_limit(config.tui.journal_limit);

    if args.forge {
        let contact = Contact::parse(&args.login).context("invalid --login")?;
        nav.login(Session::new(args.login.trim(), contact, args.role.as_str()));
    } else {
        sign_in(&mut nav, args)?;
    }
    info!(view = %nav.current_view(), "simulation finished");

    let outcome = Outcome {
        view: nav.current_view(),
        session: nav.session(),
        transitions: nav.journal().entries().collect(),
    };
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome).context("serialize outcome")?
        );
    } else {
        print_outcome(&outcome);
    }
    Ok(())
}

fn sign_in(nav: &mut NavigationController, args: &SimulateArgs) -> Result<()> {
    let role: Role = args
        .role
        .parse()
        .with_context(|| format!("unknown role `{}`", args.role))?;

    nav.go_to(ViewId::Login, None).context("open sign-in")?;
    let password = SecretString::new(args.password.clone().unwrap_or_default());
    nav.submit_credentials(&args.login, password)
        .context("credentials rejected")?;
    nav.select_role(role)
        .with_context(|| format!("role `{role}` cannot be picked in the login form"))?;
    nav.submit_two_factor(&args.code)
        .context("verification rejected")?;
    Ok(())
}

fn print_outcome(outcome: &Outcome<'_>) {
    println!("view: {}", outcome.view);
    if let Some(session) = outcome.session {
        println!("user: {} ({})", session.display_name, session.contact);
        println!("role: {}", session.role);
        if !session.permissions.is_empty() {
            let permissions: Vec<&str> = session.permissions.iter().map(String::as_str).collect();
            println!("permissions: {}", permissions.join(", "));
        }
    }
    println!("transitions:");
    for record in &outcome.transitions {
        println!(
            "  #{} {} -> {} ({})",
            record.seq, record.from, record.to, record.cause
        );
    }
}
