//! Command-line driver.
//!
//! Replays field edits through an orchestrator the same way a screen would,
//! submits once and returns the final view state as JSON.
//!
//! ```bash
//! appdelivery register --name Ana --last-name Lima --document-id 12345678 \
//!     --email ana@example.com --password secret --cellphone 987654321 --accept-terms
//! appdelivery login --email ana@example.com --password secret --seed-account
//! ```

use std::sync::Arc;

use ad_core::login::LoginField;
use ad_core::ports::SessionGatewayPort;
use ad_core::registration::FormField;
use ad_core::{LoginUiState, RegistrationUiState};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info_span, Instrument};

use crate::adapters::WatchViewStatePort;
use crate::bootstrap::AppDeps;

/// AppDelivery account flows
#[derive(Parser, Debug)]
#[command(name = "appdelivery")]
#[command(about = "Register or sign in to an AppDelivery account")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a customer account and profile
    Register(RegisterArgs),
    /// Sign in with email and password
    Login(LoginArgs),
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub document_id: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,

    #[arg(long)]
    pub cellphone: String,

    /// Accept the terms and conditions
    #[arg(long)]
    pub accept_terms: bool,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,

    /// Create the credential first. The session service is in-process, so
    /// accounts from earlier runs are not remembered.
    #[arg(long)]
    pub seed_account: bool,
}

/// Run one command and return the final view state, pretty-printed.
pub async fn run(cli: Cli, deps: AppDeps) -> anyhow::Result<String> {
    match cli.command {
        Command::Register(args) => {
            let ui = register(args, &deps)
                .instrument(info_span!("cli.register"))
                .await;
            Ok(serde_json::to_string_pretty(&ui)?)
        }
        Command::Login(args) => {
            let ui = login(args, &deps).instrument(info_span!("cli.login")).await;
            Ok(serde_json::to_string_pretty(&ui)?)
        }
    }
}

async fn register(args: RegisterArgs, deps: &AppDeps) -> RegistrationUiState {
    let view_state = Arc::new(WatchViewStatePort::new(RegistrationUiState::initial()));
    let orchestrator = deps.registration_orchestrator(view_state.clone());

    orchestrator.on_field_change(FormField::Name, args.name);
    orchestrator.on_field_change(FormField::LastName, args.last_name);
    orchestrator.on_field_change(FormField::DocumentId, args.document_id);
    orchestrator.on_field_change(FormField::Email, args.email);
    orchestrator.on_field_change(FormField::Password, args.password);
    orchestrator.on_field_change(FormField::Cellphone, args.cellphone);
    if args.accept_terms {
        orchestrator.toggle_terms();
    }

    let ui = view_state.latest();
    if !ui.is_submit_enabled {
        debug!("form incomplete; submit will be ignored");
    }
    orchestrator.submit().await;
    view_state.latest()
}

async fn login(args: LoginArgs, deps: &AppDeps) -> LoginUiState {
    if args.seed_account {
        if let Err(err) = deps
            .session
            .create_credential(args.email.trim(), &args.password)
            .await
        {
            debug!(error = %err, "seeding account failed");
        }
        deps.session.log_out();
    }

    let view_state = Arc::new(WatchViewStatePort::new(LoginUiState::initial()));
    let orchestrator = deps.login_orchestrator(view_state.clone());

    orchestrator.on_field_change(LoginField::Email, args.email);
    orchestrator.on_field_change(LoginField::Password, args.password);
    orchestrator.login().await;
    view_state.latest()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::wire_dependencies;
    use ad_core::AppConfig;
    use serde_json::Value;

    fn deps() -> AppDeps {
        wire_dependencies(&AppConfig::empty()).unwrap()
    }

    fn register_cli(extra: &[&str]) -> Cli {
        let mut argv = vec![
            "appdelivery",
            "register",
            "--name",
            "Ana",
            "--last-name",
            "Lima",
            "--document-id",
            "12345678",
            "--email",
            "ana@example.com",
            "--password",
            "secret",
            "--cellphone",
            "987654321",
        ];
        argv.extend_from_slice(extra);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_register_requires_all_fields() {
        let result = Cli::try_parse_from(["appdelivery", "register", "--name", "Ana"]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_register_prints_welcome() {
        let output = run(register_cli(&["--accept-terms"]), deps()).await.unwrap();
        let ui: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(ui["last_message"], "Bienvenido Ana");
        assert_eq!(ui["is_last_message_error"], false);
        assert_eq!(ui["is_loading"], false);
    }

    #[tokio::test]
    async fn test_register_without_terms_stays_idle() {
        let output = run(register_cli(&[]), deps()).await.unwrap();
        let ui: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(ui["is_submit_enabled"], false);
        assert_eq!(ui["last_message"], Value::Null);
    }

    #[tokio::test]
    async fn test_login_with_seeded_account() {
        let cli = Cli::try_parse_from([
            "appdelivery",
            "login",
            "--email",
            "ana@example.com",
            "--password",
            "secret",
            "--seed-account",
        ])
        .unwrap();

        let output = run(cli, deps()).await.unwrap();
        let ui: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(ui["last_message"], "Bienvenido ana@example.com");
    }

    #[tokio::test]
    async fn test_login_unknown_account_fails() {
        let cli = Cli::try_parse_from([
            "appdelivery",
            "login",
            "--email",
            "ana@example.com",
            "--password",
            "secret",
        ])
        .unwrap();

        let output = run(cli, deps()).await.unwrap();
        let ui: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(ui["last_message"], "Error al iniciar sesión");
        assert_eq!(ui["is_last_message_error"], true);
    }
}
