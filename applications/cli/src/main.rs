/// Roster - user directory client
use clap::{Parser, Subcommand};
use roster_cli::{commands, terminal, Context, RosterConfig, Shell};
use roster_core::{AssumeYes, ConfirmationGate, UserId};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Browse and manage the Roster user directory", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./roster.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Session token from a previous `roster login`
    #[arg(long, env = "ROSTER_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (the default)
    Shell,
    /// Log in and print the session token
    Login {
        /// Account email (defaults to the configured login email)
        #[arg(short, long)]
        email: Option<String>,
        /// Account password (defaults to the configured login password)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Show one page of users
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Only show users whose name or email contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Replace a user's name and email
    Edit {
        /// User ID
        id: UserId,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        /// Image file to upload as the new avatar
        #[arg(long)]
        avatar: Option<PathBuf>,
    },
    /// Delete a user
    Delete {
        /// User ID
        id: UserId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster=info,roster_cli=info,roster_client=info,roster_view=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = RosterConfig::load(cli.config.as_deref())?;
    tracing::debug!(base_url = %config.api.base_url, "Configuration loaded");

    let ctx = Context::new(
        config,
        cli.token.filter(|token| !token.is_empty()),
        Arc::new(terminal::TerminalNotifier::stdout()),
    )?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            Shell::new(ctx).run().await?;
        }
        Commands::Login { email, password } => {
            let email = email.unwrap_or_else(|| ctx.config.login.default_email.clone());
            let password = password.unwrap_or_else(|| ctx.config.login.default_password.clone());
            let token = commands::login(&ctx, &email, &password).await?;
            println!("{token}");
        }
        Commands::List { page, search } => {
            print!("{}", commands::list(&ctx, page, search.as_deref()).await?);
        }
        Commands::Edit {
            id,
            first_name,
            last_name,
            email,
            avatar,
        } => {
            commands::edit(&ctx, id, &first_name, &last_name, &email, avatar.as_deref()).await?;
        }
        Commands::Delete { id, yes } => {
            let confirm: Arc<dyn ConfirmationGate> = if yes {
                Arc::new(AssumeYes)
            } else {
                Arc::new(terminal::StdinConfirm)
            };
            if !commands::delete(&ctx, id, confirm).await? {
                println!("Delete cancelled");
            }
        }
    }

    Ok(())
}
