//! subscriberdb CLI
//!
//! Interactive registration and login against a subscriber store.

use clap::{Parser, Subcommand, ValueEnum};
use subscriberdb::{AuthStrategy, Config, Directory, LinePrompter, Prompter, SyncStrategy};
use tracing_subscriber::{fmt, EnvFilter};

/// Subscriber directory
#[derive(Parser, Debug)]
#[command(name = "subscriberdb")]
#[command(about = "Register and log in streaming-service subscribers")]
#[command(version)]
struct Args {
    /// Store file (one account per line)
    #[arg(short, long, default_value = "./subscribers.db")]
    store: String,

    /// How logins are matched against stored accounts
    #[arg(short, long, value_enum, default_value_t = AuthMode::EmailFirst)]
    auth_strategy: AuthMode,

    /// Skip fsync after each registration
    #[arg(long)]
    no_sync: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new account
    Register,

    /// Log in to an existing account
    Login,

    /// List registered accounts (hashes are never shown)
    List,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AuthMode {
    /// Look the email up, then verify its password
    EmailFirst,

    /// Verify the password against every account in order
    HashScan,
}

impl From<AuthMode> for AuthStrategy {
    fn from(mode: AuthMode) -> Self {
        match mode {
            AuthMode::EmailFirst => AuthStrategy::EmailFirst,
            AuthMode::HashScan => AuthStrategy::HashScan,
        }
    }
}

fn main() {
    // Logs go to stderr so prompts on stdout stay readable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,subscriberdb=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("subscriberdb v{}", subscriberdb::VERSION);
    tracing::debug!("Store: {}", args.store);

    let sync_strategy = if args.no_sync {
        SyncStrategy::OsBuffered
    } else {
        SyncStrategy::EveryAppend
    };

    let config = Config::builder()
        .store_path(&args.store)
        .sync_strategy(sync_strategy)
        .auth_strategy(args.auth_strategy.into())
        .build();

    let mut directory = match Directory::open(config) {
        Ok(d) => d,
        Err(e) => {
            tracing::error!("Failed to open directory: {}", e);
            std::process::exit(1);
        }
    };

    let mut prompter = LinePrompter::stdio();

    let outcome = match args.command {
        Commands::Register => directory.register(&mut prompter).map(|account| {
            prompter.notify(&format!("Welcome, {}! Your account has been created.", account.name));
        }),
        Commands::Login => directory.authenticate(&mut prompter).map(|account| {
            prompter.notify(&format!(
                "Welcome back, {} ({} subscription).",
                account.name, account.subscription_tier
            ));
        }),
        Commands::List => {
            for account in directory.accounts() {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    account.name, account.email, account.age, account.country, account.subscription_tier
                );
            }
            Ok(())
        }
    };

    if let Err(e) = outcome {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
