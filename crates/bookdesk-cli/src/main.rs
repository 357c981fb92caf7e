//! CLI entry point - parses arguments, initializes logging, and
//! dispatches to handlers.
//!
//! Infrastructure wiring lives in `bootstrap`; this file only routes.

use clap::Parser;

use bookdesk_cli::handlers::{add::AddArgs, assign::AssignArgs};
use bookdesk_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = CliConfig::with_defaults(cli.api_url);
    let ctx = bootstrap(&config)?;

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Login { username } => handlers::login::execute(&ctx, username).await,
        Commands::Logout => handlers::logout::execute(&ctx),
        Commands::List {
            query,
            page,
            page_size,
        } => handlers::list::execute(&ctx, query, page, page_size).await,
        Commands::Show { id } => handlers::show::execute(&ctx, id).await,
        Commands::Add {
            title,
            author,
            isbn,
            price,
            quantity,
            about,
            suggest_about,
        } => {
            let args = AddArgs {
                title,
                author,
                isbn,
                price,
                quantity,
                about,
                suggest_about,
            };
            handlers::add::execute(&ctx, args).await
        }
        Commands::Assign {
            id,
            person,
            quantity,
            price,
            quick,
        } => {
            let args = AssignArgs {
                id,
                person,
                quantity,
                price,
                quick,
            };
            handlers::assign::execute(&ctx, args).await
        }
        Commands::Chat { id } => handlers::chat::execute(&ctx, id).await,
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables before anything reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}
