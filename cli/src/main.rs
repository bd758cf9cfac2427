mod client;
mod import;

use anyhow::Result;
use clap::{Parser, Subcommand};

use client::ApiClient;

#[derive(Parser)]
#[command(name = "tureen")]
#[command(about = "Tureen CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ping the server (unauthenticated)
    Ping {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
    },
    /// Import recipes from an external-source CSV export
    ImportRecipes {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
        /// Operator username
        #[arg(long)]
        username: String,
        /// Operator password
        #[arg(long)]
        password: String,
        /// Path to the recipes CSV file
        #[arg(long)]
        file: String,
    },
    /// Link related-recipe edges from a recommendations CSV
    LinkRelated {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
        /// Operator username
        #[arg(long)]
        username: String,
        /// Operator password
        #[arg(long)]
        password: String,
        /// Path to the recommendations CSV file
        #[arg(long)]
        file: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ping { server } => {
            let client = ApiClient::new(&server);
            let message = client.ping().await?;
            println!("{}", message);
        }
        Commands::ImportRecipes {
            server,
            username,
            password,
            file,
        } => {
            let client = ApiClient::login(&server, &username, &password).await?;
            import::import_recipes(&client, &file).await?;
        }
        Commands::LinkRelated {
            server,
            username,
            password,
            file,
        } => {
            let client = ApiClient::login(&server, &username, &password).await?;
            import::link_related(&client, &file).await?;
        }
    }

    Ok(())
}
