// DevLead API - Super admin administration
//
// The only way to change `is_super_admin`; no HTTP route can.

use clap::{Parser, Subcommand};
use devlead_users::{User, UserDirectory, UserRepository};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "admin", about = "Manage DevLead super admins")]
struct Cli {
    /// Postgres connection URL
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every super admin
    ListAdmins,
    /// Grant super admin to a user
    Grant {
        /// User id
        id: Uuid,
    },
    /// Revoke super admin from a user
    Revoke {
        /// User id
        id: Uuid,
    },
}

fn describe(user: &User) -> String {
    format!(
        "{}  {}  {}",
        user.id,
        user.email,
        user.name.as_deref().unwrap_or("-")
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let pool = PgPool::connect(&cli.database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Database connection failed: {}", e))?;
    let users = UserRepository::new(pool);

    match cli.command {
        Command::ListAdmins => {
            let admins = users.find_super_admins().await?;
            if admins.is_empty() {
                println!("No super admins");
            }
            for admin in &admins {
                println!("{}", describe(admin));
            }
        }
        Command::Grant { id } => {
            let user = users
                .set_super_admin(id, true)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to grant super admin to {}: {}", id, e))?;
            tracing::info!(user_id = %user.id, "Granted super admin");
            println!("Granted super admin: {}", describe(&user));
        }
        Command::Revoke { id } => {
            let user = users
                .set_super_admin(id, false)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to revoke super admin from {}: {}", id, e))?;
            tracing::info!(user_id = %user.id, "Revoked super admin");
            println!("Revoked super admin: {}", describe(&user));
        }
    }

    Ok(())
}
