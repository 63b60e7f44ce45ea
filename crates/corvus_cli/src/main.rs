//! Operator CLI for the corvus server.
//!
//! The server has no login endpoint; tokens are minted out of band with the
//! shared secret and handed to clients.

use anyhow::Result;
use clap::{Parser, Subcommand};
use corvus_core::claims::Claims;
use jsonwebtoken::{EncodingKey, Header, encode};
use rand::Rng;
use rand::distr::Alphanumeric;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(name = "corvus")]
#[command(about = "Operator CLI for the corvus content distribution server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random JWT signing secret
    GenerateSecret,

    /// Mint an access token signed with the shared secret
    MintToken {
        /// Subject (account id) the token is for
        #[arg(short, long)]
        subject: String,

        /// Username claim
        #[arg(short, long)]
        username: String,

        /// Role claim
        #[arg(long, default_value = "user")]
        role: String,

        /// Validity in seconds (default: 30 days)
        #[arg(long)]
        duration: Option<u64>,

        /// Mint with `active: false`; the server refuses such tokens with 403
        #[arg(long)]
        inactive: bool,

        /// Signing secret, must match the server's JWT_SECRET
        #[arg(long, env = "JWT_SECRET")]
        secret: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::GenerateSecret => {
            let secret: String = rand::rng()
                .sample_iter(&Alphanumeric)
                .take(64)
                .map(char::from)
                .collect();

            println!("🔑 Generated JWT secret:");
            println!("\n    {}\n", secret);
            println!("Set it on the server before boot:");
            println!("export JWT_SECRET=\"{}\"", secret);
        }
        Commands::MintToken {
            subject,
            username,
            role,
            duration,
            inactive,
            secret,
        } => {
            let duration = duration.unwrap_or(60 * 60 * 24 * 30);
            let exp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() + duration;

            let claims = Claims {
                sub: subject.clone(),
                username,
                active: !inactive,
                role,
                exp: exp as usize,
            };
            let token = encode(
                &Header::default(),
                &claims,
                &EncodingKey::from_secret(secret.as_bytes()),
            )?;

            println!("🔑 Minting token for '{}'...", subject);
            println!("\n{token}\n");
            println!("Send it as `Authorization: Bearer <token>` or a `token` cookie.");
        }
    }

    Ok(())
}
