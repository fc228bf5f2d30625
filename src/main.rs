use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::bail;
use chrono::{Duration, Utc};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use noticeboard::auth::{CredentialHasher, session};
use noticeboard::config::{
    DEFAULT_SEED_EMAIL, DEFAULT_SEED_PASSWORD, DEFAULT_SESSION_TTL_HOURS, MAX_SESSION_TTL_HOURS,
    SeedAdmin, ServerConfig,
};
use noticeboard::error::Error;
use noticeboard::portal::{accounts, bootstrap};
use noticeboard::server::{AppState, create_router};
use noticeboard::store::{SqliteStore, Store};
use noticeboard::types::Role;

#[cfg(unix)]
fn set_restrictive_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
        tracing::warn!("Failed to set permissions on {}: {e}", path.display());
    }
}

#[derive(Parser)]
#[command(name = "noticeboard")]
#[command(about = "A campus notice board with complaints and feedback", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Administrative commands
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },

    /// Start the server
    Serve {
        /// Host to bind to
        #[arg(long, env = "NOTICEBOARD_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, short, env = "NOTICEBOARD_PORT", default_value = "8080")]
        port: u16,

        #[command(flatten)]
        data: DataDirArgs,

        #[command(flatten)]
        seed: SeedArgs,

        /// Lifetime of a login session in hours
        #[arg(
            long,
            env = "NOTICEBOARD_SESSION_TTL_HOURS",
            default_value_t = DEFAULT_SESSION_TTL_HOURS,
            value_parser = clap::value_parser!(i64).range(1..=MAX_SESSION_TTL_HOURS)
        )]
        session_ttl_hours: i64,

        /// Mark session cookies Secure (serve behind HTTPS)
        #[arg(long, env = "NOTICEBOARD_SECURE_COOKIES")]
        secure_cookies: bool,
    },
}

#[derive(Subcommand)]
enum AdminCommands {
    /// Create the database and seed the default admin
    Init {
        #[command(flatten)]
        data: DataDirArgs,

        #[command(flatten)]
        seed: SeedArgs,
    },

    /// Register an additional admin account
    Add {
        #[command(flatten)]
        data: DataDirArgs,

        /// Email of the new admin
        #[arg(long)]
        email: String,

        /// Password of the new admin (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,
    },
}

#[derive(Args)]
struct DataDirArgs {
    /// Data directory for the database
    #[arg(long, env = "NOTICEBOARD_DATA_DIR", default_value = "./data")]
    data_dir: PathBuf,
}

#[derive(Args)]
struct SeedArgs {
    /// Email of the admin created on first boot
    #[arg(long, env = "NOTICEBOARD_SEED_EMAIL", default_value = DEFAULT_SEED_EMAIL)]
    seed_email: String,

    /// Password of the admin created on first boot
    #[arg(long, env = "NOTICEBOARD_SEED_PASSWORD", default_value = DEFAULT_SEED_PASSWORD)]
    seed_password: String,
}

impl From<SeedArgs> for SeedAdmin {
    fn from(args: SeedArgs) -> Self {
        SeedAdmin {
            email: args.seed_email,
            password: args.seed_password,
        }
    }
}

fn open_store(data_dir: &Path) -> anyhow::Result<SqliteStore> {
    fs::create_dir_all(data_dir)?;

    let db_path = data_dir.join("noticeboard.db");
    let store = SqliteStore::new(&db_path)?;
    store.initialize()?;

    #[cfg(unix)]
    set_restrictive_permissions(&db_path);

    Ok(store)
}

fn run_init(data_dir: &Path, seed: &SeedAdmin) -> anyhow::Result<()> {
    let store = open_store(data_dir)?;

    if bootstrap::ensure_seed_admin(&store, &CredentialHasher::new(), seed)? {
        println!("Created admin {}", seed.email);
    } else {
        println!("Admin {} already exists", seed.email);
    }

    Ok(())
}

fn run_add_admin(data_dir: &Path, email: &str, password: Option<String>) -> anyhow::Result<()> {
    let store = open_store(data_dir)?;

    let password = match password {
        Some(password) => password,
        None => inquire::Password::new("Password:").prompt()?,
    };

    match accounts::register(
        &store,
        &CredentialHasher::new(),
        Role::Admin,
        Some(email),
        None,
        Some(&password),
    ) {
        Ok(()) => {}
        Err(Error::DuplicateEmail) => bail!("Admin {email} already exists"),
        Err(Error::MissingField(field)) => bail!("Admin {field} cannot be empty"),
        Err(e) => return Err(e.into()),
    }

    println!("Created admin {email}");
    Ok(())
}

async fn run_serve(config: ServerConfig) -> anyhow::Result<()> {
    // Fail at startup rather than on the first login
    session::expires_at(Utc::now(), config.session_ttl)?;

    let store = open_store(&config.data_dir)?;

    bootstrap::ensure_seed_admin(&store, &CredentialHasher::new(), &config.seed_admin)?;

    let purged = store.delete_expired_sessions(&Utc::now())?;
    if purged > 0 {
        info!("Purged {purged} expired sessions");
    }

    let state = Arc::new(AppState::new(Arc::new(store), &config));
    let app = create_router(state);
    let addr = config.socket_addr()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("noticeboard=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Admin { command } => match command {
            AdminCommands::Init { data, seed } => {
                run_init(&data.data_dir, &seed.into())?;
            }
            AdminCommands::Add {
                data,
                email,
                password,
            } => {
                run_add_admin(&data.data_dir, &email, password)?;
            }
        },
        Commands::Serve {
            host,
            port,
            data,
            seed,
            session_ttl_hours,
            secure_cookies,
        } => {
            let config = ServerConfig {
                host,
                port,
                data_dir: data.data_dir,
                seed_admin: seed.into(),
                session_ttl: Duration::hours(session_ttl_hours),
                secure_cookies,
            };
            run_serve(config).await?;
        }
    }

    Ok(())
}
