use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use genstudio::connector::api::{serve, Router};
use genstudio::connector::api::controller::AsciiController;
use genstudio::connector::terminal;
use genstudio::{Commands, Container, ContainerConfig};

#[derive(Parser)]
#[command(name = "genstudio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer from built-in demo content instead of calling the provider
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig { mock: cli.mock });

    match cli.command {
        Commands::Serve { port, public } => {
            let ip = if public {
                IpAddr::V4(Ipv4Addr::UNSPECIFIED)
            } else {
                IpAddr::V4(Ipv4Addr::LOCALHOST)
            };
            serve(Arc::new(container), SocketAddr::new(ip, port)).await?;
        }
        Commands::Ascii {
            prompt,
            print: false,
        } => {
            let animation = AsciiController::new(&container).generate(prompt).await?;
            terminal::play(animation.into_frames()).await?;
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{output}");
        }
    }

    Ok(())
}
