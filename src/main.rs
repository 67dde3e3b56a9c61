use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use vitalguide::connector::http;
use vitalguide::{Commands, Container, ContainerConfig, Router};

#[derive(Parser)]
#[command(name = "vitalguide")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true, default_value = "~/.vitalguide")]
    data_dir: String,

    /// Model to address completion requests to (overrides GEMINI_MODEL)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Keep the profile in memory only
    #[arg(long, global = true)]
    memory_storage: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(cli.verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        data_dir: expand_tilde(&cli.data_dir),
        model: cli.model,
        memory_storage: cli.memory_storage,
    })?;

    if let Commands::Serve { port, public } = cli.command {
        let ip = if public {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        } else {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        };
        return http::serve(Arc::new(container), SocketAddr::new(ip, port)).await;
    }

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}

/// `--verbose` forces debug; otherwise `RUST_LOG`, defaulting to info.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            if path == "~" {
                return home.to_string_lossy().to_string();
            }
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn verbose_forces_debug_filter() {
        assert_eq!(log_filter(true).to_string(), "debug");
    }

    #[test]
    fn parses_profile_set_with_gender() {
        let cli = Cli::try_parse_from([
            "vitalguide", "profile", "set", "--age", "52", "--gender", "male",
        ])
        .unwrap();
        match cli.command {
            Commands::Profile {
                action: vitalguide::ProfileCommand::Set { age, gender, .. },
            } => {
                assert_eq!(age, Some(52));
                assert_eq!(gender, Some(vitalguide::Gender::Male));
            }
            _ => panic!("expected profile set"),
        }
    }

    #[test]
    fn rejects_negative_age() {
        let res = Cli::try_parse_from(["vitalguide", "profile", "set", "--age", "-3"]);
        assert!(res.is_err());
    }

    #[test]
    fn rejects_unknown_gender() {
        let res = Cli::try_parse_from(["vitalguide", "profile", "set", "--gender", "robot"]);
        assert!(res.is_err());
    }

    #[test]
    fn topics_conflicts_with_query() {
        let res = Cli::try_parse_from(["vitalguide", "resources", "Heart Health", "--topics"]);
        assert!(res.is_err());
    }

    #[test]
    fn expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/tmp/data"), "/tmp/data");
    }
}
