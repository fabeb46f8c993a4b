use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use fafetch::{resolve_request, Api, Family, IconArgs, Style, TerminalPrompt};

/// Fetch any FontAwesome icon from the FontAwesome library.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Icon name (e.g., 'house')
    name: Option<String>,

    /// Icon family
    #[arg(value_enum)]
    family: Option<Family>,

    /// Icon style (not necessary for the families 'brands', 'duotone', and 'sharp-duotone')
    #[arg(value_enum)]
    style: Option<Style>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let args = IconArgs {
        name: cli.name,
        family: cli.family,
        style: cli.style,
    };

    let request = match resolve_request(args, &mut TerminalPrompt) {
        Ok(request) => request,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let session = match Api::new().connect().await {
        Ok(session) => session,
        Err(err) => {
            error!("Exiting due to version extraction failure: {err}");
            return ExitCode::FAILURE;
        }
    };

    match session.fetch_icon(&request).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .without_time()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_choices() {
        let cli = Cli::try_parse_from(["fafetch", "house", "sharp-duotone", "thin"]).unwrap();
        assert_eq!(cli.family, Some(Family::SharpDuotone));
        assert_eq!(cli.style, Some(Style::Thin));

        assert!(Cli::try_parse_from(["fafetch", "house", "outline"]).is_err());
        assert!(Cli::try_parse_from(["fafetch", "house", "classic", "bold"]).is_err());
    }

    #[test]
    fn test_all_arguments_optional() {
        let cli = Cli::try_parse_from(["fafetch"]).unwrap();
        assert!(cli.name.is_none() && cli.family.is_none() && cli.style.is_none());
    }
}
