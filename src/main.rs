use clap::Parser;
use smart_field::cli::commands::{cmd_mapping, cmd_render};
use smart_field::cli::config::{Cli, Commands, load_config, resolve_trace_path};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve trace path: CLI > config
    let trace_path = resolve_trace_path(cli.trace.as_deref(), &config);

    match cli.command {
        Commands::Render {
            field,
            layout,
            output,
        } => {
            cmd_render(
                &field,
                layout.as_deref(),
                output.as_deref(),
                &config,
                trace_path,
                cli.verbose,
            )?;
        }
        Commands::Mapping => {
            cmd_mapping(&config)?;
        }
    }

    Ok(())
}
