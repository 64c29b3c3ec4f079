use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "coursedrip-cli", version, about = "Coursedrip CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the quiz drip filter over a content fixture
    Filter(commands::filter::FilterArgs),
    /// Preview the drip notice message for a quiz
    Message(commands::message::MessageArgs),
    /// Inspect a quiz's drip type
    DripType(commands::drip_type::DripTypeArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Filter(args) => commands::filter::run(args),
        Commands::Message(args) => commands::message::run(args),
        Commands::DripType(args) => commands::drip_type::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
