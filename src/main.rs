use clap::Parser;
use std::process;
use windfarm_registry::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the selected command
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(args)) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Wind Farm Registry - Balkan Wind Farm Inventory");
    println!("===============================================");
    println!();
    println!("Maintain a SQLite inventory of operating Balkan wind farms: import the raw");
    println!("global dataset, serve the records over REST, and search them in either");
    println!("Albanian or English spelling.");
    println!();
    println!("USAGE:");
    println!("    windfarm-registry <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    serve       Run the REST backend");
    println!("    import      Import a CSV dataset into the farm store");
    println!("    check       Report the store's current contents");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Import the dataset, writing only eligible operating farms:");
    println!("    windfarm-registry import data.csv");
    println!();
    println!("    # Preview what an import would do without touching the store:");
    println!("    windfarm-registry import data.csv --dry-run");
    println!();
    println!("    # Serve the inventory on the default port:");
    println!("    windfarm-registry serve");
    println!();
    println!("For detailed help on any command, use:");
    println!("    windfarm-registry <COMMAND> --help");
}
