use std::env;

use anyhow::ensure;
use clap::{CommandFactory, Parser};
use cmds::Cmd;
use dialoguer::Confirm;
use util::interactive_cmd::interactive_cmd;

mod cmds;
mod util;

#[derive(Debug, Parser)]
struct Cli {
    /// Log debug messages of the integration engine
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: cmds::Commands,
}

fn main() -> anyhow::Result<()> {
    // stdout is reserved for command output
    eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!("⚙️  qrscript: numerical integration utilities ⚙️");
    eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    let cli = make_cli()?;
    init_logger(cli.verbose);
    log::info!("{:?}", cli);
    cli.command.run()
}

fn init_logger(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn make_cli() -> anyhow::Result<Cli> {
    if env::args().len() != 1 {
        return Ok(Cli::parse());
    }
    println!("🔧 Interactive mode. Start to build command...\n");
    let cmd = Cli::command();
    let args = interactive_cmd(&cmd)?;

    println!("\n🎉 Command is built!");
    println!("\t{}\n", args.join(" "));
    let confirmed = Confirm::new()
        .with_prompt("Run the command?".to_string())
        .report(true)
        .interact()?;

    ensure!(confirmed, "Operation cancelled.");
    Ok(Cli::parse_from(args))
}
