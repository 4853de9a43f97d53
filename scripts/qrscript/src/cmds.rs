pub mod integrate;
pub mod list;
pub mod schema;
pub mod tabulate;

// -----------------------------------------------------------------------------
// Cmd
// -----------------------------------------------------------------------------
pub trait Cmd {
    fn run(&self) -> anyhow::Result<()>;
}

// -----------------------------------------------------------------------------
// Commands
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Subcommand)]
#[clap(rename_all = "snake_case")]
pub enum Commands {
    /// List integrands in the catalog
    List(list::Args),
    /// Integrate a function until the Runge estimate meets the tolerance
    Integrate(integrate::Args),
    /// Write samples of an integrand as CSV
    Tabulate(tabulate::Args),
    /// Write JSON schemas of request and response
    Schema(schema::Args),
}

impl Cmd for Commands {
    fn run(&self) -> anyhow::Result<()> {
        match self {
            Commands::List(args) => args.run(),
            Commands::Integrate(args) => args.run(),
            Commands::Tabulate(args) => args.run(),
            Commands::Schema(args) => args.run(),
        }
    }
}
