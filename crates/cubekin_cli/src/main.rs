//! Command-line front end for cubekin.

mod cli;
mod scramble;
mod settings;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    color_eyre::install()?;
    env_logger::builder().init();

    let args = cli::Args::parse();
    cli::exec(args)
}
