mod cli;
mod commands;
mod inputs;
mod lists;
mod logging;
mod runner;
mod scripts;
mod setup;
mod util;
mod version;

fn main() -> anyhow::Result<()> {
    let app = cli::parse();
    logging::init(app.verbose);
    runner::run(app)
}
