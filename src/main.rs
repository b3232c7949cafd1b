use anyhow::Context;
use clap::Parser;
use shopfront::catalog::{source_for, FixtureSource};
use shopfront::cli::{render_listing, Cli};
use shopfront::config::Config;
use shopfront::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let fixture_path = cli.fixture.clone().or_else(|| config.fixture.path.clone());
    let fixture = source_for(fixture_path.as_deref());

    match &cli.command {
        Some(command) => {
            let items = FixtureSource::load(fixture.as_ref())
                .with_context(|| format!("failed to load fixture {}", fixture.describe()))?;
            print!("{}", render_listing(&items, &command.filter(), &config.rules));
            Ok(())
        }
        None => shopfront::ui::run(config, fixture, cli.route),
    }
}
