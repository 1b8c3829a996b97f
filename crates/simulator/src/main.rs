use anyhow::Context;

fn main() -> anyhow::Result<()> {
    shelfwise_observability::init();

    let config = shelfwise_simulator::SimConfig::from_env()
        .with_args(std::env::args().skip(1))
        .context("invalid command line")?;

    let stdout = std::io::stdout();
    shelfwise_simulator::run(&config, &mut stdout.lock())
}
