use {
    anyhow::Result,
    icon_gen::basis::OUTPUT_DIR,
    tracing_subscriber::EnvFilter,
};

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    icon_gen::generate(OUTPUT_DIR)?;

    println!("Icons generated!");
    Ok(())
}
