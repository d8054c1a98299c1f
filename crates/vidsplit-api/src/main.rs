use vidsplit_core::Config;

// mimalloc keeps fragmentation down when running on musl-based images.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::from_env()?;

    let (_state, router) = vidsplit_api::setup::initialize_app(config.clone()).await?;

    vidsplit_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
