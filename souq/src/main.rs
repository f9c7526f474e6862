use anyhow::Context;
use souq::menu::Menu;
use souq::{App, Config};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    souq::logger::init_logger();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.data_dir).with_context(|| {
        format!(
            "failed to create data directory {}",
            config.data_dir.display()
        )
    })?;
    tracing::info!(data_dir = %config.data_dir.display(), "starting souq");

    let app = App::initialize(&config);
    Menu::new(app).run();

    tracing::info!("souq stopped");
    Ok(())
}
