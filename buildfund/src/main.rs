use anyhow::Result;

use buildfund::config::Settings;
use buildfund::App;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    settings.validate()?;

    // Logging is initialized in App::run() so the guard lives as long as the UI
    App::new(settings).run().await?;

    Ok(())
}
