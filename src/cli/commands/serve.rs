//! Run the HTTP server

use blogo::app::App;
use blogo::config::BlogConfig;
use blogo::server;

/// Build the app from configuration and serve until stopped
pub fn serve(config: &BlogConfig, ephemeral: bool) -> anyhow::Result<()> {
    let app = App::from_config(config, ephemeral)?;
    let addr = config.bind_addr();
    println!("Serving {} at http://{addr}", app.site.title);
    server::serve(&app, &addr)
}
