//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
    __  ___               __                 _____                      __
   /  |/  /__  ____ ___  / /_  ___  _____   / ___/___  ____ ___________/ /_  ___  _____
  / /|_/ / _ \/ __ `__ \/ __ \/ _ \/ ___/   \__ \/ _ \/ __ `/ ___/ ___/ __ \/ _ \/ ___/
 / /  / /  __/ / / / / / /_/ /  __/ /      ___/ /  __/ /_/ / /  / /__/ / / /  __/ /
/_/  /_/\___/_/ /_/ /_/_.___/\___/_/      /____/\___/\__,_/_/   \___/_/ /_/\___/_/
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(addr: &str, backend_url: &str) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}", addr);
    info!("Members:   http://{}/course/members", addr);
    info!("Health:    http://{}/health", addr);
    info!("API Docs:  http://{}/swagger-ui", addr);
    info!("Backend:   {}", backend_url);
    info!("{}", separator);
}
