//! Keaz dashboard
//!
//! With the `server` feature this binary serves the compiled web bundle;
//! built for the browser it launches the Dioxus app.

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    keaz_dashboard::server::run().await
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(keaz_dashboard::app::App);
}
