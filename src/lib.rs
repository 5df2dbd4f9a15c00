// src/lib.rs
mod app;
mod config;

pub use app::WelcomeCounter;
pub use config::AppConfig;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// Entry point, called when the WASM module is loaded by the host page.
/// Mounts the app to the document body.
#[wasm_bindgen(start)]
pub fn main() {
  // Set panic hook for better error messages in the browser console
  console_error_panic_hook::set_once();
  _ = console_log::init_with_level(log::Level::Debug);

  let config = AppConfig::from_build_env();
  log::info!("mounting with {:?}", config);

  _ = leptos::mount::mount_to_body(move || view! { <WelcomeCounter config=config /> });
}
