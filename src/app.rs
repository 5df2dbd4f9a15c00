// src/app.rs
use leptos::prelude::*;

use crate::config::AppConfig;

/// The sole view of the starter: a fixed greeting, a click counter, and the
/// configured application name and API URL passed through into the markup.
#[component]
pub fn WelcomeCounter(config: AppConfig) -> impl IntoView {
  let (count, set_count) = signal(0u32);

  let on_click = move |_| {
    set_count.update(|n| *n += 1);
    log::debug!("count is now {}", count.get_untracked());
  };

  view! {
    <div>
      <h1>"Welcome to Vite React Starter!"</h1>
      <p>"You clicked " {count} " times"</p>
      <button on:click=on_click>"Click me"</button>

      <h1>"Welcome to " {config.app_name} "!"</h1>
      <p>"API URL: " {config.api_url}</p>
    </div>
  }
}
