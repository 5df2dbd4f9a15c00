// src/config.rs

/// Build-time configuration injected into the view.
///
/// Both values are substituted at compile time from the build environment
/// and never change for the lifetime of the process. A variable left unset
/// resolves to `None` and renders as empty text rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppConfig {
  pub app_name: Option<&'static str>, // WELCOME_APP_NAME
  pub api_url: Option<&'static str>,  // WELCOME_API_URL
}

impl AppConfig {
  /// Resolves `WELCOME_APP_NAME` and `WELCOME_API_URL` from the build
  /// environment. Call once at startup and pass the result down.
  pub fn from_build_env() -> Self {
    Self {
      app_name: option_env!("WELCOME_APP_NAME"),
      api_url: option_env!("WELCOME_API_URL"),
    }
  }
}
