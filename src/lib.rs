//! Solo Song Library
//!
//! This library implements a small web server that signs a user in with
//! Spotify, looks at their top tracks and recommends exactly one song. It
//! includes modules for the HTTP surface, Spotify Web API communication,
//! configuration management, page rendering and various utilities.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints (`/`, `/login`, `/callback`, `/health`)
//! - `config` - Configuration management and environment variables
//! - `recommend` - The token -> top tracks -> recommendation pipeline
//! - `render` - HTML rendering of the recommendation page
//! - `server` - Router construction and the listening server
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use solosong::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> solosong::Res<()> {
//!     config::load_env();
//!     let config = config::Config::from_env()?;
//!     server::start_api_server(config).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod recommend;
pub mod render;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern for the outer layers of the
/// application using a boxed dynamic error trait object. Module level code
/// returns its own typed errors which convert into this alias with `?`.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Listening on port {}", port);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Server ready at http://localhost:{}", port);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Only used during startup, never
/// from inside a request handler.
///
/// # Example
///
/// ```
/// error!("Invalid configuration: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, such as a failed upstream call that ends a
/// single request but leaves the server running.
///
/// # Example
///
/// ```
/// warning!("Token exchange failed: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
