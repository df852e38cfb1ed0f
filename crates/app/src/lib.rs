//! Wristo storefront command-line client.
//!
//! Wires the infrastructure adapters into an [`ApiClient`] and maps each
//! [`Command`] onto the storefront API.
//!
//! [`ApiClient`]: wristo_application::ApiClient

pub mod cli;
mod error;
mod storefront;

pub use cli::{Cli, Command};
pub use error::{AppError, AppResult};
pub use storefront::Storefront;

/// Connects with the options in `cli` and runs its command, writing
/// results to `out`.
///
/// # Errors
///
/// Returns an error if the client cannot be set up or the command fails.
pub async fn run(cli: &Cli, out: &mut impl std::io::Write) -> AppResult<()> {
    let storefront = Storefront::connect(cli).await?;
    storefront.execute(&cli.command, out).await
}
