//! Endpoint command implementation.

use super::ProviderOptions;
use transync_engine::PROVIDER_SCHEME;

/// Prints the provider string a DSN resolves to.
///
/// No request is sent.
pub fn run(options: &ProviderOptions) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", describe(options)?);
    Ok(())
}

fn describe(options: &ProviderOptions) -> Result<String, Box<dyn std::error::Error>> {
    let endpoint = options.factory().endpoint(&options.dsn)?;
    Ok(format!("{PROVIDER_SCHEME}://{endpoint}"))
}
