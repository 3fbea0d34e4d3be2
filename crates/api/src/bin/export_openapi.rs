// Export OpenAPI specification as JSON
//
// Usage: cargo run --bin export-openapi > docs/api/openapi.json
//
// This binary generates the OpenAPI document without starting the API server.

use anyhow::Context;
use marquee_api::openapi::ApiDoc;

fn main() -> anyhow::Result<()> {
    let doc = ApiDoc::to_json().context("Failed to serialize OpenAPI document")?;
    println!("{}", doc);
    Ok(())
}
