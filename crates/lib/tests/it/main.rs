/*! Integration tests for cfgtree.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - tree: Path reads, writes, typed accessors and merging on Config
 * - interpolate: Template substitution through Config::prepare
 * - decode: Loading JSON, YAML and XML data and files
 * - registry: Named collections of configs
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("cfgtree=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod decode;
mod interpolate;
mod tree;
