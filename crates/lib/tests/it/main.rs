/*! Integration tests for dynmap.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - accessors: typed accessors and their failure causes over a JSON payload
 * - expand: key expansion of bracket-chained form input
 * - transform: the pure map transforms (merge, slice, select, reduce, ...)
 * - json: the serde_json boundary in both directions
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("dynmap=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod expand;
mod helpers;
mod transform;
