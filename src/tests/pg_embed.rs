//! Database provisioning for the end-to-end tests.
//!
//! `TEST_DATABASE_URL` is used as is when set. Otherwise an embedded
//! PostgreSQL cluster is started through `pg-embed-setup-unpriv` and a
//! database is created in it for this test process. The schema itself comes
//! from the server's own ignite fairing.
//!
//! When the cluster can't be started the tests fail, unless
//! `SKIP_TEST_CLUSTER` is truthy, in which case they print a
//! `SKIP-TEST-CLUSTER:` line and return.

use std::sync::OnceLock;

use pg_embedded_setup_unpriv::test_support::shared_cluster_handle;

static DATABASE_URL: OnceLock<Result<String, String>> = OnceLock::new();

/// URL of the database every test in this process shares.
pub(super) fn database_url() -> Result<String, String> {
    DATABASE_URL.get_or_init(provision).clone()
}

fn provision() -> Result<String, String> {
    if let Ok(url) = std::env::var("TEST_DATABASE_URL") {
        return Ok(url);
    }

    let cluster =
        shared_cluster_handle().map_err(|err| format!("start embedded cluster: {err}"))?;
    let name = format!("food_share_test_{}", std::process::id());

    let exists = cluster
        .database_exists(name.as_str())
        .map_err(|err| format!("database check: {err:?}"))?;
    if !exists {
        cluster
            .create_database(name.as_str())
            .map_err(|err| format!("create database {name}: {err:?}"))?;
    }

    Ok(cluster.connection().database_url(&name))
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes")
}

fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| is_truthy(&value))
        .unwrap_or(false)
}

/// Skips with a visible marker when allowed, fails the test otherwise.
pub(super) fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", true)]
    #[case("true", true)]
    #[case("YES", true)]
    #[case("0", false)]
    #[case("", false)]
    #[case("no", false)]
    fn skip_flag_values(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_truthy(value), expected);
    }
}
