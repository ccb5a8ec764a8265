//! Manifest loading, namespace lookup and repository resolution tests

use composer_manifest::{find_manifest, Finding, Manifest, RepositoryEntry, Suffix, Version, MANIFEST_FILE};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

const FULL_MANIFEST: &str = r#"
{
    "name": "acme/billing",
    "description": "Invoices and payments",
    "version": "v2.4.0-RC",
    "type": "library",
    "license": "MIT",
    "require": {
        "php": ">=8.1",
        "acme/core": "*"
    },
    "require-dev": {
        "phpunit/phpunit": "^10.5"
    },
    "repositories": [
        { "type": "path", "url": "../core" },
        { "type": "vcs", "url": "https://example.com/acme/legacy.git" }
    ],
    "autoload": {
        "psr-4": {
            "Acme\\Billing\\": "src",
            "Acme\\Billing\\Gateway\\": "gateways/src"
        },
        "files": ["src/functions.php"]
    },
    "autoload-dev": {
        "psr-4": {
            "Acme\\Billing\\Tests\\": "tests"
        }
    }
}
"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn create_manifest_file(dir: &Path, content: &str) -> PathBuf {
    let manifest_path = dir.join(MANIFEST_FILE);
    fs::write(&manifest_path, content).unwrap();
    manifest_path
}

#[fixture]
fn billing() -> Manifest {
    init_tracing();
    let (manifest, report) = Manifest::from_json_str(FULL_MANIFEST, "/work/billing/composer.json");
    assert!(report.is_none(), "unexpected findings: {:?}", report);
    manifest
}

// ============================================================================
// Decoding Tests
// ============================================================================

#[rstest]
fn test_all_fields_decoded(billing: Manifest) {
    assert_eq!(billing.name, "acme/billing");
    assert_eq!(billing.description, "Invoices and payments");
    assert_eq!(billing.kind, "library");
    assert_eq!(billing.raw_version, "v2.4.0-RC");
    assert_eq!(billing.version, Some(Version::new(2, 4, 0).with_suffix(Suffix::Rc)));
    assert_eq!(billing.require.len(), 2);
    assert_eq!(billing.require_dev["phpunit/phpunit"], "^10.5");
    assert_eq!(billing.repositories.len(), 2);
    assert_eq!(billing.autoload.psr4.len(), 2);
    assert_eq!(billing.autoload.files, vec!["src/functions.php".to_string()]);
    assert_eq!(billing.autoload_dev.psr4.len(), 1);
    assert_eq!(billing.path(), Path::new("/work/billing/composer.json"));
    assert_eq!(billing.root_dir(), Path::new("/work/billing"));
}

#[test]
fn test_empty_object_uses_defaults() {
    let (manifest, report) = Manifest::from_json_str("{}", "/work/empty/composer.json");

    assert_eq!(manifest.name, "");
    assert!(manifest.require.is_empty());
    assert!(manifest.autoload.is_empty());
    assert_eq!(report.unwrap().len(), 1);
}

#[test]
fn test_invalid_version_keeps_manifest_usable() {
    let (manifest, report) = Manifest::from_json_str(
        r#"{"name": "acme/app", "version": "1.0.0-alpha3", "autoload": {"psr-4": {"App\\": "src"}}}"#,
        "/work/app/composer.json",
    );

    let report = report.unwrap();
    assert_eq!(report.len(), 1);
    assert!(!report.has_critical());
    assert_eq!(
        report.to_string(),
        "config /work/app/composer.json: unknown version suffix 'alpha3'\n"
    );

    assert_eq!(manifest.version, None);
    assert_eq!(
        manifest.psr4_path_for_namespace(r"App\Models"),
        Some("app/src".to_string())
    );
}

#[rstest]
#[case(r#"{"name": null, "version": "1.0.0"}"#)]
#[case(r#"{"description": null, "version": "1.0.0"}"#)]
#[case(r#"{"type": null, "version": "1.0.0"}"#)]
#[case(r#"{"version": null}"#)]
#[case(r#"{"require": null, "version": "1.0.0"}"#)]
#[case(r#"{"require-dev": null, "version": "1.0.0"}"#)]
#[case(r#"{"repositories": null, "version": "1.0.0"}"#)]
#[case(r#"{"repositories": [{"type": null, "url": null}], "version": "1.0.0"}"#)]
#[case(r#"{"autoload": null, "version": "1.0.0"}"#)]
#[case(r#"{"autoload": {"psr-4": null, "files": null}, "version": "1.0.0"}"#)]
#[case(r#"{"autoload-dev": null, "version": "1.0.0"}"#)]
fn test_null_fields_load_as_empty(#[case] content: &str) {
    let (manifest, report) = Manifest::from_json_str(content, "/work/app/composer.json");

    if let Some(report) = report {
        assert_eq!(report.findings(), &[Finding::warning("version is empty")]);
    }
    assert_eq!(manifest.path(), Path::new("/work/app/composer.json"));
    assert!(manifest.require.is_empty());
    assert!(manifest.autoload.is_empty());
    assert!(manifest.autoload_dev.is_empty());
    assert!(manifest
        .repositories
        .iter()
        .all(|r| r.kind.is_empty() && r.url.is_empty()));
}

#[rstest]
#[case(r#"{"name": "acme/app", "version": "1.0.0""#)]
#[case(r#"{"name": 42, "version": "1.0.0"}"#)]
#[case(r#""acme/app""#)]
#[case("")]
fn test_decode_failure_is_critical(#[case] content: &str) {
    let (manifest, report) = Manifest::from_json_str(content, "/work/app/composer.json");

    let report = report.unwrap();
    assert_eq!(report.len(), 1);
    assert!(report.has_critical());
    assert!(report
        .to_string()
        .starts_with("config /work/app/composer.json: <critical> invalid JSON"));

    assert_eq!(manifest.name, "");
    assert_eq!(manifest.version, None);
    assert!(manifest.repositories.is_empty());
}

// ============================================================================
// File Loading Tests
// ============================================================================

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let manifest_path = create_manifest_file(temp_dir.path(), FULL_MANIFEST);

    let (manifest, report) = Manifest::load_from_file(&manifest_path);

    assert!(report.is_none());
    assert_eq!(manifest.name, "acme/billing");
    assert_eq!(manifest.root_dir(), temp_dir.path());
}

#[test]
fn test_load_discovered_manifest() {
    let temp_dir = TempDir::new().unwrap();
    create_manifest_file(temp_dir.path(), r#"{"name": "acme/app", "version": "0.1.0"}"#);
    let nested = temp_dir.path().join("src").join("Http").join("Controllers");
    fs::create_dir_all(&nested).unwrap();

    let manifest_path = find_manifest(&nested).unwrap();
    let (manifest, report) = Manifest::load_from_file(manifest_path);

    assert!(report.is_none());
    assert_eq!(manifest.name, "acme/app");
}

// ============================================================================
// Namespace Resolution Tests
// ============================================================================

#[rstest]
#[case(r"Acme\Billing", Some("billing/src"))]
#[case(r"Acme\Billing\Invoice", Some("billing/src"))]
#[case(r"Acme\Billing\Gateway", Some("billing/gateways/src"))]
#[case(r"Acme\Billing\Gateway\Stripe", Some("billing/gateways/src"))]
#[case(r"Acme\Billing\Tests", Some("billing/src"))]
#[case(r"Acme\BillingExtra", None)]
#[case(r"Acme\Other", None)]
fn test_namespace_resolution(
    billing: Manifest,
    #[case] namespace: &str,
    #[case] expected: Option<&str>,
) {
    assert_eq!(
        billing.psr4_path_for_namespace(namespace).as_deref(),
        expected
    );
}

#[test]
fn test_dev_namespace_resolution() {
    let (manifest, _) = Manifest::from_json_str(
        r#"{
            "version": "1.0.0",
            "autoload": {"psr-4": {"My\\Core\\": "src"}},
            "autoload-dev": {"psr-4": {"My\\Fixtures\\": "tests/fixtures"}}
        }"#,
        "/srv/pkg/composer.json",
    );

    assert_eq!(
        manifest.psr4_path_for_namespace(r"My\Core"),
        Some("pkg/src".to_string())
    );
    assert_eq!(
        manifest.psr4_path_for_namespace(r"My\Fixtures\Users"),
        Some("pkg/tests/fixtures".to_string())
    );
    assert_eq!(manifest.psr4_path_for_namespace(r"My\Other"), None);
}

#[test]
fn test_overlapping_prefixes_pick_longest() {
    let (manifest, _) = Manifest::from_json_str(
        r#"{"version": "1.0.0", "autoload": {"psr-4": {"My\\": "a", "My\\Core\\": "b"}}}"#,
        "/srv/pkg/composer.json",
    );

    assert_eq!(
        manifest.psr4_path_for_namespace(r"My\Core\Utils"),
        Some("pkg/b".to_string())
    );
}

// ============================================================================
// Repository Resolution Tests
// ============================================================================

#[rstest]
fn test_resolve_local_repositories(mut billing: Manifest) {
    billing.resolve_local_repositories();

    assert_eq!(
        billing.repositories,
        vec![
            RepositoryEntry {
                kind: "path".to_string(),
                url: "/work/core".to_string(),
                resolved: true,
            },
            RepositoryEntry {
                kind: "vcs".to_string(),
                url: "https://example.com/acme/legacy.git".to_string(),
                resolved: false,
            },
        ]
    );

    // A second pass leaves resolved entries alone.
    let before = billing.repositories.clone();
    billing.resolve_local_repositories();
    assert_eq!(billing.repositories, before);
}

#[test]
fn test_resolve_entry_against_base() {
    let mut entry = RepositoryEntry::local("../lib");
    let resolved = entry.resolve_url("/proj/app").clone();

    assert_eq!(resolved.url, "/proj/lib");
    assert!(resolved.resolved);
    assert_eq!(entry.resolve_url("/proj/app").clone(), resolved);
}

#[rstest]
#[case("/proj/app", "./lib/../vendor/pkg", "/proj/app/vendor/pkg")]
#[case("/proj/app", "../../../../lib", "/lib")]
#[case("/proj/app/", "lib/", "/proj/app/lib")]
#[case("proj/app", "../lib", "proj/lib")]
fn test_resolved_paths_are_clean(
    #[case] base: &str,
    #[case] url: &str,
    #[case] expected: &str,
) {
    let mut entry = RepositoryEntry::local(url);
    entry.resolve_url(base);
    assert_eq!(entry.url, expected);
}
