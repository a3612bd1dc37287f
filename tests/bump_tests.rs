//! End-to-end tests for bumping a project descriptor through the library
//!
//! These tests cover:
//! - Each bump level against a realistic pom.xml
//! - Suffix handling with and without --close-version
//! - Lossless rewrites (only the project version changes)
//! - Failure paths that must leave the file byte-for-byte unchanged

mod common;

use common::{TestResult, pom_with_version, pom_without_version, write_pom};
use pombump::cli::bump_project;
use pombump::{BumpLevel, BumpRequest, DescriptorError, PomBumpError, VersionError};
use std::fs;
use tempfile::TempDir;

fn request(dir: &TempDir, level: Option<BumpLevel>, keep_suffix: bool) -> BumpRequest {
    BumpRequest::new(dir.path())
        .with_level(level)
        .with_keep_suffix(keep_suffix)
}

#[test]
fn test_minor_bump_preserves_snapshot() -> TestResult {
    let dir = TempDir::new()?;
    let pom = write_pom(dir.path(), &pom_with_version("2.5.0-SNAPSHOT"));

    let report = bump_project(&request(&dir, Some(BumpLevel::Minor), true))?;

    assert_eq!(report.previous, "2.5.0-SNAPSHOT");
    assert_eq!(report.next, "2.6.0-SNAPSHOT");
    assert_eq!(report.descriptor, pom);
    assert_eq!(
        fs::read_to_string(&pom)?,
        pom_with_version("2.6.0-SNAPSHOT")
    );
    Ok(())
}

#[test]
fn test_major_bump_closes_version() -> TestResult {
    let dir = TempDir::new()?;
    let pom = write_pom(dir.path(), &pom_with_version("2.5.0-SNAPSHOT"));

    let report = bump_project(&request(&dir, Some(BumpLevel::Major), false))?;

    assert_eq!(report.next, "3.0.0");
    assert_eq!(fs::read_to_string(&pom)?, pom_with_version("3.0.0"));
    Ok(())
}

#[test]
fn test_patch_bump() -> TestResult {
    let dir = TempDir::new()?;
    let pom = write_pom(dir.path(), &pom_with_version("1.9.9"));

    bump_project(&request(&dir, Some(BumpLevel::Patch), true))?;

    assert_eq!(fs::read_to_string(&pom)?, pom_with_version("1.9.10"));
    Ok(())
}

#[test]
fn test_parent_and_dependency_versions_untouched() -> TestResult {
    let dir = TempDir::new()?;
    let pom = write_pom(dir.path(), &pom_with_version("0.3.1"));

    bump_project(&request(&dir, Some(BumpLevel::Major), true))?;

    let written = fs::read_to_string(&pom)?;
    assert!(written.contains("<version>7.1.0</version>"));
    assert!(written.contains("<version>5.10.2</version>"));
    assert!(written.contains("<version>1.0.0</version>"));
    assert!(written.contains("xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\""));
    assert!(written.contains("xsi:schemaLocation="));
    assert!(written.contains("<!-- Managed by the release team -->"));
    Ok(())
}

#[test]
fn test_no_level_with_close_version_only_drops_suffix() -> TestResult {
    let dir = TempDir::new()?;
    let pom = write_pom(dir.path(), &pom_with_version("4.2.0-SNAPSHOT"));

    let report = bump_project(&request(&dir, None, false))?;

    assert_eq!(report.next, "4.2.0");
    assert_eq!(fs::read_to_string(&pom)?, pom_with_version("4.2.0"));
    Ok(())
}

#[test]
fn test_explicit_descriptor_file() -> TestResult {
    let dir = TempDir::new()?;
    let custom = dir.path().join("release-pom.xml");
    fs::write(&custom, pom_with_version("1.0.0-rc1"))?;

    let request = BumpRequest::new(&custom).with_level(Some(BumpLevel::Minor));
    let report = bump_project(&request)?;

    assert_eq!(report.descriptor, custom);
    assert_eq!(fs::read_to_string(&custom)?, pom_with_version("1.1.0-rc1"));
    Ok(())
}

#[test]
fn test_missing_version_leaves_file_unchanged() -> TestResult {
    let dir = TempDir::new()?;
    let original = pom_without_version();
    let pom = write_pom(dir.path(), &original);

    let err = bump_project(&request(&dir, Some(BumpLevel::Patch), true)).unwrap_err();

    assert!(matches!(
        err,
        PomBumpError::Descriptor(DescriptorError::FieldMissing { .. })
    ));
    assert_eq!(fs::read(&pom)?, original.as_bytes());
    Ok(())
}

#[test]
fn test_unparseable_version_leaves_file_unchanged() -> TestResult {
    let dir = TempDir::new()?;
    let original = pom_with_version("${revision}");
    let pom = write_pom(dir.path(), &original);

    let err = bump_project(&request(&dir, Some(BumpLevel::Minor), true)).unwrap_err();

    match err {
        PomBumpError::Version(VersionError::Parse { input }) => {
            assert_eq!(input, "${revision}");
        }
        other => panic!("Expected version parse error, got {:?}", other),
    }
    assert_eq!(fs::read(&pom)?, original.as_bytes());
    Ok(())
}

#[test]
fn test_missing_descriptor_is_io_error() -> TestResult {
    let dir = TempDir::new()?;

    let err = bump_project(&request(&dir, Some(BumpLevel::Patch), true)).unwrap_err();

    assert!(matches!(
        err,
        PomBumpError::Descriptor(DescriptorError::Io(_))
    ));
    assert!(!dir.path().join("pom.xml").exists());
    Ok(())
}

#[test]
fn test_malformed_descriptor_leaves_file_unchanged() -> TestResult {
    let dir = TempDir::new()?;
    let original = pom_with_version("1.0.0").replace("</packaging>", "</packagin>");
    let pom = write_pom(dir.path(), &original);

    let err = bump_project(&request(&dir, Some(BumpLevel::Patch), true)).unwrap_err();

    assert!(matches!(
        err,
        PomBumpError::Descriptor(DescriptorError::Xml { .. })
    ));
    assert_eq!(fs::read(&pom)?, original.as_bytes());
    Ok(())
}

#[test]
fn test_repeated_bumps_accumulate() -> TestResult {
    let dir = TempDir::new()?;
    let pom = write_pom(dir.path(), &pom_with_version("0.1.0-SNAPSHOT"));

    bump_project(&request(&dir, Some(BumpLevel::Patch), true))?;
    bump_project(&request(&dir, Some(BumpLevel::Patch), true))?;
    bump_project(&request(&dir, Some(BumpLevel::Minor), true))?;
    let report = bump_project(&request(&dir, None, false))?;

    assert_eq!(report.previous, "0.2.0-SNAPSHOT");
    assert_eq!(fs::read_to_string(&pom)?, pom_with_version("0.2.0"));
    Ok(())
}

#[test]
fn test_byte_order_mark_preserved_on_rewrite() -> TestResult {
    let dir = TempDir::new()?;
    let original = format!("\u{feff}{}", pom_with_version("1.0.0"));
    let pom = write_pom(dir.path(), &original);

    let report = bump_project(&request(&dir, Some(BumpLevel::Patch), true))?;

    assert_eq!(report.next, "1.0.1");
    assert_eq!(
        fs::read_to_string(&pom)?,
        format!("\u{feff}{}", pom_with_version("1.0.1"))
    );
    Ok(())
}

#[test]
fn test_crlf_descriptor_keeps_line_endings() -> TestResult {
    let dir = TempDir::new()?;
    let original = pom_with_version("2.5.0-SNAPSHOT").replace('\n', "\r\n");
    let pom = write_pom(dir.path(), &original);

    bump_project(&request(&dir, Some(BumpLevel::Minor), true))?;

    assert_eq!(
        fs::read_to_string(&pom)?,
        pom_with_version("2.6.0-SNAPSHOT").replace('\n', "\r\n")
    );
    Ok(())
}

#[test]
fn test_version_on_its_own_line_keeps_suffix_and_layout() -> TestResult {
    let dir = TempDir::new()?;
    let original = pom_with_version("2.5.0-SNAPSHOT")
        .replace("<version>2.5.0-SNAPSHOT</version>", "<version>2.5.0-SNAPSHOT\n  </version>");
    let pom = write_pom(dir.path(), &original);

    let report = bump_project(&request(&dir, Some(BumpLevel::Minor), true))?;

    assert_eq!(report.next, "2.6.0-SNAPSHOT");
    assert_eq!(
        fs::read_to_string(&pom)?,
        original.replace("2.5.0-SNAPSHOT\n", "2.6.0-SNAPSHOT\n")
    );
    Ok(())
}
