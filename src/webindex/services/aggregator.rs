use std::collections::{BTreeMap, BTreeSet};

use crate::webindex::domain::{Artifact, DebianVersion, PackageRecord, PackageSummary};

/// Groups records by package name and computes one summary per package,
/// ordered by name ascending.
///
/// Within a group, the distinct versions are sorted descending under the
/// Debian order: the head becomes `newest_version`, the tail (same order)
/// `older_versions`. The newest-version records contribute the distinct
/// (arch, filename) artifact pairs, sorted ascending, and the pool
/// directory of the first such record.
pub fn summarize(records: &[PackageRecord]) -> Vec<PackageSummary> {
    let mut groups: BTreeMap<&str, Vec<&PackageRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(&record.name).or_default().push(record);
    }

    groups
        .into_iter()
        .map(|(name, group)| summarize_group(name, &group))
        .collect()
}

fn summarize_group(name: &str, group: &[&PackageRecord]) -> PackageSummary {
    let distinct_versions: BTreeSet<&str> =
        group.iter().map(|r| r.version.as_str()).collect();
    let mut versions: Vec<DebianVersion> = distinct_versions
        .into_iter()
        .map(DebianVersion::new)
        .collect();
    versions.sort_by(|a, b| b.cmp(a));

    // A group exists only because at least one record carries this name.
    let newest_version = versions[0].as_str().to_string();
    let older_versions: Vec<String> = versions
        .drain(1..)
        .map(DebianVersion::into_string)
        .collect();

    let newest_records: Vec<&&PackageRecord> = group
        .iter()
        .filter(|r| r.version == newest_version)
        .collect();

    let artifacts: BTreeSet<Artifact> = newest_records
        .iter()
        .map(|r| Artifact::new(r.arch.as_str(), r.filename.as_str()))
        .collect();

    let pool_dir = pool_dir_of(&newest_records[0].filename);

    PackageSummary {
        name: name.to_string(),
        newest_version,
        newest_artifacts: artifacts.into_iter().collect(),
        older_versions,
        pool_dir,
    }
}

/// Directory component of a pool filename. A filename without a directory
/// component is returned unchanged, matching the original behavior.
fn pool_dir_of(filename: &str) -> String {
    filename
        .rsplit_once('/')
        .map_or(filename, |(dir, _)| dir)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, version: &str, arch: &str, filename: &str) -> PackageRecord {
        PackageRecord::new("amd64", name, version, arch, filename)
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn test_newest_and_older_split() {
        let records = vec![
            record("tool", "2.0", "amd64", "pool/main/t/tool/tool_2.0_amd64.deb"),
            record("tool", "1.0", "amd64", "pool/main/t/tool/tool_1.0_amd64.deb"),
            record("tool", "1.5", "amd64", "pool/main/t/tool/tool_1.5_amd64.deb"),
        ];
        let summaries = summarize(&records);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].newest_version, "2.0");
        assert_eq!(summaries[0].older_versions, vec!["1.5", "1.0"]);
    }

    #[test]
    fn test_debian_order_not_lexicographic() {
        let records = vec![
            record("tool", "1.9", "amd64", "pool/t/tool_1.9_amd64.deb"),
            record("tool", "1.10", "amd64", "pool/t/tool_1.10_amd64.deb"),
        ];
        let summaries = summarize(&records);
        assert_eq!(summaries[0].newest_version, "1.10");
        assert_eq!(summaries[0].older_versions, vec!["1.9"]);
    }

    #[test]
    fn test_single_version_has_no_older_versions() {
        let records = vec![record("tool", "1.0", "amd64", "pool/t/tool_1.0_amd64.deb")];
        let summaries = summarize(&records);
        assert_eq!(summaries[0].newest_version, "1.0");
        assert!(summaries[0].older_versions.is_empty());
    }

    #[test]
    fn test_summaries_sorted_by_name() {
        let records = vec![
            record("zsh", "5.9", "amd64", "pool/z/zsh_5.9_amd64.deb"),
            record("bash", "5.2", "amd64", "pool/b/bash_5.2_amd64.deb"),
            record("htop", "3.2", "amd64", "pool/h/htop_3.2_amd64.deb"),
        ];
        let names: Vec<String> = summarize(&records).into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["bash", "htop", "zsh"]);
    }

    #[test]
    fn test_artifacts_across_architectures() {
        let records = vec![
            PackageRecord::new("amd64", "tool", "2.0", "amd64", "pool/t/tool_2.0_amd64.deb"),
            PackageRecord::new("arm64", "tool", "2.0", "arm64", "pool/t/tool_2.0_arm64.deb"),
            PackageRecord::new("amd64", "tool", "1.0", "amd64", "pool/t/tool_1.0_amd64.deb"),
        ];
        let summaries = summarize(&records);
        assert_eq!(
            summaries[0].newest_artifacts,
            vec![
                Artifact::new("amd64", "pool/t/tool_2.0_amd64.deb"),
                Artifact::new("arm64", "pool/t/tool_2.0_arm64.deb"),
            ]
        );
    }

    #[test]
    fn test_identical_artifacts_deduplicated() {
        // An Architecture: all package appears in every per-arch index with
        // the same filename.
        let records = vec![
            PackageRecord::new("amd64", "docs", "1.0", "all", "pool/d/docs_1.0_all.deb"),
            PackageRecord::new("arm64", "docs", "1.0", "all", "pool/d/docs_1.0_all.deb"),
        ];
        let summaries = summarize(&records);
        assert_eq!(
            summaries[0].newest_artifacts,
            vec![Artifact::new("all", "pool/d/docs_1.0_all.deb")]
        );
    }

    #[test]
    fn test_older_version_artifacts_excluded() {
        let records = vec![
            record("tool", "2.0", "amd64", "pool/t/tool_2.0_amd64.deb"),
            record("tool", "1.0", "amd64", "pool/t/tool_1.0_amd64.deb"),
        ];
        let summaries = summarize(&records);
        assert_eq!(summaries[0].newest_artifacts.len(), 1);
        assert_eq!(
            summaries[0].newest_artifacts[0].filename,
            "pool/t/tool_2.0_amd64.deb"
        );
    }

    #[test]
    fn test_pool_dir_is_dirname_of_newest_artifact() {
        let records = vec![record(
            "htop",
            "3.2.2-2",
            "amd64",
            "pool/main/h/htop/htop_3.2.2-2_amd64.deb",
        )];
        let summaries = summarize(&records);
        assert_eq!(summaries[0].pool_dir, "pool/main/h/htop");
    }

    #[test]
    fn test_pool_dir_without_slash_left_unchanged() {
        let records = vec![record("odd", "1.0", "amd64", "odd_1.0_amd64.deb")];
        let summaries = summarize(&records);
        assert_eq!(summaries[0].pool_dir, "odd_1.0_amd64.deb");
    }

    #[test]
    fn test_epoch_and_tilde_affect_newest_selection() {
        let records = vec![
            record("tool", "1:0.5", "amd64", "pool/t/tool_1%3a0.5_amd64.deb"),
            record("tool", "2.0", "amd64", "pool/t/tool_2.0_amd64.deb"),
            record("tool", "2.1~rc1", "amd64", "pool/t/tool_2.1~rc1_amd64.deb"),
        ];
        let summaries = summarize(&records);
        // Epoch dominates everything else.
        assert_eq!(summaries[0].newest_version, "1:0.5");
        assert_eq!(summaries[0].older_versions, vec!["2.1~rc1", "2.0"]);
    }
}
