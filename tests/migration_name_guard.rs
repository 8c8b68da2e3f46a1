use std::collections::{HashMap, HashSet};
use std::path::Path;

use sea_orm_migration::MigratorTrait;

use job_board::database::migrations::Migrator;

/// Guard test to ensure all migrations have:
/// 1. Unique names
/// 2. A well-formed timestamped name: mYYYYMMDD_HHMMSS_description
///    - Date segment: 8 digits (YYYYMMDD)
///    - Sequence segment: 6 digits
///    - Description: lowercase alphanumeric + underscores, at least 1 char
/// 3. Every migration file under `src/database/migrations/` is registered with
///    the `Migrator` under its file stem
#[test]
fn migration_names_are_unique_and_well_formed() {
    let migrations = Migrator::migrations();
    assert!(!migrations.is_empty(), "Migrator reports no migrations");

    let mut seen: HashSet<String> = HashSet::new();
    let mut duplicates: HashMap<String, usize> = HashMap::new();
    let mut invalid: Vec<String> = Vec::new();

    for mig in migrations.iter() {
        let name = mig.name().to_string();

        if !is_valid_migration_name(&name) {
            invalid.push(name.clone());
        }

        if !seen.insert(name.clone()) {
            *duplicates.entry(name).or_insert(1) += 1;
        }
    }

    let migrations_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("database")
        .join("migrations");
    let mut unregistered: Vec<String> = Vec::new();

    if let Ok(read_dir) = std::fs::read_dir(&migrations_dir) {
        for entry in read_dir.flatten() {
            let path = entry.path();
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if stem.starts_with('m') && stem != "mod" && !seen.contains(stem) {
                unregistered.push(stem.to_string());
            }
        }
    }

    if !duplicates.is_empty() || !invalid.is_empty() || !unregistered.is_empty() {
        let mut msg = String::from("Migration naming guard failed:\n");

        if !duplicates.is_empty() {
            msg.push_str("  Duplicate names detected:\n");
            for (name, count) in duplicates {
                msg.push_str(&format!("    * {} (occurrences: {})\n", name, count + 1));
            }
        }

        if !invalid.is_empty() {
            msg.push_str("  Invalid naming format (expected mYYYYMMDD_HHMMSS_description):\n");
            for name in invalid {
                msg.push_str(&format!("    * {}\n", name));
            }
        }

        if !unregistered.is_empty() {
            msg.push_str("  Migration files not reported by Migrator:\n");
            for f in unregistered {
                msg.push_str(&format!("    * {}\n", f));
            }
        }

        panic!("{msg}");
    }
}

/// m + 8 digits + '_' + 6 digits + '_' + [a-z0-9_]+
fn is_valid_migration_name(name: &str) -> bool {
    let Some(rest) = name.strip_prefix('m') else {
        return false;
    };
    let parts: Vec<&str> = rest.split('_').collect();
    if parts.len() < 3 {
        return false;
    }

    let date = parts[0];
    let time = parts[1];
    let desc = parts[2..].join("_");

    date.len() == 8
        && date.chars().all(|c| c.is_ascii_digit())
        && time.len() == 6
        && time.chars().all(|c| c.is_ascii_digit())
        && !desc.is_empty()
        && desc
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[test]
fn name_format_examples() {
    assert!(is_valid_migration_name("m20250301_000001_create_job_board_tables"));
    assert!(!is_valid_migration_name("m2025031_000001_short_date"));
    assert!(!is_valid_migration_name("m20250301_000001_"));
    assert!(!is_valid_migration_name("m20250301_000001_CamelCase"));
    assert!(!is_valid_migration_name("20250301_000001_no_prefix"));
}
