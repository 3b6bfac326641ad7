// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::write(path, "#!/bin/sh\nexit 0\n").unwrap();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn empty_name_never_resolves() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(PathSearch.resolve("", dir.path(), Some(OsStr::new("/bin"))), None);
}

#[test]
fn missing_path_var_finds_nothing() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(PathSearch.resolve("sh", dir.path(), None), None);
}

#[cfg(unix)]
#[test]
fn searches_path_entries_in_order() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    make_executable(&second.path().join("tool"));

    let path_var = std::env::join_paths([first.path(), second.path()]).unwrap();
    let found = PathSearch.resolve("tool", first.path(), Some(&path_var));
    assert_eq!(found, Some(second.path().join("tool")));

    make_executable(&first.path().join("tool"));
    let found = PathSearch.resolve("tool", first.path(), Some(&path_var));
    assert_eq!(found, Some(first.path().join("tool")));
}

#[cfg(unix)]
#[test]
fn non_executable_files_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("data"), "x").unwrap();
    let path_var = dir.path().as_os_str().to_os_string();
    assert_eq!(PathSearch.resolve("data", dir.path(), Some(&path_var)), None);
}

#[cfg(unix)]
#[test]
fn names_with_separator_are_relative_to_cwd() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("bin")).unwrap();
    make_executable(&dir.path().join("bin/run"));

    let found = PathSearch.resolve("./bin/run", dir.path(), None).unwrap();
    assert!(found.is_absolute(), "{}", found.display());
    assert!(found.ends_with("bin/run"));
    assert_eq!(PathSearch.resolve("bin/missing", dir.path(), None), None);
}

#[cfg(unix)]
#[test]
fn relative_cwd_resolves_to_an_absolute_path() {
    let dir = tempfile::tempdir_in(".").unwrap();
    make_executable(&dir.path().join("tool.sh"));
    let relative = Path::new(dir.path().file_name().unwrap());
    assert!(relative.is_relative());

    let found = PathSearch.resolve("./tool.sh", relative, None).unwrap();
    assert!(found.is_absolute(), "{}", found.display());
    assert!(found.ends_with("tool.sh"));
}

#[cfg(unix)]
#[test]
fn relative_path_entries_are_anchored_at_cwd() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("tools")).unwrap();
    make_executable(&dir.path().join("tools/helper"));

    let found = PathSearch.resolve("helper", dir.path(), Some(OsStr::new("tools"))).unwrap();
    assert!(found.is_absolute());
    assert!(found.ends_with("tools/helper"));
}
