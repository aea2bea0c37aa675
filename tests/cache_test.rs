//! Cache behaviour against the real filesystem.

use fscache::cache::{digest_hex, NAMESPACE};
use fscache::PathCache;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn setup() -> (TempDir, PathCache) {
    let temp = TempDir::new().unwrap();
    let cache = PathCache::new(temp.path());
    (temp, cache)
}

/// Two keys whose digests differ in the first hex digit.
fn keys_without_shared_prefix() -> (String, String) {
    let first = "alpha".to_string();
    let first_digit = digest_hex(first.as_str().into()).chars().next().unwrap();
    let second = (0..)
        .map(|i| format!("beta-{}", i))
        .find(|k| digest_hex(k.into()).chars().next() != Some(first_digit))
        .unwrap();
    (first, second)
}

fn count_dirs(root: &Path) -> usize {
    let mut count = 0;
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                count += 1;
                stack.push(path);
            }
        }
    }
    count
}

#[test]
fn contains_tracks_set_delete_and_clear() {
    let (_temp, cache) = setup();
    let key = "http://google.com/abc";

    assert!(!cache.contains(key));
    cache.set(key, b"<html>abc</html>").unwrap();
    assert!(cache.contains(key));
    cache.delete(key);
    assert!(!cache.contains(key));

    cache.set(key, b"again").unwrap();
    cache.clear().unwrap();
    assert!(!cache.contains(key));
}

#[test]
fn round_trip_is_byte_exact() {
    let (_temp, cache) = setup();
    let value: Vec<u8> = (0..=255u8).cycle().take(4096).collect();

    cache.set("binary", &value).unwrap();
    assert_eq!(cache.get("binary").unwrap(), value);
}

#[test]
fn setting_same_value_twice_is_idempotent() {
    let (_temp, cache) = setup();
    cache.set("k", b"value").unwrap();
    cache.set("k", b"value").unwrap();
    assert_eq!(cache.get("k").unwrap(), b"value");
}

#[test]
fn overwrite_returns_only_newest_value() {
    let (_temp, cache) = setup();
    cache.set("k", b"first value, quite long").unwrap();
    cache.set("k", b"v2").unwrap();
    assert_eq!(cache.get("k").unwrap(), b"v2");
}

#[test]
fn double_delete_is_safe() {
    let (_temp, cache) = setup();
    cache.set("k", b"v").unwrap();
    assert!(cache.delete("k"));
    assert!(!cache.delete("k"));
}

#[test]
fn get_or_default_for_unwritten_key() {
    let (_temp, cache) = setup();
    assert_eq!(cache.get_or_default("never", Vec::<u8>::new()), b"");
    assert_eq!(cache.get_or_default("never", "fallback"), b"fallback");
    assert!(cache.get("never").unwrap_err().is_not_found());
}

#[test]
fn key_path_matches_reference_layout() {
    let cache = PathCache::default();
    let expected: PathBuf = [
        NAMESPACE, "c", "1", "3", "9", "3", "b", "d", "2", "0", "3", "4", "2", "6", "f", "3", "c",
        "3", "f", "4", "7", "5", "5", "b", "0", "3", "0", "a", "1", "d", "b", "a", "c",
        "index.html",
    ]
    .iter()
    .collect();
    assert_eq!(cache.key_path("http://google.com/abc"), expected);
}

#[test]
fn delete_of_only_key_leaves_empty_namespace() {
    let (temp, cache) = setup();
    cache.set("only", b"v").unwrap();
    assert_eq!(count_dirs(&temp.path().join(NAMESPACE)), 32);

    cache.delete("only");

    let namespace = temp.path().join(NAMESPACE);
    assert!(namespace.is_dir());
    assert_eq!(count_dirs(&namespace), 0);
}

#[test]
fn delete_leaves_unrelated_entry_untouched() {
    let (temp, cache) = setup();
    let (first, second) = keys_without_shared_prefix();
    cache.set(&first, b"1").unwrap();
    cache.set(&second, b"2").unwrap();
    let second_path = cache.key_path(&second);

    cache.delete(&first);

    assert!(!cache.contains(&first));
    assert_eq!(fs::read(&second_path).unwrap(), b"2");
    // Only the second key's chain remains.
    assert_eq!(count_dirs(&temp.path().join(NAMESPACE)), 32);
}

#[test]
fn delete_keeps_non_empty_ancestors() {
    let (_temp, cache) = setup();
    cache.set("k", b"v").unwrap();
    let path = cache.key_path("k");
    let sibling = path.parent().unwrap().parent().unwrap().join("unrelated.txt");
    fs::write(&sibling, b"keep me").unwrap();

    cache.delete("k");

    assert!(sibling.is_file());
    assert!(!path.parent().unwrap().exists());
}

#[test]
fn delete_never_touches_files_outside_namespace() {
    let (temp, cache) = setup();
    let outside = temp.path().join("outside.txt");
    fs::write(&outside, b"x").unwrap();

    cache.set("k", b"v").unwrap();
    cache.delete("k");
    cache.delete("never-written");

    assert!(outside.is_file());
    assert!(temp.path().is_dir());
}

#[test]
fn clear_removes_all_entries_until_next_set() {
    let (temp, cache) = setup();
    let keys = ["a", "b", "c", "http://example.com/page"];
    for key in keys {
        cache.set(key, key.as_bytes()).unwrap();
    }

    cache.clear().unwrap();

    for key in keys {
        assert!(!cache.contains(key));
    }
    assert!(!temp.path().join(NAMESPACE).exists());
    assert!(temp.path().is_dir());

    cache.set("a", b"new").unwrap();
    assert!(temp.path().join(NAMESPACE).is_dir());
}

#[test]
fn clear_on_fresh_cache_is_noop() {
    let (temp, cache) = setup();
    cache.clear().unwrap();
    assert!(!temp.path().join(NAMESPACE).exists());
}

#[test]
fn clear_leaves_siblings_of_namespace() {
    let (temp, cache) = setup();
    let sibling = temp.path().join("fscache.yml");
    fs::write(&sibling, b"file_name: index.html").unwrap();
    cache.set("k", b"v").unwrap();

    cache.clear().unwrap();

    assert!(sibling.is_file());
}

#[test]
fn caches_share_entries_through_disk() {
    let (temp, writer) = setup();
    writer.set("shared", b"value").unwrap();

    let reader = PathCache::new(temp.path());
    assert_eq!(reader.get("shared").unwrap(), b"value");
}

#[test]
fn construction_creates_nothing() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("not-yet");
    let cache = PathCache::new(&root);

    assert!(!cache.contains("k"));
    assert!(!root.exists());

    cache.set("k", b"v").unwrap();
    assert!(root.join(NAMESPACE).is_dir());
}

#[cfg(unix)]
#[test]
fn set_into_read_only_root_fails() {
    use std::os::unix::fs::PermissionsExt;

    let (temp, cache) = setup();
    fs::set_permissions(temp.path(), fs::Permissions::from_mode(0o555)).unwrap();

    // Root can still create directories anywhere; nothing to assert then.
    let probe = temp.path().join("probe");
    if fs::create_dir(&probe).is_ok() {
        fs::remove_dir(&probe).unwrap();
        fs::set_permissions(temp.path(), fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let err = cache.set("k", b"v").unwrap_err();
    assert!(matches!(err, fscache::FsCacheError::Write { .. }));
    assert!(!cache.contains("k"));

    fs::set_permissions(temp.path(), fs::Permissions::from_mode(0o755)).unwrap();
}
