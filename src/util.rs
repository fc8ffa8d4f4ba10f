/// Filesystem helpers.
pub mod fs {
    use std::fs;
    use std::io;

    use camino::Utf8Path;

    /// Ensure a directory exists, creating it recursively if needed.
    pub fn ensure_dir(path: &Utf8Path) -> io::Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Mark a file as executable (`0o755`). No-op off Unix.
    pub fn make_executable(path: &Utf8Path) -> io::Result<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(path, perms)?;
        }
        #[cfg(not(unix))]
        let _ = path;
        Ok(())
    }
}

/// Fresh temp directory path for a test; not created.
#[cfg(test)]
pub fn unique_temp_dir(label: &str) -> camino::Utf8PathBuf {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut dir = std::env::temp_dir();
    dir.push(format!("setup-php-{label}-{}-{seq}-{ts}", std::process::id()));
    camino::Utf8PathBuf::from_path_buf(dir).unwrap()
}

/// Apply `action` to each item in order, finishing one before the next starts.
///
/// The walk stops at the first error, which is returned.
pub fn for_each_sequential<T, E, F>(items: &[T], mut action: F) -> Result<(), E>
where
    F: FnMut(&T) -> Result<(), E>,
{
    for item in items {
        action(item)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_items_in_order() {
        let items = ["a", "b", "c"];
        let mut concat = String::new();
        for_each_sequential(&items, |item| {
            concat.push_str(item);
            Ok::<(), ()>(())
        })
        .unwrap();
        assert_eq!(concat, "abc");
    }

    #[test]
    fn stops_at_first_error() {
        let items = [1, 2, 3, 4];
        let mut seen = Vec::new();
        let result = for_each_sequential(&items, |item| {
            seen.push(*item);
            if *item == 2 { Err(format!("failed on {item}")) } else { Ok(()) }
        });
        assert_eq!(result, Err("failed on 2".to_owned()));
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn temp_dirs_are_distinct() {
        let first = unique_temp_dir("util");
        let second = unique_temp_dir("util");
        assert_ne!(first, second);
        assert!(first.as_str().contains(&std::process::id().to_string()));
    }

    #[test]
    fn empty_input_is_ok() {
        let items: [u8; 0] = [];
        assert_eq!(for_each_sequential(&items, |_| Err::<(), _>("never")), Ok(()));
    }
}
