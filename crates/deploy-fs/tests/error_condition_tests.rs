//! Tests for error handling under adverse filesystem conditions

use deploy_fs::{Error, NormalizedPath, io};
use tempfile::tempdir;

#[test]
fn write_text_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join("missing").join("deploy-server.yml"));

    assert!(io::write_text(&path, "content").is_err());
    assert!(!path.to_native().exists());
}

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;

    fn is_root() -> bool {
        match std::process::Command::new("id").arg("-u").output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
            Err(_) => false,
        }
    }

    #[test]
    fn read_text_permission_denied_returns_error() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("deploy-server.yml");
        fs::write(&file_path, "secret").unwrap();
        fs::set_permissions(&file_path, Permissions::from_mode(0o000)).unwrap();

        let result = io::read_text(&NormalizedPath::new(&file_path));

        let _ = fs::set_permissions(&file_path, Permissions::from_mode(0o644));

        let err = result.unwrap_err();
        assert!(!err.is_not_found());
    }

    #[test]
    fn write_atomic_unwritable_parent_preserves_original() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let parent = dir.path().join("workflows");
        fs::create_dir(&parent).unwrap();
        let file_path = parent.join("deploy-server.yml");
        fs::write(&file_path, "original").unwrap();
        fs::set_permissions(&parent, Permissions::from_mode(0o555)).unwrap();

        let result = io::write_text(&NormalizedPath::new(&file_path), "new content");

        let _ = fs::set_permissions(&parent, Permissions::from_mode(0o755));

        assert!(result.is_err(), "Writing when parent is read-only should fail");
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "original");
    }

    #[test]
    fn write_atomic_keeps_file_mode() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("deploy-server.yml");
        fs::write(&file_path, "original").unwrap();
        fs::set_permissions(&file_path, Permissions::from_mode(0o640)).unwrap();

        io::write_text(&NormalizedPath::new(&file_path), "updated").unwrap();

        let mode = fs::metadata(&file_path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[test]
    fn write_atomic_through_symlink_updates_link_target() {
        let dir = tempdir().unwrap();
        let real_path = dir.path().join("real.yml");
        let link_path = dir.path().join("deploy-server.yml");
        fs::write(&real_path, "original").unwrap();
        std::os::unix::fs::symlink(&real_path, &link_path).unwrap();

        io::write_text(&NormalizedPath::new(&link_path), "updated").unwrap();

        let link_meta = fs::symlink_metadata(&link_path).unwrap();
        assert!(link_meta.file_type().is_symlink(), "link must stay a symlink");
        assert_eq!(fs::read_to_string(&real_path).unwrap(), "updated");
        assert_eq!(fs::read_to_string(&link_path).unwrap(), "updated");
    }

    #[test]
    fn write_atomic_readonly_target_fails_and_preserves_original() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("deploy-server.yml");
        fs::write(&file_path, "original").unwrap();
        fs::set_permissions(&file_path, Permissions::from_mode(0o444)).unwrap();

        let result = io::write_text(&NormalizedPath::new(&file_path), "updated");

        let content = fs::read_to_string(&file_path).unwrap();
        let _ = fs::set_permissions(&file_path, Permissions::from_mode(0o644));

        let err = result.unwrap_err();
        assert!(matches!(
            err,
            Error::Io { ref source, .. } if source.kind() == std::io::ErrorKind::PermissionDenied
        ));
        assert_eq!(content, "original");
    }
}
