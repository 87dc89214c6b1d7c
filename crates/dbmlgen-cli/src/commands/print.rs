use std::path::PathBuf;

use anyhow::Result;
use dbmlgen_config::FileFormat;

use crate::utils::render_dbml;

pub fn cmd_print(schema: Option<PathBuf>, format: Option<FileFormat>) -> Result<()> {
    let (_, dbml) = render_dbml(schema.as_deref(), format, false)?;
    println!("{}", dbml);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_support::{CwdGuard, USER_POSTS};
    use serial_test::serial;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn cmd_print_reads_explicit_schema() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());
        fs::write("blog.json", USER_POSTS).unwrap();

        cmd_print(Some(PathBuf::from("blog.json")), None).unwrap();
    }

    #[test]
    #[serial]
    fn cmd_print_rejects_unknown_extension() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());
        fs::write("blog.toml", "").unwrap();

        let err = cmd_print(Some(PathBuf::from("blog.toml")), None).unwrap_err();
        assert!(err.to_string().contains("unsupported schema description format"));
    }

    #[test]
    #[serial]
    fn cmd_print_accepts_yaml_override() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());
        fs::write("blog.txt", "models: []\nenums: []\n").unwrap();

        cmd_print(Some(PathBuf::from("blog.txt")), Some(FileFormat::Yaml)).unwrap();
    }
}
