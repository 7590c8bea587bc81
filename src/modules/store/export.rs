use log::info;
use std::fs::File;
use std::io::{self, Write};

use super::RecordStore;

/// Write the obfuscated record set to the export file, one
/// `username:password` line per record. Records without a password export
/// an empty password field. Any prior dump is overwritten.
pub fn write_export(store: &RecordStore, path: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    for (username, password) in store.export_all() {
        writeln!(file, "{}:{}", username, password.unwrap_or_default())?;
    }
    info!("Exported {} records to {}", store.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cipher::Cipher;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_writes_one_line_per_record() {
        let cipher = Cipher::new();
        let mut store = RecordStore::seed(&cipher);
        store.set_password(&cipher.obfuscate("scientist"), cipher.obfuscate("Abc12345"));

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();
        write_export(&store, path).unwrap();

        let contents = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);

        // The user with a password exports exactly one populated line.
        let expected = format!(
            "{}:{}",
            cipher.obfuscate("scientist"),
            cipher.obfuscate("Abc12345")
        );
        assert_eq!(lines.iter().filter(|line| **line == expected).count(), 1);

        // Users without a password export an empty password field.
        let no_password = format!("{}:", cipher.obfuscate("engineer"));
        assert!(lines.contains(&no_password.as_str()));
    }

    #[test]
    fn test_export_overwrites_previous_dump() {
        let cipher = Cipher::new();
        let store = RecordStore::seed(&cipher);

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();
        fs::write(path, "stale contents\nmore stale\nlines\nhere\n").unwrap();

        write_export(&store, path).unwrap();
        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(contents.lines().count(), 3);
        assert!(!contents.contains("stale"));
    }
}
