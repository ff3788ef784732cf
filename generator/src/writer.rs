//! A module for writing vector pairs to the stimulus and expected-result
//! files.
//!
//! The `VectorWriter` struct provides a utility for writing the two
//! simulator-consumable files in lockstep.

use std::{
    fs::File,
    io::{self, Write},
};

use vecgen_core::TestVector;

/// A utility struct for writing vector pairs to a pair of plain text files.
///
/// Both destinations are opened up front, so an unwritable path fails the run
/// before any vector is generated. Line `i` of the stimulus file and line `i`
/// of the expected-result file always describe the same vector.
pub struct VectorWriter {
    files: Option<(File, File)>,
}

impl VectorWriter {
    /// Creates a new `VectorWriter`, opening both destination files for
    /// writing.
    ///
    /// # Arguments
    /// * `stimulus_path` - The path to the stimulus file.
    /// * `expected_path` - The path to the expected-result file.
    ///
    /// # Errors
    /// Returns an error if either file cannot be created; in that case no
    /// vector line is ever written.
    pub fn create(stimulus_path: &str, expected_path: &str) -> Result<Self, io::Error> {
        let stimulus = File::create(stimulus_path)?;
        let expected = File::create(expected_path)?;
        Ok(Self { files: Some((stimulus, expected)) })
    }

    /// Writes a single vector: the input as one decimal line of the stimulus
    /// file and the expected result as one decimal line of the expected-result
    /// file.
    pub fn write(&mut self, vector: &TestVector) -> Result<(), io::Error> {
        if let Some((stimulus, expected)) = self.files.as_mut() {
            writeln!(stimulus, "{}", vector.input)?;
            writeln!(expected, "{}", vector.expected)?;
            Ok(())
        } else {
            Err(io::Error::other("Attempted to write to a closed file."))
        }
    }

    /// Closes both files, ensuring all data is flushed to disk.
    pub fn close(&mut self) -> Result<(), io::Error> {
        if let Some((mut stimulus, mut expected)) = self.files.take() {
            stimulus.flush()?;
            expected.flush()?;
        }
        Ok(())
    }
}

impl Drop for VectorWriter {
    /// Ensures the files are closed when the `VectorWriter` is dropped.
    fn drop(&mut self) {
        let _ = self.close(); // Silently ignore any errors during drop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_writes_paired_lines() {
        let dir = tempfile::tempdir().unwrap();
        let stimulus_path = dir.path().join("input.txt");
        let expected_path = dir.path().join("output.txt");

        let mut writer = VectorWriter::create(
            stimulus_path.to_str().unwrap(),
            expected_path.to_str().unwrap(),
        )
        .unwrap();
        writer.write(&TestVector { input: 2, expected: 256 }).unwrap();
        writer.write(&TestVector { input: 0, expected: 0 }).unwrap();
        writer.close().unwrap();

        assert_eq!(fs::read_to_string(stimulus_path).unwrap(), "2\n0\n");
        assert_eq!(fs::read_to_string(expected_path).unwrap(), "256\n0\n");
    }

    #[test]
    fn test_unwritable_destination_fails_before_any_vector() {
        let dir = tempfile::tempdir().unwrap();
        let stimulus_path = dir.path().join("input.txt");
        let missing = dir.path().join("no-such-dir").join("output.txt");

        let result =
            VectorWriter::create(stimulus_path.to_str().unwrap(), missing.to_str().unwrap());
        assert!(result.is_err());

        // The stimulus file may have been created, but holds no vectors.
        let written = fs::read_to_string(stimulus_path).unwrap_or_default();
        assert!(written.is_empty());
    }

    #[test]
    fn test_write_after_close_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let stimulus_path = dir.path().join("input.txt");
        let expected_path = dir.path().join("output.txt");

        let mut writer = VectorWriter::create(
            stimulus_path.to_str().unwrap(),
            expected_path.to_str().unwrap(),
        )
        .unwrap();
        writer.close().unwrap();
        assert!(writer.write(&TestVector { input: 1, expected: 1 }).is_err());
    }
}
