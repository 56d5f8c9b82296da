use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Read},
};

fn squash_standard_io(path: &Option<String>) -> Option<&str> {
    match path.as_deref() {
        Some("-") | None => None,
        Some(p) => Some(p),
    }
}

/// Output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text lines.
    #[default]
    Text,

    /// A single JSON document.
    Json,
}

/// Input argument group.
#[derive(clap::Args, Debug, Default)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
        })
    }

    /// Read the whole input as bytes.
    pub fn read_bytes(&self) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        let mut bytes = Vec::new();
        self.open_reader()?.read_to_end(&mut bytes)?;
        log::debug!("read {} input bytes", bytes.len());
        Ok(bytes)
    }
}

/// Output argument group.
#[derive(clap::Args, Debug, Default)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn std::io::Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempdir::TempDir;

    use super::*;

    #[test]
    fn test_squash_standard_io() {
        assert_eq!(squash_standard_io(&None), None);
        assert_eq!(squash_standard_io(&Some("-".to_string())), None);
        assert_eq!(squash_standard_io(&Some("a.txt".to_string())), Some("a.txt"));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = TempDir::new("wordchunk-io").unwrap();
        let path = dir.path().join("data.txt").to_string_lossy().to_string();

        let output = OutputArgs {
            output: Some(path.clone()),
        };
        {
            let mut writer = output.open_writer().unwrap();
            writer.write_all("engine on fire.\n".as_bytes()).unwrap();
            writer.flush().unwrap();
        }

        let input = InputArgs { input: Some(path) };
        assert_eq!(input.read_bytes().unwrap(), b"engine on fire.\n");
    }
}
