use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, Read as _, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize + ?Sized,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }

    pub fn write_text<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: fmt::Display + ?Sized,
    {
        writeln!(&mut *self, "{value}")
            .with_context(|| format!("Failed to write to {}", self.display_path()))?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

/// Read sample values from a file, or from stdin when `path` is `-`
pub fn read_samples_file<P>(path: P) -> anyhow::Result<Vec<f64>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut text = String::new();
    if path == Path::new("-") {
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read samples from stdin")?;
    } else {
        File::open(path)
            .with_context(|| format!("Failed to open samples file: {}", path.display()))?
            .read_to_string(&mut text)
            .with_context(|| format!("Failed to read samples file: {}", path.display()))?;
    }
    parse_samples(&text).with_context(|| format!("Failed to parse samples from {}", path.display()))
}

/// Parse a single sample value, rejecting NaN and infinities
pub fn parse_sample(token: &str) -> anyhow::Result<f64> {
    let value = token
        .parse::<f64>()
        .with_context(|| format!("Invalid number `{token}`"))?;
    if !value.is_finite() {
        bail!("Non-finite value `{token}`");
    }
    Ok(value)
}

/// Parse sample values from text
///
/// Values are separated by commas and/or whitespace. `#` starts a comment
/// that runs to the end of the line.
///
/// # Errors
///
/// Returns error naming the line if a token is not a finite number
pub fn parse_samples(text: &str) -> anyhow::Result<Vec<f64>> {
    let mut samples = vec![];
    for (line_idx, line) in text.lines().enumerate() {
        let line = line.split_once('#').map_or(line, |(data, _comment)| data);
        let tokens = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty());
        for token in tokens {
            let value = parse_sample(token)
                .with_context(|| format!("Invalid sample on line {}", line_idx + 1))?;
            samples.push(value);
        }
    }
    Ok(samples)
}
