use lodestone_common::{LodestoneError, Result};
use lodestone_schematic::ColorTable;
use std::path::PathBuf;
use std::str::FromStr;

pub const USAGE: &str = "Usage: lodestone <schematic-file> [--colors <table.json>] [--format json|summary]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One JSON array of `{position, size, block_id, color}`.
    #[default]
    Json,
    Summary,
}

impl FromStr for OutputFormat {
    type Err = LodestoneError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "summary" => Ok(OutputFormat::Summary),
            other => Err(LodestoneError::InvalidConfig(format!(
                "unknown output format '{}', expected json or summary",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    /// JSON color table replacing the built-in one.
    pub colors: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Config {
    /// Parses command line arguments, without the program name.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut input = None;
        let mut colors = None;
        let mut format = OutputFormat::default();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--colors" => colors = Some(PathBuf::from(flag_value(&mut args, "--colors")?)),
                "--format" => format = flag_value(&mut args, "--format")?.parse()?,
                flag if flag.starts_with("--") => {
                    return Err(LodestoneError::InvalidConfig(format!(
                        "unknown flag '{}'",
                        flag
                    )))
                }
                _ if input.is_some() => {
                    return Err(LodestoneError::InvalidConfig(format!(
                        "unexpected argument '{}'",
                        arg
                    )))
                }
                _ => input = Some(PathBuf::from(arg)),
            }
        }

        let input = input.ok_or_else(|| LodestoneError::InvalidConfig(USAGE.to_string()))?;
        Ok(Config {
            input,
            colors,
            format,
        })
    }

    /// The color table from `--colors`, or the built-in one.
    pub async fn load_colors(&self) -> Result<ColorTable> {
        match &self.colors {
            Some(path) => {
                let text = tokio::fs::read_to_string(path).await?;
                ColorTable::from_json(&text)
            }
            None => Ok(ColorTable::default()),
        }
    }
}

fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| LodestoneError::InvalidConfig(format!("{} flag requires an argument", flag)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn parse(args: &[&str]) -> Result<Config> {
        Config::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_input_only() {
        let config = parse(&["house.schem"]).unwrap();
        assert_eq!(config.input, PathBuf::from("house.schem"));
        assert_eq!(config.colors, None);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_flags_in_any_position() {
        let config = parse(&["--format", "summary", "tower.nbt", "--colors", "palette.json"]).unwrap();
        assert_eq!(config.input, PathBuf::from("tower.nbt"));
        assert_eq!(config.colors, Some(PathBuf::from("palette.json")));
        assert_eq!(config.format, OutputFormat::Summary);
    }

    #[test]
    fn test_missing_input() {
        assert_matches!(parse(&[]), Err(LodestoneError::InvalidConfig(msg)) if msg == USAGE);
        assert_matches!(parse(&["--format", "json"]), Err(LodestoneError::InvalidConfig(_)));
    }

    #[test]
    fn test_flag_without_value() {
        assert_matches!(
            parse(&["a.schem", "--colors"]),
            Err(LodestoneError::InvalidConfig(msg)) if msg.contains("--colors")
        );
    }

    #[test]
    fn test_bad_values() {
        assert_matches!(parse(&["a.schem", "--format", "xml"]), Err(LodestoneError::InvalidConfig(_)));
        assert_matches!(parse(&["a.schem", "--verbose"]), Err(LodestoneError::InvalidConfig(_)));
        assert_matches!(parse(&["a.schem", "b.schem"]), Err(LodestoneError::InvalidConfig(_)));
    }

    #[tokio::test]
    async fn test_builtin_colors_without_flag() {
        let config = parse(&["a.schem"]).unwrap();
        let colors = config.load_colors().await.unwrap();
        assert_eq!(colors.color_for("minecraft:stone"), "#808080");
    }

    #[tokio::test]
    async fn test_missing_color_file_is_io_error() {
        let config = parse(&["a.schem", "--colors", "/nonexistent/lodestone-colors.json"]).unwrap();
        assert_matches!(config.load_colors().await, Err(LodestoneError::IoError(_)));
    }
}
