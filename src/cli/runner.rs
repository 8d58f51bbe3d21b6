//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_config, PagerConfig};
use crate::error::{Error, Result, ResultExt};
use crate::pager::Page;
use crate::source::MemoryPages;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.resolve_config()?;
        debug!("Resolved pager config: {:?}", config);

        match &self.cli.command {
            Commands::Page {
                page,
                input,
                fetch_size,
                use_async,
            } => {
                let fetch_size = fetch_size.unwrap_or(config.fetch_size);
                if *use_async {
                    self.page_async(&config, *page, input.as_deref(), fetch_size)
                        .await
                } else {
                    self.page_blocking(&config, *page, input.as_deref())
                }
            }
            Commands::Walk { input, fetch_size } => {
                let fetch_size = fetch_size.unwrap_or(config.fetch_size);
                self.walk(&config, input.as_deref(), fetch_size).await
            }
        }
    }

    /// Merge the config file (if any) with command-line overrides
    fn resolve_config(&self) -> Result<PagerConfig> {
        let mut config = match &self.cli.config {
            Some(path) => load_config(path)?,
            None => PagerConfig::default(),
        };

        if let Some(strategy) = self.cli.strategy {
            config.out_of_bounds = strategy.into();
        }
        if let Some(page_size) = self.cli.page_size {
            config.page_size = page_size;
        }

        config.validate()?;
        Ok(config)
    }

    /// Stream the input line by line through the blocking pager
    fn page_blocking(
        &self,
        config: &PagerConfig,
        page: usize,
        input: Option<&Path>,
    ) -> Result<()> {
        let reader = open_input(input)?;
        let lines = reader.lines().map(|line| line.map_err(Error::from));
        let result = config.pager().try_get_page(lines, page, config.page_size)?;
        self.print_page(&result)
    }

    /// Split the input into protocol pages and run the async pager over them
    async fn page_async(
        &self,
        config: &PagerConfig,
        page: usize,
        input: Option<&Path>,
        fetch_size: usize,
    ) -> Result<()> {
        let lines = read_lines(input)?;
        let source = MemoryPages::new(lines, fetch_size)?;
        let result = config
            .pager()
            .get_page_async(source, page, config.page_size)?
            .await?;
        self.print_page(&result)
    }

    /// Print every logical page, re-running the pager on a fresh source each time
    async fn walk(
        &self,
        config: &PagerConfig,
        input: Option<&Path>,
        fetch_size: usize,
    ) -> Result<()> {
        let lines = read_lines(input)?;
        let pager = config.pager();
        let mut page_number = 1;

        loop {
            let source = MemoryPages::new(lines.clone(), fetch_size)?;
            let page = pager
                .get_page_async(source, page_number, config.page_size)?
                .await?;
            self.print_page(&page)?;

            if page.is_last() {
                break;
            }
            page_number += 1;
        }

        info!(
            "Walked {} pages of {} elements ({} elements total)",
            page_number,
            config.page_size,
            lines.len()
        );
        Ok(())
    }

    fn print_page(&self, page: &Page<String>) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(page)?);
            }
            OutputFormat::Pretty => {
                let marker = if page.is_last() { " (last)" } else { "" };
                println!("Page {}{}:", page.page_number(), marker);
                for element in page {
                    println!("  {element}");
                }
            }
        }
        Ok(())
    }
}

/// Open the input file, or stdin if none is given
fn open_input(input: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input '{}'", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Read all input lines into memory
fn read_lines(input: Option<&Path>) -> Result<Vec<String>> {
    let lines = open_input(input)?
        .lines()
        .collect::<io::Result<Vec<_>>>()?;
    debug!("Read {} input lines", lines.len());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pager::OutOfBoundsStrategy;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn input_file(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file
    }

    fn runner(args: &[&str]) -> Runner {
        let mut argv = vec!["offset-pager"];
        argv.extend_from_slice(args);
        Runner::new(Cli::parse_from(argv))
    }

    #[test]
    fn test_resolve_config_defaults() {
        let config = runner(&["page", "--page", "1"]).resolve_config().unwrap();
        assert_eq!(config, PagerConfig::default());
    }

    #[test]
    fn test_resolve_config_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "out_of_bounds: return_empty_page\npage_size: 7").unwrap();
        let path = file.path().to_str().unwrap();

        let config = runner(&[
            "--config",
            path,
            "--strategy",
            "return-last-page",
            "page",
            "--page",
            "1",
        ])
        .resolve_config()
        .unwrap();

        assert_eq!(config.out_of_bounds, OutOfBoundsStrategy::ReturnLastPage);
        assert_eq!(config.page_size, 7);
    }

    #[test]
    fn test_resolve_config_rejects_zero_page_size() {
        let err = runner(&["--page-size", "0", "walk"])
            .resolve_config()
            .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[tokio::test]
    async fn test_page_command_blocking() {
        let file = input_file(&["a", "b", "c", "d"]);
        let path = file.path().to_str().unwrap();
        runner(&["--page-size", "2", "page", "--page", "2", "--input", path])
            .run()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_page_command_async_out_of_range() {
        let file = input_file(&["a", "b", "c"]);
        let path = file.path().to_str().unwrap();
        let err = runner(&[
            "--page-size",
            "3",
            "page",
            "--page",
            "2",
            "--input",
            path,
            "--async",
            "--fetch-size",
            "1",
        ])
        .run()
        .await
        .unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[tokio::test]
    async fn test_walk_command() {
        let file = input_file(&["a", "b", "c", "d", "e"]);
        let path = file.path().to_str().unwrap();
        runner(&["--format", "pretty", "--page-size", "2", "walk", "--input", path])
            .run()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_missing_input_file() {
        let err = runner(&["page", "--page", "1", "--input", "/nonexistent/input.txt"])
            .run()
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to open input"));
    }
}
