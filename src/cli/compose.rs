//! `headkit compose`: page files in, head descriptors out.

use std::fs;
use std::io::{Write, stdout};
use std::path::Path;

use anyhow::{Context, Result, bail};
use headkit::config::PageConfig;
use headkit::log;
use headkit::seo::{HeadDescriptor, compose};
use headkit::utils::plural_count;
use rayon::prelude::*;

use super::args::{ComposeArgs, OutputFormat};
use super::common::{load_page, output_path};

/// Compose every page and emit the results in argument order.
///
/// A page that fails to load or validate is reported and skipped; the
/// command fails if any page did.
pub fn run_compose(args: &ComposeArgs, site: Option<&PageConfig>) -> Result<()> {
    let files = &args.pages.files;

    let results: Vec<Result<String>> = files
        .par_iter()
        .map(|file| {
            let page = load_page(file, site)?;
            render(&compose(&page), args)
        })
        .collect();

    if let Some(dir) = &args.output {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create `{}`", dir.display()))?;
    }

    let mut failed = 0;
    let mut out = stdout().lock();
    for (file, result) in files.iter().zip(results) {
        match result {
            Ok(rendered) => emit(&mut out, file, &rendered, args)?,
            Err(err) => {
                failed += 1;
                log!("error"; "{:#}", err);
            }
        }
    }

    let composed = files.len() - failed;
    if args.output.is_some() {
        log!("compose"; "composed {}", plural_count(composed, "page"));
    }
    if failed > 0 {
        bail!("{} failed", plural_count(failed, "page"));
    }
    Ok(())
}

fn render(head: &HeadDescriptor, args: &ComposeArgs) -> Result<String> {
    let rendered = match args.format {
        OutputFormat::Html => head.to_html(),
        OutputFormat::Json if args.pretty => serde_json::to_string_pretty(head)?,
        OutputFormat::Json => serde_json::to_string(head)?,
    };
    Ok(rendered)
}

fn emit(out: &mut impl Write, source: &Path, rendered: &str, args: &ComposeArgs) -> Result<()> {
    match &args.output {
        Some(dir) => {
            let path = output_path(dir, source, args.format.extension());
            fs::write(&path, format!("{rendered}\n"))
                .with_context(|| format!("failed to write `{}`", path.display()))?;
            log!("compose"; "{} -> {}", source.display(), path.display());
        }
        None => writeln!(out, "{rendered}")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::PageArgs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(files: Vec<PathBuf>, format: OutputFormat, output: Option<PathBuf>) -> ComposeArgs {
        ComposeArgs {
            pages: PageArgs {
                files,
                verbose: false,
            },
            format,
            pretty: true,
            output,
        }
    }

    #[test]
    fn test_writes_one_file_per_page() {
        let dir = TempDir::new().unwrap();
        let page = dir.path().join("home.toml");
        fs::write(&page, "title = \"Home\"\ndescription = \"Welcome\"\n").unwrap();
        let out = dir.path().join("out");

        run_compose(
            &args(vec![page.clone()], OutputFormat::Json, Some(out.clone())),
            None,
        )
        .unwrap();

        let written = fs::read_to_string(out.join("home.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["title"], "Home");
        assert_eq!(value["meta"][0]["name"], "description");

        run_compose(&args(vec![page], OutputFormat::Html, Some(out.clone())), None).unwrap();
        let html = fs::read_to_string(out.join("home.html")).unwrap();
        assert!(html.starts_with("<title>Home</title>\n"));
    }

    #[test]
    fn test_failed_page_fails_command() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.toml");
        fs::write(&good, "title = \"Good\"\n").unwrap();
        let missing = dir.path().join("missing.toml");
        let out = dir.path().join("out");

        let result = run_compose(
            &args(vec![good, missing], OutputFormat::Json, Some(out.clone())),
            None,
        );

        assert!(result.is_err());
        assert!(out.join("good.json").is_file());
        assert!(!out.join("missing.json").exists());
    }
}
