//! `headkit check`: validate pages without composing.

use anyhow::{Result, bail};
use headkit::config::PageConfig;
use headkit::log;
use headkit::utils::plural_count;
use rayon::prelude::*;

use super::args::PageArgs;
use super::common::load_page;

/// Load and validate every page, reporting each failure.
pub fn run_check(pages: &PageArgs, site: Option<&PageConfig>) -> Result<()> {
    let files = &pages.files;
    log!("check"; "checking {}", plural_count(files.len(), "page"));

    let results: Vec<_> = files
        .par_iter()
        .map(|file| load_page(file, site).map(|_| ()))
        .collect();

    let mut failed = 0;
    for result in results {
        if let Err(err) = result {
            failed += 1;
            log!("error"; "{:#}", err);
        }
    }

    if failed > 0 {
        bail!("{} failed validation", plural_count(failed, "page"));
    }

    log!("check"; "all pages valid");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn pages(files: Vec<PathBuf>) -> PageArgs {
        PageArgs {
            files,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_pages() {
        let dir = TempDir::new().unwrap();
        let page = dir.path().join("a.toml");
        fs::write(
            &page,
            "description = \"d\"\n[website]\nname = \"Acme\"\nurl = \"https://acme.test\"\n",
        )
        .unwrap();

        assert!(run_check(&pages(vec![page]), None).is_ok());
    }

    #[test]
    fn test_invalid_breadcrumb() {
        let dir = TempDir::new().unwrap();
        let page = dir.path().join("a.toml");
        fs::write(&page, "[[breadcrumbs]]\nid = \"/\"\nname = \"\"\n").unwrap();

        let err = run_check(&pages(vec![page]), None).unwrap_err();
        assert!(err.to_string().contains("1 page failed"));
    }
}
