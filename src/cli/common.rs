//! Page loading shared by `compose` and `check`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use headkit::config::{ConfigError, PageConfig, find_config_file};
use headkit::{debug, log};

/// Load site defaults, if a defaults file can be found.
pub fn load_site(config_name: &Path) -> Result<Option<PageConfig>> {
    let Some(path) = find_config_file(config_name) else {
        debug!("config"; "no {} found, pages stand alone", config_name.display());
        return Ok(None);
    };

    let site = load_with_warnings(&path)?;
    site.validate()
        .with_context(|| format!("invalid site defaults `{}`", path.display()))?;

    debug!("config"; "site defaults from {}", path.display());
    Ok(Some(site))
}

/// Load one page, layer site defaults under it and validate the result.
///
/// Warnings are logged; any validation error fails the page.
pub fn load_page(path: &Path, site: Option<&PageConfig>) -> Result<PageConfig> {
    let page = load_with_warnings(path)?;
    let page = match site {
        Some(site) => page.inherit(site),
        None => page,
    };

    let diag = page.diagnose();
    diag.print_warnings(&path.display().to_string());
    diag.into_result()
        .map_err(ConfigError::Diagnostics)
        .with_context(|| format!("invalid page `{}`", path.display()))?;

    Ok(page)
}

fn load_with_warnings(path: &Path) -> Result<PageConfig> {
    let (page, ignored) =
        PageConfig::load(path).with_context(|| format!("failed to load `{}`", path.display()))?;

    for key in ignored {
        log!("warning"; "{}: unknown key `{}` ignored", path.display(), key);
    }
    Ok(page)
}

/// `<dir>/<file stem>.<extension>`
pub fn output_path(dir: &Path, source: &Path, extension: &str) -> PathBuf {
    let stem = source.file_stem().unwrap_or(source.as_os_str());
    dir.join(format!("{}.{extension}", stem.to_string_lossy()))
}
