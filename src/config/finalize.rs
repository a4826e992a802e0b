//! Fallback defaults and path rules applied once all directives are in.

use std::path::Path;

use crate::diagnostics::Diagnostics;
use crate::error::{ConfigError, Result};
use crate::parser::env::{append_to_path, find_in_path};

use super::global::GlobalConfig;
use super::options::LoadOptions;
use super::template::substitute_run_number;

pub const DEFAULT_PLOT_FORMAT: &str = "pdf";
pub const DEFAULT_IMAGE_FORMAT: &str = "png";
pub const DEFAULT_PROTO_PLOT_FILE: &str = "summaryPlots_%R_%C.%E";
pub const DEFAULT_PROTO_PLOT_PAGE_FILE: &str = "summaryPlots_%R_page%P_%C.%E";
pub const DEFAULT_PROTO_IMAGE_FILE: &str = "hydra_%R_%V_%C.%F";
pub const DEFAULT_PROTO_MACRO_IMAGE_FILE: &str = "hydra_%R_page%P_pad%D_%C.%F";
pub const HALLC_STYLE_FILE: &str = "onlineGUI_Style.C";

/// Finish the global configuration after dispatch.
pub(crate) fn finalize(
    config: &mut GlobalConfig,
    opts: &LoadOptions,
    search_path: &str,
    diagnostics: &mut Diagnostics,
) -> Result<()> {
    resolve_run(config, opts, diagnostics)?;
    apply_defaults(config);
    apply_output_dirs(config, diagnostics);
    resolve_style_file(config, opts, search_path, diagnostics);

    let plot_format = config.plot_format.clone();
    let image_format = config.image_format.clone();
    override_format(&mut config.proto_plot_file, &plot_format, "plotFormat", "protoplotfile", diagnostics);
    override_format(&mut config.proto_plot_page_file, &plot_format, "plotFormat", "protoplotpagefile", diagnostics);
    override_format(&mut config.proto_image_file, &image_format, "imageFormat", "protoimagefile", diagnostics);
    override_format(&mut config.proto_macro_image_file, &image_format, "imageFormat", "protomacroimagefile", diagnostics);

    Ok(())
}

/// Pick the ROOT file and run number from what the file and command line
/// provided.
fn resolve_run(config: &mut GlobalConfig, opts: &LoadOptions, diagnostics: &mut Diagnostics) -> Result<()> {
    if config.root_file.is_empty() {
        if let Some(run) = opts.run_number() {
            config.root_file = find_root_file(config, run)?;
            config.run_number = run;
            tracing::info!(file = %config.root_file, run, "found ROOT file for run");
        }
        return Ok(());
    }

    if opts.run_number().is_some() {
        tracing::info!("Both ROOT file and run number specified. Using ROOT file from command line.");
    }
    tracing::info!(file = %config.root_file, "using ROOT file");

    let extracted = extract_run_number(&config.root_file);
    match (config.run_number, extracted) {
        (0, Some(run)) => config.run_number = run,
        (0, None) => diagnostics.warning(
            "plotcfg::run",
            "Run number could not be extracted from ROOT file name; specify it on the command line if you want it",
        ),
        (given, found) if found != Some(given) => diagnostics.warning(
            "plotcfg::run",
            format!(
                "Run number extracted from ROOT file name differs from command line value: {} vs. {}. Using command line value: {}",
                found.unwrap_or(0),
                given,
                given
            ),
        ),
        _ => {}
    }
    Ok(())
}

/// Search the `protorootfile` candidates for one that exists for `run`.
fn find_root_file(config: &GlobalConfig, run: u32) -> Result<String> {
    let mut search_path = String::new();
    append_to_path(&mut search_path, &config.root_files_path);
    if let Ok(env_path) = std::env::var("ROOTFILES") {
        append_to_path(&mut search_path, &env_path);
    }
    append_to_path(&mut search_path, "rootfiles");

    for proto in &config.proto_root_files {
        let candidate = substitute_run_number(proto, run, config.run_width);
        tracing::debug!(candidate = %candidate, path = %search_path, "looking for ROOT file");
        if let Some(found) = find_in_path(&candidate, &search_path) {
            return Ok(found.display().to_string());
        }
    }

    Err(ConfigError::RootFileNotFound { run, search_path })
}

/// Extract a run number from a ROOT file name.
///
/// The run number is taken to be 4 or 5 digits between an underscore and
/// either another underscore or a period, as in `_12345_` or `_1234.`.
pub fn extract_run_number(filename: &str) -> Option<u32> {
    let bytes = filename.as_bytes();
    filename.match_indices('_').find_map(|(pos, _)| {
        let start = pos + 1;
        let digits = bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();
        let end = start + digits;
        match bytes.get(end) {
            Some(b'.') | Some(b'_') if (4..=5).contains(&digits) => filename[start..end].parse().ok(),
            _ => None,
        }
    })
}

fn apply_defaults(config: &mut GlobalConfig) {
    let defaults = [
        (&mut config.plot_format, DEFAULT_PLOT_FORMAT),
        (&mut config.image_format, DEFAULT_IMAGE_FORMAT),
        (&mut config.proto_plot_file, DEFAULT_PROTO_PLOT_FILE),
        (&mut config.proto_plot_page_file, DEFAULT_PROTO_PLOT_PAGE_FILE),
        (&mut config.proto_image_file, DEFAULT_PROTO_IMAGE_FILE),
        (&mut config.proto_macro_image_file, DEFAULT_PROTO_MACRO_IMAGE_FILE),
    ];
    for (field, default) in defaults {
        if field.is_empty() {
            *field = default.to_string();
        }
    }
}

/// Prefix the output prototypes with `plotsdir` / `imagesdir`.
fn apply_output_dirs(config: &mut GlobalConfig, diagnostics: &mut Diagnostics) {
    if !config.plots_dir.is_empty() {
        let dir = config.plots_dir.clone();
        let b1 = prepend_dir(&dir, &mut config.proto_plot_file, "plotsdir", "protoplotfile", diagnostics);
        let b2 = prepend_dir(&dir, &mut config.proto_plot_page_file, "plotsdir", "protoplotpagefile", diagnostics);
        if !(b1 || b2) {
            config.plots_dir.clear();
        }
        if config.images_dir.is_empty() {
            config.images_dir = config.plots_dir.clone();
        }
    }

    if !config.images_dir.is_empty() {
        let dir = config.images_dir.clone();
        let b1 = prepend_dir(&dir, &mut config.proto_image_file, "imagesdir", "protoimagefile", diagnostics);
        let b2 = prepend_dir(
            &dir,
            &mut config.proto_macro_image_file,
            "imagesdir",
            "protomacroimagefile",
            diagnostics,
        );
        if !(b1 || b2) {
            config.images_dir.clear();
        }
    }
}

fn prepend_dir(dir: &str, path: &mut String, dir_name: &str, proto_name: &str, diagnostics: &mut Diagnostics) -> bool {
    if path.is_empty() {
        return false;
    }
    if Path::new(path.as_str()).is_absolute() {
        diagnostics.warning(
            "plotcfg::path",
            format!("ignoring {} because {} has an absolute path", dir_name, proto_name),
        );
        return false;
    }
    *path = format!("{}/{}", dir, path);
    true
}

fn resolve_style_file(
    config: &mut GlobalConfig,
    opts: &LoadOptions,
    search_path: &str,
    diagnostics: &mut Diagnostics,
) {
    if opts.hallc && config.style_file.is_empty() {
        config.style_file = HALLC_STYLE_FILE.to_string();
    }
    if config.style_file.is_empty() {
        return;
    }
    match find_in_path(&config.style_file, search_path) {
        Some(found) => config.style_file = found.display().to_string(),
        None => {
            diagnostics.warning(
                "plotcfg::path",
                format!("style file \"{}\" not found, ignoring it", config.style_file),
            );
            config.style_file.clear();
        }
    }
}

/// Make `proto` end in `format` unless it already does or defers to the
/// `%E`/`%F` placeholders.
fn override_format(proto: &mut String, format: &str, format_name: &str, proto_name: &str, diagnostics: &mut Diagnostics) {
    if proto.ends_with(format) || proto.ends_with("%E") || proto.ends_with("%F") {
        return;
    }
    diagnostics.warning(
        "plotcfg::format",
        format!("overriding {} of {} with {}", format_name, proto_name, format),
    );
    change_extension(proto, format);
}

/// Replace the extension of the file name in `path`, or add one.
fn change_extension(path: &mut String, ext: &str) {
    let name_start = path.rfind('/').map_or(0, |p| p + 1);
    match path[name_start..].rfind('.') {
        Some(dot) => {
            path.truncate(name_start + dot + 1);
            path.push_str(ext);
        }
        None => {
            path.push('.');
            path.push_str(ext);
        }
    }
}
