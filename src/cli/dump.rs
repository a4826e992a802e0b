//! Dump command implementation.
//!
//! Prints what a configuration resolves to: global settings, output file
//! names, and every page with its decoded draw commands.

use clap::Args;
use serde::Serialize;

use crate::config::{GlobalConfig, PlotConfig};
use crate::diagnostics::Diagnostics;
use crate::draw::DrawCommand;
use crate::error::{ConfigError, Result};
use crate::layout::Page;

use super::load_args::LoadArgs;

/// Print the pages and draw commands of a configuration
#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Configuration file to load
    pub file: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub load: LoadArgs,
}

#[derive(Debug, Serialize)]
pub struct DumpView<'a> {
    pub config: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub global: &'a GlobalConfig,
    pub plot_file: String,
    pub pages: Vec<PageView<'a>>,
    pub diagnostics: &'a Diagnostics,
}

#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    #[serde(flatten)]
    pub page: &'a Page,
    pub plot_page_file: String,
    pub commands: Vec<DrawCommand>,
}

impl<'a> DumpView<'a> {
    pub fn new(config: &'a PlotConfig) -> Result<Self> {
        let pages = config
            .pages()
            .iter()
            .map(|page| -> Result<PageView<'a>> {
                Ok(PageView {
                    page,
                    plot_page_file: config.plot_page_file_name(page.index),
                    commands: config.draw_commands(page.index)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            config: config.config_name(),
            path: config.config_path().map(|p| p.display().to_string()),
            global: config.global(),
            plot_file: config.plot_file_name(),
            pages,
            diagnostics: config.diagnostics(),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Output {
            message: format!("Failed to serialize configuration: {}", e),
        })
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let global = self.global;

        out.push_str(&format!("config: {}\n", self.config));
        if let Some(path) = &self.path {
            out.push_str(&format!("path: {}\n", path));
        }
        if !global.root_file.is_empty() {
            out.push_str(&format!("rootfile: {} (run {})\n", global.root_file, global.run_number));
        }
        if !global.golden_root_file.is_empty() {
            out.push_str(&format!("goldenrootfile: {}\n", global.golden_root_file));
        }
        for cut in &global.cuts {
            out.push_str(&format!("cut {} = {}\n", cut.ident, cut.expr));
        }
        out.push_str(&format!(
            "canvas: {}x{}\n",
            global.canvas_width, global.canvas_height
        ));
        out.push_str(&format!("plot file: {}\n", self.plot_file));

        for view in &self.pages {
            let page = view.page;
            out.push_str(&format!(
                "\npage {}: \"{}\" {}x{}",
                page.index + 1,
                page.title,
                page.nx,
                page.ny
            ));
            let flags = page.log_flags;
            for (set, name) in [(flags.logx, "logx"), (flags.logy, "logy"), (flags.logz, "logz")] {
                if set {
                    out.push(' ');
                    out.push_str(name);
                }
            }
            out.push('\n');

            for (i, cmd) in view.commands.iter().enumerate() {
                let fields: Vec<String> = cmd.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
                out.push_str(&format!("  [{}] {}\n", i, fields.join(" ")));
            }
        }
        out
    }
}

pub fn run(args: DumpArgs) -> Result<()> {
    let config = PlotConfig::load(&args.load.to_options(args.file.as_str()))?;
    let view = DumpView::new(&config)?;

    if args.json {
        println!("{}", view.to_json()?);
    } else {
        print!("{}", view.to_text());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoadOptions;

    fn sample() -> PlotConfig {
        PlotConfig::from_source(
            "definecut good x>0\nnewpage 1 2 logy\ntitle Hits\nh1 good\nh2 -nostat\n",
            &LoadOptions::new("hms.cfg"),
        )
        .unwrap()
    }

    #[test]
    fn test_text_dump() {
        let config = sample();
        let text = DumpView::new(&config).unwrap().to_text();

        assert!(text.contains("cut good = x>0"));
        assert!(text.contains("page 1: \"Hits\" 1x2 logy"));
        assert!(text.contains("  [0] variable=h1 cut=good"));
        assert!(text.contains("  [1] variable=h2 nostat=nostat"));
    }

    #[test]
    fn test_json_dump() {
        let config = sample();
        let json = DumpView::new(&config).unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["config"], "hms.cfg");
        assert_eq!(value["pages"][0]["title"], "Hits");
        assert_eq!(value["pages"][0]["nx"], 1);
        assert_eq!(value["pages"][0]["log_flags"]["logy"], true);
        assert_eq!(value["pages"][0]["commands"][1]["variable"], "h2");
        assert_eq!(value["global"]["cuts"][0]["expr"], "x>0");
        assert!(value.get("path").is_none());
    }
}
