use crate::config::{is_set, GlobalConfig, LoadOptions, NamedCut};
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::numeric::clamp_range;
use crate::parser::env::{append_to_path, expand_path};

use super::{Directive, DirectiveKind};

/// Warn that a command-line value wins over the file's `kind` directive.
/// Returns true when the directive should be ignored.
fn overridden(cmdline: &Option<String>, kind: DirectiveKind, diagnostics: &mut Diagnostics) -> bool {
    if !is_set(cmdline) {
        return false;
    }
    diagnostics.warning(
        "plotcfg::override",
        format!(
            "Command line option for {} overrides value in configuration file.",
            kind
        ),
    );
    true
}

impl Directive {
    /// Apply this directive to `config`.
    pub fn apply(
        self,
        config: &mut GlobalConfig,
        opts: &LoadOptions,
        diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        match self {
            Directive::Watchfile => config.monitor = true,
            Directive::BinsX(n) => config.bins_2d_x = n,
            Directive::BinsY(n) => config.bins_2d_y = n,
            Directive::DefineCut { ident, expr } => config.cuts.push(NamedCut { ident, expr }),
            Directive::RootFile(file) => {
                if !overridden(&opts.root_file, DirectiveKind::RootFile, diagnostics) {
                    if opts.run_number().is_some() {
                        diagnostics.warning(
                            "plotcfg::override",
                            "Run number set on command line. Ignoring rootfile specification from config file.",
                        );
                    } else {
                        config.root_file = expand_path(&file)?;
                    }
                }
            }
            Directive::GoldenRootFile(file) => {
                if !overridden(&opts.golden_file, DirectiveKind::GoldenRootFile, diagnostics) {
                    config.golden_root_file = expand_path(&file)?;
                }
            }
            Directive::ProtoRootFile(file) => config.proto_root_files.push(expand_path(&file)?),
            Directive::GuiColor(color) => config.gui_color = color,
            Directive::PlotsDir(dir) => {
                if !overridden(&opts.plots_dir, DirectiveKind::PlotsDir, diagnostics) {
                    config.plots_dir = expand_path(&dir)?;
                }
            }
            Directive::ImagesDir(dir) => {
                if !overridden(&opts.images_dir, DirectiveKind::ImagesDir, diagnostics) {
                    config.images_dir = expand_path(&dir)?;
                }
            }
            Directive::PlotFormat(format) => {
                if !overridden(&opts.plot_format, DirectiveKind::PlotFormat, diagnostics) {
                    config.plot_format = format;
                }
            }
            Directive::ImageFormat(format) => {
                if !overridden(&opts.image_format, DirectiveKind::ImageFormat, diagnostics) {
                    config.image_format = format;
                }
            }
            Directive::RootFilesPath(dir) => {
                append_to_path(&mut config.root_files_path, &expand_path(&dir)?)
            }
            Directive::ProtoPlotFile(proto) => config.proto_plot_file = expand_path(&proto)?,
            Directive::ProtoPlotPageFile(proto) => {
                config.proto_plot_page_file = expand_path(&proto)?
            }
            Directive::ProtoImageFile(proto) => config.proto_image_file = expand_path(&proto)?,
            Directive::ProtoMacroImageFile(proto) => {
                config.proto_macro_image_file = expand_path(&proto)?
            }
            Directive::StyleFile(file) => {
                if !overridden(&opts.style_file, DirectiveKind::StyleFile, diagnostics) {
                    config.style_file = expand_path(&file)?;
                }
            }
            Directive::NDigits { run, page, pad } => {
                config.run_width = clamp_range(run, 0, 8, "ndigits run number width", diagnostics) as u32;
                config.page_width = clamp_range(page, 0, 5, "ndigits page number width", diagnostics) as u32;
                config.pad_width = clamp_range(pad, 0, 3, "ndigits pad number width", diagnostics) as u32;
            }
            Directive::CanvasSize { width, height } => {
                config.canvas_width = clamp_range(width, 640, 4096, "canvas width", diagnostics) as u32;
                config.canvas_height = clamp_range(height, 480, 4096, "canvas height", diagnostics) as u32;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_all(directives: Vec<Directive>, opts: &LoadOptions) -> (GlobalConfig, Diagnostics) {
        let mut config = GlobalConfig::default();
        let mut diags = Diagnostics::new();
        for d in directives {
            d.apply(&mut config, opts, &mut diags).unwrap();
        }
        (config, diags)
    }

    #[test]
    fn test_simple_settings() {
        let (config, diags) = apply_all(
            vec![
                Directive::Watchfile,
                Directive::BinsX(100),
                Directive::BinsY(50),
                Directive::GuiColor("lightblue".into()),
                Directive::PlotFormat("png".into()),
                Directive::DefineCut {
                    ident: "good".into(),
                    expr: "x>0".into(),
                },
            ],
            &LoadOptions::default(),
        );

        assert!(config.monitor);
        assert_eq!((config.bins_2d_x, config.bins_2d_y), (100, 50));
        assert_eq!(config.gui_color, "lightblue");
        assert_eq!(config.plot_format, "png");
        assert_eq!(config.defined_cut("good"), Some("x>0"));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_rootfile_command_line_wins() {
        let opts = LoadOptions::new("x.cfg").with_root_file("cmd.root");
        let mut config = GlobalConfig::from_options(&opts).unwrap();
        let mut diags = Diagnostics::new();

        Directive::RootFile("a.root".into())
            .apply(&mut config, &opts, &mut diags)
            .unwrap();

        assert_eq!(config.root_file, "cmd.root");
        assert_eq!(diags.count_code("plotcfg::override"), 1);
    }

    #[test]
    fn test_rootfile_ignored_when_run_given() {
        let opts = LoadOptions::new("x.cfg").with_run(1234);
        let (config, diags) = apply_all(vec![Directive::RootFile("a.root".into())], &opts);
        assert!(config.root_file.is_empty());
        assert_eq!(diags.count_code("plotcfg::override"), 1);
    }

    #[test]
    fn test_repeated_directive_is_not_an_override() {
        let (config, diags) = apply_all(
            vec![
                Directive::PlotsDir("first".into()),
                Directive::PlotsDir("second".into()),
            ],
            &LoadOptions::default(),
        );
        assert_eq!(config.plots_dir, "second");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_proto_root_files_accumulate() {
        let (config, _) = apply_all(
            vec![
                Directive::ProtoRootFile("a_XXXXX.root".into()),
                Directive::ProtoRootFile("b_XXXXX.root".into()),
                Directive::RootFilesPath("/data".into()),
                Directive::RootFilesPath("/scratch".into()),
            ],
            &LoadOptions::default(),
        );
        assert_eq!(config.proto_root_files, vec!["a_XXXXX.root", "b_XXXXX.root"]);
        assert_eq!(config.root_files_path, "/data:/scratch");
    }

    #[test]
    fn test_ndigits_clamped() {
        let (config, diags) = apply_all(
            vec![Directive::NDigits {
                run: 9,
                page: 0,
                pad: 0,
            }],
            &LoadOptions::default(),
        );
        assert_eq!(config.run_width, 8);
        assert_eq!(config.page_width, 0);
        assert_eq!(config.pad_width, 0);
        assert_eq!(diags.count_code("plotcfg::range"), 1);
    }

    #[test]
    fn test_canvassize_clamped() {
        let (config, diags) = apply_all(
            vec![Directive::CanvasSize {
                width: 100,
                height: 100,
            }],
            &LoadOptions::default(),
        );
        assert_eq!((config.canvas_width, config.canvas_height), (640, 480));
        assert_eq!(diags.count_code("plotcfg::range"), 2);
    }

    #[test]
    fn test_undefined_env_in_path_aborts() {
        let mut config = GlobalConfig::default();
        let mut diags = Diagnostics::new();
        let result = Directive::StyleFile("$PLOTCFG_TEST_UNDEFINED_STYLE/s.C".into()).apply(
            &mut config,
            &LoadOptions::default(),
            &mut diags,
        );
        assert!(result.is_err());
    }
}
