//! Preamble directives.
//!
//! Each preamble line is parsed into a typed [`Directive`] and then applied
//! to a [`GlobalConfig`]. Unknown names are ignored so that newer
//! configuration files still load; a directive with too few arguments is
//! reported and skipped, one with too many is applied with the extras
//! ignored.

mod apply;

use std::fmt;

use crate::config::{GlobalConfig, LoadOptions};
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::numeric::parse_int;
use crate::parser::ConfigLine;

/// The recognized directive names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Watchfile,
    BinsX,
    BinsY,
    DefineCut,
    RootFile,
    GoldenRootFile,
    ProtoRootFile,
    GuiColor,
    PlotsDir,
    ImagesDir,
    PlotFormat,
    ImageFormat,
    RootFilesPath,
    ProtoPlotFile,
    ProtoPlotPageFile,
    ProtoImageFile,
    ProtoMacroImageFile,
    StyleFile,
    NDigits,
    CanvasSize,
}

impl DirectiveKind {
    pub const ALL: [DirectiveKind; 20] = [
        DirectiveKind::Watchfile,
        DirectiveKind::BinsX,
        DirectiveKind::BinsY,
        DirectiveKind::DefineCut,
        DirectiveKind::RootFile,
        DirectiveKind::GoldenRootFile,
        DirectiveKind::ProtoRootFile,
        DirectiveKind::GuiColor,
        DirectiveKind::PlotsDir,
        DirectiveKind::ImagesDir,
        DirectiveKind::PlotFormat,
        DirectiveKind::ImageFormat,
        DirectiveKind::RootFilesPath,
        DirectiveKind::ProtoPlotFile,
        DirectiveKind::ProtoPlotPageFile,
        DirectiveKind::ProtoImageFile,
        DirectiveKind::ProtoMacroImageFile,
        DirectiveKind::StyleFile,
        DirectiveKind::NDigits,
        DirectiveKind::CanvasSize,
    ];

    /// The name as written in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            DirectiveKind::Watchfile => "watchfile",
            DirectiveKind::BinsX => "2DbinsX",
            DirectiveKind::BinsY => "2DbinsY",
            DirectiveKind::DefineCut => "definecut",
            DirectiveKind::RootFile => "rootfile",
            DirectiveKind::GoldenRootFile => "goldenrootfile",
            DirectiveKind::ProtoRootFile => "protorootfile",
            DirectiveKind::GuiColor => "guicolor",
            DirectiveKind::PlotsDir => "plotsdir",
            DirectiveKind::ImagesDir => "imagesdir",
            DirectiveKind::PlotFormat => "plotFormat",
            DirectiveKind::ImageFormat => "imageFormat",
            DirectiveKind::RootFilesPath => "rootfilespath",
            DirectiveKind::ProtoPlotFile => "protoplotfile",
            DirectiveKind::ProtoPlotPageFile => "protoplotpagefile",
            DirectiveKind::ProtoImageFile => "protoimagefile",
            DirectiveKind::ProtoMacroImageFile => "protomacroimagefile",
            DirectiveKind::StyleFile => "stylefile",
            DirectiveKind::NDigits => "ndigits",
            DirectiveKind::CanvasSize => "canvassize",
        }
    }

    /// Number of arguments the directive expects.
    pub fn arity(self) -> usize {
        match self {
            DirectiveKind::Watchfile => 0,
            DirectiveKind::DefineCut | DirectiveKind::CanvasSize => 2,
            DirectiveKind::NDigits => 3,
            _ => 1,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A preamble directive with its typed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Watchfile,
    BinsX(i64),
    BinsY(i64),
    DefineCut { ident: String, expr: String },
    RootFile(String),
    GoldenRootFile(String),
    ProtoRootFile(String),
    GuiColor(String),
    PlotsDir(String),
    ImagesDir(String),
    PlotFormat(String),
    ImageFormat(String),
    RootFilesPath(String),
    ProtoPlotFile(String),
    ProtoPlotPageFile(String),
    ProtoImageFile(String),
    ProtoMacroImageFile(String),
    StyleFile(String),
    /// Zero-pad widths for run, page and pad numbers, before clamping.
    NDigits { run: i64, page: i64, pad: i64 },
    /// Canvas size in pixels, before clamping.
    CanvasSize { width: i64, height: i64 },
}

impl Directive {
    /// Parse one preamble line.
    ///
    /// Returns `Ok(None)` for unknown names and for directives skipped
    /// because of missing arguments. Non-numeric values where a number is
    /// expected abort the load.
    pub fn from_line(line: &ConfigLine, diagnostics: &mut Diagnostics) -> Result<Option<Self>> {
        let Some(kind) = DirectiveKind::from_name(line.command()) else {
            return Ok(None);
        };

        let args = line.args();
        let expected = kind.arity();
        if args.len() < expected {
            diagnostics.error(
                "plotcfg::args",
                format!(
                    "not enough arguments for {} command at {}, needs {}, found {}. Command skipped.",
                    kind,
                    line.origin,
                    expected,
                    args.len()
                ),
            );
            return Ok(None);
        }
        if args.len() > expected {
            diagnostics.warning(
                "plotcfg::args",
                format!(
                    "too many arguments for {} command at {}, expect {}, found {}, ignoring extras",
                    kind,
                    line.origin,
                    expected,
                    args.len()
                ),
            );
        }

        let arg = |i: usize| args[i].clone();
        let num = |i: usize, what: &str| parse_int(what, &args[i]);

        let directive = match kind {
            DirectiveKind::Watchfile => Directive::Watchfile,
            DirectiveKind::BinsX => Directive::BinsX(num(0, "2DbinsX")?),
            DirectiveKind::BinsY => Directive::BinsY(num(0, "2DbinsY")?),
            DirectiveKind::DefineCut => Directive::DefineCut {
                ident: arg(0),
                expr: arg(1),
            },
            DirectiveKind::RootFile => Directive::RootFile(arg(0)),
            DirectiveKind::GoldenRootFile => Directive::GoldenRootFile(arg(0)),
            DirectiveKind::ProtoRootFile => Directive::ProtoRootFile(arg(0)),
            DirectiveKind::GuiColor => Directive::GuiColor(arg(0)),
            DirectiveKind::PlotsDir => Directive::PlotsDir(arg(0)),
            DirectiveKind::ImagesDir => Directive::ImagesDir(arg(0)),
            DirectiveKind::PlotFormat => Directive::PlotFormat(arg(0)),
            DirectiveKind::ImageFormat => Directive::ImageFormat(arg(0)),
            DirectiveKind::RootFilesPath => Directive::RootFilesPath(arg(0)),
            DirectiveKind::ProtoPlotFile => Directive::ProtoPlotFile(arg(0)),
            DirectiveKind::ProtoPlotPageFile => Directive::ProtoPlotPageFile(arg(0)),
            DirectiveKind::ProtoImageFile => Directive::ProtoImageFile(arg(0)),
            DirectiveKind::ProtoMacroImageFile => Directive::ProtoMacroImageFile(arg(0)),
            DirectiveKind::StyleFile => Directive::StyleFile(arg(0)),
            DirectiveKind::NDigits => Directive::NDigits {
                run: num(0, "ndigits run number width")?,
                page: num(1, "ndigits page number width")?,
                pad: num(2, "ndigits pad number width")?,
            },
            DirectiveKind::CanvasSize => Directive::CanvasSize {
                width: num(0, "canvas width")?,
                height: num(1, "canvas height")?,
            },
        };
        Ok(Some(directive))
    }
}

/// Apply every directive in `preamble` to `config`, in order.
pub fn dispatch(
    preamble: &[ConfigLine],
    config: &mut GlobalConfig,
    opts: &LoadOptions,
    diagnostics: &mut Diagnostics,
) -> Result<()> {
    for line in preamble {
        if let Some(directive) = Directive::from_line(line, diagnostics)? {
            tracing::trace!(?directive, "applying directive");
            directive.apply(config, opts, diagnostics)?;
        }
    }
    Ok(())
}
