//! The two run modes: generate a mask (with optional overlay preview) or
//! apply a saved mask.
//!
//! Option resolution happens up front in [`RunOptions::resolve`], so bad
//! colors or a missing paint fail before any file is read or written.

use std::path::{Path, PathBuf};

use atlas_mask::{BlendMode, Recolorer, Rgb, ScanStats, ValidRecolorer, DEFAULT_KEY_COLOR};
use serde::Serialize;

use crate::error::RecolorError;
use crate::models::RecolorConfig;
use crate::rendering::png_io;

/// Raw command-line values. `None` means "not given": fall back to config.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub tolerance: Option<f64>,
    pub paint: Option<String>,
    pub overlay_output: Option<PathBuf>,
    pub apply_mask: Option<PathBuf>,
    pub key_color: Option<String>,
    pub blend: Option<String>,
    pub optimize: bool,
}

/// What a run will do, with every color parsed and validated.
#[derive(Debug, Clone, PartialEq)]
pub enum RunPlan {
    /// Scan `input`, write the mask to `mask_output`, and optionally a
    /// repainted preview.
    Generate {
        input: PathBuf,
        mask_output: PathBuf,
        overlay: Option<(PathBuf, Rgb)>,
    },
    /// Repaint `atlas` where `mask` selects, write to `output`.
    Apply {
        atlas: PathBuf,
        mask: PathBuf,
        output: PathBuf,
        paint: Rgb,
    },
}

impl RunOptions {
    /// Merge options with the config and validate everything the chosen
    /// mode uses. Apply mode never consults the key color or tolerance.
    pub fn resolve(self, config: &RecolorConfig) -> Result<(RecolorService, RunPlan), RecolorError> {
        let blend = match &self.blend {
            Some(name) => name.parse::<BlendMode>()?,
            None => config.blend_mode()?,
        };
        let paint = self
            .paint
            .as_deref()
            .map(|p| config.resolve_paint(p))
            .transpose()?;
        let optimize = self.optimize || config.optimize;

        match self.apply_mask {
            Some(mask) => {
                let paint = paint.ok_or(RecolorError::MissingRequiredOption {
                    option: "--apply-mask",
                    required: "--paint",
                })?;
                if self.overlay_output.is_some() {
                    tracing::warn!("--overlay-output is ignored with --apply-mask");
                }
                if self.key_color.is_some() || self.tolerance.is_some() {
                    tracing::debug!("--key-color and --tolerance are not used with --apply-mask");
                }

                let recolorer = Recolorer::new(DEFAULT_KEY_COLOR).blend(blend).validate()?;
                let plan = RunPlan::Apply {
                    atlas: self.input,
                    mask,
                    output: self.output,
                    paint,
                };
                Ok((RecolorService::new(recolorer, optimize), plan))
            }
            None => {
                let key = match &self.key_color {
                    Some(hex) => RecolorError::parse_color(hex)?,
                    None => config.key_color()?,
                };
                let tolerance = self.tolerance.unwrap_or(config.tolerance);
                let recolorer = Recolorer::new(key)
                    .tolerance(tolerance)
                    .blend(blend)
                    .validate()?;

                let overlay = match (self.overlay_output, paint) {
                    (Some(path), Some(paint)) => Some((path, paint)),
                    (Some(_), None) => {
                        tracing::warn!("--overlay-output needs --paint, skipping preview");
                        None
                    }
                    (None, _) => None,
                };
                let plan = RunPlan::Generate {
                    input: self.input,
                    mask_output: self.output,
                    overlay,
                };
                Ok((RecolorService::new(recolorer, optimize), plan))
            }
        }
    }
}

/// Outcome of a run, printed to the console or serialized with `--json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RunReport {
    Generate(GenerateReport),
    Apply(ApplyReport),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateReport {
    pub input: PathBuf,
    pub mask_output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub key_color: String,
    pub tolerance: f64,
    pub scan: ScanReport,
    /// `"no_matches"` when nothing matched; left to the caller to act on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<OverlayReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayReport {
    pub output: PathBuf,
    pub paint: String,
    pub blend: String,
    pub scan: ScanReport,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplyReport {
    pub atlas: PathBuf,
    pub mask: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub paint: String,
    pub blend: String,
    pub painted: usize,
    pub total: usize,
    pub coverage_percent: f64,
}

/// Serializable form of [`ScanStats`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScanReport {
    pub matched: usize,
    pub total: usize,
    pub coverage_percent: f64,
    pub min_distance: f64,
    pub max_distance: f64,
}

impl From<ScanStats> for ScanReport {
    fn from(s: ScanStats) -> Self {
        Self {
            matched: s.matched,
            total: s.total,
            coverage_percent: s.coverage_percent(),
            min_distance: s.min_distance,
            max_distance: s.max_distance,
        }
    }
}

/// Runs generate/apply against files on disk.
#[derive(Debug, Clone)]
pub struct RecolorService {
    recolorer: ValidRecolorer,
    optimize: bool,
}

impl RecolorService {
    pub fn new(recolorer: ValidRecolorer, optimize: bool) -> Self {
        Self {
            recolorer,
            optimize,
        }
    }

    pub fn recolorer(&self) -> &ValidRecolorer {
        &self.recolorer
    }

    /// Execute a resolved plan.
    pub fn run(&self, plan: &RunPlan) -> Result<RunReport, RecolorError> {
        match plan {
            RunPlan::Generate {
                input,
                mask_output,
                overlay,
            } => self
                .generate(
                    input,
                    mask_output,
                    overlay.as_ref().map(|(p, c)| (p.as_path(), *c)),
                )
                .map(RunReport::Generate),
            RunPlan::Apply {
                atlas,
                mask,
                output,
                paint,
            } => self
                .apply(atlas, mask, output, *paint)
                .map(RunReport::Apply),
        }
    }

    /// Generate a mask from `input` and write it to `mask_output`.
    ///
    /// With `overlay`, also writes a preview of `input` with the matches
    /// repainted. Zero matches is logged as a warning and still writes
    /// the (empty) mask.
    pub fn generate(
        &self,
        input: &Path,
        mask_output: &Path,
        overlay: Option<(&Path, Rgb)>,
    ) -> Result<GenerateReport, RecolorError> {
        let matcher = self.recolorer.matcher();
        tracing::info!(
            input = %input.display(),
            key = %matcher.key(),
            tolerance = matcher.tolerance(),
            "Generating mask"
        );

        let image = png_io::read_png(input)?;
        let (width, height) = image.dimensions();

        let generated = self.recolorer.mask(&image);
        png_io::write_png(mask_output, &generated.mask, self.optimize)?;
        let stats = generated.stats;
        tracing::info!(
            output = %mask_output.display(),
            matched = stats.matched,
            total = stats.total,
            coverage = format_args!("{:.2}%", stats.coverage_percent()),
            min_distance = format_args!("{:.4}", stats.min_distance),
            max_distance = format_args!("{:.4}", stats.max_distance),
            "Mask saved"
        );

        let warning = if stats.is_empty() {
            tracing::warn!(
                "No matching pixels found. Try a larger --tolerance or check --key-color"
            );
            Some("no_matches")
        } else {
            None
        };

        let overlay = match overlay {
            Some((path, paint)) => Some(self.write_overlay(image, path, paint)?),
            None => None,
        };

        Ok(GenerateReport {
            input: input.to_path_buf(),
            mask_output: mask_output.to_path_buf(),
            width,
            height,
            key_color: matcher.key().to_string(),
            tolerance: matcher.tolerance(),
            scan: stats.into(),
            warning,
            overlay,
        })
    }

    fn write_overlay(
        &self,
        image: atlas_mask::RgbaImage,
        path: &Path,
        paint: Rgb,
    ) -> Result<OverlayReport, RecolorError> {
        let blend = self.recolorer.blend_mode();
        tracing::info!(paint = %paint, %blend, "Generating overlay preview");

        let out = self.recolorer.overlay(image, paint);
        png_io::write_png(path, &out.image, self.optimize)?;
        tracing::info!(
            output = %path.display(),
            painted = out.stats.matched,
            total = out.stats.total,
            coverage = format_args!("{:.2}%", out.stats.coverage_percent()),
            "Overlay saved"
        );

        Ok(OverlayReport {
            output: path.to_path_buf(),
            paint: paint.to_string(),
            blend: blend.to_string(),
            scan: out.stats.into(),
        })
    }

    /// Repaint `atlas` where `mask` selects and write the result.
    ///
    /// Nothing is written when the mask and atlas sizes differ.
    pub fn apply(
        &self,
        atlas: &Path,
        mask: &Path,
        output: &Path,
        paint: Rgb,
    ) -> Result<ApplyReport, RecolorError> {
        let blend = self.recolorer.blend_mode();
        tracing::info!(
            atlas = %atlas.display(),
            mask = %mask.display(),
            paint = %paint,
            %blend,
            "Applying mask"
        );

        let atlas_image = png_io::read_png(atlas)?;
        let mask_image = png_io::read_png(mask)?;
        let (width, height) = atlas_image.dimensions();

        let out = self.recolorer.apply(atlas_image, &mask_image, paint)?;
        png_io::write_png(output, &out.image, self.optimize)?;
        tracing::info!(
            output = %output.display(),
            painted = out.painted,
            total = out.total,
            coverage = format_args!("{:.2}%", out.coverage_percent()),
            "Repainted atlas saved"
        );

        Ok(ApplyReport {
            atlas: atlas.to_path_buf(),
            mask: mask.to_path_buf(),
            output: output.to_path_buf(),
            width,
            height,
            paint: paint.to_string(),
            blend: blend.to_string(),
            painted: out.painted,
            total: out.total,
            coverage_percent: out.coverage_percent(),
        })
    }
}
