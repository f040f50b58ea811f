//! SVG rendering of a planned flag.
//!
//! The document is drawn in the integer units of
//! [`Measurements::to_integer_units`], so the `viewBox` is exact and every
//! rectangle edge lands on a whole number.
//!
//! # Example
//!
//! ```
//! use spangled::FlagSpec;
//! use spangled::svg::{render_plan_svg, SvgOptions, FlagPalette};
//!
//! let plan = FlagSpec::new(50).plan().unwrap();
//! let svg = render_plan_svg(&plan, &SvgOptions::default().width("950").colors(FlagPalette::Saturated));
//! assert!(svg.contains(r#"viewBox="0 0 7410 3900""#));
//! assert_eq!(svg.matches("<use ").count(), 50);
//! ```

use std::f64::consts::PI;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use num_bigint::BigInt;
use num_traits::{One, ToPrimitive};

use crate::coordinates::StarField;
use crate::error::FlagError;
use crate::flag::{FlagPlan, FlagSpec};
use crate::geometry::Measurements;
use crate::rational::Fraction;

/// Fill colors of a flag. Any CSS color syntax is accepted and written
/// through unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FlagColors {
    pub outer_stripes: String,
    pub inner_stripes: String,
    pub canton: String,
    pub stars: String,
}

impl FlagColors {
    pub fn new(
        outer_stripes: impl Into<String>,
        inner_stripes: impl Into<String>,
        canton: impl Into<String>,
        stars: impl Into<String>,
    ) -> Self {
        Self {
            outer_stripes: outer_stripes.into(),
            inner_stripes: inner_stripes.into(),
            canton: canton.into(),
            stars: stars.into(),
        }
    }
}

impl Default for FlagColors {
    fn default() -> Self {
        FlagPalette::Default.colors()
    }
}

/// Built-in color sets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlagPalette {
    /// Old Glory red and blue.
    #[default]
    Default,
    /// Pure red and blue.
    Saturated,
    BlackAndGrey,
}

impl FlagPalette {
    pub fn colors(self) -> FlagColors {
        match self {
            Self::Default => FlagColors::new("#B22234", "#FFFFFF", "#3C3B6E", "#FFFFFF"),
            Self::Saturated => FlagColors::new("#FF0000", "#FFFFFF", "#0000FF", "#FFFFFF"),
            Self::BlackAndGrey => FlagColors::new("#000000", "#888888", "#000000", "#888888"),
        }
    }
}

impl From<FlagPalette> for FlagColors {
    fn from(palette: FlagPalette) -> Self {
        palette.colors()
    }
}

/// Size attribute written on the root element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SvgSize {
    /// `height="100%"`; the viewer scales to its container.
    #[default]
    Auto,
    /// Explicit `width`, height follows the `viewBox`.
    Width(String),
    /// Explicit `height`, width follows the `viewBox`.
    Height(String),
}

/// Rendering options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SvgOptions {
    pub size: SvgSize,
    pub colors: FlagColors,
}

impl SvgOptions {
    /// Set the document width (any SVG length, e.g. `"950"` or `"10cm"`).
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.size = SvgSize::Width(width.into());
        self
    }

    /// Set the document height.
    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.size = SvgSize::Height(height.into());
        self
    }

    pub fn colors(mut self, colors: impl Into<FlagColors>) -> Self {
        self.colors = colors.into();
        self
    }
}

/// Failure to plan or write a flag document.
#[derive(Debug, thiserror::Error)]
pub enum SvgError {
    #[error(transparent)]
    Flag(#[from] FlagError),
    #[error("failed to write SVG: {0}")]
    Io(#[from] io::Error),
}

/// Render a complete SVG document for `measurements` with the stars of
/// `field`.
pub fn render_flag_svg(measurements: &Measurements, field: &StarField, options: &SvgOptions) -> String {
    let units = measurements.to_integer_units();
    let colors = &options.colors;
    let mut svg = String::with_capacity(256 + 64 * field.len());

    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let size = match &options.size {
        SvgSize::Auto => String::from(r#"height="100%""#),
        SvgSize::Width(w) => format!(r#"width="{}""#, escape_xml(w)),
        SvgSize::Height(h) => format!(r#"height="{}""#, escape_xml(h)),
    };
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" {} viewBox="0 0 {} {}">"#,
        size, units.width, units.height
    ));
    svg.push('\n');

    // Outer stripes are the background; inner stripes are drawn over it.
    svg.push_str(&format!(
        r#"<rect width="{}" height="{}" fill="{}"/>"#,
        units.width,
        units.height,
        escape_xml(&colors.outer_stripes)
    ));
    svg.push('\n');

    let inner_fill = escape_xml(&colors.inner_stripes);
    let mut y = units.stripe_height.clone();
    for _ in (1..measurements.nstripes()).step_by(2) {
        let bottom = &y + &units.stripe_height;
        let x = if bottom <= units.canton_height {
            units.canton_width.clone()
        } else {
            BigInt::from(0u8)
        };
        svg.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            x,
            y,
            &units.width - &x,
            units.stripe_height,
            inner_fill
        ));
        svg.push('\n');
        y = bottom + &units.stripe_height;
    }

    svg.push_str(&format!(
        r#"<rect width="{}" height="{}" fill="{}"/>"#,
        units.canton_width,
        units.canton_height,
        escape_xml(&colors.canton)
    ));
    svg.push('\n');

    if !field.is_empty() {
        let radius = units.star_diameter.to_f64().unwrap_or(0.0) / 2.0;
        svg.push_str("<defs>\n");
        svg.push_str(&format!(
            r#"<path id="star" d="{}" fill="{}"/>"#,
            star_path(radius),
            escape_xml(&colors.stars)
        ));
        svg.push_str("\n</defs>\n");

        let canton_width = Fraction::from_integer(units.canton_width.clone());
        let canton_height = Fraction::from_integer(units.canton_height.clone());
        for (star, multiplier) in field.iter() {
            let x = &star.x * &canton_width;
            let y = &star.y * &canton_height;
            svg.push_str(&format!(
                r##"<use href="#star" transform="translate({} {})"##,
                fmt_num(&x),
                fmt_num(&y)
            ));
            if let Some(m) = multiplier
                && !m.is_one()
            {
                svg.push_str(&format!(" scale({})", fmt_num(m)));
            }
            svg.push_str("\"/>\n");
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Render `plan` with every star at the measured diameter.
pub fn render_plan_svg(plan: &FlagPlan, options: &SvgOptions) -> String {
    render_flag_svg(&plan.measurements, &plan.star_field(), options)
}

/// Default rendering of the best flag for `nstars` stars.
pub fn flag_svg(nstars: u32) -> Result<String, FlagError> {
    let plan = FlagSpec::new(nstars).plan()?;
    Ok(render_plan_svg(&plan, &SvgOptions::default()))
}

/// Write the document for `plan` to `writer`.
pub fn write_flag_svg<W: Write>(mut writer: W, plan: &FlagPlan, options: &SvgOptions) -> Result<(), SvgError> {
    let svg = render_plan_svg(plan, options);
    writer.write_all(svg.as_bytes())?;
    writer.flush()?;
    tracing::debug!(layout = %plan.layout, bytes = svg.len(), "wrote flag SVG");
    Ok(())
}

/// Write the document for `plan` to a file at `path`, replacing it.
pub fn write_flag_svg_file(path: impl AsRef<Path>, plan: &FlagPlan, options: &SvgOptions) -> Result<(), SvgError> {
    let file = fs::File::create(path)?;
    write_flag_svg(io::BufWriter::new(file), plan, options)
}

/// Plan the flag described by `spec` and write it to `path`.
pub fn save_flag_svg(
    path: impl AsRef<Path>,
    spec: &FlagSpec,
    options: &SvgOptions,
) -> Result<FlagPlan, SvgError> {
    let plan = spec.plan()?;
    write_flag_svg_file(path, &plan, options)?;
    Ok(plan)
}

/// Five-pointed star inscribed in a circle of `radius` centered on the
/// origin, one point up, drawn as a pentagram.
fn star_path(radius: f64) -> String {
    let point = |k: u32| {
        let angle = 3.0 * PI / 2.0 + f64::from(k) * 2.0 * PI / 5.0;
        (round3(radius * angle.cos()), round3(radius * angle.sin()))
    };
    let [p0, p1, p2, p3, p4] = [0, 1, 2, 3, 4].map(point);
    format!(
        "M {},{} L {},{} L {},{} L {},{} L {},{} Z",
        p0.0, p0.1, p2.0, p2.1, p4.0, p4.1, p1.0, p1.1, p3.0, p3.1
    )
}

fn round3(v: f64) -> f64 {
    let r = (v * 1000.0).round() / 1000.0;
    // Drop the sign of a rounded negative zero.
    if r == 0.0 { 0.0 } else { r }
}

fn fmt_num(value: &Fraction) -> String {
    if value.is_integer() {
        return value.to_integer().to_string();
    }
    match value.to_f64() {
        Some(v) => format!("{}", round3(v)),
        None => value.to_string(),
    }
}

/// Escape special characters for XML attribute values.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
