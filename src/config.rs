use octasphere_mesh::{Color, ColorSpec};

use crate::{Depth, Error, MidpointStrategy};

pub const DEFAULT_SCALE: f64 = 250.0;
pub const DEFAULT_RECURSION_DEPTH: i64 = 3;
pub const DEFAULT_COLOR: i64 = 9;
/// [SphereConfig::color] value asking for a different palette color per triangle.
pub const MANY_COLORS: i64 = -1;
/// Palette entries cycled through for [MANY_COLORS]; palette indices `0..=9`.
pub const PALETTE_LEN: u32 = 10;

/// Options for [create](crate::create).
///
/// Fields hold raw user input (signed depth, integer color code);
/// [validate](Self::validate) turns them into a [ValidConfig].
#[derive(Debug, Clone, PartialEq)]
pub struct SphereConfig {
    /// Radius of the finished sphere. Default `250`.
    pub scale: f64,
    /// Subdivision passes applied to the octahedron. Default `3`.
    pub recursion_depth: i64,
    /// Palette index for every triangle, or [MANY_COLORS]. Default `9`.
    pub color: i64,
    /// Passed through to the mesh untouched. Default empty.
    pub texture_url: String,
    pub midpoints: MidpointStrategy,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            recursion_depth: DEFAULT_RECURSION_DEPTH,
            color: DEFAULT_COLOR,
            texture_url: String::new(),
            midpoints: MidpointStrategy::default(),
        }
    }
}

/// A [SphereConfig] that has passed [validation](SphereConfig::validate).
#[derive(Debug, Clone, PartialEq)]
pub struct ValidConfig {
    pub scale: f64,
    pub depth: Depth,
    pub color: ColorSpec,
    pub texture_url: String,
    pub midpoints: MidpointStrategy,
}

impl SphereConfig {
    /// # Errors
    ///
    /// * [`InvalidArgument`](Error::InvalidArgument) for a negative depth, a scale that isn't
    ///   finite and positive, or a color that's neither a `u32` nor [MANY_COLORS]
    /// * [`ResourceExhausted`](Error::ResourceExhausted) for a depth above
    ///   [MAX_RECURSION_DEPTH](crate::MAX_RECURSION_DEPTH)
    pub fn validate(&self) -> Result<ValidConfig, Error> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(Error::invalid(
                "scale",
                format!("{} is not a finite positive number", self.scale),
            ));
        }
        let depth = Depth::try_from(self.recursion_depth)?;
        let color = match self.color {
            MANY_COLORS => ColorSpec::Palette { len: PALETTE_LEN },
            c => u32::try_from(c)
                .map(|c| ColorSpec::Uniform(Color::Indexed(c)))
                .map_err(|_| {
                    Error::invalid(
                        "color",
                        format!("{c} is neither a palette index nor {MANY_COLORS}"),
                    )
                })?,
        };
        Ok(ValidConfig {
            scale: self.scale,
            depth,
            color,
            texture_url: self.texture_url.clone(),
            midpoints: self.midpoints,
        })
    }
}
