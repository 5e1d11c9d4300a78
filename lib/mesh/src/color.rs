#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// An entry in some external palette.
    Indexed(u32),
    Rgba(f32, f32, f32, f32),
}

/// How [assign_color](crate::Mesh::assign_color) should color a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorSpec {
    /// Every triangle gets the same color.
    Uniform(Color),
    /// Triangle `n` gets palette entry `n mod len`.
    Palette { len: u32 },
}

/// The color attribute of a finished mesh.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorAttribute {
    Uniform(Color),
    /// One color per triangle, indexed like the mesh's triangle list.
    PerPolygon(Vec<Color>),
}

impl ColorAttribute {
    /// The color of the `n`th triangle, if `n` is in range of a per-polygon attribute (any `n` is
    /// in range of a uniform one).
    pub fn of_polygon(&self, n: usize) -> Option<&Color> {
        match self {
            ColorAttribute::Uniform(c) => Some(c),
            ColorAttribute::PerPolygon(colors) => colors.get(n),
        }
    }
}
