use std::fmt;

use octasphere::{geom, mesh::ColorAttribute, Mesh};

/// Summary statistics of a finished sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub vertices: usize,
    pub polygons: usize,
    pub radius: (f64, f64),
    pub u: (f64, f64),
    pub v: (f64, f64),
    /// Largest `u` span within a single triangle
    pub widest_u_span: f64,
    pub inward_polygons: usize,
    pub scale: f64,
    pub color: String,
    pub texture_url: String,
}

fn widen((lo, hi): (f64, f64), x: f64) -> (f64, f64) {
    (lo.min(x), hi.max(x))
}

const EMPTY: (f64, f64) = (f64::INFINITY, f64::NEG_INFINITY);

impl Report {
    pub fn of(sphere: &Mesh) -> Self {
        let radius = sphere
            .vertices()
            .iter()
            .fold(EMPTY, |r, p| widen(r, p.coords.norm()));

        let (mut u, mut v, mut widest_u_span) = (EMPTY, EMPTY, 0.0f64);
        for corners in sphere.texcoords() {
            let span = corners.iter().fold(EMPTY, |r, t| widen(r, t.x));
            widest_u_span = widest_u_span.max(span.1 - span.0);
            u = widen(widen(u, span.0), span.1);
            for t in corners {
                v = widen(v, t.y);
            }
        }

        let inward_polygons = sphere
            .polygons()
            .iter()
            .filter(|tri| !geom::is_outward(&sphere.corners(tri)))
            .count();

        let color = match sphere.color() {
            None => "none".to_owned(),
            Some(ColorAttribute::Uniform(c)) => format!("{c:?}"),
            Some(ColorAttribute::PerPolygon(colors)) => format!("{} per-triangle colors", colors.len()),
        };

        Self {
            vertices: sphere.vertices().len(),
            polygons: sphere.polygons().len(),
            radius,
            u,
            v,
            widest_u_span,
            inward_polygons,
            scale: sphere.scale(),
            color,
            texture_url: sphere.texture_url().to_owned(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "vertices:        {}", self.vertices)?;
        writeln!(f, "triangles:       {}", self.polygons)?;
        writeln!(f, "inward-facing:   {}", self.inward_polygons)?;
        writeln!(f, "scale:           {}", self.scale)?;
        writeln!(f, "radius:          {:.9} ..= {:.9}", self.radius.0, self.radius.1)?;
        writeln!(f, "u:               {:.6} ..= {:.6}", self.u.0, self.u.1)?;
        writeln!(f, "v:               {:.6} ..= {:.6}", self.v.0, self.v.1)?;
        writeln!(f, "widest u span:   {:.6}", self.widest_u_span)?;
        writeln!(f, "color:           {}", self.color)?;
        write!(f, "texture:         {:?}", self.texture_url)
    }
}
