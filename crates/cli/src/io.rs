use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use cone_spanners::Vec2;

/// Read a point set from a whitespace-separated `x y` file. Blank lines and
/// `#` comment lines are skipped.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Vec2>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading point file {}", path.display()))?;
    let mut points = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(xs), Some(ys)) = (fields.next(), fields.next()) else {
            bail!("{}:{}: expected `x y`, got {line:?}", path.display(), lineno + 1);
        };
        if fields.next().is_some() {
            bail!("{}:{}: trailing fields after `x y`", path.display(), lineno + 1);
        }
        let x: f64 = xs
            .parse()
            .with_context(|| format!("{}:{}: bad x coordinate {xs:?}", path.display(), lineno + 1))?;
        let y: f64 = ys
            .parse()
            .with_context(|| format!("{}:{}: bad y coordinate {ys:?}", path.display(), lineno + 1))?;
        points.push(Vec2::new(x, y));
    }
    Ok(points)
}
