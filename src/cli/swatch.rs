use serde::{Deserialize, Serialize};

use crate::core::catalog;
use crate::core::file_io::OutputDirectory;
use crate::core::table::ColormapTable;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SwatchParams {
    pub resolution: (u32, u32),
    pub colormap_names: Vec<String>,
}

/**
 * Render each requested colormap as a horizontal strip image so that a
 * gradient can be inspected before tables are exported from it. Each column
 * holds one table entry; every row is an identical copy.
 */
pub fn generate_color_swatch(
    params: &SwatchParams,
    output: &OutputDirectory,
) -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = params.resolution;
    if width < 2 || height < 1 {
        return Err(format!("swatch resolution too small: {}x{}", width, height).into());
    }

    for name in &params.colormap_names {
        let gradient = catalog::resolve(name)?;
        let table = ColormapTable::from_gradient(&gradient, width as usize);

        let mut imgbuf = image::ImageBuffer::new(width, height);
        for (x, _y, pixel) in imgbuf.enumerate_pixels_mut() {
            *pixel = image::Rgba(table.samples()[x as usize].to_rgba_u8());
        }

        let render_path = output.file_path(&format!("{}.png", name));
        imgbuf.save(&render_path)?;
        println!("INFO:  Wrote image file to: {}", render_path.display());
    }

    Ok(())
}
