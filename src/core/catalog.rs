use colorgrad::Gradient;

/// Names accepted by `resolve`, sorted alphabetically. This doubles as the
/// listing included in the error for an unrecognized name.
pub const AVAILABLE_COLORMAPS: &[&str] = &[
    "cividis",
    "cool",
    "cubehelix",
    "inferno",
    "magma",
    "plasma",
    "rainbow",
    "sinebow",
    "spectral",
    "turbo",
    "viridis",
    "warm",
];

/**
 * Look up a named gradient in the preset catalog. The returned gradient maps
 * a position on [0,1] to an RGBA color with every channel on [0,1], which is
 * the only capability the exporter needs from it.
 *
 * An unrecognized name is an error; there is no fallback gradient.
 */
pub fn resolve(name: &str) -> Result<Gradient, String> {
    match name {
        "cividis" => Ok(colorgrad::cividis()),
        "cool" => Ok(colorgrad::cool()),
        "cubehelix" => Ok(colorgrad::cubehelix_default()),
        "inferno" => Ok(colorgrad::inferno()),
        "magma" => Ok(colorgrad::magma()),
        "plasma" => Ok(colorgrad::plasma()),
        "rainbow" => Ok(colorgrad::rainbow()),
        "sinebow" => Ok(colorgrad::sinebow()),
        "spectral" => Ok(colorgrad::spectral()),
        "turbo" => Ok(colorgrad::turbo()),
        "viridis" => Ok(colorgrad::viridis()),
        "warm" => Ok(colorgrad::warm()),
        _ => Err(format!(
            "unknown colormap name: `{}`. Supported names: {}",
            name,
            AVAILABLE_COLORMAPS.join(", ")
        )),
    }
}
