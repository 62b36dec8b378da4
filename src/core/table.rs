use iter_num_tools::lin_space;
use more_asserts::assert_ge;

/**
 * One point along a gradient: RGBA with each channel on [0.0, 1.0].
 */
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColormapSample {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Scale a channel from [0.0, 1.0] to [0, 255], rounding to the nearest
/// integer rather than truncating. Inputs are guaranteed in range by the
/// gradient catalog, so there is no clamping here.
pub fn quantize_channel(value: f64) -> u8 {
    (value * 255.0).round() as u8
}

impl ColormapSample {
    pub fn to_rgba_u8(&self) -> [u8; 4] {
        [
            quantize_channel(self.r),
            quantize_channel(self.g),
            quantize_channel(self.b),
            quantize_channel(self.a),
        ]
    }
}

/**
 * A gradient resampled at a fixed number of evenly spaced positions covering
 * the closed interval [0,1]: entry `i` holds the color at `i / (N - 1)`, so
 * both endpoints are always included.
 */
pub struct ColormapTable {
    samples: Vec<ColormapSample>,
}

impl ColormapTable {
    pub fn new<F>(entry_count: usize, sampler: F) -> ColormapTable
    where
        F: Fn(f64) -> ColormapSample,
    {
        // Fewer than two entries would degenerate the spacing formula.
        assert_ge!(entry_count, 2);

        let positions = lin_space(0.0..=1.0, entry_count);
        let mut samples = Vec::with_capacity(entry_count);
        for position in positions {
            samples.push(sampler(position));
        }

        ColormapTable { samples }
    }

    pub fn from_gradient(gradient: &colorgrad::Gradient, entry_count: usize) -> ColormapTable {
        ColormapTable::new(entry_count, |position| {
            let color = gradient.at(position);
            ColormapSample {
                r: color.r,
                g: color.g,
                b: color.b,
                a: color.a,
            }
        })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[ColormapSample] {
        &self.samples
    }
}
