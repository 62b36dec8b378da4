use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::core::table::ColormapTable;

/// Numeric-literal policy for the emitted array rows.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Six-decimal `f`-suffixed literals, e.g. `0.267004f`.
    Float,
    /// Quantized `uint8_t` literals, right-justified to a width of 3.
    Uint8,
}

impl TableFormat {
    /// Element type spelled into the table declaration and the externs.
    pub fn element_type(&self) -> &'static str {
        match self {
            TableFormat::Float => "float",
            TableFormat::Uint8 => "const uint8_t",
        }
    }

    /// Pointee type of the `Colormap` row-pointer alias. Reads through the
    /// alias are const regardless of how the tables are declared.
    pub fn row_pointer_element_type(&self) -> &'static str {
        match self {
            TableFormat::Float => "const float",
            TableFormat::Uint8 => "const uint8_t",
        }
    }
}

/// C symbol under which a colormap's table is defined.
pub fn array_symbol(colormap_name: &str) -> String {
    format!("{}_rgba", colormap_name)
}

/**
 * Write one table as a C array literal: a comment line naming the colormap,
 * a declaration sized to the table, one `{R, G, B, A}` row per sample, and
 * the closing brace. The byte-level layout is stable, so regenerating with
 * identical inputs diffs clean against the previous output.
 */
pub fn write_table<W: Write>(
    writer: &mut W,
    colormap_name: &str,
    table: &ColormapTable,
    format: TableFormat,
) -> io::Result<()> {
    writeln!(writer, "// {} colormap", colormap_name)?;
    writeln!(
        writer,
        "{} {}[{}][4] = {{",
        format.element_type(),
        array_symbol(colormap_name),
        table.len()
    )?;
    for sample in table.samples() {
        match format {
            TableFormat::Float => {
                writeln!(
                    writer,
                    "    {{{:.6}f, {:.6}f, {:.6}f, {:.6}f}},",
                    sample.r, sample.g, sample.b, sample.a
                )?;
            }
            TableFormat::Uint8 => {
                let [r, g, b, a] = sample.to_rgba_u8();
                writeln!(writer, "    {{{:>3}, {:>3}, {:>3}, {:>3}}},", r, g, b, a)?;
            }
        }
    }
    writeln!(writer, "}};")?;
    Ok(())
}

/**
 * Emit the shared declarations file: include guard, fixed-width integer
 * include, the table size constant, the row-pointer alias, and one `extern`
 * declaration per colormap, in the order the caller listed them.
 */
pub fn write_header<W: Write>(
    writer: &mut W,
    colormap_names: &[String],
    sample_count: usize,
    format: TableFormat,
) -> io::Result<()> {
    writeln!(writer, "#pragma once")?;
    writeln!(writer)?;
    writeln!(writer, "#include <stdint.h>")?;
    writeln!(writer)?;
    writeln!(writer, "#define COLORMAP_SIZE {}", sample_count)?;
    writeln!(writer)?;
    writeln!(
        writer,
        "typedef {} (*const Colormap)[4];",
        format.row_pointer_element_type()
    )?;
    writeln!(writer)?;
    for name in colormap_names {
        writeln!(
            writer,
            "extern {} {}[{}][4];",
            format.element_type(),
            array_symbol(name),
            sample_count
        )?;
    }
    Ok(())
}

/**
 * Emit the translation unit that turns the snippets into definitions: the
 * declarations file first, then one include per generated table, same order
 * as the declarations.
 */
pub fn write_source<W: Write>(writer: &mut W, colormap_names: &[String]) -> io::Result<()> {
    writeln!(writer, "#include \"colormap.h\"")?;
    writeln!(writer)?;
    for name in colormap_names {
        writeln!(writer, "#include \"{}.inc\"", name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::ColormapSample;

    fn render_to_string<F>(write: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buffer = Vec::new();
        write(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn grayscale_ramp(entry_count: usize) -> ColormapTable {
        ColormapTable::new(entry_count, |position| ColormapSample {
            r: position,
            g: position,
            b: position,
            a: 1.0,
        })
    }

    #[test]
    fn test_uint8_table_rows_are_quantized_and_right_justified() {
        let text = render_to_string(|buffer| {
            write_table(buffer, "gray", &grayscale_ramp(4), TableFormat::Uint8)
        });

        assert_eq!(
            text,
            "// gray colormap\n\
             const uint8_t gray_rgba[4][4] = {\n\
             \x20   {  0,   0,   0, 255},\n\
             \x20   { 85,  85,  85, 255},\n\
             \x20   {170, 170, 170, 255},\n\
             \x20   {255, 255, 255, 255},\n\
             };\n"
        );
    }

    #[test]
    fn test_float_table_rows_use_six_decimal_suffixed_literals() {
        let table = ColormapTable::new(2, |position| ColormapSample {
            r: position,
            g: 0.5,
            b: 0.25,
            a: 1.0,
        });
        let text = render_to_string(|buffer| write_table(buffer, "ramp", &table, TableFormat::Float));

        assert_eq!(
            text,
            "// ramp colormap\n\
             float ramp_rgba[2][4] = {\n\
             \x20   {0.000000f, 0.500000f, 0.250000f, 1.000000f},\n\
             \x20   {1.000000f, 0.500000f, 0.250000f, 1.000000f},\n\
             };\n"
        );
    }

    #[test]
    fn test_header_declares_every_table_in_input_order() {
        let names = vec!["viridis".to_owned(), "magma".to_owned()];
        let text =
            render_to_string(|buffer| write_header(buffer, &names, 256, TableFormat::Uint8));

        assert_eq!(
            text,
            "#pragma once\n\
             \n\
             #include <stdint.h>\n\
             \n\
             #define COLORMAP_SIZE 256\n\
             \n\
             typedef const uint8_t (*const Colormap)[4];\n\
             \n\
             extern const uint8_t viridis_rgba[256][4];\n\
             extern const uint8_t magma_rgba[256][4];\n"
        );
    }

    #[test]
    fn test_float_header_matches_the_float_table_declaration() {
        let names = vec!["plasma".to_owned()];
        let text = render_to_string(|buffer| write_header(buffer, &names, 64, TableFormat::Float));

        assert!(text.contains("typedef const float (*const Colormap)[4];"));
        assert!(text.contains("extern float plasma_rgba[64][4];"));
    }

    #[test]
    fn test_source_includes_header_then_each_snippet_in_order() {
        let names = vec!["viridis".to_owned(), "plasma".to_owned(), "magma".to_owned()];
        let text = render_to_string(|buffer| write_source(buffer, &names));

        assert_eq!(
            text,
            "#include \"colormap.h\"\n\
             \n\
             #include \"viridis.inc\"\n\
             #include \"plasma.inc\"\n\
             #include \"magma.inc\"\n"
        );
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let render = || {
            render_to_string(|buffer| {
                write_table(buffer, "gray", &grayscale_ramp(16), TableFormat::Uint8)
            })
        };
        assert_eq!(render(), render());
    }
}
