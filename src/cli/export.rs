use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::core::catalog;
use crate::core::codegen::{self, TableFormat};
use crate::core::file_io::OutputDirectory;
use crate::core::table::ColormapTable;

/**
 * Everything one export run needs: which gradients to dump, how many entries
 * per table, how rows are formatted, and whether the shared
 * header/implementation pair is emitted alongside the snippets.
 */
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TableExportParams {
    pub colormap_names: Vec<String>,
    pub sample_count: usize,
    pub table_format: TableFormat,
    pub emit_linker_files: bool,
}

/**
 * Resample every requested colormap to `sample_count` entries and write one
 * `<name>.inc` array literal per colormap into the output directory. With
 * `emit_linker_files` set, also write `colormap.h` (extern declarations) and
 * `colormap.c` (the translation unit that includes every snippet).
 *
 * Any failure aborts the run; files already written stay on disk.
 */
pub fn export_colormap_tables(
    params: &TableExportParams,
    output: &OutputDirectory,
) -> Result<(), Box<dyn std::error::Error>> {
    if params.sample_count < 2 {
        return Err(format!(
            "sample_count must be at least 2, got {}",
            params.sample_count
        )
        .into());
    }

    // Resolve the entire name list before writing anything.
    let mut gradients = Vec::with_capacity(params.colormap_names.len());
    for name in &params.colormap_names {
        gradients.push((name, catalog::resolve(name)?));
    }

    for (name, gradient) in &gradients {
        let table = ColormapTable::from_gradient(gradient, params.sample_count);
        let file_name = format!("{}.inc", name);
        let mut writer = output.create_file(&file_name);
        codegen::write_table(&mut writer, name, &table, params.table_format)?;
        writer.flush()?;
        println!(
            "INFO:  Wrote table file to: {}",
            output.file_path(&file_name).display()
        );
    }

    if params.emit_linker_files {
        let mut writer = output.create_file("colormap.h");
        codegen::write_header(
            &mut writer,
            &params.colormap_names,
            params.sample_count,
            params.table_format,
        )?;
        writer.flush()?;
        println!(
            "INFO:  Wrote header file to: {}",
            output.file_path("colormap.h").display()
        );

        let mut writer = output.create_file("colormap.c");
        codegen::write_source(&mut writer, &params.colormap_names)?;
        writer.flush()?;
        println!(
            "INFO:  Wrote source file to: {}",
            output.file_path("colormap.c").display()
        );
    }

    Ok(())
}
