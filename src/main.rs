use clap::Parser;
use serde::de::DeserializeOwned;

use colormap_exporter::cli::args::{ColormapExporterArgs, CommandsEnum};
use colormap_exporter::cli::export::{export_colormap_tables, TableExportParams};
use colormap_exporter::cli::swatch::{generate_color_swatch, SwatchParams};
use colormap_exporter::core::file_io::{
    build_output_path_with_date_time, maybe_date_time_string, OutputDirectory,
};

fn read_params<T: DeserializeOwned>(path: &str) -> T {
    serde_json::from_str(&std::fs::read_to_string(path).expect("Unable to read param file"))
        .unwrap()
}

fn main() {
    let args: ColormapExporterArgs = ColormapExporterArgs::parse();

    match &args.command {
        Some(CommandsEnum::Export(params)) => {
            let export_params: TableExportParams = read_params(&params.params_path);
            let output = OutputDirectory {
                directory_path: build_output_path_with_date_time(
                    &params.params_path,
                    "export",
                    &maybe_date_time_string(params.date_time_out),
                ),
            };
            export_colormap_tables(&export_params, &output).unwrap();
        }

        Some(CommandsEnum::Swatch(params)) => {
            let swatch_params: SwatchParams = read_params(&params.params_path);
            let output = OutputDirectory {
                directory_path: build_output_path_with_date_time(
                    &params.params_path,
                    "swatch",
                    &maybe_date_time_string(params.date_time_out),
                ),
            };
            generate_color_swatch(&swatch_params, &output).unwrap();
        }

        None => {
            println!("Default command (nothing specified!)");
        }
    }
}
