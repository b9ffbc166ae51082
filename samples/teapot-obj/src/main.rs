use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use clap::Parser;
use teapot::{MeshStyle, Teapot};

mod cli;
mod obj;

use cli::Cli;
use obj::{ExportError, ObjWriter};

fn export(
    teapot: &mut Teapot,
    style: MeshStyle,
    scale: f32,
    out: impl Write,
) -> Result<(), ExportError> {
    let mut writer = ObjWriter::new(out);
    let refresh = match style {
        MeshStyle::Solid => teapot.render_solid(scale, &mut writer)?,
        MeshStyle::Wire => teapot.render_wire(scale, &mut writer)?,
    };
    tracing::debug!(?refresh, "rendered");
    writer.finish()?;
    tracing::info!(cache = %teapot.cache(style), "exported teapot");
    Ok(())
}

fn main() -> Result<(), ExportError> {
    let cli = Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);

    let mut teapot = Teapot::new();
    let style = MeshStyle::from(cli.style);
    match &cli.output {
        Some(path) => {
            tracing::info!(?path, %style, scale = cli.scale, "writing teapot");
            export(&mut teapot, style, cli.scale, BufWriter::new(File::create(path)?))
        }
        None => export(&mut teapot, style, cli.scale, BufWriter::new(io::stdout().lock())),
    }
}
