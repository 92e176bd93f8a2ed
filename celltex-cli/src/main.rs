use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use clap::ValueHint;
use eyre_span::emit;

use celltex::convert::{self, Options};

#[derive(Debug, Clone, Parser)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// Where to place resulting files (default is same directory as inputs)
	#[clap(long, short, value_hint = ValueHint::DirPath)]
	output: Option<Utf8PathBuf>,

	/// Pack all dds inputs into a single gtf file at this path
	#[clap(long, value_hint = ValueHint::FilePath)]
	pack: Option<Utf8PathBuf>,

	/// Keep uncompressed textures in linear memory layout
	#[clap(long)]
	linearize: bool,

	/// Mark converted textures as using unnormalized coordinates
	#[clap(long)]
	unnormalize: bool,

	/// Extract only the texture with this id from gtf inputs
	#[clap(long)]
	texture: Option<u32>,

	/// The files to convert
	#[clap(value_hint = ValueHint::FilePath, required = true)]
	file: Vec<Utf8PathBuf>,
}

impl Cli {
	fn options(&self) -> Options {
		Options {
			linearize: self.linearize,
			unnormalize: self.unnormalize,
		}
	}

	fn output(&self, path: &Utf8Path, name: &str) -> eyre::Result<Utf8PathBuf> {
		let dir = if let Some(output) = self.output.as_ref() {
			if self.file.len() == 1 {
				if let Some(parent) = output.parent() {
					std::fs::create_dir_all(parent)?;
				}
				return Ok(output.clone())
			}

			std::fs::create_dir_all(output)?;
			output
		} else {
			path.parent().ok_or_else(|| eyre::eyre!("file has no parent"))?
		};
		Ok(dir.join(name))
	}
}

fn main() -> eyre::Result<()> {
	init_tracing()?;

	let cli = Cli::parse();

	if let Some(target) = &cli.pack {
		emit(pack(&cli, target));
	} else {
		for file in &cli.file {
			emit(process(&cli, file));
		}
	}

	Ok(())
}

fn init_tracing() -> Result<(), eyre::Error> {
	use tracing_error::ErrorLayer;
	use tracing_subscriber::prelude::*;
	use tracing_subscriber::{fmt, EnvFilter};
	let fmt_layer = fmt::layer()
		.with_writer(std::io::stderr)
		.with_target(false);
	let filter_layer = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new("info"))?;
	tracing_subscriber::registry()
		.with(filter_layer)
		.with(fmt_layer)
		.with(ErrorLayer::default())
		.init();
	eyre_span::install()?;
	Ok(())
}

#[tracing::instrument(skip_all, fields(path=%file))]
fn process(cli: &Cli, file: &Utf8Path) -> eyre::Result<()> {
	let ext = file.extension().unwrap_or("");
	match ext {
		"dds" => {
			let data = std::fs::read(file)?;
			let gtf = convert::dds_to_gtf(&data, cli.options())?;
			let output = cli.output(file, &replace_ext(file, "gtf"))?;
			std::fs::write(&output, gtf)?;
			tracing::info!("wrote to {output}");
		}
		"gtf" => {
			let data = std::fs::read(file)?;
			let parsed = celltex::gtf::read(&data)?;
			for tex in &parsed.textures {
				tracing::info!(
					"texture {}: format {:#04x}, {}×{}×{}, {} mip(s)",
					tex.id, tex.info.format,
					tex.info.width, tex.info.height, tex.info.depth,
					tex.info.mipmap,
				);
			}
			let ids: Vec<u32> = match cli.texture {
				Some(id) => vec![id],
				None => parsed.textures.iter().map(|t| t.id).collect(),
			};
			let solo = ids.len() == 1;
			for id in ids {
				let dds = convert::gtf_to_dds(&data, id)?;
				let name = if solo {
					replace_ext(file, "dds")
				} else {
					replace_ext(file, &format!("{id}.dds"))
				};
				let output = cli.output(file, &name)?;
				std::fs::write(&output, dds)?;
				tracing::info!("wrote to {output}");
			}
		}
		_ => eyre::bail!("unknown file extension"),
	}
	Ok(())
}

#[tracing::instrument(skip_all, fields(path=%target))]
fn pack(cli: &Cli, target: &Utf8Path) -> eyre::Result<()> {
	let mut inputs = Vec::with_capacity(cli.file.len());
	for file in &cli.file {
		inputs.push(std::fs::read(file)?);
	}
	let refs = inputs.iter().map(|v| v.as_slice()).collect::<Vec<_>>();
	let gtf = celltex::pack::pack(&refs, cli.options())?;
	if let Some(parent) = target.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(target, gtf)?;
	tracing::info!("packed {} texture(s) into {target}", cli.file.len());
	Ok(())
}

fn replace_ext(file: &Utf8Path, ext: &str) -> String {
	file.with_extension(ext)
		.file_name()
		.expect("input paths have file names")
		.to_owned()
}
