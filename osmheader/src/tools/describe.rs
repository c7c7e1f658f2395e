use anyhow::{Context, Result};
use clap::Args;
use osmheader_core::{GeoBox, Header};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// bounding box as "min_lon,min_lat,max_lon,max_lat", can be repeated
	#[arg(long = "bbox", value_name = "BBOX", allow_hyphen_values = true)]
	boxes: Vec<String>,

	/// option as "key=value" (a bare "key" means "key=true"), can be repeated
	#[arg(long = "option", short = 'o', value_name = "KEY=VALUE")]
	options: Vec<String>,

	/// the stream may contain multiple versions of the same object
	#[arg(long)]
	multiple_versions: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let header = build_header(arguments)?;
	print!("{header}");
	Ok(())
}

fn build_header(arguments: &Subcommand) -> Result<Header> {
	let mut header = Header::new();
	for text in &arguments.boxes {
		let bbox: GeoBox = text.parse().context("while reading --bbox")?;
		if !bbox.is_valid() {
			log::warn!("bounding box {text:?} is not valid");
		}
		header.add_box(bbox);
	}
	for text in &arguments.options {
		header
			.options_mut()
			.set_from_str(text)
			.with_context(|| format!("while reading --option {text:?}"))?;
	}
	header.set_has_multiple_object_versions(arguments.multiple_versions);
	log::debug!("assembled header with {} boxes", header.boxes().len());
	Ok(header)
}
