use anyhow::{Context, Result};
use clap::Args;
use osmheader_core::{GeoBox, Header};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// bounding boxes as "min_lon,min_lat,max_lon,max_lat"
	#[arg(required = true, allow_hyphen_values = true, value_name = "BBOX")]
	boxes: Vec<String>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	println!("{}", join(&arguments.boxes)?);
	Ok(())
}

fn join(boxes: &[String]) -> Result<GeoBox> {
	let mut header = Header::new();
	for text in boxes {
		header.add_box(text.parse().with_context(|| format!("while reading bounding box {text:?}"))?);
	}
	Ok(header.joined_boxes())
}
