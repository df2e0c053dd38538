use clap::{Parser, Subcommand};
use exif_frame::compose::{self, RenderOptions};
use exif_frame::exif::read_exif;
use std::path::{Path, PathBuf};

/// Shared flags for commands that render an overlay.
#[derive(clap::Args, Clone)]
struct OverlayArgs {
    /// Skip the manufacturer brand mark
    #[arg(long)]
    no_logo: bool,

    /// Omit the aperture from the settings line
    #[arg(long)]
    no_aperture: bool,

    /// Omit the exposure time from the settings line
    #[arg(long)]
    no_exposure: bool,

    /// Omit the ISO from the settings line
    #[arg(long)]
    no_iso: bool,
}

impl OverlayArgs {
    fn to_options(&self) -> RenderOptions {
        RenderOptions {
            logo: !self.no_logo,
            aperture: !self.no_aperture,
            exposure: !self.no_exposure,
            iso: !self.no_iso,
        }
    }
}

#[derive(Parser)]
#[command(name = "exif-frame")]
#[command(about = "Overlay camera metadata onto photos in an extended margin band")]
#[command(long_about = "\
Overlay camera metadata onto photos in an extended margin band

The source image keeps its pixels untouched; a white band is appended below
it carrying the camera model, capture time, lens, and exposure settings
read from the photo's EXIF, plus an optional manufacturer mark. Missing or
malformed metadata renders as blank fields — the overlay never fails on a
bad tag.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the framed image to a file
    Render {
        /// Source photo
        input: PathBuf,
        /// Output path (default: <stem>-framed.jpg beside the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        overlay: OverlayArgs,
    },
    /// Render a bounded preview JPEG (longest edge capped at 1000px)
    Preview {
        /// Source photo
        input: PathBuf,
        /// Output path for the preview JPEG
        #[arg(short, long)]
        output: PathBuf,
        #[command(flatten)]
        overlay: OverlayArgs,
    },
    /// Print the normalized EXIF record as JSON
    Info {
        /// Source photo
        input: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            input,
            output,
            overlay,
        } => {
            let output = output.unwrap_or_else(|| default_output_path(&input));
            compose::render_to_file(&input, &output, &overlay.to_options())?;
            println!("Saved framed image to {}", output.display());
        }
        Command::Preview {
            input,
            output,
            overlay,
        } => {
            let bytes = compose::render_preview_jpeg(&input, &overlay.to_options())?;
            std::fs::write(&output, &bytes)?;
            println!("Saved preview ({} bytes) to {}", bytes.len(), output.display());
        }
        Command::Info { input } => {
            let info = read_exif(&input);
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}

/// Default output path: `photo.jpg` → `photo-framed.jpg` beside the input.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    parent.join(format!("{stem}-framed.jpg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_beside_input() {
        assert_eq!(
            default_output_path(Path::new("/photos/dawn.jpg")),
            PathBuf::from("/photos/dawn-framed.jpg")
        );
    }

    #[test]
    fn default_output_handles_bare_filename() {
        assert_eq!(
            default_output_path(Path::new("dawn.jpg")),
            PathBuf::from("dawn-framed.jpg")
        );
    }

    #[test]
    fn overlay_flags_invert_into_options() {
        let args = OverlayArgs {
            no_logo: true,
            no_aperture: false,
            no_exposure: false,
            no_iso: true,
        };
        let opts = args.to_options();
        assert!(!opts.logo);
        assert!(opts.aperture);
        assert!(opts.exposure);
        assert!(!opts.iso);
    }
}
