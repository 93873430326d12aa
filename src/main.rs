use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use framecast::{ClientConfig, Credential, FigmaClient, RenderOptions};

#[derive(Parser)]
#[command(name = "framecast", about = "Convert design-file frames into HTML/CSS")]
struct Cli {
    /// Personal access token for the design API
    #[arg(long, env = "FIGMA_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one frame to an HTML document
    Render {
        /// Pasted design-file link
        link: String,
        /// Node id of the frame (overrides the link's node-id parameter)
        #[arg(long)]
        node_id: Option<String>,
        /// Emit only the frame markup, without a document shell
        #[arg(long)]
        fragment: bool,
        /// Inject web-font links for fonts used by the frame
        #[arg(long)]
        fonts: bool,
        /// Collapse whitespace in the output
        #[arg(long)]
        minify: bool,
        /// Export scale for bitmap images
        #[arg(long, default_value_t = 2.0)]
        scale: f64,
        /// Write the document to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the renderable frames in a file
    Frames {
        /// Pasted design-file link
        link: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let token = cli
        .token
        .context("no token: pass --token or set FIGMA_TOKEN")?;
    let client = FigmaClient::new(ClientConfig::new(Credential::PersonalToken(token)))?;

    match cli.command {
        Command::Render {
            link,
            node_id,
            fragment,
            fonts,
            minify,
            scale,
            output,
        } => {
            let parsed = framecast::parse_design_link(&link)?;
            let node_id = node_id
                .or(parsed.node_id)
                .context("link carries no node-id: pass --node-id")?;

            let options = RenderOptions {
                fragment,
                include_fonts: fonts,
                minify,
                scale,
            };
            let frame = framecast::render_frame(&client, &parsed.file_key, &node_id, &options)
                .await
                .context("render failed")?;

            match output {
                Some(path) => {
                    std::fs::write(&path, &frame.code)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!(
                        "wrote {} ({}x{}) to {}",
                        frame.frame_id,
                        frame.width,
                        frame.height,
                        path.display()
                    );
                }
                None => println!("{}", frame.code),
            }
        }
        Command::Frames { link } => {
            let parsed = framecast::parse_design_link(&link)?;
            let listing = framecast::list_frames(&client, &parsed.file_key)
                .await
                .context("listing failed")?;

            eprintln!(
                "{} frames in {} (last modified {})",
                listing.frames.len(),
                listing.file_key,
                listing.last_modified
            );
            for frame in listing.frames {
                let size = match (frame.width, frame.height) {
                    (Some(w), Some(h)) => format!("{}x{}", w, h),
                    _ => "?".to_string(),
                };
                println!("{}\t{}\t{}\t{}", frame.id, frame.page, frame.name, size);
            }
        }
    }

    Ok(())
}
