//! Framecast
//!
//! Converts a design file's node tree (fetched from the upstream design API)
//! into absolutely positioned HTML/CSS markup, suitable for embedding or
//! rendering in a browser.
//!
//! # Features
//!
//! - **Tree renderer**: recursive depth-first markup emission with per-kind
//!   dispatch and per-container coordinate re-rooting
//! - **Batched resources**: image fills and web fonts are collected in one
//!   pass and resolved before rendering
//! - **Graceful degradation**: missing boxes, fills, or fonts fall back to
//!   documented defaults instead of failing a multi-hundred-node render
//!
//! # Example
//!
//! ```no_run
//! use framecast::{ClientConfig, Credential, FigmaClient, RenderOptions};
//!
//! # async fn run() -> framecast::Result<()> {
//! let config = ClientConfig::new(Credential::PersonalToken("token".into()));
//! let client = FigmaClient::new(config)?;
//!
//! let link = framecast::parse_design_link(
//!     "https://www.figma.com/design/AbC123/App?node-id=1-2",
//! )?;
//! let node_id = link.node_id.unwrap();
//! let frame = framecast::render_frame(&client, &link.file_key, &node_id,
//!     &RenderOptions::default()).await?;
//! println!("{}", frame.code);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod collect;
pub mod document;
pub mod error;
pub mod frames;
pub mod geometry;
pub mod link;
pub mod node;
pub mod render;
pub mod style;

pub use api::{ClientConfig, Credential, FigmaClient, ImageFormat};
pub use document::AssembleOptions;
pub use error::{Error, Result};
pub use frames::FrameInfo;
pub use geometry::Rect;
pub use link::{parse_design_link, DesignLink};
pub use node::{FileDocument, Node, NodeKind};

/// Options for a single frame render request.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit only the inner markup, without a document shell
    pub fragment: bool,
    /// Inject web-font link tags for fonts used by the frame
    pub include_fonts: bool,
    /// Collapse whitespace in the final output
    pub minify: bool,
    /// Export scale for resolved bitmap images
    pub scale: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fragment: false,
            include_fonts: false,
            minify: false,
            scale: 2.0,
        }
    }
}

/// A completed render: the markup plus the frame's identity and dimensions.
///
/// Immutable once produced; a changed file or changed options means a fresh
/// render, never an in-place mutation.
#[derive(Debug, Clone)]
pub struct RenderedFrame {
    pub frame_id: String,
    /// Always `"html"`
    pub format: &'static str,
    pub code: String,
    pub width: f64,
    pub height: f64,
}

/// A file's frame listing plus the metadata a listing UI needs.
#[derive(Debug, Clone)]
pub struct FrameListing {
    pub file_key: String,
    pub last_modified: String,
    pub frames: Vec<FrameInfo>,
}

/// Fetch a frame's subtree and render it to HTML.
///
/// One logical unit of work per request: subtree fetch, image-id collection,
/// batched URL resolution, render, assembly. Completion is all-or-nothing;
/// an error anywhere yields `Err`, never partial markup. Inputs are fetched
/// fresh, so independent renders share no state.
pub async fn render_frame(
    client: &FigmaClient,
    file_key: &str,
    node_id: &str,
    options: &RenderOptions,
) -> Result<RenderedFrame> {
    let root = client.get_node_subtree(file_key, node_id).await?;

    let image_ids: Vec<String> = collect::image_node_ids(&root).into_iter().collect();
    let images = client
        .get_image_urls(file_key, &image_ids, ImageFormat::Png, options.scale)
        .await?;

    let body = render::render_root(&root, &images);
    let fonts = collect::font_families(&root);

    let bounds = root.absolute_bounding_box.unwrap_or_default();
    let code = document::assemble(
        &body,
        &fonts,
        &AssembleOptions {
            fragment: options.fragment,
            include_fonts: options.include_fonts,
            minify: options.minify,
            frame_width: (bounds.width > 0.0).then_some(bounds.width),
            frame_height: (bounds.height > 0.0).then_some(bounds.height),
        },
    );

    Ok(RenderedFrame {
        frame_id: root.id,
        format: "html",
        code,
        width: bounds.width,
        height: bounds.height,
    })
}

/// List every renderable frame in a file, with preview image URLs resolved
/// in one batch.
pub async fn list_frames(client: &FigmaClient, file_key: &str) -> Result<FrameListing> {
    let file = client.get_file(file_key).await?;
    let mut frames = frames::extract_frames(&file);

    let ids: Vec<String> = frames.iter().map(|f| f.id.clone()).collect();
    let previews = client
        .get_image_urls(file_key, &ids, ImageFormat::Png, 2.0)
        .await?;
    for frame in &mut frames {
        frame.preview_url = previews.get(&frame.id).cloned();
    }

    Ok(FrameListing {
        file_key: file_key.to_string(),
        last_modified: file.last_modified,
        frames,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_render_options() {
        let options = RenderOptions::default();
        assert!(!options.fragment);
        assert!(!options.include_fonts);
        assert!(!options.minify);
        assert_eq!(options.scale, 2.0);
    }
}
