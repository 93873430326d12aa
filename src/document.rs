//! Document assembly: wraps rendered markup in a shell, or leaves it as an
//! embeddable fragment, and optionally minifies the result.

use std::fmt::Write;

use crate::style::escape_attr;

/// CSS reset applied by the full document shell.
const CSS_RESET: &str = "*{box-sizing:border-box;margin:0;padding:0}";

/// Options controlling how rendered markup is packaged.
#[derive(Debug, Clone, Default)]
pub struct AssembleOptions {
    /// Emit the body markup alone instead of a full document shell.
    pub fragment: bool,
    /// Inject web-font link tags for the fonts discovered during rendering.
    pub include_fonts: bool,
    /// Collapse whitespace in the final output.
    pub minify: bool,
    /// Frame dimensions driving the responsive auto-scaling wrapper.
    pub frame_width: Option<f64>,
    pub frame_height: Option<f64>,
}

/// Collapse whitespace runs to single spaces and drop spaces that touch a tag
/// boundary. The collapse is a fixed point: minifying already-minified
/// output returns it unchanged.
pub fn minify(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut pending_space = false;
    for ch in html.chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            if !out.is_empty() && !out.ends_with('>') && ch != '<' {
                out.push(' ');
            }
            pending_space = false;
        }
        out.push(ch);
    }
    out
}

/// Google-Fonts link tags for the given families, one per family.
fn font_links(fonts: &[String]) -> String {
    if fonts.is_empty() {
        return String::new();
    }
    let mut out = String::from("<link rel=\"preconnect\" href=\"https://fonts.googleapis.com\">");
    for family in fonts {
        let _ = write!(
            out,
            "<link href=\"https://fonts.googleapis.com/css2?family={}&display=swap\" rel=\"stylesheet\">",
            escape_attr(&family.replace(' ', "+"))
        );
    }
    out
}

/// Scaling wrapper plus the script that fits the fixed-size canvas into the
/// viewport, recomputing `min(vw/w, vh/h)` on every resize.
fn scaled_body(body: &str, width: f64, height: f64) -> String {
    format!(
        "<div id=\"framecast-stage\" style=\"position:relative;width:{w}px;height:{h}px;transform-origin:0 0;\">{body}</div>\
<script>(function(){{var stage=document.getElementById('framecast-stage');\
function fit(){{var k=Math.min(window.innerWidth/{w},window.innerHeight/{h});\
stage.style.transform='scale('+k+')';}}\
window.addEventListener('resize',fit);fit();}})();</script>",
        w = width,
        h = height,
        body = body
    )
}

/// Package rendered markup according to the options.
///
/// Fragment mode returns the body alone (still subject to minify). The full
/// shell adds charset and viewport metadata, a CSS reset, optional font
/// links, and the auto-scaling wrapper when frame dimensions are known.
pub fn assemble(body: &str, fonts: &[String], options: &AssembleOptions) -> String {
    let document = if options.fragment {
        body.to_string()
    } else {
        let links = if options.include_fonts {
            font_links(fonts)
        } else {
            String::new()
        };
        let body = match (options.frame_width, options.frame_height) {
            (Some(w), Some(h)) => scaled_body(body, w, h),
            _ => body.to_string(),
        };
        format!(
            "<!doctype html><html><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
{links}<style>{reset}</style></head><body>{body}</body></html>",
            links = links,
            reset = CSS_RESET,
            body = body
        )
    };

    if options.minify {
        minify(&document)
    } else {
        document
    }
}
