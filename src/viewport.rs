//! Viewport measurement for resolution negotiation with the media server.
//! Reads are layout-only; a missing measurement source degrades to a fixed
//! default instead of failing.

/// Size used when no live measurement is available (headless builds, or a
/// document that has not laid out yet).
pub const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 630,
    height: 460,
};

/// Minimum height an embedded sub-frame is allowed to shrink to.
const MIN_FRAME_HEIGHT: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Query-parameter form, e.g. `1280x720`.
    pub fn resolution(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        DEFAULT_VIEWPORT
    }
}

/// Fallback chain: window inner dimensions, then the root element's content
/// box, then the fixed default. Non-positive dimensions are treated as
/// unavailable.
fn resolve(window: Option<(f64, f64)>, document: Option<(i32, i32)>) -> Viewport {
    if let Some((w, h)) = window {
        if w >= 1.0 && h >= 1.0 {
            return Viewport {
                width: w as u32,
                height: h as u32,
            };
        }
    }

    if let Some((w, h)) = document {
        if w > 0 && h > 0 {
            return Viewport {
                width: w as u32,
                height: h as u32,
            };
        }
    }

    DEFAULT_VIEWPORT
}

/// Measure the usable rendering area. Never fails.
#[cfg(target_arch = "wasm32")]
pub fn measure() -> Viewport {
    let window = web_sys::window();

    let inner = window.as_ref().and_then(|win| {
        let w = win.inner_width().ok()?.as_f64()?;
        let h = win.inner_height().ok()?.as_f64()?;
        Some((w, h))
    });

    let root = window
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
        .map(|el| (el.client_width(), el.client_height()));

    resolve(inner, root)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn measure() -> Viewport {
    DEFAULT_VIEWPORT
}

/// Size for an embedded sub-frame: the viewport minus the vertical space the
/// sibling chrome occupies, floored so the frame stays usable.
pub fn frame_size(viewport: Viewport, chrome_height: u32) -> Viewport {
    Viewport {
        width: viewport.width,
        height: viewport
            .height
            .saturating_sub(chrome_height)
            .max(MIN_FRAME_HEIGHT),
    }
}
