//! Viewport coordinate system - pan/zoom state and client <-> document mapping.
//!
//! The mapping from document space to client space is
//!
//! ```text
//! client = surface_origin + pan + document * scale
//! ```
//!
//! Every zoom pivots on a client-space anchor so the document point under the
//! cursor (or between two fingers) stays put on screen.

use crate::constants::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE};
use crate::types::{ClientPoint, ViewPoint};
use crate::viewport::affine::AffineTransform;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Pan offset and zoom factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: DEFAULT_SCALE,
        }
    }
}

impl ViewState {
    pub const fn new(x: f32, y: f32, scale: f32) -> Self {
        Self { x, y, scale }
    }

    /// Document -> surface-local transform for this view.
    #[inline]
    pub fn transform(&self) -> AffineTransform {
        AffineTransform::scale_translate(self.scale, self.x, self.y)
    }
}

/// Inclusive bounds for the zoom factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleExtents {
    pub min: f32,
    pub max: f32,
}

impl Default for ScaleExtents {
    fn default() -> Self {
        Self {
            min: MIN_SCALE,
            max: MAX_SCALE,
        }
    }
}

impl ScaleExtents {
    /// Build extents, reordering swapped bounds and keeping both strictly
    /// positive so the view transform stays invertible. Non-finite bounds
    /// fall back to the defaults.
    pub fn new(min: f32, max: f32) -> Self {
        let min = if min.is_finite() { min } else { MIN_SCALE };
        let max = if max.is_finite() { max } else { MAX_SCALE };
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let floor = f32::EPSILON;
        Self {
            min: min.max(floor),
            max: max.max(floor),
        }
    }

    #[inline]
    pub fn clamp(&self, scale: f32) -> f32 {
        scale.max(self.min).min(self.max)
    }
}

/// The document-space rectangle currently visible on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub view_min: ViewPoint,
    pub view_max: ViewPoint,
    pub canvas_width: f32,
    pub canvas_height: f32,
}

/// Handle returned by [`CoordinateSystem::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type ViewListener = Box<dyn FnMut(&ViewState)>;

/// Owns the view state and the surface geometry it is applied to.
pub struct CoordinateSystem {
    view: ViewState,
    extents: ScaleExtents,
    /// Client-space position of the surface's top-left corner
    surface_origin: ClientPoint,
    /// Surface size in pixels
    surface_size: (f32, f32),
    listeners: Vec<(ListenerId, ViewListener)>,
    next_listener: u64,
}

impl Default for CoordinateSystem {
    fn default() -> Self {
        Self::new(ScaleExtents::default())
    }
}

impl fmt::Debug for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoordinateSystem")
            .field("view", &self.view)
            .field("extents", &self.extents)
            .field("surface_origin", &self.surface_origin)
            .field("surface_size", &self.surface_size)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl CoordinateSystem {
    pub fn new(extents: ScaleExtents) -> Self {
        Self {
            view: ViewState {
                scale: extents.clamp(DEFAULT_SCALE),
                ..ViewState::default()
            },
            extents,
            surface_origin: ClientPoint::default(),
            surface_size: (0.0, 0.0),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    #[inline]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.view.scale
    }

    #[inline]
    pub fn scale_extents(&self) -> ScaleExtents {
        self.extents
    }

    /// Document -> surface-local transform.
    #[inline]
    pub fn transform(&self) -> AffineTransform {
        self.view.transform()
    }

    /// Surface-local -> document transform.
    pub fn inverse_transform(&self) -> AffineTransform {
        let scale = self.view.scale;
        // scale is kept inside positive extents, so this always exists
        self.transform().invert().unwrap_or(AffineTransform::scale_translate(
            1.0 / scale,
            -self.view.x / scale,
            -self.view.y / scale,
        ))
    }

    pub fn surface_origin(&self) -> ClientPoint {
        self.surface_origin
    }

    pub fn surface_size(&self) -> (f32, f32) {
        self.surface_size
    }

    /// Record where the drawing surface sits in client space and how large it is.
    /// Surface geometry is not part of the view, so listeners are not notified.
    pub fn set_surface(&mut self, origin: ClientPoint, width: f32, height: f32) {
        self.surface_origin = origin;
        self.surface_size = (width.max(0.0), height.max(0.0));
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Scale 1, no pan.
    pub fn reset_view(&mut self) {
        self.view = ViewState {
            x: 0.0,
            y: 0.0,
            scale: self.extents.clamp(DEFAULT_SCALE),
        };
        trace!("view reset");
        self.notify();
    }

    /// Replace the view. Scale is clamped to the extents; pan is taken as is.
    /// A non-finite scale keeps the current one.
    pub fn set_view(&mut self, view: ViewState) {
        let scale = if view.scale.is_finite() {
            self.extents.clamp(view.scale)
        } else {
            self.view.scale
        };
        self.view = ViewState {
            x: view.x,
            y: view.y,
            scale,
        };
        self.notify();
    }

    /// Change the scale extents and re-clamp the current scale.
    pub fn set_scale_extents(&mut self, extents: ScaleExtents) {
        self.extents = extents;
        self.view.scale = extents.clamp(self.view.scale);
        self.notify();
    }

    /// Add `delta_scale` to the current scale, keeping the document point under
    /// `client` fixed on screen. Listeners hear about every call; returns
    /// `false` when the clamped scale does not change.
    pub fn scale_at_client_point(&mut self, delta_scale: f32, client: ClientPoint) -> bool {
        let old_scale = self.view.scale;
        let new_scale = self.extents.clamp(old_scale + delta_scale);
        if new_scale == old_scale || !delta_scale.is_finite() {
            self.notify();
            return false;
        }

        let anchor = self.client_to_local(client);
        let k = new_scale / old_scale;
        let about_anchor = AffineTransform::translation(anchor.0, anchor.1)
            .compose(&AffineTransform::scale_translate(k, 0.0, 0.0))
            .compose(&AffineTransform::translation(-anchor.0, -anchor.1));
        let next = about_anchor.compose(&self.transform());

        self.view = ViewState {
            x: next.e,
            y: next.f,
            scale: new_scale,
        };
        trace!(scale = new_scale, x = next.e, y = next.f, "scaled at client point");
        self.notify();
        true
    }

    /// View that places document point `doc` under client point `client`
    /// at `scale` (clamped). Used by pinch gestures to pivot on the centroid.
    pub fn view_anchored_at(&self, doc: ViewPoint, client: ClientPoint, scale: f32) -> ViewState {
        let scale = self.extents.clamp(scale);
        let (lx, ly) = self.client_to_local(client);
        ViewState {
            x: lx - doc.x * scale,
            y: ly - doc.y * scale,
            scale,
        }
    }

    /// Document point that `client` mapped to under an earlier `view`.
    pub fn view_point_under(&self, client: ClientPoint, view: ViewState) -> ViewPoint {
        let (lx, ly) = self.client_to_local(client);
        ViewPoint::new((lx - view.x) / view.scale, (ly - view.y) / view.scale)
    }

    // ------------------------------------------------------------------------
    // Conversions
    // ------------------------------------------------------------------------

    /// Client space -> document space. Pure.
    pub fn client_point_to_view_point(&self, client: ClientPoint) -> ViewPoint {
        let (lx, ly) = self.client_to_local(client);
        let (x, y) = self.inverse_transform().apply(lx, ly);
        ViewPoint::new(x, y)
    }

    /// Document space -> client space.
    pub fn view_point_to_client_point(&self, point: ViewPoint) -> ClientPoint {
        let (lx, ly) = self.transform().apply(point.x, point.y);
        ClientPoint::new(lx + self.surface_origin.x, ly + self.surface_origin.y)
    }

    /// Document rectangle visible on the surface.
    pub fn canvas_bounds(&self) -> CanvasBounds {
        let inverse = self.inverse_transform();
        let (w, h) = self.surface_size;
        let (min_x, min_y) = inverse.apply(0.0, 0.0);
        let (max_x, max_y) = inverse.apply(w, h);
        CanvasBounds {
            view_min: ViewPoint::new(min_x, min_y),
            view_max: ViewPoint::new(max_x, max_y),
            canvas_width: w,
            canvas_height: h,
        }
    }

    #[inline]
    fn client_to_local(&self, client: ClientPoint) -> (f32, f32) {
        (client.x - self.surface_origin.x, client.y - self.surface_origin.y)
    }

    // ------------------------------------------------------------------------
    // Change notification
    // ------------------------------------------------------------------------

    /// Register a callback invoked once after every view mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&ViewState) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        let view = self.view;
        for (_, listener) in &mut self.listeners {
            listener(&view);
        }
    }
}
