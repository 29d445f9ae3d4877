//! Fit and alignment.
//!
//! [`Fit`] and [`Alignment`] are the engine's own codes and are forwarded
//! untouched with every pointer command; the engine owns the coordinate math.
//! [`ViewFit`] is the view-level choice a host configures, bridged to engine
//! codes plus a scale factor with [`ViewFit::bridged`].

use serde::{Deserialize, Serialize};

/// How an artboard is scaled into its bounds. Discriminants are the engine's
/// raw values.
#[repr(i32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Fit {
    Fill = 0,
    Contain = 1,
    Cover = 2,
    FitWidth = 3,
    FitHeight = 4,
    None = 5,
    ScaleDown = 6,
    /// Defer to the layout rules in the file, scaled by the scale factor.
    Layout = 7,
}

impl Fit {
    #[inline]
    pub fn raw(self) -> i32 {
        self as i32
    }
}

/// Where an artboard sits inside its bounds when it does not fill them.
/// Discriminants are the engine's raw values.
#[repr(i32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    TopLeft = 0,
    TopCenter = 1,
    TopRight = 2,
    CenterLeft = 3,
    Center = 4,
    CenterRight = 5,
    BottomLeft = 6,
    BottomCenter = 7,
    BottomRight = 8,
}

impl Alignment {
    pub const ALL: [Alignment; 9] = [
        Alignment::TopLeft,
        Alignment::TopCenter,
        Alignment::TopRight,
        Alignment::CenterLeft,
        Alignment::Center,
        Alignment::CenterRight,
        Alignment::BottomLeft,
        Alignment::BottomCenter,
        Alignment::BottomRight,
    ];

    #[inline]
    pub fn raw(self) -> i32 {
        self as i32
    }
}

/// Scale factor source for [`ViewFit::Layout`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ScaleFactor {
    /// Use the display's scale (native scale when the host knows it).
    Automatic,
    Explicit(f32),
}

/// Display scale information supplied by the hosting view.
pub trait ScaleProvider {
    /// Physical scale of the screen the view is on, if known.
    fn native_scale(&self) -> Option<f64>;
    /// Logical scale from the view's traits.
    fn display_scale(&self) -> f64;
}

/// Fit as configured on a view.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ViewFit {
    Fill(Alignment),
    Contain(Alignment),
    Cover(Alignment),
    FitWidth(Alignment),
    FitHeight(Alignment),
    None(Alignment),
    ScaleDown(Alignment),
    Layout(ScaleFactor),
}

impl Default for ViewFit {
    fn default() -> Self {
        ViewFit::Contain(Alignment::Center)
    }
}

/// Engine-ready fit parameters.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BridgedFit {
    pub fit: Fit,
    pub alignment: Alignment,
    pub scale_factor: f32,
}

impl ViewFit {
    /// Resolve to engine codes.
    ///
    /// Every fit except `Layout` uses a scale factor of 1. `Layout` is always
    /// centered; `Automatic` prefers the native scale over the display scale.
    pub fn bridged(&self, provider: &dyn ScaleProvider) -> BridgedFit {
        let unit = |fit: Fit, alignment: Alignment| BridgedFit {
            fit,
            alignment,
            scale_factor: 1.0,
        };
        match *self {
            ViewFit::Fill(a) => unit(Fit::Fill, a),
            ViewFit::Contain(a) => unit(Fit::Contain, a),
            ViewFit::Cover(a) => unit(Fit::Cover, a),
            ViewFit::FitWidth(a) => unit(Fit::FitWidth, a),
            ViewFit::FitHeight(a) => unit(Fit::FitHeight, a),
            ViewFit::None(a) => unit(Fit::None, a),
            ViewFit::ScaleDown(a) => unit(Fit::ScaleDown, a),
            ViewFit::Layout(factor) => {
                let scale_factor = match factor {
                    ScaleFactor::Automatic => provider
                        .native_scale()
                        .unwrap_or_else(|| provider.display_scale())
                        as f32,
                    ScaleFactor::Explicit(sf) => sf,
                };
                BridgedFit {
                    fit: Fit::Layout,
                    alignment: Alignment::Center,
                    scale_factor,
                }
            }
        }
    }
}
