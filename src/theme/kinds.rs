#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;

use super::Theme;
use crate::utils::{Px, Rgba, rgb};

/// Semantic palette roles that resolve to theme-defined colors.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> Rgba)]
pub enum PaletteRoleKind {
    /// Brand color for primary actions.
    #[assoc(resolve = theme.palette.primary.main)]
    Primary,
    /// Supporting brand color; also the control accent.
    #[assoc(resolve = theme.palette.secondary.main)]
    Secondary,
    /// Soft emphasis surfaces and the fallback for most custom colors.
    #[assoc(resolve = theme.palette.accent.main)]
    Accent,
    /// Body text and outlines.
    #[assoc(resolve = theme.palette.dark.main)]
    Dark,
    /// Light surfaces.
    #[assoc(resolve = theme.palette.light.main)]
    Light,
    /// Read-state indicators.
    #[assoc(resolve = theme.palette.marked_read.main)]
    MarkedRead,
}

/// Optional per-tenant colors with their documented fallbacks.
///
/// `resolve` never fails: when a tenant leaves a custom color unset, the
/// fallback recorded here is substituted, so consumers get a usable color
/// for every theme without spelling the fallback themselves.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn fallback(&self, theme: &Theme) -> Rgba)]
pub enum CustomColorKind {
    /// Breadcrumb and sidebar icon backgrounds.
    #[assoc(fallback = theme.palette.accent.main)]
    IconColor,
    /// Text on primary buttons.
    #[assoc(fallback = rgb(0xFFFFFF))]
    PrimaryButtonTextColor,
    /// Border of the mark-as-read button.
    #[assoc(fallback = theme.palette.secondary.main)]
    MarkAsReadBorderColor,
    /// Background of the mark-as-read button.
    #[assoc(fallback = theme.palette.accent.main)]
    MarkAsReadBackgroundColor,
    /// Background of read-by avatars.
    #[assoc(fallback = theme.palette.accent.main)]
    ReadByBackgroundColor,
    /// Text inside step-progress indicators.
    #[assoc(fallback = theme.palette.dark.main)]
    StepIndicatorTextColor,
    /// Background of the active tab.
    #[assoc(fallback = theme.palette.accent.main)]
    TabBackgroundColor,
}

impl CustomColorKind {
    /// The tenant-supplied color, when set.
    pub fn get(&self, theme: &Theme) -> Option<Rgba> {
        let custom = &theme.palette.custom;

        match self {
            Self::IconColor => custom.icon_color,
            Self::PrimaryButtonTextColor => custom.primary_button_text_color,
            Self::MarkAsReadBorderColor => custom.mark_as_read_border_color,
            Self::MarkAsReadBackgroundColor => custom.mark_as_read_background_color,
            Self::ReadByBackgroundColor => custom.read_by_background_color,
            Self::StepIndicatorTextColor => custom.step_indicator_text_color,
            Self::TabBackgroundColor => custom.tab_background_color,
        }
    }

    /// The tenant-supplied color, or this kind's documented fallback.
    pub fn resolve(&self, theme: &Theme) -> Rgba {
        self.get(theme).unwrap_or_else(|| self.fallback(theme))
    }
}

/// Corner radius variants derived from the theme's base rounding unit.
///
/// Consumers pick a kind instead of multiplying `shape.border_radius`
/// by ad-hoc constants.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn factor(&self) -> f32)]
pub enum RadiusKind {
    /// Tight rounding for compact chrome.
    #[assoc(factor = 0.5)]
    Sm,
    /// The base unit itself.
    #[assoc(factor = 1.0)]
    Md,
    /// Cards, buttons and other prominent surfaces.
    #[assoc(factor = 2.0)]
    Lg,
    /// Pill-shaped elements.
    #[assoc(factor = 4.0)]
    Xl,
}

impl RadiusKind {
    pub fn resolve(&self, theme: &Theme) -> Px {
        theme.shape.radius(self.factor())
    }
}

/// Named width thresholds for responsive style branching.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> Px)]
pub enum BreakpointKind {
    #[assoc(resolve = theme.breakpoints.xs)]
    Xs,
    #[assoc(resolve = theme.breakpoints.sm)]
    Sm,
    #[assoc(resolve = theme.breakpoints.md)]
    Md,
    #[assoc(resolve = theme.breakpoints.lg)]
    Lg,
    #[assoc(resolve = theme.breakpoints.xl)]
    Xl,
}
