use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::deserializers::{de_px, de_string_or_non_empty_list};
use crate::utils::{Px, Rgba};

/// A fully resolved theme: the deep-merge of the base document with one
/// tenant fragment, with every field the merge may have left implicit
/// filled in from the base.
///
/// Field names in the JSON documents are camelCase (`appName`,
/// `markedRead`, `borderRadius`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Display name shown in application chrome, e.g. the header.
    pub app_name: String,
    pub palette: Palette,
    pub shape: Shape,
    pub typography: Typography,
    pub breakpoints: Breakpoints,
    pub components: ComponentOverrides,
}

impl Theme {
    /// Accent color applied to native checkbox and radio controls.
    /// Derived from the palette rather than stored, so it tracks the
    /// tenant's secondary color automatically.
    pub fn control_accent(&self) -> Rgba {
        self.palette.secondary.main
    }
}

/// Named color roles plus the optional per-tenant custom colors.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
    pub accent: PaletteColor,
    pub dark: PaletteColor,
    pub light: PaletteColor,
    pub marked_read: PaletteColor,
    #[serde(default)]
    pub custom: CustomColors,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PaletteColor {
    pub main: Rgba,
}

/// Optional named colors a tenant may set on top of the semantic roles.
///
/// Every field is optional and the resolved theme never fails for an
/// absent one; consumers read these through [`CustomColorKind`], which
/// carries the documented fallback for each color.
///
/// [`CustomColorKind`]: super::CustomColorKind
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomColors {
    pub icon_color: Option<Rgba>,
    pub primary_button_text_color: Option<Rgba>,
    pub mark_as_read_border_color: Option<Rgba>,
    pub mark_as_read_background_color: Option<Rgba>,
    pub read_by_background_color: Option<Rgba>,
    pub step_indicator_text_color: Option<Rgba>,
    pub tab_background_color: Option<Rgba>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    /// Base rounding unit. Consumers scale this value instead of
    /// hardcoding radii, so one fragment override restyles every corner.
    #[serde(deserialize_with = "de_px")]
    pub border_radius: Px,
}

impl Shape {
    /// Radius derived from the base unit.
    pub fn radius(&self, factor: f32) -> Px {
        self.border_radius * factor
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    /// Font stack, most specific first. A single string is accepted as a
    /// one-element stack.
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub font_family: SmallVec<[String; 1]>,
}

/// Named width thresholds for responsive style branching.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    #[serde(deserialize_with = "de_px")]
    pub xs: Px,
    #[serde(deserialize_with = "de_px")]
    pub sm: Px,
    #[serde(deserialize_with = "de_px")]
    pub md: Px,
    #[serde(deserialize_with = "de_px")]
    pub lg: Px,
    #[serde(deserialize_with = "de_px")]
    pub xl: Px,
}

/// Baseline overrides applied outside any one widget, e.g. the global
/// page background.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentOverrides {
    pub body_background: Rgba,
}
