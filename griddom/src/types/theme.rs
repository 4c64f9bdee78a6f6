use super::color::{oklch_to_rgb, rgb_to_oklch};
use super::{Color, ColorOp, Rgb};

/// A theme provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color variable name to a concrete color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<&Color>;
}

/// Minimal default theme providing basic readable colors.
/// Ensures content is visible without any styling effort.
pub struct DefaultTheme {
    pub background: Color,
    pub foreground: Color,
    pub surface: Color,
    pub border: Color,
    pub primary: Color,
    pub selection: Color,
    pub error: Color,
    pub muted: Color,
}

impl DefaultTheme {
    pub const fn new() -> Self {
        Self {
            background: Color::Oklch { l: 0.0, c: 0.0, h: 0.0 },
            foreground: Color::Oklch { l: 1.0, c: 0.0, h: 0.0 },
            surface: Color::Oklch { l: 0.2, c: 0.01, h: 250.0 },
            border: Color::Oklch { l: 0.45, c: 0.0, h: 0.0 },
            primary: Color::Oklch { l: 0.7, c: 0.12, h: 250.0 },
            selection: Color::Oklch { l: 0.4, c: 0.1, h: 290.0 },
            error: Color::Oklch { l: 0.6, c: 0.2, h: 25.0 },
            muted: Color::Oklch { l: 0.6, c: 0.0, h: 0.0 },
        }
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DefaultTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        match name {
            "background" => Some(&self.background),
            "foreground" | "fg" => Some(&self.foreground),
            "surface" => Some(&self.surface),
            "border" => Some(&self.border),
            "primary" => Some(&self.primary),
            "selection" => Some(&self.selection),
            "error" => Some(&self.error),
            "muted" => Some(&self.muted),
            _ => None,
        }
    }
}

/// Context for resolving color variables and derived colors to
/// concrete terminal colors.
pub struct ColorContext<'a> {
    theme: &'a dyn Theme,
}

impl<'a> ColorContext<'a> {
    pub fn new(theme: &'a dyn Theme) -> Self {
        Self { theme }
    }

    /// Resolve any color to a concrete `Rgb`.
    ///
    /// Variables are looked up in the theme (unknown names resolve to
    /// black rather than failing); derived colors have their operations
    /// applied in Oklch space.
    pub fn resolve(&self, color: &Color) -> Rgb {
        match color {
            Color::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Color::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
            Color::Var(name) => match self.theme.resolve(name) {
                Some(resolved) => self.resolve(resolved),
                None => {
                    log::debug!("unresolved color variable {name:?}");
                    Rgb::default()
                }
            },
            Color::Derived { base, ops } => {
                let base_rgb = self.resolve(base);
                let (mut l, mut c, mut h) = rgb_to_oklch(base_rgb);
                for op in ops {
                    match op {
                        ColorOp::Lighten(amount) => {
                            l = (l + amount).clamp(0.0, 1.0);
                        }
                        ColorOp::Darken(amount) => {
                            l = (l - amount).clamp(0.0, 1.0);
                        }
                        ColorOp::Mix(other, amount) => {
                            let other_rgb = self.resolve(other);
                            let (ol, oc, oh) = rgb_to_oklch(other_rgb);
                            l = l * (1.0 - amount) + ol * amount;
                            c = c * (1.0 - amount) + oc * amount;
                            // Interpolate hue along the short arc
                            let mut dh = oh - h;
                            if dh > 180.0 {
                                dh -= 360.0;
                            } else if dh < -180.0 {
                                dh += 360.0;
                            }
                            h = (h + dh * amount).rem_euclid(360.0);
                        }
                    }
                }
                oklch_to_rgb(l, c, h)
            }
        }
    }
}
