use crate::types::{Color, ColorOp, Oklch, Rgb};

/// A theme provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color variable name to a concrete color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<&Color>;
}

/// Dark default theme. Variable names are the ones the built-in widgets
/// reference: `background`, `foreground`, `surface`, `border`, `primary`,
/// `muted`, `accent`.
pub struct DefaultTheme {
    pub background: Color,
    pub foreground: Color,
    pub surface: Color,
    pub border: Color,
    pub primary: Color,
    pub muted: Color,
    pub accent: Color,
}

impl DefaultTheme {
    pub const fn new() -> Self {
        Self {
            background: Color::Oklch { l: 0.13, c: 0.01, h: 250.0 },
            foreground: Color::Oklch { l: 0.95, c: 0.0, h: 0.0 },
            surface: Color::Oklch { l: 0.22, c: 0.02, h: 250.0 },
            border: Color::Oklch { l: 0.45, c: 0.01, h: 250.0 },
            primary: Color::Oklch { l: 0.75, c: 0.12, h: 250.0 },
            muted: Color::Oklch { l: 0.6, c: 0.0, h: 0.0 },
            accent: Color::Oklch { l: 0.65, c: 0.15, h: 150.0 },
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
            "foreground" => Some(&self.foreground),
            "surface" => Some(&self.surface),
            "border" => Some(&self.border),
            "primary" => Some(&self.primary),
            "muted" => Some(&self.muted),
            "accent" => Some(&self.accent),
            _ => None,
        }
    }
}

/// Light counterpart to [`DefaultTheme`], same variable set.
pub struct LightTheme {
    pub background: Color,
    pub foreground: Color,
    pub surface: Color,
    pub border: Color,
    pub primary: Color,
    pub muted: Color,
    pub accent: Color,
}

impl LightTheme {
    pub const fn new() -> Self {
        Self {
            background: Color::Oklch { l: 0.97, c: 0.0, h: 0.0 },
            foreground: Color::Oklch { l: 0.2, c: 0.01, h: 250.0 },
            surface: Color::Oklch { l: 0.88, c: 0.01, h: 250.0 },
            border: Color::Oklch { l: 0.6, c: 0.01, h: 250.0 },
            primary: Color::Oklch { l: 0.45, c: 0.12, h: 250.0 },
            muted: Color::Oklch { l: 0.5, c: 0.0, h: 0.0 },
            accent: Color::Oklch { l: 0.5, c: 0.15, h: 150.0 },
        }
    }
}

impl Default for LightTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for LightTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        match name {
            "background" => Some(&self.background),
            "foreground" => Some(&self.foreground),
            "surface" => Some(&self.surface),
            "border" => Some(&self.border),
            "primary" => Some(&self.primary),
            "muted" => Some(&self.muted),
            "accent" => Some(&self.accent),
            _ => None,
        }
    }
}

/// Resolves style colors against a theme, collapsing variables and
/// derivations into concrete terminal colors.
pub struct ColorContext<'a> {
    theme: &'a dyn Theme,
}

impl<'a> ColorContext<'a> {
    pub fn new(theme: &'a dyn Theme) -> Self {
        Self { theme }
    }

    /// Resolve a color to a concrete `Rgb`.
    /// Unresolved variables fall back to black. Plain RGB colors pass
    /// through untouched; only derivations go through Oklch.
    pub fn resolve(&self, color: &Color) -> Rgb {
        match color {
            Color::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Color::Oklch { l, c, h } => Oklch::new(*l, *c, *h).to_rgb(),
            Color::Var(name) => match self.theme.resolve(name) {
                Some(resolved) => self.resolve(resolved),
                None => Rgb::default(),
            },
            Color::Derived { .. } => self.resolve_oklch(color).to_rgb(),
        }
    }

    fn resolve_oklch(&self, color: &Color) -> Oklch {
        match color {
            Color::Rgb { r, g, b } => Oklch::from_rgb(Rgb::new(*r, *g, *b)),
            Color::Oklch { l, c, h } => Oklch::new(*l, *c, *h),
            Color::Var(name) => match self.theme.resolve(name) {
                Some(resolved) => self.resolve_oklch(resolved),
                None => Oklch::default(),
            },
            Color::Derived { base, ops } => {
                let mut oklch = self.resolve_oklch(base);
                for op in ops {
                    oklch = self.apply(oklch, op);
                }
                oklch
            }
        }
    }

    fn apply(&self, mut oklch: Oklch, op: &ColorOp) -> Oklch {
        match op {
            ColorOp::Lighten(amount) => {
                oklch.l = (oklch.l + amount).clamp(0.0, 1.0);
            }
            ColorOp::Darken(amount) => {
                oklch.l = (oklch.l - amount).clamp(0.0, 1.0);
            }
            ColorOp::Mix(other, amount) => {
                let other = self.resolve_oklch(other);
                oklch.l = oklch.l * (1.0 - amount) + other.l * amount;
                oklch.c = oklch.c * (1.0 - amount) + other.c * amount;
                // Interpolate hue along the shorter arc
                let mut diff = other.h - oklch.h;
                if diff > 180.0 {
                    diff -= 360.0;
                } else if diff < -180.0 {
                    diff += 360.0;
                }
                oklch.h = (oklch.h + diff * amount).rem_euclid(360.0);
            }
        }
        oklch
    }
}
