use serde::{Deserialize, Serialize};

/// The two looks of the page. Content and behaviour are shared; only styling
/// and the background decoration differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Gradient,
    Terminal,
}

/// Tailwind class sets for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub page: &'static str,
    pub nav: &'static str,
    pub brand: &'static str,
    pub nav_active: &'static str,
    pub nav_hover: &'static str,
    pub nav_idle: &'static str,
    pub mobile_active: &'static str,
    pub mobile_idle: &'static str,
    pub accent_text: &'static str,
    pub heading: &'static str,
    pub card: &'static str,
    pub chip: &'static str,
    pub bullet: &'static str,
    pub button_primary: &'static str,
    pub button_secondary: &'static str,
    pub footer: &'static str,
}

const GRADIENT: Palette = Palette {
    page: "relative min-h-screen bg-gradient-to-br from-slate-900 via-slate-800 to-slate-900 text-white overflow-x-hidden",
    nav: "fixed top-0 left-0 right-0 z-50 bg-slate-900/80 backdrop-blur-md border-b border-slate-700/50",
    brand: "text-2xl font-bold bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent hover:scale-105 transition-transform",
    nav_active: "text-cyan-400 scale-110",
    nav_hover: "hover:text-cyan-400",
    nav_idle: "text-gray-300",
    mobile_active: "bg-cyan-500/20 text-cyan-400",
    mobile_idle: "text-gray-300 hover:bg-slate-800",
    accent_text: "text-cyan-400",
    heading: "bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent",
    card: "bg-slate-800/50 backdrop-blur-sm border border-slate-700/50 hover:border-cyan-500/50",
    chip: "px-3 py-1 bg-cyan-500/10 text-cyan-400 text-xs rounded-full border border-cyan-500/20",
    bullet: "w-2 h-2 bg-cyan-400 rounded-full",
    button_primary: "px-8 py-3 bg-gradient-to-r from-cyan-500 to-blue-600 rounded-lg font-medium hover:shadow-lg hover:shadow-cyan-500/50 transition-all hover:scale-105",
    button_secondary: "px-8 py-3 border border-cyan-400 text-cyan-400 rounded-lg font-medium hover:bg-cyan-400/10 transition-all hover:scale-105",
    footer: "relative z-10 border-t border-slate-700/50 py-8 text-gray-400",
};

const TERMINAL: Palette = Palette {
    page: "relative min-h-screen bg-black text-green-400 font-mono overflow-x-hidden",
    nav: "fixed top-0 left-0 right-0 z-50 bg-black/80 backdrop-blur-md border-b border-green-500/30",
    brand: "text-2xl font-bold text-green-400 hover:text-green-300 glitch transition-colors",
    nav_active: "text-green-300 underline underline-offset-4",
    nav_hover: "hover:text-green-300",
    nav_idle: "text-green-600",
    mobile_active: "bg-green-500/20 text-green-300",
    mobile_idle: "text-green-600 hover:bg-green-900/40",
    accent_text: "text-green-300",
    heading: "text-green-400 terminal-cursor",
    card: "bg-black/70 border border-green-500/30 hover:border-green-400",
    chip: "px-3 py-1 bg-green-500/10 text-green-300 text-xs rounded border border-green-500/30",
    bullet: "w-2 h-2 bg-green-400",
    button_primary: "px-8 py-3 bg-green-500/20 border border-green-400 text-green-300 rounded font-medium hover:bg-green-500/30 transition-all",
    button_secondary: "px-8 py-3 border border-green-700 text-green-500 rounded font-medium hover:border-green-400 transition-all",
    footer: "relative z-10 border-t border-green-500/30 py-8 text-green-700",
};

impl Theme {
    pub fn route(self) -> &'static str {
        match self {
            Self::Gradient => "/",
            Self::Terminal => "/terminal",
        }
    }

    /// The theme the switch link leads to.
    pub fn other(self) -> Self {
        match self {
            Self::Gradient => Self::Terminal,
            Self::Terminal => Self::Gradient,
        }
    }

    pub fn switch_label(self) -> &'static str {
        match self {
            Self::Gradient => ">_ terminal",
            Self::Terminal => "gradient",
        }
    }

    pub fn heading_prefix(self) -> &'static str {
        match self {
            Self::Gradient => "",
            Self::Terminal => "> ",
        }
    }

    /// Whether the falling-glyph canvas is drawn behind the page.
    pub fn decorated(self) -> bool {
        matches!(self, Self::Terminal)
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Gradient => &GRADIENT,
            Self::Terminal => &TERMINAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_is_involution() {
        for theme in [Theme::Gradient, Theme::Terminal] {
            assert_ne!(theme.other(), theme);
            assert_eq!(theme.other().other(), theme);
            assert_ne!(theme.route(), theme.other().route());
        }
    }

    #[test]
    fn test_only_terminal_is_decorated() {
        assert!(!Theme::Gradient.decorated());
        assert!(Theme::Terminal.decorated());
        assert_eq!(Theme::default(), Theme::Gradient);
    }
}
