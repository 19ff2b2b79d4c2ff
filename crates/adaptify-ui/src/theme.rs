//! Theme tokens for the Adaptify site.
//!
//! Both appearance modes share typography, spacing and motion tokens; only
//! colours differ. The active set is chosen by the `dark`/`light` class on
//! the document root.

use adaptify_core::{AppearanceMode, Palette};

/// Colour tokens for one appearance mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeColors {
    /// Page background.
    pub bg_primary: &'static str,
    /// Raised surfaces: header, cards, banner.
    pub bg_secondary: &'static str,
    /// Input fields and hover states.
    pub bg_tertiary: &'static str,
    /// Body text.
    pub text_primary: &'static str,
    /// Muted text.
    pub text_secondary: &'static str,
    /// Hairline borders.
    pub border: &'static str,
    /// Brand gradient.
    pub gradient_brand: &'static str,
    /// Modal backdrop.
    pub overlay: &'static str,
}

/// Colour tokens for `mode`. The backdrop and accents match the transition
/// overlay so the reveal lands on the exact page colour.
#[must_use]
pub const fn colors(mode: AppearanceMode) -> ModeColors {
    match mode {
        AppearanceMode::Dark => ModeColors {
            bg_primary: mode.theme_color(),
            bg_secondary: "#111111",
            bg_tertiary: "rgba(255, 255, 255, 0.05)",
            text_primary: "#ffffff",
            text_secondary: "#9ca3af",
            border: "rgba(255, 255, 255, 0.1)",
            gradient_brand: "linear-gradient(135deg, #06B6D4 0%, #7C3AED 100%)",
            overlay: "rgba(0, 0, 0, 0.8)",
        },
        AppearanceMode::Light => ModeColors {
            bg_primary: mode.theme_color(),
            bg_secondary: "#ffffff",
            bg_tertiary: "#F1F5F9",
            text_primary: "#0F172A",
            text_secondary: "#475569",
            border: "rgba(15, 23, 42, 0.1)",
            gradient_brand: "linear-gradient(135deg, #FB923C 0%, #F97316 100%)",
            overlay: "rgba(15, 23, 42, 0.5)",
        },
    }
}

/// Typography configuration.
pub mod typography {
    /// Body font stack.
    pub const FONT_FAMILY: &str =
        "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";
    /// Heading font stack.
    pub const FONT_FAMILY_HEADING: &str =
        "'Space Grotesk', 'Inter', -apple-system, BlinkMacSystemFont, sans-serif";
}

/// Animation/transition configuration.
pub mod animation {
    /// Hover and focus feedback.
    pub const FAST: &str = "0.15s cubic-bezier(0.4, 0, 0.2, 1)";
    /// Banner slide and modal fade.
    pub const SMOOTH: &str = "0.3s cubic-bezier(0.4, 0, 0.2, 1)";
    /// Reveal curve of the theme transition.
    pub const REVEAL: &str = "cubic-bezier(0.22, 1, 0.36, 1)";
}

fn mode_block(mode: AppearanceMode) -> String {
    let c = colors(mode);
    let accent = Palette::for_mode(mode);
    format!(
        r":root.{class} {{
  color-scheme: {class};
  --bg-primary: {bg_primary};
  --bg-secondary: {bg_secondary};
  --bg-tertiary: {bg_tertiary};
  --text-primary: {text_primary};
  --text-secondary: {text_secondary};
  --border-default: {border};
  --accent-primary: {accent_primary};
  --accent-secondary: {accent_secondary};
  --gradient-brand: {gradient_brand};
  --overlay-bg: {overlay};
}}",
        class = mode.css_class(),
        bg_primary = c.bg_primary,
        bg_secondary = c.bg_secondary,
        bg_tertiary = c.bg_tertiary,
        text_primary = c.text_primary,
        text_secondary = c.text_secondary,
        border = c.border,
        accent_primary = accent.primary,
        accent_secondary = accent.secondary,
        gradient_brand = c.gradient_brand,
        overlay = c.overlay,
    )
}

/// Generate CSS custom properties for both appearance modes.
pub fn generate_css_variables() -> String {
    format!(
        r":root {{
  --font-family: {font_family};
  --font-family-heading: {font_family_heading};
  --transition-fast: {transition_fast};
  --transition-smooth: {transition_smooth};
  --ease-reveal: {ease_reveal};
}}
{dark}
{light}",
        font_family = typography::FONT_FAMILY,
        font_family_heading = typography::FONT_FAMILY_HEADING,
        transition_fast = animation::FAST,
        transition_smooth = animation::SMOOTH,
        ease_reveal = animation::REVEAL,
        dark = mode_block(AppearanceMode::Dark),
        light = mode_block(AppearanceMode::Light),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_css_variables() {
        let css = generate_css_variables();
        assert!(css.contains(":root {"));
        assert!(css.contains(":root.dark {"));
        assert!(css.contains(":root.light {"));
        assert!(css.contains("--font-family"));
    }

    #[test]
    fn test_page_background_matches_theme_color() {
        for mode in [AppearanceMode::Dark, AppearanceMode::Light] {
            assert_eq!(colors(mode).bg_primary, mode.theme_color());
            assert!(mode_block(mode).contains(&format!("--bg-primary: {};", mode.theme_color())));
        }
    }

    #[test]
    fn test_accents_match_overlay_palette() {
        let css = mode_block(AppearanceMode::Light);
        assert!(css.contains("--accent-primary: #FB923C;"));
        assert!(css.contains("color-scheme: light;"));
    }
}
