//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No rendering logic lives here.

use clap::{Parser, ValueEnum};

use retrofit_core::domain::ValidationPolicy;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "retrofit",
    bin_name = "retrofit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Legacy renderer behind a modern interface",
    long_about = "Retrofit renders the same scenes through a legacy engine \
                  (via adapters) and through a native renderer, printing one \
                  trace line per load or draw.",
    after_help = "EXAMPLES:\n\
        \x20 retrofit\n\
        \x20 retrofit --shape sprite\n\
        \x20 retrofit --policy lenient -v",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Which renderer shape to demonstrate.
    #[arg(
        short = 's',
        long = "shape",
        value_enum,
        default_value = "all",
        help = "Renderer shape to demonstrate"
    )]
    pub shape: Shape,

    /// Override the configured blank-input policy.
    #[arg(
        short = 'p',
        long = "policy",
        value_enum,
        help = "Blank-input policy for the adapters"
    )]
    pub policy: Option<PolicyArg>,
}

/// Renderer shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    /// `render_sprite(name, x, y)`.
    Sprite,
    /// `render_image(path)` and `render_text(content)`.
    Media,
    /// Both, sprites first.
    #[default]
    All,
}

impl Shape {
    pub fn includes_sprites(self) -> bool {
        matches!(self, Self::Sprite | Self::All)
    }

    pub fn includes_media(self) -> bool {
        matches!(self, Self::Media | Self::All)
    }
}

/// Blank-input policy as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Blank input aborts the run.
    Strict,
    /// Blank input is traced and skipped.
    Lenient,
}

impl From<PolicyArg> for ValidationPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Strict => ValidationPolicy::Strict,
            PolicyArg::Lenient => ValidationPolicy::Lenient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_parses() {
        let cli = Cli::try_parse_from(["retrofit"]).unwrap();
        assert_eq!(cli.shape, Shape::All);
        assert_eq!(cli.policy, None);
        assert_eq!(cli.global.verbose, 0);
    }

    #[test]
    fn shape_and_policy_parse() {
        let cli = Cli::try_parse_from(["retrofit", "--shape", "media", "-p", "lenient"]).unwrap();
        assert_eq!(cli.shape, Shape::Media);
        assert_eq!(cli.policy.map(ValidationPolicy::from), Some(ValidationPolicy::Lenient));
    }

    #[test]
    fn reporting_flags_parse() {
        let cli = Cli::try_parse_from(["retrofit", "-vv", "--config", "r.toml"]).unwrap();
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.config.as_deref(), Some(std::path::Path::new("r.toml")));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["retrofit", "-q", "-v"]).is_err());
    }

    #[test]
    fn shape_membership() {
        assert!(Shape::All.includes_sprites() && Shape::All.includes_media());
        assert!(!Shape::Sprite.includes_media());
        assert!(!Shape::Media.includes_sprites());
    }
}
