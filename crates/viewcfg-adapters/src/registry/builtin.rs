//! Built-in view engines known to every registry.

use viewcfg_core::domain::DEFAULT_ENGINE_TYPE;

/// WebForms (ASPX) engine; the fallback registration.
pub const WEBFORMS: &str = DEFAULT_ENGINE_TYPE;
/// Boo-based "Brail" templating engine.
pub const BRAIL: &str = "Castle.MonoRail.Views.Brail.BooViewEngine";
/// NVelocity templating engine.
pub const NVELOCITY: &str = "Castle.MonoRail.Framework.Views.NVelocity.NVelocityViewEngine";
/// Compiled C#/VB views.
pub const ASPVIEW: &str = "Castle.MonoRail.Views.AspView.AspViewEngine";

/// All built-in engine type names.
pub fn all_engines() -> [&'static str; 4] {
    [WEBFORMS, BRAIL, NVELOCITY, ASPVIEW]
}
