use crate::{
    reporting::{
        error::{InvalidReason, KoiiError},
        level::DebugLevel,
        warning::warning,
    },
    routing::route::{Application, Route},
};

/// Check that an application exposes a route collection worth listing.
/// The collection must be non-empty and hold at least one route registered
/// by the application or predefined by the framework.
pub fn validate_application<A: Application>(
    app: Option<&A>,
    level: DebugLevel,
) -> Result<&[A::Route], KoiiError> {
    let app = app.ok_or(KoiiError::InvalidApplication(InvalidReason::Missing))?;
    let routes = match app.routes() {
        Some(routes) if !routes.is_empty() => routes,
        _ => return Err(KoiiError::InvalidApplication(InvalidReason::NoRoutes)),
    };
    let unrecognized = routes
        .iter()
        .filter(|route| !route.kind().is_recognized())
        .count();
    if unrecognized == routes.len() {
        return Err(KoiiError::InvalidApplication(
            InvalidReason::NoRecognizedRoutes,
        ));
    }
    if unrecognized > 0 {
        warning(
            level,
            format!(
                "{} of {} routes are neither application nor predefined routes.",
                unrecognized,
                routes.len()
            ),
        );
    }
    Ok(routes)
}
