use std::io::{self, Write};

use crate::{
    analysis::{
        extract::{extract_entries, RouteEntry},
        validate::validate_application,
    },
    config::KoiiConfig,
    reporting::{
        debug::info,
        error::{error, KoiiError},
        route::{render_table, write_table, TableStyle},
    },
    routing::route::Application,
};

/// A validated route listing, ready to be printed.
#[derive(Debug, Clone)]
pub struct Koii {
    entries: Vec<RouteEntry>,
    style: TableStyle,
}

impl Koii {
    pub fn new<A: Application>(app: &A) -> Result<Self, KoiiError> {
        Self::with_config(Some(app), KoiiConfig::default())
    }

    pub fn from_optional<A: Application>(app: Option<&A>) -> Result<Self, KoiiError> {
        Self::with_config(app, KoiiConfig::default())
    }

    /// Validate the application and extract its entries.
    /// Nothing is written to stdout if this fails.
    pub fn with_config<A: Application>(
        app: Option<&A>,
        config: KoiiConfig,
    ) -> Result<Self, KoiiError> {
        let level = config.debug_level;
        config.validate()?;
        let recognized = config.recognized_methods()?;
        let routes = validate_application(app, level).inspect_err(|e| {
            error(e.to_string());
        })?;
        let entries = extract_entries(routes, &recognized, level);
        info(
            level,
            &format!("Listing {} entries from {} routes", entries.len(), routes.len()),
        );
        Ok(Koii {
            entries,
            style: config.table_style(),
        })
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn style(&self) -> &TableStyle {
        &self.style
    }

    pub fn render(&self) -> String {
        render_table(&self.entries, &self.style)
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), KoiiError> {
        write_table(out, &self.entries, &self.style)?;
        Ok(())
    }

    pub fn print(&self) -> Result<(), KoiiError> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_to(&mut lock)
    }
}

/// Validate, extract and print the route table of `app` to stdout.
pub fn print_routes<A: Application>(app: &A) -> Result<(), KoiiError> {
    Koii::new(app)?.print()
}

/// Validate and extract, then write the table to `out`.
/// `out` is left untouched when the application or config is rejected.
pub fn write_routes<A: Application, W: Write>(
    app: Option<&A>,
    config: KoiiConfig,
    out: &mut W,
) -> Result<(), KoiiError> {
    Koii::with_config(app, config)?.write_to(out)
}
