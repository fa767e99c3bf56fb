//! Server-rendered guild pages
//!
//! Templates are compiled into the binary; a directory named by
//! `TEMPLATE_DIR` may override any of them by file name (`guild_info.hbs`,
//! `header.hbs`, ...).

use std::path::Path;

use handlebars::Handlebars;
use modboard_common::AppError;
use serde::Serialize;
use tracing::{debug, info};

const HEADER_PARTIAL: &str = "header";

/// Built-in templates by name
const BUILTIN: [(&str, &str); 4] = [
    (HEADER_PARTIAL, include_str!("../../templates/header.hbs")),
    ("guild_info", include_str!("../../templates/guild_info.hbs")),
    ("guild_config", include_str!("../../templates/guild_config.hbs")),
    ("guild_infractions", include_str!("../../templates/guild_infractions.hbs")),
];

/// Pages served under `/guilds/:gid`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    GuildInfo,
    GuildConfig,
    GuildInfractions,
}

impl Page {
    pub fn template_name(self) -> &'static str {
        match self {
            Self::GuildInfo => "guild_info",
            Self::GuildConfig => "guild_config",
            Self::GuildInfractions => "guild_infractions",
        }
    }
}

/// Handlebars registry holding every page and the shared header partial
#[derive(Debug)]
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    /// Compile the built-in templates, then apply overrides from `dir`
    pub fn new(dir: Option<&str>) -> Result<Self, AppError> {
        let mut handlebars = Handlebars::new();

        for (name, source) in BUILTIN {
            register(&mut handlebars, name, source)?;
        }

        if let Some(dir) = dir {
            let mut overridden = 0;
            for (name, _) in BUILTIN {
                let path = Path::new(dir).join(format!("{name}.hbs"));
                if !path.is_file() {
                    continue;
                }
                let source = std::fs::read_to_string(&path).map_err(|e| {
                    AppError::Template(format!("cannot read {}: {e}", path.display()))
                })?;
                register(&mut handlebars, name, &source)?;
                debug!(template = name, path = %path.display(), "template override loaded");
                overridden += 1;
            }
            info!(dir, overridden, "page template directory applied");
        }

        Ok(Self { handlebars })
    }

    /// Render a page with the given context
    pub fn render<T: Serialize>(&self, page: Page, context: &T) -> Result<String, AppError> {
        self.handlebars
            .render(page.template_name(), context)
            .map_err(|e| AppError::Template(e.to_string()))
    }
}

fn register(handlebars: &mut Handlebars<'static>, name: &str, source: &str) -> Result<(), AppError> {
    let result = if name == HEADER_PARTIAL {
        handlebars.register_partial(name, source)
    } else {
        handlebars.register_template_string(name, source)
    };
    result.map_err(|e| AppError::Template(format!("template {name}: {e}")))
}
