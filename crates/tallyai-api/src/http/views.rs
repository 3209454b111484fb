//! HTML page rendering with minijinja.
//!
//! Templates are compiled into the binary and loaded once into a shared
//! [`Environment`]. HTML auto-escaping applies to every `.html` template.

use minijinja::{context, Environment};

use tallyai_core::chat::page::ChatPageView;

const TEMPLATES: [(&str, &str); 3] = [
    ("layout.html", include_str!("../../templates/layout.html")),
    ("sidebar.html", include_str!("../../templates/sidebar.html")),
    ("chat.html", include_str!("../../templates/chat.html")),
];

/// Read-only template set shared by all page handlers.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Compile all page templates.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Render the full chat page (layout + sidebar + chat content).
    pub fn chat_page(&self, view: &ChatPageView) -> Result<String, minijinja::Error> {
        self.env
            .get_template("chat.html")?
            .render(context! { page => view })
    }
}
