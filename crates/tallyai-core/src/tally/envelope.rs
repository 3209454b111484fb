//! Tally `<ENVELOPE>` document builder.
//!
//! Every request to a Tally server is an XML envelope:
//!
//! ```text
//! <ENVELOPE>
//!   <HEADER> VERSION, TALLYREQUEST, TYPE, ID </HEADER>
//!   <BODY>
//!     <DESC>
//!       <STATICVARIABLES> ... </STATICVARIABLES>   (export requests)
//!       <TDL><TDLMESSAGE> ... </TDLMESSAGE></TDL>   (inline TDL, optional)
//!       <PARAM> ... </PARAM>                         (function arguments)
//!     </DESC>
//!   </BODY>
//! </ENVELOPE>
//! ```
//!
//! Text content and attribute values are escaped; element names are
//! validated when the envelope is rendered.

use tallyai_types::error::TallyError;
use tallyai_types::tally::{yes_no, TallyRequestKind, TallyRequestType};

/// Envelope format version sent in `<VERSION>`.
pub const ENVELOPE_VERSION: u32 = 1;

/// A TDL definition inside `<TDLMESSAGE>` (REPORT, FORM, COLLECTION, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TdlObject {
    tag: String,
    name: String,
    initialize: bool,
    properties: Vec<(String, String)>,
}

impl TdlObject {
    pub fn new(tag: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            name: name.into(),
            initialize: false,
            properties: Vec::new(),
        }
    }

    pub fn report(name: impl Into<String>) -> Self {
        Self::new("REPORT", name)
    }

    pub fn form(name: impl Into<String>) -> Self {
        Self::new("FORM", name)
    }

    pub fn part(name: impl Into<String>) -> Self {
        Self::new("PART", name)
    }

    pub fn line(name: impl Into<String>) -> Self {
        Self::new("LINE", name)
    }

    pub fn field(name: impl Into<String>) -> Self {
        Self::new("FIELD", name)
    }

    pub fn collection(name: impl Into<String>) -> Self {
        Self::new("COLLECTION", name)
    }

    /// Set the `ISINITIALIZE` attribute.
    pub fn initialize(mut self, initialize: bool) -> Self {
        self.initialize = initialize;
        self
    }

    /// Append a child property element; repeated tags are kept in order.
    pub fn property(mut self, tag: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((tag.into(), value.into()));
        self
    }

    fn render(&self, out: &mut String, indent: usize) -> Result<(), TallyError> {
        validate_tag(&self.tag)?;
        let pad = "  ".repeat(indent);
        out.push_str(&format!(
            "{pad}<{tag} NAME=\"{name}\" ISMODIFY=\"No\" ISFIXED=\"No\" ISINITIALIZE=\"{init}\" ISOPTION=\"No\" ISINTERNAL=\"No\">\n",
            tag = self.tag,
            name = escape(&self.name),
            init = yes_no(self.initialize),
        ));
        for (tag, value) in &self.properties {
            write_element(out, indent + 1, tag, value)?;
        }
        out.push_str(&format!("{pad}</{}>\n", self.tag));
        Ok(())
    }
}

/// Builder for a complete Tally request document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    kind: TallyRequestKind,
    request_type: TallyRequestType,
    id: String,
    static_variables: Vec<(String, String)>,
    tdl: Vec<TdlObject>,
    params: Vec<String>,
}

impl Envelope {
    pub fn new(kind: TallyRequestKind, request_type: TallyRequestType, id: impl Into<String>) -> Self {
        Self {
            kind,
            request_type,
            id: id.into(),
            static_variables: Vec::new(),
            tdl: Vec::new(),
            params: Vec::new(),
        }
    }

    /// `Export` request of the given type.
    pub fn export(request_type: TallyRequestType, id: impl Into<String>) -> Self {
        Self::new(TallyRequestKind::Export, request_type, id)
    }

    /// `Execute` request for a TDL function.
    pub fn execute(function: impl Into<String>) -> Self {
        Self::new(TallyRequestKind::Execute, TallyRequestType::TdlFunction, function)
    }

    pub fn kind(&self) -> TallyRequestKind {
        self.kind
    }

    pub fn request_type(&self) -> TallyRequestType {
        self.request_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn static_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.static_variables.push((name.into(), value.into()));
        self
    }

    /// Ask Tally to answer in XML (`SVEXPORTFORMAT = $$SysName:XML`).
    pub fn xml_format(self) -> Self {
        self.static_variable("SVEXPORTFORMAT", "$$SysName:XML")
    }

    pub fn tdl(mut self, object: TdlObject) -> Self {
        self.tdl.push(object);
        self
    }

    pub fn param(mut self, value: impl Into<String>) -> Self {
        self.params.push(value.into());
        self
    }

    /// Render the envelope as an XML string.
    ///
    /// Fails with [`TallyError::InvalidRequest`] when the id is blank or any
    /// element name is not a valid tag.
    pub fn to_xml(&self) -> Result<String, TallyError> {
        if self.id.trim().is_empty() {
            return Err(TallyError::InvalidRequest(
                "request id must not be empty".to_string(),
            ));
        }

        let mut out = String::new();
        out.push_str("<ENVELOPE>\n");
        out.push_str("  <HEADER>\n");
        write_element(&mut out, 2, "VERSION", &ENVELOPE_VERSION.to_string())?;
        write_element(&mut out, 2, "TALLYREQUEST", &self.kind.to_string())?;
        write_element(&mut out, 2, "TYPE", &self.request_type.to_string())?;
        write_element(&mut out, 2, "ID", &self.id)?;
        out.push_str("  </HEADER>\n");
        out.push_str("  <BODY>\n");
        out.push_str("    <DESC>\n");

        if self.kind == TallyRequestKind::Export {
            if self.static_variables.is_empty() {
                out.push_str("      <STATICVARIABLES />\n");
            } else {
                out.push_str("      <STATICVARIABLES>\n");
                for (name, value) in &self.static_variables {
                    write_element(&mut out, 4, name, value)?;
                }
                out.push_str("      </STATICVARIABLES>\n");
            }
        }

        if !self.tdl.is_empty() {
            out.push_str("      <TDL>\n");
            out.push_str("        <TDLMESSAGE>\n");
            for object in &self.tdl {
                object.render(&mut out, 5)?;
            }
            out.push_str("        </TDLMESSAGE>\n");
            out.push_str("      </TDL>\n");
        }

        for param in &self.params {
            write_element(&mut out, 3, "PARAM", param)?;
        }

        out.push_str("    </DESC>\n");
        out.push_str("  </BODY>\n");
        out.push_str("</ENVELOPE>\n");
        Ok(out)
    }
}

fn write_element(out: &mut String, indent: usize, tag: &str, value: &str) -> Result<(), TallyError> {
    validate_tag(tag)?;
    out.push_str(&format!(
        "{}<{tag}>{}</{tag}>\n",
        "  ".repeat(indent),
        escape(value)
    ));
    Ok(())
}

/// Element names: ASCII letter or `_` first, then letters, digits, `_`, `-`, `.`.
fn validate_tag(tag: &str) -> Result<(), TallyError> {
    let mut chars = tag.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(TallyError::InvalidRequest(format!(
            "invalid element name: '{tag}'"
        )))
    }
}

/// Escape text for element content and double-quoted attributes.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
