//! Annotation completion tags.
//!
//! A completion tag associates a fixed annotation name and insertion
//! template with a documentation string, and can render its parameter-list
//! fragment through a host-provided formatter (completion popups want the
//! parameter region visually distinguished from the surrounding text).

#![forbid(unsafe_code)]

/// Formatter surface a completion host implements.
///
/// `parameters(true)` opens the emphasized-parameter region and
/// `parameters(false)` closes it; `text` appends literal text in whichever
/// region is active.
pub trait TagFormatter {
    fn text(&mut self, s: &str);
    fn parameters(&mut self, active: bool);
}

/// Plain-text formatter: parameter regions render without any markup.
#[derive(Debug, Default)]
pub struct PlainTextFormatter {
    out: String,
}

impl PlainTextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl TagFormatter for PlainTextFormatter {
    fn text(&mut self, s: &str) {
        self.out.push_str(s);
    }

    fn parameters(&mut self, _active: bool) {}
}

/// One annotation completion item: name, insertion template, documentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionTag {
    name: String,
    insert_template: String,
    documentation: String,
    parameters: Vec<String>,
}

impl CompletionTag {
    pub fn new(
        name: impl Into<String>,
        insert_template: impl Into<String>,
        documentation: impl Into<String>,
        parameters: Vec<String>,
    ) -> Self {
        CompletionTag {
            name: name.into(),
            insert_template: insert_template.into(),
            documentation: documentation.into(),
            parameters,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn insert_template(&self) -> &str {
        &self.insert_template
    }

    pub fn documentation(&self) -> &str {
        &self.documentation
    }

    /// Render the parameter-list fragment, e.g. `({constraints})` with the
    /// parameter names inside the emphasized region.
    pub fn format_parameters(&self, formatter: &mut dyn TagFormatter) {
        formatter.text("({");
        formatter.parameters(true);
        formatter.text(&self.parameters.join(", "));
        formatter.parameters(false);
        formatter.text("})");
    }
}

/// The Symfony validator `All` constraint tag.
pub fn all_tag() -> CompletionTag {
    CompletionTag::new(
        "All",
        "@All({${constraints}})",
        "Checks every element of a traversable value against the embedded list of constraints.",
        vec!["constraints".to_string()],
    )
}
