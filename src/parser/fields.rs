/// Labelled single-line fields of a hexagram section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Diagram,
    Judgment,
    Image,
    Commentary,
    Application,
}

impl Field {
    pub fn prefix(self) -> &'static str {
        match self {
            Field::Diagram => "**卦象**:",
            Field::Judgment => "**卦辞**:",
            Field::Image => "**象辞**:",
            Field::Commentary => "**彖辞**:",
            Field::Application => "**应用**:",
        }
    }
}

/// Value of the first line starting with the field's label, or `""`.
pub fn find_field<S: AsRef<str>>(lines: &[S], field: Field) -> String {
    let prefix = field.prefix();
    lines
        .iter()
        .find_map(|l| l.as_ref().strip_prefix(prefix))
        .map(|rest| rest.trim().to_string())
        .unwrap_or_default()
}
