/// Accumulates description lines in the layout build configuration pages expect
///
/// Every line after the first is prefixed with a single space and every line
/// ends with a newline; [`DescriptionBuilder::build`] trims the result.
#[derive(Debug, Default)]
pub struct DescriptionBuilder {
    buffer: String,
}

impl DescriptionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_parameter(&mut self, parameter: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push(' ');
        }
        self.buffer.push_str(parameter);
        self.buffer.push('\n');
    }

    pub fn build(self) -> String {
        self.buffer.trim().to_string()
    }
}
