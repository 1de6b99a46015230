/// Description and reference number split out of a composite description cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extracted {
    pub description: String,
    pub number: String,
}

impl Extracted {
    /// Input that carries no reference number.
    pub fn unchanged(description: &str) -> Self {
        Self {
            description: description.to_string(),
            number: String::new(),
        }
    }
}

pub trait DescriptionExtractor {
    fn extract(description: &str) -> Extracted;

    fn is_supported(description: &str) -> bool {
        !Self::extract(description).number.is_empty()
    }
}
