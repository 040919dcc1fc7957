//! Static product facts for the listing.

use i18n_embed::fluent::FluentLanguageLoader;

use crate::i18n::fl;

/// Product photo served from static hosting.
pub const PRODUCT_IMAGE: &str = "/lovable-uploads/0254e1e5-77a9-479e-b130-d83df4650129.png";
/// Intrinsic size of [`PRODUCT_IMAGE`] in pixels (square).
pub const PRODUCT_IMAGE_SIZE: u32 = 400;

/// One label/value pair of the specification table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecificationRow {
    pub name: String,
    pub value: String,
}

impl SpecificationRow {
    fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// The six specification rows, in display order, localized through `loader`.
pub fn specification_rows(loader: &FluentLanguageLoader) -> Vec<SpecificationRow> {
    vec![
        SpecificationRow::new(
            fl!(loader, "spec-material"),
            fl!(loader, "spec-material-value"),
        ),
        SpecificationRow::new(
            fl!(loader, "spec-dimensions"),
            fl!(loader, "spec-dimensions-value"),
        ),
        SpecificationRow::new(fl!(loader, "spec-weight"), fl!(loader, "spec-weight-value")),
        SpecificationRow::new(
            fl!(loader, "spec-inscription"),
            fl!(loader, "spec-inscription-value"),
        ),
        SpecificationRow::new(fl!(loader, "spec-age"), fl!(loader, "spec-age-value")),
        SpecificationRow::new(fl!(loader, "spec-origin"), fl!(loader, "spec-origin-value")),
    ]
}
